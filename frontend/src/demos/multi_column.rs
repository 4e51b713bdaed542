// Multi column demo
// Sales dashboard: summary banners, a record form and a chart of sales by region

use crate::chart::Chart;
use dashui::prelude::*;
use dashui::Result;
use indexmap::IndexMap;
use std::cell::RefCell;
use std::rc::Rc;

const BAR_COLORS: [&str; 4] = ["#007bff", "#28a745", "#ffc107", "#dc3545"];

pub type SalesData = Rc<RefCell<IndexMap<String, u64>>>;

pub struct SalesDashboard {
    pub product: TextInput,
    pub region: Select,
    pub amount: TextInput,
    pub submit: Button,
    pub result: Container,
    pub chart: Container,
    pub sales: SalesData,
}

fn initial_sales() -> IndexMap<String, u64> {
    [("North", 1000), ("South", 1500), ("East", 800), ("West", 1200)]
        .into_iter()
        .map(|(region, sales)| (region.to_string(), sales))
        .collect()
}

fn draw_chart(chart: &Container, sales: &IndexMap<String, u64>) {
    let regions: Vec<&str> = sales.keys().map(String::as_str).collect();
    let values: Vec<f64> = sales.values().map(|v| *v as f64).collect();
    let figure = Chart::bar(&regions, &values)
        .title("Sales by Region")
        .axis_labels("Region", "Sales Amount ($)")
        .colors(&BAR_COLORS)
        .size(700, 400);
    chart.clear().disp(&figure, false);
}

pub fn build(ui: &Ui) -> Result<SalesDashboard> {
    let page = page("Sales Dashboard").width(PageWidth::Narrow).build(ui);
    page.add(
        &banner("Sales Dashboard")
            .subtitle("Real-time Metrics & Insights")
            .build(ui),
    );

    let summary = row(Layout::Widths(vec![4, 4, 4])).build(ui)?;
    let figures = ["📈 Revenue: $12,450", "🛒 Orders: 235", "👥 Customers: 89"];
    for (column, text) in summary.columns().iter().zip(figures) {
        column.add(&SmallBanner::new(ui, text));
    }
    page.add(&summary);

    let sales: SalesData = Rc::new(RefCell::new(initial_sales()));

    let form_row = row(Layout::Widths(vec![6, 6])).build(ui)?;
    let form = form_row.columns()[0].clone();
    let result = form_row.columns()[1].clone();
    page.add(&form_row);

    let product = text_input("Product Name")
        .placeholder("e.g., Widget X")
        .build(ui);
    let regions: Vec<String> = sales.borrow().keys().cloned().collect();
    let region = select("Region").values(regions).build(ui);
    let amount = text_input("Sales Amount")
        .placeholder("e.g., 1000")
        .build(ui);
    form.add(&product).add(&region).add(&amount);

    let chart = container().build(ui)?;
    page.add(&chart);
    draw_chart(&chart, &sales.borrow());

    let (product_field, region_field, amount_field) =
        (product.clone(), region.clone(), amount.clone());
    let (results, chart_out, data) = (result.clone(), chart.clone(), sales.clone());
    let submit = button("Add Record")
        .on_click(move |button, _| {
            let product = product_field.value().trim().to_string();
            let region = region_field.value().unwrap_or_default();
            let amount = amount_field.value().trim().to_string();

            results.clear();
            let valid_amount = !amount.is_empty() && amount.chars().all(|c| c.is_ascii_digit());
            let parsed = amount.parse::<u64>().ok().filter(|_| valid_amount);
            let alert = match parsed {
                Some(value) if !product.is_empty() && !region.is_empty() => {
                    *data.borrow_mut().entry(region.clone()).or_insert(0) += value;
                    log::info!("recorded {value} for {product} in {region}");
                    draw_chart(&chart_out, &data.borrow());
                    alert(
                        format!(
                            "**Product:** {product}<br>**Region:** {region}<br>**Sales Added:** ${value}"
                        ),
                        Category::Success,
                    )
                }
                _ => alert("Please complete all fields correctly.", Category::Danger),
            };
            results.add(&alert.dismissible(true).build(button.ui()));
        })
        .build(ui);
    form.add(&submit);

    Ok(SalesDashboard {
        product,
        region,
        amount,
        submit,
        result,
        chart,
        sales,
    })
}

pub fn render(ui: &Ui) -> Result<()> {
    build(ui).map(|_| ())
}

pub fn simulate(ui: &Ui) -> Result<()> {
    let dashboard = build(ui)?;
    ui.input(dashboard.product.input_node(), "Widget X")?;
    ui.change(dashboard.region.select_node(), "East")?;
    ui.input(dashboard.amount.input_node(), "250")?;
    ui.click(dashboard.submit.node())?;
    Ok(())
}
