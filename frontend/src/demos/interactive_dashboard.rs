// Interactive dashboard demo
// Sidebar dataset picker redrawing the chart in the main column

use crate::chart::{Chart, ChartKind};
use crate::datasets::{gapminder_oceania, group_by, IRIS, TIPS};
use dashui::prelude::*;
use dashui::Result;

pub struct Dashboard {
    pub dataset: Select,
    pub plot: Container,
}

fn dataset_chart(name: &str) -> Chart {
    let chart = match name {
        "iris" => Chart::xy(
            ChartKind::Scatter,
            group_by(IRIS, |r| r.species, |r| (r.sepal_width, r.sepal_length)),
        )
        .title("Iris Dataset")
        .axis_labels("sepal_width", "sepal_length"),
        "gapminder" => Chart::xy(ChartKind::Line, gapminder_oceania())
            .title("Gapminder (Oceania)")
            .axis_labels("year", "lifeExp"),
        _ => Chart::xy(
            ChartKind::Scatter,
            group_by(TIPS, |t| t.smoker, |t| (t.total_bill, t.tip)),
        )
        .title("Tips Dataset")
        .axis_labels("total_bill", "tip"),
    };
    chart.size(700, 450)
}

fn update_plot(select: &Select, plot: &Container) {
    let name = select.value().unwrap_or_default();
    log::debug!("drawing dataset {name}");
    plot.clear().disp(&dataset_chart(&name), true);
}

pub fn build(ui: &Ui) -> Result<Dashboard> {
    let page = page("Interactive Dashboard").build(ui);
    page.add(
        &banner("Interactive Dashboard")
            .subtitle("Select a dataset to visualize")
            .build(ui),
    );

    let main_row = row(Layout::Widths(vec![3, 9])).build(ui)?;
    page.add(&main_row);
    let (controls_col, plot_col) = (&main_row.columns()[0], &main_row.columns()[1]);

    controls_col.header("Controls");
    let plot = container().build(ui)?;
    plot_col.add(&plot);

    let target = plot.clone();
    let dataset = select("Choose a Dataset:")
        .values(["tips", "iris", "gapminder"])
        .labels(["Restaurant Tips", "Iris Flowers", "Gapminder"])
        .on_change(move |select, _| update_plot(select, &target))
        .build(ui);
    controls_col.add(&dataset);

    update_plot(&dataset, &plot);
    Ok(Dashboard { dataset, plot })
}

pub fn render(ui: &Ui) -> Result<()> {
    build(ui).map(|_| ())
}

pub fn simulate(ui: &Ui) -> Result<()> {
    let dashboard = build(ui)?;
    ui.change(dashboard.dataset.select_node(), "iris")?;
    ui.change(dashboard.dataset.select_node(), "gapminder")?;
    Ok(())
}
