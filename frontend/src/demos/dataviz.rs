// Data visualization demo
// Static two-column page: tips scatter chart beside a description

use crate::chart::{Chart, ChartKind};
use crate::datasets::{group_by, TIPS};
use dashui::prelude::*;
use dashui::Result;
use std::time::{SystemTime, UNIX_EPOCH};

pub fn render(ui: &Ui) -> Result<()> {
    let page = page("Data Visualization App").build(ui);
    page.add(
        &banner("Simple Data Visualization")
            .subtitle("A demonstration of charts and dashui")
            .build(ui),
    );

    let main_row = row(Layout::Equal(2)).build(ui)?;
    page.add(&main_row);
    let (plot_col, text_col) = (&main_row.columns()[0], &main_row.columns()[1]);

    let chart = Chart::xy(
        ChartKind::Scatter,
        group_by(TIPS, |t| t.sex, |t| (t.total_bill, t.tip)),
    )
    .title("Restaurant Tips Analysis")
    .axis_labels("total_bill", "tip")
    .size(500, 400);
    plot_col.disp(&chart, true);

    text_col.header("About the Data");
    text_col.write(
        "This chart displays the relationship between the total bill and the tip amount \
         at a restaurant, colored by the gender of the person paying the bill.",
        true,
    );
    text_col.write_html(
        "The data is from the <code>tips</code> dataset bundled with the demos.",
        true,
    );

    page.write_html("<hr>", true);
    let footer = container().class_name("text-center text-muted").build(ui)?;
    page.add(&footer);
    footer.write_html(
        &format!("<small>Created with dashui &copy; {}</small>", current_year()),
        true,
    );
    Ok(())
}

fn current_year() -> i64 {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_secs());
    year_of_day(i64::try_from(secs / 86_400).unwrap_or(0))
}

// Gregorian year of a day count since 1970-01-01
fn year_of_day(days: i64) -> i64 {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let january_or_february = mp >= 10;
    yoe + era * 400 + i64::from(january_or_february)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_boundaries() {
        assert_eq!(year_of_day(0), 1970);
        assert_eq!(year_of_day(364), 1970);
        assert_eq!(year_of_day(365), 1971);
        // 2000-02-29 and 2024-12-31
        assert_eq!(year_of_day(11_016), 2000);
        assert_eq!(year_of_day(20_088), 2024);
        assert_eq!(year_of_day(20_089), 2025);
    }

    #[test]
    fn page_layout() {
        let ui = Ui::new();
        render(&ui).unwrap();
        let html = ui.to_html();
        assert!(html.contains("<title>Data Visualization App</title>"));
        assert!(html.contains(r#"class="col"><figure class="dash-chart">"#));
        assert!(html.contains("<h2>About the Data</h2>"));
        assert!(html.contains("<code>tips</code>"));
        assert!(html.contains(r#"class="text-center text-muted"><p><small>Created with dashui © "#));
    }
}
