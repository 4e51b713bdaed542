// Kitchen sink demo
// Charts picked by buttons, every content type, every input control and alerts

use crate::chart::Chart;
use dashui::prelude::*;
use dashui::Result;

const FRUITS: [&str; 4] = ["apple", "blueberry", "cherry", "orange"];
const COUNTS: [f64; 4] = [40.0, 100.0, 30.0, 55.0];

fn figure(index: &str, width: u32, height: u32) -> Chart {
    let chart = match index {
        "1" => Chart::line(&FRUITS, &COUNTS),
        "2" => Chart::dots(&FRUITS, &COUNTS),
        _ => Chart::bar(&FRUITS, &COUNTS),
    };
    chart.size(width, height)
}

fn big_figure(index: &str) -> Chart {
    figure(index, 1000, 400)
}

pub struct KitchenSink {
    pub figure_buttons: Vec<Button>,
    pub figure_container: Container,
    pub select: Select,
    pub checkboxes: Vec<Checkbox>,
    pub radios: RadioGroup,
    pub slider: Slider,
    pub text_input: TextInput,
    pub text_area: TextArea,
    pub output: Container,
    pub dismissible: Alert,
}

pub fn build(ui: &Ui) -> Result<KitchenSink> {
    let page = page("Kitchen sink").build(ui);
    page.banner(
        "Choose a graph",
        Some("Select a graph and it will be drawn bigger, below"),
    );

    let cols = page.make_cols(Layout::Equal(3));
    let figure_container = container().build(ui)?;
    let mut figure_buttons = Vec::new();
    for (i, col) in cols.iter().enumerate() {
        col.disp(&figure(&i.to_string(), 300, 300), true);
        let button = button("Select fig")
            .callback_name("cb")
            .value(i.to_string())
            .build(ui);
        col.add(&button);
        figure_buttons.push(button);
    }
    let figures = figure_container.clone();
    ui.register_callback("cb", move |event| {
        figures.disp(&big_figure(event.value()), false);
    });

    page.write_html("---", true);
    page.small_banner("Content types");

    let content_cols = page.make_cols(Layout::Equal(3));
    let (c1, c2, c3) = (&content_cols[0], &content_cols[1], &content_cols[2]);
    c1.title("This is a Title")
        .header("This is a Header")
        .subheader("This is a Subheader");
    for level in 1..=6 {
        c2.headertag(&format!("header tag level {level}"), level);
    }
    c3.write("Write some plain text", true);
    c3.write_html("Write text with *markdown text* and <b>HTML text</b>", true);

    let controls = container().build(ui)?;
    let control_cols = controls.make_cols(Layout::Equal(2));
    let output = container().build(ui)?;
    output.set_style("white-space: pre-wrap");

    let select = select("Select a number")
        .values([1, 2, 3])
        .labels(["one", "two", "three"])
        .callback_name("selectcb")
        .build(ui);
    let checkboxes = vec![
        checkbox("Select this for 1").value(1).callback_name("checkcb").build(ui),
        checkbox("Select this for 2").value(2).callback_name("checkcb").build(ui),
    ];
    let radios = radio_group("Choose one letter")
        .values(['A', 'B', 'C'])
        .initial_value('B')
        .callback_name("radiocb")
        .build(ui);
    control_cols[0].add(&select);
    for checkbox in &checkboxes {
        control_cols[0].add(checkbox);
    }
    control_cols[0].add(&radios);

    let slider = slider("slider")
        .range(0.0, 100.0)
        .initial_value(50.0)
        .step(1.0)
        .callback_name("get_slider_value")
        .build(ui);
    let text_input = text_input("Text Input")
        .placeholder("Type here...")
        .callback_name("get_input_value")
        .build(ui);
    let text_area = text_area("Multi-line Input")
        .placeholder("Enter a long text...")
        .rows(4)
        .callback_name("get_textarea_value")
        .build(ui);
    control_cols[1].add(&slider).add(&text_input).add(&text_area);

    let out = output.clone();
    ui.register_callback("selectcb", move |event| {
        out.disp(event.value(), true);
    });
    let out = output.clone();
    ui.register_callback("checkcb", move |event| {
        out.disp(&format!("{} {}", event.checked, event.value()), true);
    });
    let out = output.clone();
    ui.register_callback("radiocb", move |event| {
        out.disp(&format!("Radio selected: {}", event.value()), true);
    });
    let out = output.clone();
    ui.register_callback("get_slider_value", move |event| {
        out.disp(event.value(), false);
    });
    let out = output.clone();
    ui.register_callback("get_input_value", move |event| {
        out.disp(event.value(), false);
    });
    let out = output.clone();
    ui.register_callback("get_textarea_value", move |event| {
        out.disp(&format!("Text Area content:\n{}", event.value()), false);
    });

    page.write_html("---", true);
    page.small_banner("Alerts");

    let alerts = container().build(ui)?;
    alerts.add(&alert("This is a standard primary alert.", Category::Primary).build(ui));
    alerts.add(&alert("This is a <strong>danger</strong> alert!", Category::Danger).build(ui));
    let dismissible = alert(
        "This is a dismissible success alert. Click the 'x' to close it.",
        Category::Success,
    )
    .dismissible(true)
    .build(ui);
    alerts.add(&dismissible);

    Ok(KitchenSink {
        figure_buttons,
        figure_container,
        select,
        checkboxes,
        radios,
        slider,
        text_input,
        text_area,
        output,
        dismissible,
    })
}

pub fn render(ui: &Ui) -> Result<()> {
    build(ui).map(|_| ())
}

pub fn simulate(ui: &Ui) -> Result<()> {
    let sink = build(ui)?;
    ui.click(sink.figure_buttons[1].node())?;
    ui.change(sink.select.select_node(), "2")?;
    ui.toggle(sink.checkboxes[0].input_node())?;
    if let Some(radio) = sink.radios.radio_for("C") {
        ui.choose(radio)?;
    }
    ui.change(sink.slider.input_node(), "72")?;
    ui.input(sink.text_input.input_node(), "hello")?;
    ui.input(sink.text_area.textarea_node(), "first line\nsecond line")?;
    if let Some(close) = sink.dismissible.close_button() {
        ui.click(close)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn figure_buttons_redraw_the_big_figure() {
        let ui = Ui::new();
        let sink = build(&ui).unwrap();
        assert_eq!(sink.figure_buttons.len(), 3);
        assert!(sink.figure_container.children().is_empty());

        ui.click(sink.figure_buttons[2].node()).unwrap();
        let html = sink.figure_container.inner_html();
        assert!(html.contains(r#"width="1000""#));
        assert!(html.contains("<circle"));

        ui.click(sink.figure_buttons[0].node()).unwrap();
        let html = sink.figure_container.inner_html();
        assert_eq!(html.matches("<figure").count(), 1);
        assert!(html.contains("<rect"));
    }

    #[test]
    fn controls_report_into_output() {
        let ui = Ui::new();
        let sink = build(&ui).unwrap();

        ui.change(sink.select.select_node(), "3").unwrap();
        ui.toggle(sink.checkboxes[1].input_node()).unwrap();
        let c = sink.radios.radio_for("C").unwrap();
        ui.choose(c).unwrap();
        assert_eq!(
            sink.output.inner_html(),
            "<div>3</div><div>true 2</div><div>Radio selected: C</div>"
        );

        ui.input(sink.text_area.textarea_node(), "a\nb").unwrap();
        assert_eq!(sink.output.inner_html(), "<div>Text Area content:\na\nb</div>");
        assert!(sink.output.outer_html().contains(r#"style="white-space: pre-wrap""#));
    }

    #[test]
    fn content_types_and_alerts_render() {
        let ui = Ui::new();
        build(&ui).unwrap();
        let html = ui.to_html();
        assert!(html.contains("<h6>header tag level 6</h6>"));
        assert!(html.contains("<p>Write text with <em>markdown text</em> and <b>HTML text</b></p>"));
        assert!(html.contains("<hr>"));
        assert!(html.contains(r#"class="alert alert-danger""#));
        assert!(ui.diagnostics().is_empty());
    }

    #[test]
    fn simulation_dismisses_the_alert() {
        let ui = Ui::new();
        simulate(&ui).unwrap();
        assert!(!ui.to_html().contains("dismissible success alert"));
    }
}
