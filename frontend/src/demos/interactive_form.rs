// Interactive form demo
// Name and color form answering with a dismissible alert

use dashui::prelude::*;
use dashui::Result;

pub struct Form {
    pub name: TextInput,
    pub color: Select,
    pub submit: Button,
    pub result: Container,
}

pub fn build(ui: &Ui) -> Result<Form> {
    let page = page("Demo App").width(PageWidth::Narrow).build(ui);

    let form = container().build(ui)?;
    page.add(&form);

    let name = text_input("Your Name")
        .placeholder("Enter your name")
        .build(ui);
    let color = select("Favorite Color")
        .values(["red", "blue", "green"])
        .labels(["Red", "Blue", "Green"])
        .build(ui);

    let result = container().build(ui)?;
    page.add(&result);

    let (name_field, color_field, results) = (name.clone(), color.clone(), result.clone());
    let submit = button("Submit")
        .on_click(move |button, _| {
            let name = name_field.value().trim().to_string();
            let color = color_field.value().unwrap_or_default();
            results.clear();
            let alert = if name.is_empty() {
                alert("Please enter your name.", Category::Warning)
            } else {
                alert(
                    format!("**Hello {name}!** Your favorite color is **{color}**."),
                    Category::Success,
                )
            };
            results.add(&alert.dismissible(true).build(button.ui()));
        })
        .build(ui);

    form.add(&name).add(&color).add(&submit);
    Ok(Form {
        name,
        color,
        submit,
        result,
    })
}

pub fn render(ui: &Ui) -> Result<()> {
    build(ui).map(|_| ())
}

pub fn simulate(ui: &Ui) -> Result<()> {
    let form = build(ui)?;
    ui.click(form.submit.node())?;
    ui.input(form.name.input_node(), "  Ada  ")?;
    ui.change(form.color.select_node(), "blue")?;
    ui.click(form.submit.node())?;
    Ok(())
}
