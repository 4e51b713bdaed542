// Modal demo
// A button opening a modal dialog

use dashui::prelude::*;
use dashui::Result;

pub struct ModalDemo {
    pub modal: Modal,
    pub open: Button,
}

pub fn build(ui: &Ui) -> Result<ModalDemo> {
    let page = page("Modal Example").build(ui);

    let dialog = modal("My Modal")
        .body("This is the **modal body**.")
        .footer("*This is the footer*")
        .build(ui);
    dialog.add_to(page.node());

    let target = dialog.clone();
    let open = button("Open Modal")
        .on_click(move |_, _| target.show())
        .build(ui);
    open.add_to(page.node());

    Ok(ModalDemo {
        modal: dialog,
        open,
    })
}

pub fn render(ui: &Ui) -> Result<()> {
    build(ui).map(|_| ())
}

pub fn simulate(ui: &Ui) -> Result<()> {
    let demo = build(ui)?;
    ui.click(demo.open.node())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_opens_and_close_hides() {
        let ui = Ui::new();
        let demo = build(&ui).unwrap();
        assert!(!demo.modal.is_shown());

        ui.click(demo.open.node()).unwrap();
        assert!(demo.modal.is_shown());
        assert!(ui.to_html().contains("<p>This is the <strong>modal body</strong>.</p>"));

        ui.click(demo.modal.close_button()).unwrap();
        assert!(!demo.modal.is_shown());
    }
}
