// Demo dashboards
// Each demo builds a page on a fresh Ui and can replay scripted interactions

pub mod dataviz;
pub mod interactive_dashboard;
pub mod interactive_form;
pub mod kitchen_sink;
pub mod modal;
pub mod multi_column;

use dashui::{Result, Ui};

pub struct Demo {
    pub name: &'static str,
    pub about: &'static str,
    pub render: fn(&Ui) -> Result<()>,
    pub simulate: fn(&Ui) -> Result<()>,
}

pub const DEMOS: &[Demo] = &[
    Demo {
        name: "kitchen-sink",
        about: "Every control, content type and alert on one page",
        render: kitchen_sink::render,
        simulate: kitchen_sink::simulate,
    },
    Demo {
        name: "dataviz",
        about: "Scatter chart next to descriptive text",
        render: dataviz::render,
        simulate: dataviz::render,
    },
    Demo {
        name: "interactive-dashboard",
        about: "Dataset picker redrawing a chart",
        render: interactive_dashboard::render,
        simulate: interactive_dashboard::simulate,
    },
    Demo {
        name: "interactive-form",
        about: "Form with validation alerts",
        render: interactive_form::render,
        simulate: interactive_form::simulate,
    },
    Demo {
        name: "multi-column",
        about: "Sales dashboard with summary row, form and chart",
        render: multi_column::render,
        simulate: multi_column::simulate,
    },
    Demo {
        name: "modal",
        about: "Button opening a modal dialog",
        render: modal::render,
        simulate: modal::simulate,
    },
];

pub fn find(name: &str) -> Option<&'static Demo> {
    DEMOS.iter().find(|demo| demo.name == name)
}
