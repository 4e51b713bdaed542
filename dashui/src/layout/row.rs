// Row Component
// Grid row pre-populated with its column containers

use super::container::{Container, ContainerBuilder, ContainerRole};
use crate::components::base::{Component, ComponentBase};
use crate::tokens::classes;
use crate::ui::{Diagnostic, Ui};

/// Bootstrap grid units in a full row.
pub const GRID_UNITS: u32 = 12;

/// Column layout of a row: `n` equal `col` columns, or one `col-<w>` column
/// per explicit width.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Layout {
    Equal(usize),
    Widths(Vec<u32>),
}

impl From<usize> for Layout {
    fn from(count: usize) -> Self {
        Layout::Equal(count)
    }
}

impl From<Vec<u32>> for Layout {
    fn from(widths: Vec<u32>) -> Self {
        Layout::Widths(widths)
    }
}

impl From<&[u32]> for Layout {
    fn from(widths: &[u32]) -> Self {
        Layout::Widths(widths.to_vec())
    }
}

impl<const N: usize> From<[u32; N]> for Layout {
    fn from(widths: [u32; N]) -> Self {
        Layout::Widths(widths.to_vec())
    }
}

impl Layout {
    fn column_classes(&self) -> Vec<String> {
        match self {
            Layout::Equal(count) => vec![classes::COLUMN.to_string(); *count],
            Layout::Widths(widths) => widths.iter().map(|w| classes::column_width(*w)).collect(),
        }
    }
}

/// A row under the page. Same parent options as [`super::container`].
pub fn row(layout: impl Into<Layout>) -> ContainerBuilder {
    ContainerBuilder::new().layout(layout.into())
}

/// Build a detached row with its columns already attached.
pub(crate) fn build(ui: &Ui, layout: Layout, extra_class: Option<&str>) -> Container {
    let base = ComponentBase::new(ui, "div");
    match extra_class {
        Some(extra) => base.set_class(&format!("{} {extra}", classes::ROW)),
        None => base.set_class(classes::ROW),
    }

    if let Layout::Widths(widths) = &layout {
        let sum: u64 = widths.iter().copied().map(u64::from).sum();
        if sum != u64::from(GRID_UNITS) {
            ui.warn(Diagnostic::ColumnWidths {
                row: base.id().clone(),
                widths: widths.clone(),
                sum,
            });
        }
    }

    let columns: Vec<Container> = layout
        .column_classes()
        .iter()
        .map(|class| {
            let column = Container::plain(ui, Some(class));
            column.add_to(base.node());
            column
        })
        .collect();
    log::debug!("row {} with {} column(s)", base.id(), columns.len());

    Container::with_role(
        base,
        ContainerRole::Row {
            columns: columns.into(),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_columns() {
        let ui = Ui::new();
        let row = row(Layout::Equal(3)).detached().build(&ui).unwrap();
        assert_eq!(row.class_name().as_deref(), Some("row"));
        assert_eq!(row.columns().len(), 3);
        for column in row.columns() {
            assert_eq!(column.class_name().as_deref(), Some("col"));
        }
        assert_eq!(
            row.children(),
            row.columns().iter().map(|c| c.node()).collect::<Vec<_>>()
        );
        assert!(ui.diagnostics().is_empty());
    }

    #[test]
    fn explicit_widths_summing_to_twelve() {
        let ui = Ui::new();
        let row = row(Layout::Widths(vec![3, 9])).detached().build(&ui).unwrap();
        let classes: Vec<_> = row
            .columns()
            .iter()
            .filter_map(|c| c.class_name())
            .collect();
        assert_eq!(classes, vec!["col-3", "col-9"]);
        assert!(ui.diagnostics().is_empty());
    }

    #[test]
    fn bad_widths_warn_but_still_build() {
        let ui = Ui::new();
        let row = row(Layout::Widths(vec![4, 4])).detached().build(&ui).unwrap();
        assert_eq!(row.columns().len(), 2);
        assert_eq!(
            ui.diagnostics(),
            vec![Diagnostic::ColumnWidths {
                row: row.id().clone(),
                widths: vec![4, 4],
                sum: 8,
            }]
        );
    }

    #[test]
    fn huge_widths_warn_instead_of_overflowing() {
        let ui = Ui::new();
        let row = row(Layout::Widths(vec![u32::MAX, 1]))
            .detached()
            .build(&ui)
            .unwrap();
        assert_eq!(row.columns().len(), 2);
        assert_eq!(
            ui.diagnostics(),
            vec![Diagnostic::ColumnWidths {
                row: row.id().clone(),
                widths: vec![u32::MAX, 1],
                sum: u64::from(u32::MAX) + 1,
            }]
        );
    }

    #[test]
    fn indexed_column_access() {
        let ui = Ui::new();
        let row = row(Layout::Equal(2)).detached().build(&ui).unwrap();
        assert!(row.column(1).is_some());
        assert!(row.column(2).is_none());
    }
}
