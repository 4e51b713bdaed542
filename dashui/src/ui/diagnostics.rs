use super::ComponentId;
use std::fmt;

/// Non-fatal configuration warning. Construction continues with the values
/// as given; the warning is logged and kept on the [`crate::Ui`].
#[derive(Clone, Debug, PartialEq)]
pub enum Diagnostic {
    /// Explicit column widths that do not add up to the 12-unit grid.
    ColumnWidths {
        row: ComponentId,
        widths: Vec<u32>,
        sum: u64,
    },
    /// `values` and `labels` of different lengths; pairing stopped at the
    /// shorter list.
    LabelMismatch {
        component: ComponentId,
        values: usize,
        labels: usize,
    },
    /// Heading level outside 1..=6, clamped.
    HeadingLevel { requested: u8, used: u8 },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::ColumnWidths { row, widths, sum } => write!(
                f,
                "row {row}: column widths {widths:?} sum to {sum}, not 12"
            ),
            Diagnostic::LabelMismatch {
                component,
                values,
                labels,
            } => write!(
                f,
                "{component}: {values} values but {labels} labels, extra entries dropped"
            ),
            Diagnostic::HeadingLevel { requested, used } => {
                write!(f, "heading level {requested} out of range, using {used}")
            }
        }
    }
}
