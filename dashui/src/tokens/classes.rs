// Bootstrap class strings used by the components.
// Callers may rely on them for styling; nothing here is validated.

pub const BUTTON_PRIMARY: &str = "btn btn-primary";
pub const BUTTON_CLOSE: &str = "btn-close";

pub const FORM_GROUP: &str = "mb-3";
pub const FORM_LABEL: &str = "form-label";
pub const FORM_CONTROL: &str = "form-control";
pub const FORM_SELECT: &str = "form-select";
pub const FORM_RANGE: &str = "form-range";
pub const FORM_CHECK: &str = "form-check";
pub const FORM_CHECK_INPUT: &str = "form-check-input";
pub const FORM_CHECK_LABEL: &str = "form-check-label";
pub const FIELDSET_LEGEND: &str = "col-form-label pt-0";

pub const ALERT_DISMISSIBLE: &str = "alert-dismissible fade show";

pub const BANNER: &str = "bg-primary text-center text-white p-2 my-2";
pub const BANNER_TITLE: &str = "display-3";
pub const BANNER_SUBTITLE: &str = "lead";
pub const SMALL_BANNER: &str = "bg-primary text-center text-white p-2 my-1";
pub const SMALL_BANNER_TITLE: &str = "display-4";

pub const MODAL: &str = "modal fade";
pub const MODAL_SHOWN: &str = "modal fade show";
pub const MODAL_DIALOG: &str = "modal-dialog";
pub const MODAL_CONTENT: &str = "modal-content";
pub const MODAL_HEADER: &str = "modal-header";
pub const MODAL_TITLE: &str = "modal-title";
pub const MODAL_BODY: &str = "modal-body";
pub const MODAL_FOOTER: &str = "modal-footer";

pub const ROW: &str = "row";
pub const COLUMN: &str = "col";
pub const PAGE_NARROW: &str = "container";

/// Width class for an explicitly sized column, `col-4` for a third.
pub fn column_width(width: u32) -> String {
    format!("{COLUMN}-{width}")
}
