pub mod alert;
pub mod date_picker;
pub mod drop_zone;
pub mod file_preview;
pub mod form_validation;
pub mod navbar;
pub mod password_toggle;
pub mod tooltip;
