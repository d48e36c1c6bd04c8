//! Third-party widget libraries the enhancer delegates to.
//!
//! Behaviors only see these traits, so pages can run with the real libraries
//! and tests with recording fakes.

mod bootstrap;
mod flatpickr;

use crate::Result;
use serde::Serialize;
use web_sys::Element;

pub use bootstrap::Bootstrap;
pub use flatpickr::Flatpickr;

/// Tooltip, popover and alert widgets.
pub trait WidgetLibrary {
    fn create_tooltip(&self, element: &Element) -> Result<()>;

    fn create_popover(&self, element: &Element) -> Result<()>;

    fn close_alert(&self, element: &Element) -> Result<()>;
}

/// A date-picker attached to single text fields.
pub trait DatePickerLibrary {
    fn attach(&self, element: &Element, options: &DatePickerOptions) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatePickerOptions {
    pub date_format: String,
    pub allow_input: bool,
}
