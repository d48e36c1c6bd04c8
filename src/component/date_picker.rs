use crate::Result;
use crate::library::{DatePickerLibrary, DatePickerOptions};
use crate::utils::query_selector_all;
use web_sys::Element;

const DATE_FIELD_SELECTOR: &str = ".datepicker";

/// Attach the date-picker to every date field. Without a loaded library, fields stay plain inputs.
pub fn init_date_pickers(
    root: &Element,
    library: Option<&dyn DatePickerLibrary>,
    options: &DatePickerOptions,
) -> Result<()> {
    let Some(library) = library else {
        log::debug!("No date-picker library loaded");
        return Ok(());
    };

    let fields = query_selector_all(root, DATE_FIELD_SELECTOR)?;
    for field in &fields {
        library.attach(field, options)?;
    }

    log::debug!("Attached date-picker to {} fields", fields.len());
    Ok(())
}
