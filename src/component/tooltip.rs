use crate::Result;
use crate::error::log_on_error;
use crate::library::WidgetLibrary;
use crate::utils::query_selector_all;
use web_sys::Element;

const TOOLTIP_SELECTOR: &str = r#"[data-bs-toggle="tooltip"]"#;
const POPOVER_SELECTOR: &str = r#"[data-bs-toggle="popover"]"#;

/// Create one tooltip per element flagged for it, then one popover per element flagged for it.
/// An element the library rejects is logged and skipped.
pub fn init_tooltips_and_popovers(root: &Element, widgets: &dyn WidgetLibrary) -> Result<()> {
    let tooltips = query_selector_all(root, TOOLTIP_SELECTOR)?;
    for element in &tooltips {
        log_on_error("tooltip", widgets.create_tooltip(element));
    }

    let popovers = query_selector_all(root, POPOVER_SELECTOR)?;
    for element in &popovers {
        log_on_error("popover", widgets.create_popover(element));
    }

    log::debug!(
        "Activated {} tooltips and {} popovers",
        tooltips.len(),
        popovers.len()
    );
    Ok(())
}
