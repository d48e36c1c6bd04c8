use crate::Result;
use crate::utils::{add_class, query_selector_all, set_attribute};
use web_sys::Element;

const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const ACTIVE_CLASS: &str = "active";

/// Mark every navigation link pointing at `current_path` as the current page.
/// The raw `href` attribute is compared as is: no trailing slash or query normalization.
pub fn init_navbar(root: &Element, current_path: &str) -> Result<()> {
    let links = query_selector_all(root, NAV_LINK_SELECTOR)?;
    for link in &links {
        if link.get_attribute("href").as_deref() == Some(current_path) {
            add_class(link, ACTIVE_CLASS)?;
            set_attribute(link, "aria-current", "page")?;
        }
    }

    Ok(())
}
