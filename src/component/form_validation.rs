use crate::Result;
use crate::error::log_on_error;
use crate::utils::{add_class, add_event_listener, query_selector_all};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlFormElement};

const FORM_SELECTOR: &str = "form.needs-validation";
pub const VALIDATED_CLASS: &str = "was-validated";

/// Let flagged forms reach the server only when their native constraints are met,
/// and reveal the per-field feedback on every submission attempt.
pub fn init_form_validation(root: &Element) -> Result<()> {
    let forms = query_selector_all(root, FORM_SELECTOR)?;
    for form in forms {
        let form = form.dyn_into::<HtmlFormElement>()?;
        let validated_form = form.clone();
        add_event_listener(&form, "submit", move |event: Event| {
            on_submit(&validated_form, &event)
        })?;
    }

    Ok(())
}

fn on_submit(form: &HtmlFormElement, event: &Event) {
    if !form.check_validity() {
        event.prevent_default();
        event.stop_propagation();
    }

    log_on_error("form validation", add_class(form, VALIDATED_CLASS));
}
