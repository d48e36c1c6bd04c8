use crate::Result;
use crate::error::log_on_error;
use crate::utils::{
    add_class, add_event_listener, query_selector_optional, query_selector_optional_dyn,
    remove_class,
};
use web_sys::{Element, Event, HtmlInputElement};

const TOGGLE_SELECTOR: &str = "#togglePassword";
const PASSWORD_SELECTOR: &str = "#password";
const MASKED_ICON_CLASS: &str = "bi-eye";
const REVEALED_ICON_CLASS: &str = "bi-eye-slash";

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PasswordVisibility {
    Masked,
    Revealed,
}

impl PasswordVisibility {
    /// Read from the field itself, never tracked on the side.
    pub fn of(field: &HtmlInputElement) -> Self {
        if field.type_() == "password" {
            PasswordVisibility::Masked
        } else {
            PasswordVisibility::Revealed
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            PasswordVisibility::Masked => PasswordVisibility::Revealed,
            PasswordVisibility::Revealed => PasswordVisibility::Masked,
        }
    }

    fn input_type(self) -> &'static str {
        match self {
            PasswordVisibility::Masked => "password",
            PasswordVisibility::Revealed => "text",
        }
    }
}

/// Wire the show/hide control of the password field, when the page has both.
pub fn init_password_toggle(root: &Element) -> Result<()> {
    let Some(toggle) = query_selector_optional(root, TOGGLE_SELECTOR)? else {
        return Ok(());
    };
    let Some(field) = query_selector_optional_dyn::<HtmlInputElement>(root, PASSWORD_SELECTOR)?
    else {
        return Ok(());
    };
    let icon = query_selector_optional(&toggle, "i")?;

    add_event_listener(&toggle, "click", move |_: Event| {
        log_on_error(
            "password visibility",
            toggle_visibility(&field, icon.as_ref()),
        );
    })
}

fn toggle_visibility(field: &HtmlInputElement, icon: Option<&Element>) -> Result<()> {
    let visibility = PasswordVisibility::of(field).toggled();
    field.set_type(visibility.input_type());

    if let Some(icon) = icon {
        let (shown, hidden) = match visibility {
            PasswordVisibility::Masked => (MASKED_ICON_CLASS, REVEALED_ICON_CLASS),
            PasswordVisibility::Revealed => (REVEALED_ICON_CLASS, MASKED_ICON_CLASS),
        };
        remove_class(icon, hidden)?;
        add_class(icon, shown)?;
    }

    Ok(())
}
