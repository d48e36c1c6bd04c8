use crate::Result;
use crate::component::alert::schedule_alert_dismissal;
use crate::component::date_picker::init_date_pickers;
use crate::component::drop_zone::init_drop_zones;
use crate::component::file_preview::init_file_previews;
use crate::component::form_validation::init_form_validation;
use crate::component::navbar::init_navbar;
use crate::component::password_toggle::init_password_toggle;
use crate::component::tooltip::init_tooltips_and_popovers;
use crate::config::EnhancerConfig;
use crate::error::{Error, log_on_error};
use crate::library::{
    Bootstrap, DatePickerLibrary, DatePickerOptions, Flatpickr, WidgetLibrary,
};
use crate::utils::{get_current_path, get_document, get_window};
use std::rc::Rc;
use web_sys::{Document, Element};

/// Everything the behaviors of a page need, gathered once at startup.
pub struct PageEnhancer {
    document: Document,
    root: Element,
    current_path: String,
    config: EnhancerConfig,
    widgets: Rc<dyn WidgetLibrary>,
    date_picker: Option<Rc<dyn DatePickerLibrary>>,
}

impl PageEnhancer {
    pub fn new(
        document: Document,
        root: Element,
        current_path: String,
        config: EnhancerConfig,
        widgets: Rc<dyn WidgetLibrary>,
        date_picker: Option<Rc<dyn DatePickerLibrary>>,
    ) -> Self {
        Self {
            document,
            root,
            current_path,
            config,
            widgets,
            date_picker,
        }
    }

    /// The enhancer of the loaded page, backed by Bootstrap and, when present, flatpickr.
    pub fn for_current_page(config: EnhancerConfig) -> Result<Self> {
        let window = get_window()?;
        let document = get_document()?;
        let root = document
            .document_element()
            .ok_or_else(|| Error::new("Document has no root element"))?;
        let date_picker = Flatpickr::detect(&window)
            .map(|flatpickr| Rc::new(flatpickr) as Rc<dyn DatePickerLibrary>);

        Ok(Self::new(
            document,
            root,
            get_current_path()?,
            config,
            Rc::new(Bootstrap),
            date_picker,
        ))
    }

    /// Attach every behavior. One failing behavior is logged and leaves the others untouched.
    pub fn enhance(&self) {
        log_on_error(
            "tooltips and popovers",
            init_tooltips_and_popovers(&self.root, self.widgets.as_ref()),
        );
        log_on_error("form validation", init_form_validation(&self.root));
        schedule_alert_dismissal(
            self.root.clone(),
            self.widgets.clone(),
            self.config.alert_dismiss_delay_ms,
        );
        log_on_error("password toggle", init_password_toggle(&self.root));
        log_on_error(
            "date pickers",
            init_date_pickers(
                &self.root,
                self.date_picker.as_deref(),
                &self.date_picker_options(),
            ),
        );
        log_on_error("navigation", init_navbar(&self.root, &self.current_path));
        log_on_error(
            "file previews",
            init_file_previews(&self.document, &self.root),
        );
        log_on_error("drop zones", init_drop_zones(&self.root));
    }

    fn date_picker_options(&self) -> DatePickerOptions {
        DatePickerOptions {
            date_format: self.config.date_format.clone(),
            allow_input: self.config.allow_date_input,
        }
    }
}
