use crate::Result;
use crate::library::{DatePickerLibrary, DatePickerOptions};
use js_sys::Function;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Window};

const FLATPICKR_GLOBAL_NAME: &str = "flatpickr";

/// The `flatpickr(element, options)` entry point, when the page loaded it.
pub struct Flatpickr {
    entry_point: Function,
}

impl Flatpickr {
    /// `None` when `window.flatpickr` is not a function.
    pub fn detect(window: &Window) -> Option<Self> {
        js_sys::Reflect::get(window, &JsValue::from_str(FLATPICKR_GLOBAL_NAME))
            .ok()?
            .dyn_into::<Function>()
            .ok()
            .map(|entry_point| Self { entry_point })
    }
}

impl DatePickerLibrary for Flatpickr {
    fn attach(&self, element: &Element, options: &DatePickerOptions) -> Result<()> {
        let options = serde_wasm_bindgen::to_value(options)?;
        self.entry_point.call2(&JsValue::NULL, element, &options)?;
        Ok(())
    }
}
