use crate::Result;
use crate::library::WidgetLibrary;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::Element;

/// Widgets backed by the global `bootstrap` bundle loaded by the page.
#[derive(Debug, Default, Copy, Clone)]
pub struct Bootstrap;

impl WidgetLibrary for Bootstrap {
    fn create_tooltip(&self, element: &Element) -> Result<()> {
        Tooltip::new(element)?;
        Ok(())
    }

    fn create_popover(&self, element: &Element) -> Result<()> {
        Popover::new(element)?;
        Ok(())
    }

    fn close_alert(&self, element: &Element) -> Result<()> {
        Alert::new(element)?.close()?;
        Ok(())
    }
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    type Tooltip;

    #[wasm_bindgen(catch, constructor, js_namespace = bootstrap)]
    fn new(element: &Element) -> std::result::Result<Tooltip, JsValue>;

    #[wasm_bindgen(js_namespace = bootstrap)]
    type Popover;

    #[wasm_bindgen(catch, constructor, js_namespace = bootstrap)]
    fn new(element: &Element) -> std::result::Result<Popover, JsValue>;

    #[wasm_bindgen(js_namespace = bootstrap)]
    type Alert;

    #[wasm_bindgen(catch, constructor, js_namespace = bootstrap)]
    fn new(element: &Element) -> std::result::Result<Alert, JsValue>;

    #[wasm_bindgen(catch, method)]
    fn close(this: &Alert) -> std::result::Result<(), JsValue>;
}
