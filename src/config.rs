use crate::Result;
use crate::error::Error;
use log::Level;
use serde::Deserialize;
use std::str::FromStr;
use wasm_bindgen::JsValue;
use web_sys::Window;

/// Name of the optional global object a page can define to tune the enhancer.
pub const CONFIG_GLOBAL_NAME: &str = "smaFormsConfig";

const DEFAULT_ALERT_DISMISS_DELAY_MS: u32 = 5_000;
/// flatpickr notation for `YYYY-MM-DD`.
const DEFAULT_DATE_FORMAT: &str = "Y-m-d";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EnhancerConfig {
    pub alert_dismiss_delay_ms: u32,
    pub date_format: String,
    pub allow_date_input: bool,
    pub log_level: String,
}

impl Default for EnhancerConfig {
    fn default() -> Self {
        Self {
            alert_dismiss_delay_ms: DEFAULT_ALERT_DISMISS_DELAY_MS,
            date_format: DEFAULT_DATE_FORMAT.to_owned(),
            allow_date_input: true,
            log_level: Level::Info.to_string(),
        }
    }
}

impl EnhancerConfig {
    /// Read `window.smaFormsConfig`, falling back to defaults for anything missing.
    pub fn from_window(window: &Window) -> Result<Self> {
        let value = js_sys::Reflect::get(window, &JsValue::from_str(CONFIG_GLOBAL_NAME))?;
        Self::from_js_value(value)
    }

    pub fn from_js_value(value: JsValue) -> Result<Self> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        serde_wasm_bindgen::from_value(value).map_err(|error| {
            Error::from_parent(
                &format!("Invalid `{CONFIG_GLOBAL_NAME}` object"),
                Error::from(error),
            )
        })
    }

    /// Unknown level names fall back to `info`.
    pub fn max_log_level(&self) -> Level {
        Level::from_str(&self.log_level).unwrap_or(Level::Info)
    }
}
