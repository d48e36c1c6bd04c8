mod component;
mod config;
mod enhancer;
mod error;
mod library;
#[cfg(all(test, target_arch = "wasm32"))]
mod test_utils;
mod utils;

use crate::config::EnhancerConfig;
use crate::enhancer::PageEnhancer;
use crate::utils::{add_event_listener, get_document, get_window};
use wasm_bindgen::prelude::*;
use web_sys::Event;

pub use crate::error::{Error, Result};

#[wasm_bindgen(start)]
fn run() {
    utils::set_panic_hook();

    let config = get_window().and_then(|window| EnhancerConfig::from_window(&window));
    let (config, config_error) = match config {
        Ok(config) => (config, None),
        Err(error) => (EnhancerConfig::default(), Some(error)),
    };
    wasm_logger::init(wasm_logger::Config::new(config.max_log_level()));
    if let Some(error) = config_error {
        log::warn!("Using default configuration: {error:?}");
    }

    if let Err(error) = on_document_ready(move || enhance_page(config)) {
        log::error!("Couldn't wait for the page to load: {error:?}");
    }
}

/// Run `callback` once the document is parsed, right away if it already is.
fn on_document_ready<F>(callback: F) -> Result<()>
where
    F: FnOnce() + 'static,
{
    let document = get_document()?;
    if document.ready_state() != "loading" {
        callback();
        return Ok(());
    }

    let mut callback = Some(callback);
    add_event_listener(&document, "DOMContentLoaded", move |_: Event| {
        if let Some(callback) = callback.take() {
            callback();
        }
    })
}

fn enhance_page(config: EnhancerConfig) {
    match PageEnhancer::for_current_page(config) {
        Ok(enhancer) => {
            enhancer.enhance();
            log::debug!("Page enhanced");
        }
        Err(error) => log::error!("Couldn't enhance the page: {error:?}"),
    }
}

/// Human-readable size of a file, as displayed in file previews (e.g. `1.5 KB`).
#[wasm_bindgen]
pub fn format_file_size(bytes: f64) -> String {
    // Saturating cast: negative and NaN sizes read as 0.
    file_descriptor::file_size::format_file_size(bytes as u64)
}
