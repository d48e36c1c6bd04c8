use crate::Result;
use crate::error::log_on_error;
use crate::utils::{
    add_class, add_event_listener, query_selector_all, query_selector_optional_dyn, remove_class,
};
use web_sys::{DragEvent, Element, Event, EventTarget, HtmlInputElement};

const DROP_ZONE_SELECTOR: &str = ".file-drop-zone";
const FILE_INPUT_SELECTOR: &str = r#"input[type="file"]"#;
pub const DRAG_OVER_CLASS: &str = "dragover";

/// Turn every drop zone wrapping a file input into a click and drop target for that input.
pub fn init_drop_zones(root: &Element) -> Result<()> {
    let zones = query_selector_all(root, DROP_ZONE_SELECTOR)?;
    for zone in zones {
        let Some(input) =
            query_selector_optional_dyn::<HtmlInputElement>(&zone, FILE_INPUT_SELECTOR)?
        else {
            continue;
        };
        DropZone { zone, input }.attach()?;
    }

    Ok(())
}

#[derive(Clone)]
struct DropZone {
    zone: Element,
    input: HtmlInputElement,
}

impl DropZone {
    fn attach(self) -> Result<()> {
        let drop_zone = self.clone();
        add_event_listener(&self.zone, "click", move |event: Event| {
            drop_zone.on_click(&event)
        })?;

        for event_type in ["dragenter", "dragover"] {
            let drop_zone = self.clone();
            add_event_listener(&self.zone, event_type, move |event: DragEvent| {
                suppress_browser_handling(&event);
                log_on_error("drop zone", add_class(&drop_zone.zone, DRAG_OVER_CLASS));
            })?;
        }

        let drop_zone = self.clone();
        add_event_listener(&self.zone, "dragleave", move |event: DragEvent| {
            suppress_browser_handling(&event);
            log_on_error("drop zone", remove_class(&drop_zone.zone, DRAG_OVER_CLASS));
        })?;

        let zone = self.zone.clone();
        let drop_zone = self;
        add_event_listener(&zone, "drop", move |event: DragEvent| {
            suppress_browser_handling(&event);
            log_on_error("drop zone", drop_zone.on_drop(&event));
        })
    }

    fn on_click(&self, event: &Event) {
        // Clicks on the input itself already open the file browser before bubbling here.
        let input: &EventTarget = self.input.as_ref();
        if event.target().as_ref() != Some(input) {
            self.input.click();
        }
    }

    fn on_drop(&self, event: &DragEvent) -> Result<()> {
        remove_class(&self.zone, DRAG_OVER_CLASS)?;

        let Some(files) = event.data_transfer().and_then(|transfer| transfer.files()) else {
            return Ok(());
        };
        if files.length() == 0 {
            return Ok(());
        }

        self.input.set_files(Some(&files));
        self.input.dispatch_event(&Event::new("change")?)?;
        log::debug!("{} files dropped", files.length());
        Ok(())
    }
}

/// Keep the browser from opening the dragged file in place of the page.
fn suppress_browser_handling(event: &DragEvent) {
    event.prevent_default();
    event.stop_propagation();
}
