use crate::Result;
use crate::error::Error;
use crate::library::{DatePickerLibrary, DatePickerOptions, WidgetLibrary};
use crate::utils::get_document;
use std::cell::RefCell;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    DataTransfer, Document, Element, Event, EventInit, File, HtmlElement, HtmlInputElement,
};

/// Markup injected into the test page, removed once the test is over.
pub struct Fixture {
    document: Document,
    root: Element,
}

impl Fixture {
    pub fn new(markup: &str) -> Self {
        let document = get_document().unwrap();
        let root = document.create_element("div").unwrap();
        root.set_inner_html(markup);
        document.body().unwrap().append_child(&root).unwrap();
        Self { document, root }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn element(&self, selectors: &str) -> Element {
        self.root
            .query_selector(selectors)
            .unwrap()
            .unwrap_or_else(|| panic!("`{selectors}` is not in the fixture"))
    }

    pub fn element_dyn<T: JsCast>(&self, selectors: &str) -> T {
        self.element(selectors).dyn_into::<T>().unwrap()
    }

    pub fn click(&self, element: &Element) {
        element.dyn_ref::<HtmlElement>().unwrap().click();
    }

    /// Dispatch a bubbling, cancelable event. Returns `false` when a listener cancelled it.
    pub fn dispatch(&self, element: &Element, event_type: &str) -> bool {
        let init = EventInit::new();
        init.set_bubbles(true);
        init.set_cancelable(true);
        let event = Event::new_with_event_init_dict(event_type, &init).unwrap();
        element.dispatch_event(&event).unwrap()
    }

    /// Replace the selection of `input` and notify it, as a manual pick does.
    pub fn select_files(&self, input: &HtmlInputElement, files: &[File]) {
        let data_transfer = data_transfer_with(files);
        input.set_files(data_transfer.files().as_ref());
        input
            .dispatch_event(&Event::new("change").unwrap())
            .unwrap();
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        self.root.remove();
    }
}

pub fn create_file(name: &str, size: usize) -> File {
    let parts = js_sys::Array::of1(&JsValue::from_str(&"x".repeat(size)));
    File::new_with_str_sequence(&parts, name).unwrap()
}

pub fn data_transfer_with(files: &[File]) -> DataTransfer {
    let data_transfer = DataTransfer::new().unwrap();
    for file in files {
        data_transfer.items().add_with_file(file).unwrap();
    }
    data_transfer
}

/// Widget library remembering which elements it was asked to handle.
#[derive(Default)]
pub struct RecordingWidgets {
    tooltips: RefCell<Vec<Element>>,
    popovers: RefCell<Vec<Element>>,
    closed_alerts: RefCell<Vec<Element>>,
    rejected_ids: Vec<String>,
}

impl RecordingWidgets {
    /// Fails on the elements with one of `ids`, as the library does on malformed markup.
    pub fn rejecting(ids: &[&str]) -> Self {
        Self {
            rejected_ids: ids.iter().map(|id| id.to_string()).collect(),
            ..Self::default()
        }
    }

    fn record(&self, widgets: &RefCell<Vec<Element>>, element: &Element) -> Result<()> {
        if self.rejected_ids.contains(&element.id()) {
            return Err(Error::new(&format!("Widget rejected for `{}`", element.id())));
        }
        widgets.borrow_mut().push(element.clone());
        Ok(())
    }

    pub fn tooltips(&self) -> Vec<Element> {
        self.tooltips.borrow().clone()
    }

    pub fn popovers(&self) -> Vec<Element> {
        self.popovers.borrow().clone()
    }

    pub fn closed_alerts(&self) -> Vec<Element> {
        self.closed_alerts.borrow().clone()
    }
}

impl WidgetLibrary for RecordingWidgets {
    fn create_tooltip(&self, element: &Element) -> Result<()> {
        self.record(&self.tooltips, element)
    }

    fn create_popover(&self, element: &Element) -> Result<()> {
        self.record(&self.popovers, element)
    }

    fn close_alert(&self, element: &Element) -> Result<()> {
        self.record(&self.closed_alerts, element)
    }
}

#[derive(Default)]
pub struct RecordingDatePicker {
    attached: RefCell<Vec<(Element, DatePickerOptions)>>,
}

impl RecordingDatePicker {
    pub fn attached(&self) -> Vec<(Element, DatePickerOptions)> {
        self.attached.borrow().clone()
    }
}

impl DatePickerLibrary for RecordingDatePicker {
    fn attach(&self, element: &Element, options: &DatePickerOptions) -> Result<()> {
        self.attached
            .borrow_mut()
            .push((element.clone(), options.clone()));
        Ok(())
    }
}

pub fn class_names(elements: &[Element]) -> Vec<String> {
    elements.iter().map(Element::class_name).collect()
}

pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}
