use crate::Result;
use crate::error::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use web_sys::{Document, Element, EventTarget, Window};

pub fn set_panic_hook() {
    // When the `console_error_panic_hook` feature is enabled, we can call the
    // `set_panic_hook` function at least once during initialization, and then
    // we will get better error messages if our code ever panics.
    //
    // For more details see
    // https://github.com/rustwasm/console_error_panic_hook#readme
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

pub fn get_window() -> Result<Window> {
    web_sys::window()
        .ok_or_else(|| Error::new("No global `window` exists"))
}

pub fn get_document() -> Result<Document> {
    get_window()?
        .document()
        .ok_or_else(|| Error::new("Should have a document on window"))
}

pub fn get_current_path() -> Result<String> {
    Ok(get_window()?.location().pathname()?)
}

pub fn create_element(document: &Document, name: &str) -> Result<Element> {
    Ok(document.create_element(name)?)
}

pub fn create_element_with_classes(
    document: &Document,
    name: &str,
    parent: Option<&Element>,
    classes: &[&str],
) -> Result<Element> {
    let new_element = create_element(document, name)?;
    new_element.set_class_name(&classes.join(" "));

    if let Some(parent) = parent {
        append_child(parent, &new_element)?;
    }

    Ok(new_element)
}

pub fn append_child(container: &Element, child: &Element) -> Result<()> {
    container.append_child(child)?;
    Ok(())
}

pub fn clear_element(element: &Element) {
    element.set_inner_html("");
}

pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<()> {
    element.set_attribute(name, value)?;
    Ok(())
}

pub fn add_class(element: &Element, class: &str) -> Result<()> {
    element.class_list().add_1(class)?;
    Ok(())
}

pub fn remove_class(element: &Element, class: &str) -> Result<()> {
    element.class_list().remove_1(class)?;
    Ok(())
}

/// All elements under `root` matching `selectors`, in document order.
pub fn query_selector_all(root: &Element, selectors: &str) -> Result<Vec<Element>> {
    let nodes = root.query_selector_all(selectors)?;
    let mut elements = Vec::with_capacity(nodes.length() as usize);
    for index in 0..nodes.length() {
        if let Some(node) = nodes.get(index) {
            elements.push(node.dyn_into::<Element>()?);
        }
    }
    Ok(elements)
}

pub fn query_selector_optional(root: &Element, selectors: &str) -> Result<Option<Element>> {
    Ok(root.query_selector(selectors)?)
}

pub fn query_selector_optional_dyn<T: JsCast>(
    root: &Element,
    selectors: &str,
) -> Result<Option<T>> {
    match query_selector_optional(root, selectors)? {
        None => Ok(None),
        Some(element) => Ok(Some(element.dyn_into::<T>()?)),
    }
}

/// Attach `handler` to `target` for the whole page lifetime.
pub fn add_event_listener<E, F>(target: &EventTarget, event_type: &str, handler: F) -> Result<()>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::test_utils::{Fixture, has_class};
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn should_get_window() {
        assert!(get_window().is_ok());
    }

    #[wasm_bindgen_test]
    fn should_query_all_in_document_order() {
        let fixture = Fixture::new(r#"<p class="a">1</p><div><p class="a">2</p></div><p>3</p>"#);
        let elements = query_selector_all(fixture.root(), ".a").unwrap();
        let texts = elements
            .iter()
            .map(|element| element.text_content().unwrap_or_default())
            .collect::<Vec<_>>();
        assert_eq!(vec!["1", "2"], texts);
    }

    #[wasm_bindgen_test]
    fn should_toggle_classes() {
        let fixture = Fixture::new("<span></span>");
        let span = query_selector_optional(fixture.root(), "span").unwrap().unwrap();
        add_class(&span, "active").unwrap();
        assert!(has_class(&span, "active"));
        remove_class(&span, "active").unwrap();
        assert!(!has_class(&span, "active"));
    }

    #[wasm_bindgen_test]
    fn should_call_listener_on_each_event() {
        let fixture = Fixture::new("<button></button>");
        let button = query_selector_optional(fixture.root(), "button").unwrap().unwrap();
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        add_event_listener(&button, "click", move |_: web_sys::Event| {
            counter.set(counter.get() + 1);
        })
        .unwrap();

        fixture.click(&button);
        fixture.click(&button);

        assert_eq!(2, calls.get());
    }
}
