use crate::Result;
use crate::error::log_on_error;
use crate::utils::{
    add_event_listener, append_child, clear_element, create_element_with_classes,
    query_selector_all, set_attribute,
};
use file_descriptor::selected_file::SelectedFile;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlInputElement};

/// Holds the id of the element receiving the preview cards of a file input.
pub const PREVIEW_TARGET_ATTRIBUTE: &str = "data-preview-target";
const FILE_INPUT_SELECTOR: &str = r#"input[type="file"][data-preview-target]"#;
pub const PREVIEW_CARD_CLASS: &str = "file-preview-item";
pub const REMOVE_BUTTON_CLASS: &str = "remove-file";
pub const NO_FILES_MESSAGE: &str = "No files selected";

/// Preview of the selection of one file input.
#[derive(Clone)]
pub struct FilePreview {
    document: Document,
    input: HtmlInputElement,
    target_id: String,
}

impl FilePreview {
    /// `None` when the input names no preview container.
    pub fn for_input(document: &Document, input: HtmlInputElement) -> Option<Self> {
        let target_id = input.get_attribute(PREVIEW_TARGET_ATTRIBUTE)?;
        Some(Self {
            document: document.clone(),
            input,
            target_id,
        })
    }

    /// The container is looked up on each render, so it may be added after startup.
    fn container(&self) -> Option<Element> {
        self.document.get_element_by_id(&self.target_id)
    }

    /// Files of the input, in selection order.
    pub fn selected_files(&self) -> Vec<SelectedFile> {
        let Some(files) = self.input.files() else {
            return vec![];
        };
        (0..files.length())
            .filter_map(|index| files.get(index))
            .map(|file| SelectedFile::new(file.name(), file.size() as u64))
            .collect()
    }

    pub fn render(&self) -> Result<()> {
        let Some(container) = self.container() else {
            log::debug!("No preview container `{}` on the page", self.target_id);
            return Ok(());
        };
        clear_element(&container);

        let files = self.selected_files();
        if files.is_empty() {
            let placeholder = create_element_with_classes(
                &self.document,
                "p",
                Some(&container),
                &["text-muted"],
            )?;
            placeholder.set_text_content(Some(NO_FILES_MESSAGE));
            return Ok(());
        }

        for file in &files {
            let card = create_preview_card(&self.document, file)?;
            append_child(&container, &card)?;
        }

        Ok(())
    }
}

/// Render the preview of every file input declaring a preview target, on each change.
pub fn init_file_previews(document: &Document, root: &Element) -> Result<()> {
    let inputs = query_selector_all(root, FILE_INPUT_SELECTOR)?;
    for input in inputs {
        let input = input.dyn_into::<HtmlInputElement>()?;
        let Some(preview) = FilePreview::for_input(document, input.clone()) else {
            continue;
        };
        add_event_listener(&input, "change", move |_: Event| {
            log_on_error("file preview", preview.render())
        })?;
    }

    Ok(())
}

fn create_preview_card(document: &Document, file: &SelectedFile) -> Result<Element> {
    let card = create_element_with_classes(
        document,
        "div",
        None,
        &[
            PREVIEW_CARD_CLASS,
            // Layout
            "d-flex",
            "align-items-center",
            // Spacing
            "p-2",
            "mb-2",
            // Border
            "border",
            "rounded",
        ],
    )?;

    let mut icon_classes = file.kind().icon_classes().to_vec();
    icon_classes.extend(["fs-4", "me-2"]);
    create_element_with_classes(document, "i", Some(&card), &icon_classes)?;

    let details = create_element_with_classes(document, "div", Some(&card), &["flex-grow-1"])?;
    let name = create_element_with_classes(
        document,
        "div",
        Some(&details),
        &["file-name", "fw-bold"],
    )?;
    name.set_text_content(Some(file.name()));
    let size = create_element_with_classes(
        document,
        "small",
        Some(&details),
        &["file-size", "text-muted"],
    )?;
    size.set_text_content(Some(&file.formatted_size()));

    let remove_button = create_element_with_classes(
        document,
        "button",
        Some(&card),
        &[REMOVE_BUTTON_CLASS, "btn", "btn-sm", "btn-outline-danger"],
    )?;
    set_attribute(&remove_button, "type", "button")?;
    set_attribute(&remove_button, "aria-label", "Remove")?;
    create_element_with_classes(document, "i", Some(&remove_button), &["bi", "bi-x"])?;

    // Only the card goes away: the input still holds the file and will submit it.
    let removed_card = card.clone();
    add_event_listener(&remove_button, "click", move |_: Event| removed_card.remove())?;

    Ok(card)
}
