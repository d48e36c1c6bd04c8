use crate::file_kind::FileKind;
use crate::file_size::format_file_size;
use derive_getters::Getters;

/// A file picked or dropped into a file input, as long as the page lives.
#[derive(Debug, Clone, Eq, PartialEq, Getters)]
pub struct SelectedFile {
    name: String,
    size: u64,
    kind: FileKind,
}

impl SelectedFile {
    pub fn new(name: String, size: u64) -> Self {
        let kind = FileKind::from_file_name(&name);
        Self { name, size, kind }
    }

    pub fn formatted_size(&self) -> String {
        format_file_size(self.size)
    }
}
