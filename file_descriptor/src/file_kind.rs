use crate::file_kind::FileKind::{Image, Other, Pdf, WordDocument};

/// Broad family of a selected file, used to pick the icon of its preview card.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FileKind {
    Pdf,
    WordDocument,
    Image,
    Other,
}

impl FileKind {
    /// Infer the kind from the final extension of `file_name`, ignoring case.
    /// A name without any `.` has no extension and is therefore `Other`.
    pub fn from_file_name(file_name: &str) -> Self {
        let Some((_, extension)) = file_name.rsplit_once('.') else {
            return Other;
        };

        match extension.to_lowercase().as_str() {
            "pdf" => Pdf,
            "doc" | "docx" => WordDocument,
            "jpg" | "jpeg" | "png" => Image,
            _ => Other,
        }
    }

    /// Bootstrap Icons classes of the icon shown for this kind.
    pub fn icon_classes(&self) -> &'static [&'static str] {
        match self {
            Pdf => &["bi", "bi-file-earmark-pdf", "text-danger"],
            WordDocument => &["bi", "bi-file-earmark-word", "text-primary"],
            Image => &["bi", "bi-file-earmark-image", "text-success"],
            Other => &["bi", "bi-file-earmark", "text-secondary"],
        }
    }

    /// The class distinguishing this kind's icon from the others.
    pub fn icon_class(&self) -> &'static str {
        self.icon_classes()[1]
    }
}
