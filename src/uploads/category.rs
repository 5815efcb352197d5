//! Upload categories derived from file extensions

use std::fmt;

/// Content category of an upload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Video,
    Audio,
    Document,
    Code,
    Image,
    Text,
    Unknown,
}

impl Category {
    /// Categories offered on the upload form
    pub const ALL: [Category; 6] = [
        Category::Video,
        Category::Audio,
        Category::Document,
        Category::Code,
        Category::Text,
        Category::Image,
    ];

    /// Map an extension to its category family
    pub fn from_extension(extension: &str) -> Self {
        match extension.to_lowercase().as_str() {
            "mp4" | "avi" | "mov" | "wmv" => Category::Video,
            "mp3" | "wav" | "aac" | "m4a" => Category::Audio,
            "pdf" | "doc" | "docx" | "txt" => Category::Document,
            "py" | "js" | "html" | "css" | "java" | "cpp" | "c" => Category::Code,
            "jpg" | "jpeg" | "png" | "gif" | "bmp" => Category::Image,
            _ => Category::Unknown,
        }
    }

    /// Map a file name to its category family
    pub fn from_file_name(file_name: &str) -> Self {
        match file_name.rsplit_once('.') {
            Some((_, extension)) => Self::from_extension(extension),
            None => Category::Unknown,
        }
    }

    /// Form field value sent to the server
    pub fn as_form_value(&self) -> &'static str {
        match self {
            Category::Video => "video",
            Category::Audio => "audio",
            Category::Document => "document",
            Category::Code => "code",
            Category::Image => "image",
            Category::Text => "text",
            Category::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Video => "Video",
            Category::Audio => "Audio",
            Category::Document => "Document",
            Category::Code => "Code",
            Category::Image => "Image",
            Category::Text => "Text",
            Category::Unknown => "Unknown",
        };
        write!(f, "{}", label)
    }
}
