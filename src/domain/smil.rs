use std::fmt;

use serde::{Serialize, Serializer};

/// Kind of media referenced from a SMIL slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Image,
    Text,
    Video,
}

impl MediaKind {
    /// SMIL element (and region prefix) name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Image => "img",
            Self::Text => "text",
            Self::Video => "video",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaObject {
    pub kind: MediaKind,
    /// URL of the media file.
    pub source: String,
}

/// MMS content as a SMIL presentation: one full-screen region per media object, played
/// in sequence.
///
/// Serialized as a JSON string holding the compact SMIL document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Smil {
    items: Vec<MediaObject>,
}

impl Smil {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_image(&mut self, source: impl Into<String>) -> &mut Self {
        self.push(MediaKind::Image, source)
    }

    pub fn add_text(&mut self, source: impl Into<String>) -> &mut Self {
        self.push(MediaKind::Text, source)
    }

    pub fn add_video(&mut self, source: impl Into<String>) -> &mut Self {
        self.push(MediaKind::Video, source)
    }

    pub fn items(&self) -> &[MediaObject] {
        &self.items
    }

    fn push(&mut self, kind: MediaKind, source: impl Into<String>) -> &mut Self {
        self.items.push(MediaObject {
            kind,
            source: source.into(),
        });
        self
    }
}

impl fmt::Display for Smil {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<smil><head><layout>")?;
        for (idx, item) in self.items.iter().enumerate() {
            write!(
                f,
                "<region id='{kind}{idx}' height='100%' width='100%'/>",
                kind = item.kind.as_str()
            )?;
        }
        f.write_str("</layout></head><body><seq>")?;
        for (idx, item) in self.items.iter().enumerate() {
            write!(
                f,
                "<{kind} src='{src}' region='{kind}{idx}'/>",
                kind = item.kind.as_str(),
                src = escape_attr(&item.source)
            )?;
        }
        f.write_str("</seq></body></smil>")
    }
}

impl Serialize for Smil {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '\'' => out.push_str("&apos;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}
