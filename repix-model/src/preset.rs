use std::fmt;

/// Named output sizes the service knows how to produce.
///
/// The client never learns the pixel dimensions behind a preset; it sends
/// the name and the service decides. [`SizePreset::as_str`] is both the
/// wire value and the variant label the service replies with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SizePreset {
    Thumbnail,
    Medium,
    Large,
}

impl SizePreset {
    /// Every preset, in menu order.
    pub const ALL: [SizePreset; 3] = [
        SizePreset::Thumbnail,
        SizePreset::Medium,
        SizePreset::Large,
    ];

    /// Canonical lowercase name used on the wire.
    pub const fn as_str(&self) -> &'static str {
        match self {
            SizePreset::Thumbnail => "thumbnail",
            SizePreset::Medium => "medium",
            SizePreset::Large => "large",
        }
    }

    /// Parse a canonical name back into a preset.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "thumbnail" => Some(SizePreset::Thumbnail),
            "medium" => Some(SizePreset::Medium),
            "large" => Some(SizePreset::Large),
            _ => None,
        }
    }
}

impl fmt::Display for SizePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizePreset::Thumbnail => write!(f, "Thumbnail"),
            SizePreset::Medium => write!(f, "Medium"),
            SizePreset::Large => write!(f, "Large"),
        }
    }
}
