use std::collections::BTreeMap;

/// Opaque handle to one retrievable image: where to fetch it from and what
/// to call the file when the user saves it.
///
/// The URI scheme is the service's business; `data:` URIs and plain HTTP
/// URLs both pass through here untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageRef {
    pub uri: String,
    pub download_name: String,
}

impl ImageRef {
    pub fn new(uri: impl Into<String>, download_name: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            download_name: download_name.into(),
        }
    }
}

/// Everything one successful submission produced: the original image plus
/// one variant per requested target, keyed by the service's variant label.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResultSet {
    pub original: ImageRef,
    pub variants: BTreeMap<String, ImageRef>,
}

impl ResultSet {
    /// Assemble from the parts of a service reply.
    ///
    /// The original keeps the reply's file name as its download name; each
    /// variant is suggested as `{label}-{file name}`.
    pub fn from_reply<I>(original_uri: impl Into<String>, file_name: &str, resized: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let variants = resized
            .into_iter()
            .map(|(label, uri)| {
                let download_name = format!("{label}-{file_name}");
                (label, ImageRef::new(uri, download_name))
            })
            .collect();
        Self {
            original: ImageRef::new(original_uri, file_name),
            variants,
        }
    }

    pub fn variant_count(&self) -> usize {
        self.variants.len()
    }

    /// Variant labels in key order.
    pub fn variant_labels(&self) -> impl Iterator<Item = &str> {
        self.variants.keys().map(String::as_str)
    }

    pub fn variant(&self, label: &str) -> Option<&ImageRef> {
        self.variants.get(label)
    }
}
