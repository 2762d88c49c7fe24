use std::fmt;

/// The image chosen for resizing: original file name plus raw bytes.
///
/// Picking another file replaces the whole value; nothing edits one in
/// place. Holders share it behind `Arc` so snapshots and in-flight
/// requests stay cheap regardless of image size.
#[derive(Clone, PartialEq, Eq)]
pub struct SourceImage {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl SourceImage {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    pub fn size_bytes(&self) -> usize {
        self.bytes.len()
    }
}

// Hand-written so logs carry the byte count, not the bytes.
impl fmt::Debug for SourceImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceImage")
            .field("file_name", &self.file_name)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}
