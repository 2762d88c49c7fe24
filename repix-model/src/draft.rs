use crate::target::ResizeTarget;

/// Which half of a custom-size row an edit lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Width,
    Height,
}

/// One editable custom-size row.
///
/// Both halves stay free text so a row can be empty or half-typed without
/// anything rejecting it; [`SizeDraftRow::parse_target`] decides at submit
/// time whether the row counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SizeDraftRow {
    pub width: String,
    pub height: String,
}

impl SizeDraftRow {
    pub fn new(width: impl Into<String>, height: impl Into<String>) -> Self {
        Self {
            width: width.into(),
            height: height.into(),
        }
    }

    /// Overwrite one half of the row.
    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        match field {
            DraftField::Width => self.width = value.into(),
            DraftField::Height => self.height = value.into(),
        }
    }

    /// Parse the row into a concrete target.
    ///
    /// Both halves must be integers strictly greater than zero after
    /// trimming; anything else makes the whole row yield `None`.
    pub fn parse_target(&self) -> Option<ResizeTarget> {
        let width = parse_dimension(&self.width)?;
        let height = parse_dimension(&self.height)?;
        Some(ResizeTarget::Custom { width, height })
    }
}

fn parse_dimension(text: &str) -> Option<u32> {
    let value: u32 = text.trim().parse().ok()?;
    (value > 0).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_row_parses() {
        let row = SizeDraftRow::new("3", "4");
        assert_eq!(
            row.parse_target(),
            Some(ResizeTarget::Custom { width: 3, height: 4 })
        );
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let row = SizeDraftRow::new(" 640 ", "\t480");
        assert_eq!(
            row.parse_target(),
            Some(ResizeTarget::Custom { width: 640, height: 480 })
        );
    }

    #[test]
    fn zero_negative_and_fractional_rows_do_not_parse() {
        assert_eq!(SizeDraftRow::new("0", "4").parse_target(), None);
        assert_eq!(SizeDraftRow::new("3", "0").parse_target(), None);
        assert_eq!(SizeDraftRow::new("-2", "4").parse_target(), None);
        assert_eq!(SizeDraftRow::new("3.5", "4").parse_target(), None);
    }

    #[test]
    fn empty_and_non_numeric_rows_do_not_parse() {
        assert_eq!(SizeDraftRow::default().parse_target(), None);
        assert_eq!(SizeDraftRow::new("", "4").parse_target(), None);
        assert_eq!(SizeDraftRow::new("abc", "4").parse_target(), None);
        assert_eq!(SizeDraftRow::new("3", "4px").parse_target(), None);
    }

    #[test]
    fn set_targets_one_half_only() {
        let mut row = SizeDraftRow::default();
        row.set(DraftField::Width, "12");
        assert_eq!(row.width, "12");
        assert_eq!(row.height, "");
        row.set(DraftField::Height, "9");
        assert_eq!(
            row.parse_target(),
            Some(ResizeTarget::Custom { width: 12, height: 9 })
        );
    }
}
