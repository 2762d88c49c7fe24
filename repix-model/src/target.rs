use std::fmt;

use crate::preset::SizePreset;

/// One requested output: a named preset or an explicit pixel pair.
///
/// Custom dimensions are strictly positive by the time a target exists;
/// free-form user input lives in [`crate::draft::SizeDraftRow`] until it
/// parses cleanly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ResizeTarget {
    Preset(SizePreset),
    Custom { width: u32, height: u32 },
}

impl ResizeTarget {
    /// Label for presenting this target: the preset name, or `WxH`.
    ///
    /// Matches the variant labels the service replies with, which is what
    /// ties a requested target back to a produced image.
    pub fn label(&self) -> String {
        match self {
            ResizeTarget::Preset(preset) => preset.as_str().to_string(),
            ResizeTarget::Custom { width, height } => format!("{width}x{height}"),
        }
    }
}

impl fmt::Display for ResizeTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The targets carried by a submittable request.
///
/// Non-empty by construction: [`TargetSet::from_targets`] refuses an empty
/// collection, so holders never re-check. Duplicates collapse to their
/// first occurrence and the original order is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSet {
    targets: Vec<ResizeTarget>,
}

impl TargetSet {
    /// Build a set from any target sequence, or `None` if nothing survives
    /// deduplication.
    pub fn from_targets<I>(targets: I) -> Option<Self>
    where
        I: IntoIterator<Item = ResizeTarget>,
    {
        let mut unique: Vec<ResizeTarget> = Vec::new();
        for target in targets {
            if !unique.contains(&target) {
                unique.push(target);
            }
        }
        if unique.is_empty() {
            None
        } else {
            Some(Self { targets: unique })
        }
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResizeTarget> {
        self.targets.iter()
    }

    /// The preset targets in selection order, for the `sizes` wire field.
    pub fn presets(&self) -> Vec<SizePreset> {
        self.targets
            .iter()
            .filter_map(|target| match target {
                ResizeTarget::Preset(preset) => Some(*preset),
                ResizeTarget::Custom { .. } => None,
            })
            .collect()
    }

    /// The custom `(width, height)` pairs in entry order, for the
    /// `customSizes` wire field.
    pub fn custom_dimensions(&self) -> Vec<(u32, u32)> {
        self.targets
            .iter()
            .filter_map(|target| match target {
                ResizeTarget::Preset(_) => None,
                ResizeTarget::Custom { width, height } => Some((*width, *height)),
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a TargetSet {
    type Item = &'a ResizeTarget;
    type IntoIter = std::slice::Iter<'a, ResizeTarget>;

    fn into_iter(self) -> Self::IntoIter {
        self.targets.iter()
    }
}
