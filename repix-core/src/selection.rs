use std::sync::Arc;

use repix_model::{DraftField, OutputFormat, SizeDraftRow, SizePreset, SourceImage};
use tokio::sync::watch;

/// Immutable view of everything the user has picked so far.
///
/// Published on every mutation; watchers always see the latest one.
#[derive(Debug, Clone)]
pub struct SelectionSnapshot {
    pub source: Option<Arc<SourceImage>>,
    pub presets: Vec<SizePreset>,
    pub custom_rows: Vec<SizeDraftRow>,
    pub format: OutputFormat,
}

impl Default for SelectionSnapshot {
    fn default() -> Self {
        Self {
            source: None,
            presets: Vec::new(),
            // One empty row so there is always a pair to type into.
            custom_rows: vec![SizeDraftRow::default()],
            format: OutputFormat::default(),
        }
    }
}

impl SelectionSnapshot {
    pub fn has_source(&self) -> bool {
        self.source.is_some()
    }

    pub fn preset_selected(&self, preset: SizePreset) -> bool {
        self.presets.contains(&preset)
    }
}

/// Owns the editable selection and publishes a snapshot after each change.
///
/// No validation happens here. The store accepts any text in custom rows
/// and any combination of presets; whether the selection amounts to a
/// submittable request is the validator's call, made at submit time.
#[derive(Debug)]
pub struct SelectionStore {
    snapshot: SelectionSnapshot,
    publisher: watch::Sender<SelectionSnapshot>,
}

impl SelectionStore {
    pub fn new() -> Self {
        let snapshot = SelectionSnapshot::default();
        Self {
            publisher: watch::Sender::new(snapshot.clone()),
            snapshot,
        }
    }

    /// Replace the chosen file wholesale.
    pub fn set_source(&mut self, source: SourceImage) {
        self.snapshot.source = Some(Arc::new(source));
        self.publish();
    }

    /// Add the preset if absent, remove it if present.
    pub fn toggle_preset(&mut self, preset: SizePreset) {
        if let Some(position) = self.snapshot.presets.iter().position(|p| *p == preset) {
            self.snapshot.presets.remove(position);
        } else {
            self.snapshot.presets.push(preset);
        }
        self.publish();
    }

    pub fn set_format(&mut self, format: OutputFormat) {
        self.snapshot.format = format;
        self.publish();
    }

    /// Overwrite one half of one custom row. Out-of-range indices are
    /// no-ops; the row count only changes through [`Self::add_custom_row`]
    /// and [`Self::remove_custom_row`].
    pub fn set_custom_field(&mut self, index: usize, field: DraftField, value: impl Into<String>) {
        if let Some(row) = self.snapshot.custom_rows.get_mut(index) {
            row.set(field, value);
            self.publish();
        }
    }

    /// Append an empty custom row.
    pub fn add_custom_row(&mut self) {
        self.snapshot.custom_rows.push(SizeDraftRow::default());
        self.publish();
    }

    /// Drop one custom row, keeping at least one so the user always has an
    /// editable pair in front of them.
    pub fn remove_custom_row(&mut self, index: usize) {
        if self.snapshot.custom_rows.len() > 1 && index < self.snapshot.custom_rows.len() {
            self.snapshot.custom_rows.remove(index);
            self.publish();
        }
    }

    /// The current selection, detached from future edits.
    pub fn snapshot(&self) -> SelectionSnapshot {
        self.snapshot.clone()
    }

    /// Watch the selection. Receivers observe the latest snapshot after
    /// every mutation; intermediate states may coalesce.
    pub fn subscribe(&self) -> watch::Receiver<SelectionSnapshot> {
        self.publisher.subscribe()
    }

    fn publish(&self) {
        self.publisher.send_replace(self.snapshot.clone());
    }
}

impl Default for SelectionStore {
    fn default() -> Self {
        Self::new()
    }
}
