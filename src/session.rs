//! EditSession - a document, its active selection and a converter.
//!
//! This is the host side of the replacement engine: it reads the active
//! selection, runs the engine on its first range and, when text was replaced,
//! makes the returned range the only selected range. The whole operation runs
//! under one `&mut self`, so it cannot interleave with another.

use crate::classify::Direction;
use crate::commands::Command;
use crate::convert::{Converter, Dubeolsik};
use crate::document::{Boundary, Document, NodeId, Selection, TextRange, TextTree};
use crate::replace::{self, ReplaceError, ReplaceOutcome, SkipReason};
use crate::tracing::SelectionSnapshot;

/// A document being edited, with its active selection
#[derive(Debug, Clone)]
pub struct EditSession<C = Dubeolsik> {
    document: Document,
    selection: Selection,
    converter: C,
}

impl EditSession<Dubeolsik> {
    /// Create a session using the Dubeolsik layout
    pub fn new(document: Document) -> Self {
        Self::with_converter(document, Dubeolsik)
    }
}

impl<C: Converter> EditSession<C> {
    /// Create a session with a custom converter and nothing selected
    pub fn with_converter(document: Document, converter: C) -> Self {
        Self {
            document,
            selection: Selection::empty(),
            converter,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// Flattened text of the whole document
    pub fn text(&self) -> String {
        self.document.text_content(self.document.root())
    }

    /// The active selection
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
    }

    /// Select a single range, dropping any other
    pub fn select_range(&mut self, range: TextRange) {
        self.selection.replace_with(range);
    }

    /// Select from `(start_node, start_offset)` to `(end_node, end_offset)`
    pub fn select(
        &mut self,
        start_node: NodeId,
        start_offset: usize,
        end_node: NodeId,
        end_offset: usize,
    ) {
        self.select_range(TextRange::new(
            Boundary::new(start_node, start_offset),
            Boundary::new(end_node, end_offset),
        ));
    }

    /// Text covered by the first selected range (empty if none or invalid)
    pub fn selected_text(&self) -> String {
        self.selection
            .first()
            .and_then(|range| replace::locate(&self.document, range).ok())
            .map(|fragment| fragment.text)
            .unwrap_or_default()
    }

    /// Convert the selected text, picking the direction from its trailing run
    pub fn replace_selection(&mut self) -> Result<ReplaceOutcome, ReplaceError> {
        self.run(None)
    }

    /// Convert the selected text in a fixed direction
    pub fn replace_selection_as(
        &mut self,
        direction: Direction,
    ) -> Result<ReplaceOutcome, ReplaceError> {
        self.run(Some(direction))
    }

    /// Execute a host command
    pub fn dispatch(&mut self, command: Command) -> Result<ReplaceOutcome, ReplaceError> {
        tracing::debug!("Dispatching command {} ({})", command, command.label());
        match command {
            Command::ReplaceText => self.replace_selection(),
        }
    }

    fn run(&mut self, direction: Option<Direction>) -> Result<ReplaceOutcome, ReplaceError> {
        let Some(range) = self.selection.first().copied() else {
            tracing::debug!("No selection range, nothing to replace");
            return Ok(ReplaceOutcome::Skipped(SkipReason::EmptySelection));
        };
        if self.selection.range_count() > 1 {
            tracing::debug!(
                "Selection has {} ranges, using the first",
                self.selection.range_count()
            );
        }

        let before = SelectionSnapshot::capture(&self.selection);
        let result = match direction {
            Some(direction) => {
                replace::replace_range_as(&mut self.document, &range, &self.converter, direction)
            }
            None => replace::replace_range(&mut self.document, &range, &self.converter),
        };

        let outcome = match result {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!("Replacement failed: {}", e);
                return Err(e);
            }
        };

        if let ReplaceOutcome::Replaced(replacement) = &outcome {
            self.selection.replace_with(replacement.range);
            let after = SelectionSnapshot::capture(&self.selection);
            if let Some(diff) = before.diff(&after) {
                tracing::debug!("Selection: {}", diff);
            }
        }
        Ok(outcome)
    }
}
