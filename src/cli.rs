//! Command-line argument parsing for the `retype` tool
//!
//! Each positional segment becomes one text leaf under a single `<p>` root, so
//! a selection spanning several segments exercises the cross-node path.
//! Positions are given as `LEAF:OFFSET` (both 0-indexed, offset in chars).

use clap::{Parser, ValueEnum};
use serde::Serialize;

use crate::classify::Direction;
use crate::convert::Converter;
use crate::document::Document;
use crate::replace::{self, ReplaceError, ReplaceOutcome};
use crate::session::EditSession;
use crate::util::char_len;

/// Fix text typed in the wrong keyboard layout
#[derive(Parser, Debug)]
#[command(
    name = "retype",
    version,
    about = "Convert text typed in the wrong keyboard layout (Latin <-> Hangul)"
)]
pub struct CliArgs {
    /// Text segments; each one becomes a separate text node
    #[arg(value_name = "SEGMENTS", required = true)]
    pub segments: Vec<String>,

    /// Selection start as LEAF:OFFSET (default: start of the first segment)
    #[arg(long, value_name = "LEAF:OFFSET")]
    pub start: Option<String>,

    /// Selection end as LEAF:OFFSET (default: end of the last segment)
    #[arg(long, value_name = "LEAF:OFFSET")]
    pub end: Option<String>,

    /// Convert in this direction instead of detecting it
    #[arg(long, value_enum)]
    pub direction: Option<DirectionArg>,

    /// Print a JSON report
    #[arg(long)]
    pub json: bool,
}

/// Direction accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DirectionArg {
    ToHangul,
    ToLatin,
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::ToHangul => Direction::ToHangul,
            DirectionArg::ToLatin => Direction::ToLatin,
        }
    }
}

/// A `LEAF:OFFSET` position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeafPosition {
    pub leaf: usize,
    pub offset: usize,
}

impl LeafPosition {
    /// Parse `LEAF:OFFSET`
    pub fn parse(s: &str) -> Result<Self, String> {
        let (leaf, offset) = s
            .split_once(':')
            .ok_or_else(|| format!("Expected LEAF:OFFSET, got '{}'", s))?;
        let leaf = leaf
            .trim()
            .parse()
            .map_err(|_| format!("Invalid leaf index '{}'", leaf))?;
        let offset = offset
            .trim()
            .parse()
            .map_err(|_| format!("Invalid offset '{}'", offset))?;
        Ok(Self { leaf, offset })
    }
}

/// A validated replacement request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceRequest {
    pub segments: Vec<String>,
    pub start: LeafPosition,
    pub end: LeafPosition,
    pub direction: Option<Direction>,
    pub json: bool,
}

impl CliArgs {
    /// Convert parsed CLI args into a replacement request
    pub fn into_request(self) -> Result<ReplaceRequest, String> {
        if self.segments.is_empty() {
            return Err("At least one segment is required".to_string());
        }
        let last = self.segments.len() - 1;

        let start = match &self.start {
            Some(s) => LeafPosition::parse(s)?,
            None => LeafPosition { leaf: 0, offset: 0 },
        };
        let end = match &self.end {
            Some(s) => LeafPosition::parse(s)?,
            None => LeafPosition {
                leaf: last,
                offset: char_len(&self.segments[last]),
            },
        };
        for position in [start, end] {
            if position.leaf > last {
                return Err(format!(
                    "Leaf {} does not exist ({} segments given)",
                    position.leaf,
                    self.segments.len()
                ));
            }
        }

        Ok(ReplaceRequest {
            segments: self.segments,
            start,
            end,
            direction: self.direction.map(Direction::from),
            json: self.json,
        })
    }
}

impl ReplaceRequest {
    /// Build the document and select the requested range
    pub fn into_session<C: Converter>(self, converter: C) -> EditSession<C> {
        let (document, leaves) = Document::from_segments(&self.segments);
        let mut session = EditSession::with_converter(document, converter);
        session.select(
            leaves[self.start.leaf],
            self.start.offset,
            leaves[self.end.leaf],
            self.end.offset,
        );
        session
    }
}

/// Result of a run, as printed by the tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Flattened document text after the run
    pub text: String,
    /// Selection in flattened-text chars, None when nothing is selected
    pub selection: Option<(usize, usize)>,
    pub direction: Option<String>,
    pub original: Option<String>,
    pub converted: Option<String>,
    /// Why nothing was replaced
    pub skipped: Option<String>,
}

impl Report {
    pub fn new<C: Converter>(
        session: &EditSession<C>,
        outcome: &ReplaceOutcome,
    ) -> Result<Self, ReplaceError> {
        let selection = match session.selection().first() {
            Some(range) => {
                let offsets = replace::document_offsets(session.document(), range)?;
                Some((offsets.start, offsets.end))
            }
            None => None,
        };
        let mut report = Self {
            text: session.text(),
            selection,
            direction: None,
            original: None,
            converted: None,
            skipped: None,
        };
        match outcome {
            ReplaceOutcome::Replaced(replacement) => {
                report.direction = Some(replacement.direction.to_string());
                report.original = Some(replacement.original.clone());
                report.converted = Some(replacement.converted.clone());
            }
            ReplaceOutcome::Skipped(reason) => report.skipped = Some(reason.to_string()),
        }
        Ok(report)
    }

    /// Plain-text rendering
    pub fn to_text(&self) -> String {
        let mut out = self.text.clone();
        out.push('\n');
        match (&self.skipped, self.selection) {
            (Some(reason), _) => out.push_str(&format!("nothing replaced: {}\n", reason)),
            (None, Some((start, end))) => {
                let direction = self.direction.as_deref().unwrap_or("unchanged");
                out.push_str(&format!("selection: {}..{} ({})\n", start, end, direction));
            }
            (None, None) => {}
        }
        out
    }
}
