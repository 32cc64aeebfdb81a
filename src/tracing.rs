//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! offset and selection issues in the replacement engine.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=retype::replace=debug` - module-level filtering
//!
//! # Log Files
//!
//! When file logging is enabled, logs are written to
//! `~/.config/retype/logs/retype.log` with daily rotation.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::document::Selection;

/// Initialize tracing subscriber with console and optional file logging
///
/// Console output goes to stderr and respects RUST_LOG (default `warn`).
/// File logging writes debug-level logs to `~/.config/retype/logs/retype.log`.
/// Returns false when a global subscriber was already installed.
pub fn init(file_logging: bool) -> bool {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = if file_logging {
        match crate::config_paths::ensure_logs_dir() {
            Ok(logs_dir) => {
                let file_appender = tracing_appender::rolling::daily(logs_dir, "retype.log");
                Some(
                    fmt::layer()
                        .with_writer(file_appender)
                        .with_ansi(false)
                        .with_target(true)
                        .with_line_number(true)
                        .with_filter(EnvFilter::new("debug")),
                )
            }
            Err(e) => {
                eprintln!("Warning: Could not initialize file logging: {}", e);
                None
            }
        }
    } else {
        None
    };

    // A subscriber may already be installed (tests, embedding hosts)
    match tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
    {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!("Keeping existing tracing subscriber: {}", e);
            false
        }
    }
}

/// Lightweight snapshot of selection state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSnapshot {
    pub range_count: usize,
    pub ranges: Vec<RangeInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeInfo {
    /// (node index, offset)
    pub start: (usize, usize),
    pub end: (usize, usize),
    pub collapsed: bool,
}

impl SelectionSnapshot {
    pub fn capture(selection: &Selection) -> Self {
        Self {
            range_count: selection.range_count(),
            ranges: selection
                .ranges()
                .iter()
                .map(|range| RangeInfo {
                    start: (range.start.node.index(), range.start.offset),
                    end: (range.end.node.index(), range.end.offset),
                    collapsed: range.is_collapsed(),
                })
                .collect(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &SelectionSnapshot) -> Option<String> {
        let mut changes = Vec::new();
        if self.range_count != other.range_count {
            changes.push(format!(
                "range count: {} → {}",
                self.range_count, other.range_count
            ));
        }

        for (i, (before, after)) in self.ranges.iter().zip(&other.ranges).enumerate() {
            if before.start != after.start || before.end != after.end {
                changes.push(format!(
                    "#{}: #{}:{}..#{}:{} → #{}:{}..#{}:{}",
                    i,
                    before.start.0,
                    before.start.1,
                    before.end.0,
                    before.end.1,
                    after.start.0,
                    after.start.1,
                    after.end.0,
                    after.end.1
                ));
            }
            if before.collapsed != after.collapsed {
                let status = if after.collapsed {
                    "collapsed"
                } else {
                    "expanded"
                };
                changes.push(format!("#{}: range {}", i, status));
            }
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
