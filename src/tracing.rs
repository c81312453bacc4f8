//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! windowing, recycling and deletion issues.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=window=trace,deletion=debug` - scoped filtering
//! - `RUST_LOG=rows=trace,pool=trace` - row lifecycle
//!
//! # Log Files
//!
//! Logs are written to `~/.config/reel/logs/reel.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config_paths;
use crate::model::{TableView, WindowState};
use crate::source::RowSource;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG env var for filtering.
/// File logging writes to `~/.config/reel/logs/reel.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match log_file_appender() {
        Ok(file_appender) => Some(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true)
                .with_filter(EnvFilter::new("debug")),
        ),
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Daily-rotated `reel.log` under the logs directory, created on demand
fn log_file_appender() -> Result<RollingFileAppender, String> {
    let logs_dir = config_paths::logs_dir().ok_or("no config directory available")?;
    std::fs::create_dir_all(&logs_dir)
        .map_err(|e| format!("failed to create {}: {}", logs_dir.display(), e))?;
    Ok(tracing_appender::rolling::daily(logs_dir, "reel.log"))
}

/// Lightweight snapshot of window and pool state for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSnapshot {
    pub window: WindowState,
    pub row_count: usize,
    pub materialized: usize,
    pub pooled: usize,
    pub phase: &'static str,
    pub editing: bool,
}

impl WindowSnapshot {
    pub fn from_table<S: RowSource>(table: &TableView<S>) -> Self {
        Self {
            window: table.window(),
            row_count: table.row_count(),
            materialized: table.materialized_count(),
            pooled: table.pool().len(),
            phase: table.deletion_phase().name(),
            editing: table.editing(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &WindowSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.row_count != other.row_count {
            changes.push(format!("rows: {} → {}", self.row_count, other.row_count));
        }
        let (a, b) = (self.window, other.window);
        if (a.visible_start, a.visible_last) != (b.visible_start, b.visible_last) {
            changes.push(format!(
                "visible: {}..={} → {}..={}",
                a.visible_start, a.visible_last, b.visible_start, b.visible_last
            ));
        }
        if (a.cache_start, a.cache_last) != (b.cache_start, b.cache_last) {
            changes.push(format!(
                "cache: {}..={} → {}..={}",
                a.cache_start, a.cache_last, b.cache_start, b.cache_last
            ));
        }
        if self.materialized != other.materialized {
            changes.push(format!(
                "materialized: {} → {}",
                self.materialized, other.materialized
            ));
        }
        if self.pooled != other.pooled {
            changes.push(format!("pooled: {} → {}", self.pooled, other.pooled));
        }
        if self.phase != other.phase {
            changes.push(format!("deletion: {} → {}", self.phase, other.phase));
        }
        if self.editing != other.editing {
            changes.push(format!("editing: {}", other.editing));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
