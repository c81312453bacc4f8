//! Command-line argument parsing for the table simulator
//!
//! Supports:
//! - Synthetic row count and height
//! - Viewport height and scroll step
//! - Budget and pool overrides on top of the YAML config
//! - Deleting one row before the scroll sweep

use clap::Parser;
use std::path::PathBuf;

use crate::config::TableConfig;

/// Simulate a windowed table over synthetic rows
#[derive(Parser, Debug)]
#[command(
    name = "reel",
    version,
    about = "Simulate a windowed, recycling list view"
)]
pub struct CliArgs {
    /// Number of synthetic rows
    #[arg(long, default_value = "1000")]
    pub rows: usize,

    /// Height of every row
    #[arg(long, default_value = "44")]
    pub row_height: f32,

    /// Viewport height
    #[arg(long, default_value = "600")]
    pub viewport: f32,

    /// Offscreen rows kept materialized (overrides config)
    #[arg(long, value_name = "N")]
    pub budget: Option<usize>,

    /// Cap on pooled rows (overrides config)
    #[arg(long, value_name = "N")]
    pub pool: Option<usize>,

    /// Scroll distance per simulated frame
    #[arg(long, default_value = "37")]
    pub step: f32,

    /// Delete row N before the sweep
    #[arg(long, value_name = "N")]
    pub delete: Option<usize>,

    /// Read table config from this YAML file instead of the user config
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,
}

/// Validated simulation settings
#[derive(Debug, Clone)]
pub struct SimConfig {
    pub rows: usize,
    pub row_height: f32,
    pub viewport_height: f32,
    pub step: f32,
    pub delete: Option<usize>,
    pub table: TableConfig,
    pub json: bool,
}

impl CliArgs {
    /// Convert parsed CLI args into simulation settings
    pub fn into_config(self) -> Result<SimConfig, String> {
        let table = match &self.config {
            Some(path) => TableConfig::load_from(path),
            None => TableConfig::load(),
        };
        self.into_config_with(table)
    }

    /// Like `into_config`, starting from an already loaded table config
    pub fn into_config_with(self, mut table: TableConfig) -> Result<SimConfig, String> {
        if self.row_height.is_nan() || self.row_height <= 0.0 {
            return Err(format!("--row-height must be positive, got {}", self.row_height));
        }
        if self.step.is_nan() || self.step <= 0.0 {
            return Err(format!("--step must be positive, got {}", self.step));
        }
        if self.viewport.is_nan() || self.viewport < 0.0 {
            return Err(format!("--viewport must not be negative, got {}", self.viewport));
        }
        if let Some(index) = self.delete {
            if index >= self.rows {
                return Err(format!(
                    "--delete {} is out of range for {} rows",
                    index, self.rows
                ));
            }
        }

        if let Some(budget) = self.budget {
            table.invisible_cell_budget = budget;
        }
        if let Some(pool) = self.pool {
            table.max_reusable_count = pool;
        }

        Ok(SimConfig {
            rows: self.rows,
            row_height: self.row_height,
            viewport_height: self.viewport,
            step: self.step,
            delete: self.delete,
            table,
            json: self.json,
        })
    }
}
