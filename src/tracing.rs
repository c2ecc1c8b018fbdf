//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! gesture and layout state transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=layout=debug,message=debug` - scoped filtering
//! - `RUST_LOG=easel::model=trace` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/easel/logs/easel.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::{AppModel, PanelMode, ResizeMode};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG env var for filtering.
/// File logging writes to `~/.config/easel/logs/easel.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "easel.log");
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
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of layout state for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSnapshot {
    pub sidebar_width: f32,
    pub sidebar_mode: ResizeMode,
    pub panels: Vec<PanelInfo>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelInfo {
    pub id: u64,
    pub position: (f32, f32),
    pub size: (f32, f32),
    pub mode: PanelMode,
    pub minimized: bool,
}

impl LayoutSnapshot {
    pub fn from_model(model: &AppModel) -> Self {
        Self {
            sidebar_width: model.sidebar_width(),
            sidebar_mode: model.sidebar().mode(),
            panels: model
                .panels()
                .iter()
                .map(|p| {
                    let g = p.geometry();
                    PanelInfo {
                        id: p.id().0,
                        position: (g.position().x, g.position().y),
                        size: (g.size().x, g.size().y),
                        mode: g.mode(),
                        minimized: g.is_minimized(),
                    }
                })
                .collect(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &LayoutSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.sidebar_width != other.sidebar_width {
            changes.push(format!(
                "sidebar width: {} → {}",
                self.sidebar_width, other.sidebar_width
            ));
        }
        if self.sidebar_mode != other.sidebar_mode {
            changes.push(format!(
                "sidebar: {:?} → {:?}",
                self.sidebar_mode, other.sidebar_mode
            ));
        }

        if self.panels.len() != other.panels.len() {
            changes.push(format!(
                "panel count: {} → {}",
                self.panels.len(),
                other.panels.len()
            ));
        } else {
            for (before, after) in self.panels.iter().zip(&other.panels) {
                if before.position != after.position {
                    changes.push(format!(
                        "panel #{}: at ({},{}) → ({},{})",
                        after.id,
                        before.position.0,
                        before.position.1,
                        after.position.0,
                        after.position.1
                    ));
                }
                if before.size != after.size {
                    changes.push(format!(
                        "panel #{}: size {}x{} → {}x{}",
                        after.id, before.size.0, before.size.1, after.size.0, after.size.1
                    ));
                }
                if before.mode != after.mode {
                    changes.push(format!(
                        "panel #{}: {:?} → {:?}",
                        after.id, before.mode, after.mode
                    ));
                }
                if before.minimized != after.minimized {
                    let status = if after.minimized {
                        "minimized"
                    } else {
                        "expanded"
                    };
                    changes.push(format!("panel #{}: {}", after.id, status));
                }
            }
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
