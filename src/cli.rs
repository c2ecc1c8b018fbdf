//! Command-line argument parsing for the playground
//!
//! CLI values take precedence over `config.yaml`.

use clap::Parser;
use std::path::PathBuf;

use crate::config::PlaygroundConfig;

/// A canvas playground shell
#[derive(Parser, Debug, Default)]
#[command(name = "easel", version, about = "A canvas playground shell")]
pub struct CliArgs {
    /// Initial window width in logical pixels
    #[arg(long, value_name = "PX")]
    pub width: Option<u32>,

    /// Initial window height in logical pixels
    #[arg(long, value_name = "PX")]
    pub height: Option<u32>,

    /// Read configuration from this file instead of the default location
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Initial sidebar width (4 = collapsed)
    #[arg(long, value_name = "PX")]
    pub sidebar_width: Option<f32>,

    /// Title of the output panel
    #[arg(long, value_name = "NAME")]
    pub panel_name: Option<String>,
}

impl CliArgs {
    /// Load the config file named on the command line (or the default one)
    /// and apply the remaining overrides to it
    pub fn into_config(self) -> PlaygroundConfig {
        let config = match &self.config {
            Some(path) => PlaygroundConfig::load_from(path),
            None => PlaygroundConfig::load(),
        };
        self.apply(config)
    }

    /// Apply CLI overrides on top of an already loaded config
    pub fn apply(self, mut config: PlaygroundConfig) -> PlaygroundConfig {
        if let Some(width) = self.width {
            config.window.width = width;
        }
        if let Some(height) = self.height {
            config.window.height = height;
        }
        if let Some(width) = self.sidebar_width {
            config.sidebar.initial_width = width;
        }
        if let Some(name) = self.panel_name {
            config.panel.name = Some(name);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_keeps_config() {
        let config = CliArgs::default().apply(PlaygroundConfig::default());
        assert_eq!(config, PlaygroundConfig::default());
    }

    #[test]
    fn test_flags_override_config() {
        let args = CliArgs::parse_from([
            "easel",
            "--width",
            "1024",
            "--height",
            "768",
            "--sidebar-width",
            "320",
            "--panel-name",
            "canvas",
        ]);
        let config = args.apply(PlaygroundConfig::default());
        assert_eq!(config.window.width, 1024);
        assert_eq!(config.window.height, 768);
        assert_eq!(config.sidebar.initial_width, 320.0);
        assert_eq!(config.panel.name.as_deref(), Some("canvas"));
    }

    #[test]
    fn test_config_path_flag() {
        let args = CliArgs::parse_from(["easel", "-c", "/tmp/easel.yaml"]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/easel.yaml")));
    }
}
