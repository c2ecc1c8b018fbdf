//! Easel - floating panels and a resizable sidebar for a canvas playground
//!
//! This crate provides the pointer-driven layout engine and the Elm-style
//! update loop around it. The winit runtime lives in the binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod events;
pub mod messages;
pub mod model;
pub mod theme;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::PlaygroundConfig;
pub use messages::Msg;
pub use model::AppModel;
pub use theme::Theme;
