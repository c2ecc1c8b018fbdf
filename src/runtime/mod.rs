//! Runtime module - winit/platform integration
//!
//! `app` owns the window and translates winit events into messages.

pub mod app;

pub use app::App;
