//! Body content of a floating panel
//!
//! The output panel shows whatever the last run produced: a placeholder
//! hint, a canvas of some size, or an error. A `ContentHandle` lets the code
//! that runs user programs replace that content without reaching into the
//! panel itself.

use std::cell::RefCell;
use std::rc::Rc;

/// Hint shown before anything has been run
pub const RUN_HINT: &str = "Use CTRL/CMD + S to run!";

/// What a panel body currently displays
#[derive(Debug, Clone, PartialEq)]
pub enum PanelContent {
    /// Centered hint text
    Hint(String),
    /// A canvas created by the last run
    Canvas { width: u32, height: u32 },
    /// The last run failed
    Error(String),
}

impl Default for PanelContent {
    fn default() -> Self {
        PanelContent::Hint(RUN_HINT.to_string())
    }
}

/// Shared, replaceable panel body
#[derive(Debug, Clone, Default)]
pub struct ContentHandle(Rc<RefCell<PanelContent>>);

impl ContentHandle {
    /// Replace the current content; the previous one is discarded
    pub fn replace(&self, content: PanelContent) -> PanelContent {
        self.0.replace(content)
    }

    pub fn get(&self) -> PanelContent {
        self.0.borrow().clone()
    }

    /// Whether two handles point at the same panel body
    pub fn same_slot(&self, other: &ContentHandle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
