//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

/// Side effects returned from `update`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a redraw of the window
    Redraw,
}

impl Cmd {
    /// Whether this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
        }
    }

    /// Create a redraw command if `changed`, otherwise nothing
    pub fn redraw_if(changed: bool) -> Option<Cmd> {
        changed.then_some(Cmd::Redraw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_needs_redraw() {
        assert!(!Cmd::None.needs_redraw());
        assert!(Cmd::Redraw.needs_redraw());
    }

    #[test]
    fn test_redraw_if() {
        assert_eq!(Cmd::redraw_if(true), Some(Cmd::Redraw));
        assert_eq!(Cmd::redraw_if(false), None);
    }
}
