//! Opaque identity tokens for interactive zones
//!
//! Every drag bar, resize grip and button gets its own `HandleId` when the
//! owning component is mounted. Hit-testing resolves a point to one of these
//! tokens and components compare tokens for equality to decide whether a
//! pointer-down belongs to them.

/// Identity of a single interactive zone (drag bar, resize grip, button)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandleId(u64);

impl HandleId {
    /// Raw numeric value, only meaningful for logging
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Hands out fresh, never-reused handle ids
#[derive(Debug, Default)]
pub struct HandleAllocator {
    next: u64,
}

impl HandleAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self) -> HandleId {
        let id = HandleId(self.next);
        self.next += 1;
        id
    }
}
