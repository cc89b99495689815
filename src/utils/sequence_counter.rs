use crate::constants::DEFAULT_INITIAL_SEQUENCE_ID;

/// A per-client counter which issues request correlation IDs.
///
/// Unlike a global atomic counter, this is owned by a single client and is
/// only ever touched while that client's channel lock is held, so plain
/// `&mut self` access is all the synchronization it needs.
///
/// IDs wrap on overflow. Only one call is ever outstanding at a time, so a
/// wrapped value can never collide with a live request.
#[derive(Debug, Clone)]
pub struct SequenceCounter {
    current: i32,
}

impl SequenceCounter {
    pub fn new() -> Self {
        Self::starting_after(DEFAULT_INITIAL_SEQUENCE_ID)
    }

    /// Creates a counter whose first issued ID is `current + 1` (wrapping).
    pub fn starting_after(current: i32) -> Self {
        Self { current }
    }

    /// Increments the counter and returns the new value.
    #[inline]
    pub fn next_id(&mut self) -> i32 {
        self.current = self.current.wrapping_add(1);
        self.current
    }

    /// The most recently issued ID.
    #[inline]
    pub fn current(&self) -> i32 {
        self.current
    }
}

impl Default for SequenceCounter {
    fn default() -> Self {
        Self::new()
    }
}
