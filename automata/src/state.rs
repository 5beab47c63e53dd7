use std::fmt;

/// An opaque label for a state of an automaton. States carry no data of their own; two states
/// are the same state iff their ids are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateId(usize);

impl StateId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for StateId {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

/// Hands out fresh states for a single construction. States are labeled densely from 0, so an
/// automaton built with one allocator has states in the range `0..allocated()`.
///
/// One allocator must be shared by every step of a construction, otherwise two sub-automata may
/// end up with colliding states.
#[derive(Debug, Default)]
pub struct StateAllocator {
    next: usize,
}

impl StateAllocator {
    #[inline]
    pub fn new() -> Self {
        Self { next: 0 }
    }

    /// Create a state that has never been returned by this allocator before.
    #[inline]
    pub fn fresh(&mut self) -> StateId {
        let state = StateId(self.next);
        self.next += 1;
        state
    }

    /// The number of states created so far.
    #[inline]
    pub fn allocated(&self) -> usize {
        self.next
    }
}
