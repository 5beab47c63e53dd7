use crate::design::NFADesign;
use crate::state::StateId;

use std::collections::HashSet;
use std::hash::Hash;

use log::trace;

/// A single run of an [`NFADesign`] over some input. The simulation tracks every state the
/// automaton could be in after the symbols read so far.
#[derive(Debug)]
pub struct Simulation<'d, T>
where
    T: Clone + Eq + Hash,
{
    design: &'d NFADesign<T>,
    current_states: HashSet<StateId>,
}

impl<'d, T> Simulation<'d, T>
where
    T: Clone + Eq + Hash,
{
    #[inline]
    pub fn new(design: &'d NFADesign<T>) -> Self {
        let current_states = design
            .rulebook()
            .epsilon_closure(&hash_set![design.start_state()]);

        Self {
            design,
            current_states,
        }
    }

    #[inline]
    pub fn current_states(&self) -> &HashSet<StateId> {
        &self.current_states
    }

    /// Consume one input symbol.
    #[inline]
    pub fn read_symbol(&mut self, symbol: T) {
        let next = self
            .design
            .rulebook()
            .next_states(&self.current_states, symbol);

        trace!(
            "nfa step: {} state(s) -> {} state(s)",
            self.current_states.len(),
            next.len()
        );
        self.current_states = next;
    }

    /// Consume every symbol of `input`. Reading stops early once the simulation is stuck, as no
    /// further input can revive it.
    #[inline]
    pub fn read_all<I>(&mut self, input: I)
    where
        I: IntoIterator<Item = T>,
    {
        for symbol in input {
            if self.is_stuck() {
                trace!("nfa stuck, skipping remaining input");
                break;
            }
            self.read_symbol(symbol);
        }
    }

    /// Determines if any of the current states is accepting.
    #[inline]
    pub fn is_accepting(&self) -> bool {
        self.current_states
            .iter()
            .any(|state| self.design.is_accepting_state(state))
    }

    /// Determines if the automaton has no current states left.
    #[inline]
    pub fn is_stuck(&self) -> bool {
        self.current_states.is_empty()
    }
}
