use crate::rulebook::Rulebook;
use crate::simulation::Simulation;
use crate::state::StateId;

use std::collections::HashSet;
use std::hash::Hash;

/// The blueprint of a non-deterministic finite automaton with epsilon rules: a start state, a
/// set of accepting states and the rules between them.
///
/// A design is never changed by running it; every call to [`NFADesign::accepts`] starts a new
/// [`Simulation`].
#[derive(Clone, Debug)]
pub struct NFADesign<T>
where
    T: Clone + Eq + Hash,
{
    start_state: StateId,
    accepting_states: HashSet<StateId>,
    rulebook: Rulebook<T>,
}

/// Error returned when assembling a design whose states are not connected to its rulebook.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DesignError {
    #[error("start state {0} does not appear in any rule")]
    UnknownStartState(StateId),
    #[error("accepting state {0} does not appear in any rule")]
    UnknownAcceptingState(StateId),
}

impl<T> NFADesign<T>
where
    T: Clone + Eq + Hash,
{
    /// Create a design, checking that the start state and every accepting state appear in some
    /// rule. A design without rules is only allowed when its start state is its sole accepting
    /// state.
    #[inline]
    pub fn new(
        start_state: StateId,
        accepting_states: HashSet<StateId>,
        rulebook: Rulebook<T>,
    ) -> Result<Self, DesignError> {
        validate(start_state, &accepting_states, &rulebook)?;
        Ok(Self::from_parts(start_state, accepting_states, rulebook))
    }

    /// Create a design without validation. Constructions that are correct by design (such as
    /// Thompson's construction) use this; the checks of [`NFADesign::new`] still run in debug
    /// builds.
    #[inline]
    pub fn from_parts(
        start_state: StateId,
        accepting_states: HashSet<StateId>,
        rulebook: Rulebook<T>,
    ) -> Self {
        debug_assert_eq!(
            Ok(()),
            validate(start_state, &accepting_states, &rulebook),
            "malformed NFA design"
        );

        Self {
            start_state,
            accepting_states,
            rulebook,
        }
    }

    #[inline]
    pub fn start_state(&self) -> StateId {
        self.start_state
    }

    #[inline]
    pub fn accepting_states(&self) -> &HashSet<StateId> {
        &self.accepting_states
    }

    #[inline]
    pub fn rulebook(&self) -> &Rulebook<T> {
        &self.rulebook
    }

    /// Take the design apart into its start state, accepting states and rulebook.
    #[inline]
    pub fn into_parts(self) -> (StateId, HashSet<StateId>, Rulebook<T>) {
        (self.start_state, self.accepting_states, self.rulebook)
    }

    #[inline]
    pub fn is_accepting_state(&self, state: &StateId) -> bool {
        self.accepting_states.contains(state)
    }

    /// The number of distinct states referenced by the design.
    pub fn total_states(&self) -> usize {
        let mut states: HashSet<StateId> = self.rulebook.states().collect();
        states.insert(self.start_state);
        states.extend(self.accepting_states.iter().copied());
        states.len()
    }

    /// Start a fresh run of the automaton, positioned at the epsilon-closure of the start state.
    #[inline]
    pub fn to_simulation(&self) -> Simulation<'_, T> {
        Simulation::new(self)
    }

    /// Determines if the whole of the given input is accepted by the automaton.
    #[inline]
    pub fn accepts<I>(&self, input: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        let mut simulation = self.to_simulation();
        simulation.read_all(input);
        simulation.is_accepting()
    }
}

fn validate<T>(
    start_state: StateId,
    accepting_states: &HashSet<StateId>,
    rulebook: &Rulebook<T>,
) -> Result<(), DesignError>
where
    T: Clone + Eq + Hash,
{
    if rulebook.is_empty()
        && accepting_states.len() == 1
        && accepting_states.contains(&start_state)
    {
        return Ok(());
    }

    if !rulebook.contains_state(&start_state) {
        return Err(DesignError::UnknownStartState(start_state));
    }

    // Report the lowest offending state so the error does not depend on hash order.
    match accepting_states
        .iter()
        .filter(|state| !rulebook.contains_state(state))
        .min()
    {
        Some(&state) => Err(DesignError::UnknownAcceptingState(state)),
        None => Ok(()),
    }
}
