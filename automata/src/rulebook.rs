use crate::state::StateId;
use crate::table::Table;

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::iter::FromIterator;

use im::Vector;

/// The label on a rule between states.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Label<T> {
    /// A rule on some input symbol.
    Symbol(T),
    /// An epsilon rule allows the automaton to change its state spontaneously without consuming
    /// an input symbol.
    Epsilon,
}

impl<T> Label<T> {
    #[inline]
    pub fn is_epsilon(&self) -> bool {
        matches!(self, Label::Epsilon)
    }
}

impl<T> From<T> for Label<T> {
    #[inline]
    fn from(symbol: T) -> Self {
        Label::Symbol(symbol)
    }
}

impl<T: fmt::Display> fmt::Display for Label<T> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Symbol(symbol) => fmt::Display::fmt(symbol, f),
            Label::Epsilon => f.write_str("ε"),
        }
    }
}

/// A single rule `source --label--> target`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Rule<T> {
    source: StateId,
    label: Label<T>,
    target: StateId,
}

impl<T> Rule<T> {
    #[inline]
    pub const fn new(source: StateId, label: Label<T>, target: StateId) -> Self {
        Self {
            source,
            label,
            target,
        }
    }

    /// A rule that consumes `symbol`.
    #[inline]
    pub const fn symbol(source: StateId, symbol: T, target: StateId) -> Self {
        Self::new(source, Label::Symbol(symbol), target)
    }

    /// A rule that consumes nothing.
    #[inline]
    pub const fn epsilon(source: StateId, target: StateId) -> Self {
        Self::new(source, Label::Epsilon, target)
    }

    /// The state this rule leaves.
    #[inline]
    pub const fn source(&self) -> StateId {
        self.source
    }

    #[inline]
    pub const fn label(&self) -> &Label<T> {
        &self.label
    }

    /// The state this rule leads to.
    #[inline]
    pub const fn target(&self) -> StateId {
        self.target
    }
}

impl<T: PartialEq> Rule<T> {
    /// Determines if this rule can be taken from `state` on `label`.
    #[inline]
    pub fn applies_to(&self, state: StateId, label: &Label<T>) -> bool {
        self.source == state && self.label == *label
    }
}

impl<T: fmt::Display> fmt::Display for Rule<T> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} --{}--> {}", self.source, self.label, self.target)
    }
}

/// An immutable collection of rules.
///
/// Rules are kept in the order they were given, which only matters for display. Rules, states
/// and the lookup index are all persistent, so composing rulebooks with [`Rulebook::merge`] or
/// [`Rulebook::with_rules`] shares the existing parts and only pays for what is added.
#[derive(Clone, Debug)]
pub struct Rulebook<T>
where
    T: Clone + Eq + Hash,
{
    rules: Vector<Rule<T>>,
    /// Every state mentioned by some rule.
    states: im::HashSet<StateId>,
    /// Targets by source state and label.
    targets: Table<StateId, Label<T>, Vec<StateId>>,
}

impl<T> Rulebook<T>
where
    T: Clone + Eq + Hash,
{
    #[inline]
    pub fn new<I>(rules: I) -> Self
    where
        I: IntoIterator<Item = Rule<T>>,
    {
        let mut rulebook = Self::default();
        rulebook.add_rules(rules);
        rulebook
    }

    fn add_rules<I>(&mut self, rules: I)
    where
        I: IntoIterator<Item = Rule<T>>,
    {
        for rule in rules {
            self.states.insert(rule.source);
            self.states.insert(rule.target);

            let target = rule.target;
            self.targets
                .set_or(rule.source, rule.label.clone(), vec![target], |v| {
                    v.push(target)
                });
            self.rules.push_back(rule);
        }
    }

    /// A new rulebook with the rules of `self` followed by the rules of `other`. The index of the
    /// smaller rulebook is folded into that of the larger one.
    pub fn merge(&self, other: &Rulebook<T>) -> Rulebook<T> {
        let mut rules = self.rules.clone();
        rules.append(other.rules.clone());

        let (larger, smaller) = if self.len() >= other.len() {
            (self, other)
        } else {
            (other, self)
        };

        let mut states = larger.states.clone();
        states.extend(smaller.states.iter().copied());

        let mut targets = larger.targets.clone();
        targets.absorb(&smaller.targets, |existing, more| {
            existing.extend_from_slice(more)
        });

        Self {
            rules,
            states,
            targets,
        }
    }

    /// A new rulebook with the rules of `self` followed by `extra`.
    #[inline]
    pub fn with_rules<I>(&self, extra: I) -> Rulebook<T>
    where
        I: IntoIterator<Item = Rule<T>>,
    {
        let mut rulebook = self.clone();
        rulebook.add_rules(extra);
        rulebook
    }

    #[inline]
    pub fn rules(&self) -> impl Iterator<Item = &Rule<T>> {
        self.rules.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Every state that appears at either end of some rule, in no particular order.
    #[inline]
    pub fn states(&self) -> impl Iterator<Item = StateId> + '_ {
        self.states.iter().copied()
    }

    #[inline]
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Determines if `state` appears in some rule.
    #[inline]
    pub fn contains_state(&self, state: &StateId) -> bool {
        self.states.contains(state)
    }

    /// The symbols consumed by some rule.
    #[inline]
    pub fn alphabet(&self) -> HashSet<&T> {
        self.rules
            .iter()
            .filter_map(|rule| match &rule.label {
                Label::Symbol(symbol) => Some(symbol),
                Label::Epsilon => None,
            })
            .collect()
    }

    /// The destinations of the rules leaving `state` on exactly `label`.
    #[inline]
    pub fn follow_rules_for(&self, state: StateId, label: &Label<T>) -> &[StateId] {
        self.targets
            .get(&state, label)
            .map_or(&[][..], |targets| targets.as_slice())
    }

    /// Returns the set of states reachable from any of `states` through a single rule on `label`.
    #[inline]
    pub fn rules_matching(&self, states: &HashSet<StateId>, label: &Label<T>) -> HashSet<StateId> {
        states
            .iter()
            .flat_map(|&state| self.follow_rules_for(state, label))
            .copied()
            .collect()
    }

    /// Computes the epsilon-closure of a set of states: the given states together with every
    /// state reachable from them on epsilon rules only.
    pub fn epsilon_closure(&self, states: &HashSet<StateId>) -> HashSet<StateId> {
        let mut closure = states.clone();
        let mut frontier: Vec<StateId> = states.iter().copied().collect();

        while let Some(state) = frontier.pop() {
            for &next in self.follow_rules_for(state, &Label::Epsilon) {
                // Only states seen for the first time are explored; epsilon cycles stop here.
                if closure.insert(next) {
                    frontier.push(next);
                }
            }
        }

        debug_assert!(
            closure.len() <= states.len() + self.state_count(),
            "epsilon-closure grew past the states of the rulebook"
        );
        closure
    }

    /// Consumes `symbol` from each of `states` and returns the epsilon-closure of the result.
    #[inline]
    pub fn next_states(&self, states: &HashSet<StateId>, symbol: T) -> HashSet<StateId> {
        self.epsilon_closure(&self.rules_matching(states, &Label::Symbol(symbol)))
    }
}

impl<T> Default for Rulebook<T>
where
    T: Clone + Eq + Hash,
{
    #[inline]
    fn default() -> Self {
        Self {
            rules: Vector::new(),
            states: im::HashSet::new(),
            targets: Table::new(),
        }
    }
}

impl<T> FromIterator<Rule<T>> for Rulebook<T>
where
    T: Clone + Eq + Hash,
{
    #[inline]
    fn from_iter<I: IntoIterator<Item = Rule<T>>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<T> fmt::Display for Rulebook<T>
where
    T: Clone + Eq + Hash + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rule) in self.rules.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(rule, f)?;
        }
        Ok(())
    }
}
