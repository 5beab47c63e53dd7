use automata::{NFADesign, Rule, Rulebook, StateAllocator, StateId};

use std::collections::HashSet;
use std::fmt;
use std::iter;

use log::debug;

/// A regular expression syntax tree.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// Matches only the empty string.
    Empty,
    /// Matches a single character.
    Literal(char),
    /// Matches the first pattern followed by the second.
    Concatenate(Box<Self>, Box<Self>),
    /// Matches either of two patterns.
    Choose(Box<Self>, Box<Self>),
    /// Matches zero or more repetitions of a pattern.
    Repeat(Box<Self>),
}

impl Pattern {
    #[inline]
    pub fn empty() -> Self {
        Pattern::Empty
    }

    #[inline]
    pub fn literal(c: char) -> Self {
        Pattern::Literal(c)
    }

    #[inline]
    pub fn concatenate(first: Pattern, second: Pattern) -> Self {
        Pattern::Concatenate(Box::new(first), Box::new(second))
    }

    #[inline]
    pub fn choose(first: Pattern, second: Pattern) -> Self {
        Pattern::Choose(Box::new(first), Box::new(second))
    }

    #[inline]
    pub fn repeat(inner: Pattern) -> Self {
        Pattern::Repeat(Box::new(inner))
    }

    /// How tightly the pattern binds when written out. Higher binds tighter; atoms never need
    /// parentheses.
    #[inline]
    pub fn precedence(&self) -> u8 {
        match self {
            Pattern::Empty | Pattern::Literal(_) => 3,
            Pattern::Repeat(_) => 2,
            Pattern::Concatenate(..) => 1,
            Pattern::Choose(..) => 0,
        }
    }

    /// Render the pattern, wrapped in parentheses if it binds more loosely than
    /// `outer_precedence`.
    #[inline]
    pub fn bracket(&self, outer_precedence: u8) -> String {
        Bracketed(self, outer_precedence).to_string()
    }

    /// The pattern written between slashes, e.g. `/(a|b)*/`.
    #[inline]
    pub fn inspect(&self) -> String {
        format!("/{}/", self)
    }

    /// Compile the pattern into an NFA with Thompson's construction. Every call builds a new
    /// design with its own states.
    pub fn to_nfa_design(&self) -> NFADesign<char> {
        let mut states = StateAllocator::new();
        let design = self.build(&mut states);

        debug!(
            "compiled {} into {} states and {} rules",
            self.inspect(),
            states.allocated(),
            design.rulebook().len()
        );
        design
    }

    /// Determines if the whole of `input` is in the language of the pattern.
    #[inline]
    pub fn matches(&self, input: &str) -> bool {
        self.to_nfa_design().accepts(input.chars())
    }

    /// Builds the designs of the whole tree bottom-up. Children are built before their parent,
    /// left before right, and each parent then allocates its own fresh states. The traversal
    /// keeps its own stack, so deeply nested patterns do not exhaust the call stack.
    fn build(&self, states: &mut StateAllocator) -> NFADesign<char> {
        let mut work = vec![Step::Visit(self)];
        let mut built: Vec<NFADesign<char>> = Vec::new();

        while let Some(step) = work.pop() {
            match step {
                Step::Visit(pattern) => {
                    work.push(Step::Combine(pattern));
                    match pattern {
                        Pattern::Empty | Pattern::Literal(_) => {}
                        Pattern::Concatenate(first, second) | Pattern::Choose(first, second) => {
                            work.push(Step::Visit(&**second));
                            work.push(Step::Visit(&**first));
                        }
                        Pattern::Repeat(inner) => work.push(Step::Visit(&**inner)),
                    }
                }
                Step::Combine(pattern) => {
                    let design = pattern.combine(states, &mut built);
                    built.push(design);
                }
            }
        }

        pop_design(&mut built)
    }

    /// Builds the design for this node out of its children's designs, which sit on top of
    /// `built` with the last child uppermost.
    fn combine(
        &self,
        states: &mut StateAllocator,
        built: &mut Vec<NFADesign<char>>,
    ) -> NFADesign<char> {
        match self {
            Pattern::Empty => {
                let start = states.fresh();
                NFADesign::from_parts(start, iter::once(start).collect(), Rulebook::default())
            }
            Pattern::Literal(c) => {
                let start = states.fresh();
                let accept = states.fresh();
                let rulebook = Rulebook::new(iter::once(Rule::symbol(start, *c, accept)));
                NFADesign::from_parts(start, iter::once(accept).collect(), rulebook)
            }
            Pattern::Concatenate(..) => {
                let (second_start, second_accepting, second_rules) =
                    pop_design(built).into_parts();
                let (first_start, first_accepting, first_rules) = pop_design(built).into_parts();

                let bridges = sorted(&first_accepting)
                    .into_iter()
                    .map(|state| Rule::epsilon(state, second_start));
                let rulebook = first_rules.merge(&second_rules).with_rules(bridges);

                NFADesign::from_parts(first_start, second_accepting, rulebook)
            }
            Pattern::Choose(..) => {
                let (second_start, second_accepting, second_rules) =
                    pop_design(built).into_parts();
                let (first_start, first_accepting, first_rules) = pop_design(built).into_parts();
                let start = states.fresh();

                let mut accepting = first_accepting;
                accepting.extend(second_accepting);

                let forks = vec![
                    Rule::epsilon(start, first_start),
                    Rule::epsilon(start, second_start),
                ];
                let rulebook = first_rules.merge(&second_rules).with_rules(forks);

                NFADesign::from_parts(start, accepting, rulebook)
            }
            Pattern::Repeat(_) => {
                let (inner_start, inner_accepting, inner_rules) = pop_design(built).into_parts();
                let start = states.fresh();

                // Every exit loops back for another repetition; the new start doubles as the
                // accepting state for zero repetitions.
                let loops = sorted(&inner_accepting)
                    .into_iter()
                    .map(|state| Rule::epsilon(state, inner_start))
                    .chain(iter::once(Rule::epsilon(start, inner_start)));
                let rulebook = inner_rules.with_rules(loops);

                let mut accepting = inner_accepting;
                accepting.insert(start);

                NFADesign::from_parts(start, accepting, rulebook)
            }
        }
    }
}

enum Step<'p> {
    Visit(&'p Pattern),
    Combine(&'p Pattern),
}

fn pop_design(built: &mut Vec<NFADesign<char>>) -> NFADesign<char> {
    match built.pop() {
        Some(design) => design,
        None => unreachable!("every child is built before its parent"),
    }
}

fn sorted(states: &HashSet<StateId>) -> Vec<StateId> {
    let mut states: Vec<_> = states.iter().copied().collect();
    states.sort();
    states
}

struct Bracketed<'p>(&'p Pattern, u8);

impl fmt::Display for Bracketed<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Bracketed(pattern, outer_precedence) = *self;
        if pattern.precedence() < outer_precedence {
            write!(f, "({})", pattern)
        } else {
            write!(f, "{}", pattern)
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precedence = self.precedence();
        match self {
            Pattern::Empty => Ok(()),
            Pattern::Literal(c) => write!(f, "{}", c),
            Pattern::Concatenate(first, second) => write!(
                f,
                "{}{}",
                Bracketed(first, precedence),
                Bracketed(second, precedence)
            ),
            Pattern::Choose(first, second) => write!(
                f,
                "{}|{}",
                Bracketed(first, precedence),
                Bracketed(second, precedence)
            ),
            Pattern::Repeat(inner) => write!(f, "{}*", Bracketed(inner, precedence)),
        }
    }
}
