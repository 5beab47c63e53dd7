#![deny(rust_2018_idioms)]
#![deny(future_incompatible)]

mod pattern;


pub use automata;
pub use automata::NFADesign;
pub use pattern::Pattern;

/// Compile a pattern into an NFA design. Equivalent to [`Pattern::to_nfa_design`].
#[inline]
pub fn compile(pattern: &Pattern) -> NFADesign<char> {
    pattern.to_nfa_design()
}
