#![deny(rust_2018_idioms)]
#![deny(future_incompatible)]

#[macro_use]
mod macros;
mod table;

pub mod design;
pub mod rulebook;
pub mod simulation;
pub mod state;

pub use design::{DesignError, NFADesign};
pub use rulebook::{Label, Rule, Rulebook};
pub use simulation::Simulation;
pub use state::{StateAllocator, StateId};
