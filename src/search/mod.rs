//! Shortest word ladder search
//!
//! Breadth-first search over the implicit word graph with a single global
//! reservation map: every word is claimed by exactly one parent, at the depth
//! where it was first reached.

mod engine;
mod error;
pub mod expander;
mod ladder;
mod reservation;

pub use engine::{LadderSearch, find_ladder, validate_pair};
pub use error::{InputViolation, SearchError};
pub use expander::{Expander, ExpanderType, ParallelExpander, SerialExpander};
pub use ladder::Ladder;
pub use reservation::{Reservation, Reservations};
