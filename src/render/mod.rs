//! HTML generation: card fragments and host-page assembly.

pub mod cards;
pub mod page;
