//! The interval algebra: gap filling, merging with attribution and text
//! decoration. Each stage is usable on its own.

mod boundary;
pub mod decorate;
pub mod gaps;
pub mod merge;

pub use decorate::decorate_text;
pub use gaps::fill_gaps;
pub use merge::merge;
