#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

uniffi::setup_scaffolding!();

pub mod algebra;
pub mod document;
pub mod error;
pub mod ffi;
pub mod models;

pub use algebra::{decorate_text, fill_gaps, merge};
pub use document::segment_text;
pub use error::{IntervalError, IntervalResult};
pub use models::{DecoratedText, Interval, MergedInterval};
