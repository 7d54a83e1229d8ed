//! Romanized kana syllable → six-dot braille cell conversion.
//!
//! One call converts one uppercase romanized mora ("A", "KA", "YO", "N")
//! into its braille cell, a 3×2 grid of raised/flat dot states. Callers
//! are expected to segment words into mora tokens before calling and to
//! render or concatenate the resulting cells afterwards; neither concern
//! lives here.

pub mod cell;
pub mod mapper;

pub use cell::Cell;
pub use mapper::{ConvertError, SyllableMapper};
