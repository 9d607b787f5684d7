//! Answer input handling.
//!
//! Users type choices as comma-separated 1-based numbers ("1, 3").
//! [`selection::AnswerSelection`] turns that into 0-based storage indexes.

pub mod selection;
