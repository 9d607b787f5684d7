//! Core domain concepts shared across all subdomains.
//!
//! - [`question::Question`]: a validated multiple-choice question
//! - [`subject`]: case-insensitive subject matching
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod question;
pub mod subject;
