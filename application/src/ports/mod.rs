//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! must implement.

pub mod question_authoring;
pub mod question_store;
pub mod quiz_interaction;
