//! Question store adapters.
//!
//! Provides [`JsonQuestionStore`], a pretty-printed JSON file that implements
//! the [`QuestionStore`](quizmaker_application::QuestionStore) port.

mod json_store;

pub use json_store::{DEFAULT_STORE_PATH, JsonQuestionStore};
