//! Console adapters for the application ports

pub mod authoring;
pub mod io;
pub mod quiz;

pub use authoring::ConsoleAuthoring;
pub use io::ConsoleIo;
pub use quiz::ConsoleQuizInteraction;
