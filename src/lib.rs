pub mod config;
pub mod error;
pub mod io;
pub mod logging;
pub mod losses;
pub mod model;
pub mod postprocessing;
pub mod preprocessing;
pub mod runner;


// Re-export common types
pub use error::InferenceError;
