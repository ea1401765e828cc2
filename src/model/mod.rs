pub mod loader;
pub mod predictor;
pub mod registry;
