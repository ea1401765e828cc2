use crate::config::ModelConfig;
use crate::error::InferenceError;
use crate::model::registry::ComponentRegistry;
use ort::session::{builder::GraphOptimizationLevel, Session};
use tracing::info;

// Initialize the global environment for ORT (only needed once)
pub fn init_ort() -> Result<(), InferenceError> {
    ort::init().with_name("halonnx").commit()?;
    Ok(())
}

/// Loads a model artifact from disk and creates an inference session.
///
/// Every custom component the artifact references must already be present in
/// `registry`; the names are checked before the artifact is parsed so a
/// missing registration fails the same way a corrupt file does.
pub fn load_model(
    config: &ModelConfig,
    registry: &ComponentRegistry,
) -> Result<Session, InferenceError> {
    let path = config.path.as_path();
    if !path.exists() {
        return Err(InferenceError::ModelNotFound(path.to_path_buf()));
    }

    for name in &config.custom_objects {
        if !registry.contains(name) {
            return Err(InferenceError::UnregisteredComponent(name.clone()));
        }
    }

    let session = Session::builder()?
        .with_optimization_level(GraphOptimizationLevel::Level3)?
        .with_intra_threads(4)?
        .commit_from_file(path)
        .map_err(|source| InferenceError::ModelLoad {
            path: path.to_path_buf(),
            source,
        })?;

    info!("loaded model: {}", path.display());
    for (i, input) in session.inputs.iter().enumerate() {
        info!("  input {}: {} ({:?})", i, input.name, input.input_type);
    }

    Ok(session)
}
