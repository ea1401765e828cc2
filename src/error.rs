use ndarray::ShapeError;
use ndarray_npy::{ReadNpyError, WriteNpyError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InferenceError {
    #[error("Input array not found at path: {0}")]
    InputNotFound(PathBuf),

    #[error("Failed to read input array {path}: {source}")]
    InputFormat {
        path: PathBuf,
        #[source]
        source: ReadNpyError,
    },

    #[error("Model not found at path: {0}")]
    ModelNotFound(PathBuf),

    #[error("Failed to load model {path}: {source}")]
    ModelLoad {
        path: PathBuf,
        #[source]
        source: ort::Error,
    },

    #[error("Model references unregistered custom component: {0}")]
    UnregisteredComponent(String),

    #[error("Model invocation failed: {0}")]
    ModelInvocation(#[source] ort::Error),

    #[error("Output shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        got: Vec<usize>,
    },

    #[error("Failed to write output array {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: WriteNpyError,
    },

    #[error("ONNX Runtime error: {0}")]
    OrtError(#[from] ort::Error),

    #[error("Shape error: {0}")]
    ShapeError(#[from] ShapeError),
}
