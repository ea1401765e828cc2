use crate::error::InferenceError;
use ndarray::Array3;
use ndarray_npy::{read_npy, write_npy};
use std::path::Path;

/// Reads the 3-D input grid from an `.npy` file.
pub fn read_input(path: &Path) -> Result<Array3<f32>, InferenceError> {
    if !path.exists() {
        return Err(InferenceError::InputNotFound(path.to_path_buf()));
    }

    read_npy(path).map_err(|source| InferenceError::InputFormat {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes the prediction grid to an `.npy` file.
pub fn write_output(path: &Path, grid: &Array3<f32>) -> Result<(), InferenceError> {
    write_npy(path, grid).map_err(|source| InferenceError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })
}
