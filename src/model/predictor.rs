use crate::error::InferenceError;
use ndarray::{ArrayD, IxDyn};
use ort::session::Session;
use ort::value::Value;

/// A loaded model behind its single capability: map a tensor to a tensor.
///
/// Tests substitute a mock; production code wraps an ORT session.
pub trait Predictor {
    fn predict(&mut self, input: ArrayD<f32>) -> Result<ArrayD<f32>, InferenceError>;
}

pub struct OrtPredictor {
    session: Session,
}

impl OrtPredictor {
    pub fn new(session: Session) -> Self {
        Self { session }
    }
}

impl Predictor for OrtPredictor {
    fn predict(&mut self, input: ArrayD<f32>) -> Result<ArrayD<f32>, InferenceError> {
        let input_name = self.session.inputs[0].name.clone();

        let input = input.as_standard_layout().to_owned();
        let shape = input.shape().to_vec();
        let data = input.into_raw_vec().into_boxed_slice();
        let input_value =
            Value::from_array((shape, data)).map_err(InferenceError::ModelInvocation)?;

        let outputs = self
            .session
            .run(ort::inputs![input_name => input_value])
            .map_err(InferenceError::ModelInvocation)?;

        let (shape, data) = outputs[0]
            .try_extract_tensor::<f32>()
            .map_err(InferenceError::ModelInvocation)?;
        let dims: Vec<usize> = shape.iter().map(|&d| d as usize).collect();

        Ok(ArrayD::from_shape_vec(IxDyn(&dims), data.to_vec())?)
    }
}
