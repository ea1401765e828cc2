use crate::error::InferenceError;
use ndarray::{Array3, ArrayD, Axis, Ix3};

/// Drops the batch and channel axes from a model output, recovering the
/// spatial shape of the original input. Handles both [1, D1, D2, D3, 1] and
/// [D1, D2, D3, 1] outputs; anything that does not squeeze down to the
/// expected spatial shape is an invocation error.
pub fn squeeze_prediction(
    output: ArrayD<f32>,
    spatial: [usize; 3],
) -> Result<Array3<f32>, InferenceError> {
    let mut out = output;
    // Drop the axes by position, batch first, then channel. Spatial
    // dimensions of size 1 must survive the squeeze.
    if out.ndim() == 5 && out.shape()[0] == 1 {
        out = out.index_axis_move(Axis(0), 0);
    }
    if out.ndim() == 4 && out.shape()[3] == 1 {
        out = out.index_axis_move(Axis(3), 0);
    }

    if out.shape() != &spatial[..] {
        return Err(InferenceError::ShapeMismatch {
            expected: spatial.to_vec(),
            got: out.shape().to_vec(),
        });
    }

    Ok(out.into_dimensionality::<Ix3>()?)
}

/// Undoes the forward normalization applied during training
/// (shift, log10, scale by 1.5, shift by 1.0), element-wise.
pub fn inverse_transform(v: f32) -> f32 {
    10f32.powf((v + 1.0) * 1.5) - (1.0 + 1e-5)
}

/// Maps a prediction from normalized log space back to physical units.
pub fn rescale(mut grid: Array3<f32>) -> Array3<f32> {
    grid.mapv_inplace(inverse_transform);
    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::IxDyn;

    /// The normalization applied upstream during training; mirrored here only
    /// to check the round trip.
    fn forward_transform(x: f32) -> f32 {
        (x + 1.0 + 1e-5).log10() / 1.5 - 1.0
    }

    #[test]
    fn test_squeeze_batched_output() {
        let output = ArrayD::<f32>::zeros(IxDyn(&[1, 4, 5, 6, 1]));
        let squeezed = squeeze_prediction(output, [4, 5, 6]).unwrap();
        assert_eq!(squeezed.shape(), &[4, 5, 6]);
    }

    #[test]
    fn test_squeeze_unbatched_output() {
        let output = ArrayD::<f32>::zeros(IxDyn(&[4, 5, 6, 1]));
        let squeezed = squeeze_prediction(output, [4, 5, 6]).unwrap();
        assert_eq!(squeezed.shape(), &[4, 5, 6]);
    }

    #[test]
    fn test_squeeze_preserves_values() {
        let output =
            ArrayD::from_shape_fn(IxDyn(&[1, 2, 3, 4, 1]), |idx| (idx[1] * 12 + idx[2] * 4 + idx[3]) as f32);
        let squeezed = squeeze_prediction(output, [2, 3, 4]).unwrap();

        for ((i, j, k), &value) in squeezed.indexed_iter() {
            assert_eq!(value, (i * 12 + j * 4 + k) as f32);
        }
    }

    #[test]
    fn test_squeeze_keeps_unit_spatial_dimensions() {
        // A leading spatial dimension of size 1 must survive: (1,1,4,4,1)
        // squeezes to (1,4,4), not to (4,4,1)
        let output = ArrayD::<f32>::zeros(IxDyn(&[1, 1, 4, 4, 1]));
        let squeezed = squeeze_prediction(output, [1, 4, 4]).unwrap();
        assert_eq!(squeezed.shape(), &[1, 4, 4]);
    }

    #[test]
    fn test_squeeze_keeps_trailing_unit_spatial_dimension() {
        let output = ArrayD::<f32>::zeros(IxDyn(&[1, 4, 4, 1, 1]));
        let squeezed = squeeze_prediction(output, [4, 4, 1]).unwrap();
        assert_eq!(squeezed.shape(), &[4, 4, 1]);
    }

    #[test]
    fn test_squeeze_unbatched_output_with_unit_spatial_dimension() {
        let output = ArrayD::<f32>::zeros(IxDyn(&[1, 4, 4, 1]));
        let squeezed = squeeze_prediction(output, [1, 4, 4]).unwrap();
        assert_eq!(squeezed.shape(), &[1, 4, 4]);
    }

    #[test]
    fn test_squeeze_rejects_wrong_spatial_shape() {
        let output = ArrayD::<f32>::zeros(IxDyn(&[1, 4, 4, 4, 1]));
        match squeeze_prediction(output, [8, 8, 8]).unwrap_err() {
            InferenceError::ShapeMismatch { expected, got } => {
                assert_eq!(expected, vec![8, 8, 8]);
                assert_eq!(got, vec![4, 4, 4]);
            }
            other => panic!("Expected ShapeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_squeeze_rejects_extra_non_unit_axis() {
        let output = ArrayD::<f32>::zeros(IxDyn(&[2, 4, 4, 4]));
        assert!(squeeze_prediction(output, [4, 4, 4]).is_err());
    }

    #[test]
    fn test_inverse_transform_of_zero() {
        // 10^1.5 - 1.00001
        let value = inverse_transform(0.0);
        assert!((value - 30.6228).abs() < 1e-3);
    }

    #[test]
    fn test_inverse_transform_round_trip() {
        // Values inside the forward transform's domain (x > -1 - 1e-5)
        for &x in &[0.0f32, 0.5, 1.0, 10.0, 100.0, 2500.0] {
            let round_tripped = inverse_transform(forward_transform(x));
            let tolerance = (x.abs() * 1e-4).max(1e-3);
            assert!(
                (round_tripped - x).abs() < tolerance,
                "round trip of {x} gave {round_tripped}"
            );
        }
    }

    #[test]
    fn test_inverse_transform_no_nonfinite_special_casing() {
        assert!(inverse_transform(f32::INFINITY).is_infinite());
        assert!(inverse_transform(f32::NAN).is_nan());
    }

    #[test]
    fn test_rescale_applies_elementwise() {
        let grid = Array3::<f32>::zeros((4, 4, 4));
        let rescaled = rescale(grid);
        for &value in rescaled.iter() {
            assert!((value - 30.6228).abs() < 1e-3);
        }
    }
}
