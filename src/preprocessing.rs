use ndarray::{Array3, Array5, Axis};

/// Lifts a spatial grid into the layout the network expects.
/// Returns a tensor of shape [1, D1, D2, D3, 1].
pub fn to_model_input(grid: Array3<f32>) -> Array5<f32> {
    // Append the channel axis, then prepend the batch axis
    let with_channel = grid.insert_axis(Axis(3));
    let batched = with_channel.insert_axis(Axis(0));

    // Ensure standard layout (contiguous)
    batched.as_standard_layout().to_owned()
}
