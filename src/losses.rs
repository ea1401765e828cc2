use ndarray::ArrayViewD;

/// A named auxiliary computation graph embedded in a model artifact.
///
/// These are optimizer-time constructs: the loader must be able to resolve
/// them by name to deserialize an artifact, but they are never invoked during
/// inference.
pub trait LossFn: Send + Sync {
    fn call(&self, y_true: ArrayViewD<'_, f32>, y_pred: ArrayViewD<'_, f32>) -> f32;
}

/// Combined Dice and mean-absolute-error loss used to train the new-loss
/// model. Dice captures the shape of the halo field, MAE its intensity;
/// `alpha` weights the trade-off between the two.
pub struct DiceAndMae {
    pub alpha: f32,
    pub smooth: f32,
}

impl Default for DiceAndMae {
    fn default() -> Self {
        Self {
            alpha: 0.5,
            smooth: 1e-6,
        }
    }
}

impl LossFn for DiceAndMae {
    fn call(&self, y_true: ArrayViewD<'_, f32>, y_pred: ArrayViewD<'_, f32>) -> f32 {
        debug_assert_eq!(
            y_true.shape(),
            y_pred.shape(),
            "loss tensors must have matching shapes"
        );

        let mut intersection = 0.0f32;
        let mut sum_true = 0.0f32;
        let mut sum_pred = 0.0f32;
        let mut abs_sum = 0.0f32;
        let mut count = 0usize;

        for (&t, &p) in y_true.iter().zip(y_pred.iter()) {
            intersection += t * p;
            sum_true += t * t;
            sum_pred += p * p;
            abs_sum += (t - p).abs();
            count += 1;
        }

        let dice_loss =
            1.0 - (2.0 * intersection + self.smooth) / (sum_true + sum_pred + self.smooth);
        let mae_loss = if count == 0 {
            0.0
        } else {
            abs_sum / count as f32
        };

        self.alpha * dice_loss + (1.0 - self.alpha) * mae_loss
    }
}
