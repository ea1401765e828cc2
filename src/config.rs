use serde::Deserialize;
use std::path::PathBuf;

#[derive(Deserialize, Clone)]
pub struct RunnerConfig {
    pub variant: Variant,
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub debug_log_path: PathBuf,
    pub models: ModelPaths,
}

#[derive(Deserialize, Clone)]
pub struct ModelPaths {
    pub primary: ModelConfig,
    pub new_loss: ModelConfig,
}

#[derive(Deserialize, Clone)]
pub struct ModelConfig {
    pub path: PathBuf,
    /// Names of the auxiliary components the artifact references. Each must
    /// be registered before the artifact can be deserialized.
    #[serde(default)]
    pub custom_objects: Vec<String>,
}

#[derive(Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    Primary,
    NewLoss,
}

impl RunnerConfig {
    /// The model entry selected by the configured variant.
    pub fn model(&self) -> &ModelConfig {
        match self.variant {
            Variant::Primary => &self.models.primary,
            Variant::NewLoss => &self.models.new_loss,
        }
    }
}

impl Variant {
    /// The new-loss model was trained on log-scaled densities, so its raw
    /// output must be mapped back to physical units after inference.
    pub fn rescales_output(self) -> bool {
        matches!(self, Variant::NewLoss)
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            variant: Variant::Primary,
            input_path: PathBuf::from("user_input.npy"),
            output_path: PathBuf::from("output.npy"),
            debug_log_path: PathBuf::from("run_model_debug.log"),
            models: ModelPaths {
                primary: ModelConfig {
                    path: PathBuf::from("model_final.onnx"),
                    custom_objects: vec!["DiceAndMAE".to_string()],
                },
                new_loss: ModelConfig {
                    path: PathBuf::from("model_final_newloss.onnx"),
                    custom_objects: vec!["DiceAndMAE".to_string()],
                },
            },
        }
    }
}
