use crate::config::{ModelConfig, RunnerConfig};
use crate::error::InferenceError;
use crate::model::loader;
use crate::model::predictor::{OrtPredictor, Predictor};
use crate::model::registry::ComponentRegistry;
use crate::{io, postprocessing, preprocessing};
use metrics::histogram;
use std::time::Instant;
use tracing::info;

/// Runs the full inference sequence with the model selected by the config.
pub fn run(config: &RunnerConfig, registry: &ComponentRegistry) -> Result<(), InferenceError> {
    run_with_loader(config, |model_conf| {
        let session = loader::load_model(model_conf, registry)?;
        Ok(Box::new(OrtPredictor::new(session)))
    })
}

/// The sequence behind [`run`], with model loading abstracted so tests can
/// substitute a mock predictor. Steps execute in the order the artifacts are
/// needed: input first, then the model, so a missing input fails before a
/// missing model does.
pub fn run_with_loader<F>(config: &RunnerConfig, load: F) -> Result<(), InferenceError>
where
    F: FnOnce(&ModelConfig) -> Result<Box<dyn Predictor>, InferenceError>,
{
    info!("inference run started, variant {:?}", config.variant);

    info!("loading input array from {}", config.input_path.display());
    let input = io::read_input(&config.input_path)?;
    let spatial = {
        let s = input.shape();
        [s[0], s[1], s[2]]
    };
    info!("loaded input with shape {:?}", input.shape());

    info!("expanding dimensions");
    let tensor = preprocessing::to_model_input(input);
    info!("input reshaped to {:?}", tensor.shape());

    let model_conf = config.model();
    info!("loading model from {}", model_conf.path.display());
    let mut predictor = load(model_conf)?;
    info!("model loaded successfully");

    info!("running inference");
    let start = Instant::now();
    let output = predictor.predict(tensor.into_dyn())?;
    histogram!("inference_duration_seconds", start.elapsed().as_secs_f64());
    info!("inference complete, output shape {:?}", output.shape());

    let mut prediction = postprocessing::squeeze_prediction(output, spatial)?;
    if config.variant.rescales_output() {
        info!("rescaling output to physical units");
        prediction = postprocessing::rescale(prediction);
    }

    info!("saving output to {}", config.output_path.display());
    io::write_output(&config.output_path, &prediction)?;
    info!("output saved successfully");

    Ok(())
}
