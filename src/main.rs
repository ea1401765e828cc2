use halonnx::config::RunnerConfig;
use halonnx::model::{loader, registry::ComponentRegistry};
use halonnx::{logging, runner};
use std::fs;
use std::io::ErrorKind;

fn main() -> anyhow::Result<()> {
    // 1. Load config, falling back to the upstream fixed file names
    let config: RunnerConfig = match fs::read_to_string("config.yaml") {
        Ok(content) => serde_yaml::from_str(&content)?,
        Err(e) if e.kind() == ErrorKind::NotFound => RunnerConfig::default(),
        Err(e) => return Err(e.into()),
    };

    // 2. Logging to stderr and the debug log file
    logging::init(&config.debug_log_path)?;
    tracing::info!("halonnx started");

    // 3. Init ORT and the custom components the artifacts reference
    loader::init_ort()?;
    let registry = ComponentRegistry::with_builtin();

    // 4. Run the single inference pass
    runner::run(&config, &registry)?;

    tracing::info!("halonnx completed");
    Ok(())
}
