use kalman_rs::prelude::*;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Serialize)]
struct ValidationData {
    name: String,
    notes: String,
    input: InputData,
    params: Params,
    #[serde(skip_deserializing)]
    result: ResultData,
}

#[derive(Debug, Deserialize, Serialize)]
struct InputData {
    measurements: Vec<f64>,
}

#[derive(Debug, Deserialize, Serialize)]
struct Params {
    transition: f64,
    observation: f64,
    process_noise: f64,
    measurement_noise: f64,
    initial_estimate: f64,
    initial_covariance: f64,
}

#[derive(Debug, Deserialize, Serialize, Default)]
struct ResultData {
    estimates: Vec<f64>,
    covariances: Vec<f64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let input_dir = Path::new("../output/filterpy");
    let output_dir = Path::new("../output/kalman_rs");

    if !input_dir.exists() {
        eprintln!(
            "Input directory {:?} does not exist. Run validate.py first.",
            input_dir
        );
        return Ok(());
    }

    fs::create_dir_all(output_dir)?;

    for entry in fs::read_dir(input_dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("json") {
            println!("Processing {:?}", path.file_name().unwrap());
            process_file(&path, output_dir)?;
        }
    }

    Ok(())
}

fn process_file(input_path: &Path, output_dir: &Path) -> Result<(), Box<dyn Error>> {
    let file = fs::File::open(input_path)?;
    let mut data: ValidationData = serde_json::from_reader(file)?;

    let model = Kalman::new()
        .transition(data.params.transition)
        .observation(data.params.observation)
        .process_noise(data.params.process_noise)
        .measurement_noise(data.params.measurement_noise)
        .initial_estimate(data.params.initial_estimate)
        .initial_covariance(data.params.initial_covariance)
        .adapter(Batch)
        .build()?;

    let result = model.run(&data.input.measurements).map_err(KalmanError::from)?;

    data.result = ResultData {
        estimates: result.estimates,
        covariances: result.covariances,
    };

    let output_path = output_dir.join(input_path.file_name().unwrap());
    let output_file = fs::File::create(&output_path)?;
    serde_json::to_writer_pretty(output_file, &data)?;
    println!("  Wrote {:?}", output_path);

    Ok(())
}
