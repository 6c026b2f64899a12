//! Combined Visualization Examples for the Scalar Kalman Filter
//!
//! This script runs multiple scenarios to generate CSV data for visualization.
//! It covers:
//! 1. Denoising Demo (noisy sine wave, the classic comparison plot)
//! 2. Noise Ratio Comparison (effect of Q/R on tracking vs smoothing)
//! 3. Convergence (gain and covariance settling to their steady state)
//! 4. Model Mismatch (filtering a ramp with a random-walk model)

use kalman_rs::prelude::*;
use std::fs::File;
use std::io::Write;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Running All Visualization Examples...");
    println!("=====================================");
    println!();

    // Ensure output directory exists
    let output_dir = "../output/visual/";
    std::fs::create_dir_all(output_dir)?;
    println!("Output directory: {}", output_dir);
    println!();

    run_denoising_demo()?;
    println!();

    run_noise_ratio_comparison()?;
    println!();

    run_convergence()?;
    println!();

    run_model_mismatch()?;
    println!();

    println!("All examples completed successfully.");
    Ok(())
}

/// Noisy sine wave over [0, 10] with deterministic pseudo-noise.
fn noisy_sine(n: usize) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let mut t = Vec::with_capacity(n);
    let mut clean = Vec::with_capacity(n);
    let mut noisy = Vec::with_capacity(n);
    for i in 0..n {
        let ti = i as f64 * 10.0 / (n - 1) as f64;
        let signal = 2.0 * (0.8 * std::f64::consts::PI * ti).sin();
        let noise = ((i as f64 * 9.7).sin() + (i as f64 * 21.3).cos()) / 2.0;
        t.push(ti);
        clean.push(signal);
        noisy.push(signal + noise);
    }
    (t, clean, noisy)
}

/// 1. Denoising Demo
fn run_denoising_demo() -> Result<(), Box<dyn std::error::Error>> {
    println!("1. Denoising demo (noisy sine wave)");
    let (t, clean, noisy) = noisy_sine(100);

    let model = Kalman::new()
        .process_noise(1e-3)
        .measurement_noise(0.7e-2)
        .initial_estimate(0.0)
        .initial_covariance(1.0)
        .adapter(Batch)
        .build()?;
    let result = model.run(&noisy).map_err(KalmanError::from)?;

    let mut file = File::create("../output/visual/denoising_demo.csv")?;
    writeln!(file, "t,clean,noisy,estimate,covariance")?;
    for i in 0..t.len() {
        writeln!(
            file,
            "{},{},{},{},{}",
            t[i], clean[i], noisy[i], result.estimates[i], result.covariances[i]
        )?;
    }
    println!("  Wrote denoising_demo.csv");
    Ok(())
}

/// 2. Noise Ratio Comparison
fn run_noise_ratio_comparison() -> Result<(), Box<dyn std::error::Error>> {
    println!("2. Noise ratio comparison (Q/R sweep)");
    let (t, _, noisy) = noisy_sine(100);

    let ratios: [(&str, f64, f64); 3] = [
        ("smooth", 1e-5, 1e-1),
        ("balanced", 1e-3, 0.7e-2),
        ("tracking", 1e-1, 1e-3),
    ];

    let mut columns = Vec::new();
    for &(_, q, r) in &ratios {
        let model = Kalman::new()
            .process_noise(q)
            .measurement_noise(r)
            .adapter(Batch)
            .build()?;
        let result = model.run(&noisy).map_err(KalmanError::from)?;
        columns.push(result.estimates);
    }

    let mut file = File::create("../output/visual/noise_ratio_comparison.csv")?;
    writeln!(file, "t,noisy,smooth,balanced,tracking")?;
    for i in 0..t.len() {
        writeln!(
            file,
            "{},{},{},{},{}",
            t[i], noisy[i], columns[0][i], columns[1][i], columns[2][i]
        )?;
    }
    println!("  Wrote noise_ratio_comparison.csv");
    Ok(())
}

/// 3. Convergence
fn run_convergence() -> Result<(), Box<dyn std::error::Error>> {
    println!("3. Convergence to steady state");

    let (q, r) = (1e-3, 0.7e-2);
    let mut processor = Kalman::new()
        .process_noise(q)
        .measurement_noise(r)
        .adapter(Online)
        .build()?;

    let gain_limit = steady_state_gain(1.0, 1.0, q, r).expect("limit exists");
    let covariance_limit = steady_state_covariance(1.0, 1.0, q, r).expect("limit exists");

    let mut file = File::create("../output/visual/convergence.csv")?;
    writeln!(file, "step,gain,covariance,gain_limit,covariance_limit")?;
    for step in 0..50 {
        let output = processor.step(1.0)?;
        writeln!(
            file,
            "{},{},{},{},{}",
            step, output.gain, output.covariance, gain_limit, covariance_limit
        )?;
    }
    println!("  Wrote convergence.csv");
    Ok(())
}

/// 4. Model Mismatch
fn run_model_mismatch() -> Result<(), Box<dyn std::error::Error>> {
    println!("4. Model mismatch (ramp through a random-walk model)");

    let n = 100;
    let measurements: Vec<f64> = (0..n)
        .map(|i| i as f64 * 0.05 + 0.2 * (i as f64 * 9.7).sin())
        .collect();

    let model = Kalman::new()
        .process_noise(1e-4)
        .measurement_noise(4e-2)
        .return_diagnostics()
        .adapter(Batch)
        .build()?;
    let result = model.run(&measurements).map_err(KalmanError::from)?;

    if let Some(diagnostics) = &result.diagnostics {
        println!("  Innovation mean: {:.6}", diagnostics.innovation_mean);
        println!("  Mean NIS:        {:.3}", diagnostics.mean_nis);
    }

    let mut file = File::create("../output/visual/model_mismatch.csv")?;
    writeln!(file, "step,measurement,estimate,innovation")?;
    for i in 0..n {
        writeln!(
            file,
            "{},{},{},{}",
            i, measurements[i], result.estimates[i], result.innovations[i]
        )?;
    }
    println!("  Wrote model_mismatch.csv");
    Ok(())
}
