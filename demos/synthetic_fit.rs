use std::fs::File;
use std::io::BufWriter;

use linefit::{GenerationParams, LinearRegression, Metrics, generate, io};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Step 1: Generate a noisy synthetic dataset around y = 1.5x + 0.5
    let params = GenerationParams {
        slope: 1.5,
        intercept: 0.5,
        noise_std: 2.0,
        num_points: 120,
        random_seed: 42,
    };
    let data = generate(&params)?;
    println!("Dataset: {} samples", data.n_samples());

    // Step 2: Fit the least-squares line
    let mut model = LinearRegression::new();
    model.fit(&data)?;

    // Step 3: Predictions, residuals and metrics
    let evaluated = model.evaluate(&data)?;
    let metrics = Metrics::compute(&evaluated)?;

    println!("Learned parameters:");
    println!("  slope:     {:.4}", model.slope.unwrap_or(0.0));
    println!("  intercept: {:.4}", model.intercept.unwrap_or(0.0));
    println!("Metrics:");
    println!("  MSE:  {:.4}", metrics.mse);
    println!("  RMSE: {:.4}", metrics.rmse);
    println!("  R2:   {:.4}", metrics.r2);

    // Step 4: Export the evaluated dataset
    let file = File::create("linear_regression_results.csv")?;
    io::write_csv(&evaluated, BufWriter::new(file))?;
    println!("Results saved to linear_regression_results.csv");

    Ok(())
}
