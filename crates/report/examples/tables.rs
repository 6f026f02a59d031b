//! Runs every solver on a sample problem and prints the LaTeX tables.
//!
//! # Usage
//!
//! ```text
//! cargo run --example tables
//! cargo run --example tables -- 1e-10
//! ```
//!
//! The optional argument sets the tolerance (default `1e-6`). A method that
//! fails is reported and the remaining methods still run.

use std::error::Error;

use nalgebra::{DMatrix, DVector};
use nullpoint_report::{format::sci, latex::table};
use nullpoint_solvers::{Config, scalar::ScalarRootFinder, system::SystemRootFinder};

fn main() -> Result<(), Box<dyn Error>> {
    let tolerance = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<f64>()?,
        None => 1e-6,
    };
    let config = Config::new(tolerance)?.record_trace();

    scalar(&config)?;
    system(&config)?;
    Ok(())
}

/// f(x) = x³ + 2.84x² − 5.606x − 14.766 on [1, 3].
fn scalar(config: &Config) -> Result<(), Box<dyn Error>> {
    let cubic = (
        |x: f64| x.powi(3) + 2.84 * x.powi(2) - 5.606 * x - 14.766,
        |x: f64| 3.0 * x.powi(2) + 5.68 * x - 5.606,
    );
    let finder = ScalarRootFinder::new(cubic, 1.0, 3.0)?;

    println!("% Bisection");
    match finder.bisection(config) {
        Ok(solution) => {
            println!("% root = {:.6} ({:?})", solution.x, solution.status);
            println!("{}\n", table(&solution.trace));
        }
        Err(error) => println!("% bisection failed: {error}\n"),
    }

    println!("% Newton");
    match finder.newton(None, config) {
        Ok(solution) => {
            println!("% root = {:.6} ({:?})", solution.x, solution.status);
            println!("{}\n", table(&solution.trace));
        }
        Err(error) => println!("% newton failed: {error}\n"),
    }

    println!("% Fixed point");
    if let Ok(relaxation) = finder.relaxation() {
        println!(
            "% M = {:.6}, lambda = {:.6}, contraction condition met: {}",
            relaxation.m,
            relaxation.lambda,
            relaxation.meets_contraction_condition()
        );
    }
    match finder.fixed_point(None, config) {
        Ok(solution) => {
            println!("% root = {:.6} ({:?})", solution.x, solution.status);
            println!("{}\n", table(&solution.trace));
        }
        Err(error) => println!("% fixed point failed: {error}\n"),
    }

    Ok(())
}

/// cos(x − 1) + y = 0.5, x − cos(y) = 3 from (3.0, 0.9).
fn system(config: &Config) -> Result<(), Box<dyn Error>> {
    let system = (
        |x: &DVector<f64>| {
            DVector::from_vec(vec![
                (x[0] - 1.0).cos() + x[1] - 0.5,
                x[0] - x[1].cos() - 3.0,
            ])
        },
        |x: &DVector<f64>| {
            DMatrix::from_row_slice(2, 2, &[-(x[0] - 1.0).sin(), 1.0, 1.0, x[1].sin()])
        },
    );
    let finder = SystemRootFinder::new(system, &[3.0, 0.9])?;

    println!("% System Newton");
    match finder.newton(config) {
        Ok(solution) => {
            println!(
                "% root = ({:.6}, {:.6}), |F| = {}, iterations = {}",
                solution.x[0],
                solution.x[1],
                sci(solution.residual_norm, 2),
                solution.iters
            );
            println!("{}", table(&solution.trace));
        }
        Err(error) => println!("% system newton failed: {error}"),
    }

    Ok(())
}
