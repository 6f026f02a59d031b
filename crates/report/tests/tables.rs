use nalgebra::{DMatrix, DVector};

use nullpoint_report::{latex::table, traits::ResidualBelow};
use nullpoint_solvers::{
    Config, Status,
    scalar::ScalarRootFinder,
    system::SystemRootFinder,
};

fn cubic() -> (fn(f64) -> f64, fn(f64) -> f64) {
    (
        |x| x.powi(3) + 2.84 * x.powi(2) - 5.606 * x - 14.766,
        |x| 3.0 * x.powi(2) + 5.68 * x - 5.606,
    )
}

#[test]
fn bisection_trace_renders_one_row_per_iteration() {
    let finder = ScalarRootFinder::new(cubic(), 1.0, 3.0).expect("valid interval");
    let solution = finder
        .bisection(&Config::default().record_trace())
        .expect("bisection converges");

    let rendered = table(&solution.trace);
    let lines: Vec<&str> = rendered.lines().collect();

    // Opening, rule, header, rule, two lines per row, closing.
    assert_eq!(lines.len(), 5 + 2 * solution.iters);
    assert_eq!(lines[4], r"1 & 1.000000 & 3.000000 & 2.000000 & -6.618000 \\");
    assert_eq!(lines.last(), Some(&r"\end{tabular}"));
}

#[test]
fn untraced_solution_renders_empty_table() {
    let finder = ScalarRootFinder::new(cubic(), 1.0, 3.0).expect("valid interval");
    let solution = finder.newton(None, &Config::default()).expect("newton converges");

    assert_eq!(table(&solution.trace), "");
}

#[test]
fn system_trace_ends_with_the_root() {
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
    let finder = SystemRootFinder::new(system, &[3.0, 0.9]).expect("valid guess");
    let solution = finder
        .newton(&Config::default().record_trace())
        .expect("should converge");

    let rendered = table(&solution.trace);
    let rows: Vec<&str> = rendered
        .lines()
        .skip(4)
        .filter(|line| line.ends_with(r"\\"))
        .collect();

    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0], r"3.000000 & 0.900000 & 4.92e-01 & 6.22e-01 \\");
    assert!(rows[4].starts_with("3.355912 & 1.206907 & "));
}

#[test]
fn residual_observer_works_with_every_scalar_method() {
    let finder = ScalarRootFinder::new(cubic(), 1.0, 3.0).expect("valid interval");
    let config = Config::new(1e-12).expect("valid tolerance");
    let stop = ResidualBelow::new(1e-2).min_iters(2);

    let bisection = finder.bisection_with(&config, stop).expect("stopped");
    assert_eq!(bisection.status, Status::StoppedByObserver);
    assert!(bisection.iters >= 2);
    assert!(bisection.residual.abs() < 1e-2);

    let newton = finder.newton_with(None, &config, stop).expect("stopped");
    assert_eq!(newton.status, Status::StoppedByObserver);
    assert!(newton.iters >= 2);
}
