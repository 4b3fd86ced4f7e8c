#![allow(dead_code)]

use qwell::EigenSolver;

/// Scale factor that turns `x / THICKNESS_SCALE` nanometers into a well of strength `x` for
/// an electron in a 1 eV well.
pub const THICKNESS_SCALE: f64 = 2.56158355342;

pub struct TestCase<'a> {
    pub name: &'a str,
    pub strength: f64,
    pub expected: Vec<(u32, f64)>,
}

/// Converts nanometers to meters.
pub fn nm(value: f64) -> f64 {
    value * 1e-9
}

pub fn run_group_test(
    group_name: &str,
    cases: Vec<TestCase>,
    group_avg_limit: f64,
    group_max_limit: f64,
) {
    let solver = EigenSolver::new();

    let mut group_total_error = 0.0;
    let mut group_max_error = 0.0;
    let mut total_data_points = 0;

    println!("\nRunning Group Test: {}", group_name);
    println!("{:-<80}", "");
    println!(
        "{:<20} | {:<10} | {:<10} | {:<10}",
        "Well", "State n", "Expected", "Calculated"
    );

    for case in cases {
        for (n, expected_e) in &case.expected {
            let solution = solver
                .solve(case.strength, *n)
                .expect("Solver failed");
            let calculated_e = solution.scaled_energy;
            let error = (calculated_e - expected_e).abs();

            println!(
                "{:<20} | {:<10} | {:<10.4} | {:<10.4} (Err: {:.2e}, {} iterations)",
                case.name, n, expected_e, calculated_e, error, solution.iterations
            );

            group_total_error += error;
            if error > group_max_error {
                group_max_error = error;
            }
            total_data_points += 1;
        }
    }

    let group_avg_error = if total_data_points > 0 {
        group_total_error / total_data_points as f64
    } else {
        0.0
    };

    println!("{:-<80}", "");
    println!("Group Statistics for '{}':", group_name);
    println!("  Total Data Points: {}", total_data_points);
    println!(
        "  Group Avg Error:   {:.2e} (Limit: {:.2e})",
        group_avg_error, group_avg_limit
    );
    println!(
        "  Group Max Error:   {:.2e} (Limit: {:.2e})",
        group_max_error, group_max_limit
    );
    println!("{:-<80}\n", "");

    assert!(
        group_avg_error <= group_avg_limit,
        "Group average error {:.2e} exceeds limit {:.2e}",
        group_avg_error,
        group_avg_limit
    );

    assert!(
        group_max_error <= group_max_limit,
        "Group maximum error {:.2e} exceeds limit {:.2e}",
        group_max_error,
        group_max_limit
    );
}
