mod common;

use approx::assert_abs_diff_eq;
use common::nm;
use qwell::{EigenSolver, QwellError, SolverOptions, StateSelection, WellSet, solve_batch};
use std::io::Write;
use tempfile::NamedTempFile;

const HETEROSTRUCTURES: &str = r#"
[[wells]]
name = "GaAs/Al0.3Ga0.7As"
thickness = "10 nm"
mass_ratio = 0.067
potential = 0.3

[[wells]]
name = "In0.53Ga0.47As/InP"
thickness = "85 Å"
mass_ratio = 0.041
potential = 0.25

[[wells]]
name = "flat band"
thickness = 5.0
mass_ratio = 0.067
potential = 0.0
"#;

#[test]
fn test_batch_over_loaded_well_set() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", HETEROSTRUCTURES).unwrap();
    let set = WellSet::load_from_file(file.path()).unwrap();

    assert_eq!(set.wells.len(), 3);
    assert_abs_diff_eq!(set.wells[1].thickness, nm(8.5), epsilon = 1e-20);

    let results = solve_batch(&EigenSolver::new(), &set.wells, StateSelection::All);
    assert_eq!(results.len(), 3);

    for (spec, result) in set.wells.iter().zip(&results) {
        let result = result.as_ref().unwrap();
        if spec.potential <= 0.0 {
            assert_eq!(result.num_states, 0);
            assert!(result.levels.is_empty());
            continue;
        }
        assert_eq!(result.levels.len() as u32, result.num_states);
        for level in &result.levels {
            assert_abs_diff_eq!(
                level.energy,
                qwell::energy(spec.thickness, spec.mass_ratio, spec.potential, level.n).unwrap(),
                epsilon = 1e-12
            );
        }
    }
}

#[test]
fn test_batch_single_state_matches_sequential() {
    let set = WellSet::load_from_str(HETEROSTRUCTURES).unwrap();
    let results = solve_batch(&EigenSolver::new(), &set.wells, StateSelection::Single(1));

    let ground: Vec<f64> = results
        .iter()
        .map(|r| r.as_ref().unwrap().levels.first().map_or(0.0, |l| l.energy))
        .collect();
    let sequential: Vec<f64> = set
        .wells
        .iter()
        .map(|w| qwell::energy(w.thickness, w.mass_ratio, w.potential, 1).unwrap())
        .collect();

    assert_eq!(ground, sequential);
}

#[test]
fn test_batch_reports_out_of_range_state_per_well() {
    let set = WellSet::load_from_str(HETEROSTRUCTURES).unwrap();
    let results = solve_batch(&EigenSolver::new(), &set.wells, StateSelection::Single(3));

    assert!(results[0].is_ok());
    assert!(matches!(
        results[1],
        Err(QwellError::QuantumNumberOutOfRange { n: 3, .. })
    ));
    assert!(results[2].as_ref().unwrap().levels.is_empty());
}

#[test]
fn test_batch_propagates_solver_caps() {
    let set = WellSet::load_from_str(HETEROSTRUCTURES).unwrap();
    let solver = EigenSolver::new().with_options(SolverOptions {
        max_iterations: 0,
        ..Default::default()
    });
    let results = solve_batch(&solver, &set.wells, StateSelection::Single(1));

    assert!(results[0].as_ref().unwrap_err().is_non_convergence());
    assert!(results[2].is_ok());
}
