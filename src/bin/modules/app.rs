use super::cli::Cli;
use super::error::CliError;
use super::io::{self, WellReport};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use qwell::{EigenSolver, SolverOptions, StateSelection, WellSpec};

pub fn run(args: Cli) -> Result<(), CliError> {
    let (wells, source_name) = match &args.well.input {
        Some(input) => {
            let source_name = if input == "-" {
                "stdin".to_string()
            } else {
                input.clone()
            };
            (io::read_wells(input)?, source_name)
        }
        None => (vec![well_from_flags(&args)?], "command line".to_string()),
    };

    let solver_options = SolverOptions {
        tolerance: args.solver.tolerance,
        max_iterations: args.solver.max_iterations,
        max_halvings: args.solver.max_halvings,
    };
    let solver = EigenSolver::new().with_options(solver_options);

    let selection = if args.states.all {
        StateSelection::All
    } else {
        StateSelection::Single(args.states.state)
    };

    info!("Read {} wells from {}", wells.len(), source_name);

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message("Solving bound states...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let results = qwell::solve_batch(&solver, &wells, selection);

    pb.finish_and_clear();

    let reports = wells
        .into_iter()
        .zip(results)
        .map(|(well, result)| {
            let result = result.map_err(|source| CliError::Well {
                name: well.name.clone(),
                source,
            })?;
            let reference = if args.states.reference {
                Some(qwell::infinite_well_ground_state_energy(
                    well.thickness,
                    well.mass_ratio,
                )?)
            } else {
                None
            };
            Ok(WellReport {
                well,
                result,
                infinite_well_reference: reference,
            })
        })
        .collect::<Result<Vec<_>, CliError>>()?;

    let writer = io::get_writer(&args.output.output)?;
    io::write_results(
        writer,
        &reports,
        &args.output.format,
        args.output.precision,
        &source_name,
    )?;

    Ok(())
}

fn well_from_flags(args: &Cli) -> Result<WellSpec, CliError> {
    let (Some(thickness), Some(mass_ratio), Some(potential)) = (
        args.well.thickness,
        args.well.mass_ratio,
        args.well.potential,
    ) else {
        return Err(CliError::Usage(
            "--thickness, --mass-ratio and --potential are required without --input".to_string(),
        ));
    };

    Ok(WellSpec {
        name: format!("{} {} well", thickness, args.well.unit),
        thickness: args.well.unit.to_meters(thickness),
        mass_ratio,
        potential,
    })
}
