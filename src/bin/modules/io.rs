use super::cli::OutputFormat;
use super::error::CliError;
use prettytable::*;
use qwell::math::constants::NM_TO_M;
use qwell::{WellResult, WellSet, WellSpec};
use serde::Serialize;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

/// One solved well, ready to be written out.
#[derive(Serialize)]
pub struct WellReport {
    pub well: WellSpec,
    pub result: WellResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub infinite_well_reference: Option<f64>,
}

pub fn read_wells(input_spec: &str) -> Result<Vec<WellSpec>, CliError> {
    let set = if input_spec == "-" {
        let mut content = String::new();
        io::stdin().read_to_string(&mut content)?;
        WellSet::load_from_str(&content)?
    } else {
        WellSet::load_from_file(Path::new(input_spec))?
    };
    Ok(set.wells)
}

pub fn get_writer(output_path: &Option<PathBuf>) -> Result<Box<dyn Write>, CliError> {
    match output_path {
        Some(path) => {
            let file = std::fs::File::create(path).map_err(|e| CliError::Io {
                path: path.clone(),
                source: e,
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

pub fn write_results(
    mut writer: Box<dyn Write>,
    reports: &[WellReport],
    format: &OutputFormat,
    precision: usize,
    source_name: &str,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Pretty => write_pretty_tables(&mut writer, reports, precision, source_name),
        OutputFormat::Csv => write_csv(&mut writer, reports, precision),
        OutputFormat::Json => write_json(&mut writer, reports),
    }?;
    writer.flush()?;
    Ok(())
}

fn write_pretty_tables(
    writer: &mut dyn Write,
    reports: &[WellReport],
    precision: usize,
    source_name: &str,
) -> Result<(), CliError> {
    let box_format = format::FormatBuilder::new()
        .column_separator('│')
        .borders('│')
        .separators(
            &[format::LinePosition::Top],
            format::LineSeparator::new('─', '┬', '╭', '╮'),
        )
        .separators(
            &[format::LinePosition::Title],
            format::LineSeparator::new('═', '╪', '╞', '╡'),
        )
        .separators(
            &[format::LinePosition::Intern],
            format::LineSeparator::new('─', '┼', '├', '┤'),
        )
        .separators(
            &[format::LinePosition::Bottom],
            format::LineSeparator::new('─', '┴', '╰', '╯'),
        )
        .padding(1, 1)
        .build();

    let no_intern_format = format::FormatBuilder::new()
        .column_separator('│')
        .borders('│')
        .separators(
            &[format::LinePosition::Top],
            format::LineSeparator::new('─', '┬', '╭', '╮'),
        )
        .separators(
            &[format::LinePosition::Bottom],
            format::LineSeparator::new('─', '┴', '╰', '╯'),
        )
        .padding(1, 1)
        .build();

    let mut title_table = Table::new();
    title_table.set_format(box_format);
    title_table.add_row(row![bc->"Finite Square Well Bound States"]);
    title_table.print(writer)?;
    writeln!(writer)?;

    for report in reports {
        let well = &report.well;
        let result = &report.result;

        let mut summary_table = Table::new();
        summary_table.set_format(no_intern_format);
        summary_table.add_row(row![b->"Well:", well.name]);
        summary_table.add_row(row![b->"Source:", source_name]);
        summary_table.add_row(row![b->"Thickness:", format!("{:.prec$} nm", well.thickness / NM_TO_M, prec = precision)]);
        summary_table.add_row(row![b->"Mass Ratio:", well.mass_ratio]);
        summary_table.add_row(row![b->"Potential Depth:", format!("{} eV", well.potential)]);
        summary_table.add_row(row![b->"Well Strength P:", format!("{:.prec$}", result.strength, prec = precision)]);
        summary_table.add_row(row![b->"Bound States:", result.num_states]);
        if let Some(reference) = report.infinite_well_reference {
            summary_table.add_row(row![b->"Infinite-Well E1:", format!("{:.prec$} eV", reference, prec = precision)]);
        }
        summary_table.print(writer)?;
        writeln!(writer)?;

        if result.levels.is_empty() {
            writeln!(writer, "No bound states: the well does not confine (energy 0 eV).")?;
            writeln!(writer)?;
            continue;
        }

        let mut data_table = Table::new();
        data_table.set_format(box_format);
        data_table.set_titles(
            row![bc->"n", bc->"Momentum r", bc->"Scaled Energy", bc->"Energy (eV)", bc->"Iterations"],
        );

        for level in &result.levels {
            data_table.add_row(row![
                r->level.n,
                r->format!("{:.prec$}", level.momentum, prec = precision),
                r->format!("{:.prec$}", level.scaled_energy, prec = precision),
                r->format!("{:.prec$}", level.energy, prec = precision),
                r->level.iterations
            ]);
        }

        data_table.print(writer)?;
        writeln!(writer)?;
    }

    Ok(())
}

fn write_csv(
    writer: &mut dyn Write,
    reports: &[WellReport],
    precision: usize,
) -> Result<(), CliError> {
    let with_reference = reports
        .iter()
        .any(|report| report.infinite_well_reference.is_some());

    write!(
        writer,
        "well,thickness_nm,mass_ratio,potential_ev,strength,n,momentum,scaled_energy,energy_ev,iterations"
    )?;
    if with_reference {
        write!(writer, ",infinite_well_ev")?;
    }
    writeln!(writer)?;

    for report in reports {
        let well = &report.well;
        let result = &report.result;
        let reference = report
            .infinite_well_reference
            .map(|value| format!(",{:.*}", precision, value))
            .unwrap_or_default();

        if result.levels.is_empty() {
            writeln!(
                writer,
                "{},{:.*},{},{},{:.*},,,,{:.*},0{}",
                csv_field(&well.name),
                precision,
                well.thickness / NM_TO_M,
                well.mass_ratio,
                well.potential,
                precision,
                result.strength,
                precision,
                0.0,
                reference
            )?;
            continue;
        }

        for level in &result.levels {
            writeln!(
                writer,
                "{},{:.*},{},{},{:.*},{},{:.*},{:.*},{:.*},{}{}",
                csv_field(&well.name),
                precision,
                well.thickness / NM_TO_M,
                well.mass_ratio,
                well.potential,
                precision,
                result.strength,
                level.n,
                precision,
                level.momentum,
                precision,
                level.scaled_energy,
                precision,
                level.energy,
                level.iterations,
                reference
            )?;
        }
    }
    Ok(())
}

fn write_json(writer: &mut dyn Write, reports: &[WellReport]) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *writer, reports)?;
    writeln!(writer)?;
    Ok(())
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qwell::{EigenSolver, StateSelection};

    fn report(potential: f64) -> WellReport {
        let well = WellSpec {
            name: "GaAs, 10 nm".to_string(),
            thickness: 10.0 * NM_TO_M,
            mass_ratio: 0.067,
            potential,
        };
        let result = qwell::solve_well(&EigenSolver::new(), &well, StateSelection::All).unwrap();
        WellReport {
            well,
            result,
            infinite_well_reference: None,
        }
    }

    #[test]
    fn test_csv_has_one_row_per_level() {
        let mut buffer = Vec::new();
        write_csv(&mut buffer, &[report(0.3)], 4).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("well,thickness_nm"));
        assert!(lines[1].starts_with("\"GaAs, 10 nm\",10.0000,0.067,0.3,"));
    }

    #[test]
    fn test_csv_reports_zero_energy_for_flat_well() {
        let mut buffer = Vec::new();
        write_csv(&mut buffer, &[report(0.0)], 3).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.lines().nth(1).unwrap().ends_with(",,,,0.000,0"));
    }

    #[test]
    fn test_json_lists_levels() {
        let mut buffer = Vec::new();
        write_json(&mut buffer, &[report(0.3)]).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value[0]["result"]["num_states"], 3);
        assert_eq!(value[0]["result"]["levels"].as_array().unwrap().len(), 3);
        assert!(value[0].get("infinite_well_reference").is_none());
    }

    #[test]
    fn test_csv_field_quotes_separators() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
