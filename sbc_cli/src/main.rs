//! # SBC CLI
//!
//! Command-line front end for the SPT safe bearing capacity calculator.
//!
//! ```text
//! sbc --moist 18 --submerged 8 --water-table 2 --depth 3 --blows 25
//! sbc --interactive --pdf
//! sbc --input borehole.json --json
//! ```
//!
//! Exit codes: 0 on success, 1 when the inputs are rejected or the
//! calculation hits a domain error, 2 on file, config or report failures.

mod prompt;

use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use sbc_core::calculations::{evaluate, SbcInput, SbcResult};
use sbc_core::config::{SbcConfig, ORG_ENV_VAR};
use sbc_core::pdf::write_report_pdf;
use sbc_core::report::{ReportMeta, DISCLAIMER, REPORT_TITLE};
use sbc_core::soil_types::{reference_pressure_note, SoilType};
use sbc_core::summary::{detail_lines, dilatancy_note, input_lines, summary_lines};
use sbc_core::CalcError;

/// SPT-based Safe Bearing Capacity calculator (IS 2131)
#[derive(Parser, Debug)]
#[command(name = "sbc", author, version, about, long_about = None)]
struct Args {
    /// Moist unit weight of the soil (kN/m³, 10-25)
    #[arg(long, value_name = "KN_M3")]
    moist: Option<f64>,

    /// Submerged unit weight of the soil (kN/m³, 5-15)
    #[arg(long, value_name = "KN_M3")]
    submerged: Option<f64>,

    /// Reference pressure for the overburden correction (kN/m², 50-200)
    #[arg(long, value_name = "KN_M2")]
    ref_pressure: Option<f64>,

    /// Depth of the water table below ground (m)
    #[arg(long, value_name = "M")]
    water_table: Option<f64>,

    /// Depth of the SPT test point below ground (m)
    #[arg(long = "depth", value_name = "M")]
    test_depth: Option<f64>,

    /// Raw SPT blow count (1-100)
    #[arg(short = 'n', long = "blows", value_name = "N")]
    blow_count: Option<u32>,

    /// Read the inputs from a JSON document
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Prompt for each input, blank keeps the shown value
    #[arg(short, long)]
    interactive: bool,

    /// Organization printed on the report
    #[arg(long, env = ORG_ENV_VAR)]
    org: Option<String>,

    /// TOML config file (defaults to ./sbc.toml when present)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write the PDF report, optionally to PATH
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    pdf: Option<Option<PathBuf>>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Print the typical soil unit weight table
    #[arg(long)]
    soil_table: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    /// Overlay per-field flags on `base`.
    fn apply_overrides(&self, base: SbcInput) -> SbcInput {
        let mut input = base;
        if let Some(v) = self.moist {
            input.soil.moist_unit_weight_kn_m3 = v;
        }
        if let Some(v) = self.submerged {
            input.soil.submerged_unit_weight_kn_m3 = v;
        }
        if let Some(v) = self.ref_pressure {
            input.observation.reference_pressure_kn_m2 = v;
        }
        if let Some(v) = self.water_table {
            input.geometry.water_table_depth_m = v;
        }
        if let Some(v) = self.test_depth {
            input.geometry.test_depth_m = v;
        }
        if let Some(v) = self.blow_count {
            input.observation.blow_count = v;
        }
        input
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Resolve the inputs: config defaults, then `--input`, then flags, then prompts.
fn resolve_input(args: &Args, config: &SbcConfig) -> Result<SbcInput> {
    let base = match &args.input {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading input file '{}'", path.display()))?;
            serde_json::from_str::<SbcInput>(&text)
                .map_err(CalcError::from)
                .with_context(|| format!("parsing input file '{}'", path.display()))?
        }
        None => config.defaults,
    };

    let input = args.apply_overrides(base);
    if !args.interactive {
        return Ok(input);
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    prompt::prompt_input(&mut stdin.lock(), &mut stdout, input).context("reading interactive input")
}

fn print_soil_table() {
    println!("Typical Soil Unit Weights (kN/m³)");
    println!("{:<14} {:>8} {:>10}", "Soil Type", "Moist", "Submerged");
    for soil in SoilType::ALL {
        println!(
            "{:<14} {:>8} {:>10}",
            soil.display_name(),
            soil.moist_range_label(),
            soil.submerged_range_label()
        );
    }
    println!("{}", reference_pressure_note());
    println!();
}

fn print_report(meta: &ReportMeta, input: &SbcInput, result: &SbcResult) {
    println!("═══════════════════════════════════════");
    println!("  {}", meta.organization);
    println!("  {}", REPORT_TITLE);
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    for line in input_lines(input) {
        println!("  {}", line.to_text());
    }
    println!();
    println!("Results:");
    for line in summary_lines(result) {
        println!("  {}", line.to_text());
    }
    println!();
    println!("Details:");
    for line in detail_lines(input, result) {
        println!("  {}", line);
    }
    if result.dilatancy_applied {
        println!("  {}", dilatancy_note(result));
    }
    println!();
    println!("═══════════════════════════════════════");
    println!("  SBC = {:.2} kN/m²", result.sbc_kn_m2);
    println!("═══════════════════════════════════════");
    println!("{}", DISCLAIMER);
}

fn run(args: &Args) -> Result<()> {
    let config = SbcConfig::load_or_default(args.config.as_deref())?.with_organization(args.org.clone());
    debug!(organization = %config.organization, "resolved configuration");

    if args.print_config {
        print!("{}", config.to_toml_string()?);
        return Ok(());
    }

    if args.soil_table {
        print_soil_table();
    }

    let input = resolve_input(args, &config)?;
    let result = evaluate(&input)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result).map_err(CalcError::from)?);
    } else {
        print_report(&ReportMeta::new(config.organization.clone()), &input, &result);
    }

    if let Some(target) = &args.pdf {
        let meta = ReportMeta::new(config.organization.clone());
        let path = target.clone().unwrap_or_else(|| PathBuf::from(meta.file_name()));
        write_report_pdf(&path, &meta, &input, &result)
            .with_context(|| format!("writing report to '{}'", path.display()))?;
        info!(path = %path.display(), "report written");
        eprintln!("Report written to {}", path.display());
    }

    Ok(())
}

/// Map a failure to its exit code, printing it as text and JSON.
fn report_failure(err: &anyhow::Error) -> ExitCode {
    eprintln!("Error: {:#}", err);

    match err.downcast_ref::<CalcError>() {
        Some(calc) => {
            if let Ok(json) = serde_json::to_string_pretty(calc) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            if calc.is_input_error() {
                ExitCode::from(1)
            } else {
                ExitCode::from(2)
            }
        }
        None => ExitCode::from(2),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report_failure(&err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("sbc").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_flags_override_defaults() {
        let args = parse(&["--moist", "20", "--depth", "1.5", "-n", "12"]);
        let input = args.apply_overrides(SbcInput::default());

        assert_eq!(input.soil.moist_unit_weight_kn_m3, 20.0);
        assert_eq!(input.soil.submerged_unit_weight_kn_m3, 8.0);
        assert_eq!(input.geometry.test_depth_m, 1.5);
        assert_eq!(input.observation.blow_count, 12);
    }

    #[test]
    fn test_pdf_flag_optional_path() {
        assert_eq!(parse(&[]).pdf, None);
        assert_eq!(parse(&["--pdf"]).pdf, Some(None));
        assert_eq!(parse(&["--pdf", "out.pdf"]).pdf, Some(Some(PathBuf::from("out.pdf"))));
    }

    #[test]
    fn test_print_config_flag() {
        assert!(parse(&["--print-config"]).print_config);
        assert!(!parse(&[]).print_config);
    }

    #[test]
    fn test_verbose_counts() {
        assert_eq!(parse(&["-vv"]).verbose, 2);
    }

    #[test]
    fn test_input_file_then_flags() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"observation": {{"blow_count": 40, "reference_pressure_kn_m2": 100.0}}}}"#).unwrap();

        let path = file.path().to_string_lossy().to_string();
        let args = parse(&["--input", &path, "--water-table", "5"]);
        let input = resolve_input(&args, &SbcConfig::default()).unwrap();

        assert_eq!(input.observation.blow_count, 40);
        assert_eq!(input.geometry.water_table_depth_m, 5.0);
        assert_eq!(input.geometry.test_depth_m, 3.0);
    }

    #[test]
    fn test_bad_input_file_exits_with_io_code() {
        let args = parse(&["--input", "/nonexistent/input.json"]);
        let err = resolve_input(&args, &SbcConfig::default()).unwrap_err();
        assert_eq!(report_failure(&err), ExitCode::from(2));
    }

    #[test]
    fn test_validation_failure_exits_with_input_code() {
        let args = parse(&["--blows", "0"]);
        let input = resolve_input(&args, &SbcConfig::default()).unwrap();
        let err = anyhow::Error::from(evaluate(&input).unwrap_err());
        assert_eq!(report_failure(&err), ExitCode::from(1));
    }
}
