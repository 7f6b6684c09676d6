//! `tauc-synth`: write a synthetic UV-Vis spectrum with a known band gap.
//!
//! The output uses the same text format `tauc --uvvis` reads, with the
//! generating parameters recorded as `#` comment lines.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use tauc_gap::data::{SynthSpec, generate_spectrum};
use tauc_gap::domain::TransitionType;
use tauc_gap::error::{AppError, Stage};
use tauc_gap::io::write_spectrum;

#[derive(Debug, Parser)]
#[command(name = "tauc-synth", version, about = "Generate a synthetic UV-Vis spectrum with a known band gap")]
struct Args {
    /// Output file.
    #[arg(long, value_name = "PATH")]
    out: PathBuf,

    /// Band gap of the generated material (eV).
    #[arg(long, default_value_t = 2.2)]
    band_gap: f64,

    /// Slope of the linear Tauc edge.
    #[arg(long, default_value_t = 3.0)]
    edge_slope: f64,

    /// Energy (eV) where the edge levels off.
    #[arg(long, default_value_t = 3.6)]
    saturation: f64,

    /// Transition type the absorbance is generated for.
    #[arg(long = "type", value_enum, default_value_t = TransitionType::Direct)]
    transition: TransitionType,

    /// Shortest wavelength (nm).
    #[arg(long, default_value_t = 300.0)]
    wl_min: f64,

    /// Longest wavelength (nm).
    #[arg(long, default_value_t = 700.0)]
    wl_max: f64,

    /// Number of samples.
    #[arg(short = 'n', long, default_value_t = 201)]
    points: usize,

    /// Standard deviation of Gaussian absorbance noise.
    #[arg(long, default_value_t = 0.0)]
    noise: f64,

    /// Random seed for the noise.
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

impl Args {
    fn spec(&self) -> SynthSpec {
        SynthSpec {
            band_gap_ev: self.band_gap,
            edge_slope: self.edge_slope,
            saturation_ev: self.saturation,
            transition: self.transition,
            wavelength_min_nm: self.wl_min,
            wavelength_max_nm: self.wl_max,
            n_points: self.points,
            noise_sd: self.noise,
            seed: self.seed,
        }
    }
}

fn run() -> Result<(), AppError> {
    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let spec = args.spec();
    let spectrum = generate_spectrum(&spec).map_err(|e| AppError::at(Stage::Config, e))?;

    let header = vec![
        "synthetic UV-Vis spectrum (tauc-synth)".to_string(),
        format!(
            "band_gap_ev={} edge_slope={} saturation_ev={} type={}",
            spec.band_gap_ev,
            spec.edge_slope,
            spec.saturation_ev,
            spec.transition.display_name().to_lowercase()
        ),
        format!("noise_sd={} seed={}", spec.noise_sd, spec.seed),
        "wavelength_nm absorbance".to_string(),
    ];
    write_spectrum(&args.out, &spectrum, &header).map_err(|e| AppError::at(Stage::Export, e))?;

    println!("Wrote {} samples to {}", spectrum.len(), args.out.display());
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
