//! Top-level application orchestration.
//!
//! `src/main.rs` only maps the result to an exit code; this module is the
//! "real main" that:
//! - loads `.env` and parses CLI arguments
//! - sets up logging
//! - runs the analysis pipeline
//! - prints the summary, then plots and exports on request

use clap::Parser;

use crate::cli::Cli;
use crate::domain::{AnalysisConfig, EdgeOptions};
use crate::error::{AppError, Stage};
use crate::plot::{PlotMode, PlotRenderer, StandardRenderer};

pub mod pipeline;

/// Entry point for the `tauc` binary.
pub fn run() -> Result<(), AppError> {
    // Tuning defaults may come from a local .env file.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = config_from_args(&cli)?;
    log::debug!("method {:?}, configuration: {config:?}", cli.method);

    let run = pipeline::run_analysis(&config)?;
    let analysis = &run.analysis;

    println!("{}", crate::report::format_summary(&run.spectrum, analysis, &config));
    if cli.verbose {
        println!("{}", crate::report::format_edge_table(&crate::report::edge_residuals(analysis)));
    }

    let renderer = StandardRenderer::default();
    if let Some(path) = &config.plot_output {
        renderer
            .render(&analysis.points, &analysis.fit, &analysis.estimate, &PlotMode::File(path.clone()))
            .map_err(|e| AppError::at(Stage::Plot, e))?;
        println!("Tauc plot saved to {}", path.display());
    }
    if config.plot {
        renderer
            .render(&analysis.points, &analysis.fit, &analysis.estimate, &PlotMode::Interactive)
            .map_err(|e| AppError::at(Stage::Plot, e))?;
    }

    if let Some(path) = &config.export_points {
        crate::io::write_tauc_csv(path, analysis).map_err(|e| AppError::at(Stage::Export, e))?;
        log::info!("Tauc points written to {}", path.display());
    }
    if let Some(path) = &config.export_report {
        let report = crate::io::ReportFile::new(&config.input_path, analysis, &config.edge);
        crate::io::write_report_json(path, &report).map_err(|e| AppError::at(Stage::Export, e))?;
        log::info!("report written to {}", path.display());
    }

    Ok(())
}

/// `warn` by default, `debug` for this crate under `-v`; `RUST_LOG` wins.
fn init_logging(verbose: bool) {
    let default = if verbose { "warn,tauc_gap=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

/// Turn parsed arguments into a validated run configuration.
pub fn config_from_args(cli: &Cli) -> Result<AnalysisConfig, AppError> {
    let edge = EdgeOptions {
        edge_window_fraction: cli.edge_window_fraction,
        min_window_points: cli.min_window_points,
        tie_tolerance: cli.tie_tolerance,
        min_slope_fraction: cli.min_slope_fraction,
    };
    edge.validate().map_err(|e| AppError::at(Stage::Config, e))?;

    Ok(AnalysisConfig {
        input_path: cli.uvvis.clone(),
        transition: cli.transition,
        edge,
        strict: cli.strict,
        plot: cli.plot,
        plot_output: cli.output.clone(),
        export_points: cli.export.clone(),
        export_report: cli.report.clone(),
    })
}
