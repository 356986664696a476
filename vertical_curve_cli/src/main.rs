use std::fs::File;
use std::io;

use clap::{Parser, Subcommand};
use log::debug;
use vertical_curve::{
    io::{read_curve_json, read_settings_json, write_profile_csv},
    sheet::write_profile_svg,
    CurveKind, CurveParameters, EvaluationResult, PlotSettings, Theme, DEFAULT_SAMPLE_COUNT,
};

fn print_station(sta: f64, elev: f64) {
    println!("{:.3},{:.3}", sta, elev);
}

fn print_elevation(result: EvaluationResult) {
    println!(
        "Elevation at station {:?} is {:?}",
        result.station, result.elevation
    );
}

fn init_logging() {
    if let Ok(path) = std::env::var("VERTICAL_CURVE_LOG") {
        match File::create(&path) {
            Ok(file) => {
                env_logger::Builder::from_default_env()
                    .target(env_logger::Target::Pipe(Box::new(file)))
                    .init();
            }
            Err(e) => {
                eprintln!("Failed to create log file {}: {}", path, e);
                env_logger::Builder::from_default_env().init();
            }
        }
    } else {
        env_logger::Builder::from_default_env().init();
    }
}

/// Compute elevations on a parabolic vertical curve.
#[derive(Parser)]
#[command(name = "vertical_curve_cli", version)]
struct Cli {
    /// JSON file with the curve parameters. Overrides the individual flags.
    #[arg(long, global = true)]
    curve: Option<String>,
    /// Station of the PVI
    #[arg(long, default_value_t = 1000.0, global = true, allow_negative_numbers = true)]
    pvi_station: f64,
    /// Elevation at the PVI
    #[arg(long, default_value_t = 500.0, global = true, allow_negative_numbers = true)]
    pvi_elevation: f64,
    /// Initial grade in decimal, e.g. 0.03 for 3%
    #[arg(long, default_value_t = 0.03, global = true, allow_negative_numbers = true)]
    initial_grade: f64,
    /// Final grade in decimal
    #[arg(long, default_value_t = -0.02, global = true, allow_negative_numbers = true)]
    final_grade: f64,
    /// Length of the vertical curve
    #[arg(long, default_value_t = 200.0, global = true, allow_negative_numbers = true)]
    length: f64,
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn parameters(&self) -> io::Result<CurveParameters> {
        match &self.curve {
            Some(path) => read_curve_json(path),
            None => Ok(CurveParameters::new(
                self.pvi_station,
                self.pvi_elevation,
                self.initial_grade,
                self.final_grade,
                self.length,
            )),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the elevation at a station.
    Elevation {
        #[arg(default_value_t = 1025.0, allow_negative_numbers = true)]
        station: f64,
    },
    /// Sample the curve profile as station,elevation lines.
    Profile {
        /// First station. Defaults to the beginning of the curve.
        #[arg(long, allow_negative_numbers = true)]
        start: Option<f64>,
        /// Last station. Defaults to the end of the curve.
        #[arg(long, allow_negative_numbers = true)]
        end: Option<f64>,
        #[arg(long, default_value_t = DEFAULT_SAMPLE_COUNT)]
        count: usize,
        /// Write the samples to a CSV file instead of stdout.
        #[arg(long)]
        output: Option<String>,
    },
    /// Write an SVG plot of the curve with a station marked.
    Plot {
        #[arg(allow_negative_numbers = true)]
        station: f64,
        output: String,
        /// Color theme, e.g. hp-green or "Solarized Dark".
        #[arg(long)]
        theme: Option<String>,
        /// JSON file with plot settings.
        #[arg(long)]
        settings: Option<String>,
    },
    /// Report derived curve geometry.
    Info,
    /// List available plot themes.
    Themes,
}

fn run(cli: Cli) -> io::Result<()> {
    let params = cli.parameters()?;
    debug!("curve parameters: {:?}", params);
    match cli.command {
        Commands::Elevation { station } => {
            print_elevation(params.evaluate(station)?);
        }
        Commands::Profile {
            start,
            end,
            count,
            output,
        } => {
            let (default_start, default_end) = params.default_profile_range();
            let samples = params.sample_profile(
                start.unwrap_or(default_start),
                end.unwrap_or(default_end),
                count,
            )?;
            match output {
                Some(path) => {
                    write_profile_csv(&path, &samples)?;
                    println!("Wrote {}", path);
                }
                None => {
                    for s in &samples {
                        print_station(s.station, s.elevation);
                    }
                }
            }
        }
        Commands::Plot {
            station,
            output,
            theme,
            settings,
        } => {
            let mut plot = match settings {
                Some(path) => read_settings_json(&path)?,
                None => PlotSettings::default(),
            };
            if let Some(name) = theme {
                plot = plot.with_theme(name.parse::<Theme>()?);
            }
            let result = params.evaluate(station)?;
            write_profile_svg(&output, &params, station, &plot)?;
            print_elevation(result);
            println!("Wrote {}", output);
        }
        Commands::Info => {
            params.validate()?;
            let kind = params.curve_kind();
            println!("Curve type: {}", kind);
            println!("Grade change: {:.4}%", params.grade_change() * 100.0);
            println!("Rate of change: {:.6}", params.rate_of_change()?);
            match params.k_value() {
                Some(k) => println!("K value: {:.3}", k),
                None => println!("K value: n/a"),
            }
            let (bvc, evc) = params.default_profile_range();
            println!(
                "BVC: station {:.3}, elevation {:.3}",
                bvc,
                params.elevation_at(bvc)?
            );
            println!(
                "EVC: station {:.3}, elevation {:.3}",
                evc,
                params.elevation_at(evc)?
            );
            if let Some(point) = params.extreme_point()? {
                let label = if kind == CurveKind::Crest { "High point" } else { "Low point" };
                println!(
                    "{}: station {:.3}, elevation {:.3}",
                    label, point.station, point.elevation
                );
            }
            if let Some(tp) = params.turning_point()? {
                let on_curve = tp.station >= bvc.min(evc) && tp.station <= bvc.max(evc);
                println!(
                    "Zero grade point: station {:.3}, elevation {:.3}{}",
                    tp.station,
                    tp.elevation,
                    if on_curve { "" } else { " (beyond curve ends)" }
                );
            }
        }
        Commands::Themes => {
            for theme in Theme::ALL {
                println!("{}\t{}", theme.key(), theme.display_name());
            }
        }
    }
    Ok(())
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
