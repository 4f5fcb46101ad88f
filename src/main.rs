use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use sinegen::params::*;
use sinegen::{SampleFormat, SignalModel};

/// Sample `offset + amplitude * sin(omega * t + phase)` over a time window and write the points
/// as delimited text.
#[derive(Parser)]
#[command(name = "sinegen")]
#[command(about = "Sinusoid sampler - writes t,value lines to a file", long_about = None)]
struct Cli {
    /// Output file path (overwritten)
    output: PathBuf,
    /// Constant offset added to the signal
    #[arg(long, default_value_t = DEFAULT_OFFSET, allow_negative_numbers = true)]
    offset: f64,
    /// Peak amplitude
    #[arg(long, default_value_t = DEFAULT_AMPLITUDE, allow_negative_numbers = true)]
    amplitude: f64,
    /// Angular frequency in rad/s (must not be negative)
    #[arg(long, default_value_t = DEFAULT_ANGULAR_FREQUENCY, allow_negative_numbers = true)]
    omega: f64,
    /// Phase at t = 0 in radians
    #[arg(long, default_value_t = DEFAULT_PHASE, allow_negative_numbers = true)]
    phase: f64,
    /// Start of the sampling window in seconds
    #[arg(long, default_value_t = DEFAULT_START, allow_negative_numbers = true)]
    start: f64,
    /// End of the sampling window in seconds
    #[arg(long, default_value_t = DEFAULT_STOP, allow_negative_numbers = true)]
    stop: f64,
    /// Number of sample points
    #[arg(long, default_value_t = DEFAULT_POINT_COUNT)]
    points: usize,
    /// Field delimiter
    #[arg(long, default_value_t = ',')]
    delimiter: char,
    /// Fixed number of decimals (shortest exact representation if omitted)
    #[arg(long)]
    precision: Option<usize>,
}

/// Start the command-line sampler.
fn main() -> Result<(), Box<dyn Error>> {
    // Initialise logging.
    env_logger::init();

    let cli = Cli::parse();

    // Configure the model through its validated setters.
    let mut model = SignalModel::new();
    model.set_offset(cli.offset);
    model.set_amplitude(cli.amplitude);
    model.set_angular_frequency(cli.omega)?;
    model.set_phase(cli.phase);
    // Move the stop first so a start past the default stop is accepted.
    if cli.start >= model.window_stop() {
        model.set_window_stop(cli.stop)?;
        model.set_window_start(cli.start)?;
    } else {
        model.set_window_start(cli.start)?;
        model.set_window_stop(cli.stop)?;
    }
    model.set_point_count(cli.points)?;

    let mut format = SampleFormat::new(cli.delimiter)?;
    if let Some(precision) = cli.precision {
        format = format.with_precision(precision);
    }

    let bytes = model.generate_with(&cli.output, &format)?;
    println!(
        "Wrote {} points ({} bytes) to {}",
        model.point_count(),
        bytes,
        cli.output.display()
    );

    Ok(())
}
