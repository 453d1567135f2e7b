//! Sample command: prints values from a named distribution.

use crate::error::{CliError, Result};
use randstream_core::{GeneratorConfig, RandomGenerator};
use std::fmt::Display;
use std::io::Write;
use tracing::{debug, info};

/// Distribution names accepted by `--distribution`.
pub const DISTRIBUTIONS: [&str; 10] = [
    "integers",
    "naturals-geometric",
    "positives-geometric",
    "digits",
    "big-naturals",
    "floats",
    "doubles-uniform",
    "chars",
    "strings",
    "permutations",
];

/// Prints the first `count` values of `distribution` to stdout.
pub fn run(config: &GeneratorConfig, distribution: &str, count: usize) -> Result<()> {
    let generator = RandomGenerator::from_config(config)?;
    info!("Sampling {} values from {}", count, distribution);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_samples(&generator, distribution, count, &mut out)?;
    debug!("Stream position after sampling: {:?}", generator.position());
    Ok(())
}

/// Writes `count` values of `distribution`, one per line.
///
/// Floats use their shortest round-trip form; characters and strings are
/// escaped so every value stays on one line.
pub fn write_samples<W: Write>(
    generator: &RandomGenerator,
    distribution: &str,
    count: usize,
    out: &mut W,
) -> Result<()> {
    match distribution {
        "integers" => write_lines(generator.integers(), count, out),
        "naturals-geometric" => write_lines(generator.natural_integers_geometric()?, count, out),
        "positives-geometric" => write_lines(generator.positive_integers_geometric()?, count, out),
        "digits" => write_lines(generator.range(0, 9)?, count, out),
        "big-naturals" => write_lines(generator.natural_big_integers()?, count, out),
        "floats" => write_lines(generator.floats::<f32>(), count, out),
        "doubles-uniform" => {
            write_lines(generator.float_range_uniform(0.0f64, 1.0)?, count, out)
        }
        "chars" => write_lines(generator.chars().map(|c| c.escape_debug()), count, out),
        "strings" => write_lines(generator.strings()?.map(|s| format!("{s:?}")), count, out),
        "permutations" => {
            let digits: Vec<u8> = (0..10).collect();
            write_lines(
                generator.permutations_finite(digits).map(|p| format!("{p:?}")),
                count,
                out,
            )
        }
        other => Err(CliError::InvalidArgument(format!(
            "Unknown distribution '{}'. Expected one of: {}",
            other,
            DISTRIBUTIONS.join(", ")
        ))),
    }
}

fn write_lines<I, W>(values: I, count: usize, out: &mut W) -> Result<()>
where
    I: Iterator,
    I::Item: Display,
    W: Write,
{
    for value in values.take(count) {
        writeln!(out, "{value}")?;
    }
    out.flush()?;
    Ok(())
}
