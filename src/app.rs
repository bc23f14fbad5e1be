// src/app.rs
use std::io::Write;

use stair_ways_core::{GridSpec, Strategy, count_checked, run_scenarios, sequence_entries, verify_grid};
use stair_ways_shared_kernel::{ApplicationError, ErrorContext, MaxStep, Result, StairCount};

use crate::{cli::Command, config::Config, output};

/// Runs `command`, writing to the configured destination.
///
/// # Errors
///
/// Returns `Err` for invalid input, exceeded limits, I/O failures, failing
/// example scenarios and verification reports with findings. Output is
/// flushed before a scenario or verification failure is reported.
pub fn run(command: &Command, config: &Config) -> Result<()> {
    let mut out = output::open_writer(config.output.as_deref())?;
    let result = execute(command, config, &mut out);
    out.flush()?;
    result
}

/// Runs `command` against an arbitrary writer.
///
/// # Errors
///
/// See [`run`].
pub fn execute<W: Write + ?Sized>(command: &Command, config: &Config, out: &mut W) -> Result<()> {
    match command {
        Command::Count { stairs, max_step, .. } => {
            let report = count_checked(config.strategy, *stairs, *max_step, &config.limits)?;
            tracing::info!(stairs = %report.stairs, max_step = %report.max_step, strategy = %report.strategy, "counted");
            output::emit_count(&report, config.format, out)
        }
        Command::Sequence { up_to, max_step } => {
            let up_to = StairCount::try_from(*up_to).context("UP_TO")?;
            let max_step = MaxStep::try_from(*max_step).context("MAX_STEP")?;
            config.limits.check(Strategy::Fibonacci, up_to, max_step)?;
            output::emit_stream(sequence_entries(up_to, max_step), config.format, out)
        }
        Command::Examples => {
            let outcomes = run_scenarios(&config.limits);
            output::emit_rows(&outcomes, config.format, out)?;
            let failed = outcomes.iter().filter(|o| o.is_failure()).count();
            if failed > 0 {
                return Err(ApplicationError::ScenariosFailed { failed, total: outcomes.len() }.into());
            }
            Ok(())
        }
        Command::Verify { max_stairs, max_step } => {
            let grid = GridSpec {
                max_stairs: StairCount::new(*max_stairs),
                max_step: MaxStep::new(*max_step).context("--max-step")?,
            };
            let report = verify_grid(&grid, &config.limits).context("--max-stairs")?;
            output::emit_verification(&report, &grid, config.format, out)?;
            if !report.is_clean() {
                return Err(ApplicationError::VerificationFailed {
                    mismatches: report.mismatches.len(),
                    violations: report.violations.len(),
                }
                .into());
            }
            Ok(())
        }
    }
}
