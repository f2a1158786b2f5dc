//! # Demonstration Scenarios
//!
//! The fixed operation sequences run by the two binaries. Each writes its
//! `Vector3D(...)` lines to the given writer and logs every step.
//!
//! ## Exclusive
//!
//! ```text
//! v1 = new(origin)      print v1
//! v2 = copy(v1)         print v2
//! v3 = move(v1)         print v3
//!                       print v1   -> moved-from, skipped with a warning
//! ```
//!
//! ## Shared
//!
//! ```text
//! v1 = new(origin)                print v1
//! { v2 = alias(v1)                print v2
//!   normalize_shared(alias(v2))   print v1, print v2 }
//!                                 print v1   (inner alias gone, buffer alive)
//! z = zero; normalize(z)          print z    (no division by zero)
//! ```

use std::io::Write;

use vectra_core::{ExclusiveVector3D, SharedVector3D, VectorError, VectorResult};

use crate::config::VariantConfig;

/// What a scenario did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScenarioReport {
    /// Lines written.
    pub printed: usize,
    /// Prints refused because the vector was moved from.
    pub skipped: usize,
}

impl ScenarioReport {
    /// Records the outcome of one print.
    ///
    /// A moved-from refusal is counted and logged; any other error is returned.
    fn record(&mut self, name: &str, outcome: VectorResult<()>) -> VectorResult<()> {
        match outcome {
            Ok(()) => {
                self.printed += 1;
                Ok(())
            }
            Err(VectorError::MovedFrom) => {
                self.skipped += 1;
                tracing::warn!(vector = name, "print skipped: {}", VectorError::MovedFrom);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}

/// Takes a handle by value and normalizes the buffer it shares.
///
/// The caller's handles, and every other alias, see the result.
pub fn normalize_shared(handle: SharedVector3D) {
    tracing::info!(handles = handle.handle_count(), "normalizing through a passed handle");
    handle.normalize();
}

/// Runs the exclusive-ownership sequence.
///
/// # Errors
///
/// [`VectorError::Output`] if writing to `out` fails. The moved-from print is
/// not an error: it is skipped and reported.
pub fn run_exclusive<W: Write + ?Sized>(
    config: &VariantConfig,
    out: &mut W,
) -> VectorResult<ScenarioReport> {
    let mut report = ScenarioReport::default();

    let mut v1 = ExclusiveVector3D::from(config.origin_coords());
    tracing::info!(vector = "v1", "constructed");
    report.record("v1", v1.write_to(out))?;

    let v2 = v1.clone();
    tracing::info!(vector = "v2", "copied from v1");
    report.record("v2", v2.write_to(out))?;

    let v3 = v1.take();
    tracing::info!(vector = "v3", source_len = v1.len(), "moved from v1");
    report.record("v3", v3.write_to(out))?;

    report.record("v1", v1.write_to(out))?;

    tracing::info!(printed = report.printed, skipped = report.skipped, "exclusive scenario done");
    Ok(report)
}

/// Runs the shared-ownership sequence.
///
/// # Errors
///
/// [`VectorError::Output`] if writing to `out` fails.
pub fn run_shared<W: Write + ?Sized>(
    config: &VariantConfig,
    out: &mut W,
) -> VectorResult<ScenarioReport> {
    let mut report = ScenarioReport::default();

    let v1 = SharedVector3D::from(config.origin_coords());
    tracing::info!(vector = "v1", handles = v1.handle_count(), "constructed");
    report.record("v1", v1.write_to(out))?;

    {
        let v2 = v1.clone();
        tracing::info!(vector = "v2", handles = v1.handle_count(), "aliased v1");
        report.record("v2", v2.write_to(out))?;

        normalize_shared(v2.clone());
        report.record("v1", v1.write_to(out))?;
        report.record("v2", v2.write_to(out))?;
    }

    tracing::info!(vector = "v1", handles = v1.handle_count(), "inner alias dropped");
    report.record("v1", v1.write_to(out))?;

    let zero = SharedVector3D::default();
    zero.normalize();
    tracing::info!(vector = "zero", length = zero.length(), "normalized zero vector");
    report.record("zero", zero.write_to(out))?;

    tracing::info!(printed = report.printed, "shared scenario done");
    Ok(report)
}
