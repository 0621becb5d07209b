//! CSV export for production plans.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::dispatch::DispatchPlan;

/// Column header for plan export.
const HEADER: &str = "rank,name,fuel,net_cost_eur_per_mwh,committed_mw,p";

/// Exports a plan to a CSV file at the given path.
///
/// Writes a header row followed by one row per unit in dispatch order.
/// Produces deterministic output for identical plans.
///
/// # Arguments
///
/// * `plan` - Complete production plan
/// * `path` - Output file path
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(plan: &DispatchPlan, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(plan, buf)
}

/// Writes a plan as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(plan: &DispatchPlan, writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER.split(','))?;

    for (rank, c) in plan.commitments.iter().enumerate() {
        wtr.write_record(&[
            (rank + 1).to_string(),
            c.name.clone(),
            c.fuel.to_string(),
            format!("{:.4}", c.net_cost_per_mwh),
            format!("{:.1}", c.committed_mw()),
            c.p().to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
