mod distribute;
mod generate;

pub use distribute::distribute;
pub use generate::generate;

use crate::task::Reporter;
use anyhow::Result;
use mipmap::Report;

fn finish(reporter: &Reporter, report: &Report) -> Result<()> {
    reporter.summary(report);
    if !report.is_success() {
        anyhow::bail!(
            "{} of {} icons could not be written",
            report.failed(),
            report.outcomes.len()
        );
    }
    Ok(())
}
