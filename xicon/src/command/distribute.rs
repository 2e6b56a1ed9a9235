use crate::task::Reporter;
use crate::{Config, DistributeArgs};
use anyhow::Result;

pub fn distribute(args: &DistributeArgs) -> Result<()> {
    let config = Config::parse(args.common.config())?;
    let distribute = config.distribute(args);
    tracing::info!(
        "distributing {} into {} using {} matching",
        distribute.source.display(),
        distribute.res.display(),
        distribute.strategy
    );
    let mut reporter = Reporter::new();
    let report = mipmap::run::distribute(&distribute, &mut reporter)?;
    super::finish(&reporter, &report)
}
