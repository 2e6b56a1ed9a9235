use crate::task::Reporter;
use crate::{Config, GenerateArgs};
use anyhow::Result;

pub fn generate(args: &GenerateArgs) -> Result<()> {
    let config = Config::parse(args.common.config())?;
    let generate = config.generate(args);
    tracing::info!(
        "generating {} icons from {} into {} with {} filter",
        generate.mapping.len(),
        generate.icon.display(),
        generate.res.display(),
        generate.filter
    );
    let mut reporter = Reporter::new();
    let report = mipmap::run::generate(&generate, &mut reporter)?;
    super::finish(&reporter, &report)
}
