use anyhow::Result;
use clap::{Parser, Subcommand};
use xicon::{command, DistributeArgs, GenerateArgs};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};
    tracing_log::LogTracer::init().ok();
    let env = std::env::var("XICON_LOG").unwrap_or_else(|_| "warn".into());
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_span_events(FmtSpan::ACTIVE | FmtSpan::CLOSE)
        .with_env_filter(EnvFilter::new(env))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
    log_panics::init();
    let args = Args::parse();
    args.command.run()
}

#[derive(Subcommand)]
enum Commands {
    /// Copy pre-sized pngs into the mipmap folder matching the size in
    /// their file name
    Distribute {
        #[clap(flatten)]
        args: DistributeArgs,
    },
    /// Resize one source icon into every mipmap folder
    Generate {
        #[clap(flatten)]
        args: GenerateArgs,
    },
}

impl Commands {
    pub fn run(self) -> Result<()> {
        match self {
            Self::Distribute { args } => command::distribute(&args)?,
            Self::Generate { args } => command::generate(&args)?,
        }
        Ok(())
    }
}
