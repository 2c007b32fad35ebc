use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nbrebuild", about = "Rebuild a Jupyter notebook so it renders on GitHub")]
struct Cli {
    /// Notebook to read.
    input: PathBuf,

    /// Where to write the rebuilt notebook.
    output: PathBuf,

    /// Config file to use instead of ~/.config/nbrebuild/config.toml.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write debug logs to $TMPDIR/nbrebuild-debug.log.
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let log_path = std::env::temp_dir().join("nbrebuild-debug.log");
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("nbrebuild debug log started: {}", log_path.display());
    }

    let config = match &cli.config {
        Some(path) => nbrebuild::config::Config::load_from(path)?,
        None => nbrebuild::config::Config::load()
            .unwrap_or_else(|_| nbrebuild::config::Config::defaults()),
    };

    nbrebuild::run(&cli.input, &cli.output, &config)
}
