//! a periodic system monitor.

use {
    anyhow::Context,
    clap::Parser,
    env_logger::Env,
    std::io,
    sysmon::{App, Args},
};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let (config, mode) = (args.config(), args.mode());
    log::info!("starting sysmon v{}", env!("CARGO_PKG_VERSION"));

    App::new(config, mode)
        .run(io::stdout().lock())
        .context("system monitor stopped")
}
