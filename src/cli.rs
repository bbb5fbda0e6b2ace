use {
    crate::{DisplayMode, RunConfig},
    clap::Parser,
    std::time::Duration,
};

/// a periodic system monitor.
///
/// reports memory, logged in users, and cpu usage N times, every T seconds.
#[derive(Debug, Parser)]
#[command(version)]
pub struct Args {
    /// append each sample below the last, rather than redrawing in place.
    #[arg(long)]
    pub sequential: bool,

    /// report logged in users.
    #[arg(long)]
    pub user: bool,

    /// report memory and cpu usage.
    #[arg(long)]
    pub system: bool,

    /// the number of samples to take. defaults to 10.
    #[arg(long, value_name = "N", env = "SYSMON_SAMPLES", value_parser = clap::value_parser!(u32).range(1..))]
    pub samples: Option<u32>,

    /// the number of seconds between samples. defaults to 1.
    #[arg(long, value_name = "T", env = "SYSMON_TDELAY")]
    pub tdelay: Option<u64>,

    /// the number of samples, given positionally. takes precedence over `--samples`.
    #[arg(value_name = "N", requires = "positional_tdelay", value_parser = clap::value_parser!(u32).range(1..))]
    pub positional_samples: Option<u32>,

    /// the number of seconds between samples, given positionally. takes precedence over `--tdelay`.
    #[arg(value_name = "T")]
    pub positional_tdelay: Option<u64>,
}

// === impl Args ===

impl Args {
    /// returns the number of samples and the interval between them.
    pub fn config(&self) -> RunConfig {
        let Self {
            samples,
            tdelay,
            positional_samples,
            positional_tdelay,
            ..
        } = *self;

        let samples = positional_samples
            .or(samples)
            .unwrap_or(RunConfig::DEFAULT_SAMPLES);
        let interval = positional_tdelay
            .or(tdelay)
            .map(Duration::from_secs)
            .unwrap_or(RunConfig::DEFAULT_INTERVAL);

        RunConfig { samples, interval }
    }

    /// returns what to display.
    pub fn mode(&self) -> DisplayMode {
        let Self {
            user,
            system,
            sequential,
            ..
        } = *self;

        DisplayMode::select(user, system, sequential)
    }
}
