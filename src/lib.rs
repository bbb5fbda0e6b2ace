//! a periodic system monitor.
//!
//! samples memory, logged in users, and cpu usage a fixed number of times at a fixed interval,
//! and draws them to the terminal either in place or as a sequential log.

#[cfg(not(target_os = "linux"))]
compile_error!("sysmon reads `/proc/stat`, and only supports linux");

pub use self::{
    cli::Args,
    host::{Host, LinuxHost},
    mode::{Blocks, Discipline, DisplayMode},
    sentinel::{SampleWindow, Sentinel},
    source::{Pause, ProcStatFile, StatsSource, ThreadSleep},
    stat::{CpuSample, StatReadError, estimate_usage},
};

use {
    std::{io, time::Duration},
    thiserror::Error,
};

pub mod cli;
pub mod host;
pub mod mode;
pub mod screen;
pub mod sentinel;
pub mod source;

/// kernel statistics facilities.
///
/// this file provides tools to interact with `/proc/stat`.
pub mod stat;

/// the sample loop.
mod driver;

/// the monitor.
pub struct App<S = ProcStatFile, H = LinuxHost, P = ThreadSleep> {
    config: RunConfig,
    mode: DisplayMode,
    sentinel: Sentinel<S>,
    host: H,
    pause: P,
}

/// how many samples to take, and how far apart.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RunConfig {
    /// the number of iterations.
    pub samples: u32,
    /// the time to wait after each iteration.
    pub interval: Duration,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to sample cpu time: {0}")]
    Stat(#[from] StatReadError),
    #[error("failed to query the host: {0}")]
    Host(#[from] nix::Error),
    #[error("failed to draw to the terminal: {0}")]
    Terminal(#[from] io::Error),
}

/// === impl App ===

impl App {
    /// initializes a monitor of the local host.
    pub fn new(config: RunConfig, mode: DisplayMode) -> Self {
        Self::with_parts(config, mode, ProcStatFile, LinuxHost, ThreadSleep)
    }
}

impl<S, H, P> App<S, H, P> {
    /// initializes a monitor with the given collaborators.
    pub fn with_parts(config: RunConfig, mode: DisplayMode, source: S, host: H, pause: P) -> Self {
        Self {
            config,
            mode,
            sentinel: Sentinel::new(source),
            host,
            pause,
        }
    }
}

// === impl RunConfig ===

impl RunConfig {
    pub const DEFAULT_SAMPLES: u32 = 10;
    pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            samples: Self::DEFAULT_SAMPLES,
            interval: Self::DEFAULT_INTERVAL,
        }
    }
}
