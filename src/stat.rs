use {
    crate::source::StatsSource,
    std::{
        io::{self, BufRead, BufReader},
        num::ParseIntError,
        str::FromStr,
    },
    thiserror::Error,
};

pub use self::{usage::estimate_usage, user_hz::UserHz};

mod usage;
mod user_hz;


/// a snapshot of the system's aggregate cpu time at a moment in time.
///
/// this is taken from the first record of the `/proc/stat` kernel statistics table, which
/// reports the time all cpus have spent in each state since boot. see `proc_stat(5)`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CpuSample {
    /// the sum of every time counter on the record.
    pub total: UserHz,
    /// time spent in the idle task.
    pub idle: UserHz,
}

#[derive(Debug, Error)]
pub enum StatReadError {
    #[error("could not read kernel statistics: {0}")]
    Io(#[from] io::Error),
    #[error("kernel statistics table is empty")]
    Empty,
    #[error("malformed cpu entry: {0}")]
    Entry(#[from] SampleParseError),
}

#[derive(Debug, Eq, PartialEq, Error)]
pub enum SampleParseError {
    #[error("entry has no label")]
    MissingLabel,
    #[error("unrecognized entry kind: {kind}")]
    UnrecognizedEntry { kind: String },
    #[error("invalid time value: {0}")]
    UserHzParse(#[from] ParseIntError),
    #[error("expected at least 4 time values, found {found}")]
    TooFewCounters { found: usize },
    #[error("time values overflow when summed")]
    Overflow,
}

// === impl CpuSample ===

impl CpuSample {
    /// the position of the idle counter, after the label.
    const IDLE: usize = 3;

    /// reads a sample from the first line of the given source.
    pub fn read(stats: &impl StatsSource) -> Result<Self, StatReadError> {
        let reader = stats.open()?;
        let line = BufReader::new(reader)
            .lines()
            .next()
            .ok_or(StatReadError::Empty)??;

        line.parse::<Self>().map_err(StatReadError::from)
    }

    /// returns the time spent outside of the idle task.
    ///
    /// a parsed sample's `total` includes its `idle` time, so this does not underflow.
    pub fn busy(&self) -> UserHz {
        let Self { total, idle } = *self;
        total - idle
    }
}

impl FromStr for CpuSample {
    type Err = SampleParseError;
    fn from_str(entry: &str) -> Result<Self, Self::Err> {
        use SampleParseError::*;

        let mut tokens = entry.split_whitespace();

        let kind = tokens.next().ok_or(MissingLabel)?;
        if !kind.starts_with("cpu") {
            return Err(UnrecognizedEntry {
                kind: kind.to_owned(),
            });
        }

        let times = tokens
            .map(str::parse::<UserHz>)
            .collect::<Result<Vec<_>, _>>()?;

        let idle = *times.get(Self::IDLE).ok_or(TooFewCounters {
            found: times.len(),
        })?;
        let total = times
            .iter()
            .try_fold(UserHz::default(), |sum, &time| sum.checked_add(time))
            .ok_or(Overflow)?;

        Ok(Self { total, idle })
    }
}
