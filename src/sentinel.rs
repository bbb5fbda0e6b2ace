use crate::{
    source::{ProcStatFile, StatsSource},
    stat::{CpuSample, StatReadError, estimate_usage},
};

/// observes kernel statistics.
pub struct Sentinel<S = ProcStatFile> {
    /// the underlying source of kernel statistics.
    source: S,
    /// the samples being compared.
    window: SampleWindow,
}

/// the two most recent samples of a run.
///
/// pushing a sample moves the current sample into the previous slot. nothing older than the
/// previous sample is kept.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SampleWindow {
    previous: Option<CpuSample>,
    current: Option<CpuSample>,
}

/// === impl Sentinel ===

impl<S: Default> Default for Sentinel<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S> Sentinel<S> {
    /// creates a new [`Sentinel`] reading from the given source.
    pub fn new(source: S) -> Self {
        Self {
            source,
            window: SampleWindow::default(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn window(&self) -> &SampleWindow {
        &self.window
    }
}

impl<S: StatsSource> Sentinel<S> {
    /// captures a new sample, and returns the estimated cpu usage since the last one.
    ///
    /// NB: the first observation has nothing to compare against, and reports a usage of zero.
    pub fn observe(&mut self) -> Result<f64, StatReadError> {
        let Self { source, window } = self;

        let sample = CpuSample::read(&*source)?;
        log::debug!("captured {sample:?}");

        window.push(sample);
        let usage = window.usage();
        if !usage.is_finite() {
            log::warn!("cpu usage estimate is {usage}, the previous sample had no busy time");
        }

        Ok(usage)
    }
}

// === impl SampleWindow ===

impl SampleWindow {
    /// records a new sample, discarding the previous one.
    pub fn push(&mut self, sample: CpuSample) {
        let Self { previous, current } = self;
        *previous = current.replace(sample);
    }

    /// returns the estimated cpu usage between the two samples.
    ///
    /// this is zero until two samples have been pushed.
    pub fn usage(&self) -> f64 {
        match self {
            Self {
                previous: Some(previous),
                current: Some(current),
            } => estimate_usage(previous, current),
            _ => 0.0,
        }
    }

    pub fn previous(&self) -> Option<&CpuSample> {
        self.previous.as_ref()
    }

    pub fn current(&self) -> Option<&CpuSample> {
        self.current.as_ref()
    }
}
