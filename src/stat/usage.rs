use super::CpuSample;

/// estimates cpu usage from two samples.
///
/// this is the relative change in busy time between the two samples, as a percentage:
/// `|busy(current) - busy(previous)| / busy(previous) * 100`, where busy time is scaled by 100.
/// it is not the fraction of time the cpus spent busy, and it is not bounded by 100.
///
/// NB: if `previous` has no busy time at all, the result is `NaN` or infinite.
pub fn estimate_usage(previous: &CpuSample, current: &CpuSample) -> f64 {
    let scaled = |sample: &CpuSample| sample.busy().as_f64() * 100.0;
    let (prev, cur) = (scaled(previous), scaled(current));

    ((cur - prev).abs() / prev) * 100.0
}
