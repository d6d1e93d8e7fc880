//! Volume activity check feeding the Screen Time strategy.
//!
//! The check runs once per instrument before the strategies, so the
//! strategies themselves stay deterministic.

use crate::config::VolumeActivityMode;
use crate::models::market::InstrumentSeries;
use rand::Rng;

pub trait VolumeActivity: Send + Sync {
    fn is_elevated(&self, series: &InstrumentSeries) -> bool;
}

/// Latest bar volume against the average of the bars before it.
/// Never fires when the series carries no volume.
#[derive(Debug, Clone)]
pub struct RelativeVolume {
    lookback: usize,
    ratio: f64,
}

impl RelativeVolume {
    pub fn new(lookback: usize, ratio: f64) -> Self {
        Self { lookback, ratio }
    }
}

impl Default for RelativeVolume {
    fn default() -> Self {
        Self::new(20, 1.5)
    }
}

impl VolumeActivity for RelativeVolume {
    fn is_elevated(&self, series: &InstrumentSeries) -> bool {
        let Some((latest, history)) = series.prices.split_last() else {
            return false;
        };
        let Some(latest_volume) = latest.volume else {
            return false;
        };

        let start = history.len().saturating_sub(self.lookback);
        let volumes: Vec<f64> = history[start..].iter().filter_map(|p| p.volume).collect();
        if volumes.is_empty() {
            return false;
        }
        let average = volumes.iter().sum::<f64>() / volumes.len() as f64;
        average > 0.0 && latest_volume > average * self.ratio
    }
}

/// Coin flip stand-in for missing volume data
#[derive(Debug, Clone)]
pub struct RandomVolumeActivity {
    probability: f64,
}

impl RandomVolumeActivity {
    /// Probabilities outside `[0, 1]` are clamped; non-finite ones never fire
    pub fn new(probability: f64) -> Self {
        let probability = if probability.is_finite() {
            probability.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self { probability }
    }
}

impl Default for RandomVolumeActivity {
    fn default() -> Self {
        Self::new(0.3)
    }
}

impl VolumeActivity for RandomVolumeActivity {
    fn is_elevated(&self, _series: &InstrumentSeries) -> bool {
        rand::thread_rng().gen_bool(self.probability)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoVolumeActivity;

impl VolumeActivity for NoVolumeActivity {
    fn is_elevated(&self, _series: &InstrumentSeries) -> bool {
        false
    }
}

pub fn from_mode(mode: VolumeActivityMode) -> Box<dyn VolumeActivity> {
    match mode {
        VolumeActivityMode::Volume => Box::new(RelativeVolume::default()),
        VolumeActivityMode::Random => Box::new(RandomVolumeActivity::default()),
        VolumeActivityMode::Off => Box::new(NoVolumeActivity),
    }
}
