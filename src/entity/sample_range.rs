use crate::error::{Result, SmartChoiceError};
use rand::Rng;
use rand_distr::{Distribution, Uniform};

/// 半开区间 [low, high) 上的均匀采样
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SampleRange {
    low: f64,
    high: f64,
}

impl SampleRange {
    /// 要求 low < high 且两端有限
    pub fn new(low: f64, high: f64) -> Result<Self> {
        let range = SampleRange { low, high };
        if !range.is_valid() {
            return Err(SmartChoiceError::Config(format!(
                "sample range [{}, {}) is empty or not finite",
                low, high
            )));
        }
        Ok(range)
    }

    /// 仅用于内置常量，边界由调用处保证
    pub(crate) const fn from_bounds(low: f64, high: f64) -> Self {
        SampleRange { low, high }
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn is_valid(&self) -> bool {
        self.low.is_finite() && self.high.is_finite() && self.low < self.high
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        debug_assert!(self.is_valid(), "invalid sample range {:?}", self);
        Uniform::new(self.low, self.high).sample(rng)
    }
}
