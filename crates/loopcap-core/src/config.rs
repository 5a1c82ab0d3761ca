//! Duplicate-removal configuration and policy types

use serde::{Deserialize, Serialize};

use crate::pixel::ChannelMask;

/// Which frame of a duplicate run becomes the output representative
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum KeepMode {
    /// Keep the first frame of the run
    #[default]
    First,
    /// Keep the last frame of the run
    Last,
}

impl std::str::FromStr for KeepMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first" => Ok(KeepMode::First),
            "last" => Ok(KeepMode::Last),
            _ => Err(format!("Invalid keep mode: {}. Use: first, last", s)),
        }
    }
}

/// How the kept frame's delay is derived when a run collapses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DelayAdjust {
    /// Leave the kept frame's own delay untouched
    Unchanged,
    /// Arithmetic mean of the run's delays, truncating
    Average,
    /// Sum of the run's delays, preserving total playback time
    #[default]
    Sum,
}

impl std::str::FromStr for DelayAdjust {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unchanged" | "none" => Ok(DelayAdjust::Unchanged),
            "average" | "avg" => Ok(DelayAdjust::Average),
            "sum" => Ok(DelayAdjust::Sum),
            _ => Err(format!(
                "Invalid delay adjustment: {}. Use: unchanged, average, sum",
                s
            )),
        }
    }
}

/// Similarity comparison settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DedupConfig {
    /// Minimum similarity score in [0,1] to classify frames as duplicates
    pub similarity_threshold: f64,
    /// Horizontal sampling stride; 1 checks every column
    pub sample_step_x: i32,
    /// Vertical sampling stride; 1 checks every row
    pub sample_step_y: i32,
    /// Per-channel absolute tolerance; 0 requires exact equality
    pub per_channel_tolerance: i32,
    /// Channels participating in equality checks
    pub channel_mask: ChannelMask,
    /// Allow the scan to stop once the threshold is unreachable
    pub enable_early_out: bool,
}

impl Default for DedupConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: 0.90,
            sample_step_x: 1,
            sample_step_y: 1,
            per_channel_tolerance: 0,
            channel_mask: ChannelMask::RGB,
            enable_early_out: true,
        }
    }
}

impl DedupConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pattern: set similarity threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    /// Builder pattern: set sampling strides
    pub fn with_sample_steps(mut self, x: i32, y: i32) -> Self {
        self.sample_step_x = x;
        self.sample_step_y = y;
        self
    }

    /// Builder pattern: set per-channel tolerance
    pub fn with_tolerance(mut self, tolerance: i32) -> Self {
        self.per_channel_tolerance = tolerance;
        self
    }

    /// Builder pattern: set channel mask
    pub fn with_channel_mask(mut self, mask: ChannelMask) -> Self {
        self.channel_mask = mask;
        self
    }

    /// Builder pattern: enable or disable the early-out bound
    pub fn with_early_out(mut self, enable: bool) -> Self {
        self.enable_early_out = enable;
        self
    }

    /// Sampling strides coerced to at least 1
    pub fn effective_sample_steps(&self) -> (i32, i32) {
        (self.sample_step_x.max(1), self.sample_step_y.max(1))
    }

    /// Copy with out-of-range values clamped
    ///
    /// Applied when loading persisted settings: threshold to [0,1],
    /// strides to >=1, tolerance to >=0.
    pub fn clamped(mut self) -> Self {
        self.similarity_threshold = self.similarity_threshold.clamp(0.0, 1.0);
        self.sample_step_x = self.sample_step_x.max(1);
        self.sample_step_y = self.sample_step_y.max(1);
        self.per_channel_tolerance = self.per_channel_tolerance.max(0);
        self
    }
}

/// Removal policy: which frame to keep and how to rewrite its delay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DedupPolicy {
    pub keep_mode: KeepMode,
    pub delay_adjust: DelayAdjust,
}

impl DedupPolicy {
    /// Create a policy with default values (keep first, sum delays)
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pattern: set keep mode
    pub fn with_keep_mode(mut self, mode: KeepMode) -> Self {
        self.keep_mode = mode;
        self
    }

    /// Builder pattern: set delay adjustment
    pub fn with_delay_adjust(mut self, adjust: DelayAdjust) -> Self {
        self.delay_adjust = adjust;
        self
    }
}
