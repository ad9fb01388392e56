//! Performance tiers and device capability detection.
//!
//! All environment sniffing happens in a [`CapabilityProbe`] implementation
//! owned by the host; this module only turns the collected [`DeviceSignals`]
//! into a tier, so the decision itself is a pure function.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::constants::CONNECTION_POOL_SIZE;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PerformanceTier {
    Low,
    Medium,
    High,
}

/// Fixed parameters a tier selects.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TierSettings {
    pub node_count: usize,
    pub connection_distance: f32,
    pub connection_interval: Duration,
}

impl PerformanceTier {
    pub const ALL: [PerformanceTier; 3] = [Self::Low, Self::Medium, Self::High];

    pub const fn settings(self) -> TierSettings {
        match self {
            Self::Low => TierSettings {
                node_count: 25,
                connection_distance: 4.0,
                connection_interval: Duration::from_millis(400),
            },
            Self::Medium => TierSettings {
                node_count: 35,
                connection_distance: 5.0,
                connection_interval: Duration::from_millis(250),
            },
            Self::High => TierSettings {
                node_count: 50,
                connection_distance: 7.0,
                connection_interval: Duration::from_millis(150),
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for PerformanceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Largest node count any tier asks for; renderers size their buffers with it.
pub const MAX_NODE_COUNT: usize = PerformanceTier::High.settings().node_count;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown quality setting {0:?} (expected auto, low, medium or high)")]
    UnknownQuality(String),
}

/// User-facing quality knob: let the probe decide, or force a tier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QualitySetting {
    #[default]
    Auto,
    Fixed(PerformanceTier),
}

impl FromStr for QualitySetting {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "auto" => Ok(Self::Auto),
            "low" => Ok(Self::Fixed(PerformanceTier::Low)),
            "medium" => Ok(Self::Fixed(PerformanceTier::Medium)),
            "high" => Ok(Self::Fixed(PerformanceTier::High)),
            _ => Err(ConfigError::UnknownQuality(s.to_string())),
        }
    }
}

/// Everything the field needs to know before it is built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldConfig {
    pub tier: PerformanceTier,
    pub settings: TierSettings,
    pub pool_size: usize,
    /// Skip node transforms on every even frame.
    pub skip_alternate_frames: bool,
}

impl FieldConfig {
    pub fn for_tier(tier: PerformanceTier) -> Self {
        Self {
            tier,
            settings: tier.settings(),
            pool_size: CONNECTION_POOL_SIZE,
            skip_alternate_frames: false,
        }
    }

    /// Resolve a quality setting, consulting the probe only for `Auto`.
    pub fn resolve(quality: QualitySetting, probe: &impl CapabilityProbe) -> Self {
        match quality {
            QualitySetting::Auto => Self::for_tier(probe_tier(probe)),
            QualitySetting::Fixed(tier) => Self {
                skip_alternate_frames: tier == PerformanceTier::Low,
                ..Self::for_tier(tier)
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GraphicsCapability {
    Unavailable,
    Available { renderer: Option<String> },
}

#[derive(Clone, Debug, PartialEq)]
pub struct DeviceSignals {
    pub graphics: GraphicsCapability,
    pub user_agent: String,
    pub device_pixel_ratio: f64,
}

pub trait CapabilityProbe {
    fn signals(&self) -> DeviceSignals;
}

impl CapabilityProbe for DeviceSignals {
    fn signals(&self) -> DeviceSignals {
        self.clone()
    }
}

const SLOW_RENDERER_MARKERS: &[&str] = &["Intel", "Software"];
const MOBILE_UA_MARKERS: &[&str] = &[
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

#[inline]
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    let ua = user_agent.to_ascii_lowercase();
    MOBILE_UA_MARKERS.iter().any(|m| ua.contains(m))
}

pub fn detect_tier(signals: &DeviceSignals) -> PerformanceTier {
    let renderer = match &signals.graphics {
        GraphicsCapability::Unavailable => return PerformanceTier::Low,
        GraphicsCapability::Available { renderer } => renderer.as_deref(),
    };
    if let Some(r) = renderer {
        if SLOW_RENDERER_MARKERS.iter().any(|m| r.contains(m)) {
            return PerformanceTier::Low;
        }
    }
    if is_mobile_user_agent(&signals.user_agent) {
        return PerformanceTier::Low;
    }
    if signals.device_pixel_ratio > 1.0 {
        PerformanceTier::High
    } else {
        PerformanceTier::Medium
    }
}

pub fn probe_tier(probe: &impl CapabilityProbe) -> PerformanceTier {
    let signals = probe.signals();
    let tier = detect_tier(&signals);
    log::info!(
        "[probe] tier={} renderer={:?} dpr={:.2}",
        tier,
        match &signals.graphics {
            GraphicsCapability::Unavailable => None,
            GraphicsCapability::Available { renderer } => renderer.as_deref(),
        },
        signals.device_pixel_ratio
    );
    tier
}
