use crate::chain::{CancelPolicy, SpringConfig, presets};
use bevy::color::Srgba;
use bevy::prelude::*;
use serde::Deserialize;
use std::fmt;

const CHAIN_JSON: &str = include_str!("../../assets/chain.json");

/// Diameter of each circle in logical pixels
pub const DEFAULT_CIRCLE_SIZE: f32 = 80.0;

/// Error types for configuration loading
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Parse(String),
    UnknownSpringPreset(String),
    InvalidSpring(String),
    InvalidCircleSize(f32),
    NoCircles,
    InvalidColor { circle: String, color: String },
    InvalidGlyphScale { circle: String, scale: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(msg) => write!(f, "Invalid chain config: {}", msg),
            ConfigError::UnknownSpringPreset(name) => {
                write!(f, "Unknown spring preset '{}'", name)
            }
            ConfigError::InvalidSpring(msg) => write!(f, "Invalid spring: {}", msg),
            ConfigError::InvalidCircleSize(size) => {
                write!(f, "Circle size {} must be positive", size)
            }
            ConfigError::NoCircles => write!(f, "At least one circle (the draggable root) is required"),
            ConfigError::InvalidColor { circle, color } => {
                write!(f, "Circle '{}' has invalid color '{}'", circle, color)
            }
            ConfigError::InvalidGlyphScale { circle, scale } => {
                write!(f, "Circle '{}' glyph scale {} is outside (0, 1]", circle, scale)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Static look of one circle
#[derive(Debug, Clone, PartialEq)]
pub struct CircleStyle {
    pub name: String,
    /// Brand color of the inner glyph disc
    pub color: Color,
    /// Glyph diameter as a fraction of the circle size
    pub glyph_scale: f32,
}

impl CircleStyle {
    fn new(name: &str, color: Color, glyph_scale: f32) -> Self {
        CircleStyle {
            name: name.to_string(),
            color,
            glyph_scale,
        }
    }
}

/// Everything the screen needs that is not animation state
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ChainConfig {
    pub circle_size: f32,
    pub spring: SpringConfig,
    pub cancel_policy: CancelPolicy,
    /// Root first, then followers in chain order
    pub circles: Vec<CircleStyle>,
}

impl Default for ChainConfig {
    fn default() -> Self {
        ChainConfig {
            circle_size: DEFAULT_CIRCLE_SIZE,
            spring: presets::CRITICAL,
            cancel_policy: CancelPolicy::Snap,
            circles: vec![
                CircleStyle::new("whatsapp", Color::srgb_u8(0x00, 0xff, 0x04), 0.9),
                CircleStyle::new("instagram", Color::srgb_u8(0xa1, 0x00, 0xff), 0.875),
                CircleStyle::new("facebook", Color::srgb_u8(0x00, 0x08, 0xff), 0.875),
                CircleStyle::new("github", Color::srgb_u8(0x00, 0x00, 0x00), 0.875),
                CircleStyle::new("linkedin", Color::srgb_u8(0x00, 0x64, 0xff), 0.875),
            ],
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SpringSetting {
    Preset(String),
    Custom(SpringConfig),
}

impl Default for SpringSetting {
    fn default() -> Self {
        SpringSetting::Preset("critical".to_string())
    }
}

#[derive(Debug, Deserialize)]
struct RawCircle {
    name: String,
    color: String,
    #[serde(default = "default_glyph_scale")]
    glyph_scale: f32,
}

fn default_glyph_scale() -> f32 {
    0.875
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default = "default_circle_size")]
    circle_size: f32,
    #[serde(default)]
    spring: SpringSetting,
    #[serde(default)]
    cancel_policy: CancelPolicy,
    circles: Vec<RawCircle>,
}

fn default_circle_size() -> f32 {
    DEFAULT_CIRCLE_SIZE
}

impl ChainConfig {
    /// Load the configuration embedded at build time
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_json(CHAIN_JSON)
    }

    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;

        if !(raw.circle_size.is_finite() && raw.circle_size > 0.0) {
            return Err(ConfigError::InvalidCircleSize(raw.circle_size));
        }

        let spring = match raw.spring {
            SpringSetting::Preset(name) => {
                presets::by_name(&name).ok_or(ConfigError::UnknownSpringPreset(name))?
            }
            SpringSetting::Custom(spring) => spring,
        };
        spring.validate().map_err(ConfigError::InvalidSpring)?;

        if raw.circles.is_empty() {
            return Err(ConfigError::NoCircles);
        }

        let circles = raw
            .circles
            .into_iter()
            .map(|circle| {
                let color = Srgba::hex(&circle.color).map_err(|_| ConfigError::InvalidColor {
                    circle: circle.name.clone(),
                    color: circle.color.clone(),
                })?;

                if !(circle.glyph_scale > 0.0 && circle.glyph_scale <= 1.0) {
                    return Err(ConfigError::InvalidGlyphScale {
                        circle: circle.name,
                        scale: circle.glyph_scale,
                    });
                }

                Ok(CircleStyle {
                    name: circle.name,
                    color: Color::Srgba(color),
                    glyph_scale: circle.glyph_scale,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ChainConfig {
            circle_size: raw.circle_size,
            spring,
            cancel_policy: raw.cancel_policy,
            circles,
        })
    }

    /// Number of spring followers behind the root
    pub fn follower_count(&self) -> usize {
        self.circles.len().saturating_sub(1)
    }
}

/// System: Load the chain configuration, falling back to the built-in one
pub fn setup_chain_config(mut commands: Commands) {
    let config = match ChainConfig::load() {
        Ok(config) => {
            info!(
                "Loaded chain config: {} circles, size {}, spring {:?}",
                config.circles.len(),
                config.circle_size,
                config.spring
            );
            config
        }
        Err(e) => {
            error!("Failed to load chain config: {} - using defaults", e);
            ChainConfig::default()
        }
    };

    commands.insert_resource(config);
}
