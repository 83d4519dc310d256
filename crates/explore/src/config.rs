use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::math::Vec2;

pub const DEFAULT_WORLD_WIDTH: f32 = 2000.0;
pub const DEFAULT_WORLD_HEIGHT: f32 = 1500.0;
pub const DEFAULT_MAX_SPEED: f32 = 300.0;
pub const DEFAULT_ACCELERATION: f32 = 400.0;
pub const DEFAULT_DRAG: f32 = 500.0;
pub const DEFAULT_ARRIVAL_THRESHOLD: f32 = 10.0;
const DEFAULT_TRIGGER_RADIUS: f32 = 100.0;

/// Rectangular world; valid positions are `[0, width] x [0, height]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self {
            width: DEFAULT_WORLD_WIDTH,
            height: DEFAULT_WORLD_HEIGHT,
        }
    }
}

impl WorldBounds {
    pub fn clamp(self, point: Vec2) -> Vec2 {
        Vec2 {
            x: point.x.clamp(0.0, self.width),
            y: point.y.clamp(0.0, self.height),
        }
    }

    pub fn center(self) -> Vec2 {
        Vec2 {
            x: self.width / 2.0,
            y: self.height / 2.0,
        }
    }
}

/// Numeric feel of the avatar. Tuning data, not a correctness contract.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementTuning {
    pub max_speed: f32,
    pub acceleration: f32,
    pub drag: f32,
    pub arrival_threshold: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            max_speed: DEFAULT_MAX_SPEED,
            acceleration: DEFAULT_ACCELERATION,
            drag: DEFAULT_DRAG,
            arrival_threshold: DEFAULT_ARRIVAL_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneDef {
    pub key: String,
    pub title: String,
    pub body: String,
    pub center: Vec2,
    pub trigger_radius: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldConfig {
    #[serde(default)]
    pub bounds: WorldBounds,
    #[serde(default = "default_spawn")]
    pub spawn: Vec2,
    #[serde(default)]
    pub movement: MovementTuning,
    pub zones: Vec<ZoneDef>,
}

fn default_spawn() -> Vec2 {
    WorldBounds::default().center()
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorldConfigError {
    #[error("world has no zones")]
    NoZones,
    #[error("duplicate zone key '{key}'")]
    DuplicateZoneKey { key: String },
    #[error("zone '{key}' has non-positive trigger radius {radius}")]
    NonPositiveTriggerRadius { key: String, radius: f32 },
    #[error("zone '{key}' center ({x}, {y}) is not finite")]
    NonFiniteZoneCenter { key: String, x: f32, y: f32 },
    #[error("world bounds must be positive, got {width}x{height}")]
    NonPositiveBounds { width: f32, height: f32 },
    #[error("spawn point ({x}, {y}) is not finite")]
    NonFiniteSpawn { x: f32, y: f32 },
    #[error("movement {field} must be positive, got {value}")]
    NonPositiveTuning { field: &'static str, value: f32 },
}

impl WorldConfig {
    /// The stock parchment world: four portfolio zones in a 2000x1500
    /// meadow, avatar spawning at the center. Trigger circles sit 40 units
    /// below each landmark, matching where the visuals anchor.
    pub fn default_world() -> Self {
        let bounds = WorldBounds::default();
        let w = bounds.width;
        let h = bounds.height;
        let zones = vec![
            ZoneDef {
                key: "about".to_string(),
                title: "About Me".to_string(),
                body: "Hi! I'm Jules, a passionate developer.\n\
                       I love building cozy, interactive web experiences.\n\
                       My goal is to make software feel human."
                    .to_string(),
                center: Vec2::new(w * 0.2, h * 0.2 + 40.0),
                trigger_radius: DEFAULT_TRIGGER_RADIUS,
            },
            ZoneDef {
                key: "projects".to_string(),
                title: "Projects".to_string(),
                body: "1. Cozy Portfolio (You are here!)\n\
                       2. Neon Space Shooter (Python/Pygame)\n\
                       3. Procedural Art Gen\n\n\
                       Check my GitHub for more!"
                    .to_string(),
                center: Vec2::new(w * 0.8, h * 0.2 + 40.0),
                trigger_radius: DEFAULT_TRIGGER_RADIUS,
            },
            ZoneDef {
                key: "skills".to_string(),
                title: "Skills".to_string(),
                body: "Languages: JS, Python, HTML/CSS\n\
                       Tools: React, Phaser, Git\n\
                       Specialty: Creative Coding & Game Dev"
                    .to_string(),
                center: Vec2::new(w * 0.2, h * 0.8 + 40.0),
                trigger_radius: DEFAULT_TRIGGER_RADIUS,
            },
            ZoneDef {
                key: "contact".to_string(),
                title: "Contact".to_string(),
                body: "Let's work together!\n\
                       Email: jules@example.com\n\
                       Twitter: @jules_dev\n\
                       GitHub: github.com/jules"
                    .to_string(),
                center: Vec2::new(w * 0.8, h * 0.8 + 40.0),
                trigger_radius: DEFAULT_TRIGGER_RADIUS,
            },
        ];

        Self {
            bounds,
            spawn: bounds.center(),
            movement: MovementTuning::default(),
            zones,
        }
    }

    pub fn validate(&self) -> Result<(), WorldConfigError> {
        if !(self.bounds.width > 0.0 && self.bounds.height > 0.0) {
            return Err(WorldConfigError::NonPositiveBounds {
                width: self.bounds.width,
                height: self.bounds.height,
            });
        }
        if !self.spawn.is_finite() {
            return Err(WorldConfigError::NonFiniteSpawn {
                x: self.spawn.x,
                y: self.spawn.y,
            });
        }
        for (field, value) in [
            ("max_speed", self.movement.max_speed),
            ("acceleration", self.movement.acceleration),
            ("drag", self.movement.drag),
            ("arrival_threshold", self.movement.arrival_threshold),
        ] {
            if !(value > 0.0 && value.is_finite()) {
                return Err(WorldConfigError::NonPositiveTuning { field, value });
            }
        }
        if self.zones.is_empty() {
            return Err(WorldConfigError::NoZones);
        }
        let mut seen_keys = HashSet::new();
        for zone in &self.zones {
            if !seen_keys.insert(zone.key.as_str()) {
                return Err(WorldConfigError::DuplicateZoneKey {
                    key: zone.key.clone(),
                });
            }
            if !(zone.trigger_radius > 0.0 && zone.trigger_radius.is_finite()) {
                return Err(WorldConfigError::NonPositiveTriggerRadius {
                    key: zone.key.clone(),
                    radius: zone.trigger_radius,
                });
            }
            if !zone.center.is_finite() {
                return Err(WorldConfigError::NonFiniteZoneCenter {
                    key: zone.key.clone(),
                    x: zone.center.x,
                    y: zone.center.y,
                });
            }
        }
        Ok(())
    }
}
