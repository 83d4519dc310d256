//! A point-and-click exploration controller: an avatar walks toward
//! clicked world points, circular zones reveal content when overlapped,
//! and each zone unlocks a one-way achievement on first entry. Rendering,
//! input capture, and the frame loop belong to an external engine; this
//! crate owns the state and the per-tick rules.

pub mod achievements;
pub mod config;
pub mod controller;
pub mod events;
pub mod math;
pub mod movement;
pub mod zones;

pub use achievements::AchievementSet;
pub use config::{
    MovementTuning, WorldBounds, WorldConfig, WorldConfigError, ZoneDef,
};
pub use controller::ExplorationController;
pub use events::{EventCounts, ExplorationEvent, ExplorationEventKind, ZoneId};
pub use math::Vec2;
pub use movement::{Facing, MovementState};
pub use zones::Zone;
