use tracing::{debug, info};

use crate::achievements::AchievementSet;
use crate::config::{MovementTuning, WorldBounds, WorldConfig, WorldConfigError};
use crate::events::{EventCounts, ExplorationEvent, ExplorationEventBus, ZoneId};
use crate::math::Vec2;
use crate::movement::{integrate_step, Facing, MovementState};
use crate::zones::Zone;

/// Owns the avatar, the fixed zone list, and the achievement flags, and
/// advances once per external frame tick. `set_target` and `tick` are the
/// only entry points; both are total and run synchronously to completion.
/// Events produced by either are collected until the caller drains them.
#[derive(Debug)]
pub struct ExplorationController {
    bounds: WorldBounds,
    tuning: MovementTuning,
    position: Vec2,
    target: Vec2,
    movement: MovementState,
    zones: Vec<Zone>,
    achievements: AchievementSet,
    displayed: Option<ZoneId>,
    events: ExplorationEventBus,
    at_rest: bool,
}

impl ExplorationController {
    pub fn new(config: WorldConfig) -> Result<Self, WorldConfigError> {
        config.validate()?;
        let WorldConfig {
            bounds,
            spawn,
            movement: tuning,
            zones,
        } = config;
        let spawn = bounds.clamp(spawn);
        let zones: Vec<Zone> = zones.into_iter().map(Zone::new).collect();
        let achievements =
            AchievementSet::new(zones.iter().map(|zone| zone.key().to_string()));
        info!(
            zone_count = zones.len(),
            spawn_x = spawn.x,
            spawn_y = spawn.y,
            "exploration_world_ready"
        );
        Ok(Self {
            bounds,
            tuning,
            position: spawn,
            target: spawn,
            movement: MovementState::default(),
            zones,
            achievements,
            displayed: None,
            events: ExplorationEventBus::default(),
            at_rest: true,
        })
    }

    /// Point the avatar at a world-space location. Any point is accepted,
    /// including outside world bounds; integration clamps the effect.
    pub fn set_target(&mut self, point: Vec2) {
        self.target = point;
        self.at_rest = false;
        self.events.emit(ExplorationEvent::TargetSet { point });
        debug!(x = point.x, y = point.y, "target_set");
    }

    /// One frame of simulation: movement step, then the zone pass. Zone
    /// transitions are edge-triggered; overlapping zones activate and
    /// deactivate independently.
    pub fn tick(&mut self, dt_seconds: f32) {
        let outcome = integrate_step(
            self.position,
            self.target,
            &mut self.movement,
            self.tuning,
            self.bounds,
            dt_seconds,
        );
        self.position = outcome.position;
        if outcome.arrived && !self.at_rest {
            self.at_rest = true;
            self.events.emit(ExplorationEvent::Arrived {
                point: self.position,
            });
        }

        for index in 0..self.zones.len() {
            let zone_id = ZoneId(index);
            let contained = self.zones[index].contains(self.position);
            if contained && !self.zones[index].is_active() {
                self.zones[index].set_active(true);
                self.events.emit(ExplorationEvent::ZoneEntered { zone: zone_id });
                debug!(zone = self.zones[index].key(), "zone_entered");
                self.show_content(zone_id);
                if self.achievements.unlock(zone_id) {
                    info!(
                        zone = self.zones[index].key(),
                        unlocked = self.achievements.unlocked_count(),
                        total = self.achievements.total(),
                        "achievement_unlocked"
                    );
                    self.events
                        .emit(ExplorationEvent::AchievementUnlocked { zone: zone_id });
                }
            } else if !contained && self.zones[index].is_active() {
                self.zones[index].set_active(false);
                self.events.emit(ExplorationEvent::ZoneExited { zone: zone_id });
                debug!(zone = self.zones[index].key(), "zone_exited");
                if self.displayed == Some(zone_id) {
                    self.displayed = None;
                    self.events
                        .emit(ExplorationEvent::ContentHidden { zone: zone_id });
                }
            }
        }
    }

    // At most one zone's content is visible; entering a zone always
    // claims the panel.
    fn show_content(&mut self, zone_id: ZoneId) {
        if let Some(previous) = self.displayed {
            if previous != zone_id {
                self.events
                    .emit(ExplorationEvent::ContentHidden { zone: previous });
            }
        }
        if self.displayed != Some(zone_id) {
            self.displayed = Some(zone_id);
            self.events
                .emit(ExplorationEvent::ContentShown { zone: zone_id });
        }
    }

    /// Events produced since the last drain, in emission order.
    pub fn drain_events(&mut self) -> Vec<ExplorationEvent> {
        self.events.drain()
    }

    pub fn last_drain_counts(&self) -> EventCounts {
        self.events.last_drain_counts()
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn velocity(&self) -> Vec2 {
        self.movement.velocity
    }

    pub fn facing(&self) -> Facing {
        self.movement.facing
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn zone(&self, id: ZoneId) -> Option<&Zone> {
        self.zones.get(id.0)
    }

    pub fn zone_id_by_key(&self, key: &str) -> Option<ZoneId> {
        self.zones
            .iter()
            .position(|zone| zone.key() == key)
            .map(ZoneId)
    }

    /// The zone whose content panel is currently visible, if any.
    pub fn displayed_content(&self) -> Option<&Zone> {
        self.displayed.and_then(|id| self.zone(id))
    }

    pub fn achievements(&self) -> &AchievementSet {
        &self.achievements
    }
}
