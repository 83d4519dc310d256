use crate::math::Vec2;

/// Index into the controller's fixed zone list, stable for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZoneId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExplorationEvent {
    TargetSet { point: Vec2 },
    Arrived { point: Vec2 },
    ZoneEntered { zone: ZoneId },
    ZoneExited { zone: ZoneId },
    ContentShown { zone: ZoneId },
    ContentHidden { zone: ZoneId },
    AchievementUnlocked { zone: ZoneId },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplorationEventKind {
    TargetSet,
    Arrived,
    ZoneEntered,
    ZoneExited,
    ContentShown,
    ContentHidden,
    AchievementUnlocked,
}

impl ExplorationEvent {
    pub fn kind(self) -> ExplorationEventKind {
        match self {
            Self::TargetSet { .. } => ExplorationEventKind::TargetSet,
            Self::Arrived { .. } => ExplorationEventKind::Arrived,
            Self::ZoneEntered { .. } => ExplorationEventKind::ZoneEntered,
            Self::ZoneExited { .. } => ExplorationEventKind::ZoneExited,
            Self::ContentShown { .. } => ExplorationEventKind::ContentShown,
            Self::ContentHidden { .. } => ExplorationEventKind::ContentHidden,
            Self::AchievementUnlocked { .. } => ExplorationEventKind::AchievementUnlocked,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventCounts {
    pub total: u32,
    pub target_set: u32,
    pub arrived: u32,
    pub zone_entered: u32,
    pub zone_exited: u32,
    pub content_shown: u32,
    pub content_hidden: u32,
    pub achievement_unlocked: u32,
}

impl EventCounts {
    pub(crate) fn record(&mut self, kind: ExplorationEventKind) {
        self.total = self.total.saturating_add(1);
        match kind {
            ExplorationEventKind::TargetSet => {
                self.target_set = self.target_set.saturating_add(1)
            }
            ExplorationEventKind::Arrived => self.arrived = self.arrived.saturating_add(1),
            ExplorationEventKind::ZoneEntered => {
                self.zone_entered = self.zone_entered.saturating_add(1)
            }
            ExplorationEventKind::ZoneExited => {
                self.zone_exited = self.zone_exited.saturating_add(1)
            }
            ExplorationEventKind::ContentShown => {
                self.content_shown = self.content_shown.saturating_add(1)
            }
            ExplorationEventKind::ContentHidden => {
                self.content_hidden = self.content_hidden.saturating_add(1)
            }
            ExplorationEventKind::AchievementUnlocked => {
                self.achievement_unlocked = self.achievement_unlocked.saturating_add(1)
            }
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct ExplorationEventBus {
    pending: Vec<ExplorationEvent>,
    last_drain_counts: EventCounts,
}

impl ExplorationEventBus {
    pub(crate) fn emit(&mut self, event: ExplorationEvent) {
        self.pending.push(event);
    }

    pub(crate) fn drain(&mut self) -> Vec<ExplorationEvent> {
        let mut counts = EventCounts::default();
        for event in &self.pending {
            counts.record(event.kind());
        }
        self.last_drain_counts = counts;
        std::mem::take(&mut self.pending)
    }

    pub(crate) fn last_drain_counts(&self) -> EventCounts {
        self.last_drain_counts
    }
}
