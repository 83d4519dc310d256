use crate::config::ZoneDef;
use crate::math::Vec2;

/// A fixed circular region tied to one portfolio topic. The definition is
/// immutable for the session; only `active` changes, and only on
/// containment edges driven by the controller.
#[derive(Debug, Clone, PartialEq)]
pub struct Zone {
    def: ZoneDef,
    active: bool,
}

impl Zone {
    pub(crate) fn new(def: ZoneDef) -> Self {
        Self { def, active: false }
    }

    pub fn key(&self) -> &str {
        &self.def.key
    }

    pub fn title(&self) -> &str {
        &self.def.title
    }

    pub fn body(&self) -> &str {
        &self.def.body
    }

    pub fn center(&self) -> Vec2 {
        self.def.center
    }

    pub fn trigger_radius(&self) -> f32 {
        self.def.trigger_radius
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub(crate) fn contains(&self, point: Vec2) -> bool {
        point.distance_sq(self.def.center)
            <= self.def.trigger_radius * self.def.trigger_radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone_at(x: f32, y: f32, radius: f32) -> Zone {
        Zone::new(ZoneDef {
            key: "test".to_string(),
            title: "Test".to_string(),
            body: "body".to_string(),
            center: Vec2::new(x, y),
            trigger_radius: radius,
        })
    }

    #[test]
    fn containment_is_a_closed_disc() {
        let zone = zone_at(100.0, 100.0, 50.0);
        assert!(zone.contains(Vec2::new(100.0, 100.0)));
        assert!(zone.contains(Vec2::new(150.0, 100.0)));
        assert!(zone.contains(Vec2::new(130.0, 140.0)));
        assert!(!zone.contains(Vec2::new(151.0, 100.0)));
        assert!(!zone.contains(Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn zones_start_inactive() {
        let zone = zone_at(0.0, 0.0, 10.0);
        assert!(!zone.is_active());
    }
}
