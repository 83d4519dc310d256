use crate::events::ZoneId;

/// One-way flags, one per zone, in zone-list order. An entry flips
/// Locked -> Unlocked at most once per session and never back.
#[derive(Debug, Clone, PartialEq)]
pub struct AchievementSet {
    entries: Vec<AchievementEntry>,
}

#[derive(Debug, Clone, PartialEq)]
struct AchievementEntry {
    zone_key: String,
    unlocked: bool,
}

impl AchievementSet {
    pub(crate) fn new(zone_keys: impl IntoIterator<Item = String>) -> Self {
        Self {
            entries: zone_keys
                .into_iter()
                .map(|zone_key| AchievementEntry {
                    zone_key,
                    unlocked: false,
                })
                .collect(),
        }
    }

    /// Returns true only when this call performed the Locked -> Unlocked
    /// transition; repeated calls stay false forever.
    pub(crate) fn unlock(&mut self, zone: ZoneId) -> bool {
        match self.entries.get_mut(zone.0) {
            Some(entry) if !entry.unlocked => {
                entry.unlocked = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_unlocked(&self, zone: ZoneId) -> bool {
        self.entries
            .get(zone.0)
            .map(|entry| entry.unlocked)
            .unwrap_or(false)
    }

    pub fn is_unlocked_key(&self, zone_key: &str) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.zone_key == zone_key && entry.unlocked)
    }

    pub fn unlocked_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.unlocked).count()
    }

    pub fn total(&self) -> usize {
        self.entries.len()
    }

    pub fn unlocked_keys(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|entry| entry.unlocked)
            .map(|entry| entry.zone_key.as_str())
    }

    /// The HUD line: `Achievements: N/4`.
    pub fn summary_line(&self) -> String {
        format!("Achievements: {}/{}", self.unlocked_count(), self.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set() -> AchievementSet {
        AchievementSet::new(["about", "projects"].map(String::from))
    }

    #[test]
    fn starts_fully_locked() {
        let achievements = set();
        assert_eq!(achievements.unlocked_count(), 0);
        assert_eq!(achievements.total(), 2);
        assert!(!achievements.is_unlocked(ZoneId(0)));
        assert!(!achievements.is_unlocked_key("about"));
        assert_eq!(achievements.summary_line(), "Achievements: 0/2");
    }

    #[test]
    fn unlock_fires_exactly_once() {
        let mut achievements = set();
        assert!(achievements.unlock(ZoneId(0)));
        assert!(!achievements.unlock(ZoneId(0)));
        assert!(!achievements.unlock(ZoneId(0)));
        assert!(achievements.is_unlocked(ZoneId(0)));
        assert!(achievements.is_unlocked_key("about"));
        assert_eq!(achievements.unlocked_count(), 1);
        assert_eq!(achievements.summary_line(), "Achievements: 1/2");
    }

    #[test]
    fn unlocked_keys_preserve_zone_order() {
        let mut achievements = set();
        achievements.unlock(ZoneId(1));
        achievements.unlock(ZoneId(0));
        let keys: Vec<&str> = achievements.unlocked_keys().collect();
        assert_eq!(keys, ["about", "projects"]);
    }

    #[test]
    fn out_of_range_zone_is_a_no_op() {
        let mut achievements = set();
        assert!(!achievements.unlock(ZoneId(9)));
        assert!(!achievements.is_unlocked(ZoneId(9)));
        assert_eq!(achievements.unlocked_count(), 0);
    }
}
