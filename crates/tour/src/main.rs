use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use explore::{ExplorationController, ExplorationEvent, Vec2, WorldConfig};
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

const WORLD_CONFIG_ENV_VAR: &str = "EXPLORE_WORLD_CONFIG";
const FIXED_DT_SECONDS: f32 = 1.0 / 60.0;
const MAX_TICKS_PER_LEG: u32 = 7200;

fn main() {
    init_tracing();
    info!("=== Cozy Tour Startup ===");

    let config = match load_world_config() {
        Ok(config) => config,
        Err(error) => {
            error!(error = %error, "config_load_failed");
            std::process::exit(1);
        }
    };

    let mut controller = match ExplorationController::new(config) {
        Ok(controller) => controller,
        Err(error) => {
            error!(error = %error, "world_rejected");
            std::process::exit(1);
        }
    };

    run_tour(&mut controller);

    let achievements = controller.achievements();
    info!(
        unlocked = achievements.unlocked_count(),
        total = achievements.total(),
        summary = %achievements.summary_line(),
        "tour_complete"
    );
    if achievements.unlocked_count() < achievements.total() {
        warn!("tour ended with locked achievements");
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn load_world_config() -> Result<WorldConfig, String> {
    match env::var(WORLD_CONFIG_ENV_VAR) {
        Ok(value) if !value.trim().is_empty() => {
            load_world_config_from(&PathBuf::from(value))
        }
        _ => {
            info!("using built-in world");
            Ok(WorldConfig::default_world())
        }
    }
}

fn load_world_config_from(path: &Path) -> Result<WorldConfig, String> {
    let raw = fs::read_to_string(path)
        .map_err(|error| format!("read world config '{}': {error}", path.display()))?;
    let config = parse_world_config_json(&raw)?;
    config
        .validate()
        .map_err(|error| format!("world config '{}': {error}", path.display()))?;
    Ok(config)
}

fn parse_world_config_json(raw: &str) -> Result<WorldConfig, String> {
    let mut deserializer = serde_json::Deserializer::from_str(raw);
    match serde_path_to_error::deserialize::<_, WorldConfig>(&mut deserializer) {
        Ok(config) => Ok(config),
        Err(error) => {
            let path = error.path().to_string();
            let source = error.into_inner();
            if path.is_empty() || path == "." {
                Err(format!("parse world config json: {source}"))
            } else {
                Err(format!("parse world config json at {path}: {source}"))
            }
        }
    }
}

/// Walk the avatar through every zone in order, then back home. Stands in
/// for a player clicking each landmark once.
fn run_tour(controller: &mut ExplorationController) {
    let home = controller.position();
    let mut stops: Vec<(String, Vec2)> = controller
        .zones()
        .iter()
        .map(|zone| (zone.key().to_string(), zone.center()))
        .collect();
    stops.push(("home".to_string(), home));

    for (label, point) in stops {
        info!(stop = %label, x = point.x, y = point.y, "leg_started");
        walk_to(controller, point, &label);
    }
}

fn walk_to(controller: &mut ExplorationController, point: Vec2, label: &str) {
    controller.set_target(point);
    for _ in 0..MAX_TICKS_PER_LEG {
        controller.tick(FIXED_DT_SECONDS);
        let mut arrived = false;
        for event in controller.drain_events() {
            log_event(controller, &event);
            if matches!(event, ExplorationEvent::Arrived { .. }) {
                arrived = true;
            }
        }
        if arrived {
            return;
        }
    }
    warn!(stop = label, "leg_tick_cap_reached");
}

fn log_event(controller: &ExplorationController, event: &ExplorationEvent) {
    match *event {
        ExplorationEvent::TargetSet { point } => {
            debug!(x = point.x, y = point.y, "walking")
        }
        ExplorationEvent::Arrived { point } => info!(x = point.x, y = point.y, "arrived"),
        ExplorationEvent::ZoneEntered { zone } => {
            info!(zone = zone_key(controller, zone), "zone_entered")
        }
        ExplorationEvent::ZoneExited { zone } => {
            info!(zone = zone_key(controller, zone), "zone_exited")
        }
        ExplorationEvent::ContentShown { zone } => {
            let title = controller
                .zone(zone)
                .map(|zone| zone.title())
                .unwrap_or("?");
            info!(zone = zone_key(controller, zone), title = title, "content_shown")
        }
        ExplorationEvent::ContentHidden { zone } => {
            info!(zone = zone_key(controller, zone), "content_hidden")
        }
        ExplorationEvent::AchievementUnlocked { zone } => {
            info!(
                zone = zone_key(controller, zone),
                summary = %controller.achievements().summary_line(),
                "achievement_unlocked"
            )
        }
    }
}

fn zone_key(controller: &ExplorationController, zone: explore::ZoneId) -> &str {
    controller.zone(zone).map(|zone| zone.key()).unwrap_or("?")
}
