use crate::config::{MovementTuning, WorldBounds};
use crate::math::Vec2;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MovementState {
    pub velocity: Vec2,
    pub facing: Facing,
}

pub(crate) struct StepOutcome {
    pub(crate) position: Vec2,
    pub(crate) arrived: bool,
}

/// One fixed-timestep movement step. Arcade-style steering: constant
/// acceleration along the line to the target, speed clamped to
/// `max_speed`, drag applied per axis only while that axis receives no
/// steering. Within `arrival_threshold` the avatar snaps to the target
/// and stops dead, which makes the arrived state a fixed point.
pub(crate) fn integrate_step(
    position: Vec2,
    target: Vec2,
    state: &mut MovementState,
    tuning: MovementTuning,
    bounds: WorldBounds,
    dt_seconds: f32,
) -> StepOutcome {
    let distance_sq = position.distance_sq(target);
    let threshold_sq = tuning.arrival_threshold * tuning.arrival_threshold;
    if distance_sq <= threshold_sq {
        state.velocity = Vec2::ZERO;
        return StepOutcome {
            position: bounds.clamp(target),
            arrived: true,
        };
    }

    let direction = position.direction_to(target);
    let accel_x = direction.x * tuning.acceleration;
    let accel_y = direction.y * tuning.acceleration;

    let mut velocity_x = state.velocity.x;
    let mut velocity_y = state.velocity.y;
    if accel_x == 0.0 {
        velocity_x = drag_toward_zero(velocity_x, tuning.drag * dt_seconds);
    }
    if accel_y == 0.0 {
        velocity_y = drag_toward_zero(velocity_y, tuning.drag * dt_seconds);
    }
    velocity_x += accel_x * dt_seconds;
    velocity_y += accel_y * dt_seconds;

    let speed_sq = velocity_x * velocity_x + velocity_y * velocity_y;
    let max_speed_sq = tuning.max_speed * tuning.max_speed;
    if speed_sq > max_speed_sq {
        let scale = tuning.max_speed * speed_sq.sqrt().recip();
        velocity_x *= scale;
        velocity_y *= scale;
    }

    let stepped = Vec2 {
        x: position.x + velocity_x * dt_seconds,
        y: position.y + velocity_y * dt_seconds,
    };
    let clamped = bounds.clamp(stepped);
    if clamped.x != stepped.x {
        velocity_x = 0.0;
    }
    if clamped.y != stepped.y {
        velocity_y = 0.0;
    }

    state.velocity = Vec2 {
        x: velocity_x,
        y: velocity_y,
    };
    if velocity_x < 0.0 {
        state.facing = Facing::Left;
    } else if velocity_x > 0.0 {
        state.facing = Facing::Right;
    }

    StepOutcome {
        position: clamped,
        arrived: false,
    }
}

fn drag_toward_zero(velocity: f32, amount: f32) -> f32 {
    if velocity > 0.0 {
        (velocity - amount).max(0.0)
    } else if velocity < 0.0 {
        (velocity + amount).min(0.0)
    } else {
        velocity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn tuning() -> MovementTuning {
        MovementTuning::default()
    }

    fn bounds() -> WorldBounds {
        WorldBounds {
            width: 2000.0,
            height: 1500.0,
        }
    }

    #[test]
    fn step_accelerates_toward_the_target() {
        let mut state = MovementState::default();
        let outcome = integrate_step(
            Vec2::new(100.0, 100.0),
            Vec2::new(500.0, 100.0),
            &mut state,
            tuning(),
            bounds(),
            DT,
        );
        assert!(!outcome.arrived);
        assert!(outcome.position.x > 100.0);
        assert_eq!(outcome.position.y, 100.0);
        assert!(state.velocity.x > 0.0);
        assert_eq!(state.facing, Facing::Right);
    }

    #[test]
    fn speed_never_exceeds_max_speed() {
        let mut state = MovementState::default();
        let mut position = Vec2::new(0.0, 750.0);
        let target = Vec2::new(1900.0, 750.0);
        for _ in 0..600 {
            let outcome = integrate_step(position, target, &mut state, tuning(), bounds(), DT);
            assert!(state.velocity.length() <= tuning().max_speed + 1e-3);
            position = outcome.position;
            if outcome.arrived {
                break;
            }
        }
    }

    #[test]
    fn within_threshold_snaps_and_stops() {
        let mut state = MovementState {
            velocity: Vec2::new(50.0, 0.0),
            facing: Facing::Right,
        };
        let target = Vec2::new(105.0, 100.0);
        let outcome = integrate_step(
            Vec2::new(100.0, 100.0),
            target,
            &mut state,
            tuning(),
            bounds(),
            DT,
        );
        assert!(outcome.arrived);
        assert_eq!(outcome.position, target);
        assert_eq!(state.velocity, Vec2::ZERO);
    }

    #[test]
    fn arrived_state_is_a_fixed_point() {
        let mut state = MovementState::default();
        let point = Vec2::new(300.0, 400.0);
        for _ in 0..10 {
            let outcome = integrate_step(point, point, &mut state, tuning(), bounds(), DT);
            assert!(outcome.arrived);
            assert_eq!(outcome.position, point);
            assert_eq!(state.velocity, Vec2::ZERO);
        }
    }

    #[test]
    fn facing_flips_with_horizontal_velocity_sign() {
        let mut state = MovementState::default();
        integrate_step(
            Vec2::new(100.0, 100.0),
            Vec2::new(0.0, 100.0),
            &mut state,
            tuning(),
            bounds(),
            DT,
        );
        assert_eq!(state.facing, Facing::Left);

        // Steering back east: one step cancels the westward velocity, the
        // next builds eastward speed and flips the facing.
        for _ in 0..2 {
            integrate_step(
                Vec2::new(100.0, 100.0),
                Vec2::new(200.0, 100.0),
                &mut state,
                tuning(),
                bounds(),
                DT,
            );
        }
        assert_eq!(state.facing, Facing::Right);

        // Dead-vertical walk keeps the previous facing.
        integrate_step(
            Vec2::new(100.0, 100.0),
            Vec2::new(100.0, 300.0),
            &mut state,
            tuning(),
            bounds(),
            DT,
        );
        assert_eq!(state.facing, Facing::Right);
    }

    #[test]
    fn drag_bleeds_off_unsteered_axis_velocity() {
        let mut state = MovementState {
            velocity: Vec2::new(0.0, 80.0),
            facing: Facing::Right,
        };
        // Target dead east: no vertical steering, so vertical velocity
        // decays by drag while horizontal velocity builds.
        let outcome = integrate_step(
            Vec2::new(100.0, 100.0),
            Vec2::new(900.0, 100.0),
            &mut state,
            tuning(),
            bounds(),
            DT,
        );
        assert!(!outcome.arrived);
        assert!(state.velocity.y < 80.0);
        assert!(state.velocity.x > 0.0);
    }

    #[test]
    fn out_of_bounds_step_is_clamped_with_velocity_zeroed() {
        let mut state = MovementState {
            velocity: Vec2::new(-200.0, 0.0),
            facing: Facing::Left,
        };
        let small = WorldBounds {
            width: 100.0,
            height: 100.0,
        };
        let outcome = integrate_step(
            Vec2::new(1.0, 50.0),
            Vec2::new(-500.0, 50.0),
            &mut state,
            tuning(),
            small,
            DT,
        );
        assert_eq!(outcome.position.x, 0.0);
        assert_eq!(state.velocity.x, 0.0);
    }
}
