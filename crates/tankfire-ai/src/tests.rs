#[cfg(test)]
mod tests {
    use glam::DVec2;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use tankfire_core::components::{AiMode, Obstacle, Tank};
    use tankfire_core::constants::*;
    use tankfire_core::enums::{AiModeKind, ObstacleKind};
    use tankfire_core::types::Rect;

    use crate::attack::evaluate_attack;
    use crate::fsm::{evaluate, EnemyContext, PlayerSighting};
    use crate::profiles::*;
    use crate::steering::*;

    fn arena() -> Rect {
        Rect::from_corner(DVec2::ZERO, DVec2::new(ARENA_WIDTH, ARENA_HEIGHT))
    }

    fn enemy_at(x: f64, y: f64, level: u8) -> Tank {
        enemy_profile(level).build_tank(DVec2::new(x, y))
    }

    fn wall(x: f64, y: f64, w: f64, h: f64) -> Obstacle {
        Obstacle::new(
            Rect::from_corner(DVec2::new(x, y), DVec2::new(w, h)),
            ObstacleKind::Reinforced,
        )
    }

    fn patrol(target: DVec2, retarget_at_ms: u64) -> AiMode {
        AiMode::Patrol {
            target,
            retarget_at_ms,
            retarget_interval_ms: 4000,
        }
    }

    fn context(mode: AiMode, player: Option<PlayerSighting>, now_ms: u64) -> EnemyContext {
        EnemyContext {
            mode,
            position: DVec2::new(100.0, 100.0),
            player,
            now_ms,
        }
    }

    fn seen_at(x: f64, y: f64) -> Option<PlayerSighting> {
        Some(PlayerSighting {
            position: DVec2::new(x, y),
            visible: true,
        })
    }

    // ---- Profiles ----

    #[test]
    fn test_level_curve_endpoints() {
        assert!((speed_for_level(1) - 1.5).abs() < 1e-12);
        assert!((speed_for_level(10) - 4.5).abs() < 1e-12);
        assert!((cooldown_for_level(1) - 2000.0).abs() < 1e-9);
        assert!((cooldown_for_level(10) - 600.0).abs() < 1e-9);
    }

    #[test]
    fn test_level_for_kills() {
        assert_eq!(level_for_kills(0), 1);
        assert_eq!(level_for_kills(1), 1);
        assert_eq!(level_for_kills(2), 2);
        assert_eq!(level_for_kills(19), 10);
        assert_eq!(level_for_kills(500), 10);
        assert_eq!(level_for_kills(7), level_for_kills(7));
    }

    #[test]
    fn test_hunt_factor_scales_with_level() {
        assert!((hunt_speed_factor(1) - 1.15).abs() < 1e-12);
        assert!((hunt_speed_factor(10) - 1.6).abs() < 1e-12);
    }

    #[test]
    fn test_player_profile_ignores_level_curve() {
        let player = player_profile().build_tank(DVec2::new(400.0, 500.0));
        assert_eq!(player.speed, PLAYER_SPEED);
        assert_eq!(player.fire_cooldown_ms, PLAYER_FIRE_COOLDOWN_MS);
        assert_eq!(player.health, PLAYER_MAX_HEALTH);
        assert_eq!(player.level, 1);
    }

    #[test]
    fn test_enemy_profile_clamps_level() {
        let tank = enemy_profile(42).build_tank(DVec2::ZERO);
        assert_eq!(tank.level, MAX_LEVEL);
        assert_eq!(tank.health, ENEMY_MAX_HEALTH);
        assert!(tank.last_fire_ms.is_none());
    }

    // ---- FSM ----

    #[test]
    fn test_patrol_to_hunt_on_sight() {
        let update = evaluate(&context(patrol(DVec2::ZERO, 5000), seen_at(300.0, 100.0), 1000));
        assert!(update.mode_changed);
        assert_eq!(
            update.new_mode,
            AiMode::Hunt {
                target: DVec2::new(300.0, 100.0),
                last_seen_ms: 1000
            }
        );
    }

    #[test]
    fn test_out_of_hunting_range_stays_patrol() {
        let mode = patrol(DVec2::ZERO, 5000);
        let update = evaluate(&context(mode, seen_at(401.0, 100.0), 1000));
        assert!(!update.mode_changed);
        assert_eq!(update.new_mode, mode);
    }

    #[test]
    fn test_hidden_player_stays_patrol() {
        let player = Some(PlayerSighting {
            position: DVec2::new(150.0, 100.0),
            visible: false,
        });
        let update = evaluate(&context(patrol(DVec2::ZERO, 5000), player, 1000));
        assert_eq!(update.new_mode.kind(), AiModeKind::Patrol);
    }

    #[test]
    fn test_hunt_memory_keeps_stale_target() {
        let hunting = AiMode::Hunt {
            target: DVec2::new(250.0, 250.0),
            last_seen_ms: 10_000,
        };
        let hidden = Some(PlayerSighting {
            position: DVec2::new(600.0, 500.0),
            visible: false,
        });

        let update = evaluate(&context(hunting, hidden, 14_999));
        assert!(!update.mode_changed);
        assert_eq!(update.new_mode, hunting, "stale target is kept");

        let update = evaluate(&context(hunting, hidden, 15_000));
        assert!(update.mode_changed);
        assert_eq!(
            update.new_mode,
            AiMode::Patrol {
                target: DVec2::new(250.0, 250.0),
                retarget_at_ms: 15_000,
                retarget_interval_ms: 0,
            }
        );
    }

    #[test]
    fn test_no_player_forces_patrol() {
        let hunting = AiMode::Hunt {
            target: DVec2::new(250.0, 250.0),
            last_seen_ms: 10_000,
        };
        let update = evaluate(&context(hunting, None, 10_001));
        assert!(update.mode_changed);
        assert_eq!(update.new_mode.kind(), AiModeKind::Patrol);
    }

    #[test]
    fn test_hunt_refreshes_target_while_visible() {
        let hunting = AiMode::Hunt {
            target: DVec2::new(250.0, 250.0),
            last_seen_ms: 10_000,
        };
        let update = evaluate(&context(hunting, seen_at(200.0, 150.0), 10_500));
        assert!(!update.mode_changed);
        assert_eq!(update.new_mode.target(), DVec2::new(200.0, 150.0));
    }

    // ---- Steering ----

    #[test]
    fn test_patrol_retargets_when_due() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let tank = enemy_at(100.0, 100.0, 1);
        let outcome = patrol_step(&mut rng, &tank, patrol(DVec2::ZERO, 1000), &arena(), &[], 1000);

        let AiMode::Patrol {
            target,
            retarget_at_ms,
            retarget_interval_ms,
        } = outcome.mode
        else {
            panic!("patrol step must stay in patrol");
        };
        assert!(arena().contains_point(target));
        assert!((PATROL_INTERVAL_MIN_MS..PATROL_INTERVAL_MAX_MS).contains(&retarget_interval_ms));
        assert_eq!(retarget_at_ms, 1000 + retarget_interval_ms);
    }

    #[test]
    fn test_patrol_walks_at_base_speed() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let tank = enemy_at(100.0, 100.0, 1);
        let outcome = patrol_step(
            &mut rng,
            &tank,
            patrol(DVec2::new(300.0, 100.0), 9000),
            &arena(),
            &[],
            1000,
        );
        let step = outcome.step.expect("clear path should move");
        assert!((step.delta - DVec2::new(1.5, 0.0)).length() < 1e-12);
        assert_eq!(step.heading(), 0.0);
    }

    #[test]
    fn test_patrol_arrived_holds() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let tank = enemy_at(100.0, 100.0, 1);
        let outcome = patrol_step(
            &mut rng,
            &tank,
            patrol(DVec2::new(104.0, 100.0), 9000),
            &arena(),
            &[],
            1000,
        );
        assert!(outcome.step.is_none());
    }

    #[test]
    fn test_patrol_blocked_picks_nearby_detour() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let tank = enemy_at(100.0, 100.0, 1);
        // Wall flush against the hull's right edge.
        let obstacles = [wall(120.5, 60.0, 20.0, 80.0)];
        let outcome = patrol_step(
            &mut rng,
            &tank,
            patrol(DVec2::new(300.0, 100.0), 9000),
            &arena(),
            &obstacles,
            1000,
        );
        assert!(outcome.step.is_none());
        let AiMode::Patrol {
            target,
            retarget_at_ms,
            ..
        } = outcome.mode
        else {
            panic!("patrol step must stay in patrol");
        };
        assert!((target.distance(tank.position) - PATROL_DETOUR_RADIUS).abs() < 1e-9);
        assert_eq!(retarget_at_ms, 1000 + 4000);
    }

    #[test]
    fn test_hunt_step_uses_level_factor() {
        let tank = enemy_at(100.0, 100.0, 10);
        let step = hunt_step(&tank, DVec2::new(100.0, 300.0), hunt_speed_factor(10), &[])
            .expect("clear path should move");
        assert!((step.delta.y - 4.5 * 1.6).abs() < 1e-9);
        assert!(step.delta.x.abs() < 1e-12);
    }

    #[test]
    fn test_hunt_step_arrived_holds() {
        let tank = enemy_at(100.0, 100.0, 1);
        assert!(hunt_step(&tank, DVec2::new(108.0, 100.0), 1.15, &[]).is_none());
    }

    #[test]
    fn test_hunt_blocked_takes_first_open_detour() {
        let tank = enemy_at(100.0, 100.0, 1);
        // Blocks moving right; moving left is the next option.
        let obstacles = [wall(121.0, 0.0, 20.0, 300.0)];
        let step = hunt_step(&tank, DVec2::new(300.0, 100.0), 1.15, &obstacles)
            .expect("left should be open");
        assert_eq!(step.delta, DVec2::new(-1.5, 0.0));
    }

    #[test]
    fn test_detour_stalls_when_boxed_in() {
        let tank = enemy_at(100.0, 100.0, 1);
        let obstacles = [
            wall(121.0, 0.0, 20.0, 300.0),
            wall(59.0, 0.0, 20.0, 300.0),
            wall(0.0, 121.0, 300.0, 20.0),
            wall(0.0, 59.0, 300.0, 20.0),
        ];
        assert!(detour_step(&tank, &obstacles).is_none());
        assert!(hunt_step(&tank, DVec2::new(300.0, 100.0), 1.15, &obstacles).is_none());
    }

    #[test]
    fn test_settle_reverts_and_clamps() {
        let obstacles = [wall(200.0, 200.0, 50.0, 50.0)];
        let mut tank = enemy_at(210.0, 210.0, 1);
        let settled = settle_position(&tank, DVec2::new(150.0, 150.0), &arena(), &obstacles);
        assert_eq!(settled, DVec2::new(150.0, 150.0));

        tank.position = DVec2::new(-10.0, 700.0);
        let settled = settle_position(&tank, DVec2::ZERO, &arena(), &obstacles);
        assert_eq!(settled, DVec2::new(20.0, 580.0));
    }

    #[test]
    fn test_initial_patrol_interval() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let AiMode::Patrol {
            retarget_at_ms,
            retarget_interval_ms,
            ..
        } = initial_patrol(&mut rng, &arena(), 100)
        else {
            panic!("fresh units patrol");
        };
        assert!(
            (PATROL_FIRST_INTERVAL_MIN_MS..PATROL_FIRST_INTERVAL_MAX_MS)
                .contains(&retarget_interval_ms)
        );
        assert_eq!(retarget_at_ms, 100 + retarget_interval_ms);
    }

    // ---- Attack ----

    #[test]
    fn test_attack_aims_at_player() {
        let tank = enemy_at(100.0, 100.0, 1);
        let angle = evaluate_attack(&tank, seen_at(100.0, 300.0), 0).expect("should fire");
        assert!((angle - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_attack_gates() {
        let mut tank = enemy_at(100.0, 100.0, 1);
        assert!(evaluate_attack(&tank, None, 0).is_none(), "no player");
        assert!(
            evaluate_attack(&tank, seen_at(100.0, 351.0), 0).is_none(),
            "out of range"
        );
        let hidden = Some(PlayerSighting {
            position: DVec2::new(100.0, 200.0),
            visible: false,
        });
        assert!(evaluate_attack(&tank, hidden, 0).is_none(), "no line of sight");

        tank.last_fire_ms = Some(1000);
        assert!(evaluate_attack(&tank, seen_at(100.0, 200.0), 2999).is_none());
        assert!(
            evaluate_attack(&tank, seen_at(100.0, 200.0), 3000).is_some(),
            "cooldown boundary is inclusive for AI units"
        );
    }

    mod props {
        use proptest::prelude::*;

        use crate::profiles::*;

        proptest! {
            #[test]
            fn level_curves_are_monotonic(level in 1u8..10) {
                prop_assert!(speed_for_level(level + 1) >= speed_for_level(level));
                prop_assert!(cooldown_for_level(level + 1) <= cooldown_for_level(level));
            }

            #[test]
            fn level_never_decreases_with_kills(kills in 0u32..1000) {
                let level = level_for_kills(kills);
                prop_assert!(level_for_kills(kills + 1) >= level);
                prop_assert!((1..=10).contains(&level));
            }
        }
    }
}
