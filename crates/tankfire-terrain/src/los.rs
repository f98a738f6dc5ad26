//! Line-of-sight between two arena points.
//!
//! Uses stepped sampling along the segment: any sample inside a solid
//! obstacle blocks the view. The approximation can miss obstacle corners
//! thinner than one step.

use glam::DVec2;

use tankfire_core::components::Obstacle;
use tankfire_core::constants::LOS_STEP;

/// Check line-of-sight from `from` to `to` through the obstacle field.
///
/// The segment is split into `floor(distance / LOS_STEP)` steps and the
/// interior sample points are tested (the endpoints are not). Segments
/// shorter than two steps are always clear.
pub fn has_line_of_sight(obstacles: &[Obstacle], from: DVec2, to: DVec2) -> bool {
    let delta = to - from;
    let steps = (delta.length() / LOS_STEP).floor() as u32;

    for i in 1..steps {
        let sample = from + delta * (i as f64 / steps as f64);
        let occluded = obstacles
            .iter()
            .any(|obstacle| obstacle.is_solid() && obstacle.bounds.contains_point(sample));
        if occluded {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use tankfire_core::enums::ObstacleKind;
    use tankfire_core::types::Rect;

    fn block(x: f64, y: f64, w: f64, h: f64, kind: ObstacleKind) -> Obstacle {
        Obstacle::new(Rect::from_corner(DVec2::new(x, y), DVec2::new(w, h)), kind)
    }

    #[test]
    fn test_los_open_field() {
        assert!(has_line_of_sight(
            &[],
            DVec2::new(0.0, 0.0),
            DVec2::new(300.0, 200.0)
        ));
    }

    #[test]
    fn test_los_blocked_by_wall() {
        let field = [block(140.0, 80.0, 20.0, 40.0, ObstacleKind::Breakable)];
        assert!(
            !has_line_of_sight(&field, DVec2::new(100.0, 100.0), DVec2::new(200.0, 100.0)),
            "LOS should be blocked by the wall between the points"
        );
    }

    #[test]
    fn test_los_ignores_brush() {
        let field = [block(140.0, 80.0, 20.0, 40.0, ObstacleKind::Passable)];
        assert!(has_line_of_sight(
            &field,
            DVec2::new(100.0, 100.0),
            DVec2::new(200.0, 100.0)
        ));
    }

    #[test]
    fn test_los_wall_beside_segment() {
        let field = [block(140.0, 110.0, 20.0, 40.0, ObstacleKind::Reinforced)];
        assert!(has_line_of_sight(
            &field,
            DVec2::new(100.0, 100.0),
            DVec2::new(200.0, 100.0)
        ));
    }

    #[test]
    fn test_los_short_range_always_clear() {
        // 15 units apart: a single step, so no interior samples.
        let field = [block(100.0, 90.0, 20.0, 20.0, ObstacleKind::Reinforced)];
        assert!(has_line_of_sight(
            &field,
            DVec2::new(100.0, 100.0),
            DVec2::new(115.0, 100.0)
        ));
    }

    #[test]
    fn test_los_sample_on_edge_blocks() {
        // Steps of exactly 10; the sample at x=150 lands on the wall's left edge.
        let field = [block(150.0, 90.0, 1.0, 20.0, ObstacleKind::Breakable)];
        assert!(!has_line_of_sight(
            &field,
            DVec2::new(100.0, 100.0),
            DVec2::new(200.0, 100.0)
        ));
    }
}
