//! Blocking queries against the obstacle field.
//!
//! Only solid obstacles block. Passable ones (brush) are ignored by every
//! query in this module.

use tankfire_core::components::Obstacle;
use tankfire_core::types::Rect;

/// True if `bounds` overlaps any solid obstacle.
pub fn is_blocked(bounds: &Rect, obstacles: &[Obstacle]) -> bool {
    first_blocking(bounds, obstacles).is_some()
}

/// Index of the first solid obstacle overlapping `bounds`.
pub fn first_blocking(bounds: &Rect, obstacles: &[Obstacle]) -> Option<usize> {
    obstacles
        .iter()
        .position(|obstacle| obstacle.is_solid() && bounds.overlaps(&obstacle.bounds))
}

/// True if `bounds`, grown by `margin` on every side, touches no solid obstacle.
pub fn is_clear_with_margin(bounds: &Rect, obstacles: &[Obstacle], margin: f64) -> bool {
    !is_blocked(&bounds.expand(margin), obstacles)
}

#[cfg(test)]
mod tests {
    use glam::DVec2;
    use tankfire_core::enums::ObstacleKind;

    use super::*;

    fn wall(x: f64, y: f64, kind: ObstacleKind) -> Obstacle {
        Obstacle::new(Rect::from_corner(DVec2::new(x, y), DVec2::splat(30.0)), kind)
    }

    #[test]
    fn test_solid_obstacles_block() {
        let field = vec![wall(100.0, 100.0, ObstacleKind::Reinforced)];
        let tank = Rect::from_center(DVec2::new(110.0, 110.0), DVec2::splat(40.0));
        assert!(is_blocked(&tank, &field));
        assert_eq!(first_blocking(&tank, &field), Some(0));
    }

    #[test]
    fn test_brush_never_blocks() {
        let field = vec![wall(100.0, 100.0, ObstacleKind::Passable)];
        let tank = Rect::from_center(DVec2::new(110.0, 110.0), DVec2::splat(40.0));
        assert!(!is_blocked(&tank, &field));
    }

    #[test]
    fn test_first_blocking_skips_brush() {
        let field = vec![
            wall(100.0, 100.0, ObstacleKind::Passable),
            wall(100.0, 100.0, ObstacleKind::Breakable),
        ];
        let tank = Rect::from_center(DVec2::new(110.0, 110.0), DVec2::splat(40.0));
        assert_eq!(first_blocking(&tank, &field), Some(1));
    }

    #[test]
    fn test_margin_extends_clearance() {
        let field = vec![wall(100.0, 100.0, ObstacleKind::Breakable)];
        // Hull right edge at 97: clear without margin, blocked with a 5-unit buffer.
        let tank = Rect::from_center(DVec2::new(77.0, 115.0), DVec2::splat(40.0));
        assert!(!is_blocked(&tank, &field));
        assert!(!is_clear_with_margin(&tank, &field, 5.0));
        assert!(is_clear_with_margin(&tank, &field, 2.0));
    }
}
