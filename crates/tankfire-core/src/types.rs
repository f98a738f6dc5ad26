//! Fundamental geometric and simulation types.
//!
//! Arena space: x grows to the right, y grows downward, units are pixels
//! of the default 800x600 playfield. Angles are radians measured with
//! `atan2(dy, dx)`, so 0 points along +x and PI/2 points down.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle stored by its two corners.
///
/// This is the only rectangle representation in the workspace. Units are
/// positioned by their center and obstacles by their top-left corner; both
/// are converted with [`Rect::from_center`] / [`Rect::from_corner`] so every
/// collision test goes through the same [`Rect::overlaps`] predicate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: DVec2,
    pub max: DVec2,
}

impl Rect {
    pub fn new(min: DVec2, max: DVec2) -> Self {
        Self { min, max }
    }

    /// Rectangle of the given full size centered on `center`.
    pub fn from_center(center: DVec2, size: DVec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Rectangle of the given size whose top-left corner is `origin`.
    pub fn from_corner(origin: DVec2, size: DVec2) -> Self {
        Self {
            min: origin,
            max: origin + size,
        }
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn size(&self) -> DVec2 {
        self.max - self.min
    }

    pub fn center(&self) -> DVec2 {
        (self.min + self.max) * 0.5
    }

    /// Strict overlap test. Rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    /// Inclusive point test (edges count as inside).
    pub fn contains_point(&self, point: DVec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// True if `other` lies entirely within this rectangle (edges inclusive).
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.min.x >= self.min.x
            && other.max.x <= self.max.x
            && other.min.y >= self.min.y
            && other.max.y <= self.max.y
    }

    /// Grow the rectangle by `margin` on every side.
    pub fn expand(&self, margin: f64) -> Rect {
        Rect {
            min: self.min - DVec2::splat(margin),
            max: self.max + DVec2::splat(margin),
        }
    }

    /// Clamp a center point so that a centered box of `half_extent` stays inside.
    pub fn clamp_center(&self, center: DVec2, half_extent: DVec2) -> DVec2 {
        let lo = self.min + half_extent;
        let hi = self.max - half_extent;
        DVec2::new(center.x.clamp(lo.x, hi.x), center.y.clamp(lo.y, hi.y))
    }
}

/// Heading of a vector in radians (`atan2(y, x)`).
pub fn heading_of(v: DVec2) -> f64 {
    v.y.atan2(v.x)
}

/// Unit vector pointing along `angle`.
pub fn unit_from_angle(angle: f64) -> DVec2 {
    DVec2::new(angle.cos(), angle.sin())
}

/// Simulation time tracking. Time is driven by the caller's clock.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of frames processed so far.
    pub frame: u64,
    /// Timestamp of the most recent frame (milliseconds, caller's clock).
    pub now_ms: u64,
}

impl SimTime {
    /// Record a new frame at `now_ms`.
    pub fn advance(&mut self, now_ms: u64) {
        self.frame += 1;
        self.now_ms = now_ms;
    }
}
