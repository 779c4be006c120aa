//! Proximity Detection
//!
//! Axis-aligned box overlap between the player and the project stations.
//! Stations never overlap each other, but the first match in list order
//! wins so the result stays deterministic if a config ever makes them touch.

use serde::{Serialize, Deserialize};
use super::station::Station;

/// Axis-aligned rectangle: top-left corner plus size, in world pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Aabb {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Box of the given size centered on (cx, cy)
    pub fn centered(cx: f32, cy: f32, w: f32, h: f32) -> Self {
        Self::new(cx - w * 0.5, cy - h * 0.5, w, h)
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Strict overlap on both axes. Boxes that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

/// First station whose rectangle overlaps the player box, in list order
pub fn find_active_station<'a>(player_box: &Aabb, stations: &'a [Station]) -> Option<&'a Station> {
    stations.iter().find(|station| player_box.overlaps(&station.bounds))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::station::{Station, StationDetail};

    fn station(id: &str, bounds: Aabb) -> Station {
        Station {
            id: id.into(),
            bounds,
            detail: StationDetail::titled(id),
        }
    }

    #[test]
    fn test_overlap() {
        let player = Aabb::new(0.0, 0.0, 10.0, 10.0);
        assert!(player.overlaps(&Aabb::new(5.0, 5.0, 10.0, 10.0)));
        assert!(!player.overlaps(&Aabb::new(20.0, 20.0, 10.0, 10.0)));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&Aabb::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Aabb::new(0.0, 10.0, 10.0, 10.0)));
        // Overlapping on one axis only
        assert!(!a.overlaps(&Aabb::new(5.0, 30.0, 10.0, 10.0)));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(9.0, -5.0, 3.0, 6.0);
        assert_eq!(a.overlaps(&b), b.overlaps(&a));
        assert!(a.overlaps(&b));
    }

    #[test]
    fn test_centered_box() {
        let b = Aabb::centered(100.0, 50.0, 52.0, 44.0);
        assert_eq!(b, Aabb::new(74.0, 28.0, 52.0, 44.0));
    }

    #[test]
    fn test_first_match_in_list_order() {
        let stations = vec![
            station("far", Aabb::new(500.0, 500.0, 50.0, 50.0)),
            station("first", Aabb::new(0.0, 0.0, 50.0, 50.0)),
            station("second", Aabb::new(20.0, 20.0, 50.0, 50.0)),
        ];
        let player = Aabb::centered(30.0, 30.0, 10.0, 10.0);
        let hit = find_active_station(&player, &stations).map(|s| s.id.as_str());
        assert_eq!(hit, Some("first"));
    }

    #[test]
    fn test_no_match() {
        let stations = vec![station("a", Aabb::new(100.0, 100.0, 10.0, 10.0))];
        let player = Aabb::centered(0.0, 0.0, 10.0, 10.0);
        assert!(find_active_station(&player, &stations).is_none());
        assert!(find_active_station(&player, &[]).is_none());
    }
}
