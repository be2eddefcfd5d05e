//! Circular exclusion zones on the ground plane.
//!
//! Solid props (tent, bonfire, trees, rocks) each register one circle here
//! at world build. The character controller rejects a candidate move when
//! its destination would overlap any circle, so the registry is a flat list
//! scanned linearly once per frame at most.

use bevy_ecs::prelude::Resource;

/// One impassable circle, axis-aligned to the ground plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Obstacle {
    pub x: f32,
    pub z: f32,
    pub radius: f32,
}

impl Obstacle {
    pub fn new(x: f32, z: f32, radius: f32) -> Self {
        Self { x, z, radius }
    }
}

/// Registry of every obstacle on the island.
#[derive(Resource, Clone, Debug, Default)]
pub struct ObstacleRegistry {
    obstacles: Vec<Obstacle>,
}

impl ObstacleRegistry {
    pub fn push(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Whether a body of `clearance` radius centred at `(x, z)` overlaps
    /// any registered obstacle.
    pub fn collides(&self, x: f32, z: f32, clearance: f32) -> bool {
        self.obstacles.iter().any(|o| {
            let dx = x - o.x;
            let dz = z - o.z;
            let limit = o.radius + clearance;
            dx * dx + dz * dz < limit * limit
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_registry_never_collides() {
        let registry = ObstacleRegistry::default();
        assert!(!registry.collides(0.0, 0.0, 10.0));
    }

    #[test]
    fn collision_includes_clearance() {
        let mut registry = ObstacleRegistry::default();
        registry.push(Obstacle::new(2.0, 0.0, 0.5));

        // 1.2 away from the edge with 0.3 clearance: clear.
        assert!(!registry.collides(0.0, 0.0, 0.3));
        // Centre distance 1.0, combined radius 0.8: clear.
        assert!(!registry.collides(1.0, 0.0, 0.3));
        // Centre distance 0.7, combined radius 0.8: blocked.
        assert!(registry.collides(1.3, 0.0, 0.3));
        // Touching exactly does not count as overlap.
        assert!(!registry.collides(1.2, 0.0, 0.3));
    }

    #[test]
    fn checks_every_obstacle() {
        let mut registry = ObstacleRegistry::default();
        registry.push(Obstacle::new(-5.0, -5.0, 1.0));
        registry.push(Obstacle::new(5.0, 5.0, 1.0));
        assert_eq!(registry.len(), 2);
        assert!(registry.collides(5.2, 5.2, 0.3));
        assert!(registry.collides(-5.2, -5.2, 0.3));
        assert!(!registry.collides(0.0, 0.0, 0.3));
    }
}
