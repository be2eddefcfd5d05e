//! Decorative island geometry.
//!
//! Trees, rocks, grass blades and the camp props are spawned once at world
//! build and never move. They are presentation only; the solid ones also
//! register a circular exclusion zone in the
//! [`ObstacleRegistry`](crate::resources::obstacles::ObstacleRegistry), but
//! that registration is separate from these components.

use bevy_ecs::prelude::Component;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecorKind {
    Tree,
    Rock,
    GrassBlade,
    Tent,
    Bonfire,
}

/// A static decorative prop.
#[derive(Component, Clone, Copy, Debug)]
pub struct Decor {
    pub kind: DecorKind,
    /// Uniform scale multiplier.
    pub scale: f32,
    /// Fixed rotation around Y in radians.
    pub spin: f32,
}

impl Decor {
    pub fn new(kind: DecorKind) -> Self {
        Self {
            kind,
            scale: 1.0,
            spin: 0.0,
        }
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_spin(mut self, spin: f32) -> Self {
        self.spin = spin;
        self
    }
}
