//! Loaded character model and its animations.
//!
//! Non-send resource because raylib models wrap GPU handles tied to the main
//! thread. When loading fails the store stays empty and the render system
//! falls back to the placeholder rig.

use raylib::prelude::*;

pub struct ModelStore {
    /// Character model, if one loaded from disk.
    pub character: Option<Model>,
    /// Animations bundled with the model, walk clip first if present.
    pub animations: Vec<ModelAnimation>,
}

impl ModelStore {
    pub fn empty() -> Self {
        Self {
            character: None,
            animations: Vec::new(),
        }
    }
}
