//! Interactive station registry.
//!
//! Stations are the content hotspots scattered over the island. Each one has
//! a fixed position, an activation radius and a floating label that fades in
//! while its station is active. At most one station is active at a time; the
//! registry owns that piece of state so the proximity system and the render
//! overlay agree on it.
//!
//! Descriptors are plain serde structs so the set can be loaded from a JSON
//! file at startup, with [`StationRegistry::island_default`] as the built-in
//! fallback layout.

use bevy_ecs::prelude::Resource;
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Seconds for a label to fade from fully hidden to fully shown.
const LABEL_FADE_IN: f32 = 0.4;
/// Seconds for a label to fade from fully shown to fully hidden.
const LABEL_FADE_OUT: f32 = 0.3;

const DEFAULT_ACTIVATION_RADIUS: f32 = 2.5;

fn default_activation_radius() -> f32 {
    DEFAULT_ACTIVATION_RADIUS
}

/// What a station is about; drives panel content and marker colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StationKind {
    Info,
    Work,
    Skills,
    Projects,
    About,
}

impl StationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StationKind::Info => "info",
            StationKind::Work => "work",
            StationKind::Skills => "skills",
            StationKind::Projects => "projects",
            StationKind::About => "about",
        }
    }
}

/// Static description of one station.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StationDescriptor {
    pub kind: StationKind,
    pub title: String,
    /// Short glyph drawn on the floating label.
    pub icon: String,
    /// One-line teaser shown under the title.
    pub blurb: String,
    pub x: f32,
    pub z: f32,
    #[serde(default = "default_activation_radius")]
    pub activation_radius: f32,
}

/// Per-station label opacity easing toward a target.
#[derive(Clone, Copy, Debug, Default)]
struct LabelFade {
    opacity: f32,
    target: f32,
}

/// All stations plus the single-active-station state.
///
/// Station order is insertion order and is load-bearing: when two activation
/// circles overlap, the later station in the list wins.
#[derive(Resource, Clone, Debug)]
pub struct StationRegistry {
    stations: Vec<StationDescriptor>,
    labels: Vec<LabelFade>,
    active: Option<usize>,
}

impl StationRegistry {
    pub fn new(stations: Vec<StationDescriptor>) -> Self {
        let labels = vec![LabelFade::default(); stations.len()];
        Self {
            stations,
            labels,
            active: None,
        }
    }

    /// The built-in island layout: an info sign near the camp and four
    /// content stations on a ring of radius 10.
    pub fn island_default() -> Self {
        let ring = |kind, title: &str, icon: &str, blurb: &str, angle: f32| StationDescriptor {
            kind,
            title: title.to_string(),
            icon: icon.to_string(),
            blurb: blurb.to_string(),
            x: f32::sin(angle) * 10.0,
            z: f32::cos(angle) * 10.0,
            activation_radius: DEFAULT_ACTIVATION_RADIUS,
        };
        Self::new(vec![
            StationDescriptor {
                kind: StationKind::Info,
                title: "Welcome".to_string(),
                icon: "i".to_string(),
                blurb: "How to get around".to_string(),
                x: 0.0,
                z: -0.25,
                activation_radius: DEFAULT_ACTIVATION_RADIUS,
            },
            ring(
                StationKind::Work,
                "Work",
                "W",
                "Where I have worked",
                0.4,
            ),
            ring(StationKind::Skills, "Skills", "S", "What I work with", 1.9),
            ring(
                StationKind::Projects,
                "Projects",
                "P",
                "Things I have built",
                3.6,
            ),
            ring(StationKind::About, "About", "A", "Who I am", 5.2),
        ])
    }

    /// Load station descriptors from a JSON array file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read stations file {:?}: {}", path, e))?;
        let stations: Vec<StationDescriptor> = serde_json::from_str(&data)
            .map_err(|e| format!("Failed to parse stations file {:?}: {}", path, e))?;
        info!("Loaded {} stations from {:?}", stations.len(), path);
        Ok(Self::new(stations))
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&StationDescriptor> {
        self.stations.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StationDescriptor> {
        self.stations.iter()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active(&self) -> Option<&StationDescriptor> {
        self.active.and_then(|i| self.stations.get(i))
    }

    /// The station whose activation circle contains `(x, z)`, if any.
    ///
    /// Strictly inside: a position exactly on the circle does not qualify.
    /// When circles overlap, the last qualifying station in list order wins.
    pub fn qualifying(&self, x: f32, z: f32) -> Option<usize> {
        let mut hit = None;
        for (i, s) in self.stations.iter().enumerate() {
            let dx = x - s.x;
            let dz = z - s.z;
            if dx * dx + dz * dz < s.activation_radius * s.activation_radius {
                hit = Some(i);
            }
        }
        hit
    }

    /// The station closest to `(x, z)` regardless of activation radius.
    ///
    /// Pure distance query for the debug overlay; activation goes through
    /// [`qualifying`](Self::qualifying) instead.
    pub fn nearest_station(&self, x: f32, z: f32) -> Option<usize> {
        let mut best: Option<(usize, f32)> = None;
        for (i, s) in self.stations.iter().enumerate() {
            let dx = x - s.x;
            let dz = z - s.z;
            let d2 = dx * dx + dz * dz;
            if best.is_none_or(|(_, bd)| d2 < bd) {
                best = Some((i, d2));
            }
        }
        best.map(|(i, _)| i)
    }

    /// Change the active station, retargeting the label fades.
    pub fn set_active(&mut self, index: Option<usize>) {
        if let Some(prev) = self.active
            && let Some(label) = self.labels.get_mut(prev)
        {
            label.target = 0.0;
        }
        if let Some(next) = index
            && let Some(label) = self.labels.get_mut(next)
        {
            label.target = 1.0;
        }
        self.active = index;
    }

    /// Current label opacity for a station, in `[0, 1]`.
    pub fn label_opacity(&self, index: usize) -> f32 {
        self.labels.get(index).map_or(0.0, |l| l.opacity)
    }

    /// Step every label linearly toward its target opacity.
    pub fn advance_labels(&mut self, delta: f32) {
        for label in &mut self.labels {
            if label.opacity < label.target {
                label.opacity = (label.opacity + delta / LABEL_FADE_IN).min(label.target);
            } else if label.opacity > label.target {
                label.opacity = (label.opacity - delta / LABEL_FADE_OUT).max(label.target);
            }
        }
    }
}
