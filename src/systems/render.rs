//! Render system.
//!
//! Draws the whole frame: sea, island disc, decorative props, station
//! markers, the avatar (loaded model or placeholder rig) and the 2D overlay
//! layer (station labels, controls hint, content panel, virtual joystick,
//! debug diagnostics). Runs last in the schedule so it sees the frame's
//! final simulation state.

use bevy_ecs::prelude::*;
use raylib::ffi;
use raylib::prelude::*;

use crate::components::character::Character;
use crate::components::decor::{Decor, DecorKind};
use crate::components::limbswing::LimbSwing;
use crate::components::worldposition::WorldPosition;
use crate::resources::camerafollow::CameraFollow;
use crate::resources::debugmode::DebugMode;
use crate::resources::gameconfig::GameConfig;
use crate::resources::joystick::VirtualJoystick;
use crate::resources::modelstore::ModelStore;
use crate::resources::stations::{StationKind, StationRegistry};
use crate::resources::walkclip::WalkClip;
use crate::resources::windowsize::WindowSize;
use crate::resources::worldsignals::WorldSignals;

/// Visual island radius; slightly wider than the walkable circle so the
/// avatar never stands on the rim.
const ISLAND_VISUAL_RADIUS: f32 = 15.0;
const CAMERA_FOVY: f32 = 35.0;

const SEA: Color = Color::new(14, 165, 233, 255);
const SAND: Color = Color::new(139, 115, 85, 255);
const GRASS: Color = Color::new(124, 179, 66, 255);

fn kind_color(kind: StationKind) -> Color {
    match kind {
        StationKind::Work => Color::new(59, 130, 246, 255),
        StationKind::Skills => Color::new(139, 92, 246, 255),
        StationKind::Projects => Color::new(16, 185, 129, 255),
        StationKind::About => Color::new(245, 158, 11, 255),
        StationKind::Info => Color::new(107, 114, 128, 255),
    }
}

pub fn render_system(
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    mut models: NonSendMut<ModelStore>,
    camera_state: Res<CameraFollow>,
    stations: Res<StationRegistry>,
    signals: Res<WorldSignals>,
    window: Res<WindowSize>,
    joystick: Res<VirtualJoystick>,
    clip: Res<WalkClip>,
    config: Res<GameConfig>,
    debug_mode: Option<Res<DebugMode>>,
    characters: Query<(&WorldPosition, &Character, &LimbSwing)>,
    decor: Query<(&WorldPosition, &Decor)>,
) {
    // Advance the skeletal pose before the draw pass borrows the handle.
    if clip.available && clip.playing {
        let store = &mut *models;
        if let (Some(model), Some(anim)) = (store.character.as_mut(), store.animations.first()) {
            rl.update_model_animation(&th, model, anim, clip.frame);
        }
    }

    let camera = Camera3D::perspective(
        Vector3::new(
            camera_state.position.x,
            camera_state.position.y,
            camera_state.position.z,
        ),
        Vector3::new(
            camera_state.look_at.x,
            camera_state.look_at.y,
            camera_state.look_at.z,
        ),
        Vector3::up(),
        CAMERA_FOVY,
    );

    let mut d = rl.begin_drawing(&th);
    d.clear_background(SEA);

    {
        let mut d3 = d.begin_mode3D(camera);

        // Island: sand base with a grass top.
        d3.draw_cylinder(
            Vector3::new(0.0, -1.2, 0.0),
            ISLAND_VISUAL_RADIUS + 0.5,
            ISLAND_VISUAL_RADIUS + 1.0,
            1.0,
            32,
            SAND,
        );
        d3.draw_cylinder(
            Vector3::new(0.0, -0.2, 0.0),
            ISLAND_VISUAL_RADIUS,
            ISLAND_VISUAL_RADIUS + 0.5,
            0.2,
            32,
            GRASS,
        );

        for (position, prop) in decor.iter() {
            draw_decor(&mut d3, position, prop);
        }

        for station in stations.iter() {
            let base = Vector3::new(station.x, 0.0, station.z);
            d3.draw_cylinder(base, 0.3, 0.4, 0.8, 12, Color::new(80, 80, 90, 255));
            d3.draw_sphere(
                Vector3::new(station.x, 1.1, station.z),
                0.35,
                kind_color(station.kind),
            );
        }

        if let Ok((position, character, swing)) = characters.single() {
            match models.character.as_ref() {
                Some(model) => {
                    d3.draw_model_ex(
                        model,
                        Vector3::new(position.pos.x, position.pos.y, position.pos.z),
                        Vector3::up(),
                        character.heading.to_degrees(),
                        Vector3::one(),
                        Color::WHITE,
                    );
                }
                None => draw_placeholder_rig(&mut d3, position, character, swing),
            }
        }
    }

    // Floating station labels, faded per the registry.
    for (i, station) in stations.iter().enumerate() {
        let opacity = stations.label_opacity(i);
        if opacity <= 0.0 {
            continue;
        }
        let anchor = d.get_world_to_screen(Vector3::new(station.x, 1.8, station.z), camera);
        let alpha = (opacity * 255.0) as u8;
        let title = format!("{} {}", station.icon, station.title);
        let width = d.measure_text(&title, 20);
        d.draw_text(
            &title,
            anchor.x as i32 - width / 2,
            anchor.y as i32,
            20,
            Color::new(255, 255, 255, alpha),
        );
        let blurb_width = d.measure_text(&station.blurb, 10);
        d.draw_text(
            &station.blurb,
            anchor.x as i32 - blurb_width / 2,
            anchor.y as i32 + 22,
            10,
            Color::new(230, 230, 230, alpha),
        );
    }

    if signals.has_flag("controls_hint") {
        let hint = "WASD / arrows to walk, Space to interact, Esc to close";
        let width = d.measure_text(hint, 20);
        d.draw_text(
            hint,
            (window.w - width) / 2,
            window.h - 60,
            20,
            Color::RAYWHITE,
        );
    }

    if let Some(panel) = signals.get_string("panel") {
        draw_panel(&mut d, &stations, panel, &window);
    }

    if joystick.active {
        d.draw_circle_lines(
            joystick.base_x as i32,
            joystick.base_y as i32,
            joystick.max_distance,
            Color::new(255, 255, 255, 120),
        );
        d.draw_circle(
            joystick.stick_x as i32,
            joystick.stick_y as i32,
            18.0,
            Color::new(255, 255, 255, 180),
        );
    }

    if debug_mode.is_some() {
        draw_debug_overlay(&mut d, &stations, &characters, &config);
    }
}

fn draw_decor(d3: &mut impl RaylibDraw3D, position: &WorldPosition, prop: &Decor) {
    unsafe {
        ffi::rlPushMatrix();
        ffi::rlTranslatef(position.pos.x, position.pos.y, position.pos.z);
        ffi::rlRotatef(prop.spin.to_degrees(), 0.0, 1.0, 0.0);
    }

    let origin = Vector3::zero();
    let s = prop.scale;
    match prop.kind {
        DecorKind::Tree => {
            d3.draw_cylinder(origin, 0.12 * s, 0.18 * s, 1.2 * s, 8, Color::new(101, 67, 33, 255));
            d3.draw_cylinder(
                Vector3::new(0.0, 1.2 * s, 0.0),
                0.0,
                0.9 * s,
                1.6 * s,
                8,
                Color::new(56, 142, 60, 255),
            );
        }
        DecorKind::Rock => {
            d3.draw_sphere(
                Vector3::new(0.0, 0.1 * s, 0.0),
                0.25 * s,
                Color::new(120, 120, 120, 255),
            );
        }
        DecorKind::GrassBlade => {
            d3.draw_cube(
                Vector3::new(0.0, 0.15, 0.0),
                0.04,
                0.3 * s,
                0.04,
                Color::new(104, 159, 56, 255),
            );
        }
        DecorKind::Tent => {
            d3.draw_cube(
                Vector3::new(0.0, 0.5, 0.0),
                1.2,
                1.0,
                1.2,
                Color::new(198, 40, 40, 255),
            );
        }
        DecorKind::Bonfire => {
            d3.draw_cylinder(origin, 0.5, 0.6, 0.2, 10, Color::new(62, 39, 35, 255));
            d3.draw_sphere(
                Vector3::new(0.0, 0.35, 0.0),
                0.25,
                Color::new(255, 111, 0, 255),
            );
        }
    }

    unsafe {
        ffi::rlPopMatrix();
    }
}

/// Box-and-limbs stand-in drawn when no character model loaded.
fn draw_placeholder_rig(
    d3: &mut impl RaylibDraw3D,
    position: &WorldPosition,
    character: &Character,
    swing: &LimbSwing,
) {
    unsafe {
        ffi::rlPushMatrix();
        ffi::rlTranslatef(position.pos.x, position.pos.y, position.pos.z);
        ffi::rlRotatef(character.heading.to_degrees(), 0.0, 1.0, 0.0);
    }

    // Torso and head.
    d3.draw_cube(Vector3::new(0.0, 0.75, 0.0), 0.4, 0.5, 0.25, Color::new(33, 150, 243, 255));
    d3.draw_sphere(Vector3::new(0.0, 1.15, 0.0), 0.17, Color::new(255, 224, 178, 255));

    // Limbs pivot at hip/shoulder height; opposite sides counter-swing.
    draw_limb(-0.12, 0.5, swing.leg, 0.5, Color::new(40, 53, 147, 255));
    draw_limb(0.12, 0.5, -swing.leg, 0.5, Color::new(40, 53, 147, 255));
    draw_limb(-0.28, 0.95, swing.arm, 0.45, Color::new(33, 150, 243, 255));
    draw_limb(0.28, 0.95, -swing.arm, 0.45, Color::new(33, 150, 243, 255));

    unsafe {
        ffi::rlPopMatrix();
    }
}

fn draw_limb(x: f32, pivot_y: f32, angle: f32, length: f32, color: Color) {
    unsafe {
        ffi::rlPushMatrix();
        ffi::rlTranslatef(x, pivot_y, 0.0);
        ffi::rlRotatef(angle.to_degrees(), 1.0, 0.0, 0.0);
        ffi::DrawCube(
            ffi::Vector3 {
                x: 0.0,
                y: -length * 0.5,
                z: 0.0,
            },
            0.12,
            length,
            0.12,
            color.into(),
        );
        ffi::rlPopMatrix();
    }
}

fn draw_panel(
    d: &mut RaylibDrawHandle,
    stations: &StationRegistry,
    panel: &str,
    window: &WindowSize,
) {
    let station = stations.iter().find(|s| s.kind.as_str() == panel);
    let (title, blurb) = match station {
        Some(s) => (s.title.as_str(), s.blurb.as_str()),
        None => (panel, ""),
    };

    let panel_w = (window.w as f32 * 0.6) as i32;
    let panel_h = (window.h as f32 * 0.6) as i32;
    let x = (window.w - panel_w) / 2;
    let y = (window.h - panel_h) / 2;
    d.draw_rectangle(x, y, panel_w, panel_h, Color::new(20, 24, 34, 230));
    d.draw_rectangle_lines(x, y, panel_w, panel_h, Color::new(255, 255, 255, 80));
    d.draw_text(title, x + 24, y + 20, 32, Color::RAYWHITE);
    d.draw_text(blurb, x + 24, y + 64, 20, Color::new(200, 205, 215, 255));
    d.draw_text(
        "Esc to close",
        x + 24,
        y + panel_h - 36,
        16,
        Color::new(150, 155, 165, 255),
    );
}

fn draw_debug_overlay(
    d: &mut RaylibDrawHandle,
    stations: &StationRegistry,
    characters: &Query<(&WorldPosition, &Character, &LimbSwing)>,
    config: &GameConfig,
) {
    let fps = d.get_fps();
    d.draw_text(&format!("FPS: {}", fps), 10, 10, 20, Color::LIME);

    if let Ok((position, character, _)) = characters.single() {
        d.draw_text(
            &format!(
                "pos: ({:.2}, {:.2}) r={:.1}",
                position.pos.x, position.pos.z, config.island_radius
            ),
            10,
            34,
            20,
            Color::LIME,
        );
        d.draw_text(
            &format!("heading: {:.2}", character.heading),
            10,
            58,
            20,
            Color::LIME,
        );
        let nearest = stations
            .nearest_station(position.pos.x, position.pos.z)
            .and_then(|i| stations.get(i));
        if let Some(station) = nearest {
            d.draw_text(
                &format!("nearest: {}", station.title),
                10,
                82,
                20,
                Color::LIME,
            );
        }
    }
}
