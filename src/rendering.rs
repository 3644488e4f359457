//! Rendering systems: horizon disc, photon trails, and the stats HUD.
//!
//! ## Layer model
//!
//! | Layer            | Technology | Notes                                    |
//! |------------------|------------|------------------------------------------|
//! | Horizon disc     | `Mesh2d`   | Retained; built once at startup          |
//! | Photon trails    | Gizmos     | Immediate-mode polylines, per frame      |
//! | Photon heads     | Gizmos     | Small circle per live ray                |
//! | Stats HUD        | Bevy UI    | Live / absorbed / step counters          |
//!
//! The trail fade is a rendering contract with the core: `Photon::path` is
//! ordered oldest-first, so the polyline brightness ramps from black at the
//! start of the history to white at the head.

use crate::config::SimConfig;
use crate::simulation::SimulationStats;
use crate::world::SimulationWorld;
use bevy::prelude::*;
use bevy_asset::RenderAssetUsages;
use bevy_mesh::{Indices, PrimitiveTopology};

// ── Component markers ─────────────────────────────────────────────────────────

/// Marker for the retained horizon disc entity.
#[derive(Component)]
pub struct HorizonDisc;

/// Marker for the stats text root node.
#[derive(Component)]
pub struct StatsTextDisplay;

// ── Startup: horizon disc ─────────────────────────────────────────────────────

/// Spawn the event horizon as a retained filled `Mesh2d` disc.
///
/// The disc radius is `schwarzschild_radius × vis_scale` px.  Built once at
/// startup — the hole is immutable, so there is no per-frame cost.
///
/// Must be ordered after world initialisation so the final radius is used.
pub fn setup_horizon_disc(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    config: Res<SimConfig>,
    world: Res<SimulationWorld>,
) {
    let radius = world.black_hole().display_radius(config.vis_scale);
    let mesh = meshes.add(filled_disc_mesh(radius, config.horizon_disc_segments));
    let mat = materials.add(ColorMaterial::from_color(Color::srgb(0.8, 0.1, 0.1)));
    commands.spawn((
        Mesh2d(mesh),
        MeshMaterial2d(mat),
        Transform::from_translation(world.black_hole().position().extend(-0.5)),
        HorizonDisc,
    ));
}

// ── Startup: stats HUD ────────────────────────────────────────────────────────

/// Spawn the permanent top-left stats HUD.
pub fn setup_stats_text(mut commands: Commands, config: Res<SimConfig>) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(10.0),
                top: Val::Px(10.0),
                ..default()
            },
            StatsTextDisplay,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Rays: 0 | Absorbed: 0 | Steps: 0"),
                TextFont {
                    font_size: config.stats_font_size,
                    ..default()
                },
                TextColor(Color::srgb(0.0, 1.0, 1.0)),
            ));
        });
}

// ── Update: stats text ────────────────────────────────────────────────────────

/// Refresh the stats text content each frame.
pub fn stats_display_system(
    stats: Res<SimulationStats>,
    parent_query: Query<&Children, With<StatsTextDisplay>>,
    mut text_query: Query<&mut Text>,
) {
    for children in parent_query.iter() {
        for child in children.iter() {
            if let Ok(mut text) = text_query.get_mut(child) {
                *text = Text::new(format!(
                    "Rays: {} | Absorbed: {} | Steps: {}",
                    stats.live_count, stats.absorbed_count, stats.total_steps
                ));
            }
        }
    }
}

// ── Update: photon trails ─────────────────────────────────────────────────────

/// Draw every photon's trail and head using immediate-mode gizmos.
///
/// Trail segments fade from black (oldest) to white (newest) proportionally
/// to their index in the path, so long histories read as a comet tail.  The
/// head dot is only drawn for live rays; an absorbed ray is just its frozen
/// trail.
pub fn trail_gizmo_system(
    mut gizmos: Gizmos,
    world: Res<SimulationWorld>,
    config: Res<SimConfig>,
) {
    for photon in world.photons() {
        let path = photon.path();
        if path.len() >= 2 {
            let denom = (path.len() - 1) as f32;
            for (i, pair) in path.windows(2).enumerate() {
                let t = (i + 1) as f32 / denom;
                gizmos.line_2d(pair[0], pair[1], Color::srgb(t, t, t));
            }
        }

        if !photon.is_absorbed() {
            gizmos.circle_2d(
                photon.position(),
                config.photon_head_radius,
                Color::srgb(1.0, 0.85, 0.3),
            );
        }
    }
}

// ── Geometry helpers ──────────────────────────────────────────────────────────

/// Fan-triangulate a filled disc into a renderable [`Mesh`].
///
/// Centre vertex plus `segments` rim vertices; triangles `(0, i, i+1)` with
/// the last one wrapping back to the first rim vertex.
pub fn filled_disc_mesh(radius: f32, segments: u32) -> Mesh {
    let segments = segments.max(3);
    let mut positions: Vec<[f32; 3]> = Vec::with_capacity(segments as usize + 1);
    positions.push([0.0, 0.0, 0.0]);
    for i in 0..segments {
        let angle = 2.0 * std::f32::consts::PI * i as f32 / segments as f32;
        positions.push([radius * angle.cos(), radius * angle.sin(), 0.0]);
    }

    let n = positions.len();
    let normals: Vec<[f32; 3]> = vec![[0.0, 0.0, 1.0]; n];
    // Map the disc's local extent to the 0–1 UV range.
    let uvs: Vec<[f32; 2]> = positions
        .iter()
        .map(|p| [(p[0] / (2.0 * radius)) + 0.5, (p[1] / (2.0 * radius)) + 0.5])
        .collect();

    let mut indices: Vec<u32> = Vec::with_capacity(segments as usize * 3);
    for i in 1..=segments {
        let next = if i == segments { 1 } else { i + 1 };
        indices.extend_from_slice(&[0, i, next]);
    }

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD,
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh.insert_indices(Indices::U32(indices));
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disc_mesh_has_centre_plus_rim_vertices() {
        let mesh = filled_disc_mesh(76.0, 128);
        let positions = mesh
            .attribute(Mesh::ATTRIBUTE_POSITION)
            .expect("positions present");
        assert_eq!(positions.len(), 129);
    }

    #[test]
    fn disc_mesh_clamps_degenerate_segment_counts() {
        // Fewer than 3 rim vertices cannot triangulate; the helper clamps.
        let mesh = filled_disc_mesh(10.0, 1);
        let positions = mesh
            .attribute(Mesh::ATTRIBUTE_POSITION)
            .expect("positions present");
        assert_eq!(positions.len(), 4);
    }
}
