use std::f32::consts::{FRAC_PI_2, PI, TAU};

use super::{accumulate_vertex_normals, GeometryBuffer, GeometryError};

/// Parameters for the double-pyramid star builder.
///
/// The rim alternates `points` outer and `points` inner vertices in the
/// z = 0 plane around `(0, center_y)`, and the two apexes sit at
/// `(0, center_y, +depth)` and `(0, center_y, -depth)`. Defaults match the
/// five-pointed reference star.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarParams {
    pub points: u32,
    pub outer_radius: f32,
    pub inner_radius: f32,
    pub center_y: f32,
    pub depth: f32,
}

impl Default for StarParams {
    fn default() -> Self {
        Self {
            points: 5,
            outer_radius: 5.0,
            inner_radius: 3.0,
            center_y: 5.0,
            depth: 1.0,
        }
    }
}

/// Builds a closed star bipyramid with smooth per-vertex normals.
///
/// For `P` points the mesh has `2P + 2` vertices (the shared rim plus one
/// apex per cap) and `4P` triangles: each consecutive rim pair fans to the
/// front apex, and again to the back apex with reversed winding so both caps
/// face outward.
pub fn build_star(params: &StarParams) -> Result<GeometryBuffer, GeometryError> {
    if params.points < 3 {
        return Err(GeometryError::TooFewPoints {
            points: params.points,
        });
    }
    if params.outer_radius <= 0.0 {
        return Err(GeometryError::NonPositiveRadius {
            radius: params.outer_radius,
        });
    }
    if params.inner_radius <= 0.0 {
        return Err(GeometryError::NonPositiveRadius {
            radius: params.inner_radius,
        });
    }
    if params.inner_radius >= params.outer_radius {
        return Err(GeometryError::InvertedRadii {
            outer: params.outer_radius,
            inner: params.inner_radius,
        });
    }
    if params.depth <= 0.0 {
        return Err(GeometryError::NonPositiveDepth {
            depth: params.depth,
        });
    }

    let points = params.points as usize;
    let rim_count = 2 * points;
    let mut positions = Vec::with_capacity((rim_count + 2) * 3);

    // Rim vertices in angular order, starting straight up from the center
    // and alternating outer/inner. The inner vertex sits halfway to the
    // next point.
    for i in 0..points {
        let outer_angle = FRAC_PI_2 + TAU * i as f32 / points as f32;
        let inner_angle = outer_angle + PI / points as f32;

        positions.extend_from_slice(&[
            params.outer_radius * outer_angle.cos(),
            params.outer_radius * outer_angle.sin() + params.center_y,
            0.0,
        ]);
        positions.extend_from_slice(&[
            params.inner_radius * inner_angle.cos(),
            params.inner_radius * inner_angle.sin() + params.center_y,
            0.0,
        ]);
    }

    positions.extend_from_slice(&[0.0, params.center_y, params.depth]);
    positions.extend_from_slice(&[0.0, params.center_y, -params.depth]);

    let front_apex = rim_count as u32;
    let back_apex = front_apex + 1;

    let mut indices = Vec::with_capacity(rim_count * 6);
    for k in 0..rim_count as u32 {
        let next = (k + 1) % rim_count as u32;
        // Rim runs counter-clockwise seen from +z, so the front fan keeps
        // that order and the back fan flips it.
        indices.extend_from_slice(&[k, next, front_apex]);
        indices.extend_from_slice(&[next, k, back_apex]);
    }

    let normals = accumulate_vertex_normals(&positions, &indices);
    let buffer = GeometryBuffer {
        positions,
        indices,
        normals,
        uvs: Vec::new(),
    };
    debug_assert!(buffer.validate().is_ok());
    Ok(buffer)
}
