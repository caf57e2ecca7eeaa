use std::f32::consts::{PI, TAU};

use super::{GeometryBuffer, GeometryError};

/// Builds a UV sphere centered at the origin.
///
/// `segments` counts both rings and sectors, so the lattice has
/// `(segments + 1) * (segments + 1)` vertices (the seam column is duplicated
/// to keep uvs continuous) and `2 * segments * segments` triangles. Normals
/// are analytic, winding is counter-clockwise seen from outside.
pub fn build_sphere(radius: f32, segments: u32) -> Result<GeometryBuffer, GeometryError> {
    if segments < 3 {
        return Err(GeometryError::TooFewSegments { segments });
    }
    if radius <= 0.0 {
        return Err(GeometryError::NonPositiveRadius { radius });
    }

    let rows = segments as usize + 1;
    let mut positions = Vec::with_capacity(rows * rows * 3);
    let mut normals = Vec::with_capacity(rows * rows * 3);
    let mut uvs = Vec::with_capacity(rows * rows * 2);

    for ring in 0..=segments {
        let phi = PI * ring as f32 / segments as f32;
        let y = phi.cos();
        let ring_radius = phi.sin();

        for seg in 0..=segments {
            let theta = TAU * seg as f32 / segments as f32;
            let x = ring_radius * theta.cos();
            let z = ring_radius * theta.sin();

            positions.extend_from_slice(&[x * radius, y * radius, z * radius]);
            normals.extend_from_slice(&[x, y, z]);
            uvs.extend_from_slice(&[
                seg as f32 / segments as f32,
                ring as f32 / segments as f32,
            ]);
        }
    }

    let mut indices = Vec::with_capacity(segments as usize * segments as usize * 6);
    for ring in 0..segments {
        for seg in 0..segments {
            let current = ring * (segments + 1) + seg;
            let next = current + segments + 1;

            indices.extend_from_slice(&[current, current + 1, next]);
            indices.extend_from_slice(&[current + 1, next + 1, next]);
        }
    }

    let buffer = GeometryBuffer {
        positions,
        indices,
        normals,
        uvs,
    };
    debug_assert!(buffer.validate().is_ok());
    Ok(buffer)
}

/// Builds an axis-aligned cuboid centered at the origin.
///
/// Four vertices per face so each face keeps its flat normal: 24 vertices,
/// 12 triangles.
pub fn build_cuboid(width: f32, height: f32, depth: f32) -> Result<GeometryBuffer, GeometryError> {
    if width <= 0.0 || height <= 0.0 || depth <= 0.0 {
        return Err(GeometryError::NonPositiveExtent {
            width,
            height,
            depth,
        });
    }

    let hw = width * 0.5;
    let hh = height * 0.5;
    let hd = depth * 0.5;

    // Corner order is counter-clockwise seen from outside each face.
    let faces: [([[f32; 3]; 4], [f32; 3]); 6] = [
        (
            [[-hw, -hh, hd], [hw, -hh, hd], [hw, hh, hd], [-hw, hh, hd]],
            [0.0, 0.0, 1.0],
        ),
        (
            [[hw, -hh, -hd], [-hw, -hh, -hd], [-hw, hh, -hd], [hw, hh, -hd]],
            [0.0, 0.0, -1.0],
        ),
        (
            [[-hw, hh, hd], [hw, hh, hd], [hw, hh, -hd], [-hw, hh, -hd]],
            [0.0, 1.0, 0.0],
        ),
        (
            [[-hw, -hh, -hd], [hw, -hh, -hd], [hw, -hh, hd], [-hw, -hh, hd]],
            [0.0, -1.0, 0.0],
        ),
        (
            [[hw, -hh, hd], [hw, -hh, -hd], [hw, hh, -hd], [hw, hh, hd]],
            [1.0, 0.0, 0.0],
        ),
        (
            [[-hw, -hh, -hd], [-hw, -hh, hd], [-hw, hh, hd], [-hw, hh, -hd]],
            [-1.0, 0.0, 0.0],
        ),
    ];
    const FACE_UVS: [[f32; 2]; 4] = [[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]];

    let mut positions = Vec::with_capacity(24 * 3);
    let mut normals = Vec::with_capacity(24 * 3);
    let mut uvs = Vec::with_capacity(24 * 2);
    let mut indices = Vec::with_capacity(36);

    for (corners, normal) in &faces {
        let base = (positions.len() / 3) as u32;
        for (corner, uv) in corners.iter().zip(FACE_UVS.iter()) {
            positions.extend_from_slice(corner);
            normals.extend_from_slice(normal);
            uvs.extend_from_slice(uv);
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    let buffer = GeometryBuffer {
        positions,
        indices,
        normals,
        uvs,
    };
    debug_assert!(buffer.validate().is_ok());
    Ok(buffer)
}

/// Builds a unit ground plane in the xz-plane, centered at the origin and
/// spanning [-0.5, 0.5] on both axes.
///
/// The lattice has `(sx + 1) * (sz + 1)` vertices with +y normals and uvs
/// spanning the unit square. Heightmap displacement happens downstream in
/// the shader; this only supplies the lattice it displaces.
pub fn build_ground_grid(
    subdivisions_x: u32,
    subdivisions_z: u32,
) -> Result<GeometryBuffer, GeometryError> {
    if subdivisions_x == 0 || subdivisions_z == 0 {
        return Err(GeometryError::ZeroSubdivisions {
            x: subdivisions_x,
            z: subdivisions_z,
        });
    }

    let columns = subdivisions_x as usize + 1;
    let rows = subdivisions_z as usize + 1;
    let mut positions = Vec::with_capacity(columns * rows * 3);
    let mut normals = Vec::with_capacity(columns * rows * 3);
    let mut uvs = Vec::with_capacity(columns * rows * 2);

    for iz in 0..rows {
        let v = iz as f32 / subdivisions_z as f32;
        for ix in 0..columns {
            let u = ix as f32 / subdivisions_x as f32;
            positions.extend_from_slice(&[u - 0.5, 0.0, v - 0.5]);
            normals.extend_from_slice(&[0.0, 1.0, 0.0]);
            uvs.extend_from_slice(&[u, v]);
        }
    }

    let mut indices =
        Vec::with_capacity(subdivisions_x as usize * subdivisions_z as usize * 6);
    for iz in 0..subdivisions_z {
        for ix in 0..subdivisions_x {
            let current = iz * (subdivisions_x + 1) + ix;
            let next_row = current + subdivisions_x + 1;

            indices.extend_from_slice(&[current, next_row, current + 1]);
            indices.extend_from_slice(&[current + 1, next_row, next_row + 1]);
        }
    }

    let buffer = GeometryBuffer {
        positions,
        indices,
        normals,
        uvs,
    };
    debug_assert!(buffer.validate().is_ok());
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sphere_lattice_counts() {
        let sphere = build_sphere(1.0, 8).unwrap();
        assert_eq!(sphere.vertex_count(), 81);
        assert_eq!(sphere.triangle_count(), 128);
        assert_eq!(sphere.uvs.len() / 2, 81);
    }

    #[test]
    fn sphere_normals_match_positions() {
        let radius = 2.5;
        let sphere = build_sphere(radius, 12).unwrap();
        for v in 0..sphere.vertex_count() {
            let expected = sphere.position(v) / radius;
            let normal = sphere.normal(v);
            assert!(
                (normal - expected).length() < 1e-4,
                "vertex {} normal {:?} should match {:?}",
                v,
                normal,
                expected
            );
        }
    }

    #[test]
    fn sphere_rejects_bad_parameters() {
        assert_eq!(
            build_sphere(1.0, 2).unwrap_err(),
            GeometryError::TooFewSegments { segments: 2 }
        );
        assert_eq!(
            build_sphere(-1.0, 8).unwrap_err(),
            GeometryError::NonPositiveRadius { radius: -1.0 }
        );
    }

    #[test]
    fn cuboid_has_one_flat_normal_per_face() {
        let cuboid = build_cuboid(2.0, 1.0, 1.0).unwrap();
        assert_eq!(cuboid.vertex_count(), 24);
        assert_eq!(cuboid.triangle_count(), 12);

        for face in 0..6 {
            let first = cuboid.normal(face * 4);
            for corner in 1..4 {
                assert_eq!(cuboid.normal(face * 4 + corner), first);
            }
            assert!((first.length() - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn cuboid_extents_follow_parameters() {
        let cuboid = build_cuboid(2.0, 4.0, 6.0).unwrap();
        let mut max = glam::Vec3::NEG_INFINITY;
        let mut min = glam::Vec3::INFINITY;
        for v in 0..cuboid.vertex_count() {
            max = max.max(cuboid.position(v));
            min = min.min(cuboid.position(v));
        }
        assert_eq!(min.to_array(), [-1.0, -2.0, -3.0]);
        assert_eq!(max.to_array(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn cuboid_rejects_non_positive_extent() {
        assert_eq!(
            build_cuboid(0.0, 1.0, 1.0).unwrap_err(),
            GeometryError::NonPositiveExtent {
                width: 0.0,
                height: 1.0,
                depth: 1.0
            }
        );
    }

    #[test]
    fn grid_counts_and_span() {
        let grid = build_ground_grid(50, 50).unwrap();
        assert_eq!(grid.vertex_count(), 51 * 51);
        assert_eq!(grid.triangle_count(), 2 * 50 * 50);

        let first = grid.position(0);
        let last = grid.position(grid.vertex_count() - 1);
        assert_eq!(first.to_array(), [-0.5, 0.0, -0.5]);
        assert_eq!(last.to_array(), [0.5, 0.0, 0.5]);
    }

    #[test]
    fn grid_normals_point_up() {
        let grid = build_ground_grid(4, 3).unwrap();
        for v in 0..grid.vertex_count() {
            assert_eq!(grid.normal(v).to_array(), [0.0, 1.0, 0.0]);
        }
    }

    #[test]
    fn grid_rejects_zero_subdivisions() {
        assert_eq!(
            build_ground_grid(0, 10).unwrap_err(),
            GeometryError::ZeroSubdivisions { x: 0, z: 10 }
        );
    }
}
