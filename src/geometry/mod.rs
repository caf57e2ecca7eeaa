mod primitives;
mod star;

pub use primitives::{build_cuboid, build_ground_grid, build_sphere};
pub use star::{build_star, StarParams};

use glam::Vec3;
use std::fmt;

/// Mesh data laid out for direct GPU upload: flat position/normal/uv streams
/// plus a u32 triangle index list. Positions and normals are xyz triples,
/// uvs are pairs. The uv stream may be empty for meshes with no
/// parameterization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometryBuffer {
    pub positions: Vec<f32>,
    pub indices: Vec<u32>,
    pub normals: Vec<f32>,
    pub uvs: Vec<f32>,
}

impl GeometryBuffer {
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Position of one vertex. Panics if the vertex is out of range.
    pub fn position(&self, vertex: usize) -> Vec3 {
        let base = vertex * 3;
        Vec3::new(
            self.positions[base],
            self.positions[base + 1],
            self.positions[base + 2],
        )
    }

    /// Normal of one vertex. Panics if the vertex is out of range.
    pub fn normal(&self, vertex: usize) -> Vec3 {
        let base = vertex * 3;
        Vec3::new(
            self.normals[base],
            self.normals[base + 1],
            self.normals[base + 2],
        )
    }

    /// Average of all vertex positions.
    pub fn centroid(&self) -> Vec3 {
        let count = self.vertex_count();
        if count == 0 {
            return Vec3::ZERO;
        }
        let mut sum = Vec3::ZERO;
        for v in 0..count {
            sum += self.position(v);
        }
        sum / count as f32
    }

    /// Checks the cross-buffer invariants: stream lengths aligned to their
    /// stride, one normal per vertex, one uv pair per vertex when uvs are
    /// present, and every index inside the vertex range.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.positions.len() % 3 != 0 {
            return Err(GeometryError::RaggedStream {
                stream: "positions",
                len: self.positions.len(),
                stride: 3,
            });
        }
        if self.normals.len() % 3 != 0 {
            return Err(GeometryError::RaggedStream {
                stream: "normals",
                len: self.normals.len(),
                stride: 3,
            });
        }
        if self.uvs.len() % 2 != 0 {
            return Err(GeometryError::RaggedStream {
                stream: "uvs",
                len: self.uvs.len(),
                stride: 2,
            });
        }
        if self.indices.len() % 3 != 0 {
            return Err(GeometryError::RaggedStream {
                stream: "indices",
                len: self.indices.len(),
                stride: 3,
            });
        }
        if !self.normals.is_empty() && self.normals.len() != self.positions.len() {
            return Err(GeometryError::NormalCountMismatch {
                normals: self.normals.len() / 3,
                vertices: self.vertex_count(),
            });
        }
        if !self.uvs.is_empty() && self.uvs.len() / 2 != self.vertex_count() {
            return Err(GeometryError::UvCountMismatch {
                uvs: self.uvs.len() / 2,
                vertices: self.vertex_count(),
            });
        }
        let vertex_count = self.vertex_count();
        for &index in &self.indices {
            if index as usize >= vertex_count {
                return Err(GeometryError::IndexOutOfRange {
                    index,
                    vertex_count,
                });
            }
        }
        Ok(())
    }
}

/// Accumulates smooth per-vertex normals for an indexed triangle list.
///
/// Each face contributes its unit normal to all three of its vertices; the
/// sums are renormalized at the end. Normalizing per face keeps the result
/// independent of mesh scale, and zero-area faces normalize to zero so they
/// cannot poison the average. Vertices referenced by no face keep a zero
/// normal.
pub fn accumulate_vertex_normals(positions: &[f32], indices: &[u32]) -> Vec<f32> {
    let mut sums = vec![Vec3::ZERO; positions.len() / 3];

    for face in indices.chunks_exact(3) {
        let [a, b, c] = [face[0] as usize, face[1] as usize, face[2] as usize];
        let pa = Vec3::new(positions[a * 3], positions[a * 3 + 1], positions[a * 3 + 2]);
        let pb = Vec3::new(positions[b * 3], positions[b * 3 + 1], positions[b * 3 + 2]);
        let pc = Vec3::new(positions[c * 3], positions[c * 3 + 1], positions[c * 3 + 2]);

        let face_normal = (pb - pa).cross(pc - pa).normalize_or_zero();
        sums[a] += face_normal;
        sums[b] += face_normal;
        sums[c] += face_normal;
    }

    let mut normals = Vec::with_capacity(positions.len());
    for sum in sums {
        let n = sum.normalize_or_zero();
        normals.extend_from_slice(&[n.x, n.y, n.z]);
    }
    normals
}

/// Invalid procedural-mesh parameters or a malformed mesh buffer. Fatal to
/// the scene build that requested the mesh; never degraded into a silently
/// broken buffer.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Star rim needs at least 3 points.
    TooFewPoints { points: u32 },
    /// Sphere lattice needs at least 3 segments.
    TooFewSegments { segments: u32 },
    /// Grid needs at least one subdivision on each axis.
    ZeroSubdivisions { x: u32, z: u32 },
    NonPositiveRadius { radius: f32 },
    NonPositiveDepth { depth: f32 },
    NonPositiveExtent { width: f32, height: f32, depth: f32 },
    /// Inner rim radius must stay strictly below the outer radius.
    InvertedRadii { outer: f32, inner: f32 },
    /// A triangle index points past the end of the vertex stream.
    IndexOutOfRange { index: u32, vertex_count: usize },
    NormalCountMismatch { normals: usize, vertices: usize },
    UvCountMismatch { uvs: usize, vertices: usize },
    /// A flat stream's length is not a multiple of its stride.
    RaggedStream {
        stream: &'static str,
        len: usize,
        stride: usize,
    },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::TooFewPoints { points } => {
                write!(f, "star needs at least 3 points, got {points}")
            }
            GeometryError::TooFewSegments { segments } => {
                write!(f, "sphere needs at least 3 segments, got {segments}")
            }
            GeometryError::ZeroSubdivisions { x, z } => {
                write!(f, "grid needs at least 1x1 subdivisions, got {x}x{z}")
            }
            GeometryError::NonPositiveRadius { radius } => {
                write!(f, "radius must be positive, got {radius}")
            }
            GeometryError::NonPositiveDepth { depth } => {
                write!(f, "apex depth must be positive, got {depth}")
            }
            GeometryError::NonPositiveExtent {
                width,
                height,
                depth,
            } => {
                write!(
                    f,
                    "extents must be positive, got {width}x{height}x{depth}"
                )
            }
            GeometryError::InvertedRadii { outer, inner } => {
                write!(
                    f,
                    "inner radius {inner} must be smaller than outer radius {outer}"
                )
            }
            GeometryError::IndexOutOfRange {
                index,
                vertex_count,
            } => {
                write!(
                    f,
                    "index {index} out of range for {vertex_count} vertices"
                )
            }
            GeometryError::NormalCountMismatch { normals, vertices } => {
                write!(f, "{normals} normals for {vertices} vertices")
            }
            GeometryError::UvCountMismatch { uvs, vertices } => {
                write!(f, "{uvs} uv pairs for {vertices} vertices")
            }
            GeometryError::RaggedStream { stream, len, stride } => {
                write!(
                    f,
                    "{stream} length {len} is not a multiple of {stride}"
                )
            }
        }
    }
}

impl std::error::Error for GeometryError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad_buffer() -> GeometryBuffer {
        // Two triangles in the xy-plane, facing +z
        GeometryBuffer {
            positions: vec![
                0.0, 0.0, 0.0, //
                1.0, 0.0, 0.0, //
                1.0, 1.0, 0.0, //
                0.0, 1.0, 0.0,
            ],
            indices: vec![0, 1, 2, 0, 2, 3],
            normals: vec![
                0.0, 0.0, 1.0, //
                0.0, 0.0, 1.0, //
                0.0, 0.0, 1.0, //
                0.0, 0.0, 1.0,
            ],
            uvs: vec![0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0],
        }
    }

    #[test]
    fn validate_accepts_well_formed_buffer() {
        assert!(quad_buffer().validate().is_ok());
    }

    #[test]
    fn validate_rejects_out_of_range_index() {
        let mut buffer = quad_buffer();
        buffer.indices[4] = 9;
        assert_eq!(
            buffer.validate(),
            Err(GeometryError::IndexOutOfRange {
                index: 9,
                vertex_count: 4
            })
        );
    }

    #[test]
    fn validate_rejects_normal_count_mismatch() {
        let mut buffer = quad_buffer();
        buffer.normals.truncate(9);
        assert_eq!(
            buffer.validate(),
            Err(GeometryError::NormalCountMismatch {
                normals: 3,
                vertices: 4
            })
        );
    }

    #[test]
    fn validate_rejects_ragged_positions() {
        let mut buffer = quad_buffer();
        buffer.positions.pop();
        assert!(matches!(
            buffer.validate(),
            Err(GeometryError::RaggedStream {
                stream: "positions",
                ..
            })
        ));
    }

    #[test]
    fn accumulated_normals_are_unit_length() {
        let buffer = quad_buffer();
        let normals = accumulate_vertex_normals(&buffer.positions, &buffer.indices);
        assert_eq!(normals.len(), buffer.positions.len());
        for n in normals.chunks_exact(3) {
            let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
            assert!((len - 1.0).abs() < 1e-5, "normal length should be 1, got {}", len);
        }
    }

    #[test]
    fn accumulation_skips_degenerate_faces() {
        // Second face is a zero-area sliver reusing one vertex three times
        let positions = vec![
            0.0, 0.0, 0.0, //
            1.0, 0.0, 0.0, //
            0.0, 1.0, 0.0,
        ];
        let indices = vec![0, 1, 2, 1, 1, 1];
        let normals = accumulate_vertex_normals(&positions, &indices);
        for n in normals.chunks_exact(3) {
            assert_eq!(n, &[0.0, 0.0, 1.0]);
        }
    }

    #[test]
    fn unreferenced_vertices_keep_zero_normals() {
        let positions = vec![
            0.0, 0.0, 0.0, //
            1.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, //
            5.0, 5.0, 5.0,
        ];
        let indices = vec![0, 1, 2];
        let normals = accumulate_vertex_normals(&positions, &indices);
        assert_eq!(&normals[9..12], &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn geometry_error_display() {
        let err = GeometryError::InvertedRadii {
            outer: 2.0,
            inner: 3.0,
        };
        assert_eq!(
            format!("{err}"),
            "inner radius 3 must be smaller than outer radius 2"
        );

        let err = GeometryError::IndexOutOfRange {
            index: 12,
            vertex_count: 10,
        };
        assert_eq!(format!("{err}"), "index 12 out of range for 10 vertices");
    }
}
