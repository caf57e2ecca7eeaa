use glam::Vec3;
use shading_lab::geometry::{build_star, GeometryBuffer, GeometryError, StarParams};

fn star_with_points(points: u32) -> GeometryBuffer {
    build_star(&StarParams {
        points,
        ..StarParams::default()
    })
    .expect("valid star parameters should build")
}

fn face_vertices(mesh: &GeometryBuffer, triangle: usize) -> [Vec3; 3] {
    [
        mesh.position(mesh.indices[triangle * 3] as usize),
        mesh.position(mesh.indices[triangle * 3 + 1] as usize),
        mesh.position(mesh.indices[triangle * 3 + 2] as usize),
    ]
}

fn face_normal(mesh: &GeometryBuffer, triangle: usize) -> Vec3 {
    let [a, b, c] = face_vertices(mesh, triangle);
    (b - a).cross(c - a).normalize()
}

#[cfg(test)]
mod star_topology_tests {
    use super::*;

    #[test]
    fn test_counts_match_the_bipyramid_formula() {
        for points in [3u32, 4, 5, 7, 12, 64] {
            let star = star_with_points(points);
            let p = points as usize;

            assert_eq!(
                star.vertex_count(),
                2 * p + 2,
                "P={} should give 2P+2 vertices",
                points
            );
            assert_eq!(
                star.triangle_count(),
                4 * p,
                "P={} should give 4P triangles",
                points
            );
            assert_eq!(
                star.indices.len(),
                12 * p,
                "P={} should give 12P indices",
                points
            );
            assert!(star.validate().is_ok(), "P={} buffer should validate", points);
        }
    }

    #[test]
    fn test_rim_alternates_outer_and_inner_radii() {
        let params = StarParams {
            points: 5,
            outer_radius: 5.0,
            inner_radius: 3.0,
            center_y: 5.0,
            depth: 1.0,
        };
        let star = build_star(&params).unwrap();
        let center = Vec3::new(0.0, params.center_y, 0.0);

        for i in 0..params.points as usize {
            let outer = star.position(2 * i);
            let inner = star.position(2 * i + 1);

            assert!(
                (outer.distance(center) - params.outer_radius).abs() < 1e-5,
                "rim vertex {} should sit on the outer radius",
                2 * i
            );
            assert!(
                (inner.distance(center) - params.inner_radius).abs() < 1e-5,
                "rim vertex {} should sit on the inner radius",
                2 * i + 1
            );
            assert_eq!(outer.z, 0.0, "rim vertices stay in the z=0 plane");
            assert_eq!(inner.z, 0.0, "rim vertices stay in the z=0 plane");
        }
    }

    #[test]
    fn test_apexes_share_the_rim_center_axis() {
        let params = StarParams {
            depth: 2.0,
            ..StarParams::default()
        };
        let star = build_star(&params).unwrap();
        let rim_count = 2 * params.points as usize;

        let front = star.position(rim_count);
        let back = star.position(rim_count + 1);
        assert_eq!(front.to_array(), [0.0, params.center_y, 2.0]);
        assert_eq!(back.to_array(), [0.0, params.center_y, -2.0]);
    }

    #[test]
    fn test_every_rim_vertex_feeds_four_faces() {
        let star = star_with_points(5);
        let rim_count = 10;

        let mut uses = vec![0usize; star.vertex_count()];
        for &index in &star.indices {
            uses[index as usize] += 1;
        }

        for vertex in 0..rim_count {
            assert_eq!(
                uses[vertex], 4,
                "rim vertex {} should appear in two front and two back faces",
                vertex
            );
        }
        // Each apex closes one whole cap.
        assert_eq!(uses[rim_count], rim_count);
        assert_eq!(uses[rim_count + 1], rim_count);
    }
}

#[cfg(test)]
mod star_normal_tests {
    use super::*;

    #[test]
    fn test_vertex_normals_are_unit_length() {
        for points in [3u32, 5, 9, 32] {
            let star = star_with_points(points);
            for vertex in 0..star.vertex_count() {
                let length = star.normal(vertex).length();
                assert!(
                    (length - 1.0).abs() < 1e-5,
                    "P={} vertex {} normal length should be 1, got {}",
                    points,
                    vertex,
                    length
                );
            }
        }
    }

    #[test]
    fn test_normals_stay_unit_length_at_centimeter_scale() {
        // Small faces must not be dropped as degenerate by an absolute
        // area threshold.
        let star = build_star(&StarParams {
            points: 5,
            outer_radius: 0.02,
            inner_radius: 0.012,
            center_y: 0.0,
            depth: 0.004,
        })
        .unwrap();

        for vertex in 0..star.vertex_count() {
            let length = star.normal(vertex).length();
            assert!(
                (length - 1.0).abs() < 1e-5,
                "vertex {} normal length should be 1, got {}",
                vertex,
                length
            );
        }
    }

    #[test]
    fn test_face_normals_point_away_from_the_centroid() {
        for params in [
            StarParams::default(),
            StarParams {
                points: 3,
                ..StarParams::default()
            },
            StarParams {
                points: 12,
                depth: 4.0,
                ..StarParams::default()
            },
        ] {
            let star = build_star(&params).unwrap();
            let centroid = star.centroid();

            for triangle in 0..star.triangle_count() {
                let [a, b, c] = face_vertices(&star, triangle);
                let face_center = (a + b + c) / 3.0;
                let outward = face_normal(&star, triangle).dot(face_center - centroid);
                assert!(
                    outward > 0.0,
                    "P={} triangle {} normal should point away from the centroid, dot {}",
                    params.points,
                    triangle,
                    outward
                );
            }
        }
    }

    #[test]
    fn test_front_and_back_caps_wind_toward_their_apex() {
        let star = star_with_points(5);
        let front_apex = (star.vertex_count() - 2) as u32;
        let back_apex = (star.vertex_count() - 1) as u32;

        for triangle in 0..star.triangle_count() {
            let face = &star.indices[triangle * 3..triangle * 3 + 3];
            let normal = face_normal(&star, triangle);

            if face.contains(&front_apex) {
                assert!(
                    normal.z > 0.0,
                    "front-cap triangle {} should face +z, got {:?}",
                    triangle,
                    normal
                );
            } else {
                assert!(face.contains(&back_apex), "every face belongs to a cap");
                assert!(
                    normal.z < 0.0,
                    "back-cap triangle {} should face -z, got {:?}",
                    triangle,
                    normal
                );
            }
        }
    }

    #[test]
    fn test_apex_normals_align_with_the_depth_axis() {
        let star = build_star(&StarParams::default()).unwrap();
        let front = star.normal(star.vertex_count() - 2);
        let back = star.normal(star.vertex_count() - 1);

        // Rim contributions cancel by symmetry, leaving the z axis.
        assert!(front.z > 0.99, "front apex normal should be ~+z, got {:?}", front);
        assert!(back.z < -0.99, "back apex normal should be ~-z, got {:?}", back);
    }
}

#[cfg(test)]
mod star_parameter_tests {
    use super::*;

    #[test]
    fn test_too_few_points_is_rejected() {
        for points in [0u32, 1, 2] {
            let err = build_star(&StarParams {
                points,
                ..StarParams::default()
            })
            .unwrap_err();
            assert_eq!(err, GeometryError::TooFewPoints { points });
        }
    }

    #[test]
    fn test_inner_radius_must_stay_below_outer() {
        let err = build_star(&StarParams {
            outer_radius: 3.0,
            inner_radius: 3.0,
            ..StarParams::default()
        })
        .unwrap_err();
        assert_eq!(
            err,
            GeometryError::InvertedRadii {
                outer: 3.0,
                inner: 3.0
            }
        );
    }

    #[test]
    fn test_non_positive_radii_are_rejected() {
        let err = build_star(&StarParams {
            outer_radius: -2.0,
            ..StarParams::default()
        })
        .unwrap_err();
        assert_eq!(err, GeometryError::NonPositiveRadius { radius: -2.0 });
    }

    #[test]
    fn test_no_degenerate_mesh_escapes_a_failed_build() {
        // A failed build returns an error, never a partial buffer.
        let result = build_star(&StarParams {
            points: 2,
            outer_radius: 0.0,
            inner_radius: -1.0,
            center_y: 0.0,
            depth: 0.0,
        });
        assert!(result.is_err());
    }
}
