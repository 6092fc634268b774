//! Hard shadows from the single point light.
//!
//! The query is exhaustive: every face of the model is a candidate occluder,
//! so one query costs O(faces) and a frame that queries once per triangle
//! costs O(faces²). There is no acceleration structure.
//!
//! Candidates are tested against their infinite supporting plane only. A
//! face whose plane the light ray crosses in range counts as an occluder
//! even when the crossing lies outside the face's edges.

use crate::math::triangle_normal;
use crate::math::vec3::Vec3;
use crate::model::Model;

/// Minimum ray distance for a hit; keeps a surface from shadowing itself.
pub const SHADOW_BIAS: f32 = 0.001;

/// Rays closer than this to parallel with a plane never hit it.
pub const PARALLEL_EPSILON: f32 = 1e-5;

/// Returns `true` if any face's plane crosses the segment from `point` to
/// `light_position`, strictly between [`SHADOW_BIAS`] and the light.
pub fn is_occluded(point: Vec3, light_position: Vec3, model: &Model) -> bool {
    let to_light = light_position - point;
    let light_distance = to_light.magnitude();
    let dir = to_light.normalize();

    model.faces().iter().any(|face| {
        let [v0, v1, v2] = model.face_vertices(face);
        let n = triangle_normal(v0, v1, v2);

        let denom = n.dot(dir);
        // Degenerate faces give a NaN denominator; the range test below
        // rejects the NaN distance.
        if denom.abs() < PARALLEL_EPSILON {
            return false;
        }

        let t = n.dot(v0 - point) / denom;
        t > SHADOW_BIAS && t < light_distance
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Face, Material};

    const LIGHT: Vec3 = Vec3::new(0.0, 10.0, 0.0);

    /// A large horizontal triangle at `y = height`.
    fn occluder(height: f32) -> Model {
        Model::new(
            vec![
                Vec3::new(-50.0, height, -50.0),
                Vec3::new(50.0, height, -50.0),
                Vec3::new(0.0, height, 50.0),
            ],
            vec![Face::new([0, 1, 2], "Occluder")],
            vec![Material::white("Occluder")],
        )
    }

    #[test]
    fn point_below_occluder_is_shadowed() {
        let model = occluder(5.0);
        assert!(is_occluded(Vec3::new(0.0, 0.0, 0.0), LIGHT, &model));
    }

    #[test]
    fn point_above_occluder_is_lit() {
        let model = occluder(5.0);
        assert!(!is_occluded(Vec3::new(0.0, 7.0, 0.0), LIGHT, &model));
    }

    #[test]
    fn empty_model_never_occludes() {
        let model = Model::new(vec![], vec![], vec![]);
        assert!(!is_occluded(Vec3::ZERO, LIGHT, &model));
    }

    #[test]
    fn plane_beyond_the_light_does_not_count() {
        let model = occluder(12.0);
        assert!(!is_occluded(Vec3::ZERO, LIGHT, &model));
    }

    #[test]
    fn surface_does_not_shadow_itself() {
        let model = occluder(0.0);
        assert!(!is_occluded(Vec3::new(0.0, 0.0, 0.0), LIGHT, &model));
    }

    #[test]
    fn winding_of_the_occluder_does_not_matter() {
        let model = Model::new(
            vec![
                Vec3::new(-50.0, 5.0, -50.0),
                Vec3::new(0.0, 5.0, 50.0),
                Vec3::new(50.0, 5.0, -50.0),
            ],
            vec![Face::new([0, 1, 2], "")],
            vec![],
        );
        assert!(is_occluded(Vec3::ZERO, LIGHT, &model));
    }

    #[test]
    fn plane_crossing_outside_the_triangle_still_occludes() {
        // Small triangle far off to the side; its plane still crosses the ray.
        let model = Model::new(
            vec![
                Vec3::new(100.0, 5.0, 100.0),
                Vec3::new(101.0, 5.0, 100.0),
                Vec3::new(100.0, 5.0, 101.0),
            ],
            vec![Face::new([0, 2, 1], "")],
            vec![],
        );
        assert!(is_occluded(Vec3::ZERO, LIGHT, &model));
    }

    #[test]
    fn planes_parallel_to_the_ray_are_skipped() {
        // Vertical wall containing the light ray.
        let model = Model::new(
            vec![
                Vec3::new(0.0, -10.0, -10.0),
                Vec3::new(0.0, 20.0, -10.0),
                Vec3::new(0.0, 0.0, 10.0),
            ],
            vec![Face::new([0, 1, 2], "")],
            vec![],
        );
        assert!(!is_occluded(Vec3::ZERO, LIGHT, &model));
    }

    #[test]
    fn degenerate_faces_are_ignored() {
        let model = Model::new(
            vec![
                Vec3::new(0.0, 5.0, 0.0),
                Vec3::new(1.0, 5.0, 0.0),
                Vec3::new(2.0, 5.0, 0.0),
            ],
            vec![Face::new([0, 1, 2], "")],
            vec![],
        );
        assert!(!is_occluded(Vec3::ZERO, LIGHT, &model));
    }
}
