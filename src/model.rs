//! Triangle mesh with per-face materials.
//!
//! A [`Model`] is the static scene description produced by the loader and
//! read by every stage of the frame. Vertices are only mutated once, by
//! [`Model::recenter`], before the first frame is drawn.

use std::collections::HashMap;

use crate::math::triangle_normal;
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;

/// Name of the distinguished material whose faces are texture mapped.
pub const FLOOR_MATERIAL: &str = "Floor";

/// A named surface description.
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    pub name: String,
    /// Diffuse colour, nominally in `[0, 1]` but not clamped.
    pub diffuse: Vec3,
    /// Textured faces replace their shaded colour with a texture lookup.
    pub textured: bool,
}

impl Material {
    pub fn new(name: impl Into<String>, diffuse: Vec3) -> Self {
        Self {
            name: name.into(),
            diffuse,
            textured: false,
        }
    }

    /// Opaque white, used when a face names a material that was never defined.
    pub fn white(name: impl Into<String>) -> Self {
        Self::new(name, Vec3::ONE)
    }
}

/// A triangle referencing three vertices by 0-based index.
///
/// Indices are trusted: the loader guarantees they are in range.
#[derive(Clone, Debug, PartialEq)]
pub struct Face {
    pub indices: [usize; 3],
    pub material: String,
    /// Per-corner texture coordinates; only present on textured faces.
    pub uvs: Option<[Vec2; 3]>,
}

impl Face {
    pub fn new(indices: [usize; 3], material: impl Into<String>) -> Self {
        Self {
            indices,
            material: material.into(),
            uvs: None,
        }
    }

    pub fn with_uvs(mut self, uvs: [Vec2; 3]) -> Self {
        self.uvs = Some(uvs);
        self
    }
}

/// Axis-aligned bounds of a vertex set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl BoundingBox {
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

#[derive(Debug)]
pub struct Model {
    vertices: Vec<Vec3>,
    faces: Vec<Face>,
    materials: HashMap<String, Material>,
    vertex_normals: Vec<Vec3>,
    fallback_material: Material,
}

impl Model {
    /// Build a model and derive its per-vertex normals.
    pub fn new(vertices: Vec<Vec3>, faces: Vec<Face>, materials: Vec<Material>) -> Self {
        let vertex_normals = compute_vertex_normals(&vertices, &faces);
        let materials = materials
            .into_iter()
            .map(|m| (m.name.clone(), m))
            .collect();

        Self {
            vertices,
            faces,
            materials,
            vertex_normals,
            fallback_material: Material::white(""),
        }
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn vertex_normals(&self) -> &[Vec3] {
        &self.vertex_normals
    }

    /// Look up a material by name.
    pub fn material(&self, name: &str) -> Option<&Material> {
        self.materials.get(name)
    }

    pub fn materials(&self) -> impl Iterator<Item = &Material> {
        self.materials.values()
    }

    /// The material a face is drawn with, falling back to opaque white
    /// when the face names an undefined material.
    pub fn face_material(&self, face: &Face) -> &Material {
        self.materials
            .get(&face.material)
            .unwrap_or(&self.fallback_material)
    }

    /// World-space positions of a face's corners.
    #[inline]
    pub fn face_vertices(&self, face: &Face) -> [Vec3; 3] {
        face.indices.map(|i| self.vertices[i])
    }

    #[inline]
    pub fn face_vertex_normals(&self, face: &Face) -> [Vec3; 3] {
        face.indices.map(|i| self.vertex_normals[i])
    }

    /// Returns `None` for a model without vertices.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let first = *self.vertices.first()?;
        let (min, max) = self
            .vertices
            .iter()
            .fold((first, first), |(min, max), v| (min.min(*v), max.max(*v)));
        Some(BoundingBox { min, max })
    }

    /// Translate every vertex so the bounding-box center sits at the origin.
    ///
    /// Returns the bounding box as it was before translation. Normals and
    /// UVs are unaffected.
    pub fn recenter(&mut self) -> Option<BoundingBox> {
        let bounds = self.bounding_box()?;
        let center = bounds.center();
        for v in &mut self.vertices {
            *v -= center;
        }
        Some(bounds)
    }
}

/// Per-vertex normal: the normalized sum of the unit normals of every
/// incident face. Faces are deliberately not area-weighted.
///
/// Vertices with no incident faces end up with a NaN normal, which shading
/// reduces to an ambient-only contribution.
pub fn compute_vertex_normals(vertices: &[Vec3], faces: &[Face]) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; vertices.len()];
    for face in faces {
        let [a, b, c] = face.indices;
        let n = triangle_normal(vertices[a], vertices[b], vertices[c]);
        for i in face.indices {
            normals[i] += n;
        }
    }
    for n in &mut normals {
        *n = n.normalize();
    }
    normals
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Unit cube centred on the origin with outward counter-clockwise
    /// winding. No face diagonal touches the (1, 1, 1) corner (index 6).
    pub(crate) fn cube() -> Model {
        let vertices = vec![
            Vec3::new(-1.0, -1.0, -1.0), // 0
            Vec3::new(1.0, -1.0, -1.0),  // 1
            Vec3::new(1.0, 1.0, -1.0),   // 2
            Vec3::new(-1.0, 1.0, -1.0),  // 3
            Vec3::new(-1.0, -1.0, 1.0),  // 4
            Vec3::new(1.0, -1.0, 1.0),   // 5
            Vec3::new(1.0, 1.0, 1.0),    // 6
            Vec3::new(-1.0, 1.0, 1.0),   // 7
        ];
        let tris: [[usize; 3]; 12] = [
            // +Z, split along 5-7
            [4, 5, 7],
            [5, 6, 7],
            // -Z, split along 0-2
            [0, 2, 1],
            [0, 3, 2],
            // +X, split along 2-5
            [1, 2, 5],
            [2, 6, 5],
            // -X, split along 0-7
            [0, 4, 7],
            [0, 7, 3],
            // +Y, split along 2-7
            [3, 7, 2],
            [7, 6, 2],
            // -Y, split along 1-4
            [0, 1, 4],
            [1, 5, 4],
        ];
        let faces = tris.iter().map(|t| Face::new(*t, "Box")).collect();
        Model::new(
            vertices,
            faces,
            vec![Material::new("Box", Vec3::new(0.8, 0.2, 0.2))],
        )
    }

    #[test]
    fn cube_faces_point_outward() {
        let model = cube();
        for face in model.faces() {
            let [a, b, c] = model.face_vertices(face);
            let n = triangle_normal(a, b, c);
            let centroid = (a + b + c) / 3.0;
            assert!(n.dot(centroid) > 0.0, "face {:?} is wound inward", face);
        }
    }

    #[test]
    fn corner_off_every_diagonal_gets_diagonal_normal() {
        let model = cube();
        let n = model.vertex_normals()[6];
        let expected = 1.0 / 3.0_f32.sqrt();
        assert_relative_eq!(n.x, expected, epsilon = 1e-6);
        assert_relative_eq!(n.y, expected, epsilon = 1e-6);
        assert_relative_eq!(n.z, expected, epsilon = 1e-6);
    }

    #[test]
    fn corner_on_diagonals_counts_each_incident_triangle() {
        // Vertex 2 (1, 1, -1) sits on the -Z, +X and +Y diagonals, so each
        // of its three faces contributes twice: the sum is 2 * (1, 1, -1).
        // Vertex 5 (1, -1, 1) sits on the +Z and +X diagonals but not on
        // -Y's: sum is (2, -1, 2).
        let model = cube();

        let n2 = model.vertex_normals()[2];
        let e = 1.0 / 3.0_f32.sqrt();
        assert_relative_eq!(n2.x, e, epsilon = 1e-6);
        assert_relative_eq!(n2.y, e, epsilon = 1e-6);
        assert_relative_eq!(n2.z, -e, epsilon = 1e-6);

        let n5 = model.vertex_normals()[5];
        assert_relative_eq!(n5.x, 2.0 / 3.0, epsilon = 1e-6);
        assert_relative_eq!(n5.y, -1.0 / 3.0, epsilon = 1e-6);
        assert_relative_eq!(n5.z, 2.0 / 3.0, epsilon = 1e-6);
    }

    #[test]
    fn face_normals_are_not_area_weighted() {
        // A tiny and a huge triangle sharing vertex 0, in perpendicular planes.
        let vertices = vec![
            Vec3::ZERO,
            Vec3::new(0.01, 0.0, 0.0),
            Vec3::new(0.0, 0.01, 0.0),
            Vec3::new(0.0, 0.0, 100.0),
            Vec3::new(0.0, 100.0, 0.0),
        ];
        let faces = vec![Face::new([0, 1, 2], ""), Face::new([0, 3, 4], "")];
        let normals = compute_vertex_normals(&vertices, &faces);
        // +Z and -X contribute equally.
        let e = 1.0 / 2.0_f32.sqrt();
        assert_relative_eq!(normals[0].x, -e, epsilon = 1e-6);
        assert_relative_eq!(normals[0].z, e, epsilon = 1e-6);
    }

    #[test]
    fn recenter_translates_bounding_box_center_to_origin() {
        let mut model = Model::new(
            vec![
                Vec3::new(-1.0, -2.0, -3.0),
                Vec3::new(3.0, 4.0, 5.0),
                Vec3::new(0.0, 0.0, 0.0),
            ],
            vec![Face::new([0, 1, 2], "")],
            vec![],
        );
        let bounds = model.recenter().expect("model has vertices");

        assert_eq!(bounds.size(), Vec3::new(4.0, 6.0, 8.0));
        assert_eq!(model.vertices()[0], Vec3::new(-2.0, -3.0, -4.0));
        assert_eq!(model.vertices()[1], Vec3::new(2.0, 3.0, 4.0));
        assert_eq!(model.vertices()[2], Vec3::new(-1.0, -1.0, -1.0));
    }

    #[test]
    fn empty_model_has_no_bounds() {
        let mut model = Model::new(vec![], vec![], vec![]);
        assert!(model.bounding_box().is_none());
        assert!(model.recenter().is_none());
    }

    #[test]
    fn undefined_material_falls_back_to_white() {
        let model = Model::new(
            vec![Vec3::ZERO, Vec3::RIGHT, Vec3::UP],
            vec![Face::new([0, 1, 2], "Missing")],
            vec![Material::new("Red", Vec3::new(1.0, 0.0, 0.0))],
        );
        let material = model.face_material(&model.faces()[0]);
        assert_eq!(material.diffuse, Vec3::ONE);
        assert!(!material.textured);
    }
}
