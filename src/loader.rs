//! OBJ/MTL loading into a [`Model`].
//!
//! Geometry is mandatory: an unreadable or empty OBJ is an error. The
//! material library is optional: if it cannot be read every face falls back
//! to white. Faces of the [`FLOOR_MATERIAL`] get planar texture coordinates.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;
use crate::model::{Face, Material, Model, FLOOR_MATERIAL};
use crate::texture::Texture;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The OBJ file could not be opened or parsed.
    #[error("failed to load OBJ {path}: {source}")]
    Obj {
        path: PathBuf,
        #[source]
        source: tobj::LoadError,
    },

    /// The OBJ parsed but contained no triangles.
    #[error("OBJ {path} has no faces")]
    EmptyMesh { path: PathBuf },

    /// A texture image could not be opened or decoded.
    #[error("failed to load texture {path}: {source}")]
    Texture {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Planar floor mapping from world x/z, valid for the demonstration floor,
/// which spans x in [-3, 3] and z in [-2, 4].
#[inline]
pub fn floor_uv(vertex: Vec3) -> Vec2 {
    Vec2::new((vertex.x + 3.0) / 6.0, (vertex.z + 2.0) / 6.0)
}

/// Load an OBJ file and its material library.
///
/// All objects and groups are merged into one vertex list. Polygons are
/// triangulated by tobj; texture coordinates and normals in the file are
/// ignored.
pub fn load_model<P: AsRef<Path>>(path: P) -> Result<Model, LoadError> {
    let path = path.as_ref();
    info!("Loading OBJ file: {}", path.display());

    let load_options = tobj::LoadOptions {
        triangulate: true,
        single_index: false,
        ..Default::default()
    };

    let (models, materials) =
        tobj::load_obj(path, &load_options).map_err(|source| LoadError::Obj {
            path: path.to_path_buf(),
            source,
        })?;

    let tobj_materials = materials.unwrap_or_else(|e| {
        warn!(
            "Material library for {} unavailable ({}), faces default to white",
            path.display(),
            e
        );
        Vec::new()
    });

    let mut materials: HashMap<String, Material> = tobj_materials
        .iter()
        .map(|m| {
            let diffuse = m.diffuse.map_or(Vec3::ONE, |[r, g, b]| Vec3::new(r, g, b));
            (m.name.clone(), Material::new(m.name.clone(), diffuse))
        })
        .collect();
    materials
        .entry(FLOOR_MATERIAL.to_string())
        .or_insert_with(|| Material::white(FLOOR_MATERIAL))
        .textured = true;

    let (vertices, faces) = merge_models(&models, &tobj_materials);
    if faces.is_empty() {
        return Err(LoadError::EmptyMesh {
            path: path.to_path_buf(),
        });
    }

    let undefined = faces
        .iter()
        .filter(|f| !materials.contains_key(&f.material))
        .count();
    if undefined > 0 {
        warn!("{} faces reference undefined materials, drawing them white", undefined);
    }

    info!(
        "OBJ loaded: {} vertices, {} faces, {} materials",
        vertices.len(),
        faces.len(),
        materials.len()
    );

    Ok(Model::new(vertices, faces, materials.into_values().collect()))
}

/// Load the floor texture image.
pub fn load_texture<P: AsRef<Path>>(path: P) -> Result<Texture, LoadError> {
    let path = path.as_ref();
    let texture = Texture::from_file(path).map_err(|source| LoadError::Texture {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        "Texture loaded: {} ({}x{})",
        path.display(),
        texture.width(),
        texture.height()
    );
    Ok(texture)
}

/// Bit pattern of a position, with -0.0 folded into 0.0.
fn weld_key(v: Vec3) -> [u32; 3] {
    [v.x, v.y, v.z].map(|c| if c == 0.0 { 0.0f32.to_bits() } else { c.to_bits() })
}

/// Merge tobj models into one vertex list with 0-based faces, tagging each
/// face with its material name and floor UVs where applicable.
///
/// tobj gives every material group its own copy of the positions it uses.
/// Identical positions are welded back into one vertex so normals are shared
/// across group seams. Faces keep file order.
fn merge_models(models: &[tobj::Model], materials: &[tobj::Material]) -> (Vec<Vec3>, Vec<Face>) {
    let mut vertices: Vec<Vec3> = Vec::new();
    let mut welded: HashMap<[u32; 3], usize> = HashMap::new();
    let mut faces = Vec::new();

    for model in models {
        let mesh = &model.mesh;

        let remap: Vec<usize> = mesh
            .positions
            .chunks_exact(3)
            .map(|p| {
                let v = Vec3::new(p[0], p[1], p[2]);
                *welded.entry(weld_key(v)).or_insert_with(|| {
                    vertices.push(v);
                    vertices.len() - 1
                })
            })
            .collect();

        let material = mesh
            .material_id
            .and_then(|id| materials.get(id))
            .map(|m| m.name.as_str())
            .unwrap_or("");

        for tri in mesh.indices.chunks_exact(3) {
            let indices = [
                remap[tri[0] as usize],
                remap[tri[1] as usize],
                remap[tri[2] as usize],
            ];
            let mut face = Face::new(indices, material);
            if material == FLOOR_MATERIAL {
                face = face.with_uvs(indices.map(|i| floor_uv(vertices[i])));
            }
            faces.push(face);
        }
    }

    (vertices, faces)
}
