use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::shape::Triangle;

/// Indicated an inconsistency while building a triangle mesh.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum TriMeshBuilderError {
    /// A triangle mesh must contain at least one triangle.
    #[error("A triangle mesh must contain at least one triangle.")]
    EmptyIndices,
    /// A triangle references a vertex that does not exist.
    #[error("the triangle {triangle} references the vertex {index} but the mesh only has {num_vertices} vertices.")]
    IndexOutOfBounds {
        /// The index of the faulty triangle.
        triangle: usize,
        /// The out-of-bounds vertex index.
        index: u32,
        /// The number of vertices of the mesh.
        num_vertices: u32,
    },
    /// The vertex buffer is too large to be addressed by `u32` triangle indices.
    #[error("the mesh has {num_vertices} vertices but triangle indices are limited to u32.")]
    TooManyVertices {
        /// The number of vertices of the mesh.
        num_vertices: usize,
    },
}

/// A triangle mesh.
///
/// This is the polygonal envelope being voxelized. No topological check is performed
/// on construction: an open or non-manifold mesh is accepted and the voxelizer decides
/// what to do with it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct TriMesh {
    vertices: Vec<Point<Real>>,
    indices: Vec<[u32; 3]>,
    aabb: Aabb,
}

impl TriMesh {
    /// Creates a new triangle mesh from a vertex buffer and an index buffer.
    ///
    /// # Errors
    /// - [`TriMeshBuilderError::EmptyIndices`] if `indices` is empty.
    /// - [`TriMeshBuilderError::TooManyVertices`] if `vertices` cannot be indexed with `u32`.
    /// - [`TriMeshBuilderError::IndexOutOfBounds`] if a triangle references a missing vertex.
    ///
    /// # Example
    ///
    /// ```
    /// # #[cfg(all(feature = "dim3", feature = "f32"))] {
    /// use metalvox3d::shape::{TriMesh, TriMeshBuilderError};
    /// use nalgebra::Point3;
    ///
    /// let vertices = vec![
    ///     Point3::origin(),
    ///     Point3::new(1.0, 0.0, 0.0),
    ///     Point3::new(0.0, 1.0, 0.0),
    /// ];
    ///
    /// let mesh = TriMesh::new(vertices.clone(), vec![[0, 1, 2]]).unwrap();
    /// assert_eq!(mesh.num_triangles(), 1);
    ///
    /// assert_eq!(
    ///     TriMesh::new(vertices, vec![]),
    ///     Err(TriMeshBuilderError::EmptyIndices)
    /// );
    /// # }
    /// ```
    pub fn new(
        vertices: Vec<Point<Real>>,
        indices: Vec<[u32; 3]>,
    ) -> Result<Self, TriMeshBuilderError> {
        if indices.is_empty() {
            return Err(TriMeshBuilderError::EmptyIndices);
        }

        check_indices(&indices, vertices.len())?;
        let aabb = Aabb::from_points(&vertices);

        Ok(Self {
            vertices,
            indices,
            aabb,
        })
    }

    /// The vertex buffer of this mesh.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The index buffer of this mesh.
    #[inline]
    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }

    /// The number of triangles of this mesh.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.indices.len()
    }

    /// Get the `i`-th triangle of this mesh.
    #[inline]
    pub fn triangle(&self, i: u32) -> Triangle {
        let idx = self.indices[i as usize];
        Triangle::new(
            self.vertices[idx[0] as usize],
            self.vertices[idx[1] as usize],
            self.vertices[idx[2] as usize],
        )
    }

    /// An iterator through all the triangles of this mesh.
    pub fn triangles(&self) -> impl ExactSizeIterator<Item = Triangle> + '_ {
        self.indices.iter().map(move |ids| {
            Triangle::new(
                self.vertices[ids[0] as usize],
                self.vertices[ids[1] as usize],
                self.vertices[ids[2] as usize],
            )
        })
    }

    /// The AABB of this mesh, in its local-space.
    #[inline]
    pub fn local_aabb(&self) -> &Aabb {
        &self.aabb
    }
}

fn check_indices(indices: &[[u32; 3]], num_vertices: usize) -> Result<(), TriMeshBuilderError> {
    let num_vertices = u32::try_from(num_vertices)
        .map_err(|_| TriMeshBuilderError::TooManyVertices { num_vertices })?;

    for (triangle, idx) in indices.iter().enumerate() {
        if let Some(index) = idx.iter().find(|i| **i >= num_vertices) {
            return Err(TriMeshBuilderError::IndexOutOfBounds {
                triangle,
                index: *index,
                num_vertices,
            });
        }
    }

    Ok(())
}
