// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Render-ready mesh data delivered by a mesh loader.

/// GPU-ready mesh data for a loaded item model.
///
/// Contains flattened vertex data; the engine only ever inspects the
/// bounding box (for item sizing), everything else passes through to
/// the renderer backend.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshData {
    /// Vertex positions as flattened [x, y, z, x, y, z, ...]
    pub positions: Vec<f32>,
    /// Vertex normals as flattened [nx, ny, nz, ...]
    pub normals: Vec<f32>,
    /// Triangle indices
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Axis-aligned bounding box size as (width, height, depth),
    /// or `None` for an empty mesh.
    pub fn bounds(&self) -> Option<(f64, f64, f64)> {
        if self.is_empty() {
            return None;
        }

        let mut min = [f32::MAX; 3];
        let mut max = [f32::MIN; 3];
        for chunk in self.positions.chunks_exact(3) {
            for axis in 0..3 {
                min[axis] = min[axis].min(chunk[axis]);
                max[axis] = max[axis].max(chunk[axis]);
            }
        }

        Some((
            (max[0] - min[0]) as f64,
            (max[1] - min[1]) as f64,
            (max[2] - min[2]) as f64,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> MeshData {
        MeshData {
            positions: vec![
                0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 2.0, 0.0, 0.0, 2.0, 3.0,
            ],
            normals: vec![0.0; 12],
            indices: vec![0, 1, 2, 0, 2, 3],
        }
    }

    #[test]
    fn test_counts() {
        let mesh = unit_box();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        assert!(!mesh.is_empty());
    }

    #[test]
    fn test_bounds() {
        let (w, h, d) = unit_box().bounds().unwrap();
        assert_eq!(w, 1.0);
        assert_eq!(h, 2.0);
        assert_eq!(d, 3.0);
        assert_eq!(MeshData::new().bounds(), None);
    }
}
