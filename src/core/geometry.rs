//! Procedural mesh builders for the placeholder scene nodes and the flame
//! cone. Positions and normals only; the render layer interleaves them into
//! vertex buffers.

use glam::Vec3;
use std::f32::consts::TAU;

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Recompute smooth normals by accumulating face normals per vertex.
    pub fn recompute_normals(&mut self) {
        self.normals.clear();
        self.normals.resize(self.positions.len(), Vec3::ZERO);
        for tri in self.indices.chunks_exact(3) {
            let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            let face = (self.positions[b] - self.positions[a])
                .cross(self.positions[c] - self.positions[a]);
            self.normals[a] += face;
            self.normals[b] += face;
            self.normals[c] += face;
        }
        for n in &mut self.normals {
            *n = n.normalize_or_zero();
        }
    }

    /// Append another mesh, translating its vertices by `offset`.
    pub fn append(&mut self, other: &MeshData, offset: Vec3) {
        let base = self.positions.len() as u32;
        self.positions.extend(other.positions.iter().map(|p| *p + offset));
        self.normals.extend(other.normals.iter().copied());
        self.indices.extend(other.indices.iter().map(|i| i + base));
    }
}

/// Lateral surface of a cone, rings from base (y = -height/2) to apex,
/// with a duplicated seam column so rings stay simple to index.
pub fn cone(radius: f32, height: f32, radial_segments: u32, height_segments: u32) -> MeshData {
    lathe(
        |v| radius * (1.0 - v),
        height,
        radial_segments,
        height_segments,
    )
}

/// Lateral surface of a cylinder with linearly interpolated radii.
pub fn cylinder(
    radius_bottom: f32,
    radius_top: f32,
    height: f32,
    radial_segments: u32,
    height_segments: u32,
) -> MeshData {
    lathe(
        |v| radius_bottom + (radius_top - radius_bottom) * v,
        height,
        radial_segments,
        height_segments,
    )
}

fn lathe(
    radius_at: impl Fn(f32) -> f32,
    height: f32,
    radial_segments: u32,
    height_segments: u32,
) -> MeshData {
    let mut mesh = MeshData::default();
    for iy in 0..=height_segments {
        let v = iy as f32 / height_segments as f32;
        let y = -height * 0.5 + v * height;
        let r = radius_at(v);
        for ix in 0..=radial_segments {
            let theta = ix as f32 / radial_segments as f32 * TAU;
            mesh.positions.push(Vec3::new(r * theta.cos(), y, r * theta.sin()));
        }
    }
    let cols = radial_segments + 1;
    for iy in 0..height_segments {
        for ix in 0..radial_segments {
            let a = iy * cols + ix;
            let b = a + 1;
            let c = a + cols;
            let d = c + 1;
            mesh.indices.extend_from_slice(&[a, c, b, b, c, d]);
        }
    }
    mesh.recompute_normals();
    mesh
}

/// Axis-aligned box centered on the origin, flat-shaded (duplicated corner
/// vertices per face).
pub fn box_mesh(extents: Vec3) -> MeshData {
    let h = extents * 0.5;
    let faces: [(Vec3, Vec3, Vec3); 6] = [
        (Vec3::X, Vec3::Y, Vec3::Z),
        (-Vec3::X, Vec3::Y, -Vec3::Z),
        (Vec3::Y, Vec3::Z, Vec3::X),
        (-Vec3::Y, Vec3::Z, -Vec3::X),
        (Vec3::Z, Vec3::Y, -Vec3::X),
        (-Vec3::Z, Vec3::Y, Vec3::X),
    ];
    let mut mesh = MeshData::default();
    for (normal, up, right) in faces {
        let base = mesh.positions.len() as u32;
        let center = normal * h;
        for (sy, sx) in [(-1.0, -1.0), (-1.0, 1.0), (1.0, -1.0), (1.0, 1.0)] {
            mesh.positions
                .push(center + up * h * sy + right * h * sx);
            mesh.normals.push(normal);
        }
        mesh.indices
            .extend_from_slice(&[base, base + 2, base + 1, base + 1, base + 2, base + 3]);
    }
    mesh
}

/// Placeholder rocket: cylindrical body, cone nose, four box fins. Stands
/// in for the external mesh asset; positioned entirely by computed poses.
pub fn rocket_mesh() -> MeshData {
    let mut mesh = cylinder(0.25, 0.25, 1.6, 12, 1);
    mesh.append(&cone(0.25, 0.6, 12, 1), Vec3::new(0.0, 1.1, 0.0));
    let fin = box_mesh(Vec3::new(0.45, 0.4, 0.05));
    for i in 0..4 {
        let theta = i as f32 / 4.0 * TAU;
        mesh.append(
            &fin,
            Vec3::new(0.3 * theta.cos(), -0.65, 0.3 * theta.sin()),
        );
    }
    mesh
}

/// Placeholder launch pad: a platform slab with a service tower.
pub fn pad_mesh() -> MeshData {
    let mut mesh = box_mesh(Vec3::new(4.0, 0.4, 4.0));
    mesh.append(&box_mesh(Vec3::new(0.4, 3.0, 0.4)), Vec3::new(1.4, 1.7, 0.0));
    mesh
}
