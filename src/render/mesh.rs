//! Primitive tessellation.
//!
//! Shapes are centered on the origin with counter-clockwise winding seen from
//! outside (right-handed, Y up). Argument lists follow the three.js geometry
//! constructors, missing values take the same defaults.

use glam::Vec3;
use std::f32::consts::{PI, TAU};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<Vec3>,
    pub triangles: Vec<[u32; 3]>,
}

impl MeshData {
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Iterate triangles as vertex positions.
    pub fn triangle_positions(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.triangles.iter().map(|tri| {
            [
                self.vertices[tri[0] as usize],
                self.vertices[tri[1] as usize],
                self.vertices[tri[2] as usize],
            ]
        })
    }

    fn push_vertex(&mut self, v: Vec3) -> u32 {
        self.vertices.push(v);
        (self.vertices.len() - 1) as u32
    }

    fn push_quad(&mut self, a: u32, b: u32, c: u32, d: u32) {
        self.triangles.push([a, b, c]);
        self.triangles.push([a, c, d]);
    }

    /// Axis-aligned box. Args: `[width, height, depth]`.
    pub fn cuboid(args: &[f32]) -> Self {
        let half = Vec3::new(arg(args, 0, 1.0), arg(args, 1, 1.0), arg(args, 2, 1.0)) * 0.5;
        // (normal, u, v) with u x v == normal
        let faces = [
            (Vec3::X, Vec3::NEG_Z, Vec3::Y),
            (Vec3::NEG_X, Vec3::Z, Vec3::Y),
            (Vec3::Y, Vec3::X, Vec3::NEG_Z),
            (Vec3::NEG_Y, Vec3::X, Vec3::Z),
            (Vec3::Z, Vec3::X, Vec3::Y),
            (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
        ];

        let mut mesh = Self::default();
        for (normal, u, v) in faces {
            let center = normal * half;
            let u = u * half;
            let v = v * half;
            let a = mesh.push_vertex(center - u - v);
            let b = mesh.push_vertex(center + u - v);
            let c = mesh.push_vertex(center + u + v);
            let d = mesh.push_vertex(center - u + v);
            mesh.push_quad(a, b, c, d);
        }
        mesh
    }

    /// Capped cylinder or frustum along Y.
    /// Args: `[radius_top, radius_bottom, height, radial_segments]`.
    pub fn cylinder(args: &[f32]) -> Self {
        let radius_top = arg(args, 0, 1.0);
        let radius_bottom = arg(args, 1, 1.0);
        let height = arg(args, 2, 1.0);
        let segments = segments(args, 3, 32, 3);
        let half_height = height * 0.5;

        let mut mesh = Self::default();
        let mut top = Vec::with_capacity(segments + 1);
        let mut bottom = Vec::with_capacity(segments + 1);
        for i in 0..=segments {
            let theta = i as f32 / segments as f32 * TAU;
            let (sin, cos) = theta.sin_cos();
            top.push(mesh.push_vertex(Vec3::new(
                radius_top * sin,
                half_height,
                radius_top * cos,
            )));
            bottom.push(mesh.push_vertex(Vec3::new(
                radius_bottom * sin,
                -half_height,
                radius_bottom * cos,
            )));
        }

        for i in 0..segments {
            mesh.push_quad(bottom[i], bottom[i + 1], top[i + 1], top[i]);
        }

        if radius_top > 0.0 {
            let center = mesh.push_vertex(Vec3::new(0.0, half_height, 0.0));
            for i in 0..segments {
                mesh.triangles.push([center, top[i], top[i + 1]]);
            }
        }
        if radius_bottom > 0.0 {
            let center = mesh.push_vertex(Vec3::new(0.0, -half_height, 0.0));
            for i in 0..segments {
                mesh.triangles.push([center, bottom[i + 1], bottom[i]]);
            }
        }
        mesh
    }

    /// UV sphere. Args: `[radius, width_segments, height_segments]`.
    pub fn sphere(args: &[f32]) -> Self {
        let radius = arg(args, 0, 1.0);
        let columns = segments(args, 1, 32, 3);
        let rows = segments(args, 2, 16, 2);

        let mut mesh = Self::default();
        let mut grid = Vec::with_capacity(rows + 1);
        for j in 0..=rows {
            let phi = j as f32 / rows as f32 * PI;
            let (sin_phi, cos_phi) = phi.sin_cos();
            let mut ring = Vec::with_capacity(columns + 1);
            for i in 0..=columns {
                let theta = i as f32 / columns as f32 * TAU;
                let (sin_theta, cos_theta) = theta.sin_cos();
                ring.push(mesh.push_vertex(Vec3::new(
                    radius * sin_phi * sin_theta,
                    radius * cos_phi,
                    radius * sin_phi * cos_theta,
                )));
            }
            grid.push(ring);
        }

        for j in 0..rows {
            for i in 0..columns {
                let a = grid[j][i];
                let b = grid[j][i + 1];
                let c = grid[j + 1][i + 1];
                let d = grid[j + 1][i];
                // Skip the triangles that collapse onto a pole.
                if j != rows - 1 {
                    mesh.triangles.push([a, d, c]);
                }
                if j != 0 {
                    mesh.triangles.push([a, c, b]);
                }
            }
        }
        mesh
    }

    /// Plane in XY facing +Z, split into `subdivisions` x `subdivisions`
    /// quads.
    pub fn plane(width: f32, height: f32, subdivisions: usize) -> Self {
        let subdivisions = subdivisions.max(1);
        let mut mesh = Self::default();
        let mut grid = Vec::with_capacity(subdivisions + 1);
        for j in 0..=subdivisions {
            let y = (j as f32 / subdivisions as f32 - 0.5) * height;
            let row: Vec<u32> = (0..=subdivisions)
                .map(|i| {
                    let x = (i as f32 / subdivisions as f32 - 0.5) * width;
                    mesh.push_vertex(Vec3::new(x, y, 0.0))
                })
                .collect();
            grid.push(row);
        }
        for j in 0..subdivisions {
            for i in 0..subdivisions {
                mesh.push_quad(grid[j][i], grid[j][i + 1], grid[j + 1][i + 1], grid[j + 1][i]);
            }
        }
        mesh
    }
}

fn arg(args: &[f32], index: usize, default: f32) -> f32 {
    args.get(index).copied().unwrap_or(default)
}

fn segments(args: &[f32], index: usize, default: usize, min: usize) -> usize {
    args.get(index)
        .map(|value| value.floor().max(0.0) as usize)
        .unwrap_or(default)
        .max(min)
}

/// Unnormalized face normal of a counter-clockwise triangle.
pub fn face_normal([a, b, c]: [Vec3; 3]) -> Vec3 {
    (b - a).cross(c - a)
}
