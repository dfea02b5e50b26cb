//! CPU ray picking against the furniture group.
//!
//! The pointer position is mapped to normalized device coordinates, a ray is
//! cast from the camera and intersected with every world-space triangle of
//! every group item. The nearest hit along the ray wins.

use crate::scene::{FurnitureGroup, ItemId};
use glam::{Vec2, Vec3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self {
            origin,
            dir: dir.normalize_or_zero(),
        }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PickHit {
    pub item: ItemId,
    pub interactable: bool,
    pub distance: f32,
    pub point: Vec3,
}

/// Map a pixel position to normalized device coordinates. The vertical axis
/// is inverted: pixel row 0 is NDC `y = 1`.
pub fn pixel_to_ndc(px: f32, py: f32, width: f32, height: f32) -> Vec2 {
    let width = width.max(1.0);
    let height = height.max(1.0);
    Vec2::new((px / width) * 2.0 - 1.0, -(py / height) * 2.0 + 1.0)
}

/// Moller-Trumbore. Returns the ray parameter of the hit, both faces count.
pub fn ray_triangle(ray: &Ray, [a, b, c]: [Vec3; 3]) -> Option<f32> {
    const EPS: f32 = 1e-8;
    let e1 = b - a;
    let e2 = c - a;
    let pvec = ray.dir.cross(e2);
    let det = e1.dot(pvec);
    if det.abs() < EPS {
        return None;
    }

    let inv_det = 1.0 / det;
    let tvec = ray.origin - a;
    let u = tvec.dot(pvec) * inv_det;
    if !(-EPS..=1.0 + EPS).contains(&u) {
        return None;
    }

    let qvec = tvec.cross(e1);
    let v = ray.dir.dot(qvec) * inv_det;
    if v < -EPS || u + v > 1.0 + EPS {
        return None;
    }

    let t = e2.dot(qvec) * inv_det;
    (t.is_finite() && t > EPS).then_some(t)
}

/// Nearest item hit by `ray`, if any. Equal distances keep the item that
/// comes first in the group.
pub fn pick_nearest(group: &FurnitureGroup, ray: &Ray) -> Option<PickHit> {
    let mut best: Option<PickHit> = None;
    for item in group.items() {
        let world = group.world_matrix(item);
        for tri in item.mesh.triangle_positions() {
            let tri = tri.map(|v| world.transform_point3(v));
            let Some(t) = ray_triangle(ray, tri) else {
                continue;
            };
            if best.as_ref().is_some_and(|hit| hit.distance <= t) {
                continue;
            }
            best = Some(PickHit {
                item: item.id().clone(),
                interactable: item.tag.interactable,
                distance: t,
                point: ray.at(t),
            });
        }
    }
    best
}
