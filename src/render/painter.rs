//! Software projection of the bedroom into a single egui mesh.
//!
//! Triangles are transformed to world space, shaded flat with the lighting
//! rig, projected with the orbit camera and sorted back to front. Faces
//! pointing away from the camera and triangles crossing the near plane are
//! dropped.

use crate::render::camera::OrbitCamera;
use crate::render::mesh::{face_normal, MeshData};
use crate::scene::lighting::{srgb_hex_to_linear, SurfaceSample};
use crate::scene::{BedroomScene, LightingRig, Material};
use egui::{Color32, Mesh, Pos2, Rect, Rgba};
use glam::{Mat4, Vec3, Vec4};

struct ProjectedTriangle {
    points: [Pos2; 3],
    depth: f32,
    color: Color32,
}

pub struct ScenePainter {
    triangles: Vec<ProjectedTriangle>,
}

impl Default for ScenePainter {
    fn default() -> Self {
        Self::new()
    }
}

impl ScenePainter {
    pub fn new() -> Self {
        Self {
            triangles: Vec::new(),
        }
    }

    /// Build the frame mesh for `screen`, in egui points.
    pub fn paint(
        &mut self,
        scene: &BedroomScene,
        camera: &OrbitCamera,
        lighting: &LightingRig,
        screen: Rect,
    ) -> Mesh {
        self.triangles.clear();
        let eye = camera.position();
        let view_projection = camera.view_projection();
        let near = camera.settings().near;

        for surface in &scene.surfaces {
            self.collect(
                &surface.mesh,
                surface.transform.matrix(),
                &surface.material,
                view_projection,
                near,
                eye,
                lighting,
                screen,
            );
        }
        for item in scene.group.items() {
            self.collect(
                &item.mesh,
                scene.group.world_matrix(item),
                &item.material,
                view_projection,
                near,
                eye,
                lighting,
                screen,
            );
        }

        // far first
        self.triangles
            .sort_by(|a, b| b.depth.total_cmp(&a.depth));

        let mut mesh = Mesh::default();
        mesh.reserve_triangles(self.triangles.len());
        mesh.reserve_vertices(self.triangles.len() * 3);
        for tri in &self.triangles {
            let base = mesh.vertices.len() as u32;
            for point in tri.points {
                mesh.colored_vertex(point, tri.color);
            }
            mesh.add_triangle(base, base + 1, base + 2);
        }
        mesh
    }

    #[allow(clippy::too_many_arguments)]
    fn collect(
        &mut self,
        mesh: &MeshData,
        world: Mat4,
        material: &Material,
        view_projection: Mat4,
        near: f32,
        eye: Vec3,
        lighting: &LightingRig,
        screen: Rect,
    ) {
        let albedo = srgb_hex_to_linear(material.color);
        let emissive = srgb_hex_to_linear(material.emissive);

        for local in mesh.triangle_positions() {
            let tri = local.map(|v| world.transform_point3(v));
            let normal = face_normal(tri);
            if normal.length_squared() < 1e-12 || normal.dot(eye - tri[0]) <= 0.0 {
                continue;
            }

            let clip = tri.map(|v| view_projection * v.extend(1.0));
            if clip.iter().any(|c| c.w <= near) {
                continue;
            }

            let centroid = (tri[0] + tri[1] + tri[2]) / 3.0;
            let radiance = lighting.shade(
                &SurfaceSample {
                    position: centroid,
                    normal,
                    albedo,
                    emissive,
                    roughness: material.roughness,
                    metalness: material.metalness,
                },
                eye,
            );

            self.triangles.push(ProjectedTriangle {
                points: clip.map(|c| to_screen(c, screen)),
                depth: clip.iter().map(|c| c.w).sum::<f32>() / 3.0,
                color: linear_to_color32(radiance),
            });
        }
    }
}

fn to_screen(clip: Vec4, screen: Rect) -> Pos2 {
    let ndc = clip.truncate() / clip.w;
    Pos2::new(
        screen.left() + (ndc.x + 1.0) * 0.5 * screen.width(),
        screen.top() + (1.0 - ndc.y) * 0.5 * screen.height(),
    )
}

fn linear_to_color32(linear: Vec3) -> Color32 {
    let c = linear.clamp(Vec3::ZERO, Vec3::ONE);
    Color32::from(Rgba::from_rgb(c.x, c.y, c.z))
}
