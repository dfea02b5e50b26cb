use super::{
    BedroomScene, FurnitureGroup, ItemDescriptor, ItemTag, Material, SceneItem, ShapeKind, Surface,
    Transform,
};
use crate::render::mesh::MeshData;
use glam::Vec3;
use std::f32::consts::FRAC_PI_2;

pub const FLOOR_COLOR: u32 = 0x2c3e50;
pub const WALL_COLOR: u32 = 0x34495e;
const SURFACE_SUBDIVISIONS: usize = 8;

/// Build the furniture group plus floor and walls from a catalog.
pub fn build_bedroom(catalog: &[ItemDescriptor], background: u32) -> BedroomScene {
    log::info!("Creating bedroom scene...");

    let mut group = FurnitureGroup::new();
    for descriptor in catalog {
        group.add(build_item(descriptor));
    }

    if group.is_empty() {
        log::warn!("Catalog has no items, the room will be empty");
    }

    let mut surfaces = vec![build_floor()];
    surfaces.extend(build_walls());
    for surface in &surfaces {
        log::debug!(
            "Added {} ({} triangles)",
            surface.name,
            surface.mesh.triangle_count()
        );
    }

    let triangles: usize = group
        .items()
        .iter()
        .map(|item| item.mesh.triangle_count())
        .sum();
    log::info!(
        "Bedroom created with {} items ({} triangles)",
        group.len(),
        triangles
    );
    BedroomScene {
        group,
        surfaces,
        background,
    }
}

pub fn build_item(descriptor: &ItemDescriptor) -> SceneItem {
    let mesh = match descriptor.shape_kind {
        ShapeKind::Box => MeshData::cuboid(&descriptor.shape_args),
        ShapeKind::Cylinder => MeshData::cylinder(&descriptor.shape_args),
        ShapeKind::Sphere => MeshData::sphere(&descriptor.shape_args),
        ShapeKind::Unknown => {
            log::debug!("Unknown shape for '{}', using a box", descriptor.id);
            MeshData::cuboid(&descriptor.shape_args)
        }
    };
    let (roughness, metalness) = descriptor.category.surface_params();

    SceneItem {
        descriptor: descriptor.clone(),
        mesh,
        transform: Transform::at(descriptor.position()),
        material: Material::new(descriptor.color_rgb, roughness, metalness),
        tag: ItemTag {
            interactable: true,
            id: descriptor.id.clone(),
            title: descriptor.title.clone(),
            description: descriptor.description.clone(),
            original_color: descriptor.color_rgb,
            original_scale: Vec3::ONE,
        },
    }
}

fn build_floor() -> Surface {
    Surface {
        name: "floor",
        mesh: MeshData::plane(20.0, 20.0, SURFACE_SUBDIVISIONS),
        transform: Transform::at(Vec3::new(0.0, -0.3, 0.0))
            .with_rotation(Vec3::new(-FRAC_PI_2, 0.0, 0.0)),
        material: Material::new(FLOOR_COLOR, 0.8, 0.1),
    }
}

fn build_walls() -> [Surface; 2] {
    let material = Material::new(WALL_COLOR, 0.9, 0.0);
    [
        Surface {
            name: "back-wall",
            mesh: MeshData::plane(20.0, 8.0, SURFACE_SUBDIVISIONS),
            transform: Transform::at(Vec3::new(0.0, 4.0, -10.0)),
            material,
        },
        Surface {
            name: "left-wall",
            mesh: MeshData::plane(20.0, 8.0, SURFACE_SUBDIVISIONS),
            transform: Transform::at(Vec3::new(-10.0, 4.0, 0.0))
                .with_rotation(Vec3::new(0.0, FRAC_PI_2, 0.0)),
            material,
        },
    ]
}
