pub mod builder;
pub mod catalog;
pub mod lighting;
pub mod serialization;

pub use builder::build_bedroom;
pub use catalog::{bedroom_catalog, ItemDescriptor, ItemId, MaterialCategory, ShapeKind};
pub use lighting::LightingRig;

use crate::render::mesh::MeshData;
use glam::{EulerRot, Mat4, Quat, Vec3};

/// Position, Euler rotation (XYZ order, radians) and scale of an object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_scale_rotation_translation(self.scale, rotation, self.position)
    }
}

/// Standard PBR-ish surface. Colors are 24-bit sRGB hex values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: u32,
    pub emissive: u32,
    pub roughness: f32,
    pub metalness: f32,
}

impl Material {
    pub fn new(color: u32, roughness: f32, metalness: f32) -> Self {
        Self {
            color,
            emissive: 0x000000,
            roughness,
            metalness,
        }
    }
}

/// Metadata attached to every furniture mesh. The selection controller reads
/// interactability and the revert-to state from here and nowhere else.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemTag {
    pub interactable: bool,
    pub id: ItemId,
    pub title: String,
    pub description: String,
    pub original_color: u32,
    pub original_scale: Vec3,
}

#[derive(Debug, Clone)]
pub struct SceneItem {
    pub descriptor: ItemDescriptor,
    pub mesh: MeshData,
    pub transform: Transform,
    pub material: Material,
    pub tag: ItemTag,
}

impl SceneItem {
    pub fn id(&self) -> &ItemId {
        &self.tag.id
    }
}

/// Container owning every furniture item. Moved as one unit by the float
/// animation.
#[derive(Debug, Clone, Default)]
pub struct FurnitureGroup {
    pub transform: Transform,
    items: Vec<SceneItem>,
}

impl FurnitureGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: SceneItem) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[SceneItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &ItemId) -> Option<&SceneItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn get_mut(&mut self, id: &ItemId) -> Option<&mut SceneItem> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    pub fn set_offset_y(&mut self, y: f32) {
        self.transform.position.y = y;
    }

    /// World matrix of an item, including the group transform.
    pub fn world_matrix(&self, item: &SceneItem) -> Mat4 {
        self.transform.matrix() * item.transform.matrix()
    }
}

/// Static, non-interactable geometry added directly to the scene.
#[derive(Debug, Clone)]
pub struct Surface {
    pub name: &'static str,
    pub mesh: MeshData,
    pub transform: Transform,
    pub material: Material,
}

#[derive(Debug, Clone)]
pub struct BedroomScene {
    pub group: FurnitureGroup,
    pub surfaces: Vec<Surface>,
    pub background: u32,
}
