//! Static furniture catalog.
//!
//! One [`ItemDescriptor`] per furniture part. Descriptors are immutable once
//! the catalog is defined; the scene builder turns each into a `SceneItem`.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity of a catalog item (`"mattress"`, `"bed-leg-3"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Primitive geometry used for an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Box,
    Cylinder,
    Sphere,
    /// Any shape name the viewer does not know. Built as a box.
    #[serde(other)]
    Unknown,
}

/// Surface finish bucket, decides roughness/metalness of the item material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialCategory {
    /// Fabric and bedding: rough, non-metallic.
    Soft,
    /// Lamp parts: glossy and metallic.
    Glossy,
    Standard,
}

impl MaterialCategory {
    /// Naming rule used when a descriptor does not state its category:
    /// ids containing "pillow" or equal to "mattress" are soft, ids
    /// containing "lamp" are glossy, everything else is standard.
    pub fn from_item_id(id: &str) -> Self {
        if id.contains("pillow") || id == "mattress" {
            Self::Soft
        } else if id.contains("lamp") {
            Self::Glossy
        } else {
            Self::Standard
        }
    }

    /// `(roughness, metalness)` for the category.
    pub fn surface_params(self) -> (f32, f32) {
        match self {
            Self::Soft => (0.8, 0.0),
            Self::Glossy => (0.2, 0.7),
            Self::Standard => (0.4, 0.1),
        }
    }
}

/// Serialized through [`serialization`](super::serialization), which also
/// reads files where `category` is missing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemDescriptor {
    pub id: ItemId,
    #[serde(rename = "shape")]
    pub shape_kind: ShapeKind,
    #[serde(rename = "args")]
    pub shape_args: Vec<f32>,
    pub position: [f32; 3],
    #[serde(rename = "color")]
    pub color_rgb: u32,
    pub title: String,
    pub description: String,
    pub category: MaterialCategory,
}

impl ItemDescriptor {
    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }
}

const BED_LEG_DESCRIPTION: &str =
    "Sturdy wooden bed leg providing stable support. Crafted from solid hardwood for durability.";

#[allow(clippy::too_many_arguments)]
fn item(
    id: &str,
    shape_kind: ShapeKind,
    shape_args: &[f32],
    position: [f32; 3],
    color_rgb: u32,
    title: &str,
    description: &str,
    category: MaterialCategory,
) -> ItemDescriptor {
    ItemDescriptor {
        id: ItemId::new(id),
        shape_kind,
        shape_args: shape_args.to_vec(),
        position,
        color_rgb,
        title: title.to_string(),
        description: description.to_string(),
        category,
    }
}

/// The bedroom set shown by the viewer.
pub fn bedroom_catalog() -> Vec<ItemDescriptor> {
    use MaterialCategory::{Glossy, Soft, Standard};
    use ShapeKind::{Box, Cylinder};

    let mut items = vec![
        item(
            "bed-frame-base",
            Box,
            &[4.0, 0.3, 6.0],
            [0.0, 0.15, 0.0],
            0x8b4513,
            "Bed Frame Base",
            "Solid wooden bed frame base providing sturdy support for the mattress. Made from premium oak wood with a natural finish.",
            Standard,
        ),
        item(
            "mattress",
            Box,
            &[3.8, 0.4, 5.8],
            [0.0, 0.55, 0.0],
            0xf5f5dc,
            "Mattress",
            "Comfortable memory foam mattress with premium fabric cover. Provides excellent support and comfort for a good night's sleep.",
            Soft,
        ),
        item(
            "headboard",
            Box,
            &[4.2, 1.5, 0.2],
            [0.0, 1.2, -3.1],
            0x654321,
            "Headboard",
            "Elegant wooden headboard with carved details. Adds style and comfort for reading or relaxing in bed.",
            Standard,
        ),
        item(
            "nightstand",
            Box,
            &[1.0, 1.2, 0.8],
            [3.5, 0.6, -1.5],
            0x8b4513,
            "Nightstand",
            "Compact wooden nightstand with storage drawer. Perfect for keeping bedside essentials within reach.",
            Standard,
        ),
        item(
            "lamp-base",
            Cylinder,
            &[0.15, 0.15, 0.1, 16.0],
            [3.5, 1.25, -1.5],
            0x2c3e50,
            "Lamp Base",
            "Weighted metal lamp base providing stability. Features a modern design with brushed finish.",
            Glossy,
        ),
        item(
            "lamp-pole",
            Cylinder,
            &[0.02, 0.02, 1.2, 16.0],
            [3.5, 1.9, -1.5],
            0x34495e,
            "Lamp Pole",
            "Adjustable metal pole connecting the base to the lampshade. Allows for height customization.",
            Glossy,
        ),
        item(
            "lampshade",
            Cylinder,
            &[0.4, 0.3, 0.6, 16.0],
            [3.5, 2.8, -1.5],
            0xf8f9fa,
            "Lampshade",
            "Fabric lampshade that diffuses light beautifully. Creates warm, ambient lighting for the bedroom.",
            Glossy,
        ),
    ];

    let leg_positions = [
        [-1.8, -0.15, -2.8],
        [1.8, -0.15, -2.8],
        [-1.8, -0.15, 2.8],
        [1.8, -0.15, 2.8],
    ];
    for (index, position) in leg_positions.into_iter().enumerate() {
        items.push(item(
            &format!("bed-leg-{}", index + 1),
            Cylinder,
            &[0.08, 0.08, 0.3, 16.0],
            position,
            0x654321,
            "Bed Leg",
            BED_LEG_DESCRIPTION,
            Standard,
        ));
    }

    items
}
