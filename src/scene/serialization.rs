use crate::scene::{ItemDescriptor, ItemId, MaterialCategory, ShapeKind};
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SerializationError>;

/// On-disk catalog entry. Same shape as [`ItemDescriptor`] except that the
/// material category may be left out and is then derived from the id.
#[derive(serde::Deserialize)]
struct CatalogEntry {
    id: ItemId,
    shape: ShapeKind,
    #[serde(default)]
    args: Vec<f32>,
    position: [f32; 3],
    color: u32,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    category: Option<MaterialCategory>,
}

impl From<CatalogEntry> for ItemDescriptor {
    fn from(entry: CatalogEntry) -> Self {
        let category = entry
            .category
            .unwrap_or_else(|| MaterialCategory::from_item_id(entry.id.as_str()));
        Self {
            id: entry.id,
            shape_kind: entry.shape,
            shape_args: entry.args,
            position: entry.position,
            color_rgb: entry.color,
            title: entry.title,
            description: entry.description,
            category,
        }
    }
}

pub fn catalog_from_json(json: &str) -> Result<Vec<ItemDescriptor>> {
    let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;
    Ok(entries.into_iter().map(ItemDescriptor::from).collect())
}

pub fn save_catalog_to_file(catalog: &[ItemDescriptor], path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(catalog)?;
    std::fs::write(path, json)?;
    Ok(())
}

pub fn load_catalog_from_file(path: &Path) -> Result<Vec<ItemDescriptor>> {
    let json = std::fs::read_to_string(path)?;
    catalog_from_json(&json)
}
