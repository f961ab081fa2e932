use std::collections::HashMap;
use crate::assets::manifest::AssetManifest;
use crate::components::material::TextureSlot;

/// Registry of named textures, built from an AssetManifest.
/// Slot numbers follow manifest order, so Rust and the host loader agree
/// on which image lands in which array layer without negotiation.
pub struct TextureRegistry {
    slots: HashMap<String, TextureSlot>,
}

impl TextureRegistry {
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }

    /// Build a registry from a parsed AssetManifest.
    pub fn from_manifest(manifest: &AssetManifest) -> Self {
        let mut slots = HashMap::with_capacity(manifest.textures.len());
        for (index, desc) in manifest.textures.iter().enumerate() {
            slots.insert(desc.name.clone(), TextureSlot(index as u32));
        }
        log::debug!("texture registry: {} slots", slots.len());
        Self { slots }
    }

    /// Look up a texture slot by name. Returns None if not found; callers
    /// treat that as an untextured surface rather than an error.
    pub fn get(&self, name: &str) -> Option<TextureSlot> {
        self.slots.get(name).copied()
    }

    /// Number of registered textures.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl Default for TextureRegistry {
    fn default() -> Self {
        Self::new()
    }
}
