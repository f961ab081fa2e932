use serde::{Deserialize, Serialize};

/// Asset manifest describing every texture the scene references.
/// Serialized to JSON for the host's loader; the entry order is the wire
/// order — texture N in this list occupies renderer slot N.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetManifest {
    /// Named textures, in slot order.
    pub textures: Vec<TextureDescriptor>,
    /// Cube-map face paths for the starfield skybox (+x, -x, +y, -y, +z, -z).
    /// Empty when the scene has no skybox.
    #[serde(default)]
    pub skybox: Vec<String>,
}

/// One named texture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextureDescriptor {
    /// Lookup name used by body specs (e.g., "earth").
    pub name: String,
    /// Relative path to the image file (e.g., "./image/earth.jpg").
    pub path: String,
}

impl AssetManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize to JSON for the host loader.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Append a texture entry. Returns `self` for chained construction.
    pub fn with_texture(mut self, name: impl Into<String>, path: impl Into<String>) -> Self {
        self.textures.push(TextureDescriptor {
            name: name.into(),
            path: path.into(),
        });
        self
    }

    /// Set the six skybox face paths.
    pub fn with_skybox(mut self, faces: Vec<String>) -> Self {
        self.skybox = faces;
        self
    }
}
