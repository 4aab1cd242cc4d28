use std::path::Path;

use crate::foundation::error::{SceneGenError, SceneGenResult};
use crate::graph::classes::ClassCatalog;
use crate::render::swift::{DEFAULT_INPUT_FILE_NAME, DEFAULT_SHARED_FILE_NAME, SwiftRenderer};

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Settings for one generation run, usually read from a JSON file.
pub struct GenConfig {
    /// File extensions (without dot) treated as scenes.
    pub scene_extensions: Vec<String>,
    /// Directories containing a file with this name are not searched.
    pub ignore_marker: String,
    /// Root types treated like engine classes, e.g. classes registered by addons.
    pub extra_engine_classes: Vec<String>,
    pub shared_file_name: String,
    pub input_file_name: String,
    /// Fail a scene whose outlets collide on an identifier instead of keeping the first.
    pub strict: bool,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            scene_extensions: vec!["tscn".to_owned(), "escn".to_owned()],
            ignore_marker: ".gdignore".to_owned(),
            extra_engine_classes: Vec::new(),
            shared_file_name: DEFAULT_SHARED_FILE_NAME.to_owned(),
            input_file_name: DEFAULT_INPUT_FILE_NAME.to_owned(),
            strict: false,
        }
    }
}

impl GenConfig {
    pub fn from_path(path: &Path) -> SceneGenResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| SceneGenError::io(path, e))?;
        let cfg: Self = serde_json::from_str(&text).map_err(|e| {
            SceneGenError::config(format!("invalid config '{}': {e}", path.display()))
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> SceneGenResult<()> {
        if self.scene_extensions.is_empty() {
            return Err(SceneGenError::config("scene_extensions must not be empty"));
        }
        for ext in &self.scene_extensions {
            if ext.is_empty() || ext.starts_with('.') {
                return Err(SceneGenError::config(format!(
                    "scene extension '{ext}' must be non-empty and given without a dot"
                )));
            }
        }
        if self.ignore_marker.trim().is_empty() {
            return Err(SceneGenError::config("ignore_marker must be non-empty"));
        }
        for (field, name) in [
            ("shared_file_name", &self.shared_file_name),
            ("input_file_name", &self.input_file_name),
        ] {
            if name.trim().is_empty() || name.contains(['/', '\\']) {
                return Err(SceneGenError::config(format!(
                    "{field} must be a plain file name"
                )));
            }
        }
        if self.shared_file_name == self.input_file_name {
            return Err(SceneGenError::config(
                "shared_file_name and input_file_name must differ",
            ));
        }
        Ok(())
    }

    pub fn class_catalog(&self) -> ClassCatalog {
        ClassCatalog::builtin().with_extra(self.extra_engine_classes.iter().cloned())
    }

    pub fn renderer(&self) -> SwiftRenderer {
        SwiftRenderer::new(self.shared_file_name.clone(), self.input_file_name.clone())
    }

    pub(crate) fn is_scene_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| self.scene_extensions.iter().any(|s| s == e))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/driver/config.rs"]
mod tests;
