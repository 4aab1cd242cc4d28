use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::foundation::error::{SceneGenError, SceneGenResult};
use crate::godot::scene_file::{ExtResolver, ExtResourceRef, SceneFile};
use crate::graph::{
    provider::{GraphHandle, LoadedScene, SceneLoader},
    state::SceneState,
    value::{ANIMATION_LIBRARY_TYPE, Variant},
};

const RES_SCHEME: &str = "res://";

/// Loads text scenes (`.tscn`/`.escn`) from a project directory.
///
/// Instanced scenes are loaded recursively and shared between every scene that
/// instances them. External animation libraries (`.tres`) are resolved so animation
/// players report their clips.
#[derive(Debug)]
pub struct TscnLoader {
    project_root: PathBuf,
    scenes: HashMap<String, Option<Arc<SceneState>>>,
    // Scenes currently being assembled, innermost last.
    loading: Vec<String>,
}

impl TscnLoader {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            scenes: HashMap::new(),
            loading: Vec::new(),
        }
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    fn fs_path(&self, res_path: &str) -> SceneGenResult<PathBuf> {
        let rel = res_path.strip_prefix(RES_SCHEME).ok_or_else(|| {
            SceneGenError::load(format!("unsupported resource path '{res_path}'"))
        })?;
        Ok(self.project_root.join(rel))
    }

    fn read(&self, res_path: &str) -> SceneGenResult<SceneFile> {
        let fs_path = self.fs_path(res_path)?;
        let src = std::fs::read_to_string(&fs_path)
            .map_err(|e| SceneGenError::io(fs_path.clone(), e))?;
        SceneFile::parse(&src).map_err(|e| SceneGenError::parse(fs_path, e.to_string()))
    }

    fn load_state(&mut self, res_path: &str) -> SceneGenResult<Option<Arc<SceneState>>> {
        if let Some(cached) = self.scenes.get(res_path) {
            return Ok(cached.clone());
        }
        if self.loading.iter().any(|p| p == res_path) {
            return Err(SceneGenError::load(format!(
                "scene '{res_path}' instances itself"
            )));
        }

        let file = self.read(res_path)?;
        if !file.has_nodes() {
            self.scenes.insert(res_path.to_owned(), None);
            return Ok(None);
        }

        self.loading.push(res_path.to_owned());
        let state = file.into_state(&mut Resolver {
            loader: self,
            base_dir: parent_dir(res_path),
        });
        self.loading.pop();

        let state = Arc::new(state);
        tracing::debug!(
            path = res_path,
            nodes = state.nodes.len(),
            "assembled scene"
        );
        self.scenes.insert(res_path.to_owned(), Some(state.clone()));
        Ok(Some(state))
    }

    fn load_animation_library(&mut self, res_path: &str) -> SceneGenResult<Option<Variant>> {
        let file = self.read(res_path)?;
        let resource = file.into_resource(
            res_path,
            &mut Resolver {
                loader: self,
                base_dir: parent_dir(res_path),
            },
        );
        Ok(resource.map(Variant::from))
    }
}

impl SceneLoader for TscnLoader {
    fn load_scene(&mut self, project_relative_path: &str) -> SceneGenResult<LoadedScene> {
        let rel = project_relative_path
            .replace('\\', "/")
            .trim_start_matches("./")
            .to_owned();
        let resource_path = format!("{RES_SCHEME}{rel}");
        let state = self.load_state(&resource_path)?;
        Ok(LoadedScene {
            resource_path,
            state: state.map(|s| s as GraphHandle),
        })
    }
}

struct Resolver<'a> {
    loader: &'a mut TscnLoader,
    base_dir: String,
}

impl Resolver<'_> {
    fn absolute(&self, path: &str) -> String {
        if path.starts_with(RES_SCHEME) {
            path.to_owned()
        } else {
            format!("{}{path}", self.base_dir)
        }
    }
}

impl ExtResolver for Resolver<'_> {
    fn resource(&mut self, ext: &ExtResourceRef) -> Option<Variant> {
        if ext.type_name != ANIMATION_LIBRARY_TYPE {
            return None;
        }
        let path = self.absolute(&ext.path);
        match self.loader.load_animation_library(&path) {
            Ok(v) => v,
            Err(err) => {
                tracing::warn!(path = %path, error = %err, "animation library not loaded");
                None
            }
        }
    }

    fn scene(&mut self, ext: &ExtResourceRef) -> Option<Arc<SceneState>> {
        if ext.type_name != "PackedScene" {
            return None;
        }
        let path = self.absolute(&ext.path);
        match self.loader.load_state(&path) {
            Ok(state) => state,
            Err(err) => {
                tracing::warn!(path = %path, error = %err, "instanced scene not loaded");
                None
            }
        }
    }
}

/// `res://a/b.tscn` -> `res://a/`
fn parent_dir(res_path: &str) -> String {
    match res_path.rfind('/') {
        Some(i) => res_path[..=i].to_owned(),
        None => RES_SCHEME.to_owned(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/godot/loader.rs"]
mod tests;
