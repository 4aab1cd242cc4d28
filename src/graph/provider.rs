use std::{fmt, sync::Arc};

use crate::{foundation::error::SceneGenResult, graph::value::Variant};

/// Shared handle to a loaded scene graph.
pub type GraphHandle = Arc<dyn SceneGraph>;

/// Read-only view of one loaded scene, indexed by node.
///
/// Index 0 is the scene root. Nodes are listed parents-first, in the order the scene
/// file declares them. Callers must pass `idx < node_count()`.
pub trait SceneGraph: fmt::Debug + Send + Sync {
    fn node_count(&self) -> usize;

    fn node_name(&self, idx: usize) -> &str;

    /// Concrete class name. Empty when the node is an instance of another scene.
    fn node_type(&self, idx: usize) -> &str;

    /// Engine path relative to the owning scene: `.` for the root, `./A/B` below it.
    fn node_path(&self, idx: usize) -> &str;

    fn property(&self, idx: usize, name: &str) -> Option<&Variant>;

    /// Graph of the scene instanced at `idx`, when the node is an instance and its scene
    /// could be resolved.
    fn nested_graph(&self, idx: usize) -> Option<GraphHandle>;
}

/// A scene file as returned by a [`SceneLoader`].
#[derive(Clone, Debug)]
pub struct LoadedScene {
    /// Engine resource path, e.g. `res://player/player.tscn`.
    pub resource_path: String,
    /// `None` when the file holds no node state.
    pub state: Option<GraphHandle>,
}

/// The engine session used to load scenes for one run.
pub trait SceneLoader {
    fn load_scene(&mut self, project_relative_path: &str) -> SceneGenResult<LoadedScene>;
}
