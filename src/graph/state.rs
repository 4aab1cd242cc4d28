use std::sync::Arc;

use crate::graph::{
    provider::{GraphHandle, SceneGraph},
    value::Variant,
};

/// In-memory scene graph.
///
/// Produced by the text scene reader and used directly by tests. Serializes to JSON so a
/// scene can be inspected or stored as a fixture.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneState {
    pub nodes: Vec<SceneNode>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneNode {
    pub name: String,
    /// Empty for scene instances.
    #[serde(default)]
    pub type_name: String,
    /// Engine path: `.` for the root, `./A/B` below it.
    pub path: String,
    #[serde(default)]
    pub properties: Vec<(String, Variant)>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance: Option<Arc<SceneState>>,
}

impl SceneState {
    pub fn builder(root_name: &str, root_type: &str) -> SceneStateBuilder {
        SceneStateBuilder::new(root_name, root_type)
    }

    pub fn into_handle(self) -> GraphHandle {
        Arc::new(self)
    }
}

impl SceneGraph for SceneState {
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn node_name(&self, idx: usize) -> &str {
        &self.nodes[idx].name
    }

    fn node_type(&self, idx: usize) -> &str {
        &self.nodes[idx].type_name
    }

    fn node_path(&self, idx: usize) -> &str {
        &self.nodes[idx].path
    }

    fn property(&self, idx: usize, name: &str) -> Option<&Variant> {
        self.nodes[idx]
            .properties
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
    }

    fn nested_graph(&self, idx: usize) -> Option<GraphHandle> {
        self.nodes[idx]
            .instance
            .clone()
            .map(|state| state as GraphHandle)
    }
}

/// Engine path of a node named `name` under `parent`.
///
/// `parent` is `None` for the scene root and uses the scene-file convention otherwise:
/// `.` for the root, `A/B` for deeper parents.
pub(crate) fn child_path(parent: Option<&str>, name: &str) -> String {
    match parent {
        None => ".".to_string(),
        Some(".") | Some("") => format!("./{name}"),
        Some(p) => format!("./{}/{name}", p.trim_start_matches("./")),
    }
}

/// Fluent construction of a [`SceneState`].
///
/// ```
/// use scene_gen::{SceneState, Variant};
///
/// let scene = SceneState::builder("Player", "Player")
///     .node(".", "Sprite", "Sprite2D")
///     .node(".", "UI", "CanvasLayer")
///     .node("UI", "HealthBar", "ProgressBar")
///     .property("unique_name_in_owner", Variant::Bool(true))
///     .build();
/// assert_eq!(scene.nodes.len(), 4);
/// ```
#[derive(Debug)]
pub struct SceneStateBuilder {
    nodes: Vec<SceneNode>,
}

impl SceneStateBuilder {
    pub fn new(root_name: &str, root_type: &str) -> Self {
        Self {
            nodes: vec![SceneNode {
                name: root_name.to_string(),
                type_name: root_type.to_string(),
                path: child_path(None, root_name),
                properties: Vec::new(),
                instance: None,
            }],
        }
    }

    /// Root that instances another scene (an inherited scene).
    pub fn inherited(root_name: &str, base: Option<Arc<SceneState>>) -> Self {
        let mut builder = Self::new(root_name, "");
        builder.nodes[0].instance = base;
        builder
    }

    pub fn node(mut self, parent: &str, name: &str, type_name: &str) -> Self {
        self.nodes.push(SceneNode {
            name: name.to_string(),
            type_name: type_name.to_string(),
            path: child_path(Some(parent), name),
            properties: Vec::new(),
            instance: None,
        });
        self
    }

    /// Node that instances `scene`. Pass `None` to model an unresolvable instance.
    pub fn instance(mut self, parent: &str, name: &str, scene: Option<Arc<SceneState>>) -> Self {
        self.nodes.push(SceneNode {
            name: name.to_string(),
            type_name: String::new(),
            path: child_path(Some(parent), name),
            properties: Vec::new(),
            instance: scene,
        });
        self
    }

    /// Set a property on the most recently added node.
    pub fn property(mut self, name: &str, value: Variant) -> Self {
        if let Some(node) = self.nodes.last_mut() {
            node.properties.push((name.to_string(), value));
        }
        self
    }

    pub fn build(self) -> SceneState {
        SceneState { nodes: self.nodes }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/graph/state.rs"]
mod tests;
