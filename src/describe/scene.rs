use crate::extract::outlets::{Outlet, extract_outlets};
use crate::graph::{classes::ClassCatalog, provider::LoadedScene};

/// Why a loaded scene produced no description.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DescribeError {
    #[error("scene has no node state")]
    NoState,

    /// The root instances another scene, so there is no type of its own to extend.
    #[error("inherited scene has no root type")]
    InheritedScene,

    #[error("root type '{0}' is an engine class")]
    NotACustomNode(String),
}

impl DescribeError {
    /// Structural skips are normal for most projects; anything else is a real failure.
    pub fn is_expected_skip(&self) -> bool {
        matches!(self, Self::InheritedScene | Self::NotACustomNode(_))
    }
}

/// What the generator knows about one scene whose root is a project-defined class.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SceneDescription {
    pub name: String,
    pub root_type_name: String,
    /// Engine resource path of the scene file.
    pub source_path: String,
    /// Every node below the root, in walk order.
    pub outlets: Vec<Outlet>,
}

impl SceneDescription {
    #[tracing::instrument(skip_all, fields(path = %scene.resource_path))]
    pub fn describe(scene: &LoadedScene, catalog: &ClassCatalog) -> Result<Self, DescribeError> {
        let graph = scene.state.as_ref().ok_or(DescribeError::NoState)?;
        if graph.node_count() == 0 {
            return Err(DescribeError::NoState);
        }

        let root_type_name = graph.node_type(0);
        if root_type_name.is_empty() {
            return Err(DescribeError::InheritedScene);
        }
        if catalog.is_engine_class(root_type_name) {
            return Err(DescribeError::NotACustomNode(root_type_name.to_owned()));
        }

        let outlets = extract_outlets(graph);
        tracing::debug!(outlets = outlets.len(), root = root_type_name, "described scene");

        Ok(Self {
            name: graph.node_name(0).to_owned(),
            root_type_name: root_type_name.to_owned(),
            source_path: scene.resource_path.clone(),
            outlets,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/describe/scene.rs"]
mod tests;
