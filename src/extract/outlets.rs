//! Outlet extraction: one typed, named entry per addressable node of a scene.
//!
//! The walk is depth-first in node-index order. Nested scene instances are entered in
//! place, so every node of an instanced scene is listed right after the instance node
//! and before the instance's later siblings. Paths inside a nested scene are prefixed
//! with the instance node's path.

use std::sync::Arc;

use crate::graph::provider::{GraphHandle, SceneGraph};
use crate::naming::ident::path_to_symbol;

pub const ANIMATION_PLAYER_TYPE: &str = "AnimationPlayer";

const UNIQUE_NAME_IN_OWNER: &str = "unique_name_in_owner";
const LIBRARIES: &str = "libraries";

/// Deepest chain of nested instances entered below one scene root.
pub(crate) const MAX_INSTANCE_DEPTH: usize = 64;

/// An addressable node reachable from a scene root.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Outlet {
    /// Path segments from the scene root; never empty.
    pub node_path: Vec<String>,
    pub identifier: String,
    pub type_name: String,
    /// Animation names for animation players, empty otherwise.
    pub options: Vec<String>,
}

impl Outlet {
    /// Path in the engine's `A/B/C` notation.
    pub fn joined_path(&self) -> String {
        self.node_path.join("/")
    }
}

struct Frame {
    graph: GraphHandle,
    prefix: Vec<String>,
    next: usize,
}

/// Outlets for every node below the root of `graph`.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn extract_outlets(graph: &GraphHandle) -> Vec<Outlet> {
    let mut outlets = Vec::new();
    let mut stack = vec![Frame {
        graph: graph.clone(),
        prefix: Vec::new(),
        next: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        if frame.next >= frame.graph.node_count() {
            stack.pop();
            continue;
        }
        let idx = frame.next;
        frame.next += 1;

        let g = frame.graph.clone();
        let prefix = frame.prefix.clone();

        let mut structural = prefix.clone();
        structural.extend(own_path_segments(g.node_path(idx)));

        let type_name = g.node_type(idx);
        if type_name.is_empty() {
            match g.nested_graph(idx) {
                Some(nested) if stack.iter().any(|f| Arc::ptr_eq(&f.graph, &nested)) => {
                    tracing::warn!(
                        path = %structural.join("/"),
                        "nested scene instances itself, skipping subtree"
                    );
                }
                Some(_) if stack.len() > MAX_INSTANCE_DEPTH => {
                    tracing::warn!(
                        path = %structural.join("/"),
                        max = MAX_INSTANCE_DEPTH,
                        "nested scenes too deep, skipping subtree"
                    );
                }
                Some(nested) => stack.push(Frame {
                    graph: nested,
                    prefix: structural,
                    next: 0,
                }),
                None => {
                    tracing::warn!(
                        path = %structural.join("/"),
                        "nested scene unavailable, skipping subtree"
                    );
                }
            }
            continue;
        }

        // The top-level root.
        if structural.is_empty() {
            continue;
        }

        let identifier = if is_unique_name_in_owner(&*g, idx) {
            let mut naming = prefix;
            naming.push(g.node_name(idx).to_owned());
            path_to_symbol(&naming)
        } else {
            path_to_symbol(&structural)
        };

        let options = if type_name == ANIMATION_PLAYER_TYPE {
            first_library_animations(&*g, idx)
        } else {
            Vec::new()
        };

        outlets.push(Outlet {
            node_path: structural,
            identifier,
            type_name: type_name.to_owned(),
            options,
        });
    }

    outlets
}

/// `.` -> `[]`, `./A/B` -> `["A", "B"]`
pub(crate) fn own_path_segments(path: &str) -> Vec<String> {
    let rest = path.strip_prefix("./").unwrap_or(path);
    if rest == "." {
        return Vec::new();
    }
    rest.split('/')
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

fn is_unique_name_in_owner(graph: &dyn SceneGraph, idx: usize) -> bool {
    graph
        .property(idx, UNIQUE_NAME_IN_OWNER)
        .and_then(|v| v.as_bool())
        .unwrap_or(false)
}

fn first_library_animations(graph: &dyn SceneGraph, idx: usize) -> Vec<String> {
    graph
        .property(idx, LIBRARIES)
        .and_then(|v| v.as_dictionary())
        .and_then(|entries| entries.first())
        .and_then(|(_, library)| library.as_resource())
        .and_then(|library| library.animation_names())
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "../../tests/unit/extract/outlets.rs"]
mod tests;
