use std::{collections::HashMap, sync::Arc};

use crate::graph::{
    state::{SceneNode, SceneState, child_path},
    value::{Resource, Variant},
};
use crate::text::{
    error::ParseError,
    parser::{Section, parse_document, resource_id},
};

/// `[ext_resource]` declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ExtResourceRef {
    pub(crate) type_name: String,
    pub(crate) path: String,
}

/// Resolves references to other files while a scene is assembled.
pub(crate) trait ExtResolver {
    /// Value for a non-scene external resource; `None` keeps the reference as-is.
    fn resource(&mut self, ext: &ExtResourceRef) -> Option<Variant>;

    /// Graph of an instanced scene; `None` leaves the instance unresolved.
    fn scene(&mut self, ext: &ExtResourceRef) -> Option<Arc<SceneState>>;
}

#[derive(Debug)]
struct NodeDecl {
    name: String,
    type_name: String,
    parent: Option<String>,
    instance: Option<String>,
    properties: Vec<(String, Variant)>,
}

/// Parsed but unresolved text scene or resource file.
#[derive(Debug, Default)]
pub(crate) struct SceneFile {
    ext_resources: HashMap<String, ExtResourceRef>,
    sub_resources: Vec<(String, Resource)>,
    nodes: Vec<NodeDecl>,
    resource: Option<Resource>,
}

// Sub-resources may nest other sub-resources; real files stay far below this.
const MAX_RESOLVE_DEPTH: usize = 32;

impl SceneFile {
    pub(crate) fn parse(src: &str) -> Result<Self, ParseError> {
        let mut file = SceneFile::default();
        let mut resource_type = None;

        for section in parse_document(src)? {
            match section.tag.as_str() {
                "ext_resource" => {
                    let id = required_id(&section)?;
                    file.ext_resources.insert(
                        id,
                        ExtResourceRef {
                            type_name: section.attr_str("type").unwrap_or_default().to_owned(),
                            path: section.attr_str("path").unwrap_or_default().to_owned(),
                        },
                    );
                }
                "sub_resource" => {
                    let id = required_id(&section)?;
                    let type_name = section.attr_str("type").unwrap_or_default().to_owned();
                    file.sub_resources.push((
                        id,
                        Resource {
                            type_name,
                            path: None,
                            properties: section.props,
                        },
                    ));
                }
                "node" => file.nodes.push(node_decl(section, file.nodes.is_empty())?),
                "resource" => {
                    file.resource = Some(Resource {
                        type_name: String::new(),
                        path: None,
                        properties: section.props,
                    });
                }
                "gd_resource" => {
                    resource_type = section.attr_str("type").map(str::to_owned);
                }
                // Scene headers, signal connections and editable-children markers carry
                // nothing the scene graph exposes.
                _ => {}
            }
        }

        if let (Some(main), Some(type_name)) = (file.resource.as_mut(), resource_type) {
            main.type_name = type_name;
        }

        Ok(file)
    }

    pub(crate) fn has_nodes(&self) -> bool {
        !self.nodes.is_empty()
    }

    /// Resolve every reference and build the in-memory graph.
    pub(crate) fn into_state(self, resolver: &mut dyn ExtResolver) -> SceneState {
        let subs = self.resolve_sub_resources(resolver);
        let mut nodes = Vec::with_capacity(self.nodes.len());

        for decl in self.nodes {
            let instance = decl
                .instance
                .as_ref()
                .and_then(|id| self.ext_resources.get(id))
                .and_then(|ext| resolver.scene(ext));

            let properties = decl
                .properties
                .into_iter()
                .map(|(k, v)| {
                    let v = resolve_value(v, &subs, &self.ext_resources, resolver, 0);
                    (k, v)
                })
                .collect();

            nodes.push(SceneNode {
                path: child_path(decl.parent.as_deref(), &decl.name),
                name: decl.name,
                type_name: decl.type_name,
                properties,
                instance,
            });
        }

        SceneState { nodes }
    }

    /// Resolve the main `[resource]` of a `.tres` file.
    pub(crate) fn into_resource(
        mut self,
        path: &str,
        resolver: &mut dyn ExtResolver,
    ) -> Option<Resource> {
        let main = self.resource.take()?;
        let subs = self.resolve_sub_resources(resolver);
        let properties = main
            .properties
            .into_iter()
            .map(|(k, v)| {
                let v = resolve_value(v, &subs, &self.ext_resources, resolver, 0);
                (k, v)
            })
            .collect();
        Some(Resource {
            type_name: main.type_name,
            path: Some(path.to_owned()),
            properties,
        })
    }

    // Sub-resources only reference ones declared before them, so a single pass in file
    // order resolves everything.
    fn resolve_sub_resources(&self, resolver: &mut dyn ExtResolver) -> HashMap<String, Resource> {
        let mut resolved = HashMap::<String, Resource>::with_capacity(self.sub_resources.len());
        for (id, res) in &self.sub_resources {
            let properties = res
                .properties
                .iter()
                .map(|(k, v)| {
                    let v = resolve_value(v.clone(), &resolved, &self.ext_resources, resolver, 0);
                    (k.clone(), v)
                })
                .collect();
            resolved.insert(
                id.clone(),
                Resource {
                    type_name: res.type_name.clone(),
                    path: None,
                    properties,
                },
            );
        }
        resolved
    }
}

fn required_id(section: &Section) -> Result<String, ParseError> {
    section
        .attr("id")
        .map(resource_id)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ParseError::new(section.offset, format!("[{}] without id", section.tag)))
}

fn node_decl(section: Section, is_first: bool) -> Result<NodeDecl, ParseError> {
    let name = section
        .attr_str("name")
        .filter(|n| !n.is_empty())
        .ok_or_else(|| ParseError::new(section.offset, "[node] without name"))?
        .to_owned();
    let parent = section.attr_str("parent").map(str::to_owned);
    if parent.is_none() && !is_first {
        return Err(ParseError::new(
            section.offset,
            format!("node '{name}' has no parent but is not the scene root"),
        ));
    }
    if parent.is_some() && is_first {
        return Err(ParseError::new(
            section.offset,
            format!("scene root '{name}' must not declare a parent"),
        ));
    }

    let instance = match section.attr("instance") {
        Some(Variant::ExtResource(id)) => Some(id.clone()),
        _ => None,
    };

    Ok(NodeDecl {
        type_name: section.attr_str("type").unwrap_or_default().to_owned(),
        name,
        parent,
        instance,
        properties: section.props,
    })
}

fn resolve_value(
    v: Variant,
    subs: &HashMap<String, Resource>,
    exts: &HashMap<String, ExtResourceRef>,
    resolver: &mut dyn ExtResolver,
    depth: usize,
) -> Variant {
    if depth > MAX_RESOLVE_DEPTH {
        return v;
    }
    match v {
        Variant::SubResource(id) => match subs.get(&id) {
            Some(res) => Variant::Resource(Box::new(res.clone())),
            None => {
                tracing::warn!(id = %id, "reference to undeclared sub_resource");
                Variant::SubResource(id)
            }
        },
        Variant::ExtResource(id) => match exts.get(&id).and_then(|ext| resolver.resource(ext)) {
            Some(resolved) => resolved,
            None => Variant::ExtResource(id),
        },
        Variant::Array(items) => Variant::Array(
            items
                .into_iter()
                .map(|item| resolve_value(item, subs, exts, resolver, depth + 1))
                .collect(),
        ),
        Variant::Dictionary(entries) => Variant::Dictionary(
            entries
                .into_iter()
                .map(|(k, item)| (k, resolve_value(item, subs, exts, resolver, depth + 1)))
                .collect(),
        ),
        other => other,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/godot/scene_file.rs"]
mod tests;
