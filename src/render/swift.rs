//! SwiftGodot bindings.
//!
//! Each scene whose root is a project class gets an extension on that class with a typed
//! `NodeAccessor` per outlet and, for animation players, typed clip names:
//!
//! ```swift
//! let bar = node(.ui_healthBar)          // ProgressBar
//! playAnimation(.idle)
//! ```

use std::collections::{HashMap, HashSet};

use crate::extract::outlets::ANIMATION_PLAYER_TYPE;
use crate::foundation::error::{SceneGenError, SceneGenResult};
use crate::model::{
    code::{AnimationPlayerDescription, CodeModel, OutletGroup},
    input::InputActionName,
};
use crate::naming::ident::snake_to_camel;
use crate::render::{
    source::{Renderer, SourceFile},
    writer::{SourceWriter, string_literal},
};

pub const DEFAULT_SHARED_FILE_NAME: &str = "SceneGenShared.swift";
pub const DEFAULT_INPUT_FILE_NAME: &str = "InputMapHelpers.swift";

const NODE_LOOKUP: &str = r#"func node<NodeType: NodeProtocol>(_ nodeAccessor: NodeAccessor<NodeType>) -> NodeType {
    guard let node = getNodeOrNull(path: .init(stringLiteral: nodeAccessor.path)) else {
        GD.pushError("Tried to access \(nodeAccessor.path) on \(description) but no node was found at that path.")
        return NodeType()
    }

    guard let node = node as? NodeType else {
        GD.pushError("Tried to access \(nodeAccessor.path) on \(description) but the item at that path is a \(node), not a \(NodeType.self)")
        return NodeType()
    }

    return node
}"#;

const INPUT_HELPERS: &str = r#"static func isActionPressed(_ action: InputActionName) -> Bool {
    isActionPressed(action: action.rawValue)
}

static func isActionJustPressed(_ action: InputActionName) -> Bool {
    isActionJustPressed(action: action.rawValue)
}

static func getAxis(negative: InputActionName, positive: InputActionName) -> Double {
    getAxis(negativeAction: negative.rawValue, positiveAction: positive.rawValue)
}"#;

const INPUT_EVENT_HELPERS: &str = r#"func isActionPressed(_ action: InputActionName) -> Bool {
    isActionPressed(action: action.rawValue)
}"#;

#[derive(Clone, Debug)]
pub struct SwiftRenderer {
    shared_file_name: String,
    input_file_name: String,
}

impl Default for SwiftRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_SHARED_FILE_NAME, DEFAULT_INPUT_FILE_NAME)
    }
}

impl SwiftRenderer {
    pub fn new(shared_file_name: impl Into<String>, input_file_name: impl Into<String>) -> Self {
        Self {
            shared_file_name: shared_file_name.into(),
            input_file_name: input_file_name.into(),
        }
    }
}

impl Renderer for SwiftRenderer {
    #[tracing::instrument(skip_all, fields(scene = %model.resource_path))]
    fn render_scene(&self, model: &CodeModel) -> SceneGenResult<SourceFile> {
        let ty = model.root_type_name.as_str();
        if ty.is_empty() {
            return Err(SceneGenError::render(format!(
                "scene '{}' has no root type to extend",
                model.resource_path
            )));
        }

        let mut w = SourceWriter::new();
        header(&mut w, Some(&model.resource_path));

        w.block(&format!("extension {ty}"), |w| {
            w.block("struct NodeAccessor<NodeType: NodeProtocol>", |w| {
                w.line("let path: String");
                w.blank();
                w.block("init(_ path: String)", |w| {
                    w.line("self.path = path");
                });
            });
            w.blank();
            w.lines(NODE_LOOKUP);
            w.blank();
            w.line(&format!(
                "public static let resourcePath = {}",
                string_literal(&model.resource_path)
            ));
            for player in &model.animation_players {
                w.blank();
                raw_value_struct(w, &animation_name_type(player));
            }
        });

        for group in &model.groups {
            w.blank();
            accessor_extension(&mut w, ty, group);
        }

        let kept_players = kept_accessors(model, ANIMATION_PLAYER_TYPE);
        for player in &model.animation_players {
            let name_type = format!("{ty}.{}", animation_name_type(player));
            w.blank();
            w.line(&format!("extension {name_type}: Equatable {{}}"));
            w.blank();
            w.block(&format!("extension {name_type}"), |w| {
                let mut seen = HashSet::new();
                for name in &player.animation_names {
                    let symbol = snake_to_camel(name);
                    if !seen.insert(symbol.clone()) {
                        tracing::warn!(animation = %name, symbol = %symbol, "animation symbol already taken");
                        continue;
                    }
                    w.line(&format!("static let {symbol} = Self({})", string_literal(name)));
                }
            });
            w.blank();
            w.block(&format!("extension {ty}"), |w| {
                w.block(&format!("func playAnimation(_ named: {name_type})"), |w| {
                    w.line(&format!(
                        "node({}).play(name: named.rawValue)",
                        player_accessor(player, &kept_players)
                    ));
                });
            });
        }

        Ok(SourceFile {
            file_name: format!("{ty}+SceneInterface.swift"),
            text: w.finish(),
        })
    }

    fn render_shared(&self) -> SourceFile {
        let mut w = SourceWriter::new();
        header(&mut w, None);
        w.block("protocol NodeProtocol", |w| {
            w.line("init()");
        });
        w.blank();
        w.line("extension Node: NodeProtocol {}");

        SourceFile {
            file_name: self.shared_file_name.clone(),
            text: w.finish(),
        }
    }

    fn render_input_actions(&self, actions: &[InputActionName]) -> SourceFile {
        let mut w = SourceWriter::new();
        header(&mut w, None);
        w.block("extension InputActionName", |w| {
            for action in actions {
                w.line(&format!(
                    "static let {} = Self({})",
                    action.symbol(),
                    string_literal(action.raw())
                ));
            }
        });
        w.blank();
        raw_value_struct(&mut w, "InputActionName");
        w.blank();
        w.line("extension InputActionName: Equatable {}");
        w.blank();
        w.block("extension Input", |w| {
            w.lines(INPUT_HELPERS);
        });
        w.blank();
        w.block("extension InputEvent", |w| {
            w.lines(INPUT_EVENT_HELPERS);
        });

        SourceFile {
            file_name: self.input_file_name.clone(),
            text: w.finish(),
        }
    }
}

fn header(w: &mut SourceWriter, origin: Option<&str>) {
    match origin {
        Some(path) => w.line(&format!(
            "// generated by scene-gen from {path} - do not edit directly"
        )),
        None => w.line("// generated by scene-gen - do not edit directly"),
    };
    w.blank();
    w.line("import SwiftGodot");
    w.blank();
}

fn raw_value_struct(w: &mut SourceWriter, name: &str) {
    w.block(&format!("struct {name}"), |w| {
        w.line("let rawValue: StringName");
        w.blank();
        w.block("init(_ rawValue: StringName)", |w| {
            w.line("self.rawValue = rawValue");
        });
    });
}

/// Identifier -> path of the outlet its accessor was rendered for, within one group.
fn kept_accessors<'a>(model: &'a CodeModel, type_name: &str) -> HashMap<&'a str, String> {
    let mut kept = HashMap::new();
    for group in model.groups.iter().filter(|g| g.type_name == type_name) {
        for outlet in &group.outlets {
            kept.entry(outlet.identifier.as_str())
                .or_insert_with(|| outlet.joined_path());
        }
    }
    kept
}

/// Accessor expression reaching `player`. A player whose identifier went to another
/// node is addressed by its own path.
fn player_accessor(player: &AnimationPlayerDescription, kept: &HashMap<&str, String>) -> String {
    let id = player.player_identifier.as_str();
    if kept.get(id) == Some(&player.player_path) {
        return format!(".{id}");
    }
    tracing::warn!(
        identifier = %id,
        path = %player.player_path,
        "animation player accessor taken by another node, addressing it by path"
    );
    format!(
        "NodeAccessor<{ANIMATION_PLAYER_TYPE}>({})",
        string_literal(&player.player_path)
    )
}

fn animation_name_type(player: &AnimationPlayerDescription) -> String {
    format!("{}AnimationName", player.player_path_key)
}

fn accessor_extension(w: &mut SourceWriter, ty: &str, group: &OutletGroup) {
    w.block(
        &format!("extension {ty}.NodeAccessor<{}>", group.type_name),
        |w| {
            let mut seen = HashSet::new();
            for outlet in &group.outlets {
                if !seen.insert(outlet.identifier.as_str()) {
                    tracing::warn!(
                        identifier = %outlet.identifier,
                        path = %outlet.joined_path(),
                        type_name = %group.type_name,
                        "duplicate outlet identifier, keeping the first"
                    );
                    continue;
                }
                w.line(&format!(
                    "static let {} = Self({})",
                    outlet.identifier,
                    string_literal(&outlet.joined_path())
                ));
            }
        },
    );
}

#[cfg(test)]
#[path = "../../tests/unit/render/swift.rs"]
mod tests;
