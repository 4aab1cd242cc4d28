//! scene-gen generates typed node accessors for Godot scenes.
//!
//! For every scene whose root node is a project-defined class, scene-gen emits a Swift
//! extension on that class (for SwiftGodot) exposing each node of the scene as a typed
//! constant, plus typed animation names for animation players. It also emits typed
//! names for the project's input actions.
//!
//! # Pipeline overview
//!
//! 1. **Load**: a [`SceneLoader`] turns a scene file into a [`SceneGraph`]
//!    ([`TscnLoader`] reads the engine's text format)
//! 2. **Extract**: [`extract_outlets`] walks the graph, entering nested scene instances
//! 3. **Describe**: [`SceneDescription::describe`] checks the root and collects outlets
//! 4. **Model**: [`CodeModel::build`] groups outlets by type in a fixed order
//! 5. **Render**: a [`Renderer`] turns the model into a [`SourceFile`]
//!
//! [`generate`] runs the whole pipeline over a project directory.
#![forbid(unsafe_code)]

mod describe;
mod driver;
mod extract;
mod foundation;
mod godot;
mod graph;
mod model;
mod naming;
mod render;
mod text;

pub use describe::scene::{DescribeError, SceneDescription};
pub use driver::config::GenConfig;
pub use driver::discover::discover_scenes;
pub use driver::run::{RunSummary, generate, generate_with, scene_model};
pub use extract::outlets::{ANIMATION_PLAYER_TYPE, Outlet, extract_outlets};
pub use foundation::error::{SceneGenError, SceneGenResult};
pub use godot::loader::TscnLoader;
pub use godot::project::{PROJECT_FILE, ProjectSettings};
pub use graph::classes::ClassCatalog;
pub use graph::provider::{GraphHandle, LoadedScene, SceneGraph, SceneLoader};
pub use graph::state::{SceneNode, SceneState, SceneStateBuilder};
pub use graph::value::{ANIMATION_LIBRARY_TYPE, Resource, Variant};
pub use model::code::{AnimationPlayerDescription, CodeModel, OutletGroup};
pub use model::input::{InputActionName, PropertyName, input_actions};
pub use naming::ident::{drop_prefix, path_to_symbol, snake_to_camel, token_name};
pub use render::source::{Renderer, SourceFile};
pub use render::swift::{DEFAULT_INPUT_FILE_NAME, DEFAULT_SHARED_FILE_NAME, SwiftRenderer};
