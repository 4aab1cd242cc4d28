use std::collections::HashMap;

use super::*;
use crate::graph::{provider::LoadedScene, state::SceneState};
use crate::render::swift::SwiftRenderer;

#[derive(Default)]
struct MapLoader {
    scenes: HashMap<String, Option<SceneState>>,
    loads: Vec<String>,
}

impl MapLoader {
    fn with(mut self, path: &str, state: Option<SceneState>) -> Self {
        self.scenes.insert(path.to_owned(), state);
        self
    }
}

impl SceneLoader for MapLoader {
    fn load_scene(&mut self, project_relative_path: &str) -> SceneGenResult<LoadedScene> {
        self.loads.push(project_relative_path.to_owned());
        let state = self
            .scenes
            .get(project_relative_path)
            .ok_or_else(|| SceneGenError::load(format!("no scene at {project_relative_path}")))?;
        Ok(LoadedScene {
            resource_path: format!("res://{project_relative_path}"),
            state: state.clone().map(SceneState::into_handle),
        })
    }
}

fn project(files: &[&str]) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    for rel in files {
        let path = dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, "").unwrap();
    }
    dir
}

fn player() -> SceneState {
    SceneState::builder("Player", "Player")
        .node(".", "Sprite", "Sprite2D")
        .build()
}

#[test]
fn counts_generated_skipped_and_failed() {
    let root = project(&[
        "player.tscn",
        "world.tscn",
        "boss.tscn",
        "empty.tscn",
        "broken.tscn",
    ]);
    let out = tempfile::tempdir().unwrap();
    let mut loader = MapLoader::default()
        .with("player.tscn", Some(player()))
        .with("world.tscn", Some(SceneState::builder("World", "Node2D").build()))
        .with(
            "boss.tscn",
            Some(crate::graph::state::SceneStateBuilder::inherited("Boss", None).build()),
        )
        .with("empty.tscn", None);

    let summary = generate_with(
        &mut loader,
        &SwiftRenderer::default(),
        &ProjectSettings::from_names(["input/jump"]),
        root.path(),
        out.path(),
        &GenConfig::default(),
    )
    .unwrap();

    assert_eq!(
        summary,
        RunSummary {
            generated: 1,
            skipped: 2,
            failed: 2,
        }
    );
    // Scenes are visited in sorted order.
    assert_eq!(
        loader.loads,
        vec![
            "boss.tscn",
            "broken.tscn",
            "empty.tscn",
            "player.tscn",
            "world.tscn"
        ]
    );

    let mut files: Vec<_> = std::fs::read_dir(out.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    files.sort();
    assert_eq!(
        files,
        vec![
            "InputMapHelpers.swift",
            "Player+SceneInterface.swift",
            "SceneGenShared.swift"
        ]
    );
}

#[test]
fn output_folder_is_reset() {
    let root = project(&[]);
    let out = tempfile::tempdir().unwrap();
    std::fs::write(out.path().join("Stale+SceneInterface.swift"), "old").unwrap();

    generate_with(
        &mut MapLoader::default(),
        &SwiftRenderer::default(),
        &ProjectSettings::default(),
        root.path(),
        out.path(),
        &GenConfig::default(),
    )
    .unwrap();

    assert!(!out.path().join("Stale+SceneInterface.swift").exists());
    assert!(out.path().join("SceneGenShared.swift").exists());
}

#[test]
fn refuses_output_folder_containing_project() {
    let outer = tempfile::tempdir().unwrap();
    let root = outer.path().join("game");
    std::fs::create_dir_all(&root).unwrap();

    let err = generate_with(
        &mut MapLoader::default(),
        &SwiftRenderer::default(),
        &ProjectSettings::default(),
        &root,
        outer.path(),
        &GenConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, SceneGenError::Config(_)));
    assert!(root.exists());
}

#[test]
fn second_scene_with_same_root_type_fails() {
    let root = project(&["a.tscn", "b.tscn"]);
    let out = tempfile::tempdir().unwrap();
    let mut loader = MapLoader::default()
        .with("a.tscn", Some(player()))
        .with("b.tscn", Some(player()));

    let summary = generate_with(
        &mut loader,
        &SwiftRenderer::default(),
        &ProjectSettings::default(),
        root.path(),
        out.path(),
        &GenConfig::default(),
    )
    .unwrap();
    assert_eq!(summary.generated, 1);
    assert_eq!(summary.failed, 1);

    let text = std::fs::read_to_string(out.path().join("Player+SceneInterface.swift")).unwrap();
    assert!(text.contains("res://a.tscn"));
}

#[test]
fn strict_mode_fails_scenes_with_colliding_identifiers() {
    let colliding = SceneState::builder("Hud", "Hud")
        .node(".", "A", "Node")
        .node("A", "Score", "Label")
        .property("unique_name_in_owner", true.into())
        .node(".", "B", "Node")
        .node("B", "Score", "Label")
        .property("unique_name_in_owner", true.into())
        .build();
    let root = project(&["hud.tscn"]);

    for (strict, generated, failed) in [(false, 1, 0), (true, 0, 1)] {
        let out = tempfile::tempdir().unwrap();
        let mut loader = MapLoader::default().with("hud.tscn", Some(colliding.clone()));
        let cfg = GenConfig {
            strict,
            ..GenConfig::default()
        };
        let summary = generate_with(
            &mut loader,
            &SwiftRenderer::default(),
            &ProjectSettings::default(),
            root.path(),
            out.path(),
            &cfg,
        )
        .unwrap();
        assert_eq!((summary.generated, summary.failed), (generated, failed));
    }
}

#[test]
fn scene_model_builds_groups() {
    let mut loader = MapLoader::default().with("player.tscn", Some(player()));
    let model = scene_model(&mut loader, &ClassCatalog::builtin(), "player.tscn").unwrap();
    assert_eq!(model.root_type_name, "Player");
    assert_eq!(model.groups[0].type_name, "Sprite2D");
}

#[test]
fn write_source_replaces_existing_file() {
    let out = tempfile::tempdir().unwrap();
    let file = SourceFile {
        file_name: "A.swift".into(),
        text: "one".into(),
    };
    write_source(out.path(), &file).unwrap();
    let path = write_source(
        out.path(),
        &SourceFile {
            text: "two".into(),
            ..file
        },
    )
    .unwrap();
    assert_eq!(std::fs::read_to_string(path).unwrap(), "two");
}

#[cfg(unix)]
#[test]
fn written_sources_are_world_readable() {
    use std::os::unix::fs::PermissionsExt as _;

    let out = tempfile::tempdir().unwrap();
    let path = write_source(
        out.path(),
        &SourceFile {
            file_name: "A.swift".into(),
            text: "one".into(),
        },
    )
    .unwrap();
    let mode = std::fs::metadata(path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o644);
}
