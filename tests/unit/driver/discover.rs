use super::*;

fn touch(root: &Path, rel: &str) {
    let path = root.join(rel);
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).unwrap();
    }
    std::fs::write(path, "").unwrap();
}

#[test]
fn finds_scenes_sorted_with_forward_slashes() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "zeta.tscn");
    touch(dir.path(), "levels/one.tscn");
    touch(dir.path(), "levels/imported.escn");
    touch(dir.path(), "levels/theme.tres");
    touch(dir.path(), "alpha.tscn");

    let found = discover_scenes(dir.path(), &GenConfig::default());
    assert_eq!(
        found,
        vec![
            "alpha.tscn",
            "levels/imported.escn",
            "levels/one.tscn",
            "zeta.tscn"
        ]
    );
}

#[test]
fn prunes_hidden_and_ignored_directories() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "main.tscn");
    touch(dir.path(), ".godot/imported/cache.tscn");
    touch(dir.path(), "addons/tool/.gdignore");
    touch(dir.path(), "addons/tool/panel.tscn");
    touch(dir.path(), "addons/tool/deep/more.tscn");
    touch(dir.path(), "addons/other/dock.tscn");
    touch(dir.path(), ".hidden.tscn");

    let found = discover_scenes(dir.path(), &GenConfig::default());
    assert_eq!(found, vec!["addons/other/dock.tscn", "main.tscn"]);
}

#[test]
fn honours_configured_extensions_and_marker() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "a.scn");
    touch(dir.path(), "b.tscn");
    touch(dir.path(), "skip/.nogen");
    touch(dir.path(), "skip/c.scn");

    let cfg = GenConfig {
        scene_extensions: vec!["scn".into()],
        ignore_marker: ".nogen".into(),
        ..GenConfig::default()
    };
    assert_eq!(discover_scenes(dir.path(), &cfg), vec!["a.scn"]);
}
