use super::*;

#[test]
fn builtin_knows_common_nodes() {
    let catalog = ClassCatalog::builtin();
    assert!(catalog.is_engine_class("Node2D"));
    assert!(catalog.is_engine_class("CharacterBody3D"));
    assert!(catalog.is_engine_class("AnimationPlayer"));
    assert!(!catalog.is_engine_class("Player"));
    assert!(!catalog.is_engine_class(""));
}

#[test]
fn extra_classes_extend_catalog() {
    let catalog = ClassCatalog::empty().with_extra(["MyPluginNode"]);
    assert!(catalog.is_engine_class("MyPluginNode"));
    assert!(!catalog.is_engine_class("Node"));
}

#[test]
fn builtin_list_has_no_duplicates() {
    let mut sorted = BUILTIN_NODE_CLASSES.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), BUILTIN_NODE_CLASSES.len());
}

#[test]
fn builtin_covers_3d_xr_joint_and_multiplayer_nodes() {
    let catalog = ClassCatalog::builtin();
    for name in [
        "Decal",
        "FogVolume",
        "LightmapGI",
        "OccluderInstance3D",
        "SoftBody3D",
        "XROrigin3D",
        "XRCamera3D",
        "XRController3D",
        "XRAnchor3D",
        "HingeJoint3D",
        "PinJoint3D",
        "Generic6DOFJoint3D",
        "DampedSpringJoint2D",
        "GrooveJoint2D",
        "SkeletonModifier3D",
        "LookAtModifier3D",
        "SpringBoneSimulator3D",
        "MultiplayerSpawner",
        "MultiplayerSynchronizer",
        "ResourcePreloader",
        "ShaderGlobalsOverride",
        "StatusIndicator",
        "GraphFrame",
        "MissingNode",
    ] {
        assert!(catalog.is_engine_class(name), "{name} should be an engine class");
    }
}

#[test]
fn builtin_list_is_sorted() {
    assert!(BUILTIN_NODE_CLASSES.windows(2).all(|w| w[0] < w[1]));
}
