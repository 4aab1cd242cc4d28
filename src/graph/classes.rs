use std::collections::BTreeSet;

/// Node-derived classes the engine defines natively, editor nodes included.
///
/// A scene whose root is one of these has no user subclass to extend.
const BUILTIN_NODE_CLASSES: &[&str] = &[
    "AcceptDialog",
    "AimModifier3D",
    "AnimatableBody2D",
    "AnimatableBody3D",
    "AnimatedSprite2D",
    "AnimatedSprite3D",
    "AnimationMixer",
    "AnimationPlayer",
    "AnimationTree",
    "Area2D",
    "Area3D",
    "AspectRatioContainer",
    "AudioListener2D",
    "AudioListener3D",
    "AudioStreamPlayer",
    "AudioStreamPlayer2D",
    "AudioStreamPlayer3D",
    "BackBufferCopy",
    "BaseButton",
    "Bone2D",
    "BoneAttachment3D",
    "BoneConstraint3D",
    "BoxContainer",
    "Button",
    "CPUParticles2D",
    "CPUParticles3D",
    "CSGBox3D",
    "CSGCombiner3D",
    "CSGCylinder3D",
    "CSGMesh3D",
    "CSGPolygon3D",
    "CSGPrimitive3D",
    "CSGShape3D",
    "CSGSphere3D",
    "CSGTorus3D",
    "Camera2D",
    "Camera3D",
    "CanvasGroup",
    "CanvasItem",
    "CanvasLayer",
    "CanvasModulate",
    "CenterContainer",
    "CharacterBody2D",
    "CharacterBody3D",
    "CheckBox",
    "CheckButton",
    "CodeEdit",
    "CollisionObject2D",
    "CollisionObject3D",
    "CollisionPolygon2D",
    "CollisionPolygon3D",
    "CollisionShape2D",
    "CollisionShape3D",
    "ColorPicker",
    "ColorPickerButton",
    "ColorRect",
    "ConeTwistJoint3D",
    "ConfirmationDialog",
    "Container",
    "Control",
    "ConvertTransformModifier3D",
    "CopyTransformModifier3D",
    "DampedSpringJoint2D",
    "Decal",
    "DirectionalLight2D",
    "DirectionalLight3D",
    "EditorCommandPalette",
    "EditorFileDialog",
    "EditorFileSystem",
    "EditorInspector",
    "EditorPlugin",
    "EditorProperty",
    "EditorResourcePicker",
    "EditorResourcePreview",
    "EditorScriptPicker",
    "EditorSpinSlider",
    "EditorToaster",
    "FileDialog",
    "FileSystemDock",
    "FlowContainer",
    "FogVolume",
    "FoldableContainer",
    "GPUParticles2D",
    "GPUParticles3D",
    "GPUParticlesAttractor3D",
    "GPUParticlesAttractorBox3D",
    "GPUParticlesAttractorSphere3D",
    "GPUParticlesAttractorVectorField3D",
    "GPUParticlesCollision3D",
    "GPUParticlesCollisionBox3D",
    "GPUParticlesCollisionHeightField3D",
    "GPUParticlesCollisionSDF3D",
    "GPUParticlesCollisionSphere3D",
    "Generic6DOFJoint3D",
    "GeometryInstance3D",
    "GraphEdit",
    "GraphElement",
    "GraphFrame",
    "GraphNode",
    "GridContainer",
    "GridMap",
    "GrooveJoint2D",
    "HBoxContainer",
    "HFlowContainer",
    "HScrollBar",
    "HSeparator",
    "HSlider",
    "HSplitContainer",
    "HTTPRequest",
    "HingeJoint3D",
    "ImporterMeshInstance3D",
    "InstancePlaceholder",
    "ItemList",
    "Joint2D",
    "Joint3D",
    "Label",
    "Label3D",
    "Light2D",
    "Light3D",
    "LightOccluder2D",
    "LightmapGI",
    "LightmapProbe",
    "Line2D",
    "LineEdit",
    "LinkButton",
    "LookAtModifier3D",
    "MarginContainer",
    "Marker2D",
    "Marker3D",
    "MenuBar",
    "MenuButton",
    "MeshInstance2D",
    "MeshInstance3D",
    "MissingNode",
    "ModifierBoneTarget3D",
    "MultiMeshInstance2D",
    "MultiMeshInstance3D",
    "MultiplayerSpawner",
    "MultiplayerSynchronizer",
    "NavigationAgent2D",
    "NavigationAgent3D",
    "NavigationLink2D",
    "NavigationLink3D",
    "NavigationObstacle2D",
    "NavigationObstacle3D",
    "NavigationRegion2D",
    "NavigationRegion3D",
    "NinePatchRect",
    "Node",
    "Node2D",
    "Node3D",
    "OccluderInstance3D",
    "OmniLight3D",
    "OpenXRCompositionLayer",
    "OpenXRCompositionLayerCylinder",
    "OpenXRCompositionLayerEquirect",
    "OpenXRCompositionLayerQuad",
    "OpenXRHand",
    "OpenXRVisibilityMask",
    "OptionButton",
    "Panel",
    "PanelContainer",
    "Parallax2D",
    "ParallaxBackground",
    "ParallaxLayer",
    "Path2D",
    "Path3D",
    "PathFollow2D",
    "PathFollow3D",
    "PhysicalBone2D",
    "PhysicalBone3D",
    "PhysicalBoneSimulator3D",
    "PhysicsBody2D",
    "PhysicsBody3D",
    "PinJoint2D",
    "PinJoint3D",
    "PointLight2D",
    "Polygon2D",
    "Popup",
    "PopupMenu",
    "PopupPanel",
    "ProgressBar",
    "Range",
    "RayCast2D",
    "RayCast3D",
    "ReferenceRect",
    "ReflectionProbe",
    "RemoteTransform2D",
    "RemoteTransform3D",
    "ResourcePreloader",
    "RetargetModifier3D",
    "RichTextLabel",
    "RigidBody2D",
    "RigidBody3D",
    "RootMotionView",
    "ScriptCreateDialog",
    "ScriptEditor",
    "ScriptEditorBase",
    "ScrollBar",
    "ScrollContainer",
    "Separator",
    "ShaderGlobalsOverride",
    "ShapeCast2D",
    "ShapeCast3D",
    "Skeleton2D",
    "Skeleton3D",
    "SkeletonIK3D",
    "SkeletonModifier3D",
    "Slider",
    "SliderJoint3D",
    "SoftBody3D",
    "SpinBox",
    "SplitContainer",
    "SpotLight3D",
    "SpringArm3D",
    "SpringBoneCollision3D",
    "SpringBoneCollisionCapsule3D",
    "SpringBoneCollisionPlane3D",
    "SpringBoneCollisionSphere3D",
    "SpringBoneSimulator3D",
    "Sprite2D",
    "Sprite3D",
    "SpriteBase3D",
    "StaticBody2D",
    "StaticBody3D",
    "StatusIndicator",
    "SubViewport",
    "SubViewportContainer",
    "TabBar",
    "TabContainer",
    "TextEdit",
    "TextureButton",
    "TextureProgressBar",
    "TextureRect",
    "TileMap",
    "TileMapLayer",
    "Timer",
    "TouchScreenButton",
    "Tree",
    "VBoxContainer",
    "VFlowContainer",
    "VScrollBar",
    "VSeparator",
    "VSlider",
    "VSplitContainer",
    "VehicleBody3D",
    "VehicleWheel3D",
    "VideoStreamPlayer",
    "Viewport",
    "VisibleOnScreenEnabler2D",
    "VisibleOnScreenEnabler3D",
    "VisibleOnScreenNotifier2D",
    "VisibleOnScreenNotifier3D",
    "VisualInstance3D",
    "VoxelGI",
    "Window",
    "WorldEnvironment",
    "XRAnchor3D",
    "XRBodyModifier3D",
    "XRCamera3D",
    "XRController3D",
    "XRFaceModifier3D",
    "XRHandModifier3D",
    "XRNode3D",
    "XROrigin3D",
];

/// Answers whether a class name is defined natively by the engine.
#[derive(Clone, Debug)]
pub struct ClassCatalog {
    names: BTreeSet<String>,
}

impl ClassCatalog {
    /// Catalog of the engine's built-in node classes.
    pub fn builtin() -> Self {
        Self {
            names: BUILTIN_NODE_CLASSES.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// Catalog with no classes at all; every root counts as custom.
    pub fn empty() -> Self {
        Self {
            names: BTreeSet::new(),
        }
    }

    pub fn with_extra<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(extra.into_iter().map(Into::into));
        self
    }

    pub fn is_engine_class(&self, type_name: &str) -> bool {
        self.names.contains(type_name)
    }
}

impl Default for ClassCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/graph/classes.rs"]
mod tests;
