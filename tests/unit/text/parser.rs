use super::*;

#[test]
fn parses_scene_sections() {
    let src = r#"
[gd_scene load_steps=2 format=3 uid="uid://b1"]

[ext_resource type="PackedScene" path="res://enemy.tscn" id="1_abc"]

[node name="Level" type="Node2D"]

[node name="Enemy" parent="." instance=ExtResource("1_abc")]
position = Vector2(10, -5.5)
"#;
    let sections = parse_document(src).unwrap();
    assert_eq!(sections.len(), 4);

    assert_eq!(sections[0].tag, "gd_scene");
    assert_eq!(sections[0].attr("format"), Some(&Variant::Int(3)));

    assert_eq!(sections[1].attr_str("path"), Some("res://enemy.tscn"));

    let enemy = &sections[3];
    assert_eq!(enemy.attr_str("name"), Some("Enemy"));
    assert_eq!(
        enemy.attr("instance"),
        Some(&Variant::ExtResource("1_abc".into()))
    );
    assert_eq!(
        enemy.prop("position"),
        Some(&Variant::Call {
            name: "Vector2".into(),
            args: vec![Variant::Int(10), Variant::Float(-5.5)],
        })
    );
}

#[test]
fn multi_line_dictionary_values() {
    let src = r#"
[node name="AnimationPlayer" type="AnimationPlayer" parent="."]
libraries = {
"": SubResource("AnimationLibrary_x"),
&"extra": SubResource("AnimationLibrary_y")
}
autoplay = "idle"
"#;
    let sections = parse_document(src).unwrap();
    let node = &sections[0];
    assert_eq!(node.props.len(), 2);
    assert_eq!(
        node.prop("libraries"),
        Some(&Variant::Dictionary(vec![
            (
                Variant::String(String::new()),
                Variant::SubResource("AnimationLibrary_x".into())
            ),
            (
                Variant::StringName("extra".into()),
                Variant::SubResource("AnimationLibrary_y".into())
            ),
        ]))
    );
    assert_eq!(node.prop("autoplay"), Some(&Variant::String("idle".into())));
}

#[test]
fn properties_before_first_heading_form_untagged_section() {
    let src = "config_version=5\n\n[application]\n\nconfig/name=\"Game\"\n";
    let sections = parse_document(src).unwrap();
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].tag, "");
    assert_eq!(sections[0].prop("config_version"), Some(&Variant::Int(5)));
    assert_eq!(sections[1].tag, "application");
    assert_eq!(
        sections[1].prop("config/name"),
        Some(&Variant::String("Game".into()))
    );
}

#[test]
fn object_constructor_collects_pairs() {
    let v = parse_value_str(
        r#"Object(InputEventKey,"resource_local_to_scene":false,"device":-1,"keycode":0)"#,
    )
    .unwrap();
    let Variant::Call { name, args } = v else {
        panic!("expected call");
    };
    assert_eq!(name, "Object");
    assert_eq!(args[0], Variant::String("InputEventKey".into()));
    let Variant::Dictionary(pairs) = &args[1] else {
        panic!("expected trailing dictionary");
    };
    assert_eq!(pairs.len(), 3);
    assert_eq!(pairs[1].1, Variant::Int(-1));
}

#[test]
fn legacy_integer_resource_ids() {
    assert_eq!(
        parse_value_str("ExtResource( 2 )").unwrap(),
        Variant::ExtResource("2".into())
    );
    assert_eq!(
        parse_value_str("SubResource( 7 )").unwrap(),
        Variant::SubResource("7".into())
    );
}

#[test]
fn typed_containers_unwrap_to_inner_value() {
    assert_eq!(
        parse_value_str(r#"Array[StringName]([&"a", &"b"])"#).unwrap(),
        Variant::Array(vec![
            Variant::StringName("a".into()),
            Variant::StringName("b".into())
        ])
    );
    assert_eq!(
        parse_value_str(r#"Dictionary[String, int]({"x": 1})"#).unwrap(),
        Variant::Dictionary(vec![(Variant::String("x".into()), Variant::Int(1))])
    );
}

#[test]
fn literals_and_trailing_commas() {
    assert_eq!(
        parse_value_str("[true, false, null, inf, 1,]").unwrap(),
        Variant::Array(vec![
            Variant::Bool(true),
            Variant::Bool(false),
            Variant::Nil,
            Variant::Float(f64::INFINITY),
            Variant::Int(1),
        ])
    );
    assert_eq!(
        parse_value_str(r#"NodePath("UI/Bar")"#).unwrap(),
        Variant::NodePath("UI/Bar".into())
    );
}

#[test]
fn reports_offsets_for_bad_input() {
    let err = parse_document("[node name=]").unwrap_err();
    assert_eq!(err.offset, 11);

    let err = parse_document("key = [1, 2").unwrap_err();
    assert!(err.message.contains("RBracket"));

    let err = parse_document("= 3").unwrap_err();
    assert_eq!(err.offset, 0);
}
