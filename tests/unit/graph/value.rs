use super::*;

fn library(names: &[&str]) -> Resource {
    Resource {
        type_name: ANIMATION_LIBRARY_TYPE.to_string(),
        path: None,
        properties: vec![(
            "_data".to_string(),
            Variant::Dictionary(
                names
                    .iter()
                    .map(|n| {
                        (
                            Variant::StringName((*n).to_string()),
                            Variant::SubResource(format!("Animation_{n}")),
                        )
                    })
                    .collect(),
            ),
        )],
    }
}

#[test]
fn animation_names_are_sorted() {
    let lib = library(&["run", "RESET", "idle"]);
    assert_eq!(
        lib.animation_names(),
        Some(vec![
            "RESET".to_string(),
            "idle".to_string(),
            "run".to_string()
        ])
    );
}

#[test]
fn animation_names_reject_other_resources() {
    let res = Resource {
        type_name: "Animation".to_string(),
        path: None,
        properties: vec![],
    };
    assert_eq!(res.animation_names(), None);
}

#[test]
fn library_without_data_is_empty() {
    let res = Resource {
        type_name: ANIMATION_LIBRARY_TYPE.to_string(),
        path: None,
        properties: vec![],
    };
    assert_eq!(res.animation_names(), Some(vec![]));
}

#[test]
fn accessors_match_payloads() {
    assert_eq!(Variant::Bool(true).as_bool(), Some(true));
    assert_eq!(Variant::Int(0).as_bool(), Some(false));
    assert_eq!(Variant::Nil.as_bool(), None);
    assert_eq!(Variant::StringName("x".into()).as_str(), Some("x"));
    assert_eq!(Variant::NodePath("a/b".into()).as_str(), Some("a/b"));
    assert_eq!(Variant::Int(3).as_int(), Some(3));
    assert!(Variant::Dictionary(vec![]).as_dictionary().is_some());
    assert!(Variant::from(library(&[])).as_resource().is_some());
}

#[test]
fn json_shape_is_tagged_by_kind() {
    let v = Variant::Array(vec![Variant::Bool(true), Variant::from("a")]);
    let s = serde_json::to_string(&v).unwrap();
    assert_eq!(s, r#"{"array":[{"bool":true},{"string":"a"}]}"#);
    let back: Variant = serde_json::from_str(&s).unwrap();
    assert_eq!(back, v);
}
