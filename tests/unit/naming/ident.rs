use super::*;

#[test]
fn token_name_lowercases_all_caps_and_first_letter() {
    assert_eq!(token_name("HEALTH"), "health");
    assert_eq!(token_name("Health"), "health");
    assert_eq!(token_name("health"), "health");
    assert_eq!(token_name("HealthBar"), "healthBar");
    assert_eq!(token_name("HUDLabel"), "hUDLabel");
    assert_eq!(token_name(""), "");
}

#[test]
fn token_name_leaves_digits_and_symbols_alone() {
    assert_eq!(token_name("2D"), "2d");
    assert_eq!(token_name("Camera2D"), "camera2D");
    assert_eq!(token_name("_"), "_");
}

#[test]
fn snake_to_camel_joins_parts_without_separator() {
    assert_eq!(snake_to_camel("move_left"), "moveLeft");
    assert_eq!(snake_to_camel("JUMP"), "jump");
    assert_eq!(snake_to_camel("ui_accept"), "uiAccept");
    assert_eq!(snake_to_camel("MOVE_left"), "moveLeft");
    assert_eq!(snake_to_camel("walk"), "walk");
}

#[test]
fn snake_to_camel_drops_empty_parts() {
    assert_eq!(snake_to_camel("_private__name_"), "privateName");
    assert_eq!(snake_to_camel("___"), "");
    assert_eq!(snake_to_camel(""), "");
}

#[test]
fn path_to_symbol_keeps_segments_visible() {
    assert_eq!(path_to_symbol(&["Player", "HealthBar"]), "player_healthBar");
    assert_eq!(path_to_symbol(&["UI", "HUD", "Score"]), "ui_hud_score");
    assert_eq!(path_to_symbol(&["Sprite"]), "sprite");

    let owned = vec!["Enemy".to_string(), "Hitbox".to_string()];
    assert_eq!(path_to_symbol(&owned), "enemy_hitbox");
}

#[test]
fn path_and_snake_grammars_differ_for_multi_part_names() {
    assert_eq!(path_to_symbol(&["move", "left"]), "move_left");
    assert_eq!(snake_to_camel("move_left"), "moveLeft");
}

#[test]
fn drop_prefix_only_strips_leading_match() {
    assert_eq!(drop_prefix("input/jump", "input/"), "jump");
    assert_eq!(drop_prefix("audio/volume", "input/"), "audio/volume");
}
