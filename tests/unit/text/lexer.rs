use super::*;

fn kinds(src: &str) -> Vec<TokenKind> {
    lex(src).unwrap().into_iter().map(|t| t.kind).collect()
}

#[test]
fn lexes_heading() {
    assert_eq!(
        kinds(r#"[node name="Player" parent="."]"#),
        vec![
            TokenKind::LBracket,
            TokenKind::Ident("node".into()),
            TokenKind::Ident("name".into()),
            TokenKind::Equals,
            TokenKind::Str("Player".into()),
            TokenKind::Ident("parent".into()),
            TokenKind::Equals,
            TokenKind::Str(".".into()),
            TokenKind::RBracket,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn lexes_numbers() {
    assert_eq!(
        kinds("1 -2 0.5 -1.25 1e-05 -inf"),
        vec![
            TokenKind::Int(1),
            TokenKind::Int(-2),
            TokenKind::Float(0.5),
            TokenKind::Float(-1.25),
            TokenKind::Float(1e-05),
            TokenKind::Float(f64::NEG_INFINITY),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn lexes_prefixed_strings_and_escapes() {
    assert_eq!(
        kinds(r#"&"idle" ^"../Path" "a\"b\\c\n" "é""#),
        vec![
            TokenKind::StringName("idle".into()),
            TokenKind::NodePath("../Path".into()),
            TokenKind::Str("a\"b\\c\n".into()),
            TokenKind::Str("é".into()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn keys_keep_slashes_and_feature_tags() {
    assert_eq!(
        kinds("window/size/mode=2\njump.macos={}"),
        vec![
            TokenKind::Ident("window/size/mode".into()),
            TokenKind::Equals,
            TokenKind::Int(2),
            TokenKind::Ident("jump.macos".into()),
            TokenKind::Equals,
            TokenKind::LBrace,
            TokenKind::RBrace,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn skips_comments() {
    assert_eq!(
        kinds("; Engine configuration file.\nconfig_version=5 ; trailing\n"),
        vec![
            TokenKind::Ident("config_version".into()),
            TokenKind::Equals,
            TokenKind::Int(5),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn multibyte_text_inside_strings_is_preserved() {
    assert_eq!(
        kinds(r#""Größe Ñandú""#),
        vec![TokenKind::Str("Größe Ñandú".into()), TokenKind::Eof]
    );
}

#[test]
fn reports_unterminated_string() {
    let err = lex("name = \"oops").unwrap_err();
    assert_eq!(err.offset, 7);
    assert!(err.message.contains("unterminated"));
}

#[test]
fn reports_unexpected_character() {
    let err = lex("a = 1 $").unwrap_err();
    assert_eq!(err.offset, 6);
}

#[test]
fn offsets_point_at_token_start() {
    let tokens = lex("key = \"v\"").unwrap();
    let offsets: Vec<_> = tokens.iter().map(|t| t.offset).collect();
    assert_eq!(offsets, vec![0, 4, 6, 9]);
}

#[test]
fn tile_data_keys_are_read_verbatim() {
    assert_eq!(
        kinds("0:0/0/physics_layer_0/polygon_0/points = PackedVector2Array(0, 1)\n"),
        vec![
            TokenKind::Ident("0:0/0/physics_layer_0/polygon_0/points".into()),
            TokenKind::Equals,
            TokenKind::Ident("PackedVector2Array".into()),
            TokenKind::LParen,
            TokenKind::Int(0),
            TokenKind::Comma,
            TokenKind::Int(1),
            TokenKind::RParen,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn values_spanning_lines_are_not_keys() {
    let src = "a = {\n\"k\": 1,\nb = 2\n}\n";
    // `b` sits inside the braces, so `b = 2` is lexed token by token.
    assert!(kinds(src).contains(&TokenKind::Ident("b".into())));
    assert_eq!(kinds(src)[0], TokenKind::Ident("a".into()));
}
