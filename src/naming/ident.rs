//! Symbol naming rules for generated code.
//!
//! Two grammars live here and are intentionally distinct:
//!
//! - [`snake_to_camel`] turns a single engine token (`move_left`) into a camel-cased symbol
//!   (`moveLeft`). Used for input actions and animation clip names.
//! - [`path_to_symbol`] turns a list of node path segments (`["Player", "HealthBar"]`) into
//!   a symbol whose segments stay visible (`player_healthBar`). Used for outlets.
//!
//! Both build on [`token_name`].

/// Normalize one token: all-caps tokens are lower-cased wholesale, anything else only has
/// its first character lower-cased.
pub fn token_name(s: &str) -> String {
    if s == s.to_uppercase() {
        s.to_lowercase()
    } else {
        lowercase_first(s)
    }
}

/// Convert a `snake_case` (or `SNAKE_CASE`) engine name into a lowerCamel symbol.
///
/// Empty parts (leading, trailing or doubled underscores) are dropped.
pub fn snake_to_camel(s: &str) -> String {
    let mut parts = s.split('_').filter(|p| !p.is_empty());
    let Some(first) = parts.next() else {
        return String::new();
    };

    let mut out = token_name(first);
    for part in parts {
        out.push_str(&uppercase_first(part));
    }
    out
}

/// Convert node path segments into a symbol, normalizing each segment with
/// [`token_name`] and joining them with `_`.
pub fn path_to_symbol<S: AsRef<str>>(segments: &[S]) -> String {
    segments
        .iter()
        .map(|s| token_name(s.as_ref()))
        .collect::<Vec<_>>()
        .join("_")
}

/// Strip `prefix` when present, otherwise return the input unchanged.
pub fn drop_prefix<'a>(s: &'a str, prefix: &str) -> &'a str {
    s.strip_prefix(prefix).unwrap_or(s)
}

fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn uppercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/naming/ident.rs"]
mod tests;
