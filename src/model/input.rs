use std::collections::HashSet;

use crate::naming::ident::{drop_prefix, snake_to_camel};

const INPUT_PREFIX: &str = "input/";

/// A project settings property name, e.g. `input/jump` or `input/jump.macos`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PropertyName(String);

impl PropertyName {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_input(&self) -> bool {
        self.0.starts_with(INPUT_PREFIX)
    }

    /// Platform variants such as `.macos` or `.windows` are resolved by the engine at
    /// runtime; game code only refers to the base action.
    pub fn has_platform_suffix(&self) -> bool {
        self.0.contains('.')
    }
}

/// An input action declared in the project's input map.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct InputActionName {
    raw: String,
    symbol: String,
}

impl InputActionName {
    /// `None` for non-input properties and platform variants.
    pub fn new(property: &PropertyName) -> Option<Self> {
        if !property.is_input() || property.has_platform_suffix() {
            return None;
        }
        let raw = drop_prefix(property.as_str(), INPUT_PREFIX).to_owned();
        let symbol = snake_to_camel(&raw);
        Some(Self { raw, symbol })
    }

    /// Action name as the engine knows it, e.g. `move_left`.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Generated symbol, e.g. `moveLeft`.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }
}

/// Input actions among `names`, deduplicated by symbol keeping the first occurrence.
pub fn input_actions<I, S>(names: I) -> Vec<InputActionName>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut actions = Vec::new();
    for name in names {
        let Some(action) = InputActionName::new(&PropertyName::new(name.as_ref())) else {
            continue;
        };
        if action.symbol.is_empty() {
            tracing::warn!(action = action.raw(), "input action has no usable symbol");
            continue;
        }
        if !seen.insert(action.symbol.clone()) {
            tracing::warn!(
                action = action.raw(),
                symbol = action.symbol(),
                "input action symbol already taken"
            );
            continue;
        }
        actions.push(action);
    }
    actions
}

#[cfg(test)]
#[path = "../../tests/unit/model/input.rs"]
mod tests;
