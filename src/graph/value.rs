/// A property value as stored on a scene node.
///
/// Mirrors the value grammar of the engine's text resource format. Resource references
/// (`SubResource`, `ExtResource`) are kept as references by the parser and replaced with
/// [`Variant::Resource`] wherever the loader can resolve them.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    Nil,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    /// `&"name"`
    StringName(String),
    /// `^"path"` or `NodePath("path")`
    NodePath(String),
    Array(Vec<Variant>),
    /// Entries in file order.
    Dictionary(Vec<(Variant, Variant)>),
    /// Any constructor the reader does not interpret, e.g. `Vector2(1, 2)`.
    Call {
        name: String,
        args: Vec<Variant>,
    },
    SubResource(String),
    ExtResource(String),
    Resource(Box<Resource>),
}

/// A resolved resource with its own properties.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Resource {
    pub type_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default)]
    pub properties: Vec<(String, Variant)>,
}

pub const ANIMATION_LIBRARY_TYPE: &str = "AnimationLibrary";

impl Variant {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::Int(i) => Some(*i != 0),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// String-like payloads: strings, string names and node paths.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) | Self::StringName(s) | Self::NodePath(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_dictionary(&self) -> Option<&[(Variant, Variant)]> {
        match self {
            Self::Dictionary(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn as_resource(&self) -> Option<&Resource> {
        match self {
            Self::Resource(r) => Some(r),
            _ => None,
        }
    }
}

impl Resource {
    pub fn property(&self, name: &str) -> Option<&Variant> {
        self.properties
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
    }

    /// Clip names held by an animation library, sorted the way the engine lists them.
    ///
    /// Returns `None` when this resource is not an animation library.
    pub fn animation_names(&self) -> Option<Vec<String>> {
        if self.type_name != ANIMATION_LIBRARY_TYPE {
            return None;
        }

        let mut names: Vec<String> = self
            .property("_data")
            .and_then(Variant::as_dictionary)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|(k, _)| k.as_str().map(str::to_owned))
                    .collect()
            })
            .unwrap_or_default();
        names.sort();
        Some(names)
    }
}

impl From<bool> for Variant {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Variant {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for Variant {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<Resource> for Variant {
    fn from(value: Resource) -> Self {
        Self::Resource(Box::new(value))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/graph/value.rs"]
mod tests;
