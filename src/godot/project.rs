use std::path::Path;

use crate::foundation::error::{SceneGenError, SceneGenResult};
use crate::text::{error::ParseError, parser::parse_document};

pub const PROJECT_FILE: &str = "project.godot";

/// Property names declared in a project's `project.godot`.
///
/// Names are `section/key`, e.g. `input/jump` or `application/config/name`. Keys that
/// precede the first section keep their bare name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectSettings {
    names: Vec<String>,
}

impl ProjectSettings {
    pub fn load(project_root: &Path) -> SceneGenResult<Self> {
        let path = project_root.join(PROJECT_FILE);
        let src = std::fs::read_to_string(&path).map_err(|e| SceneGenError::io(&path, e))?;
        Self::parse(&src).map_err(|e| SceneGenError::parse(&path, e.to_string()))
    }

    pub(crate) fn parse(src: &str) -> Result<Self, ParseError> {
        let names = parse_document(src)?
            .into_iter()
            .flat_map(|section| {
                let tag = section.tag;
                section.props.into_iter().map(move |(key, _)| {
                    if tag.is_empty() {
                        key
                    } else {
                        format!("{tag}/{key}")
                    }
                })
            })
            .collect();
        Ok(Self { names })
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn property_names(&self) -> &[String] {
        &self.names
    }
}

#[cfg(test)]
#[path = "../../tests/unit/godot/project.rs"]
mod tests;
