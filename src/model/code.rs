use std::collections::{BTreeMap, BTreeSet};

use crate::describe::scene::SceneDescription;
use crate::extract::outlets::{ANIMATION_PLAYER_TYPE, Outlet};

/// Outlets sharing one node type, in discovery order.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct OutletGroup {
    pub type_name: String,
    pub outlets: Vec<Outlet>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct AnimationPlayerDescription {
    /// Node path segments joined with no separator, e.g. `PlayerAnim`.
    pub player_path_key: String,
    /// Node path relative to the scene root, e.g. `Player/Anim`.
    pub player_path: String,
    pub player_identifier: String,
    pub animation_names: Vec<String>,
}

impl AnimationPlayerDescription {
    fn from_outlet(outlet: &Outlet) -> Self {
        Self {
            player_path_key: outlet.node_path.concat(),
            player_path: outlet.joined_path(),
            player_identifier: outlet.identifier.clone(),
            animation_names: outlet.options.clone(),
        }
    }
}

/// Everything a renderer needs for one scene.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct CodeModel {
    pub root_type_name: String,
    pub resource_path: String,
    /// Sorted by type name, byte-wise ascending.
    pub groups: Vec<OutletGroup>,
    pub animation_players: Vec<AnimationPlayerDescription>,
}

impl CodeModel {
    pub fn build(desc: &SceneDescription) -> Self {
        // deterministic order by BTreeMap key ordering
        let mut by_type = BTreeMap::<&str, Vec<Outlet>>::new();
        for outlet in &desc.outlets {
            by_type
                .entry(outlet.type_name.as_str())
                .or_default()
                .push(outlet.clone());
        }

        let animation_players = desc
            .outlets
            .iter()
            .filter(|o| o.type_name == ANIMATION_PLAYER_TYPE)
            .map(AnimationPlayerDescription::from_outlet)
            .collect();

        Self {
            root_type_name: desc.root_type_name.clone(),
            resource_path: desc.source_path.clone(),
            groups: by_type
                .into_iter()
                .map(|(type_name, outlets)| OutletGroup {
                    type_name: type_name.to_owned(),
                    outlets,
                })
                .collect(),
            animation_players,
        }
    }

    /// `(type_name, identifier)` pairs that occur more than once within a group.
    pub fn duplicate_identifiers(&self) -> Vec<(String, String)> {
        let mut dups = Vec::new();
        for group in &self.groups {
            let mut seen = BTreeSet::new();
            let mut reported = BTreeSet::new();
            for outlet in &group.outlets {
                let id = outlet.identifier.as_str();
                if !seen.insert(id) && reported.insert(id) {
                    dups.push((group.type_name.clone(), id.to_owned()));
                }
            }
        }
        dups
    }

    pub fn outlet_count(&self) -> usize {
        self.groups.iter().map(|g| g.outlets.len()).sum()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/code.rs"]
mod tests;
