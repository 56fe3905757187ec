//! Dimension/role reference data.
//!
//! A [`Catalog`] is built once at startup and never mutated. Construction
//! guarantees that every role covers every dimension with an in-range level
//! and that every `next_roles` entry resolves to a role of the same catalog.

mod builtin;

use crate::domain::{Dimension, LevelDescriptor, Role, LEVEL_COUNT};
use crate::error::{CatalogError, ValidationError};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    dimensions: Vec<Dimension>,
    roles: Vec<Role>,
}

#[derive(Deserialize)]
struct CatalogFile {
    dimensions: Vec<Dimension>,
    roles: Vec<Role>,
}

impl Catalog {
    /// Validates the data and returns a read-only catalog.
    pub fn new(dimensions: Vec<Dimension>, roles: Vec<Role>) -> Result<Self, CatalogError> {
        if dimensions.is_empty() {
            return Err(CatalogError::NoDimensions);
        }

        let mut seen = HashSet::new();
        for dimension in &dimensions {
            if !seen.insert(dimension.id.as_str()) {
                return Err(CatalogError::DuplicateDimension(dimension.id.clone()));
            }
            if dimension.levels.len() != usize::from(LEVEL_COUNT) {
                return Err(ValidationError::LevelCount {
                    dimension: dimension.id.clone(),
                    found: dimension.levels.len(),
                    expected: LEVEL_COUNT,
                }
                .into());
            }
        }

        let mut seen = HashSet::new();
        for role in &roles {
            if !seen.insert(role.id.as_str()) {
                return Err(CatalogError::DuplicateRole(role.id.clone()));
            }
            role.levels
                .validate(&dimensions)
                .map_err(|err| err.for_role(&role.id))?;
        }

        Ok(Self::assemble(dimensions, roles))
    }

    /// Parses a JSON catalog of the form `{ "dimensions": [...], "roles": [...] }`.
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(text)?;
        Self::new(file.dimensions, file.roles)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        debug!(path = %path.display(), "loading catalog");
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Prunes dangling successor ids and repeated skills.
    fn assemble(dimensions: Vec<Dimension>, mut roles: Vec<Role>) -> Self {
        let ids: HashSet<String> = roles.iter().map(|role| role.id.clone()).collect();

        for role in &mut roles {
            let role_id = role.id.clone();
            role.next_roles.retain(|next| {
                let known = ids.contains(next);
                if !known {
                    warn!(role = %role_id, next_role = %next, "dropping unknown next role");
                }
                known
            });

            let mut skills = HashSet::new();
            role.skills.retain(|skill| skills.insert(skill.clone()));
        }

        Self { dimensions, roles }
    }

    pub fn dimensions(&self) -> &[Dimension] {
        &self.dimensions
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    pub fn role(&self, id: &str) -> Option<&Role> {
        self.roles.iter().find(|role| role.id == id)
    }

    pub fn role_index(&self, id: &str) -> Option<usize> {
        self.roles.iter().position(|role| role.id == id)
    }

    pub fn dimension(&self, id: &str) -> Option<&Dimension> {
        self.dimensions.iter().find(|dimension| dimension.id == id)
    }

    /// Successor roles in declared order.
    pub fn next_roles<'a>(&'a self, role: &'a Role) -> impl Iterator<Item = &'a Role> + 'a {
        role.next_roles.iter().filter_map(|id| self.role(id))
    }

    /// Distinct tracks in order of first appearance.
    pub fn tracks(&self) -> Vec<&str> {
        let mut tracks: Vec<&str> = Vec::new();
        for role in &self.roles {
            if !tracks.contains(&role.track.as_str()) {
                tracks.push(&role.track);
            }
        }
        tracks
    }

    pub fn roles_in_track<'a>(&'a self, track: &'a str) -> impl Iterator<Item = &'a Role> + 'a {
        self.roles.iter().filter(move |role| role.track == track)
    }

    pub fn level_descriptor(
        &self,
        dimension_id: &str,
        level: u8,
    ) -> Result<&LevelDescriptor, ValidationError> {
        self.dimension(dimension_id)
            .ok_or_else(|| ValidationError::UnknownDimension {
                dimension: dimension_id.to_string(),
            })?
            .level(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LevelVector;

    #[test]
    fn builtin_catalog_is_valid() -> Result<(), CatalogError> {
        let builtin = Catalog::builtin();
        let rebuilt = Catalog::new(builtin.dimensions().to_vec(), builtin.roles().to_vec())?;
        assert_eq!(rebuilt, builtin);

        let ids: Vec<_> = builtin.dimensions().iter().map(|d| d.id.as_str()).collect();
        assert_eq!(
            ids,
            ["people", "work_scope", "org_scope", "process", "technology"]
        );
        assert_eq!(builtin.roles().len(), 6);
        Ok(())
    }

    #[test]
    fn dangling_next_roles_are_dropped() {
        let catalog = Catalog::builtin();
        let manager = catalog.role("engineering-manager");
        assert!(manager.is_some_and(|role| role.next_roles.is_empty()));

        for role in catalog.roles() {
            assert_eq!(catalog.next_roles(role).count(), role.next_roles.len());
        }

        let senior = catalog.role("senior-engineer");
        let next: Vec<_> = senior
            .map(|role| catalog.next_roles(role).map(|r| r.id.as_str()).collect())
            .unwrap_or_default();
        assert_eq!(next, ["staff-engineer", "tech-lead", "engineering-manager"]);
    }

    #[test]
    fn tracks_keep_catalog_order() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.tracks(),
            ["Individual Contributor", "Technical Leadership", "Management"]
        );
        assert_eq!(catalog.roles_in_track("Individual Contributor").count(), 4);
    }

    #[test]
    fn level_descriptor_rejects_bad_lookups() {
        let catalog = Catalog::builtin();
        assert!(catalog
            .level_descriptor("people", 3)
            .is_ok_and(|level| level.label == "mentors"));
        assert!(matches!(
            catalog.level_descriptor("people", 0),
            Err(ValidationError::LevelOutOfRange { .. })
        ));
        assert!(matches!(
            catalog.level_descriptor("salary", 1),
            Err(ValidationError::UnknownDimension { .. })
        ));
    }

    fn json_catalog(role_levels: &str) -> String {
        let levels = r#"[
            {"label": "a", "description": "A"},
            {"label": "b", "description": "B"},
            {"label": "c", "description": "C"},
            {"label": "d", "description": "D"}
        ]"#;
        format!(
            r#"{{
                "dimensions": [
                    {{"id": "people", "name": "People", "levels": {levels}}},
                    {{"id": "process", "name": "Process", "levels": {levels}}}
                ],
                "roles": [
                    {{"id": "dev", "name": "Developer", "track": "IC",
                      "levels": {role_levels},
                      "skills": ["rust", "rust", "sql"],
                      "nextRoles": ["lead"]}}
                ]
            }}"#
        )
    }

    #[test]
    fn from_json_validates_and_normalizes() -> Result<(), CatalogError> {
        let catalog = Catalog::from_json(&json_catalog(r#"{"people": 2, "process": 1}"#))?;
        let dev = catalog.role("dev");
        assert_eq!(dev.map(|role| role.skills.clone()), Some(vec!["rust".to_string(), "sql".to_string()]));
        assert!(dev.is_some_and(|role| role.next_roles.is_empty()));
        assert_eq!(
            dev.map(|role| role.levels.clone()),
            Some(LevelVector::new().with("people", 2).with("process", 1))
        );
        Ok(())
    }

    #[test]
    fn from_json_rejects_incomplete_roles() {
        let missing = Catalog::from_json(&json_catalog(r#"{"people": 2}"#));
        assert!(matches!(
            missing,
            Err(CatalogError::Validation(ValidationError::Role { ref role, .. })) if role == "dev"
        ));

        let out_of_range = Catalog::from_json(&json_catalog(r#"{"people": 2, "process": 9}"#));
        assert!(matches!(out_of_range, Err(CatalogError::Validation(_))));

        assert!(matches!(
            Catalog::from_json("{ not json"),
            Err(CatalogError::Json(_))
        ));
    }

    #[test]
    fn rejects_duplicates_and_wrong_level_counts() {
        let builtin = Catalog::builtin();

        let mut dims = builtin.dimensions().to_vec();
        dims.push(dims[0].clone());
        assert!(matches!(
            Catalog::new(dims, builtin.roles().to_vec()),
            Err(CatalogError::DuplicateDimension(id)) if id == "people"
        ));

        let mut roles = builtin.roles().to_vec();
        roles.push(roles[0].clone());
        assert!(matches!(
            Catalog::new(builtin.dimensions().to_vec(), roles),
            Err(CatalogError::DuplicateRole(_))
        ));

        let mut dims = builtin.dimensions().to_vec();
        dims[1].levels.pop();
        assert!(matches!(
            Catalog::new(dims, Vec::new()),
            Err(CatalogError::Validation(ValidationError::LevelCount { found: 3, .. }))
        ));

        assert!(matches!(
            Catalog::new(Vec::new(), Vec::new()),
            Err(CatalogError::NoDimensions)
        ));
    }
}
