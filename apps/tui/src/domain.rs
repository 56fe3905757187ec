use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of ordinal levels every dimension defines.
pub const LEVEL_COUNT: u8 = 4;

/// Outer edge of the radar scale.
pub const MAX_LEVEL: u8 = LEVEL_COUNT;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelDescriptor {
    pub label: String,
    pub description: String,
}

/// A competency axis of the ladder, e.g. "People" or "Technology".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimension {
    pub id: String,
    pub name: String,
    pub levels: Vec<LevelDescriptor>,
}

impl Dimension {
    pub fn level_count(&self) -> u8 {
        u8::try_from(self.levels.len()).unwrap_or(u8::MAX)
    }

    /// Descriptor for a 1-based level. Out-of-range levels are rejected.
    pub fn level(&self, level: u8) -> Result<&LevelDescriptor, ValidationError> {
        level
            .checked_sub(1)
            .and_then(|index| self.levels.get(usize::from(index)))
            .ok_or_else(|| ValidationError::LevelOutOfRange {
                dimension: self.id.clone(),
                level: i64::from(level),
                max: self.level_count(),
            })
    }

    pub(crate) fn check_level(&self, level: u8) -> Result<(), ValidationError> {
        self.level(level).map(|_| ())
    }
}

/// One level per dimension id. Keys are kept sorted so the serialized form is canonical.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelVector(BTreeMap<String, u8>);

impl LevelVector {
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Every dimension at the same level.
    pub fn uniform(dimensions: &[Dimension], level: u8) -> Self {
        dimensions
            .iter()
            .map(|dimension| (dimension.id.clone(), level))
            .collect()
    }

    pub fn get(&self, dimension_id: &str) -> Option<u8> {
        self.0.get(dimension_id).copied()
    }

    pub fn set(&mut self, dimension_id: impl Into<String>, level: u8) {
        self.0.insert(dimension_id.into(), level);
    }

    #[must_use]
    pub fn with(mut self, dimension_id: impl Into<String>, level: u8) -> Self {
        self.set(dimension_id, level);
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> + '_ {
        self.0.iter().map(|(id, level)| (id.as_str(), *level))
    }

    /// Level for `dimension`, or an error when it is absent or out of range.
    pub fn level_for(&self, dimension: &Dimension) -> Result<u8, ValidationError> {
        let level = self
            .get(&dimension.id)
            .ok_or_else(|| ValidationError::MissingDimension {
                dimension: dimension.id.clone(),
            })?;
        dimension.check_level(level)?;
        Ok(level)
    }

    /// Exactly one in-range value per dimension, and nothing else.
    pub fn validate(&self, dimensions: &[Dimension]) -> Result<(), ValidationError> {
        for dimension in dimensions {
            self.level_for(dimension)?;
        }

        if let Some(unknown) = self
            .0
            .keys()
            .find(|id| !dimensions.iter().any(|dimension| &dimension.id == *id))
        {
            return Err(ValidationError::UnknownDimension {
                dimension: unknown.clone(),
            });
        }

        Ok(())
    }
}

impl FromIterator<(String, u8)> for LevelVector {
    fn from_iter<T: IntoIterator<Item = (String, u8)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<(&'a str, u8)> for LevelVector {
    fn from_iter<T: IntoIterator<Item = (&'a str, u8)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(id, level)| (id.to_string(), level))
                .collect(),
        )
    }
}

/// A predefined position on the ladder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: String,
    pub name: String,
    pub track: String,
    pub levels: LevelVector,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub salary: Option<String>,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub next_roles: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dimension(id: &str) -> Dimension {
        Dimension {
            id: id.to_string(),
            name: id.to_uppercase(),
            levels: (1..=LEVEL_COUNT)
                .map(|level| LevelDescriptor {
                    label: format!("l{level}"),
                    description: format!("{id} level {level}"),
                })
                .collect(),
        }
    }

    #[test]
    fn level_lookup_is_one_based_and_bounded() -> Result<(), ValidationError> {
        let people = dimension("people");
        assert_eq!(people.level(1)?.label, "l1");
        assert_eq!(people.level(4)?.label, "l4");
        assert!(matches!(
            people.level(0),
            Err(ValidationError::LevelOutOfRange { level: 0, .. })
        ));
        assert!(matches!(
            people.level(5),
            Err(ValidationError::LevelOutOfRange { level: 5, max: 4, .. })
        ));
        Ok(())
    }

    #[test]
    fn validate_requires_every_dimension_in_range() {
        let dims = vec![dimension("people"), dimension("process")];

        let full = LevelVector::uniform(&dims, 2);
        assert_eq!(full.validate(&dims), Ok(()));

        let missing = LevelVector::new().with("people", 2);
        assert_eq!(
            missing.validate(&dims),
            Err(ValidationError::MissingDimension {
                dimension: "process".to_string()
            })
        );

        let out_of_range = full.clone().with("process", 7);
        assert!(matches!(
            out_of_range.validate(&dims),
            Err(ValidationError::LevelOutOfRange { level: 7, .. })
        ));

        let extra = full.with("salary", 1);
        assert_eq!(
            extra.validate(&dims),
            Err(ValidationError::UnknownDimension {
                dimension: "salary".to_string()
            })
        );
    }

    #[test]
    fn serializes_with_sorted_keys() -> Result<(), serde_json::Error> {
        let levels: LevelVector = [("technology", 3), ("people", 1)].into_iter().collect();
        assert_eq!(
            serde_json::to_string(&levels)?,
            r#"{"people":1,"technology":3}"#
        );
        Ok(())
    }
}
