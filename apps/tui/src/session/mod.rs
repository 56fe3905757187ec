//! Exploration state of one interactive session.
//!
//! The state is a plain value. Each user event produces a fresh snapshot via
//! [`SessionState::apply`]; nothing here holds on to shared mutable data.

mod codec;

pub use codec::{decode, encode, share_url, token_from_fragment, PartialSessionState};

use crate::catalog::Catalog;
use crate::domain::{LevelVector, Role, MAX_LEVEL};
use crate::error::LadderError;
use crate::matcher;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const DEFAULT_CUSTOM_NAME: &str = "Custom Role";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveTab {
    Define,
    #[default]
    Explore,
    Compare,
}

impl ActiveTab {
    pub const ALL: [Self; 3] = [Self::Define, Self::Explore, Self::Compare];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Define => "define",
            Self::Explore => "explore",
            Self::Compare => "compare",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "define" => Some(Self::Define),
            "explore" => Some(Self::Explore),
            "compare" => Some(Self::Compare),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Define => "Define",
            Self::Explore => "Explore",
            Self::Compare => "Compare",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Define => 0,
            Self::Explore => 1,
            Self::Compare => 2,
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Define),
            1 => Some(Self::Explore),
            2 => Some(Self::Compare),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareSlot {
    First,
    Second,
}

impl CompareSlot {
    pub const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomRole {
    pub name: String,
    pub levels: LevelVector,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub custom_role: CustomRole,
    pub selected_role_id: Option<String>,
    pub active_tab: ActiveTab,
    pub compare_role_ids: [Option<String>; 2],
    pub show_nearest_role: bool,
    pub show_custom_role: bool,
}

/// A discrete user interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    SetLevel { dimension_id: String, level: u8 },
    /// Move a custom level up or down by one, clamped to the scale.
    StepLevel { dimension_id: String, delta: i8 },
    RenameCustom(String),
    SelectRole(Option<String>),
    /// Promote the role nearest to the custom levels to the selection.
    SelectNearest,
    SetTab(ActiveTab),
    SetCompare {
        slot: CompareSlot,
        role_id: Option<String>,
    },
    ToggleNearest,
    ToggleCustom,
    Reset,
    Restore(PartialSessionState),
}

impl SessionState {
    /// Session start: custom role at level 1 everywhere, explore tab, both layers shown.
    pub fn initial(catalog: &Catalog) -> Self {
        Self {
            custom_role: CustomRole {
                name: DEFAULT_CUSTOM_NAME.to_string(),
                levels: LevelVector::uniform(catalog.dimensions(), 1),
            },
            selected_role_id: None,
            active_tab: ActiveTab::default(),
            compare_role_ids: [None, None],
            show_nearest_role: true,
            show_custom_role: true,
        }
    }

    pub fn selected_role<'a>(&self, catalog: &'a Catalog) -> Option<&'a Role> {
        self.selected_role_id
            .as_deref()
            .and_then(|id| catalog.role(id))
    }

    pub fn compared_role<'a>(&self, catalog: &'a Catalog, slot: CompareSlot) -> Option<&'a Role> {
        self.compare_role_ids[slot.index()]
            .as_deref()
            .and_then(|id| catalog.role(id))
    }

    pub fn nearest_role<'a>(
        &self,
        catalog: &'a Catalog,
    ) -> Result<Option<matcher::Match<'a>>, LadderError> {
        matcher::find_nearest(
            &self.custom_role.levels,
            catalog.roles(),
            catalog.dimensions(),
        )
        .map_err(Into::into)
    }

    /// Applies `event` and returns the next snapshot.
    pub fn apply(self, event: SessionEvent, catalog: &Catalog) -> Result<Self, LadderError> {
        debug!(?event, "applying session event");

        let next = match event {
            SessionEvent::SetLevel {
                dimension_id,
                level,
            } => self.with_level(catalog, &dimension_id, level)?,
            SessionEvent::StepLevel {
                dimension_id,
                delta,
            } => {
                let dimension = known_dimension(catalog, &dimension_id)?;
                let current = self.custom_role.levels.level_for(dimension)?;
                let stepped = i16::from(current) + i16::from(delta);
                let level = stepped.clamp(1, i16::from(MAX_LEVEL)) as u8;
                self.with_level(catalog, &dimension_id, level)?
            }
            SessionEvent::RenameCustom(name) => Self {
                custom_role: CustomRole {
                    name,
                    ..self.custom_role
                },
                ..self
            },
            SessionEvent::SelectRole(role_id) => Self {
                selected_role_id: known_role(catalog, role_id)?,
                ..self
            },
            SessionEvent::SelectNearest => {
                let nearest = self.nearest_role(catalog)?.ok_or(LadderError::NoMatch)?;
                let selected_role_id = Some(nearest.role.id.clone());
                Self {
                    selected_role_id,
                    ..self
                }
            }
            SessionEvent::SetTab(active_tab) => Self { active_tab, ..self },
            SessionEvent::SetCompare { slot, role_id } => {
                let mut compare_role_ids = self.compare_role_ids.clone();
                compare_role_ids[slot.index()] = known_role(catalog, role_id)?;
                Self {
                    compare_role_ids,
                    ..self
                }
            }
            SessionEvent::ToggleNearest => Self {
                show_nearest_role: !self.show_nearest_role,
                ..self
            },
            SessionEvent::ToggleCustom => Self {
                show_custom_role: !self.show_custom_role,
                ..self
            },
            SessionEvent::Reset => Self::initial(catalog),
            SessionEvent::Restore(partial) => partial.merge_onto(self),
        };

        Ok(next)
    }

    fn with_level(
        self,
        catalog: &Catalog,
        dimension_id: &str,
        level: u8,
    ) -> Result<Self, LadderError> {
        known_dimension(catalog, dimension_id)?.level(level)?;
        let levels = self.custom_role.levels.clone().with(dimension_id, level);
        Ok(Self {
            custom_role: CustomRole {
                levels,
                ..self.custom_role
            },
            ..self
        })
    }
}

fn known_dimension<'a>(
    catalog: &'a Catalog,
    dimension_id: &str,
) -> Result<&'a crate::domain::Dimension, LadderError> {
    catalog.dimension(dimension_id).ok_or_else(|| {
        crate::error::ValidationError::UnknownDimension {
            dimension: dimension_id.to_string(),
        }
        .into()
    })
}

fn known_role(catalog: &Catalog, role_id: Option<String>) -> Result<Option<String>, LadderError> {
    match role_id {
        Some(id) if catalog.role(&id).is_none() => Err(LadderError::UnknownReference(id)),
        other => Ok(other),
    }
}
