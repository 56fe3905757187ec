use thiserror::Error;

/// A level vector or layer that does not fit the dimension model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no level given for dimension `{dimension}`")]
    MissingDimension { dimension: String },

    #[error("unknown dimension `{dimension}`")]
    UnknownDimension { dimension: String },

    #[error("level {level} for dimension `{dimension}` is outside 1..={max}")]
    LevelOutOfRange {
        dimension: String,
        level: i64,
        max: u8,
    },

    #[error("dimension `{dimension}` defines {found} levels, expected {expected}")]
    LevelCount {
        dimension: String,
        found: usize,
        expected: u8,
    },

    #[error("role `{role}`: {source}")]
    Role {
        role: String,
        #[source]
        source: Box<ValidationError>,
    },
}

impl ValidationError {
    pub fn for_role(self, role: &str) -> Self {
        Self::Role {
            role: role.to_string(),
            source: Box::new(self),
        }
    }
}

/// Errors raised while building or loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("duplicate dimension id `{0}`")]
    DuplicateDimension(String),

    #[error("duplicate role id `{0}`")]
    DuplicateRole(String),

    #[error("catalog has no dimensions")]
    NoDimensions,

    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors surfaced by session events.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LadderError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("unknown role `{0}`")]
    UnknownReference(String),

    #[error("no role matches the custom levels")]
    NoMatch,
}
