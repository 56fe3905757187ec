// Career ladder core: catalog, matching, radar geometry and shareable session state.
// The terminal front-end lives in the binary.

pub mod catalog;
pub mod config;
pub mod domain;
pub mod error;
pub mod layers;
pub mod matcher;
pub mod radar;
pub mod session;

pub use catalog::Catalog;
pub use domain::{Dimension, LevelDescriptor, LevelVector, Role};
pub use error::{CatalogError, LadderError, ValidationError};
pub use session::{ActiveTab, CompareSlot, SessionEvent, SessionState};
