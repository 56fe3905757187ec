// Interactive front-end state and key handling

pub mod input;
pub mod state;

pub use input::handle_input;
pub use state::{App, RoleRow};
