pub mod compare;
pub mod define;
pub mod explore;
pub mod help;
pub mod main;
