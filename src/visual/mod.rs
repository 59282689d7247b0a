pub mod circles;
pub mod interactions;
pub mod motion;
pub mod plugin;
pub mod setup;
pub mod sync;
