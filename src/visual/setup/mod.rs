pub mod scene;

pub use scene::{setup_scene, setup_session};
