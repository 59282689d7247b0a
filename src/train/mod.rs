pub mod config;
pub mod session;

pub use config::{ChainConfig, setup_chain_config};
pub use session::TrainSession;
