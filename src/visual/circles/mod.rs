pub mod components;

pub use components::{ChainCircle, GlyphDisc, paint_depth};
