pub mod pointer;

pub use pointer::{DragState, handle_pointer_input};
