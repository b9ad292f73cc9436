pub mod input_render;
mod input_state;
pub mod loader;

pub use input_state::{InputState, LineEnding};
pub use loader::FileLoader;
