mod renderer;

pub use renderer::{layout_globals, LayoutRenderer};
