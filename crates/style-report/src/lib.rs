pub mod render;
pub mod report;

pub use render::{format_general, render_text, write_text};
pub use report::*;
