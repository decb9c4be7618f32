//! Landing page: static festival content and its HTML rendering.

pub mod content;
pub mod render;

pub use content::{FESTIVAL, FestivalContent};
pub use render::render_landing_page;
