//! Watermark composition module

pub mod single;
pub mod style;
pub mod tile;
pub mod tiled;

// Re-export commonly used items
pub use single::apply_single_watermark;
pub use style::{MarkPlacement, SingleStyle, TiledStyle};
pub use tile::build_text_tile;
pub use tiled::{apply_tiled_watermark, make_tiled_overlay};
