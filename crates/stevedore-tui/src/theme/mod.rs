//! Theme: color palette and semantic styles

pub mod palette;
pub mod styles;
