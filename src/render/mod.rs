//! Map visualization.

mod svg;

pub use svg::{SvgColorScheme, SvgConfig, SvgVisualizer};
