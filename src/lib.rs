//! Bivium icon generator
//!
//! Draws the Bivium fork mark (a "Y" glyph) at fixed proportions and writes
//! the app's icon assets as PNG files.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use bivium_icons::{palette, render, IconVariant};
//!
//! # fn main() -> bivium_icons::Result<()> {
//! let icon = render(IconVariant::Standard, 1024, palette::ICON_BACKGROUND)?;
//! bivium_icons::save(&icon, Path::new("assets/images/icon.png"))?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod geometry;
pub mod palette;
pub mod plan;
pub mod render;

pub use config::Config;
pub use error::{Error, Result};
pub use export::save;
pub use geometry::{DiscSpec, IconVariant, Layout, Point, StrokeSpec};
pub use palette::Rgba;
pub use plan::{generate, Asset, AssetKind, ASSETS};
pub use render::{fill, render};
