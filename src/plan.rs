//! The fixed set of assets written by the generator.

use std::fs;
use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::error::{Error, Result};
use crate::export;
use crate::geometry::IconVariant;
use crate::palette::{self, Rgba};
use crate::render;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetKind {
    Glyph { variant: IconVariant, background: Rgba },
    Fill(Rgba),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Asset {
    pub file_name: &'static str,
    pub size: u32,
    pub kind: AssetKind,
}

impl Asset {
    pub fn draw(&self) -> Result<RgbaImage> {
        match self.kind {
            AssetKind::Glyph { variant, background } => {
                render::render(variant, self.size, background)
            }
            AssetKind::Fill(color) => render::fill(self.size, color),
        }
    }
}

const fn glyph(file_name: &'static str, variant: IconVariant, size: u32, background: Rgba) -> Asset {
    Asset { file_name, size, kind: AssetKind::Glyph { variant, background } }
}

const fn flat(file_name: &'static str, size: u32, color: Rgba) -> Asset {
    Asset { file_name, size, kind: AssetKind::Fill(color) }
}

pub const ASSETS: &[Asset] = &[
    glyph("icon.png", IconVariant::Standard, 1024, palette::ICON_BACKGROUND),
    glyph("splash-icon.png", IconVariant::Splash, 1024, palette::TRANSPARENT),
    glyph("android-icon-foreground.png", IconVariant::Splash, 512, palette::TRANSPARENT),
    flat("android-icon-background.png", 512, palette::ANDROID_BACKGROUND),
    flat("android-icon-monochrome.png", 512, palette::MONOCHROME),
    glyph("favicon.png", IconVariant::Favicon, 48, palette::TRANSPARENT),
];

/// Render and save every asset into `out_dir`, in order.
///
/// Stops at the first failure; files already written are left in place.
pub fn generate(out_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir).map_err(|source| Error::Io {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(ASSETS.len());
    for asset in ASSETS {
        let canvas = asset.draw()?;
        let path = out_dir.join(asset.file_name);
        export::save(&canvas, &path)?;
        written.push(path);
    }
    Ok(written)
}
