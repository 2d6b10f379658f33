use std::fs;
use std::path::Path;

use image::{ImageError, ImageFormat, RgbaImage};
use log::info;

use crate::error::{Error, Result};

/// Write `canvas` to `path` as PNG, creating parent directories as needed.
/// An existing file is overwritten.
pub fn save(canvas: &RgbaImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| Error::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    canvas
        .save_with_format(path, ImageFormat::Png)
        .map_err(|err| match err {
            ImageError::IoError(source) => Error::Io {
                path: path.to_path_buf(),
                source,
            },
            source => Error::Encode {
                path: path.to_path_buf(),
                source,
            },
        })?;

    info!(
        "Created {} ({}x{})",
        path.display(),
        canvas.width(),
        canvas.height()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette;
    use crate::render;

    #[test]
    fn test_creates_missing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("assets").join("images").join("icon.png");
        let canvas = render::fill(16, palette::ICON_BACKGROUND).unwrap();

        save(&canvas, &path).unwrap();

        assert!(path.is_file());
        let loaded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(loaded.dimensions(), (16, 16));
        assert_eq!(loaded.as_raw(), canvas.as_raw());
    }

    #[test]
    fn test_overwrites_existing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("favicon.png");

        save(&render::fill(8, palette::MONOCHROME).unwrap(), &path).unwrap();
        save(&render::fill(4, palette::TRANSPARENT).unwrap(), &path).unwrap();

        let loaded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(loaded.dimensions(), (4, 4));
        assert_eq!(loaded.get_pixel(0, 0).0[3], 0);
    }

    #[test]
    fn test_unwritable_parent_is_io_error() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("not-a-dir");
        fs::write(&blocker, b"plain file").unwrap();

        let canvas = render::fill(4, palette::MONOCHROME).unwrap();
        let err = save(&canvas, &blocker.join("icon.png")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }), "got {err:?}");
    }
}
