//! Font selection for chart text
//!
//! The bitmap backend draws text with fonts registered at runtime. A font
//! given explicitly must load. Otherwise common system locations are tried,
//! and the DejaVu Sans copy compiled into the binary is used when none of
//! them loads.

use crate::error::{AppError, Result};
use plotters::style::{register_font, FontStyle};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Family name every chart text style uses
pub const FONT_FAMILY: &str = "sans-serif";

/// DejaVu Sans, see `assets/fonts/LICENSE-DejaVu.txt`
static BUNDLED_FONT: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");

#[cfg(target_os = "macos")]
const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Helvetica.ttc",
];

#[cfg(target_os = "windows")]
const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "C:\\Windows\\Fonts\\arial.ttf",
    "C:\\Windows\\Fonts\\segoeui.ttf",
];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/local/share/fonts/DejaVuSans.ttf",
];

/// Where the font registered under [`FONT_FAMILY`] came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    /// Font file on disk, configured or discovered
    File(PathBuf),
    /// Font compiled into the binary
    Bundled,
}

impl fmt::Display for FontSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontSource::File(path) => write!(f, "{}", path.display()),
            FontSource::Bundled => write!(f, "bundled DejaVu Sans"),
        }
    }
}

/// Source currently registered under [`FONT_FAMILY`]
static REGISTERED: Mutex<Option<FontSource>> = Mutex::new(None);

/// System font locations searched when no font is configured
pub fn system_font_candidates() -> impl Iterator<Item = &'static Path> {
    SYSTEM_FONT_CANDIDATES.iter().map(Path::new)
}

/// Load and register the font described by `source`
fn register(source: &FontSource) -> Result<()> {
    let mut registered = REGISTERED.lock().unwrap_or_else(|e| e.into_inner());
    if registered.as_ref() == Some(source) {
        return Ok(());
    }

    let bytes: &'static [u8] = match source {
        FontSource::Bundled => BUNDLED_FONT,
        FontSource::File(path) => {
            let bytes = std::fs::read(path)
                .map_err(|e| AppError::config(format!("Cannot read font {}: {}", path.display(), e)))?;
            // Registered fonts must outlive every chart
            Box::leak(bytes.into_boxed_slice())
        }
    };

    register_font(FONT_FAMILY, FontStyle::Normal, bytes)
        .map_err(|_| AppError::config(format!("Invalid font {}", source)))?;

    *registered = Some(source.clone());
    Ok(())
}

/// Make a font available for chart text.
///
/// An explicit font that cannot be loaded is a configuration error; without
/// one, the first loadable system font wins and the bundled font is the last
/// resort.
pub fn ensure_font(explicit: Option<&Path>) -> Result<FontSource> {
    if let Some(path) = explicit {
        let source = FontSource::File(path.to_path_buf());
        register(&source)?;
        return Ok(source);
    }

    let discovered = system_font_candidates()
        .filter(|p| p.is_file())
        .map(|p| FontSource::File(p.to_path_buf()));

    for source in discovered.chain(std::iter::once(FontSource::Bundled)) {
        if register(&source).is_ok() {
            return Ok(source);
        }
    }

    Err(AppError::render("No usable font for chart text"))
}

/// Register the bundled font regardless of what is installed
pub fn use_bundled_font() -> Result<FontSource> {
    register(&FontSource::Bundled)?;
    Ok(FontSource::Bundled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_explicit_font_is_config_error() {
        let err = ensure_font(Some(Path::new("/no/such/font.ttf"))).unwrap_err();
        assert_eq!(err.category(), "CONFIG");
    }

    #[test]
    fn test_garbage_font_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"this is not a font").unwrap();

        let err = ensure_font(Some(file.path())).unwrap_err();
        assert_eq!(err.category(), "CONFIG");
        assert!(err.to_string().contains("Invalid font"));
    }

    #[test]
    fn test_auto_discovery_always_finds_a_font() {
        match ensure_font(None).unwrap() {
            FontSource::File(path) => assert!(path.is_file()),
            FontSource::Bundled => {}
        }
    }

    #[test]
    fn test_bundled_font_registers() {
        assert!(!BUNDLED_FONT.is_empty());
        assert_eq!(use_bundled_font().unwrap(), FontSource::Bundled);
    }

    #[test]
    fn test_candidates_are_absolute() {
        assert!(system_font_candidates().count() > 0);
        assert!(system_font_candidates().all(|p| p.is_absolute()));
    }
}
