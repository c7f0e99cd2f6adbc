//! Mesh export: binary STL, ASCII STL, ASCII PLY, plus an extension-based
//! factory for choosing the format.

use crate::float_types::Real;
use crate::triangulated::Facet;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

pub mod ply;
pub mod stl;

pub use ply::write_ply;
pub use stl::{write_stl_ascii, write_stl_binary};

/// Export and format-dispatch errors.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("i/o error: {0}")]
    StdIo(#[from] std::io::Error),

    /// Raised before any stream is opened.
    #[error("unsupported export format: {0:?}")]
    UnsupportedFormat(String),
}

/// Write `facets` to `path`, choosing the format from the file extension:
/// `.stl` is binary STL, `.ply` is ASCII PLY. Any other extension is an
/// [`IoError::UnsupportedFormat`] raised before the file is created.
pub fn export_facets(facets: &[Facet], path: impl AsRef<Path>) -> Result<(), IoError> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "stl" => {
            let mut sink = BufWriter::new(File::create(path)?);
            write_stl_binary(facets, &mut sink)?;
        },
        "ply" => {
            let mut sink = BufWriter::new(File::create(path)?);
            write_ply(facets, &mut sink)?;
        },
        _ => return Err(IoError::UnsupportedFormat(path.display().to_string())),
    }
    Ok(())
}

/// Shared numeric formatting for the text formats: a value within `1e-4` of
/// an integer prints as that integer with no decimal point; anything else is
/// rounded to 4 decimals with trailing zeros trimmed.
pub(crate) fn format_real(value: Real) -> String {
    let rounded = value.round();
    if (value - rounded).abs() < 1e-4 {
        // + 0.0 collapses -0.0
        format!("{}", rounded + 0.0)
    } else {
        let text = format!("{value:.4}");
        text.trim_end_matches('0').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::format_real;

    #[test]
    fn format_real_integers_and_fractions() {
        assert_eq!(format_real(3.0), "3");
        assert_eq!(format_real(3.00005), "3");
        assert_eq!(format_real(-0.0), "0");
        assert_eq!(format_real(1.25), "1.25");
        assert_eq!(format_real(0.333333), "0.3333");
        assert_eq!(format_real(-2.5), "-2.5");
    }
}
