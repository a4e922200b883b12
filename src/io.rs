//! File helpers for rendering documents from disk.

use std::{fs, path::Path};

use tracing::debug;

use crate::{RenderOptions, render_source};

/// Read the document at `path` and render it according to `options`.
///
/// # Errors
/// Returns an error if the file cannot be read or is not valid UTF-8.
pub fn render_file(path: &Path, options: &RenderOptions) -> std::io::Result<String> {
    let source = fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = source.len(), "read document");
    Ok(render_source(&source, options))
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::Surface;

    #[test]
    fn renders_file_contents() {
        let dir = tempdir().expect("failed to create temporary directory");
        let file = dir.path().join("sample.md");
        fs::write(&file, "## Quick Start\n\n- one\n- two\n").expect("failed to write sample");
        let options = RenderOptions {
            surface: Surface::Markdown,
            ..RenderOptions::default()
        };
        let out = render_file(&file, &options).expect("failed to render sample");
        assert_eq!(out, "## Quick Start\n\n- one\n- two\n");
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempdir().expect("failed to create temporary directory");
        let missing = dir.path().join("absent.md");
        assert!(render_file(&missing, &RenderOptions::default()).is_err());
    }
}
