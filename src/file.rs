//! File-to-file conversion.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Errors from converting a Markdown file on disk.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The input path does not exist.
    #[error("Missing {}", .path.display())]
    MissingInput { path: PathBuf },

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Read the Markdown file at `input`, translate it, and write the HTML to
/// `output`, replacing any existing file.
///
/// The output file is only touched once the input has been read.
pub fn convert_file(input: &Path, output: &Path) -> Result<(), ConvertError> {
    if !input.exists() {
        return Err(ConvertError::MissingInput {
            path: input.to_path_buf(),
        });
    }

    let markdown = fs::read_to_string(input).map_err(|source| ConvertError::Read {
        path: input.to_path_buf(),
        source,
    })?;
    debug!(path = %input.display(), bytes = markdown.len(), "read markdown");

    let html = crate::to_html(&markdown);

    fs::write(output, &html).map_err(|source| ConvertError::Write {
        path: output.to_path_buf(),
        source,
    })?;
    debug!(path = %output.display(), bytes = html.len(), "wrote html");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("README.md");
        let output = dir.path().join("README.html");
        fs::write(&input, "# Title\n\n- a\n- b\n").unwrap();

        convert_file(&input, &output).unwrap();

        let html = fs::read_to_string(&output).unwrap();
        assert_eq!(html, "<h1>Title</h1>\n<ul>\n<li>a</li>\n<li>b</li>\n</ul>");
    }

    #[test]
    fn test_convert_file_overwrites_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.md");
        let output = dir.path().join("out.html");
        fs::write(&input, "text").unwrap();
        fs::write(&output, "old content that is longer than the new one").unwrap();

        convert_file(&input, &output).unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "<p>text</p>");
    }

    #[test]
    fn test_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("nope.md");
        let output = dir.path().join("out.html");

        let err = convert_file(&input, &output).unwrap_err();

        assert!(matches!(err, ConvertError::MissingInput { .. }));
        assert_eq!(err.to_string(), format!("Missing {}", input.display()));
        assert!(!output.exists());
    }

    #[test]
    fn test_input_not_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("bad.md");
        let output = dir.path().join("out.html");
        fs::write(&input, [0xff, 0xfe, 0x00]).unwrap();

        let err = convert_file(&input, &output).unwrap_err();

        assert!(matches!(err, ConvertError::Read { .. }));
        assert!(!output.exists());
    }

    #[test]
    fn test_unwritable_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.md");
        fs::write(&input, "text").unwrap();
        let output = dir.path().join("missing-dir").join("out.html");

        let err = convert_file(&input, &output).unwrap_err();

        assert!(matches!(err, ConvertError::Write { .. }));
        assert!(err.to_string().starts_with("failed to write"));
    }
}
