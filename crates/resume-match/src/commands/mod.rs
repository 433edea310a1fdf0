//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;
use owo_colors::OwoColorize;

pub mod analyze;
pub mod ats;
pub mod info;
pub mod keywords;
pub mod score;
#[cfg(feature = "mcp")]
pub mod serve;
pub mod skills;

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Color a 0-100 score: green from 80, yellow from 60, red below.
pub(crate) fn paint_score(score: u8) -> String {
    match score {
        80.. => score.green().to_string(),
        60..=79 => score.yellow().to_string(),
        _ => score.red().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;

    #[test]
    fn reads_file_under_limit() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "Rust developer").unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();
        assert_eq!(read_input_file(&path, Some(1024)).unwrap(), "Rust developer");
        assert_eq!(read_input_file(&path, None).unwrap(), "Rust developer");
    }

    #[test]
    fn rejects_file_over_limit() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "0123456789").unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();
        let err = read_input_file(&path, Some(5)).unwrap_err();
        assert!(err.to_string().contains("input too large"));
    }

    #[test]
    fn missing_file_reports_path() {
        let path = Utf8PathBuf::from("/nonexistent/resume.txt");
        let err = read_input_file(&path, None).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/resume.txt"));
    }
}
