use crate::url::ParsedUrl;
use crate::OutputError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes URLs one per line to any writer
pub fn write_urls<W: Write>(mut writer: W, urls: &[ParsedUrl]) -> std::io::Result<()> {
    for url in urls {
        writeln!(writer, "{}", url)?;
    }
    writer.flush()
}

/// Prints URLs one per line to stdout
pub fn print_urls(urls: &[ParsedUrl]) -> std::io::Result<()> {
    let stdout = std::io::stdout();
    write_urls(stdout.lock(), urls)
}

/// Saves URLs one per line to a file, replacing any previous content
///
/// # Returns
///
/// * `Ok(())` - All URLs were written
/// * `Err(OutputError)` - The file could not be created or written
pub fn save_urls(path: &Path, urls: &[ParsedUrl]) -> Result<(), OutputError> {
    let to_error = |source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_error)?;
    write_urls(BufWriter::new(file), urls).map_err(to_error)?;

    tracing::info!("Saved {} URLs to: {}", urls.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn urls() -> Vec<ParsedUrl> {
        vec![
            ParsedUrl::parse("https://example.com/"),
            ParsedUrl::parse("https://example.com/shop/view?id=1&cat=2"),
        ]
    }

    #[test]
    fn test_write_urls() {
        let mut buf = Vec::new();
        write_urls(&mut buf, &urls()).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "https://example.com/\nhttps://example.com/shop/view?id=1&cat=2\n"
        );
    }

    #[test]
    fn test_save_urls() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("unique.txt");

        save_urls(&path, &urls()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert!(content.ends_with('\n'));
    }

    #[test]
    fn test_save_urls_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("unique.txt");
        std::fs::write(&path, "stale\nstale\nstale\n").unwrap();

        save_urls(&path, &urls()[..1]).unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "https://example.com/\n"
        );
    }

    #[test]
    fn test_save_urls_unwritable_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("unique.txt");

        let result = save_urls(&path, &urls());

        match result {
            Err(OutputError::Write { path: failed, .. }) => assert_eq!(failed, path),
            other => panic!("expected write error, got {:?}", other),
        }
    }
}
