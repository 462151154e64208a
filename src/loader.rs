use std::io;
use std::path::Path;

/// Reads URL lists from plain text files, one URL per line.
pub struct UrlListLoader;

impl UrlListLoader {
    /// Lines of `path` with their terminators stripped.
    ///
    /// Blank lines are kept as empty strings; a final line terminator does
    /// not add an entry.
    pub async fn try_load(path: impl AsRef<Path>) -> io::Result<Vec<String>> {
        let text = tokio::fs::read_to_string(path).await?;
        Ok(text.lines().map(str::to_owned).collect())
    }

    /// Like [`UrlListLoader::try_load`], but an unreadable file is reported
    /// and yields an empty list.
    pub async fn load(path: impl AsRef<Path>) -> Vec<String> {
        let path = path.as_ref();
        match Self::try_load(path).await {
            Ok(urls) => {
                println!("Loading input file ({})... succeeded", path.display());
                tracing::debug!(path = %path.display(), count = urls.len(), "loaded url list");
                urls
            }
            Err(e) => {
                println!("Loading input file ({})... failed", path.display());
                println!("Error: Cannot open file for reading ({})", path.display());
                tracing::warn!(path = %path.display(), "cannot read url list: {e}");
                Vec::new()
            }
        }
    }
}
