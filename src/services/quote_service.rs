//! Motivational quotes loaded from a text file

use std::path::Path;

use rand::seq::SliceRandom;

pub const QUOTES_PLACEHOLDER: &str = "Файл с цитатами не найден";

/// Non-empty trimmed lines of the quotes file, or the placeholder when the
/// file is missing, unreadable or empty.
pub async fn load_quotes(path: &Path) -> Vec<String> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!("Quotes file {:?} unavailable: {}", path, e);
            return vec![QUOTES_PLACEHOLDER.to_string()];
        }
    };

    let quotes: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect();

    if quotes.is_empty() {
        vec![QUOTES_PLACEHOLDER.to_string()]
    } else {
        quotes
    }
}

pub async fn random_quote(path: &Path) -> String {
    let quotes = load_quotes(path).await;
    quotes
        .choose(&mut rand::thread_rng())
        .cloned()
        .unwrap_or_else(|| QUOTES_PLACEHOLDER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_missing_file_yields_placeholder() {
        let quotes = load_quotes(Path::new("/definitely/not/here/quotes.txt")).await;
        assert_eq!(quotes, vec![QUOTES_PLACEHOLDER.to_string()]);
    }

    #[tokio::test]
    async fn test_blank_lines_are_skipped() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "  Первая цитата  ").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "Вторая").unwrap();

        let quotes = load_quotes(file.path()).await;
        assert_eq!(quotes, vec!["Первая цитата".to_string(), "Вторая".to_string()]);

        let quote = random_quote(file.path()).await;
        assert!(quotes.contains(&quote));
    }

    #[tokio::test]
    async fn test_empty_file_yields_placeholder() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert_eq!(random_quote(file.path()).await, QUOTES_PLACEHOLDER);
    }
}
