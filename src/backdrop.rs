//! Decorative backdrop loading
//!
//! Loaded once at startup on a background task. The result only decides
//! whether the backdrop fades in; the form never waits on it.

use anyhow::{bail, Result};
use std::path::PathBuf;
use tokio::sync::oneshot;

/// Used when no backdrop file is configured
const BUILTIN_BACKDROP: &str = r"
   .        *           .             +        .          *       .
        +         .            *                  .   +
  .          .         +             .      *               .        +
       *          .          .   +               .      .
 .           +         *                 .              *        .
      .           .          .       *         +     .        .
   +       *            .        .        .                +
        .         +          *               .     *            .
  *         .          .           +     .              .          *
";

/// Read the backdrop art, or fall back to the built-in art when `path` is `None`
pub async fn load(path: Option<PathBuf>) -> Result<Vec<String>> {
    let content = match path {
        Some(path) => tokio::fs::read_to_string(&path).await?,
        None => BUILTIN_BACKDROP.to_string(),
    };

    let lines: Vec<String> = content
        .lines()
        .map(|line| line.trim_end().to_string())
        .skip_while(|line| line.is_empty())
        .collect();

    if lines.iter().all(|line| line.is_empty()) {
        bail!("backdrop art is empty");
    }

    Ok(lines)
}

/// Start loading in the background; the receiver yields exactly once
pub fn spawn_load(path: Option<PathBuf>) -> oneshot::Receiver<Result<Vec<String>>> {
    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        let result = load(path).await;
        // The app may have quit already
        let _ = tx.send(result);
    });
    rx
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "signup-tui-{}-{}.txt",
            name,
            std::process::id()
        ));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[tokio::test]
    async fn test_builtin_art_loads() {
        let lines = load(None).await.unwrap();
        assert!(!lines.is_empty());
        assert!(!lines[0].is_empty());
    }

    #[tokio::test]
    async fn test_loads_file_and_trims_trailing_space() {
        let path = temp_file("ok", "\n\n* . *   \n. * .\n");
        let lines = load(Some(path.clone())).await.unwrap();
        std::fs::remove_file(path).ok();
        assert_eq!(lines, vec!["* . *".to_string(), ". * .".to_string()]);
    }

    #[tokio::test]
    async fn test_missing_file_is_error() {
        let path = std::env::temp_dir().join("signup-tui-does-not-exist.txt");
        assert!(load(Some(path)).await.is_err());
    }

    #[tokio::test]
    async fn test_blank_file_is_error() {
        let path = temp_file("blank", "   \n\n  \n");
        let result = load(Some(path.clone())).await;
        std::fs::remove_file(path).ok();
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_spawn_load_delivers_once() {
        let rx = spawn_load(None);
        let result = rx.await.unwrap();
        assert!(result.is_ok());
    }
}
