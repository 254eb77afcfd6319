//! Recursive scan of the local research folders.
//!
//! Relevance is plain containment: a note matches when its text contains
//! the topic, ignoring case. Matches are kept in walk order, which is made
//! reproducible by sorting directory entries by file name.

use crate::config::ResearchConfig;
use crate::snippet::RetrievedSnippet;
use std::path::Path;
use tracing::{debug, error};
use walkdir::WalkDir;

/// Append matching notes to `collected` until it holds
/// `config.max_collected` snippets.
///
/// Missing folders are skipped; unreadable files are logged and skipped.
pub fn scan_directories(config: &ResearchConfig, topic: &str, collected: &mut Vec<RetrievedSnippet>) {
    let needle = topic.to_lowercase();

    for (label, path) in config.search_paths() {
        if collected.len() >= config.max_collected {
            debug!(limit = config.max_collected, "snippet limit reached, skipping remaining folders");
            break;
        }
        if !path.is_dir() {
            debug!(path = %path.display(), "research folder missing, skipping");
            continue;
        }

        for entry in WalkDir::new(&path).sort_by_file_name() {
            if collected.len() >= config.max_collected {
                debug!(folder = %label, "snippet limit reached inside folder");
                break;
            }

            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    error!(folder = %label, error = %e, "failed to walk research folder");
                    continue;
                }
            };
            if !entry.file_type().is_file() || !has_extension(entry.path(), &config.extension) {
                continue;
            }

            let content = match std::fs::read_to_string(entry.path()) {
                Ok(content) => content,
                Err(e) => {
                    error!(path = %entry.path().display(), error = %e, "failed to read research note");
                    continue;
                }
            };

            if content.to_lowercase().contains(&needle) {
                let file_name = entry.file_name().to_string_lossy();
                collected.push(RetrievedSnippet::from_file(
                    &label,
                    &file_name,
                    &content,
                    config.snippet_chars,
                ));
            }
        }
    }
}

/// Exact, case-sensitive extension comparison.
fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn lab() -> TempDir {
        let dir = TempDir::new().unwrap();
        let analysis = dir.path().join("01-Analysis");
        fs::create_dir_all(analysis.join("nested")).unwrap();
        fs::write(analysis.join("a.md"), "Organoid passage notes").unwrap();
        fs::write(analysis.join("b.txt"), "organoid but wrong extension").unwrap();
        fs::write(analysis.join("c.MD"), "organoid with upper-case extension").unwrap();
        fs::write(analysis.join("nested/d.md"), "deep ORGANOID protocol").unwrap();
        fs::write(analysis.join("e.md"), "unrelated").unwrap();
        dir
    }

    #[test]
    fn matches_case_insensitively_and_recursively() {
        let dir = lab();
        let config = ResearchConfig::default().with_root(dir.path());
        let mut collected = Vec::new();
        scan_directories(&config, "organoid", &mut collected);

        let sources: Vec<_> = collected.iter().map(|s| s.source.as_str()).collect();
        assert_eq!(sources, vec!["01-Analysis/a.md", "01-Analysis/d.md"]);
    }

    #[test]
    fn respects_existing_snippets_in_cap() {
        let dir = lab();
        let config = ResearchConfig {
            max_collected: 1,
            ..ResearchConfig::default().with_root(dir.path())
        };
        let mut collected = vec![RetrievedSnippet::from_index("idx", "hit", 1000)];
        scan_directories(&config, "organoid", &mut collected);
        assert_eq!(collected.len(), 1);
    }

    #[test]
    fn missing_root_yields_nothing() {
        let config = ResearchConfig::default().with_root("/definitely/not/here");
        let mut collected = Vec::new();
        scan_directories(&config, "organoid", &mut collected);
        assert!(collected.is_empty());
    }

    #[test]
    fn extension_match_is_exact() {
        assert!(has_extension(Path::new("x/a.md"), "md"));
        assert!(!has_extension(Path::new("x/a.MD"), "md"));
        assert!(!has_extension(Path::new("x/a.mdx"), "md"));
        assert!(!has_extension(Path::new("x/md"), "md"));
    }
}
