//! End-to-end retrieval tests against a temporary lab folder.

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use vitro_llm::{MockBackend, TaskType};
use vitro_research::{ResearchConfig, ResearchEngine, SnippetOrigin, NO_RESULTS_MESSAGE};
use vitro_vectors::{
    DocumentIndex, InMemoryIndex, IndexHit, IndexStatus, VectorError, VectorResult,
};

/// Index that always fails, standing in for an unreachable service.
struct BrokenIndex;

impl DocumentIndex for BrokenIndex {
    fn name(&self) -> &str {
        "broken"
    }

    fn search(&self, _query: &str, _n_results: usize) -> VectorResult<Vec<IndexHit>> {
        Err(VectorError::Unavailable("index offline".into()))
    }

    fn status(&self) -> IndexStatus {
        IndexStatus {
            backend: "broken".into(),
            documents: 0,
            dimension: 0,
            ready: false,
        }
    }
}

/// Index returning a fixed list of hits regardless of the query.
struct FixedIndex(Vec<IndexHit>);

impl DocumentIndex for FixedIndex {
    fn name(&self) -> &str {
        "fixed"
    }

    fn search(&self, _query: &str, n_results: usize) -> VectorResult<Vec<IndexHit>> {
        Ok(self.0.iter().take(n_results).cloned().collect())
    }

    fn status(&self) -> IndexStatus {
        IndexStatus {
            backend: "fixed".into(),
            documents: self.0.len(),
            dimension: 64,
            ready: true,
        }
    }
}

fn hit(source: &str, content: &str) -> IndexHit {
    IndexHit {
        source: source.into(),
        content: content.into(),
        score: 1.0,
    }
}

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn engine_at<I: DocumentIndex>(root: &Path, index: I) -> ResearchEngine<I, MockBackend> {
    ResearchEngine::new(index, MockBackend::new().with_response("Topic:", "council answer"))
        .with_config(ResearchConfig::default().with_root(root))
}

#[tokio::test]
async fn no_matches_returns_fixed_message_without_reasoning() {
    let lab = TempDir::new().unwrap();
    write(lab.path(), "01-Analysis/a.md", "nothing relevant here");

    let engine = engine_at(lab.path(), InMemoryIndex::default());
    let answer = engine.analyze("decidualization", false).await.unwrap();

    assert_eq!(answer, NO_RESULTS_MESSAGE);
    assert_eq!(engine.backend().call_count(), 0);
}

#[tokio::test]
async fn empty_lab_and_broken_index_still_succeeds() {
    let lab = TempDir::new().unwrap();
    let engine = engine_at(lab.path(), BrokenIndex);

    let answer = engine.analyze("organoid", true).await.unwrap();
    assert_eq!(answer, NO_RESULTS_MESSAGE);
    assert_eq!(engine.backend().call_count(), 0);
}

#[tokio::test]
async fn broken_index_degrades_to_filesystem_results() {
    let lab = TempDir::new().unwrap();
    write(lab.path(), "02-Literature/wnt.md", "Wnt3a keeps the Organoid proliferative");

    let engine = engine_at(lab.path(), BrokenIndex);
    let answer = engine.analyze("organoid", false).await.unwrap();

    assert_eq!(answer, "council answer");
    let calls = engine.backend().calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].task_type, TaskType::General);
    assert!(calls[0].prompt.contains("Source (02-Literature/wnt.md)"));
}

#[tokio::test]
async fn debate_tags_call_and_uses_debate_template() {
    let lab = TempDir::new().unwrap();
    write(lab.path(), "01-Analysis/a.md", "progesterone resistance in endometrium");

    let engine = engine_at(lab.path(), BrokenIndex);
    engine.analyze("Progesterone", true).await.unwrap();

    let calls = engine.backend().calls();
    assert_eq!(calls[0].task_type, TaskType::Debate);
    assert!(calls[0].prompt.contains("Opposing Hypothesis A"));
    assert!(calls[0].prompt.contains("Topic: 'Progesterone'"));
}

#[tokio::test]
async fn at_most_eight_snippets_of_at_most_1000_chars_reach_the_prompt() {
    let lab = TempDir::new().unwrap();
    let body = format!("organoid {}", "z".repeat(5000));
    for i in 0..15 {
        write(lab.path(), &format!("03-Vault/note{:02}.md", i), &body);
    }

    let engine = engine_at(lab.path(), BrokenIndex);
    engine.analyze("organoid", false).await.unwrap();

    let prompt = &engine.backend().calls()[0].prompt;
    assert_eq!(prompt.matches("Source (03-Vault/").count(), 8);
    assert!(prompt.contains("note07.md"));
    assert!(!prompt.contains("note08.md"));
    assert!(!prompt.contains(&"z".repeat(1000)));
    assert!(prompt.contains(&"z".repeat(991)));
}

#[test]
fn scan_stops_at_ten_snippets() {
    let lab = TempDir::new().unwrap();
    for i in 0..5 {
        write(lab.path(), &format!("01-Analysis/a{}.md", i), "organoid");
        write(lab.path(), &format!("02-Literature/b{}.md", i), "organoid");
        write(lab.path(), &format!("03-Vault/c{}.md", i), "organoid");
    }

    let engine = engine_at(lab.path(), BrokenIndex);
    let snippets = engine.collect_snippets("organoid");

    assert_eq!(snippets.len(), 10);
    assert_eq!(snippets[0].source, "01-Analysis/a0.md");
    assert_eq!(snippets[4].source, "01-Analysis/a4.md");
    assert_eq!(snippets[5].source, "02-Literature/b0.md");
    assert_eq!(snippets[9].source, "02-Literature/b4.md");
    assert!(snippets.iter().all(|s| !s.source.starts_with("03-Vault")));
}

#[test]
fn index_hits_come_first_and_count_toward_the_cap() {
    let lab = TempDir::new().unwrap();
    for i in 0..10 {
        write(lab.path(), &format!("01-Analysis/n{}.md", i), "stem cell niche");
    }
    let hits = (0..7).map(|i| hit(&format!("drive/{}", i), "stem")).collect();

    let engine = engine_at(lab.path(), FixedIndex(hits));
    let snippets = engine.collect_snippets("stem");

    assert_eq!(snippets.len(), 10);
    // only five index hits are requested
    assert!(snippets[..5].iter().all(|s| s.origin == SnippetOrigin::VectorIndex));
    assert_eq!(snippets[5].source, "01-Analysis/n0.md");
    assert_eq!(snippets[9].source, "01-Analysis/n4.md");
}

#[test]
fn index_hit_content_is_truncated() {
    let lab = TempDir::new().unwrap();
    let engine = engine_at(lab.path(), FixedIndex(vec![hit("drive/big", &"q".repeat(3000))]));

    let snippets = engine.collect_snippets("anything");
    assert_eq!(snippets.len(), 1);
    assert_eq!(snippets[0].content.chars().count(), 1000);
}

#[test]
fn unreadable_files_are_skipped() {
    let lab = TempDir::new().unwrap();
    let bad = lab.path().join("01-Analysis/binary.md");
    fs::create_dir_all(bad.parent().unwrap()).unwrap();
    fs::write(&bad, [0xff, 0xfe, 0x00, 0x6f]).unwrap();
    write(lab.path(), "01-Analysis/good.md", "organoid");

    let engine = engine_at(lab.path(), BrokenIndex);
    let snippets = engine.collect_snippets("organoid");

    assert_eq!(snippets.len(), 1);
    assert_eq!(snippets[0].source, "01-Analysis/good.md");
}

#[tokio::test]
async fn reasoning_failure_is_propagated() {
    let lab = TempDir::new().unwrap();
    write(lab.path(), "01-Analysis/a.md", "organoid");

    let engine = ResearchEngine::new(BrokenIndex, MockBackend::failing("model offline"))
        .with_config(ResearchConfig::default().with_root(lab.path()));

    let err = engine.analyze("organoid", false).await.unwrap_err();
    assert!(err.to_string().contains("model offline"));
    assert_eq!(engine.backend().call_count(), 1);
}

#[test]
fn stats_pass_through_index_status() {
    let engine = engine_at(Path::new("."), FixedIndex(vec![hit("a", "b"), hit("c", "d")]));
    let stats = engine.get_stats();
    assert_eq!(stats.backend, "fixed");
    assert_eq!(stats.documents, 2);
    assert_eq!(stats.dimension, 64);
    assert!(stats.ready);
}
