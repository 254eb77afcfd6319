//! Stand-ins for external literature, gene and publishing services.
//!
//! Nothing here performs network I/O; each call returns a placeholder
//! shaped like the real service's response.

use crate::planner::SampleSummary;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Prepared literature query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiteratureQuery {
    pub query: String,
    pub database: String,
    pub status: String,
    pub estimated_results: u32,
}

/// Placeholder gene annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneRecord {
    pub gene: String,
    pub organism: String,
    pub pathways: Vec<String>,
    pub diseases: Vec<String>,
    pub status: String,
}

/// Receipt for a published analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Publication {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub format: String,
    /// Sample count of the published summary.
    pub n: usize,
}

/// External tool adapters.
#[derive(Debug, Clone, Default)]
pub struct ToolFacade;

impl ToolFacade {
    pub fn new() -> Self {
        Self
    }

    /// Known databases as `(key, description)`.
    pub fn databases(&self) -> &'static [(&'static str, &'static str)] {
        &[
            ("pubmed", "biomedical literature database"),
            ("gene_ontology", "gene function classification"),
            ("ncbi", "National Center for Biotechnology Information"),
        ]
    }

    /// Join keywords with `AND` into a PubMed query.
    pub fn search_literature(&self, keywords: &[&str]) -> LiteratureQuery {
        let query = keywords.join(" AND ");
        info!(query = %query, "searching literature");
        LiteratureQuery {
            query,
            database: "PubMed".into(),
            status: "ready".into(),
            estimated_results: 0,
        }
    }

    pub fn fetch_gene_data(&self, gene: &str) -> GeneRecord {
        info!(gene, "fetching gene data");
        GeneRecord {
            gene: gene.to_string(),
            organism: "Homo sapiens".into(),
            pathways: Vec::new(),
            diseases: Vec::new(),
            status: "ready".into(),
        }
    }

    pub fn publish_results(&self, summary: &SampleSummary) -> Publication {
        info!(n = summary.n, "publishing results");
        Publication {
            status: "published".into(),
            timestamp: Utc::now(),
            format: "MD + JSON".into(),
            n: summary.n,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::ExperimentPlanner;

    #[test]
    fn literature_query_joins_keywords() {
        let q = ToolFacade::new().search_literature(&["endometrium", "organoid", "Wnt"]);
        assert_eq!(q.query, "endometrium AND organoid AND Wnt");
        assert_eq!(q.database, "PubMed");
        assert_eq!(q.status, "ready");
        assert_eq!(q.estimated_results, 0);
    }

    #[test]
    fn gene_stub_is_human() {
        let g = ToolFacade::new().fetch_gene_data("HOXA10");
        assert_eq!(g.gene, "HOXA10");
        assert_eq!(g.organism, "Homo sapiens");
        assert!(g.pathways.is_empty() && g.diseases.is_empty());
    }

    #[test]
    fn publish_stamps_time() {
        let before = Utc::now();
        let summary = ExperimentPlanner::new().summarize(&[1.0, 2.0]).unwrap();
        let p = ToolFacade::new().publish_results(&summary);
        assert_eq!(p.status, "published");
        assert_eq!(p.format, "MD + JSON");
        assert_eq!(p.n, 2);
        assert!(p.timestamp >= before);
    }

    #[test]
    fn databases_listed() {
        let keys: Vec<_> = ToolFacade::new().databases().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["pubmed", "gene_ontology", "ncbi"]);
    }
}
