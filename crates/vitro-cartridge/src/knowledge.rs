//! Static biology knowledge plus accumulated research results.
//!
//! The domain fact sheets are compiled in and validated when the store is
//! built. Research results accumulate in memory and can be persisted as a
//! two-file snapshot: an index marker (`index.bin`) and the data itself
//! (`knowledge_data.json`). Loading the snapshot is best-effort; whatever
//! happens is recorded in [`SnapshotStatus`].

use crate::error::{CartridgeError, CartridgeResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{info, warn};
use vitro_core::error::{ensure_unit_interval, ValidationError, VitroError};
use vitro_core::types::ResearchDomain;

/// Index marker; the data file is only read when this exists.
pub const INDEX_FILE: &str = "index.bin";
/// Serialized research data.
pub const DATA_FILE: &str = "knowledge_data.json";
/// Default number of records returned by [`KnowledgeStore::search`].
pub const DEFAULT_SEARCH_LIMIT: usize = 10;
/// Confidence attached to every domain context.
pub const CONTEXT_CONFIDENCE: f64 = 0.85;

const INDEX_MAGIC: &[u8] = b"VITRO-KNOWLEDGE\x01";

/// Culture parameters for organoid work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CultureConditions {
    /// Incubation temperature in °C.
    pub temperature_c: f64,
    /// CO2 concentration in percent.
    pub co2_percent: f64,
    pub media: String,
    pub growth_factors: Vec<String>,
}

/// Domain-specific part of a fact sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DomainDetails {
    Organoid {
        significance: String,
        culture: CultureConditions,
        citations: u32,
        recent_papers: Vec<String>,
    },
    StemCells {
        cell_types: Vec<String>,
        differentiation: String,
        /// Pluripotency score (0.0-1.0).
        pluripotency: f64,
        protocols: Vec<String>,
    },
    Endometrium {
        structure: String,
        function: String,
        cell_types: Vec<String>,
        menstrual_phases: Vec<String>,
    },
}

/// Static fact sheet for one research domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainRecord {
    pub domain: ResearchDomain,
    pub definition: String,
    pub markers: Vec<String>,
    /// Maturity of the field (0.0-1.0).
    pub research_level: f64,
    pub details: DomainDetails,
}

impl DomainRecord {
    /// Check ranges and required fields.
    pub fn validate(&self) -> vitro_core::error::Result<()> {
        if self.definition.trim().is_empty() {
            return Err(VitroError::empty_field(format!("{}.definition", self.domain)));
        }
        ensure_unit_interval("research_level", self.research_level)?;
        if let DomainDetails::StemCells { pluripotency, .. } = &self.details {
            ensure_unit_interval("pluripotency", *pluripotency)?;
        }
        Ok(())
    }
}

/// A stored analysis result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchRecord {
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub metrics: BTreeMap<String, f64>,
}

impl ResearchRecord {
    pub fn new(title: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
            source: None,
            metrics: BTreeMap::new(),
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_metric(mut self, name: impl Into<String>, value: f64) -> Self {
        self.metrics.insert(name.into(), value);
        self
    }
}

/// Outcome of the startup snapshot load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SnapshotStatus {
    /// No index marker; the store started empty.
    Missing,
    /// Snapshot read; `entries` is the number of keys loaded.
    Loaded { entries: usize },
    /// Index marker present but the data could not be read.
    Corrupt { reason: String },
}

impl SnapshotStatus {
    /// True unless the snapshot was present and unreadable.
    pub fn is_healthy(&self) -> bool {
        !matches!(self, SnapshotStatus::Corrupt { .. })
    }
}

/// Everything known about one domain, as handed to the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainContext {
    pub domain: ResearchDomain,
    pub knowledge: Option<DomainRecord>,
    pub recent_data: Vec<ResearchRecord>,
    pub confidence: f64,
}

/// Domain fact sheets plus research results keyed by domain or query.
#[derive(Debug, Clone)]
pub struct KnowledgeStore {
    records: Vec<DomainRecord>,
    research_data: BTreeMap<String, Vec<ResearchRecord>>,
    snapshot: SnapshotStatus,
}

impl KnowledgeStore {
    /// Built-in knowledge only, no snapshot.
    pub fn builtin() -> CartridgeResult<Self> {
        let records = builtin_records();
        for (key, record) in &records {
            if record.domain.as_str() != *key {
                return Err(VitroError::from(ValidationError::DomainMismatch {
                    key: key.to_string(),
                    declared: record.domain.to_string(),
                })
                .into());
            }
            record.validate()?;
        }

        Ok(Self {
            records: records.into_iter().map(|(_, r)| r).collect(),
            research_data: BTreeMap::new(),
            snapshot: SnapshotStatus::Missing,
        })
    }

    /// Built-in knowledge plus a best-effort snapshot load from `dir`.
    ///
    /// Only fails if the built-in tables are invalid.
    pub fn open(dir: impl AsRef<Path>) -> CartridgeResult<Self> {
        let mut store = Self::builtin()?;
        let dir = dir.as_ref();

        if !dir.join(INDEX_FILE).exists() {
            return Ok(store);
        }

        info!(dir = %dir.display(), "loading knowledge snapshot");
        match load_data(&dir.join(DATA_FILE)) {
            Ok(data) => {
                info!(entries = data.len(), "knowledge snapshot loaded");
                store.snapshot = SnapshotStatus::Loaded { entries: data.len() };
                store.research_data = data;
            }
            Err(e) => {
                warn!(error = %e, "knowledge snapshot load failed, starting empty");
                store.snapshot = SnapshotStatus::Corrupt {
                    reason: e.to_string(),
                };
            }
        }
        Ok(store)
    }

    /// Fact sheet for a domain key such as `"uterine_organoid"`.
    pub fn recall(&self, domain_key: &str) -> Option<&DomainRecord> {
        self.records.iter().find(|r| r.domain.as_str() == domain_key)
    }

    /// All fact sheets.
    pub fn records(&self) -> &[DomainRecord] {
        &self.records
    }

    /// First `limit` results stored under exactly `query`.
    pub fn search(&self, query: &str, limit: usize) -> Vec<ResearchRecord> {
        info!(query, "searching stored research");
        self.research_data
            .get(query)
            .map(|records| records.iter().take(limit).cloned().collect())
            .unwrap_or_default()
    }

    /// Append a result under `domain_key`.
    pub fn store(&mut self, domain_key: impl Into<String>, record: ResearchRecord) {
        let key = domain_key.into();
        info!(domain = %key, title = %record.title, "research result stored");
        self.research_data.entry(key).or_default().push(record);
    }

    /// All stored results, by key.
    pub fn research_data(&self) -> &BTreeMap<String, Vec<ResearchRecord>> {
        &self.research_data
    }

    pub fn context(&self, domain: ResearchDomain) -> DomainContext {
        DomainContext {
            domain,
            knowledge: self.recall(domain.as_str()).cloned(),
            recent_data: self
                .research_data
                .get(domain.as_str())
                .cloned()
                .unwrap_or_default(),
            confidence: CONTEXT_CONFIDENCE,
        }
    }

    pub fn snapshot_status(&self) -> &SnapshotStatus {
        &self.snapshot
    }

    /// Write the index marker and the research data under `dir`.
    pub fn save_snapshot(&self, dir: impl AsRef<Path>) -> CartridgeResult<()> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(VitroError::from)?;

        let json = serde_json::to_string_pretty(&self.research_data).map_err(VitroError::from)?;
        fs::write(dir.join(DATA_FILE), json).map_err(VitroError::from)?;
        fs::write(dir.join(INDEX_FILE), INDEX_MAGIC).map_err(VitroError::from)?;

        info!(dir = %dir.display(), entries = self.research_data.len(), "knowledge snapshot saved");
        Ok(())
    }
}

fn load_data(path: &Path) -> Result<BTreeMap<String, Vec<ResearchRecord>>, CartridgeError> {
    let raw = fs::read_to_string(path).map_err(VitroError::from)?;
    let data = serde_json::from_str(&raw).map_err(VitroError::from)?;
    Ok(data)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn builtin_records() -> Vec<(&'static str, DomainRecord)> {
    vec![
        (
            "uterine_organoid",
            DomainRecord {
                domain: ResearchDomain::UterineOrganoid,
                definition: "3D mini-tissue derived from human endometrial cells".into(),
                markers: strings(&["E-cadherin", "Vimentin", "Cytokeratin-7"]),
                research_level: 0.85,
                details: DomainDetails::Organoid {
                    significance: "Modelling female reproductive disease and drug screening".into(),
                    culture: CultureConditions {
                        temperature_c: 37.0,
                        co2_percent: 5.0,
                        media: "Advanced DMEM/F12".into(),
                        growth_factors: strings(&["EGF", "FGF10", "Wnt3a"]),
                    },
                    citations: 250,
                    recent_papers: Vec::new(),
                },
            },
        ),
        (
            "stem_cells",
            DomainRecord {
                domain: ResearchDomain::StemCells,
                definition: "Pluripotent cells that can be directed toward endometrial lineages".into(),
                markers: strings(&["OCT4", "NANOG", "SOX2"]),
                research_level: 0.85,
                details: DomainDetails::StemCells {
                    cell_types: strings(&[
                        "ESC (embryonic stem cell)",
                        "iPSC (induced pluripotent stem cell)",
                        "hESC",
                    ]),
                    differentiation: "Protocols inducing differentiation into endometrium".into(),
                    pluripotency: 0.9,
                    protocols: strings(&["BMP4-induced", "Activin-induced"]),
                },
            },
        ),
        (
            "endometrium",
            DomainRecord {
                domain: ResearchDomain::Endometrium,
                definition: "Uterine endometrium, the inner lining of the uterus".into(),
                markers: Vec::new(),
                research_level: 0.8,
                details: DomainDetails::Endometrium {
                    structure: "Uterine endometrium".into(),
                    function: "Embryo implantation and menstrual cycle regulation".into(),
                    cell_types: strings(&[
                        "epithelial cells",
                        "stromal cells",
                        "immune cells",
                        "vascular endothelial cells",
                    ]),
                    menstrual_phases: strings(&["menstrual", "proliferative", "secretory"]),
                },
            },
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn builtin_records_are_valid_and_recallable() {
        let store = KnowledgeStore::builtin().unwrap();
        assert_eq!(store.records().len(), 3);
        assert_eq!(store.snapshot_status(), &SnapshotStatus::Missing);

        let organoid = store.recall("uterine_organoid").unwrap();
        assert_eq!(organoid.markers, vec!["E-cadherin", "Vimentin", "Cytokeratin-7"]);
        match &organoid.details {
            DomainDetails::Organoid { culture, .. } => {
                assert_eq!(culture.temperature_c, 37.0);
                assert_eq!(culture.co2_percent, 5.0);
            }
            other => panic!("unexpected details: {:?}", other),
        }
        assert!(store.recall("cell_signaling").is_none());
    }

    #[test]
    fn out_of_range_level_is_rejected() {
        let mut record = KnowledgeStore::builtin().unwrap().records()[0].clone();
        record.research_level = 1.2;
        assert!(matches!(
            record.validate(),
            Err(VitroError::Validation(ValidationError::OutOfRange { .. }))
        ));
    }

    #[test]
    fn store_then_search_by_exact_key() {
        let mut store = KnowledgeStore::builtin().unwrap();
        for i in 0..12 {
            store.store("stem_cells", ResearchRecord::new(format!("run {}", i), "ok"));
        }
        assert_eq!(store.search("stem_cells", DEFAULT_SEARCH_LIMIT).len(), 10);
        assert_eq!(store.search("stem_cells", 3)[2].title, "run 2");
        assert!(store.search("stem", 10).is_empty());
    }

    #[test]
    fn context_carries_knowledge_and_recent_data() {
        let mut store = KnowledgeStore::builtin().unwrap();
        store.store("endometrium", ResearchRecord::new("phase map", "secretory"));

        let ctx = store.context(ResearchDomain::Endometrium);
        assert_eq!(ctx.confidence, 0.85);
        assert!(ctx.knowledge.is_some());
        assert_eq!(ctx.recent_data.len(), 1);

        let empty = store.context(ResearchDomain::TissueEngineering);
        assert!(empty.knowledge.is_none());
        assert!(empty.recent_data.is_empty());
    }

    #[test]
    fn snapshot_round_trip() {
        let dir = TempDir::new().unwrap();
        let mut store = KnowledgeStore::builtin().unwrap();
        store.store(
            "uterine_organoid",
            ResearchRecord::new("maturation", "E2 then P4")
                .with_source("01-Analysis/maturation.md")
                .with_metric("fold_change", 2.4),
        );
        store.save_snapshot(dir.path()).unwrap();

        let reopened = KnowledgeStore::open(dir.path()).unwrap();
        assert_eq!(reopened.snapshot_status(), &SnapshotStatus::Loaded { entries: 1 });
        let found = reopened.search("uterine_organoid", 10);
        assert_eq!(found[0].metrics["fold_change"], 2.4);
    }

    #[test]
    fn data_without_index_is_ignored() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(DATA_FILE), r#"{"x": []}"#).unwrap();

        let store = KnowledgeStore::open(dir.path()).unwrap();
        assert_eq!(store.snapshot_status(), &SnapshotStatus::Missing);
        assert!(store.research_data().is_empty());
    }

    #[test]
    fn corrupt_snapshot_degrades_to_empty() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(INDEX_FILE), INDEX_MAGIC).unwrap();
        fs::write(dir.path().join(DATA_FILE), "{not json").unwrap();

        let store = KnowledgeStore::open(dir.path()).unwrap();
        assert!(matches!(store.snapshot_status(), SnapshotStatus::Corrupt { .. }));
        assert!(!store.snapshot_status().is_healthy());
        assert!(store.research_data().is_empty());
        assert!(store.recall("endometrium").is_some());
    }

    #[test]
    fn missing_data_file_is_corrupt() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(INDEX_FILE), INDEX_MAGIC).unwrap();

        let store = KnowledgeStore::open(dir.path()).unwrap();
        assert!(matches!(store.snapshot_status(), SnapshotStatus::Corrupt { .. }));
    }
}
