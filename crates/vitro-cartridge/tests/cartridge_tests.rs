//! Session lifecycle and policy tests.

use tempfile::TempDir;
use vitro_cartridge::prelude::*;
use vitro_cartridge::{CartridgeStatus, EthicsVerdict, ProjectStatus};

fn hypothesis() -> Hypothesis {
    Hypothesis::new(
        "Hormone stimulation enhances organoid maturation",
        ResearchDomain::UterineOrganoid,
    )
    .with_evidence("Literature support")
    .with_evidence("Preliminary data")
    .with_confidence(0.7)
    .with_design("3D culture with hormones")
}

fn cartridge() -> Cartridge {
    Cartridge::new(KnowledgeStore::builtin().unwrap())
}

#[test]
fn ethics_rules() {
    let ethics = EthicsEvaluator::new();

    let animal = ExperimentIntent {
        animal_test: true,
        requires_human_sample: false,
        consent: true,
    };
    assert!(!ethics.validate(&animal).ok);

    let no_consent = ExperimentIntent {
        animal_test: false,
        requires_human_sample: true,
        consent: false,
    };
    assert!(!ethics.validate(&no_consent).ok);

    let no_sample = ExperimentIntent {
        animal_test: false,
        requires_human_sample: false,
        consent: false,
    };
    assert!(ethics.validate(&no_sample).ok);
}

#[test]
fn summary_statistics() {
    let planner = ExperimentPlanner::new();
    assert!(planner.summarize(&[]).is_none());
    assert_eq!(planner.summarize(&[5.0]).unwrap().stdev, 0.0);

    let s = planner.summarize(&[2.0, 4.0, 6.0]).unwrap();
    assert_eq!(s.mean, 4.0);
    assert_eq!(s.median, 4.0);
    assert_eq!(s.min, 2.0);
    assert_eq!(s.max, 6.0);
    assert_eq!(s.n, 3);
}

#[test]
fn operations_require_activation() {
    let mut c = cartridge();

    let err = c.route_query("organoid").unwrap_err();
    assert!(matches!(err, CartridgeError::Inactive));
    assert_eq!(err.to_response().status, "inactive");

    let err = c.start_project(&hypothesis()).unwrap_err();
    assert_eq!(err.status(), "inactive");
    assert!(c.projects().is_empty());

    c.activate();
    assert!(c.route_query("organoid").is_ok());
    assert!(c.start_project(&hypothesis()).is_ok());
}

#[test]
fn deactivated_session_rejects_again() {
    let mut c = cartridge();
    c.activate();
    c.deactivate();
    assert_eq!(c.mode(), Mode::Standby);
    assert!(matches!(c.route_query("stem"), Err(CartridgeError::Inactive)));
}

#[test]
fn project_ids_are_sequential_and_padded() {
    let mut c = cartridge();
    c.activate();

    let first = c.start_project(&hypothesis()).unwrap();
    let second = c.start_project(&hypothesis()).unwrap();
    assert_eq!(first.id, "BIO_001");
    assert_eq!(second.id, "BIO_002");
    assert!(second.id > first.id);

    assert_eq!(first.status, ProjectStatus::Initiated);
    assert_eq!(first.ethics, EthicsVerdict::Approved);
    assert_eq!(first.plan.timeline.total(), 34);
    assert_eq!(c.status().projects, 2);
}

#[test]
fn reactivation_matches_single_activation() {
    let mut once = cartridge();
    once.activate();

    let mut cycled = cartridge();
    cycled.activate();
    cycled.deactivate();
    let report = cycled.activate();

    let expected: CartridgeStatus = once.status();
    assert_eq!(cycled.status(), expected);
    assert!(cycled.is_active());
    assert_eq!(cycled.mode(), Mode::Active);
    assert_eq!(report.confidence, 0.85);
}

#[test]
fn activate_is_idempotent() {
    let mut c = cartridge();
    c.activate();
    c.start_project(&hypothesis()).unwrap();
    c.activate();
    assert!(c.is_active());
    assert_eq!(c.projects().len(), 1);
}

#[test]
fn session_over_persisted_knowledge() {
    let dir = TempDir::new().unwrap();
    let mut store = KnowledgeStore::builtin().unwrap();
    store.store(
        "stem_cells",
        ResearchRecord::new("BMP4 dose", "higher dose speeds differentiation"),
    );
    store.save_snapshot(dir.path()).unwrap();

    let mut c = Cartridge::new(KnowledgeStore::open(dir.path()).unwrap());
    assert_eq!(
        c.knowledge().snapshot_status(),
        &SnapshotStatus::Loaded { entries: 1 }
    );

    c.activate();
    let r = c.route_query("iPSC stem protocols").unwrap();
    assert_eq!(r.domain, ResearchDomain::StemCells);
    assert_eq!(r.research_value, 0.9);

    let ctx = c.knowledge().context(ResearchDomain::StemCells);
    assert_eq!(ctx.recent_data[0].title, "BMP4 dose");
}
