// ==========================================
// Repository integration tests
// ==========================================
// Round-trips against a real SQLite file, plus filter and ordering
// behavior of the fact-table queries.
// ==========================================

mod test_helpers;

use chrono::Utc;
use manufacturing_ops::domain::types::{KaizenCategory, KaizenPriority, KaizenStatus};
use manufacturing_ops::domain::{FiveSAudit, KaizenIdea, QualityInspection};
use manufacturing_ops::domain::ResourceConsumption;
use manufacturing_ops::repository::{
    DateRange, EntityFilter, FiveSRepository, KaizenRepository, MasterDataRepository,
    ProductionQuery, ProductionRepository, QualityRepository, RepositoryError,
    ResourceRepository,
};
use test_helpers::{
    create_test_db, parse_date, record, seed_master, TEST_LINE_ID, TEST_PLANT_ID, TEST_PRODUCT_ID,
};

#[test]
fn test_master_data_round_trip() {
    let (_tmp, db_path) = create_test_db().expect("create test db");
    seed_master(&db_path).expect("seed master");

    let master = MasterDataRepository::new(&db_path).expect("open repo");

    let plants = master.find_all_plants().expect("find plants");
    assert_eq!(plants.len(), 1);
    assert_eq!(plants[0].id, TEST_PLANT_ID);
    assert_eq!(plants[0].timezone, "UTC");

    let lines = master.find_all_lines().expect("find lines");
    assert_eq!(lines.len(), 1);
    assert!(lines[0].is_active());

    let products = master.find_all_products().expect("find products");
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].sku, "SKU-TEST");

    let employees = master.find_all_employees().expect("find employees");
    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0].shift, "Shift 1");
}

#[test]
fn test_production_insert_and_ordered_fetch() {
    let (_tmp, db_path) = create_test_db().expect("create test db");
    seed_master(&db_path).expect("seed master");

    let repo = ProductionRepository::new(&db_path).expect("open repo");

    let mut early = record("Shift 1", "2024-01-01", Some(100), Some(95), Some(90), Some(15));
    early.hour_of_day = 1;
    let mut late = record("Shift 1", "2024-01-02", Some(50), Some(50), Some(48), None);
    late.hour_of_day = 3;
    let mut mid = record("Shift 1", "2024-01-02", Some(60), Some(55), Some(52), None);
    mid.hour_of_day = 1;

    repo.insert(&early).expect("insert early");
    repo.insert(&late).expect("insert late");
    repo.insert(&mid).expect("insert mid");

    let rows = repo.find(&ProductionQuery::default()).expect("find");
    assert_eq!(rows.len(), 3);
    // newest date first, then latest hour first
    assert_eq!(rows[0].id, late.id);
    assert_eq!(rows[1].id, mid.id);
    assert_eq!(rows[2].id, early.id);

    // optional counters survive the round trip as absent
    assert_eq!(rows[0].downtime_minutes, None);
    assert_eq!(rows[2].downtime_minutes, Some(15));
}

#[test]
fn test_production_date_range_and_limit() {
    let (_tmp, db_path) = create_test_db().expect("create test db");
    seed_master(&db_path).expect("seed master");

    let repo = ProductionRepository::new(&db_path).expect("open repo");
    let batch = vec![
        record("Shift 1", "2024-01-01", Some(10), Some(10), Some(10), None),
        record("Shift 1", "2024-01-02", Some(10), Some(10), Some(10), None),
        record("Shift 1", "2024-01-03", Some(10), Some(10), Some(10), None),
    ];
    assert_eq!(repo.insert_batch(&batch).expect("insert batch"), 3);

    let ranged = repo
        .find(&ProductionQuery {
            date_range: Some(DateRange {
                from: parse_date("2024-01-02"),
                to: parse_date("2024-01-03"),
            }),
            ..Default::default()
        })
        .expect("find ranged");
    assert_eq!(ranged.len(), 2);
    assert!(ranged
        .iter()
        .all(|r| r.production_date >= parse_date("2024-01-02")));

    let capped = repo
        .find(&ProductionQuery {
            limit: 2,
            ..Default::default()
        })
        .expect("find capped");
    assert_eq!(capped.len(), 2);

    let filtered = repo
        .find(&ProductionQuery {
            plant_id: Some("no-such-plant".to_string()),
            ..Default::default()
        })
        .expect("find filtered");
    assert!(filtered.is_empty());
}

#[test]
fn test_production_insert_rejects_unknown_line() {
    let (_tmp, db_path) = create_test_db().expect("create test db");
    seed_master(&db_path).expect("seed master");

    let repo = ProductionRepository::new(&db_path).expect("open repo");
    let mut orphan = record("Shift 1", "2024-01-01", Some(10), Some(10), Some(10), None);
    orphan.line_id = "no-such-line".to_string();

    let err = repo.insert(&orphan).expect_err("foreign key must reject");
    match err {
        RepositoryError::ForeignKeyViolation(_) | RepositoryError::DatabaseQueryError(_) => {}
        other => panic!("unexpected error variant: {:?}", other),
    }
}

#[test]
fn test_quality_round_trip_with_filters() {
    let (_tmp, db_path) = create_test_db().expect("create test db");
    seed_master(&db_path).expect("seed master");

    let repo = QualityRepository::new(&db_path).expect("open repo");
    let inspection = QualityInspection {
        id: "qc-1".to_string(),
        plant_id: TEST_PLANT_ID.to_string(),
        line_id: TEST_LINE_ID.to_string(),
        product_id: TEST_PRODUCT_ID.to_string(),
        batch_number: "BATCH001".to_string(),
        inspection_date: parse_date("2024-01-05"),
        inspector_id: None,
        inspected_quantity: 100,
        passed_quantity: 94,
        failed_quantity: 6,
        yield_percent: 94.0,
        defect_category: Some("Dimensional".to_string()),
        comments: None,
        created_at: Utc::now().naive_utc(),
    };
    repo.insert(&inspection).expect("insert");

    let all = repo.find(&EntityFilter::all()).expect("find all");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].yield_percent, 94.0);
    assert_eq!(all[0].defect_category.as_deref(), Some("Dimensional"));

    let other_plant = repo
        .find(&EntityFilter::for_plant("other-plant"))
        .expect("find other");
    assert!(other_plant.is_empty());
}

#[test]
fn test_five_s_round_trip() {
    let (_tmp, db_path) = create_test_db().expect("create test db");
    seed_master(&db_path).expect("seed master");

    let repo = FiveSRepository::new(&db_path).expect("open repo");
    let audit = FiveSAudit {
        id: "5s-1".to_string(),
        plant_id: TEST_PLANT_ID.to_string(),
        line_id: TEST_LINE_ID.to_string(),
        audit_date: parse_date("2024-02-01"),
        auditor_id: None,
        sort_score: 85,
        set_in_order_score: 78,
        shine_score: 92,
        standardize_score: 88,
        sustain_score: 75,
        overall_score: 83.6,
        comments: None,
        created_at: Utc::now().naive_utc(),
    };
    repo.insert(&audit).expect("insert");

    let audits = repo.find(&EntityFilter::all()).expect("find");
    assert_eq!(audits.len(), 1);
    assert_eq!(audits[0].overall_score, 83.6);
    assert_eq!(audits[0].audit_date, parse_date("2024-02-01"));
}

#[test]
fn test_resource_round_trip() {
    let (_tmp, db_path) = create_test_db().expect("create test db");
    seed_master(&db_path).expect("seed master");

    let repo = ResourceRepository::new(&db_path).expect("open repo");
    let row = ResourceConsumption {
        id: "res-1".to_string(),
        plant_id: TEST_PLANT_ID.to_string(),
        line_id: TEST_LINE_ID.to_string(),
        consumption_date: parse_date("2024-03-01"),
        shift: "Shift 1".to_string(),
        labor_hours: 64.0,
        labor_cost: 1_280.0,
        power_kwh: 900.0,
        power_cost: 135.0,
        fuel_liters: 40.0,
        fuel_cost: 60.0,
        maintenance_cost: 200.0,
        other_costs: 25.0,
        total_cost: 1_700.0,
        created_at: Utc::now().naive_utc(),
    };
    repo.insert(&row).expect("insert");

    let rows = repo.find(&EntityFilter::all()).expect("find");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].total_cost, 1_700.0);
    assert_eq!(rows[0].shift, "Shift 1");
}

#[test]
fn test_kaizen_round_trip_preserves_enums() {
    let (_tmp, db_path) = create_test_db().expect("create test db");
    seed_master(&db_path).expect("seed master");

    let repo = KaizenRepository::new(&db_path).expect("open repo");
    let ts = Utc::now().naive_utc();
    let idea = KaizenIdea {
        id: "kaizen-1".to_string(),
        title: "Reduce Changeover Time".to_string(),
        description: "Changeover takes too long".to_string(),
        category: KaizenCategory::CostReduction,
        priority: KaizenPriority::High,
        current_state: "Manual".to_string(),
        proposed_solution: "Quick-change tooling".to_string(),
        expected_benefit: "Shorter changeover".to_string(),
        estimated_savings: 15_000.0,
        submitter_id: None,
        status: KaizenStatus::UnderReview,
        implementation_date: Some(parse_date("2024-06-01")),
        actual_savings: None,
        plant_id: TEST_PLANT_ID.to_string(),
        line_id: TEST_LINE_ID.to_string(),
        created_at: ts,
        updated_at: ts,
    };
    repo.insert(&idea).expect("insert");

    let ideas = repo.find(&EntityFilter::all()).expect("find");
    assert_eq!(ideas.len(), 1);
    assert_eq!(ideas[0].category, KaizenCategory::CostReduction);
    assert_eq!(ideas[0].priority, KaizenPriority::High);
    assert_eq!(ideas[0].status, KaizenStatus::UnderReview);
    assert_eq!(ideas[0].implementation_date, Some(parse_date("2024-06-01")));
}
