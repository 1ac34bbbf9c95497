// ==========================================
// API integration tests
// ==========================================
// Validation, derived fields and the fetch+OEE contract, exercised
// through the composition root over both source kinds.
// ==========================================

mod test_helpers;

use manufacturing_ops::api::ApiError;
use manufacturing_ops::config::AppConfig;
use manufacturing_ops::datasource::FixtureDataSource;
use manufacturing_ops::domain::types::{KaizenCategory, KaizenPriority, KaizenStatus};
use manufacturing_ops::domain::{
    NewFiveSAudit, NewKaizenIdea, NewProductionRecord, NewQualityInspection,
    NewResourceConsumption,
};
use manufacturing_ops::repository::{EntityFilter, ProductionQuery};
use manufacturing_ops::AppState;
use std::sync::Arc;
use test_helpers::{create_test_db, parse_date, seed_master};

fn empty_fixture_app() -> AppState {
    AppState::from_source(AppConfig::fixture(), Arc::new(FixtureDataSource::empty()))
}

fn new_production(date: &str, hour: i64) -> NewProductionRecord {
    NewProductionRecord {
        plant_id: test_helpers::TEST_PLANT_ID.to_string(),
        line_id: test_helpers::TEST_LINE_ID.to_string(),
        product_id: test_helpers::TEST_PRODUCT_ID.to_string(),
        shift: "Shift 1".to_string(),
        production_date: parse_date(date),
        hour_of_day: hour,
        planned_production: Some(100),
        actual_production: Some(95),
        good_units: Some(90),
        rejected_units: Some(5),
        downtime_minutes: Some(15),
        downtime_reason: Some("Material shortage".to_string()),
        operator_id: None,
    }
}

#[tokio::test]
async fn test_fixture_app_serves_master_data() {
    let app = AppState::new(AppConfig::fixture()).expect("build app");

    let master = app.master.fetch_all().await.expect("fetch master");
    assert_eq!(master.plants.len(), 2);
    assert_eq!(master.production_lines.len(), 2);
    assert_eq!(master.products.len(), 2);
    assert_eq!(master.employees.len(), 2);
}

#[tokio::test]
async fn test_production_fetch_returns_records_and_oee() {
    let app = AppState::new(AppConfig::fixture()).expect("build app");

    let overview = app
        .production
        .fetch(&ProductionQuery::default())
        .await
        .expect("fetch production");

    // demo set: one record, planned 100 / actual 95 / good 90 / downtime 15
    assert_eq!(overview.records.len(), 1);
    assert_eq!(overview.oee.len(), 1);

    let m = &overview.oee[0];
    assert_eq!(m.shift, "Shift 1");
    assert_eq!(m.availability, 96.88);
    assert_eq!(m.performance, 95.0);
    assert_eq!(m.quality, 94.74); // 90/95 * 100
}

#[tokio::test]
async fn test_production_submit_assigns_identity_and_is_fetchable() {
    let app = empty_fixture_app();

    let stored = app
        .production
        .submit(new_production("2024-01-01", 1))
        .await
        .expect("submit");
    assert!(!stored.id.is_empty());

    let overview = app
        .production
        .fetch(&ProductionQuery::default())
        .await
        .expect("fetch");
    assert_eq!(overview.records.len(), 1);
    assert_eq!(overview.records[0].id, stored.id);
    assert_eq!(overview.oee.len(), 1);
}

#[tokio::test]
async fn test_production_submit_rejects_bad_hour() {
    let app = empty_fixture_app();

    let err = app
        .production
        .submit(new_production("2024-01-01", 0))
        .await
        .expect_err("hour 0 must be rejected");
    assert!(matches!(err, ApiError::InvalidInput(_)));

    let err = app
        .production
        .submit(new_production("2024-01-01", 25))
        .await
        .expect_err("hour 25 must be rejected");
    assert!(matches!(err, ApiError::InvalidInput(_)));
}

#[tokio::test]
async fn test_production_submit_rejects_negative_counters() {
    let app = empty_fixture_app();

    let mut input = new_production("2024-01-01", 1);
    input.good_units = Some(-1);

    let err = app.production.submit(input).await.expect_err("reject");
    assert!(matches!(err, ApiError::InvalidInput(_)));
}

#[tokio::test]
async fn test_quality_submit_derives_yield() {
    let app = empty_fixture_app();

    let inspection = app
        .quality
        .submit(NewQualityInspection {
            plant_id: test_helpers::TEST_PLANT_ID.to_string(),
            line_id: test_helpers::TEST_LINE_ID.to_string(),
            product_id: test_helpers::TEST_PRODUCT_ID.to_string(),
            batch_number: "BATCH001".to_string(),
            inspection_date: parse_date("2024-01-05"),
            inspector_id: None,
            inspected_quantity: 100,
            passed_quantity: 94,
            failed_quantity: 6,
            defect_category: Some("Dimensional".to_string()),
            comments: None,
        })
        .await
        .expect("submit");
    assert_eq!(inspection.yield_percent, 94.0);

    // an empty batch yields 0 instead of dividing by zero
    let empty_batch = app
        .quality
        .submit(NewQualityInspection {
            plant_id: test_helpers::TEST_PLANT_ID.to_string(),
            line_id: test_helpers::TEST_LINE_ID.to_string(),
            product_id: test_helpers::TEST_PRODUCT_ID.to_string(),
            batch_number: "BATCH002".to_string(),
            inspection_date: parse_date("2024-01-06"),
            inspector_id: None,
            inspected_quantity: 0,
            passed_quantity: 0,
            failed_quantity: 0,
            defect_category: None,
            comments: None,
        })
        .await
        .expect("submit empty batch");
    assert_eq!(empty_batch.yield_percent, 0.0);
}

#[tokio::test]
async fn test_five_s_submit_derives_overall_score_and_validates_range() {
    let app = empty_fixture_app();

    let audit_input = NewFiveSAudit {
        plant_id: test_helpers::TEST_PLANT_ID.to_string(),
        line_id: test_helpers::TEST_LINE_ID.to_string(),
        audit_date: parse_date("2024-02-01"),
        auditor_id: None,
        sort_score: 85,
        set_in_order_score: 78,
        shine_score: 92,
        standardize_score: 88,
        sustain_score: 75,
        comments: None,
    };
    let audit = app.five_s.submit(audit_input.clone()).await.expect("submit");
    assert_eq!(audit.overall_score, 83.6);

    let mut out_of_range = audit_input;
    out_of_range.shine_score = 101;
    let err = app.five_s.submit(out_of_range).await.expect_err("reject");
    assert!(matches!(err, ApiError::InvalidInput(_)));
}

#[tokio::test]
async fn test_resource_submit_derives_total_cost() {
    let app = empty_fixture_app();

    let row = app
        .resource
        .submit(NewResourceConsumption {
            plant_id: test_helpers::TEST_PLANT_ID.to_string(),
            line_id: test_helpers::TEST_LINE_ID.to_string(),
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
        })
        .await
        .expect("submit");
    assert_eq!(row.total_cost, 1_700.0);

    let rows = app.resource.fetch(&EntityFilter::all()).await.expect("fetch");
    assert_eq!(rows.len(), 1);
}

#[tokio::test]
async fn test_kaizen_submit_enters_funnel_as_submitted() {
    let app = empty_fixture_app();

    let idea = app
        .kaizen
        .submit(NewKaizenIdea {
            title: "Reduce Changeover Time".to_string(),
            description: "Changeover takes too long".to_string(),
            category: KaizenCategory::Productivity,
            priority: KaizenPriority::High,
            current_state: "Manual".to_string(),
            proposed_solution: "Quick-change tooling".to_string(),
            expected_benefit: "Shorter changeover".to_string(),
            estimated_savings: 15_000.0,
            submitter_id: None,
            plant_id: test_helpers::TEST_PLANT_ID.to_string(),
            line_id: test_helpers::TEST_LINE_ID.to_string(),
        })
        .await
        .expect("submit");
    assert_eq!(idea.status, KaizenStatus::Submitted);
    assert!(idea.status.is_open());
    assert_eq!(idea.implementation_date, None);

    let empty_title = app
        .kaizen
        .submit(NewKaizenIdea {
            title: "  ".to_string(),
            description: String::new(),
            category: KaizenCategory::Quality,
            priority: KaizenPriority::Low,
            current_state: String::new(),
            proposed_solution: String::new(),
            expected_benefit: String::new(),
            estimated_savings: 0.0,
            submitter_id: None,
            plant_id: test_helpers::TEST_PLANT_ID.to_string(),
            line_id: test_helpers::TEST_LINE_ID.to_string(),
        })
        .await
        .expect_err("blank title must be rejected");
    assert!(matches!(empty_title, ApiError::InvalidInput(_)));
}

#[tokio::test]
async fn test_sqlite_app_end_to_end() {
    let (_tmp, db_path) = create_test_db().expect("create test db");
    seed_master(&db_path).expect("seed master");

    let app = AppState::new(AppConfig::sqlite(&db_path)).expect("build app");

    app.production
        .submit(new_production("2024-01-01", 1))
        .await
        .expect("submit record A");
    let mut second = new_production("2024-01-01", 2);
    second.planned_production = Some(50);
    second.actual_production = Some(50);
    second.good_units = Some(48);
    second.downtime_minutes = Some(0);
    app.production.submit(second).await.expect("submit record B");

    let overview = app
        .production
        .fetch(&ProductionQuery::default())
        .await
        .expect("fetch");
    assert_eq!(overview.records.len(), 2);
    assert_eq!(overview.oee.len(), 1, "both records share one shift group");

    let m = &overview.oee[0];
    assert_eq!(m.availability, 96.88);
    assert_eq!(m.performance, 96.67);
    assert_eq!(m.quality, 95.17);
}

#[tokio::test]
async fn test_custom_shift_window_flows_from_config() {
    let config = AppConfig {
        shift_minutes: 600,
        ..AppConfig::fixture()
    };
    let app = AppState::from_source(config, Arc::new(FixtureDataSource::empty()));

    let mut input = new_production("2024-01-01", 1);
    input.downtime_minutes = Some(60);
    app.production.submit(input).await.expect("submit");

    let overview = app
        .production
        .fetch(&ProductionQuery::default())
        .await
        .expect("fetch");
    assert_eq!(overview.oee[0].availability, 90.0); // (600-60)/600 * 100
}
