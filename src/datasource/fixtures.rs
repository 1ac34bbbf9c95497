// ==========================================
// Manufacturing Operations KPI Backend - Demo fixture data
// ==========================================
// The seeded data set used by demo installs and the seed binary.
// Two plants, two lines, two products, two employees, and one sample
// row per KPI family, all dated relative to today.
// ==========================================

use crate::domain::types::{KaizenCategory, KaizenPriority, KaizenStatus, LineStatus};
use crate::domain::{
    Employee, FiveSAudit, KaizenIdea, Plant, Product, ProductionLine, ProductionRecord,
    QualityInspection, ResourceConsumption,
};
use chrono::{NaiveDateTime, Utc};

pub const PLANT_A_ID: &str = "550e8400-e29b-41d4-a716-446655440001";
pub const PLANT_B_ID: &str = "550e8400-e29b-41d4-a716-446655440002";
pub const LINE_A_ID: &str = "660e8400-e29b-41d4-a716-446655440001";
pub const LINE_B_ID: &str = "660e8400-e29b-41d4-a716-446655440002";
pub const PRODUCT_A_ID: &str = "770e8400-e29b-41d4-a716-446655440001";
pub const PRODUCT_B_ID: &str = "770e8400-e29b-41d4-a716-446655440002";
pub const OPERATOR_ID: &str = "880e8400-e29b-41d4-a716-446655440001";
pub const INSPECTOR_ID: &str = "880e8400-e29b-41d4-a716-446655440002";

/// Everything a fixture source starts out with
#[derive(Debug, Clone, Default)]
pub struct FixtureDataSet {
    pub plants: Vec<Plant>,
    pub production_lines: Vec<ProductionLine>,
    pub products: Vec<Product>,
    pub employees: Vec<Employee>,
    pub production: Vec<ProductionRecord>,
    pub quality: Vec<QualityInspection>,
    pub five_s: Vec<FiveSAudit>,
    pub resource: Vec<ResourceConsumption>,
    pub kaizen: Vec<KaizenIdea>,
}

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

/// Build the demo data set
pub fn demo_data() -> FixtureDataSet {
    let ts = now();
    let today = ts.date();

    let plants = vec![
        Plant {
            id: PLANT_A_ID.to_string(),
            name: "Manufacturing Plant A".to_string(),
            location: "Detroit, MI".to_string(),
            timezone: "America/Detroit".to_string(),
            created_at: ts,
            updated_at: ts,
        },
        Plant {
            id: PLANT_B_ID.to_string(),
            name: "Manufacturing Plant B".to_string(),
            location: "Austin, TX".to_string(),
            timezone: "America/Chicago".to_string(),
            created_at: ts,
            updated_at: ts,
        },
    ];

    let production_lines = vec![
        ProductionLine {
            id: LINE_A_ID.to_string(),
            plant_id: PLANT_A_ID.to_string(),
            name: "Line A".to_string(),
            capacity_per_hour: 100,
            status: LineStatus::Active,
            created_at: ts,
            updated_at: ts,
        },
        ProductionLine {
            id: LINE_B_ID.to_string(),
            plant_id: PLANT_A_ID.to_string(),
            name: "Line B".to_string(),
            capacity_per_hour: 120,
            status: LineStatus::Active,
            created_at: ts,
            updated_at: ts,
        },
    ];

    let products = vec![
        Product {
            id: PRODUCT_A_ID.to_string(),
            sku: "SKU001".to_string(),
            name: "Product A".to_string(),
            category: "Electronics".to_string(),
            unit_price: 25.5,
            target_yield: 95.0,
            created_at: ts,
            updated_at: ts,
        },
        Product {
            id: PRODUCT_B_ID.to_string(),
            sku: "SKU002".to_string(),
            name: "Product B".to_string(),
            category: "Electronics".to_string(),
            unit_price: 32.75,
            target_yield: 93.0,
            created_at: ts,
            updated_at: ts,
        },
    ];

    let employees = vec![
        Employee {
            id: OPERATOR_ID.to_string(),
            employee_id: "EMP001".to_string(),
            name: "John Smith".to_string(),
            role: "Operator".to_string(),
            shift: "Shift 1".to_string(),
            plant_id: PLANT_A_ID.to_string(),
            created_at: ts,
            updated_at: ts,
        },
        Employee {
            id: INSPECTOR_ID.to_string(),
            employee_id: "EMP002".to_string(),
            name: "Mary Johnson".to_string(),
            role: "Quality Inspector".to_string(),
            shift: "Shift 1".to_string(),
            plant_id: PLANT_A_ID.to_string(),
            created_at: ts,
            updated_at: ts,
        },
    ];

    let production = vec![ProductionRecord {
        id: "prod-0001".to_string(),
        plant_id: PLANT_A_ID.to_string(),
        line_id: LINE_A_ID.to_string(),
        product_id: PRODUCT_A_ID.to_string(),
        shift: "Shift 1".to_string(),
        production_date: today,
        hour_of_day: 1,
        planned_production: Some(100),
        actual_production: Some(95),
        good_units: Some(90),
        rejected_units: Some(5),
        downtime_minutes: Some(15),
        downtime_reason: Some("Material shortage".to_string()),
        operator_id: Some(OPERATOR_ID.to_string()),
        created_at: ts,
    }];

    let quality = vec![QualityInspection {
        id: "qc-0001".to_string(),
        plant_id: PLANT_A_ID.to_string(),
        line_id: LINE_A_ID.to_string(),
        product_id: PRODUCT_A_ID.to_string(),
        batch_number: "BATCH001".to_string(),
        inspection_date: today,
        inspector_id: Some(INSPECTOR_ID.to_string()),
        inspected_quantity: 100,
        passed_quantity: 94,
        failed_quantity: 6,
        yield_percent: 94.0,
        defect_category: Some("Dimensional".to_string()),
        comments: Some("Minor dimensional variations detected".to_string()),
        created_at: ts,
    }];

    let five_s = vec![FiveSAudit {
        id: "5s-0001".to_string(),
        plant_id: PLANT_A_ID.to_string(),
        line_id: LINE_A_ID.to_string(),
        audit_date: today,
        auditor_id: Some(INSPECTOR_ID.to_string()),
        sort_score: 85,
        set_in_order_score: 78,
        shine_score: 92,
        standardize_score: 88,
        sustain_score: 75,
        overall_score: 83.6,
        comments: Some("Good progress on shine, need to improve sustain practices".to_string()),
        created_at: ts,
    }];

    let kaizen = vec![KaizenIdea {
        id: "kaizen-0001".to_string(),
        title: "Reduce Changeover Time".to_string(),
        description: "Current changeover takes 45 minutes, causing production delays".to_string(),
        category: KaizenCategory::Productivity,
        priority: KaizenPriority::High,
        current_state: "Manual changeover process with multiple adjustments".to_string(),
        proposed_solution: "Implement quick-change tooling and standardized setup procedures"
            .to_string(),
        expected_benefit: "Reduce changeover time to 20 minutes".to_string(),
        estimated_savings: 15_000.0,
        submitter_id: Some(OPERATOR_ID.to_string()),
        status: KaizenStatus::Approved,
        implementation_date: None,
        actual_savings: Some(12_000.0),
        plant_id: PLANT_A_ID.to_string(),
        line_id: LINE_A_ID.to_string(),
        created_at: ts,
        updated_at: ts,
    }];

    FixtureDataSet {
        plants,
        production_lines,
        products,
        employees,
        production,
        quality,
        five_s,
        // the demo set ships without consumption rows; the module
        // starts empty until the first submission
        resource: Vec::new(),
        kaizen,
    }
}
