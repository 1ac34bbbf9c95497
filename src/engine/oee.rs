// ==========================================
// Manufacturing Operations KPI Backend - OEE engine
// ==========================================
// Responsibility: shift-level OEE metrics
// Input: flat list of production records
// Output: one metric per (shift, date) group, first-seen order
// ==========================================
// Availability, performance and quality are deliberately not clamped:
// downtime beyond the shift window produces a negative availability,
// and actual beyond planned produces performance above 100. Both are
// surfaced as-is for supervisor review instead of being hidden.
// ==========================================

use crate::domain::production::ProductionRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Reference shift window in minutes (one 8-hour shift)
///
/// Availability is always measured against this window, not against the
/// number of records in the group. Plants with different shift lengths
/// override it through `OeeEngine::with_shift_minutes`.
pub const DEFAULT_SHIFT_MINUTES: i64 = 480;

// ==========================================
// ShiftKey - grouping key
// ==========================================
// A structured key rather than a concatenated string, so a shift label
// containing a separator can never collide with another group.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShiftKey {
    pub shift: String,
    pub date: NaiveDate,
}

// ==========================================
// ShiftAggregate - per-group accumulator
// ==========================================
// Created on the first record of a key, mutated by every matching
// record, read-only once the single input pass is finished.
#[derive(Debug, Clone)]
pub struct ShiftAggregate {
    pub shift: String,
    pub date: NaiveDate,
    pub total_planned: i64,
    pub total_actual: i64,
    pub total_good: i64,
    pub total_downtime: i64,
    pub record_count: usize,
}

impl ShiftAggregate {
    fn new(shift: &str, date: NaiveDate) -> Self {
        Self {
            shift: shift.to_string(),
            date,
            total_planned: 0,
            total_actual: 0,
            total_good: 0,
            total_downtime: 0,
            record_count: 0,
        }
    }

    /// Add one record to the running sums. Absent counters add zero.
    fn absorb(&mut self, record: &ProductionRecord) {
        self.total_planned += record.planned_production.unwrap_or(0);
        self.total_actual += record.actual_production.unwrap_or(0);
        self.total_good += record.good_units.unwrap_or(0);
        self.total_downtime += record.downtime_minutes.unwrap_or(0);
        self.record_count += 1;
    }
}

// ==========================================
// OeeMetric - engine output
// ==========================================
// All four values are percentages rounded half-up to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OeeMetric {
    pub shift: String,
    pub date: NaiveDate,
    pub availability: f64,
    pub performance: f64,
    pub quality: f64,
    pub oee: f64,
}

// ==========================================
// OeeEngine
// ==========================================
#[derive(Debug, Clone)]
pub struct OeeEngine {
    shift_minutes: i64,
}

impl OeeEngine {
    /// Engine with the standard 480-minute shift window
    pub fn new() -> Self {
        Self {
            shift_minutes: DEFAULT_SHIFT_MINUTES,
        }
    }

    /// Engine with a plant-specific shift window
    pub fn with_shift_minutes(shift_minutes: i64) -> Self {
        Self { shift_minutes }
    }

    pub fn shift_minutes(&self) -> i64 {
        self.shift_minutes
    }

    /// Compute one OEE metric per (shift, date) group
    ///
    /// Single pass over the input. Output order is the order in which
    /// distinct keys first appear in the input; no sort is applied.
    ///
    /// # Parameters
    /// - records: production records in any order
    ///
    /// # Returns
    /// One metric per distinct (shift, production_date) pair
    pub fn compute(&self, records: &[ProductionRecord]) -> Vec<OeeMetric> {
        let groups = self.group_by_shift(records);
        groups
            .iter()
            .map(|aggregate| self.derive_metric(aggregate))
            .collect()
    }

    /// Group records by (shift, date), preserving first-seen key order
    pub fn group_by_shift(&self, records: &[ProductionRecord]) -> Vec<ShiftAggregate> {
        let mut order: Vec<ShiftKey> = Vec::new();
        let mut groups: HashMap<ShiftKey, ShiftAggregate> = HashMap::new();

        for record in records {
            let key = ShiftKey {
                shift: record.shift.clone(),
                date: record.production_date,
            };
            let aggregate = groups.entry(key.clone()).or_insert_with(|| {
                order.push(key);
                ShiftAggregate::new(&record.shift, record.production_date)
            });
            aggregate.absorb(record);
        }

        order
            .into_iter()
            .map(|key| {
                groups
                    .remove(&key)
                    .unwrap_or_else(|| ShiftAggregate::new(&key.shift, key.date))
            })
            .collect()
    }

    /// Derive the four percentages for one finalized aggregate
    ///
    /// - availability: remaining share of the shift window; 100 when the
    ///   group saw no downtime at all
    /// - performance: actual over planned; 0 when nothing was planned
    /// - quality: good over actual; 0 when nothing was produced
    /// - oee: product of the three, computed before rounding
    fn derive_metric(&self, aggregate: &ShiftAggregate) -> OeeMetric {
        let window = self.shift_minutes as f64;

        let availability = if aggregate.total_downtime > 0 {
            ((window - aggregate.total_downtime as f64) / window) * 100.0
        } else {
            100.0
        };
        let performance = if aggregate.total_planned > 0 {
            (aggregate.total_actual as f64 / aggregate.total_planned as f64) * 100.0
        } else {
            0.0
        };
        let quality = if aggregate.total_actual > 0 {
            (aggregate.total_good as f64 / aggregate.total_actual as f64) * 100.0
        } else {
            0.0
        };
        let oee = (availability * performance * quality) / 10_000.0;

        OeeMetric {
            shift: aggregate.shift.clone(),
            date: aggregate.date,
            availability: round2(availability),
            performance: round2(performance),
            quality: round2(quality),
            oee: round2(oee),
        }
    }
}

impl Default for OeeEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Round half-up on the third decimal digit
fn round2(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2_half_up() {
        assert_eq!(round2(96.875), 96.88);
        assert_eq!(round2(96.874), 96.87);
        assert_eq!(round2(100.0), 100.0);
        // half-up also for negatives: -0.125 rounds toward -0.12
        assert_eq!(round2(-0.125), -0.12);
    }

    #[test]
    fn test_shift_key_equality_is_structural() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let a = ShiftKey {
            shift: "Shift 1".to_string(),
            date: d,
        };
        let b = ShiftKey {
            shift: "Shift 1".to_string(),
            date: d,
        };
        assert_eq!(a, b);
        let c = ShiftKey {
            shift: "Shift 2".to_string(),
            date: d,
        };
        assert_ne!(a, c);
    }
}
