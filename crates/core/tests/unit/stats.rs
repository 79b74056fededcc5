//! Statistics Tests.
//!
//! Verifies the derived rates, the seven-line report, and the JSON field names.

use csim_core::SimStats;
use pretty_assertions::assert_eq;

fn sample() -> SimStats {
    SimStats {
        loads: 6,
        stores: 2,
        load_hits: 4,
        load_misses: 2,
        store_hits: 1,
        store_misses: 1,
        cycles: 1234,
    }
}

#[test]
fn report_lists_seven_counters_in_order() {
    assert_eq!(
        sample().to_string(),
        "Total loads: 6\n\
         Total stores: 2\n\
         Load hits: 4\n\
         Load misses: 2\n\
         Store hits: 1\n\
         Store misses: 1\n\
         Total cycles: 1234\n"
    );
}

#[test]
fn derived_totals() {
    let stats = sample();
    assert_eq!(stats.accesses(), 8);
    assert_eq!(stats.hits(), 5);
    assert_eq!(stats.misses(), 3);
    assert!((stats.hit_rate() - 0.625).abs() < f64::EPSILON);
    assert!((stats.cycles_per_access() - 154.25).abs() < f64::EPSILON);
}

/// Rates are defined as zero before any access.
#[test]
fn empty_stats_have_zero_rates() {
    let stats = SimStats::default();
    assert_eq!(stats.accesses(), 0);
    assert!(stats.hit_rate().abs() < f64::EPSILON);
    assert!(stats.cycles_per_access().abs() < f64::EPSILON);
}

#[test]
fn json_uses_snake_case_counter_names() {
    let value = serde_json::to_value(sample()).expect("serializable");
    assert_eq!(
        value,
        serde_json::json!({
            "loads": 6,
            "stores": 2,
            "load_hits": 4,
            "load_misses": 2,
            "store_hits": 1,
            "store_misses": 1,
            "cycles": 1234
        })
    );
}
