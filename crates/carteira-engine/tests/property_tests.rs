//! Property-based tests for allocation invariants.
//!
//! These tests verify key mathematical properties that should always hold:
//! - Shares against a zero denominator are 0
//! - No contribution is needed when a position is at or above target
//! - Section shares sum to the section total share
//! - Category grand totals pin the share total to exactly 100
//! - Reports are deterministic

use approx::assert_relative_eq;
use carteira_engine::aggregation::{gap, share};
use carteira_engine::prelude::*;
use proptest::prelude::*;

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

/// Deterministic pseudo-random hash for reproducible test data.
fn simple_hash(seed: u64, index: u64) -> u64 {
    let mut h = seed.wrapping_mul(6_364_136_223_846_793_005);
    h = h.wrapping_add(index.wrapping_mul(1_442_695_040_888_963_407));
    h ^= h >> 33;
    h = h.wrapping_mul(0xff51_afd7_ed55_8ccd);
    h ^= h >> 33;
    h
}

/// Generates a snapshot with N holdings spread over every category.
fn generate_snapshot(n: usize, seed: u64) -> PortfolioSnapshot {
    let categories = Category::all();
    let mut holdings = Vec::with_capacity(n);

    for i in 0..n {
        let hash = simple_hash(seed, i as u64);

        let category = categories[hash as usize % categories.len()];
        let sections = category.canonical_sections();
        let section = sections[(hash >> 8) as usize % sections.len()];
        let applied = 100.0 + (hash % 50_000) as f64;
        let current = applied * (0.5 + ((hash >> 16) % 100) as f64 / 100.0); // -50%..+49%
        let target = ((hash >> 24) % 101) as f64;

        holdings.push(
            Holding::builder()
                .id(format!("H{i}"))
                .category(category)
                .section(section)
                .quantity(1.0 + (hash % 1_000) as f64)
                .applied_value(applied)
                .current_value(current)
                .target_percent(target)
                .build()
                .unwrap(),
        );
    }

    let targets: Vec<AllocationTarget> = categories
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            let t = (simple_hash(seed, 1_000 + i as u64) % 20) as f64;
            AllocationTarget::new(c, t).with_band((t - 5.0).max(0.0), t + 5.0)
        })
        .collect();

    PortfolioSnapshot::builder()
        .add_holdings(holdings)
        .add_targets(targets)
        .build()
        .unwrap()
}

fn section_strategy() -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::vec((0.0f64..1_000_000.0, 0.0f64..100.0), 1..30)
}

// =============================================================================
// ARITHMETIC PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn prop_share_of_zero_is_zero(value in prop::num::f64::ANY) {
        prop_assert_eq!(share(value, 0.0), 0.0);
    }

    #[test]
    fn prop_share_of_negative_denominator_is_zero(
        value in -1e12f64..1e12,
        denominator in -1e12f64..=0.0,
    ) {
        prop_assert_eq!(share(value, denominator), 0.0);
    }

    #[test]
    fn prop_no_contribution_at_or_above_target(
        current in 0.0f64..=100.0,
        delta in 0.0f64..=100.0,
        base in 0.0f64..1e9,
    ) {
        let target = (current - delta).max(0.0);
        prop_assert_eq!(gap(current, target, base).contribution_needed, 0.0);
    }

    #[test]
    fn prop_contribution_is_gap_of_base(
        current in 0.0f64..100.0,
        target in 0.0f64..=100.0,
        base in 1.0f64..1e9,
    ) {
        let g = gap(current, target, base);
        prop_assert!(g.contribution_needed >= 0.0);
        if target > current {
            let expected = (target - current) / 100.0 * base;
            prop_assert!((g.contribution_needed - expected).abs() <= expected * 1e-12);
        }
    }
}

// =============================================================================
// SECTION PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn prop_section_shares_sum_to_total(entries in section_strategy()) {
        let holdings: Vec<Holding> = entries
            .iter()
            .enumerate()
            .map(|(i, &(value, target))| {
                Holding::builder()
                    .id(format!("H{i}"))
                    .category(Category::Stock)
                    .section("value")
                    .applied_value(value)
                    .current_value(value)
                    .target_percent(target)
                    .build()
                    .unwrap()
            })
            .collect();
        let snapshot = PortfolioSnapshot::builder().add_holdings(holdings).build().unwrap();

        let report = build_report(&snapshot, &ReportConfig::sequential());
        let stock = report.category(Category::Stock).unwrap();
        let section = stock.section("value").unwrap();

        let sum_of_shares: f64 = section.holdings.iter().map(|r| r.category_share).sum();
        let from_total = share(section.totals.total_current_value, stock.category_total);

        prop_assert!((sum_of_shares - section.totals.total_category_share).abs()
            <= 1e-9 * section.totals.total_category_share.abs().max(1.0));
        prop_assert!((section.totals.total_category_share - from_total).abs()
            <= 1e-9 * from_total.abs().max(1.0));

        if stock.category_total > 0.0 {
            prop_assert_eq!(stock.totals.total_category_share, 100.0);
        } else {
            prop_assert_eq!(stock.totals.total_category_share, 0.0);
        }
    }
}

// =============================================================================
// GENERATED PORTFOLIOS
// =============================================================================

#[test]
fn test_grand_total_is_exactly_100() {
    for seed in 0..20 {
        let snapshot = generate_snapshot(200, seed);
        let report = build_report(&snapshot, &ReportConfig::sequential());

        for category in report.non_empty_categories() {
            if category.category_total > 0.0 {
                assert_eq!(category.totals.total_category_share, 100.0);
            }
        }
    }
}

#[test]
fn test_every_holding_appears_once() {
    for seed in 0..10 {
        let snapshot = generate_snapshot(150, seed);
        let report = build_report(&snapshot, &ReportConfig::sequential());

        assert_eq!(report.rows().count(), snapshot.holding_count());
        assert_eq!(report.summary.holding_count, snapshot.holding_count());
        for holding in &snapshot.holdings {
            assert!(report.holding(&holding.id).is_some());
        }
    }
}

#[test]
fn test_risk_shares_cover_portfolio() {
    for seed in 0..10 {
        let snapshot = generate_snapshot(120, seed);
        let report = build_report(&snapshot, &ReportConfig::sequential());

        // Portfolio total defaults to the sum of holdings, so nothing is unallocated
        let total_risk: f64 = report.categories.iter().map(|c| c.totals.total_risk).sum();
        assert_relative_eq!(total_risk, 100.0, epsilon = 1e-9);
        assert!(report.summary.unallocated_percent < 1e-9);
        let allocated = report.allocation.total_current_percent;
        assert_relative_eq!(allocated, 100.0, epsilon = 1e-9);
    }
}

#[test]
fn test_section_contribution_base_is_category_total() {
    let snapshot = generate_snapshot(300, 7);
    let report = build_report(&snapshot, &ReportConfig::sequential());

    for category in report.non_empty_categories() {
        for row in category.rows() {
            let expected = if row.gap_percent > 0.0 {
                row.gap_percent / 100.0 * category.category_total
            } else {
                0.0
            };
            assert_relative_eq!(row.contribution_needed, expected, epsilon = 1e-6);
        }
    }
}

#[test]
fn test_generated_reports_are_deterministic() {
    for seed in 0..5 {
        let snapshot = generate_snapshot(250, seed);

        let first = build_report(&snapshot, &ReportConfig::sequential());
        let second = build_report(&snapshot, &ReportConfig::sequential());
        let parallel = build_report(&snapshot, &ReportConfig::default().with_threshold(1));

        assert_eq!(first, second);
        assert_eq!(first, parallel);
    }
}
