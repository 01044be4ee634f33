use models::{Language, Period, WorkloadData, WorkloadEntry};

use crate::catalog;

/// Baseline utilization rate before period rescaling: the fixed global
/// figure, or a value derived from the hospital id when scoped. The
/// formula keeps the result inside [60, 95).
pub fn base_rate(hospital_id: Option<u32>) -> u32 {
    match hospital_id {
        Some(id) => 60 + (id * 17) % 35,
        None => catalog::BASE_WORKLOAD_RATE,
    }
}

fn multiplier(period: Period) -> f64 {
    match period {
        Period::Week => 1.0,
        Period::Month => 4.0,
        Period::Cycle => 12.0,
    }
}

/// Rescales a baseline rate for the requested period. Floor-clamped only
/// (10 for month, 5 for cycle, nothing for week); there is deliberately
/// no ceiling clamp.
pub fn scaled_rate(period: Period, base: u32) -> u32 {
    match period {
        Period::Week => base,
        Period::Month => base.saturating_sub(15).max(10),
        Period::Cycle => base.saturating_sub(30).max(5),
    }
}

pub(crate) fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Role-hours breakdown for a period. Starts from the weekly baseline,
/// applies the hospital perturbation to the design and production rows,
/// then multiplies by the period factor and rounds to one decimal.
pub fn breakdown(period: Period, language: Language, hospital_id: Option<u32>) -> Vec<WorkloadEntry> {
    let mut entries = catalog::base_workload_breakdown(language);
    if let Some(id) = hospital_id {
        // Row order is fixed by the catalog: design first, production second.
        entries[0].time += (id % 3) as f64 * 0.3;
        entries[1].time += (id % 5) as f64 * 0.2;
    }
    let factor = multiplier(period);
    for entry in &mut entries {
        entry.time = round1(entry.time * factor);
    }
    entries
}

/// Full workload statistics for a period. Stateless: recomputed from the
/// baseline constants on every call.
pub fn workload_stats(period: Period, language: Language, hospital_id: Option<u32>) -> WorkloadData {
    WorkloadData {
        rate: scaled_rate(period, base_rate(hospital_id)),
        breakdown: breakdown(period, language, hospital_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_rate_stays_in_documented_range() {
        for id in 1..=9 {
            let rate = base_rate(Some(id));
            assert!((60..95).contains(&rate), "id {id} produced rate {rate}");
        }
        assert_eq!(base_rate(None), 92);
    }

    #[test]
    fn test_base_rate_is_deterministic() {
        assert_eq!(base_rate(Some(3)), 76);
        assert_eq!(base_rate(Some(3)), base_rate(Some(3)));
    }

    #[test]
    fn test_scaled_rate_per_period() {
        assert_eq!(scaled_rate(Period::Week, 92), 92);
        assert_eq!(scaled_rate(Period::Month, 92), 77);
        assert_eq!(scaled_rate(Period::Cycle, 92), 62);
    }

    #[test]
    fn test_scaled_rate_floor_clamps() {
        // Floors only bind for bases below the catalog range; the clamp
        // policy is floor-only by design.
        assert_eq!(scaled_rate(Period::Month, 20), 10);
        assert_eq!(scaled_rate(Period::Cycle, 20), 5);
        assert_eq!(scaled_rate(Period::Week, 20), 20);
    }

    #[test]
    fn test_breakdown_applies_period_multiplier() {
        let week = breakdown(Period::Week, Language::En, None);
        let month = breakdown(Period::Month, Language::En, None);
        let cycle = breakdown(Period::Cycle, Language::En, None);
        for ((w, m), c) in week.iter().zip(month.iter()).zip(cycle.iter()) {
            assert_eq!(m.time, round1(w.time * 4.0));
            assert_eq!(c.time, round1(w.time * 12.0));
        }
    }

    #[test]
    fn test_cycle_global_scenario() {
        let stats = workload_stats(Period::Cycle, Language::En, None);
        assert_eq!(stats.rate, 62);
        assert_eq!(stats.breakdown[0].role, "Design");
        assert_eq!(stats.breakdown[0].time, 30.0);
    }

    #[test]
    fn test_hospital_perturbs_design_and_production_only() {
        let global = breakdown(Period::Week, Language::En, None);
        let scoped = breakdown(Period::Week, Language::En, Some(4));
        // id 4: design +0.3 (4 % 3 = 1), production +0.8 (4 % 5 = 4).
        assert_eq!(scoped[0].time, round1(global[0].time + 0.3));
        assert_eq!(scoped[1].time, round1(global[1].time + 0.8));
        assert_eq!(scoped[2].time, global[2].time);
        assert_eq!(scoped[3].time, global[3].time);
    }

    #[test]
    fn test_rates_language_invariant() {
        let zh = workload_stats(Period::Month, Language::Zh, Some(5));
        let en = workload_stats(Period::Month, Language::En, Some(5));
        assert_eq!(zh.rate, en.rate);
        let zh_hours: Vec<f64> = zh.breakdown.iter().map(|e| e.time).collect();
        let en_hours: Vec<f64> = en.breakdown.iter().map(|e| e.time).collect();
        assert_eq!(zh_hours, en_hours);
    }
}
