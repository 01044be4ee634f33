use models::{
    ChartData, DashboardMetrics, Language, LocationKind, LocationStatus, MapLocation, Patient,
    PatientStatus, Period,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{catalog, workload};

/// Number of patients generated for a hospital-scoped snapshot.
const SCOPED_PATIENT_COUNT: usize = 30;

/// Id of the synthesized marker used when no base location matches the
/// selected hospital.
const PLACEHOLDER_LOCATION_ID: u32 = 99;

/// Composes a full dashboard snapshot for a language and an optional
/// hospital scope.
///
/// Global totals stay global: `total_orders` always reflects the overall
/// figure regardless of scope. A scoped snapshot substitutes generated
/// patients and a narrowed location list and perturbs the product and
/// workload numbers from the hospital id; the rate is the only scoped
/// figure that is fully deterministic.
pub fn synthesize_overview(language: Language, hospital_id: Option<u32>) -> DashboardMetrics {
    let hospitals = catalog::hospitals(language);
    let scoped_name = hospital_id
        .and_then(|id| hospitals.iter().find(|h| h.id == id))
        .map(|h| h.name.clone());

    let patients = match hospital_id {
        None => catalog::base_patients(language),
        Some(id) => generate_patients(language, id, scoped_name.as_deref()),
    };

    let map_locations = match hospital_id {
        None => catalog::base_map_locations(language),
        Some(_) => narrow_locations(language, scoped_name.as_deref()),
    };

    DashboardMetrics {
        total_orders: catalog::TOTAL_ORDERS,
        avg_workload: catalog::AVG_WORKLOAD,
        workload_rate: workload::base_rate(hospital_id),
        workload_breakdown: workload::breakdown(Period::Week, language, hospital_id),
        product_distribution: product_distribution(language, hospital_id),
        status_distribution: catalog::status_distribution(language),
        map_locations,
        hospitals,
        patients,
    }
}

/// Bulk-generates the patient list for a scoped view. Names and projects
/// are drawn uniformly from the candidate pools; every record is stamped
/// with the resolved hospital display name.
fn generate_patients(
    language: Language,
    hospital_id: u32,
    hospital_name: Option<&str>,
) -> Vec<Patient> {
    let names = catalog::patient_name_pool(language);
    let projects = catalog::patient_project_pool(language);
    let hospital = hospital_name.unwrap_or(catalog::UNKNOWN_HOSPITAL_LABEL);
    let mut rng = rand::thread_rng();

    (0..SCOPED_PATIENT_COUNT)
        .map(|i| {
            let status = match rng.gen_range(0..3) {
                0 => PatientStatus::Completed,
                1 => PatientStatus::Sampling,
                _ => PatientStatus::Processing,
            };
            Patient {
                id: format!("{}-{}", hospital_id, i + 1),
                name: names[rng.gen_range(0..names.len())].to_string(),
                project: projects[rng.gen_range(0..projects.len())].to_string(),
                status,
                hospital: hospital.to_string(),
            }
        })
        .collect()
}

/// Narrows the map to the base location whose label contains the first
/// two characters of the hospital name. Falls back to a single synthesized
/// marker labeled with the hospital name, or the literal placeholder when
/// the name could not be resolved.
fn narrow_locations(language: Language, hospital_name: Option<&str>) -> Vec<MapLocation> {
    if let Some(name) = hospital_name {
        let prefix: String = name.chars().take(2).collect();
        if !prefix.is_empty() {
            if let Some(found) = catalog::base_map_locations(language)
                .into_iter()
                .find(|l| l.label.contains(&prefix))
            {
                return vec![found];
            }
        }
    }

    vec![MapLocation {
        id: PLACEHOLDER_LOCATION_ID,
        x: 50.0,
        y: 50.0,
        lng: None,
        lat: None,
        label: hospital_name
            .unwrap_or(catalog::UNKNOWN_HOSPITAL_LABEL)
            .to_string(),
        kind: LocationKind::Clinic,
        status: LocationStatus::Normal,
    }]
}

/// Product progress values. The global view re-rolls around the base
/// anchors on every call; a scoped view applies a deterministic shift
/// seeded from the hospital id underneath a small live jitter, so repeated
/// scoped calls stay close but are not byte-identical.
fn product_distribution(language: Language, hospital_id: Option<u32>) -> Vec<ChartData> {
    let mut rng = rand::thread_rng();
    let mut seeded = hospital_id.map(|id| StdRng::seed_from_u64(id as u64));

    catalog::base_product_distribution(language)
        .into_iter()
        .map(|mut item| {
            let raw = match seeded.as_mut() {
                Some(seeded) => {
                    item.value + seeded.gen_range(-20.0..=20.0) + rng.gen_range(0.0..5.0)
                }
                None => item.value + rng.gen_range(-8.0..=8.0),
            };
            let value = raw.round().clamp(5.0, 98.0);
            item.value = value;
            item.progress = Some(value);
            item.is_lagging = Some(value < 30.0);
            item
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_orders_is_scope_invariant() {
        let global = synthesize_overview(Language::Zh, None);
        let scoped = synthesize_overview(Language::Zh, Some(3));
        let unknown = synthesize_overview(Language::En, Some(42));
        assert_eq!(global.total_orders, 32_890);
        assert_eq!(scoped.total_orders, global.total_orders);
        assert_eq!(unknown.total_orders, global.total_orders);
    }

    #[test]
    fn test_global_view_uses_base_lists() {
        let metrics = synthesize_overview(Language::En, None);
        assert_eq!(metrics.patients.len(), 8);
        assert_eq!(metrics.map_locations.len(), 6);
        assert_eq!(metrics.workload_rate, 92);
    }

    #[test]
    fn test_scoped_view_generates_thirty_patients() {
        let metrics = synthesize_overview(Language::Zh, Some(2));
        assert_eq!(metrics.patients.len(), 30);
        assert!(metrics
            .patients
            .iter()
            .all(|p| p.hospital == "上海交通大学瑞金医院"));
    }

    #[test]
    fn test_scoped_rate_is_deterministic() {
        let a = synthesize_overview(Language::En, Some(3));
        let b = synthesize_overview(Language::En, Some(3));
        assert_eq!(a.workload_rate, 76);
        assert_eq!(a.workload_rate, b.workload_rate);
    }

    #[test]
    fn test_hospital_list_always_full_catalog() {
        let scoped = synthesize_overview(Language::En, Some(5));
        assert_eq!(scoped.hospitals.len(), 9);
    }

    #[test]
    fn test_zh_shanghai_hospital_narrows_by_label_prefix() {
        // "上海交通大学九院" shares its first two characters with the
        // airport marker's label, so the narrowed view keeps that entry.
        let metrics = synthesize_overview(Language::Zh, Some(1));
        assert_eq!(metrics.map_locations.len(), 1);
        assert_eq!(metrics.map_locations[0].id, 1);
    }

    #[test]
    fn test_en_unmatched_hospital_gets_placeholder_marker() {
        // No English base label contains "SJ".
        let metrics = synthesize_overview(Language::En, Some(1));
        assert_eq!(metrics.map_locations.len(), 1);
        let marker = &metrics.map_locations[0];
        assert_eq!(marker.id, 99);
        assert_eq!(marker.label, "SJTU Ninth People's Hospital");
        assert!(marker.lng.is_none() && marker.lat.is_none());
    }

    #[test]
    fn test_unknown_hospital_id_falls_back_to_literal_label() {
        let metrics = synthesize_overview(Language::En, Some(42));
        assert_eq!(metrics.map_locations.len(), 1);
        assert_eq!(metrics.map_locations[0].label, "Hospital");
        assert!(metrics.patients.iter().all(|p| p.hospital == "Hospital"));
    }

    #[test]
    fn test_product_values_stay_in_bounds() {
        for _ in 0..20 {
            let metrics = synthesize_overview(Language::En, None);
            for item in &metrics.product_distribution {
                assert!((5.0..=98.0).contains(&item.value), "value {}", item.value);
                assert_eq!(item.progress, Some(item.value));
                assert_eq!(item.is_lagging, Some(item.value < 30.0));
            }
        }
    }

    #[test]
    fn test_product_names_and_order_are_stable() {
        let metrics = synthesize_overview(Language::En, Some(7));
        let names: Vec<&str> = metrics
            .product_distribution
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(
            names,
            [
                "Scoliosis Orthosis",
                "Pre-op Bone Model",
                "Knee Fixator",
                "Cervical Pillow",
                "3D Printed Insole",
                "Hip Implant"
            ]
        );
    }

    #[test]
    fn test_status_distribution_matches_catalog() {
        let metrics = synthesize_overview(Language::Zh, Some(6));
        let base = catalog::status_distribution(Language::Zh);
        assert_eq!(metrics.status_distribution.len(), base.len());
        for (got, want) in metrics.status_distribution.iter().zip(base.iter()) {
            assert_eq!(got.name, want.name);
            assert_eq!(got.value, want.value);
            assert_eq!(got.count, want.count);
        }
    }
}
