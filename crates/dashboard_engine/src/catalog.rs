//! Static bilingual reference data for the demo dashboard.
//!
//! Everything in this module is hardcoded and fictional. It stands in for
//! the production data sources whenever the platform backend is
//! unreachable. Constructors return fresh values on every call; a snapshot
//! is owned by the request that asked for it and never shared.

use chrono::NaiveDate;
use models::{
    ChartData, Hospital, Language, LocationKind, LocationStatus, MapLocation, Patient,
    PatientStatus, WorkloadDetailRecord, WorkloadEntry,
};

/// Platform-wide order count. Always reported globally, even when the
/// rest of a snapshot is narrowed to one hospital.
pub const TOTAL_ORDERS: u64 = 32_890;

/// Average per-order workload figure shown next to the gauge.
pub const AVG_WORKLOAD: f64 = 8.5;

/// Baseline utilization rate for the global (unscoped) view.
pub const BASE_WORKLOAD_RATE: u32 = 92;

/// Label used when a hospital id cannot be resolved against the catalog.
pub const UNKNOWN_HOSPITAL_LABEL: &str = "Hospital";

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // Catalog dates are fixed literals; an invalid one is a programming error.
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// The nine partner facilities. Ids are stable and unique.
pub fn hospitals(language: Language) -> Vec<Hospital> {
    let entries: [(u32, &str, &str); 9] = match language {
        Language::Zh => [
            (
                1,
                "上海交通大学九院",
                "上海交通大学医学院附属第九人民医院是一所学科特色鲜明、具备深厚临床基础和科研实力的三级甲等综合性医院，在口腔医学、整复外科、骨科等领域享有国际声誉。作为数字化医疗的先行者，九院与云平台深度合作，开展个性化3D打印植入物及康复辅具的临床应用。",
            ),
            (
                2,
                "上海交通大学瑞金医院",
                "上海交通大学医学院附属瑞金医院建于1907年，是上海市乃至全国领先的综合性医院之一，拥有多个国家级重点学科。在智能制造领域，瑞金医院积极探索术前规划模型与手术导板的临床转化，大幅提高了复杂手术的成功率与效率。",
            ),
            (
                3,
                "上海交通大学九院浦东",
                "作为九院的分院区，浦东院区延续了总院在口腔、骨科等优势学科的实力，并重点布局了高端康复医疗服务。该中心配备了先进的数字化扫描与制造设备，是区域内重要的个性化医疗器械临床示范基地。",
            ),
            (
                4,
                "日照市国际健康管理中心",
                "日照市国际健康管理中心是一家集健康体检、健康管理、康复理疗为一体的现代化健康服务机构。引入云平台后，中心实现了远程定制化矫形支具的快速交付，服务范围辐射周边城市。",
            ),
            (
                5,
                "深圳平乐中心",
                "深圳平乐骨伤科医院是一所集医疗、教学、科研、康复、保健为一体的三级甲等中医骨伤专科医院。中心结合传统中医骨伤手法与现代3D打印技术，为患者提供更为精准的康复辅具解决方案。",
            ),
            (
                6,
                "通用云健康科技(四川)有限公司",
                "通用云健康专注于医疗健康大数据的挖掘与应用。作为平台的西南地区重要合作伙伴，主要负责医疗3D打印数据的云端处理与区域化生产调度，推动了智能制造技术在西南地区的普及。",
            ),
            (
                7,
                "青州益都中心医院3D打印中心",
                "该中心依托青州益都中心医院雄厚的骨科临床资源，建立了完备的医疗3D打印实验室，能够独立开展从CT数据重建到模型打印的全流程服务，尤其在复杂骨折的手术规划模型制作方面积累了丰富经验。",
            ),
            (
                8,
                "上海交通大学医学院附属新华医院",
                "新华医院是上海市一所学科门类齐全、特色鲜明的三级甲等综合性医院，儿科是其传统优势学科。在小儿骨科矫形领域，新华医院利用云平台定制了大量儿童脊柱侧弯矫正器及足踝矫形器，取得了显著的临床效果。",
            ),
            (
                9,
                "上海市光华中西医结合医院",
                "上海市光华中西医结合医院以关节病的中西医结合诊治为特色。医院利用3D打印技术辅助人工关节置换手术，并开发了个性化的术后康复护具，有效缩短了患者的康复周期。",
            ),
        ],
        Language::En => [
            (
                1,
                "SJTU Ninth People's Hospital",
                "The Ninth People's Hospital affiliated to Shanghai Jiao Tong University School of Medicine is a grade A tertiary comprehensive hospital with distinct discipline characteristics and an international reputation in stomatology, plastic surgery and orthopedics. As a pioneer of digital medicine it cooperates deeply with the cloud platform on customized 3D printed implants and rehabilitation aids.",
            ),
            (
                2,
                "SJTU Ruijin Hospital",
                "Ruijin Hospital, founded in 1907, is one of the leading comprehensive hospitals in Shanghai and China. In the field of intelligent manufacturing it actively explores the clinical transformation of preoperative planning models and surgical guides.",
            ),
            (
                3,
                "SJTU Ninth People's Hospital (Pudong)",
                "As a branch of the Ninth People's Hospital, the Pudong campus continues the strength of the general hospital in stomatology and orthopedics and focuses on high-end rehabilitation medical services.",
            ),
            (
                4,
                "Rizhao International Health Center",
                "A modern health service institution integrating physical examination, health management and rehabilitation physiotherapy. After introducing the cloud platform it realized rapid delivery of remotely customized orthoses.",
            ),
            (
                5,
                "Shenzhen Pingle Center",
                "A grade A tertiary TCM orthopedics hospital integrating medical treatment, teaching, scientific research, rehabilitation and health care. The center combines traditional TCM orthopedic manipulation with modern 3D printing technology.",
            ),
            (
                6,
                "General Cloud Health Tech (Sichuan)",
                "Focuses on the mining and application of medical and health big data. As an important partner in Southwest China it is responsible for cloud processing of medical 3D printing data and regional production scheduling.",
            ),
            (
                7,
                "Qingzhou Yidu Central Hospital 3D Center",
                "Relying on the strong orthopedic clinical resources of Qingzhou Yidu Central Hospital, this center has established a complete medical 3D printing laboratory covering the full workflow from CT reconstruction to model printing.",
            ),
            (
                8,
                "SJTU Xinhua Hospital",
                "A grade A tertiary comprehensive hospital in Shanghai whose pediatrics is a traditional advantageous discipline. Xinhua Hospital has customized a large number of children's scoliosis orthoses and ankle foot orthoses through the cloud platform.",
            ),
            (
                9,
                "Shanghai Guanghua Hospital",
                "Shanghai Guanghua Hospital of Integrated Traditional Chinese and Western Medicine features the diagnosis and treatment of arthropathy and uses 3D printing to assist artificial joint replacement surgery.",
            ),
        ],
    };

    entries
        .into_iter()
        .map(|(id, name, description)| Hospital {
            id,
            name: name.to_string(),
            description: Some(description.to_string()),
            location: None,
        })
        .collect()
}

/// Base patient list for the global view.
pub fn base_patients(language: Language) -> Vec<Patient> {
    use PatientStatus::*;
    let rows: [(&str, &str, &str, PatientStatus, &str); 8] = match language {
        Language::Zh => [
            ("1", "王**", "生物医学工程", Completed, "医疗器械研究所"),
            ("2", "赵**", "生物医学工程", Sampling, "医疗器械研究所"),
            ("3", "李**", "骨科修复", Processing, "瑞金医院"),
            ("4", "张**", "脊柱矫正", Completed, "九院"),
            ("5", "刘**", "术前模型", Processing, "新华医院"),
            ("6", "陈**", "康复辅具", Sampling, "瑞金医院"),
            ("7", "周**", "关节置换", Processing, "光华医院"),
            ("8", "孙**", "足踝矫形", Completed, "新华医院"),
        ],
        Language::En => [
            ("1", "Wang**", "Biomedical Eng", Completed, "Med Device Inst"),
            ("2", "Zhao**", "Biomedical Eng", Sampling, "Med Device Inst"),
            ("3", "Li**", "Orthopedic Repair", Processing, "Ruijin Hospital"),
            ("4", "Zhang**", "Spine Correction", Completed, "Ninth Hospital"),
            ("5", "Liu**", "Pre-op Model", Processing, "Xinhua Hospital"),
            ("6", "Chen**", "Rehab Aid", Sampling, "Ruijin Hospital"),
            ("7", "Zhou**", "Joint Replacement", Processing, "Guanghua Hospital"),
            ("8", "Sun**", "Foot-Ankle Orthosis", Completed, "Xinhua Hospital"),
        ],
    };

    rows.into_iter()
        .map(|(id, name, project, status, hospital)| Patient {
            id: id.to_string(),
            name: name.to_string(),
            project: project.to_string(),
            status,
            hospital: hospital.to_string(),
        })
        .collect()
}

/// Base map markers for the global view: two transport hubs, four clinics.
pub fn base_map_locations(language: Language) -> Vec<MapLocation> {
    use LocationKind::*;
    use LocationStatus::*;
    let rows: [(u32, f64, f64, f64, f64, &str, LocationKind, LocationStatus); 6] = match language {
        Language::Zh => [
            (1, 30.0, 40.0, 121.336, 31.197, "上海虹桥国际机场", Transport, Normal),
            (2, 55.0, 35.0, 121.526, 31.297, "杨浦区", Clinic, Busy),
            (3, 45.0, 55.0, 121.436, 31.170, "徐汇区", Clinic, Normal),
            (4, 65.0, 60.0, 121.600, 31.150, "浦东新区", Clinic, Normal),
            (5, 25.0, 25.0, 121.250, 31.350, "嘉定区", Clinic, Offline),
            (6, 75.0, 20.0, 121.700, 31.350, "五洲大道", Transport, Normal),
        ],
        Language::En => [
            (1, 30.0, 40.0, 121.336, 31.197, "Shanghai Hongqiao Airport", Transport, Normal),
            (2, 55.0, 35.0, 121.526, 31.297, "Yangpu District", Clinic, Busy),
            (3, 45.0, 55.0, 121.436, 31.170, "Xuhui District", Clinic, Normal),
            (4, 65.0, 60.0, 121.600, 31.150, "Pudong New Area", Clinic, Normal),
            (5, 25.0, 25.0, 121.250, 31.350, "Jiading District", Clinic, Offline),
            (6, 75.0, 20.0, 121.700, 31.350, "Wuzhou Avenue", Transport, Normal),
        ],
    };

    rows.into_iter()
        .map(|(id, x, y, lng, lat, label, kind, status)| MapLocation {
            id,
            x,
            y,
            lng: Some(lng),
            lat: Some(lat),
            label: label.to_string(),
            kind,
            status,
        })
        .collect()
}

/// Product progress base table. Values are the anchors the synthesizer
/// perturbs; progress always mirrors the value.
pub fn base_product_distribution(language: Language) -> Vec<ChartData> {
    let rows: [(&str, f64, &str, bool); 6] = match language {
        Language::Zh => [
            ("脊柱侧弯矫正器", 30.0, "设计修正", true),
            ("术前骨骼模型", 70.0, "生产中", false),
            ("膝关节固定器", 45.0, "待排产", false),
            ("颈椎康复枕", 90.0, "质检中", false),
            ("3D打印鞋垫", 15.0, "数据处理", true),
            ("髋关节植入物", 60.0, "后处理", false),
        ],
        Language::En => [
            ("Scoliosis Orthosis", 30.0, "Design Rev", true),
            ("Pre-op Bone Model", 70.0, "In Prod", false),
            ("Knee Fixator", 45.0, "Pending", false),
            ("Cervical Pillow", 90.0, "In QC", false),
            ("3D Printed Insole", 15.0, "Data Proc", true),
            ("Hip Implant", 60.0, "Post Proc", false),
        ],
    };

    rows.into_iter()
        .map(|(name, value, status_label, is_lagging)| ChartData {
            name: name.to_string(),
            value,
            color: None,
            progress: Some(value),
            status_label: Some(status_label.to_string()),
            is_lagging: Some(is_lagging),
            count: None,
            avg_time: None,
            project_list: None,
        })
        .collect()
}

/// Order status ring segments. Values sum to 100.
pub fn status_distribution(language: Language) -> Vec<ChartData> {
    let rows: [(&str, f64, u32, &str, &str, &[&str]); 4] = match language {
        Language::Zh => [
            ("已完成", 15.0, 6, "#10b981", "48h", &["全周期交付-李**", "全周期交付-王**"]),
            ("生产中", 25.0, 10, "#fbbf24", "5.0h", &["术前模型A01", "膝关节支架P2"]),
            (
                "设计中",
                35.0,
                14,
                "#ef4444",
                "2.5h",
                &["脊柱矫正案03", "颈椎枕模型B", "鞋垫定制C1"],
            ),
            ("邮寄中", 25.0, 10, "#6366f1", "24h", &["订单#9921", "订单#9922"]),
        ],
        Language::En => [
            (
                "Completed",
                15.0,
                6,
                "#10b981",
                "48h",
                &["Full Cycle-Li**", "Full Cycle-Wang**"],
            ),
            (
                "In Production",
                25.0,
                10,
                "#fbbf24",
                "5.0h",
                &["Pre-op Model A01", "Knee Brace P2"],
            ),
            (
                "Designing",
                35.0,
                14,
                "#ef4444",
                "2.5h",
                &["Scoliosis Case 03", "Pillow Model B", "Insole Custom C1"],
            ),
            ("Mailing", 25.0, 10, "#6366f1", "24h", &["Order #9921", "Order #9922"]),
        ],
    };

    rows.into_iter()
        .map(|(name, value, count, color, avg_time, projects)| ChartData {
            name: name.to_string(),
            value,
            color: Some(color.to_string()),
            progress: None,
            status_label: None,
            is_lagging: None,
            count: Some(count),
            avg_time: Some(avg_time.to_string()),
            project_list: Some(projects.iter().map(|p| p.to_string()).collect()),
        })
        .collect()
}

/// Weekly baseline role-hours. Order matters: design and production come
/// first because the synthesizer perturbs those two by hospital id.
pub fn base_workload_breakdown(language: Language) -> Vec<WorkloadEntry> {
    let rows: [(&str, f64); 4] = match language {
        Language::Zh => [("设计岗", 2.5), ("生产岗", 4.0), ("质检岗", 1.2), ("物流岗", 0.8)],
        Language::En => [("Design", 2.5), ("Prod", 4.0), ("QC", 1.2), ("Logistics", 0.8)],
    };
    let unit = match language {
        Language::Zh => "h/项",
        Language::En => "h/item",
    };

    rows.into_iter()
        .map(|(role, time)| WorkloadEntry {
            role: role.to_string(),
            time,
            unit: unit.to_string(),
        })
        .collect()
}

/// Per-employee time tracking ledger. Returned verbatim; never filtered
/// by hospital scope.
pub fn workload_details(language: Language) -> Vec<WorkloadDetailRecord> {
    let rows: [(&str, &str, &str, &str, &str, f64, NaiveDate, &str); 8] = match language {
        Language::Zh => [
            ("1001", "张伟", "设计岗", "脊柱侧弯矫正器-A02", "3D建模", 3.5, date(2023, 10, 23), "已完成"),
            ("1002", "李娜", "生产岗", "膝关节固定器-K99", "打印监控", 5.0, date(2023, 10, 23), "进行中"),
            ("1003", "王强", "质检岗", "颈椎康复枕-C11", "应力测试", 1.2, date(2023, 10, 24), "已完成"),
            ("1004", "刘洋", "物流岗", "订单#9921", "打包发货", 0.8, date(2023, 10, 24), "已完成"),
            ("1005", "陈敏", "设计岗", "髋关节植入物-H05", "拓扑优化", 4.0, date(2023, 10, 22), "进行中"),
            ("1006", "赵雷", "生产岗", "术前骨骼模型-B22", "后处理", 2.5, date(2023, 10, 22), "已完成"),
            ("1007", "周杰", "质检岗", "脊柱侧弯矫正器-A02", "尺寸测量", 0.5, date(2023, 10, 24), "已完成"),
            ("1008", "孙丽", "设计岗", "3D打印鞋垫-F08", "点云处理", 1.5, date(2023, 10, 23), "已完成"),
        ],
        Language::En => [
            ("1001", "Zhang Wei", "Design", "Spine Orthosis-A02", "3D Modeling", 3.5, date(2023, 10, 23), "Done"),
            ("1002", "Li Na", "Production", "Knee Fixator-K99", "Print Mon", 5.0, date(2023, 10, 23), "In Progress"),
            ("1003", "Wang Qiang", "QC", "Cervical Pillow-C11", "Stress Test", 1.2, date(2023, 10, 24), "Done"),
            ("1004", "Liu Yang", "Logistics", "Order #9921", "Packing", 0.8, date(2023, 10, 24), "Done"),
            ("1005", "Chen Min", "Design", "Hip Implant-H05", "Topology Opt", 4.0, date(2023, 10, 22), "In Progress"),
            ("1006", "Zhao Lei", "Production", "Bone Model-B22", "Post-Proc", 2.5, date(2023, 10, 22), "Done"),
            ("1007", "Zhou Jie", "QC", "Spine Orthosis-A02", "Measure", 0.5, date(2023, 10, 24), "Done"),
            ("1008", "Sun Li", "Design", "3D Insole-F08", "Point Cloud", 1.5, date(2023, 10, 23), "Done"),
        ],
    };

    rows.into_iter()
        .map(
            |(id, employee_name, role, project_name, task_type, hours_spent, date, status)| {
                WorkloadDetailRecord {
                    id: id.to_string(),
                    employee_name: employee_name.to_string(),
                    role: role.to_string(),
                    project_name: project_name.to_string(),
                    task_type: task_type.to_string(),
                    hours_spent,
                    date,
                    status: status.to_string(),
                }
            },
        )
        .collect()
}

/// Candidate surnames for bulk patient generation. Names are masked the
/// same way the base list is.
pub fn patient_name_pool(language: Language) -> &'static [&'static str] {
    match language {
        Language::Zh => &["王**", "李**", "张**", "刘**", "陈**", "杨**", "赵**", "黄**", "周**", "吴**"],
        Language::En => &[
            "Wang**", "Li**", "Zhang**", "Liu**", "Chen**", "Yang**", "Zhao**", "Huang**",
            "Zhou**", "Wu**",
        ],
    }
}

/// Candidate project labels for bulk patient generation.
pub fn patient_project_pool(language: Language) -> &'static [&'static str] {
    match language {
        Language::Zh => &["脊柱矫正", "骨科修复", "术前模型", "康复辅具", "3D打印鞋垫", "关节置换"],
        Language::En => &[
            "Spine Correction",
            "Orthopedic Repair",
            "Pre-op Model",
            "Rehab Aid",
            "3D Printed Insole",
            "Joint Replacement",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hospital_catalog_has_nine_unique_ids() {
        for lang in [Language::Zh, Language::En] {
            let hospitals = hospitals(lang);
            assert_eq!(hospitals.len(), 9);
            let mut ids: Vec<u32> = hospitals.iter().map(|h| h.id).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), 9);
        }
    }

    #[test]
    fn test_base_lists_have_fixed_lengths() {
        for lang in [Language::Zh, Language::En] {
            assert_eq!(base_patients(lang).len(), 8);
            assert_eq!(base_map_locations(lang).len(), 6);
            assert_eq!(base_product_distribution(lang).len(), 6);
            assert_eq!(status_distribution(lang).len(), 4);
            assert_eq!(base_workload_breakdown(lang).len(), 4);
            assert_eq!(workload_details(lang).len(), 8);
        }
    }

    #[test]
    fn test_status_distribution_sums_to_hundred() {
        let total: f64 = status_distribution(Language::En).iter().map(|s| s.value).sum();
        assert_eq!(total, 100.0);
    }

    #[test]
    fn test_catalog_numbers_are_language_invariant() {
        let zh = status_distribution(Language::Zh);
        let en = status_distribution(Language::En);
        for (a, b) in zh.iter().zip(en.iter()) {
            assert_eq!(a.value, b.value);
            assert_eq!(a.count, b.count);
            assert_eq!(a.color, b.color);
        }

        let zh_hours: Vec<f64> = base_workload_breakdown(Language::Zh).iter().map(|e| e.time).collect();
        let en_hours: Vec<f64> = base_workload_breakdown(Language::En).iter().map(|e| e.time).collect();
        assert_eq!(zh_hours, en_hours);
    }

    #[test]
    fn test_base_locations_cover_both_kinds() {
        let locations = base_map_locations(Language::En);
        assert!(locations.iter().any(|l| l.kind == LocationKind::Transport));
        assert!(locations.iter().any(|l| l.kind == LocationKind::Clinic));
        assert!(locations.iter().all(|l| l.lng.is_some() && l.lat.is_some()));
    }
}
