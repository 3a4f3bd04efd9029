use aegis_core::{
    allocate_time, local_now, plan_day, AllocationSection, Goal, PlannerConfig, Task,
};
use chrono::{NaiveDate, TimeZone, Utc};

const SNAPSHOT: &str = r#"{
    "goals": [
        {"id": "g-phd", "category": "phd", "title": "Dissertation defense",
         "deadline": "2026-03-06", "priority_tier": "critical", "status": "active"},
        {"id": "g-work", "category": "work", "title": "Release 2.0",
         "deadline": "2026-03-25", "priority_tier": "high", "status": "active"},
        {"id": "g-health", "category": "health", "title": "Half marathon",
         "deadline": null, "priority_tier": "medium", "status": "active"}
    ],
    "tasks": [
        {"id": "t-slides", "title": "Rehearse defense slides", "goal_id": "g-phd",
         "estimated_minutes": 90, "high_stakes": true},
        {"id": "t-review", "title": "Review release branch", "goal_id": "g-work",
         "estimated_minutes": 180, "dependency_ids": ["t-changelog"]},
        {"id": "t-run", "title": "Easy 5k", "goal_id": "g-health", "estimated_minutes": 45},
        {"id": "t-done", "title": "Book room", "goal_id": "g-phd", "completed": true}
    ]
}"#;

#[derive(serde::Deserialize)]
struct Snapshot {
    goals: Vec<Goal>,
    tasks: Vec<Task>,
}

fn snapshot() -> Snapshot {
    serde_json::from_str(SNAPSHOT).unwrap()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// Regression on a realistic snapshot: the defense task dominates, the
/// release review outranks the run, and the split follows deadline pressure.
#[test]
fn test_plan_from_json_snapshot() {
    let snap = snapshot();
    for g in &snap.goals {
        g.validate().unwrap();
    }

    // 04:00 UTC on Mar 3 is 22:00 on Mar 2 in Chicago (CST, before DST).
    let now_utc = Utc.with_ymd_and_hms(2026, 3, 3, 4, 0, 0).unwrap();
    let now_local = local_now("America/Chicago", now_utc).unwrap().naive_local();
    assert_eq!(now_local.date(), NaiveDate::from_ymd_opt(2026, 3, 2).unwrap());

    let plan = plan_day(&snap.goals, &snap.tasks, now_local, 8.0, &AllocationSection::default());

    let ids: Vec<&str> = plan.ranked_tasks.iter().map(|t| t.task_id.as_str()).collect();
    assert_eq!(ids, vec!["t-slides", "t-review", "t-run"]);

    // (35 + 30 + 20) * 1.5, clamped
    assert_eq!(plan.ranked_tasks[0].score, 100.0);
    // 23 days (20) + high (22) + oversized (5) + dependency (10)
    assert_eq!(plan.ranked_tasks[1].score, 57.0);
    // medium (15) + fits (20)
    assert_eq!(plan.ranked_tasks[2].score, 35.0);

    // phd: 4 days => 100, work: 23 days => 25
    assert!(close(plan.allocation.category_a_share, 0.8));
    assert!(close(plan.allocation.category_b_share, 0.2));
    assert!(close(plan.allocation.category_a_hours, 369.75 * 0.8 / 60.0));
    assert!(close(plan.allocation.total_minutes(), 480.0));
}

#[test]
fn test_plan_serializes_for_persistence() {
    let snap = snapshot();
    let now = NaiveDate::from_ymd_opt(2026, 3, 2)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap();
    let plan = plan_day(&snap.goals, &snap.tasks, now, 6.0, &AllocationSection::default());

    let json = serde_json::to_value(&plan).unwrap();
    assert_eq!(json["day"], "2026-03-02");
    assert_eq!(json["time_slot"]["productivity_tier"], "high");
    assert_eq!(json["time_slot"]["available_minutes"], 150);
    assert_eq!(json["ranked_tasks"][0]["task_id"], "t-slides");
}

#[test]
fn test_plan_honours_configured_budget() {
    let cfg = PlannerConfig::from_toml_str(
        r#"
[allocation]
exercise_minutes = 30.0
buffer_ratio = 0.0
"#,
    )
    .unwrap();
    let snap = snapshot();
    let now = NaiveDate::from_ymd_opt(2026, 3, 2)
        .unwrap()
        .and_hms_opt(14, 0, 0)
        .unwrap();
    let plan = plan_day(&snap.goals, &snap.tasks, now, cfg.allocation.default_total_hours, &cfg.allocation);

    assert_eq!(plan.allocation.exercise_minutes, 30.0);
    assert_eq!(plan.allocation.buffer_minutes, 0.0);
    assert!(close(
        plan.allocation.category_a_hours + plan.allocation.category_b_hours,
        (8.0 * 60.0 - 30.0) / 60.0
    ));
}

#[test]
fn test_allocation_accounts_for_every_minute() {
    let cases: [(&[i64], &[i64]); 3] = [(&[2, 40], &[9]), (&[], &[15]), (&[-3], &[-3])];
    for (a_days, b_days) in cases {
        for hours in [1.0, 4.5, 9.0, 12.0] {
            let a = allocate_time(a_days, b_days, hours);
            assert!((a.total_minutes() - hours * 60.0).abs() <= 0.01, "hours={hours}");
        }
    }
}
