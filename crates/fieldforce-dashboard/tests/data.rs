use fieldforce_dashboard::data::{
    BurnoutSummary, FieldStatus, burnout_warnings, churn_risks, job_risk_heatmap,
    outreach_suggestions, smart_recommendations, technician_statuses, weekly_summary,
};
use fieldforce_dashboard::risk::{HeatmapRisk, Priority, RiskLevel, Severity, Trend, percent};

#[test]
fn risk_tiers_use_inclusive_thresholds() {
    assert_eq!(RiskLevel::from_score(0.8), RiskLevel::Critical);
    assert_eq!(RiskLevel::from_score(0.79), RiskLevel::High);
    assert_eq!(RiskLevel::from_score(0.6), RiskLevel::High);
    assert_eq!(RiskLevel::from_score(0.59), RiskLevel::Normal);

    assert_eq!(HeatmapRisk::from_score(0.2), HeatmapRisk::High);
    assert_eq!(HeatmapRisk::from_score(0.1), HeatmapRisk::Medium);
    assert_eq!(HeatmapRisk::from_score(0.09), HeatmapRisk::Low);
    assert_eq!(HeatmapRisk::Medium.label(), "MED");
}

#[test]
fn churn_table_is_sorted_by_risk() {
    let rows = churn_risks();
    assert!(rows.windows(2).all(|w| w[0].risk_score >= w[1].risk_score));

    let levels: Vec<_> = rows.iter().map(|r| r.level()).collect();
    assert_eq!(
        levels,
        [
            RiskLevel::Critical,
            RiskLevel::High,
            RiskLevel::High,
            RiskLevel::High,
            RiskLevel::Normal,
        ]
    );
    assert_eq!(percent(rows[0].risk_score), "89%");
}

#[test]
fn only_david_miller_is_critical_for_burnout() {
    let critical: Vec<_> = burnout_warnings()
        .into_iter()
        .filter(|w| w.level() == RiskLevel::Critical)
        .map(|w| w.technician)
        .collect();
    assert_eq!(critical, ["David Miller"]);
}

#[test]
fn heatmap_cells_classify_both_risks() {
    let cells = job_risk_heatmap();
    let sarah_downtown = cells
        .iter()
        .find(|c| c.technician == "Sarah Chen" && c.branch.as_str() == "downtown")
        .unwrap();

    assert_eq!(sarah_downtown.no_show_level(), HeatmapRisk::High);
    assert_eq!(sarah_downtown.late_level(), HeatmapRisk::Medium);
}

#[test]
fn delayed_technician_completion_matches_assistant_reply() {
    let statuses = technician_statuses();
    let david = statuses.iter().find(|t| t.name == "David Miller").unwrap();

    assert_eq!(david.status, FieldStatus::Delayed);
    assert_eq!(percent(david.completion_ratio()), "43%");
}

#[test]
fn burnout_header_counts_critical_and_high_separately() {
    let summary = BurnoutSummary::of(&burnout_warnings());
    assert_eq!(summary, BurnoutSummary { critical: 1, high: 1 });
}

#[test]
fn risk_level_count_uses_tier_boundaries() {
    let scores = [0.8, 0.79, 0.6, 0.59, 0.95];
    assert_eq!(RiskLevel::Critical.count(scores), 2);
    assert_eq!(RiskLevel::High.count(scores), 2);
    assert_eq!(RiskLevel::Normal.count(scores), 1);
    assert_eq!(RiskLevel::High.count(std::iter::empty()), 0);
}

#[test]
fn priority_maps_to_badge_severity() {
    assert_eq!(Priority::Critical.severity(), Severity::Destructive);
    assert_eq!(Priority::High.severity(), Severity::Warning);
    assert_eq!(Priority::Medium.severity(), Severity::Neutral);
    assert_eq!(Priority::Critical.label(), "Critical");
}

#[test]
fn only_customer_retention_is_critical() {
    let recommendations = smart_recommendations();
    assert_eq!(recommendations.len(), 4);

    let critical: Vec<_> = recommendations
        .iter()
        .filter(|r| r.priority == Priority::Critical)
        .collect();
    assert_eq!(critical.len(), 1);
    assert_eq!(critical[0].category, "Customer Retention");
    assert!(critical[0].insight.starts_with("Green Valley Properties"));
    assert_eq!(critical[0].link, "#customer-details");
}

#[test]
fn recommendations_serialize_priority_in_snake_case() {
    let json = serde_json::to_value(&smart_recommendations()[0]).unwrap();
    assert_eq!(json["priority"], "high");
    assert_eq!(json["link"], "#route-optimizer");
}

#[test]
fn weekly_summary_flags_no_show_rate_as_down() {
    let weekly = weekly_summary();
    assert_eq!(weekly.key_metrics.len(), 4);
    assert_eq!(weekly.trends.len(), 4);

    let down: Vec<_> = weekly
        .key_metrics
        .iter()
        .filter(|m| m.trend == Trend::Down)
        .map(|m| m.metric)
        .collect();
    assert_eq!(down, ["No-Show Rate"]);

    let revenue = &weekly.key_metrics[0];
    assert_eq!((revenue.value, revenue.change), ("$67,430", "+12.5%"));
    assert!(weekly.summary.contains("Sarah Chen"));
}

#[test]
fn outreach_targets_at_risk_customers() {
    let suggestions = outreach_suggestions();
    let churn = churn_risks();

    assert_eq!(suggestions.len(), 2);
    for suggestion in &suggestions {
        let risk = churn
            .iter()
            .find(|c| c.customer == suggestion.customer)
            .unwrap();
        assert_eq!(suggestion.days_since_contact, risk.days_since_service);
        assert!(suggestion.message.contains("[Customer]"));
    }
    assert_eq!(suggestions[0].reason, "High Churn Risk");
    assert_eq!(suggestions[1].reason, "Communication Issues");
}
