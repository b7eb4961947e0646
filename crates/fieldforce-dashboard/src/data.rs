//! Static mock datasets backing the analytics pages.

use serde::Serialize;

use crate::filter::{Branch, Filterable};
use crate::risk::{HeatmapRisk, Priority, RiskLevel, Trend};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChurnRisk {
    pub customer: &'static str,
    pub risk_score: f64,
    pub top_driver: &'static str,
    pub days_since_service: u32,
    pub account_value_usd: u32,
    pub recommendation: &'static str,
}

impl ChurnRisk {
    pub fn level(&self) -> RiskLevel {
        RiskLevel::from_score(self.risk_score)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BurnoutWarning {
    pub technician: &'static str,
    pub hours_this_week: u32,
    pub avg_hours_per_day: f64,
    pub consecutive_days: u32,
    pub job_density: f64,
    pub burnout_risk: f64,
    pub warning: &'static str,
    pub recommendation: &'static str,
}

impl BurnoutWarning {
    pub fn level(&self) -> RiskLevel {
        RiskLevel::from_score(self.burnout_risk)
    }
}

/// One technician/branch cell of the job risk heatmap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapCell {
    pub technician: &'static str,
    pub branch: Branch,
    pub no_show_risk: f64,
    pub late_risk: f64,
    pub total_jobs: u32,
}

impl HeatmapCell {
    pub fn no_show_level(&self) -> HeatmapRisk {
        HeatmapRisk::from_score(self.no_show_risk)
    }

    pub fn late_level(&self) -> HeatmapRisk {
        HeatmapRisk::from_score(self.late_risk)
    }
}

impl Filterable for HeatmapCell {
    fn branch(&self) -> Option<Branch> {
        Some(self.branch)
    }

    fn technician(&self) -> Option<&str> {
        Some(self.technician)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldStatus {
    Active,
    Delayed,
    Break,
}

/// Latest reported status of a technician in the field. Locations are
/// branch-level only; there is no live tracking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TechnicianStatus {
    pub id: u32,
    pub name: &'static str,
    pub branch: Branch,
    pub status: FieldStatus,
    pub jobs_today: u32,
    pub completed: u32,
}

impl TechnicianStatus {
    /// Completed share of today's jobs, `0.0` when nothing is scheduled.
    pub fn completion_ratio(&self) -> f64 {
        if self.jobs_today == 0 {
            return 0.0;
        }
        f64::from(self.completed) / f64::from(self.jobs_today)
    }
}

impl Filterable for TechnicianStatus {
    fn branch(&self) -> Option<Branch> {
        Some(self.branch)
    }

    fn technician(&self) -> Option<&str> {
        Some(self.name)
    }
}

/// Critical and high tier counts shown in the burnout card header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BurnoutSummary {
    pub critical: usize,
    pub high: usize,
}

impl BurnoutSummary {
    pub fn of(warnings: &[BurnoutWarning]) -> Self {
        let scores = || warnings.iter().map(|w| w.burnout_risk);
        Self {
            critical: RiskLevel::Critical.count(scores()),
            high: RiskLevel::High.count(scores()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SmartRecommendation {
    pub category: &'static str,
    pub priority: Priority,
    pub insight: &'static str,
    pub action: &'static str,
    /// In-page anchor the action button jumps to.
    pub link: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyMetric {
    pub metric: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub trend: Trend,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklySummary {
    pub summary: &'static str,
    pub key_metrics: Vec<KeyMetric>,
    pub trends: Vec<&'static str>,
}

/// Drafted message for an at-risk customer. `[Customer]` is left for the
/// sender to fill in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutreachSuggestion {
    pub customer: &'static str,
    pub reason: &'static str,
    pub days_since_contact: u32,
    pub message: &'static str,
}

pub fn churn_risks() -> Vec<ChurnRisk> {
    vec![
        ChurnRisk {
            customer: "Green Valley Properties",
            risk_score: 0.89,
            top_driver: "Missed Appointments",
            days_since_service: 15,
            account_value_usd: 2400,
            recommendation: "Schedule immediate check-in call",
        },
        ChurnRisk {
            customer: "Downtown Restaurant Group",
            risk_score: 0.76,
            top_driver: "Service Quality Issues",
            days_since_service: 8,
            account_value_usd: 1800,
            recommendation: "Send senior technician for next visit",
        },
        ChurnRisk {
            customer: "Maple Heights HOA",
            risk_score: 0.68,
            top_driver: "Price Sensitivity",
            days_since_service: 3,
            account_value_usd: 3200,
            recommendation: "Offer loyalty discount program",
        },
        ChurnRisk {
            customer: "Riverside Medical Center",
            risk_score: 0.61,
            top_driver: "Communication Issues",
            days_since_service: 12,
            account_value_usd: 4100,
            recommendation: "Assign dedicated account manager",
        },
        ChurnRisk {
            customer: "Sunset Shopping Plaza",
            risk_score: 0.58,
            top_driver: "Scheduling Conflicts",
            days_since_service: 6,
            account_value_usd: 2900,
            recommendation: "Increase scheduling flexibility",
        },
    ]
}

pub fn burnout_warnings() -> Vec<BurnoutWarning> {
    vec![
        BurnoutWarning {
            technician: "David Miller",
            hours_this_week: 52,
            avg_hours_per_day: 10.4,
            consecutive_days: 12,
            job_density: 0.85,
            burnout_risk: 0.89,
            warning: "Critical - Exceeding 50hrs/week for 3 weeks",
            recommendation: "Reduce schedule by 20% next week",
        },
        BurnoutWarning {
            technician: "Sarah Chen",
            hours_this_week: 48,
            avg_hours_per_day: 9.6,
            consecutive_days: 8,
            job_density: 0.78,
            burnout_risk: 0.72,
            warning: "High workload - approaching limits",
            recommendation: "Monitor closely, consider backup support",
        },
        BurnoutWarning {
            technician: "Mike Johnson",
            hours_this_week: 45,
            avg_hours_per_day: 9.0,
            consecutive_days: 6,
            job_density: 0.65,
            burnout_risk: 0.58,
            warning: "Moderate risk - schedule density increasing",
            recommendation: "Optimize routing to reduce travel time",
        },
        BurnoutWarning {
            technician: "Lisa Rodriguez",
            hours_this_week: 42,
            avg_hours_per_day: 8.4,
            consecutive_days: 5,
            job_density: 0.62,
            burnout_risk: 0.35,
            warning: "Healthy workload - good performance",
            recommendation: "Maintain current schedule",
        },
    ]
}

pub fn job_risk_heatmap() -> Vec<HeatmapCell> {
    fn cell(
        technician: &'static str,
        branch: Branch,
        no_show_risk: f64,
        late_risk: f64,
        total_jobs: u32,
    ) -> HeatmapCell {
        HeatmapCell {
            technician,
            branch,
            no_show_risk,
            late_risk,
            total_jobs,
        }
    }

    vec![
        cell("Mike Johnson", Branch::Downtown, 0.15, 0.25, 8),
        cell("Mike Johnson", Branch::Westside, 0.08, 0.12, 6),
        cell("Sarah Chen", Branch::Downtown, 0.22, 0.18, 9),
        cell("Sarah Chen", Branch::Northtown, 0.05, 0.08, 7),
        cell("David Miller", Branch::Westside, 0.12, 0.28, 5),
        cell("David Miller", Branch::Eastside, 0.19, 0.15, 8),
        cell("Lisa Rodriguez", Branch::Northtown, 0.03, 0.06, 10),
        cell("Lisa Rodriguez", Branch::Eastside, 0.14, 0.11, 6),
    ]
}

pub fn technician_statuses() -> Vec<TechnicianStatus> {
    vec![
        TechnicianStatus {
            id: 1,
            name: "Mike Johnson",
            branch: Branch::Downtown,
            status: FieldStatus::Active,
            jobs_today: 6,
            completed: 4,
        },
        TechnicianStatus {
            id: 2,
            name: "Sarah Chen",
            branch: Branch::Westside,
            status: FieldStatus::Active,
            jobs_today: 5,
            completed: 5,
        },
        TechnicianStatus {
            id: 3,
            name: "David Miller",
            branch: Branch::Northtown,
            status: FieldStatus::Delayed,
            jobs_today: 7,
            completed: 3,
        },
        TechnicianStatus {
            id: 4,
            name: "Lisa Wong",
            branch: Branch::Eastside,
            status: FieldStatus::Active,
            jobs_today: 4,
            completed: 4,
        },
        TechnicianStatus {
            id: 5,
            name: "James Brown",
            branch: Branch::Southside,
            status: FieldStatus::Break,
            jobs_today: 5,
            completed: 2,
        },
    ]
}

pub fn smart_recommendations() -> Vec<SmartRecommendation> {
    vec![
        SmartRecommendation {
            category: "Scheduling Optimization",
            priority: Priority::High,
            insight: "Mike Johnson's route efficiency could improve by 23% with adjusted scheduling. Recommend shifting 3 afternoon appointments to morning slots.",
            action: "View Route Optimization",
            link: "#route-optimizer",
        },
        SmartRecommendation {
            category: "Customer Retention",
            priority: Priority::Critical,
            insight: "Green Valley Properties shows 89% churn risk. Last missed appointment and price sensitivity detected. Immediate intervention needed.",
            action: "View Customer Details",
            link: "#customer-details",
        },
        SmartRecommendation {
            category: "Resource Management",
            priority: Priority::Medium,
            insight: "Termite inspection demand surging in Westside region (+35%). Consider reallocating specialist technicians from Northtown.",
            action: "View Demand Analysis",
            link: "#demand-analysis",
        },
        SmartRecommendation {
            category: "Quality Assurance",
            priority: Priority::Medium,
            insight: "Service quality scores declining for commercial accounts. Pattern indicates training opportunity for customer communication.",
            action: "View Quality Metrics",
            link: "#quality-metrics",
        },
    ]
}

pub fn weekly_summary() -> WeeklySummary {
    WeeklySummary {
        summary: "This week showed strong performance with 12.5% revenue growth and improved job completion rates. However, Downtown region is experiencing higher-than-normal no-show rates (22% vs 8% average), primarily affecting Sarah Chen's routes.",
        key_metrics: vec![
            KeyMetric {
                metric: "Revenue",
                value: "$67,430",
                change: "+12.5%",
                trend: Trend::Up,
            },
            KeyMetric {
                metric: "Job Completion",
                value: "94.2%",
                change: "+3.1%",
                trend: Trend::Up,
            },
            KeyMetric {
                metric: "Customer Satisfaction",
                value: "4.7/5",
                change: "+2.1%",
                trend: Trend::Up,
            },
            KeyMetric {
                metric: "No-Show Rate",
                value: "7%",
                change: "+2.3%",
                trend: Trend::Down,
            },
        ],
        trends: vec![
            "Residential pest control showing strongest growth (+15.7%)",
            "Downtown appointments having delivery issues",
            "Technician utilization rates improving across all regions",
            "Customer response times decreased by 18 minutes on average",
        ],
    }
}

pub fn outreach_suggestions() -> Vec<OutreachSuggestion> {
    vec![
        OutreachSuggestion {
            customer: "Green Valley Properties",
            reason: "High Churn Risk",
            days_since_contact: 15,
            message: "Hi [Customer], We noticed we missed your recent appointment and want to make it right. We're offering a 15% service credit for the inconvenience and would like to schedule a senior technician for your next visit. When would be a good time to discuss your pest control needs?",
        },
        OutreachSuggestion {
            customer: "Riverside Medical Center",
            reason: "Communication Issues",
            days_since_contact: 12,
            message: "Dear [Customer], We want to ensure clear communication for all your pest control needs. We're assigning a dedicated account manager to your account and implementing weekly check-ins. Please let us know your preferred communication method and timing.",
        },
    ]
}
