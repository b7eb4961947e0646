use crate::Preset;
use crate::responder::{Rule, RuleTable};

macro_rules! dashboard_reply {
    ($body:literal) => {
        concat!("Based on your current dashboard data, ", $body)
    };
}

pub const REVENUE: &str = dashboard_reply!(
    "your revenue is trending positively at +12.5% growth this month. The strongest performers are residential services (+15.7%) and termite inspections (+15.7%). I recommend focusing marketing efforts on these high-growth segments."
);

pub const TECHNICIAN: &str = dashboard_reply!(
    "your technicians show varying performance levels. David Miller needs immediate attention due to burnout risk (89%), while Lisa Rodriguez maintains optimal performance. Consider redistributing workload and optimizing routes."
);

pub const CUSTOMER: &str = dashboard_reply!(
    "customer satisfaction remains strong at 4.7/5, but watch for churn risks. Green Valley Properties (89% churn risk) needs immediate outreach. Review the Customer Churn Risk table for detailed action items."
);

pub const FALLBACK: &str = dashboard_reply!(
    "I can help analyze any aspect of your dashboard. Try asking about revenue trends, technician performance, customer satisfaction, or operational efficiency."
);

pub const GREETING: &str = "Hi! I'm your PestPac AI assistant. Ask me about your dashboard data, trends, or get recommendations for improving operations.";

pub static TABLE: RuleTable = RuleTable {
    rules: &[
        Rule {
            triggers: &["revenue"],
            template: REVENUE,
        },
        Rule {
            triggers: &["technician"],
            template: TECHNICIAN,
        },
        Rule {
            triggers: &["customer"],
            template: CUSTOMER,
        },
    ],
    fallback: FALLBACK,
};

/// "Ask Questions" tab of the AI insights panel.
/// Every reply, fallback included, opens with the dashboard-data preamble.
pub struct Insights;

impl Preset for Insights {
    fn id(&self) -> &str {
        "insights"
    }

    fn name(&self) -> &str {
        "PestPac AI Assistant"
    }

    fn greeting(&self) -> &str {
        GREETING
    }

    fn table(&self) -> &'static RuleTable {
        &TABLE
    }
}
