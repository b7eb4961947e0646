use crate::Preset;
use crate::responder::{Rule, RuleTable};

pub const REVENUE: &str = "Based on your current data, revenue is up 12.5% this month at $67,430. The strongest performing service lines are residential pest control (+18%) and commercial contracts (+15%). I recommend focusing on upselling commercial clients and expanding residential services in high-performance areas.";

pub const TECHNICIAN: &str = "Your technician performance shows 94.2% job completion rate. Mike Johnson and Sarah Chen are top performers with 100% completion rates. David Miller in Northtown may need route optimization - he's currently delayed with only 43% completion today. Consider redistributing jobs or providing additional support.";

pub const CUSTOMER: &str = "Customer satisfaction is strong at 4.7/5 stars. Recent feedback indicates customers appreciate punctual service and thorough explanations. The main complaint areas are scheduling flexibility and follow-up communication. I suggest implementing automated appointment reminders and post-service surveys.";

pub const OPTIMIZATION: &str = "I've identified several optimization opportunities: 1) Route efficiency can be improved by 12% in the Northtown area, 2) Average job time of 1.8 hours is 8.3% better than last month - maintain this trend, 3) Consider consolidating morning appointments to reduce travel time between jobs.";

pub const FALLBACK: &str = "I can help you analyze revenue trends, technician performance, customer satisfaction, route optimization, and operational efficiency. Try asking about specific metrics or areas you'd like to improve. For example: 'How can I increase revenue?' or 'Which technicians need support?'";

pub const GREETING: &str = "Hello! I'm WAIVE, your AI business intelligence assistant. I can help you analyze your data, identify trends, and provide actionable insights. What would you like to know about your business performance?";

pub static TABLE: RuleTable = RuleTable {
    rules: &[
        Rule {
            triggers: &["revenue", "sales"],
            template: REVENUE,
        },
        Rule {
            triggers: &["technician", "staff"],
            template: TECHNICIAN,
        },
        Rule {
            triggers: &["customer", "satisfaction"],
            template: CUSTOMER,
        },
        Rule {
            triggers: &["optimize", "efficiency"],
            template: OPTIMIZATION,
        },
    ],
    fallback: FALLBACK,
};

/// WAIVE: the floating business-intelligence assistant.
/// Four rules; the broadest trigger sets of the two presets.
pub struct Waive;

impl Preset for Waive {
    fn id(&self) -> &str {
        "waive"
    }

    fn name(&self) -> &str {
        "WAIVE"
    }

    fn greeting(&self) -> &str {
        GREETING
    }

    fn table(&self) -> &'static RuleTable {
        &TABLE
    }
}
