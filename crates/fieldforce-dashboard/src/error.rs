use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("unknown export format: {0}")]
    UnknownFormat(String),

    #[error("unknown filter: {0}")]
    UnknownFilter(String),

    #[error("unknown branch: {0}")]
    UnknownBranch(String),

    #[error("unknown service type: {0}")]
    UnknownServiceType(String),

    #[error("date range ends ({to}) before it starts ({from})")]
    InvalidDateRange {
        from: jiff::civil::Date,
        to: jiff::civil::Date,
    },
}
