//! Simulated dashboard export.
//!
//! Produces the file name and success receipt the UI shows after a fixed
//! delay. No bytes are rendered or written.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use fieldforce_core::config::FieldforceConfig;
use jiff::civil::Date;
use jiff::tz::TimeZone;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::DashboardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Png,
    Pdf,
    Xlsx,
    Pptx,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::Png,
        ExportFormat::Pdf,
        ExportFormat::Xlsx,
        ExportFormat::Pptx,
    ];

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Pptx => "pptx",
        }
    }

    /// Menu label.
    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Png => "Image (.png)",
            ExportFormat::Pdf => "PDF",
            ExportFormat::Xlsx => "Excel (.xlsx)",
            ExportFormat::Pptx => "PowerPoint (.pptx)",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ExportFormat::Png => "Snapshot of the full dashboard",
            ExportFormat::Pdf => "Print-friendly layout",
            ExportFormat::Xlsx => "Tabular data export",
            ExportFormat::Pptx => "Presentation-ready slides",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ext = s.trim().trim_start_matches('.');
        ExportFormat::ALL
            .into_iter()
            .find(|f| f.extension().eq_ignore_ascii_case(ext))
            .ok_or_else(|| DashboardError::UnknownFormat(s.to_string()))
    }
}

/// Pages that carry an export button, with the slug used in file names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardPage {
    CommandCenter,
    PredictiveInsights,
    FieldOperations,
}

impl DashboardPage {
    pub fn slug(&self) -> &'static str {
        match self {
            DashboardPage::CommandCenter => "dashboard",
            DashboardPage::PredictiveInsights => "predictive-insights",
            DashboardPage::FieldOperations => "field-operations-dashboard",
        }
    }
}

/// `<prefix>_<dashboard>_<YYYY-MM-DD>.<ext>`
pub fn file_name(prefix: &str, dashboard: &str, date: Date, format: ExportFormat) -> String {
    format!("{prefix}_{dashboard}_{date}.{}", format.extension())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportReceipt {
    pub file_name: String,
    pub format: ExportFormat,
    pub exported_at: jiff::Timestamp,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct Exporter {
    prefix: String,
    delay: Duration,
}

impl Exporter {
    pub fn new(prefix: impl Into<String>, delay: Duration) -> Self {
        Self {
            prefix: prefix.into(),
            delay,
        }
    }

    pub fn from_config(config: &FieldforceConfig) -> Self {
        Self::new(config.export_prefix.clone(), config.export_delay())
    }

    /// Export dated with today's UTC date.
    pub async fn export(&self, dashboard: &str, format: ExportFormat) -> ExportReceipt {
        let today = jiff::Timestamp::now().to_zoned(TimeZone::UTC).date();
        self.export_on(dashboard, format, today).await
    }

    pub async fn export_on(&self, dashboard: &str, format: ExportFormat, date: Date) -> ExportReceipt {
        let file_name = file_name(&self.prefix, dashboard, date, format);
        info!(format = %format, file_name = %file_name, "export requested");

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        ExportReceipt {
            description: format!("Dashboard exported as {file_name}"),
            file_name,
            format,
            exported_at: jiff::Timestamp::now(),
            title: "Export Successful".to_string(),
        }
    }
}
