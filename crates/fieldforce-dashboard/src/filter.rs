//! Four-field dashboard filter: branch, technician, service type, date range.
//!
//! A field left unset (the "all" option in the UI) matches every record. A
//! record that has no value for a dimension is never excluded by it; the
//! heatmap, for example, carries no service type or date.

use std::fmt;
use std::str::FromStr;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

/// Select value meaning "no constraint".
pub const ALL: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Branch {
    Downtown,
    Westside,
    Northtown,
    Eastside,
    Southside,
}

impl Branch {
    pub const ALL: [Branch; 5] = [
        Branch::Downtown,
        Branch::Westside,
        Branch::Northtown,
        Branch::Eastside,
        Branch::Southside,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Branch::Downtown => "downtown",
            Branch::Westside => "westside",
            Branch::Northtown => "northtown",
            Branch::Eastside => "eastside",
            Branch::Southside => "southside",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Branch::Downtown => "Downtown",
            Branch::Westside => "Westside",
            Branch::Northtown => "Northtown",
            Branch::Eastside => "Eastside",
            Branch::Southside => "Southside",
        }
    }
}

impl FromStr for Branch {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Branch::ALL
            .into_iter()
            .find(|b| b.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DashboardError::UnknownBranch(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    Residential,
    Commercial,
    Termite,
    Rodent,
}

impl ServiceType {
    pub const ALL: [ServiceType; 4] = [
        ServiceType::Residential,
        ServiceType::Commercial,
        ServiceType::Termite,
        ServiceType::Rodent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Residential => "residential",
            ServiceType::Commercial => "commercial",
            ServiceType::Termite => "termite",
            ServiceType::Rodent => "rodent",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ServiceType::Residential => "Residential Pest Control",
            ServiceType::Commercial => "Commercial Services",
            ServiceType::Termite => "Termite Inspection",
            ServiceType::Rodent => "Rodent Control",
        }
    }
}

impl FromStr for ServiceType {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServiceType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DashboardError::UnknownServiceType(s.to_string()))
    }
}

/// Inclusive date range. `to: None` is a range still being picked and
/// matches every date on or after `from`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Date,
    pub to: Option<Date>,
}

impl DateRange {
    pub fn new(from: Date, to: Option<Date>) -> Result<Self, DashboardError> {
        if let Some(to) = to
            && to < from
        {
            return Err(DashboardError::InvalidDateRange { from, to });
        }
        Ok(Self { from, to })
    }

    pub fn contains(&self, date: Date) -> bool {
        date >= self.from && self.to.is_none_or(|to| date <= to)
    }

    /// Short chip label, e.g. `Mar 03 - Mar 17` or `Mar 03 - ...`.
    pub fn label(&self) -> String {
        let from = self.from.strftime("%b %d");
        match self.to {
            Some(to) => format!("{from} - {}", to.strftime("%b %d")),
            None => format!("{from} - ..."),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKind {
    Branch,
    Technician,
    Service,
    Date,
}

impl FilterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKind::Branch => "branch",
            FilterKind::Technician => "technician",
            FilterKind::Service => "service",
            FilterKind::Date => "date",
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterKind {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "branch" => Ok(FilterKind::Branch),
            "technician" => Ok(FilterKind::Technician),
            "service" => Ok(FilterKind::Service),
            "date" => Ok(FilterKind::Date),
            other => Err(DashboardError::UnknownFilter(other.to_string())),
        }
    }
}

/// A removable chip shown under the filter controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveFilter {
    pub kind: FilterKind,
    pub label: String,
}

/// A record the filter can be applied to. Each accessor returns `None` when
/// the record has no such dimension.
pub trait Filterable {
    fn branch(&self) -> Option<Branch> {
        None
    }

    fn technician(&self) -> Option<&str> {
        None
    }

    fn service(&self) -> Option<ServiceType> {
        None
    }

    fn date(&self) -> Option<Date> {
        None
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub branch: Option<Branch>,
    pub technician: Option<String>,
    pub service: Option<ServiceType>,
    pub date_range: Option<DateRange>,
}

fn is_unset(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value.eq_ignore_ascii_case(ALL)
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set from a select value; `"all"` or empty clears.
    pub fn select_branch(&mut self, value: &str) -> Result<(), DashboardError> {
        self.branch = if is_unset(value) {
            None
        } else {
            Some(value.parse()?)
        };
        Ok(())
    }

    pub fn select_technician(&mut self, value: &str) {
        self.technician = if is_unset(value) {
            None
        } else {
            Some(value.trim().to_string())
        };
    }

    pub fn select_service(&mut self, value: &str) -> Result<(), DashboardError> {
        self.service = if is_unset(value) {
            None
        } else {
            Some(value.parse()?)
        };
        Ok(())
    }

    pub fn select_dates(&mut self, from: Date, to: Option<Date>) -> Result<(), DashboardError> {
        self.date_range = Some(DateRange::new(from, to)?);
        Ok(())
    }

    /// Chips in branch, technician, service, date order.
    pub fn active_filters(&self) -> Vec<ActiveFilter> {
        let mut active = Vec::new();
        if let Some(branch) = self.branch {
            active.push(ActiveFilter {
                kind: FilterKind::Branch,
                label: branch.as_str().to_string(),
            });
        }
        if let Some(technician) = &self.technician {
            active.push(ActiveFilter {
                kind: FilterKind::Technician,
                label: technician.clone(),
            });
        }
        if let Some(service) = self.service {
            active.push(ActiveFilter {
                kind: FilterKind::Service,
                label: service.as_str().to_string(),
            });
        }
        if let Some(range) = &self.date_range {
            active.push(ActiveFilter {
                kind: FilterKind::Date,
                label: range.label(),
            });
        }
        active
    }

    pub fn clear(&mut self, kind: FilterKind) {
        match kind {
            FilterKind::Branch => self.branch = None,
            FilterKind::Technician => self.technician = None,
            FilterKind::Service => self.service = None,
            FilterKind::Date => self.date_range = None,
        }
    }

    pub fn clear_all(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.branch.is_none()
            && self.technician.is_none()
            && self.service.is_none()
            && self.date_range.is_none()
    }

    pub fn matches<T: Filterable + ?Sized>(&self, record: &T) -> bool {
        if let (Some(want), Some(have)) = (self.branch, record.branch())
            && want != have
        {
            return false;
        }
        if let (Some(want), Some(have)) = (&self.technician, record.technician())
            && !technician_matches(want, have)
        {
            return false;
        }
        if let (Some(want), Some(have)) = (self.service, record.service())
            && want != have
        {
            return false;
        }
        if let (Some(range), Some(date)) = (&self.date_range, record.date())
            && !range.contains(date)
        {
            return false;
        }
        true
    }

    pub fn apply<'a, T: Filterable>(&self, records: &'a [T]) -> Vec<&'a T> {
        records.iter().filter(|r| self.matches(*r)).collect()
    }
}

/// The sidebar selects technicians by first-name key ("mike") while the
/// heatmap selects by full name; both are accepted, case-insensitively.
fn technician_matches(want: &str, name: &str) -> bool {
    name.eq_ignore_ascii_case(want)
        || name
            .split_whitespace()
            .next()
            .is_some_and(|first| first.eq_ignore_ascii_case(want))
}
