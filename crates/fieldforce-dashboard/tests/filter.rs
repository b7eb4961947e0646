use fieldforce_dashboard::data::job_risk_heatmap;
use fieldforce_dashboard::error::DashboardError;
use fieldforce_dashboard::filter::{
    ActiveFilter, Branch, DateRange, FilterKind, FilterState, Filterable, ServiceType,
};
use jiff::civil::{Date, date};

/// A job with all four filterable dimensions.
struct Job {
    branch: Branch,
    technician: &'static str,
    service: ServiceType,
    scheduled: Date,
}

impl Filterable for Job {
    fn branch(&self) -> Option<Branch> {
        Some(self.branch)
    }

    fn technician(&self) -> Option<&str> {
        Some(self.technician)
    }

    fn service(&self) -> Option<ServiceType> {
        Some(self.service)
    }

    fn date(&self) -> Option<Date> {
        Some(self.scheduled)
    }
}

fn jobs() -> Vec<Job> {
    vec![
        Job {
            branch: Branch::Downtown,
            technician: "Mike Johnson",
            service: ServiceType::Residential,
            scheduled: date(2025, 3, 3),
        },
        Job {
            branch: Branch::Westside,
            technician: "Sarah Chen",
            service: ServiceType::Termite,
            scheduled: date(2025, 3, 10),
        },
        Job {
            branch: Branch::Downtown,
            technician: "Sarah Chen",
            service: ServiceType::Commercial,
            scheduled: date(2025, 3, 17),
        },
        Job {
            branch: Branch::Northtown,
            technician: "David Miller",
            service: ServiceType::Rodent,
            scheduled: date(2025, 4, 1),
        },
    ]
}

#[test]
fn empty_filter_matches_everything() {
    let filter = FilterState::new();
    let jobs = jobs();

    assert!(filter.is_empty());
    assert!(filter.active_filters().is_empty());
    assert_eq!(filter.apply(&jobs).len(), jobs.len());
}

#[test]
fn all_set_fields_must_match() {
    let mut filter = FilterState::new();
    filter.select_branch("downtown").unwrap();
    filter.select_technician("Sarah Chen");
    let jobs = jobs();

    let matched = filter.apply(&jobs);
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].service, ServiceType::Commercial);

    filter.select_service("residential").unwrap();
    assert!(filter.apply(&jobs).is_empty());
}

#[test]
fn all_select_value_clears_field() {
    let mut filter = FilterState::new();
    filter.select_branch("westside").unwrap();
    assert_eq!(filter.branch, Some(Branch::Westside));

    filter.select_branch("all").unwrap();
    filter.select_technician("");
    filter.select_service("all").unwrap();
    assert!(filter.is_empty());
}

#[test]
fn unknown_select_values_are_rejected() {
    let mut filter = FilterState::new();

    let err = filter.select_branch("uptown").unwrap_err();
    assert!(matches!(err, DashboardError::UnknownBranch(b) if b == "uptown"));

    let err = filter.select_service("bees").unwrap_err();
    assert!(matches!(err, DashboardError::UnknownServiceType(_)));
    assert!(filter.is_empty());
}

#[test]
fn technician_matches_first_name_key_or_full_name() {
    let jobs = jobs();
    let mut filter = FilterState::new();

    filter.select_technician("sarah");
    assert_eq!(filter.apply(&jobs).len(), 2);

    filter.select_technician("SARAH CHEN");
    assert_eq!(filter.apply(&jobs).len(), 2);

    filter.select_technician("Chen");
    assert!(filter.apply(&jobs).is_empty());
}

#[test]
fn date_range_is_inclusive() {
    let jobs = jobs();
    let mut filter = FilterState::new();
    filter
        .select_dates(date(2025, 3, 3), Some(date(2025, 3, 17)))
        .unwrap();

    let matched: Vec<_> = filter.apply(&jobs).iter().map(|j| j.scheduled).collect();
    assert_eq!(
        matched,
        [date(2025, 3, 3), date(2025, 3, 10), date(2025, 3, 17)]
    );
}

#[test]
fn open_ended_range_matches_on_or_after_start() {
    let jobs = jobs();
    let mut filter = FilterState::new();
    filter.select_dates(date(2025, 3, 17), None).unwrap();

    assert_eq!(filter.apply(&jobs).len(), 2);
}

#[test]
fn reversed_range_is_rejected() {
    let err = DateRange::new(date(2025, 3, 17), Some(date(2025, 3, 3))).unwrap_err();
    assert!(matches!(err, DashboardError::InvalidDateRange { .. }));

    let mut filter = FilterState::new();
    assert!(
        filter
            .select_dates(date(2025, 3, 17), Some(date(2025, 3, 3)))
            .is_err()
    );
    assert!(filter.date_range.is_none());
}

#[test]
fn active_filters_in_display_order() {
    let mut filter = FilterState::new();
    filter.select_dates(date(2025, 3, 3), None).unwrap();
    filter.select_service("termite").unwrap();
    filter.select_technician("mike");
    filter.select_branch("northtown").unwrap();

    assert_eq!(
        filter.active_filters(),
        vec![
            ActiveFilter {
                kind: FilterKind::Branch,
                label: "northtown".to_string(),
            },
            ActiveFilter {
                kind: FilterKind::Technician,
                label: "mike".to_string(),
            },
            ActiveFilter {
                kind: FilterKind::Service,
                label: "termite".to_string(),
            },
            ActiveFilter {
                kind: FilterKind::Date,
                label: "Mar 03 - ...".to_string(),
            },
        ]
    );
}

#[test]
fn date_label_shows_both_ends() {
    let range = DateRange::new(date(2025, 3, 3), Some(date(2025, 4, 1))).unwrap();
    assert_eq!(range.label(), "Mar 03 - Apr 01");
}

#[test]
fn clearing_one_filter_keeps_the_rest() {
    let mut filter = FilterState::new();
    filter.select_branch("downtown").unwrap();
    filter.select_technician("mike");

    filter.clear("branch".parse().unwrap());
    assert_eq!(filter.branch, None);
    assert_eq!(filter.technician.as_deref(), Some("mike"));

    filter.clear_all();
    assert!(filter.is_empty());
}

#[test]
fn unknown_filter_kind_is_rejected() {
    let err = "region".parse::<FilterKind>().unwrap_err();
    assert!(matches!(err, DashboardError::UnknownFilter(k) if k == "region"));
}

#[test]
fn missing_dimensions_do_not_exclude_heatmap_cells() {
    let cells = job_risk_heatmap();
    let mut filter = FilterState::new();
    filter.select_service("rodent").unwrap();
    filter.select_dates(date(2030, 1, 1), None).unwrap();

    assert_eq!(filter.apply(&cells).len(), cells.len());

    filter.select_branch("Eastside").unwrap();
    let technicians: Vec<_> = filter.apply(&cells).iter().map(|c| c.technician).collect();
    assert_eq!(technicians, ["David Miller", "Lisa Rodriguez"]);
}
