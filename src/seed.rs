//! Built-in starter dashboard.
//!
//! Used when no `[[dashboard.categories]]` are configured.

use crate::{Category, DashboardData, Widget};

/// Returns the starter configuration the store is seeded with by default.
///
/// Four categories: `cspm`, `cwpp`, `registry` and `ticket`.
pub fn default_dashboard() -> DashboardData {
    DashboardData::new(vec![
        Category::new(
            "cspm",
            "CSPM Executive Dashboard",
            vec![
                Widget::new("cloud-accounts", "Cloud Accounts", "<CloudAccountsChart />"),
                Widget::new(
                    "risk-assessment",
                    "Cloud Account Risk Assessment",
                    "<RiskAssessmentChart />",
                ),
            ],
        ),
        Category::new(
            "cwpp",
            "CWPP Dashboard",
            vec![Widget::new(
                "workload-alerts",
                "Workload Alerts",
                "<WorkloadAlerts />",
            )],
        ),
        Category::new(
            "registry",
            "Registry Scan",
            vec![Widget::new("registry-scan", "Registry Scan", "<RegistryScan />")],
        ),
        Category::new(
            "ticket",
            "Ticket Dashboard",
            vec![Widget::new(
                "ticket-overview",
                "Ticket Overview",
                "<TicketOverview />",
            )],
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_dashboard_has_four_categories_in_order() {
        let ids: Vec<_> = default_dashboard()
            .categories
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec!["cspm", "cwpp", "registry", "ticket"]);
    }

    #[test]
    fn default_dashboard_widgets() {
        let data = default_dashboard();
        let names = |id: &str| -> Vec<String> {
            data.category(id)
                .expect("category exists")
                .widgets
                .iter()
                .map(|w| w.name.clone())
                .collect()
        };
        assert_eq!(
            names("cspm"),
            vec!["Cloud Accounts", "Cloud Account Risk Assessment"]
        );
        assert_eq!(names("cwpp"), vec!["Workload Alerts"]);
        assert_eq!(names("registry"), vec!["Registry Scan"]);
        assert_eq!(names("ticket"), vec!["Ticket Overview"]);
    }

    #[test]
    fn default_dashboard_is_valid() {
        assert!(default_dashboard().validate().is_ok());
    }
}
