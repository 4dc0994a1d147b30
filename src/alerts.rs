//! System alert log. Dismissal is a one-way transition; alerts are never
//! reopened or deleted within a session.

use crate::models::{Alert, AlertCounts, Severity};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertFilter {
    All,
    Active,
    ActionRequired,
}

impl AlertFilter {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "all" => Some(Self::All),
            "active" => Some(Self::Active),
            "action_required" => Some(Self::ActionRequired),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AlertLog {
    alerts: Vec<Alert>,
}

impl AlertLog {
    pub fn new(alerts: Vec<Alert>) -> Self {
        Self { alerts }
    }

    /// Marks the alert dismissed. Dismissing an already-dismissed alert is a
    /// no-op; the flag never goes back. Returns `None` for an unknown id.
    pub fn dismiss(&mut self, id: &str) -> Option<&Alert> {
        let alert = self.alerts.iter_mut().find(|alert| alert.id == id)?;
        alert.dismissed = true;
        Some(alert)
    }

    pub fn filtered(&self, filter: AlertFilter) -> Vec<Alert> {
        self.alerts
            .iter()
            .filter(|alert| match filter {
                AlertFilter::All => true,
                AlertFilter::Active => !alert.dismissed,
                AlertFilter::ActionRequired => alert.action_required && !alert.dismissed,
            })
            .cloned()
            .collect()
    }

    pub fn counts(&self) -> AlertCounts {
        let active: Vec<&Alert> = self.alerts.iter().filter(|alert| !alert.dismissed).collect();
        AlertCounts {
            total: self.alerts.len(),
            active: active.len(),
            critical: active
                .iter()
                .filter(|alert| alert.severity == Severity::Error)
                .count(),
            warnings: active
                .iter()
                .filter(|alert| alert.severity == Severity::Warning)
                .count(),
            action_required: active.iter().filter(|alert| alert.action_required).count(),
        }
    }

    pub fn speech(&self) -> String {
        let counts = self.counts();
        let advice = if counts.critical > 0 {
            "Please address critical alerts immediately."
        } else {
            "No critical issues detected."
        };
        format!(
            "You have {} active alerts, including {} critical alerts. {advice}",
            counts.active, counts.critical
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn seeded() -> AlertLog {
        AlertLog::new(seed::alerts())
    }

    #[test]
    fn active_filter_excludes_dismissed() {
        let log = seeded();
        let active = log.filtered(AlertFilter::Active);
        assert!(active.iter().all(|alert| !alert.dismissed));
        // The seed pump-malfunction alert starts dismissed.
        assert_eq!(active.len(), 4);
    }

    #[test]
    fn action_required_filter_needs_both_flags() {
        let log = seeded();
        let needs_action = log.filtered(AlertFilter::ActionRequired);
        assert!(needs_action
            .iter()
            .all(|alert| alert.action_required && !alert.dismissed));
        let ids: Vec<_> = needs_action.iter().map(|alert| alert.id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);
    }

    #[test]
    fn dismiss_is_monotonic() {
        let mut log = seeded();
        log.dismiss("1").expect("alert 1 exists");
        assert!(!log
            .filtered(AlertFilter::Active)
            .iter()
            .any(|alert| alert.id == "1"));

        // A second dismissal changes nothing and still succeeds.
        let again = log.dismiss("1").expect("alert 1 exists");
        assert!(again.dismissed);
        assert!(!log
            .filtered(AlertFilter::Active)
            .iter()
            .any(|alert| alert.id == "1"));
    }

    #[test]
    fn dismiss_unknown_id_is_rejected() {
        let mut log = seeded();
        assert!(log.dismiss("99").is_none());
    }

    #[test]
    fn critical_count_only_sees_active_errors() {
        let mut log = seeded();
        // The only error-severity seed alert is already dismissed.
        assert_eq!(log.counts().critical, 0);
        assert_eq!(log.speech(), "You have 4 active alerts, including 0 critical alerts. No critical issues detected.");

        log.dismiss("4").expect("alert 4 exists");
        let counts = log.counts();
        assert_eq!(counts.active, 3);
        assert_eq!(counts.total, 5);
    }
}
