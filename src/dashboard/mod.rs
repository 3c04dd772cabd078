//! Mentor dashboard state: the submission list, the current selection
//! and the derived counters shown in the stats row.

use chrono::NaiveDateTime;

use crate::report::CriterionScores;

/// Scores attached to a submission once analysis has run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubmissionScores {
    pub overall: f64,
    pub criteria: CriterionScores,
}

/// Submission lifecycle as tracked on the mentor's list.
///
/// Scores exist only for analyzed and reviewed work, so a pending
/// submission with scores cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SubmissionStatus {
    Pending,
    Analyzed(SubmissionScores),
    Reviewed(SubmissionScores),
}

impl SubmissionStatus {
    pub fn scores(&self) -> Option<&SubmissionScores> {
        match self {
            SubmissionStatus::Pending => None,
            SubmissionStatus::Analyzed(s) | SubmissionStatus::Reviewed(s) => Some(s),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, SubmissionStatus::Pending)
    }

    pub fn label(&self) -> &'static str {
        match self {
            SubmissionStatus::Pending => "Ожидает анализа",
            SubmissionStatus::Analyzed(_) => "Проанализировано",
            SubmissionStatus::Reviewed(_) => "Проверено",
        }
    }
}

/// One student's uploaded work as tracked on the mentor's list.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub id: u32,
    pub student_name: String,
    pub student_group: String,
    pub assignment: String,
    pub submitted_at: NaiveDateTime,
    pub file_name: String,
    pub status: SubmissionStatus,
    pub needs_review: bool,
}

/// Counters derived from the submission list on every render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardStats {
    pub total: usize,
    pub pending: usize,
    pub needs_review: usize,
    /// Mean of the overall score across analyzed and reviewed
    /// submissions; absent when none have been scored yet.
    pub average_score: Option<f64>,
}

/// Dashboard state — owns the submission list and the selection.
#[derive(Debug)]
pub struct DashboardState {
    pub submissions: Vec<Submission>,
    pub selected: usize,
}

impl DashboardState {
    pub fn new(submissions: Vec<Submission>) -> Self {
        DashboardState {
            submissions,
            selected: 0,
        }
    }

    /// Move selection down (clamp to end).
    pub fn select_next(&mut self) {
        if !self.submissions.is_empty() && self.selected < self.submissions.len() - 1 {
            self.selected += 1;
        }
    }

    /// Move selection up (clamp to start).
    pub fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn selected_submission(&self) -> Option<&Submission> {
        self.submissions.get(self.selected)
    }

    /// Whether the selected submission has an analysis to show.
    pub fn can_view_selected(&self) -> bool {
        self.selected_submission()
            .map(|s| s.status.scores().is_some())
            .unwrap_or(false)
    }

    pub fn stats(&self) -> DashboardStats {
        let scored: Vec<f64> = self
            .submissions
            .iter()
            .filter_map(|s| s.status.scores().map(|sc| sc.overall))
            .collect();
        let average_score = if scored.is_empty() {
            None
        } else {
            Some(scored.iter().sum::<f64>() / scored.len() as f64)
        };

        DashboardStats {
            total: self.submissions.len(),
            pending: self
                .submissions
                .iter()
                .filter(|s| s.status.is_pending())
                .count(),
            needs_review: self.submissions.iter().filter(|s| s.needs_review).count(),
            average_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;

    #[test]
    fn select_next_empty() {
        let mut dashboard = DashboardState::new(vec![]);
        assert_eq!(dashboard.selected, 0);
        dashboard.select_next();
        assert_eq!(dashboard.selected, 0);
        assert!(dashboard.selected_submission().is_none());
    }

    #[test]
    fn select_next_prev_clamps() {
        let mut dashboard = DashboardState::new(mock::submissions());
        assert_eq!(dashboard.selected, 0);

        dashboard.select_next();
        dashboard.select_next();
        dashboard.select_next();
        assert_eq!(dashboard.selected, 3);

        // Beyond the end stays put
        dashboard.select_next();
        assert_eq!(dashboard.selected, 3);

        dashboard.select_prev();
        dashboard.select_prev();
        dashboard.select_prev();
        assert_eq!(dashboard.selected, 0);

        dashboard.select_prev();
        assert_eq!(dashboard.selected, 0);
    }

    #[test]
    fn stats_counts_demo_data() {
        let dashboard = DashboardState::new(mock::submissions());
        let stats = dashboard.stats();
        assert_eq!(stats.total, 4);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.needs_review, 2);
    }

    #[test]
    fn average_is_computed_over_scored_submissions() {
        let dashboard = DashboardState::new(mock::submissions());
        let avg = dashboard.stats().average_score.unwrap();
        // (7.5 + 8.2 + 6.8) / 3
        assert!((avg - 7.5).abs() < 1e-9);
    }

    #[test]
    fn average_absent_without_scored_submissions() {
        let pending_only: Vec<Submission> = mock::submissions()
            .into_iter()
            .filter(|s| s.status.is_pending())
            .collect();
        let dashboard = DashboardState::new(pending_only);
        assert_eq!(dashboard.stats().average_score, None);
    }

    #[test]
    fn pending_submission_cannot_be_viewed() {
        let mut dashboard = DashboardState::new(mock::submissions());
        assert!(dashboard.can_view_selected()); // id 1, analyzed
        dashboard.select_next();
        assert!(!dashboard.can_view_selected()); // id 2, pending
    }
}
