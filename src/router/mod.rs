//! The view router: which screen is shown to which role.
//!
//! The whole navigation model is one enum, so invalid combinations —
//! a results screen without a report, a profile without a role, a
//! dashboard for a student — cannot be constructed. Transitions consume
//! the current view and return the next one; a transition that does not
//! apply to the current state returns it unchanged.

use crate::dashboard::DashboardState;
use crate::login::LoginForm;
use crate::mock;
use crate::report::AnalysisReport;
use crate::session::{MentorProfile, StudentProfile, UserProfile};
use crate::upload::UploadState;

/// Screens available to a logged-in student.
#[derive(Debug)]
pub enum StudentScreen {
    Upload(UploadState),
    Results(AnalysisReport),
}

/// Screens available to a logged-in mentor.
///
/// The results variant carries the dashboard so `back` restores the
/// previous selection.
#[derive(Debug)]
pub enum MentorScreen {
    Dashboard(DashboardState),
    Results {
        dashboard: DashboardState,
        report: AnalysisReport,
    },
}

/// Root view state. Session identity and per-role screen are one value,
/// owned by the app and mutated only through the transitions below.
#[derive(Debug)]
pub enum View {
    Login(LoginForm),
    Student {
        profile: StudentProfile,
        screen: StudentScreen,
    },
    Mentor {
        profile: MentorProfile,
        screen: MentorScreen,
    },
}

impl View {
    pub fn new() -> Self {
        View::Login(LoginForm::new())
    }

    /// `Login --login(profile)--> Student/Upload | Mentor/Dashboard`.
    pub fn login(self, profile: UserProfile) -> View {
        match self {
            View::Login(_) => match profile {
                UserProfile::Student(profile) => View::Student {
                    profile,
                    screen: StudentScreen::Upload(UploadState::new()),
                },
                UserProfile::Mentor(profile) => View::Mentor {
                    profile,
                    screen: MentorScreen::Dashboard(DashboardState::new(mock::submissions())),
                },
            },
            other => other,
        }
    }

    /// Any state returns to a fresh login form. The replaced state —
    /// including any held report and in-flight simulated operation — is
    /// dropped with it.
    pub fn logout(self) -> View {
        View::Login(LoginForm::new())
    }

    /// `Student/Upload --file_analyzed(report)--> Student/Results`.
    pub fn file_analyzed(self, report: AnalysisReport) -> View {
        match self {
            View::Student {
                profile,
                screen: StudentScreen::Upload(_),
            } => View::Student {
                profile,
                screen: StudentScreen::Results(report),
            },
            other => other,
        }
    }

    /// `Mentor/Dashboard --view_analysis(report)--> Mentor/Results`.
    pub fn view_analysis(self, report: AnalysisReport) -> View {
        match self {
            View::Mentor {
                profile,
                screen: MentorScreen::Dashboard(dashboard),
            } => View::Mentor {
                profile,
                screen: MentorScreen::Results { dashboard, report },
            },
            other => other,
        }
    }

    /// Leave a results screen, discarding the report. Students get a
    /// fresh upload screen; mentors return to their dashboard as it was.
    pub fn back(self) -> View {
        match self {
            View::Student {
                profile,
                screen: StudentScreen::Results(_),
            } => View::Student {
                profile,
                screen: StudentScreen::Upload(UploadState::new()),
            },
            View::Mentor {
                profile,
                screen: MentorScreen::Results { dashboard, .. },
            } => View::Mentor {
                profile,
                screen: MentorScreen::Dashboard(dashboard),
            },
            other => other,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        !matches!(self, View::Login(_))
    }
}

impl Default for View {
    fn default() -> Self {
        View::new()
    }
}
