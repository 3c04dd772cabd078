//! Login screen state: two credential fields (no validation beyond
//! presence), a role tab, and the simulated authentication delay.

use std::time::{Duration, Instant};

use crate::ServiceError;
use crate::mock;
use crate::session::{Role, UserProfile};

/// Simulated network latency for a real (non-demo) login.
pub const LOGIN_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
}

#[derive(Debug)]
struct PendingLogin {
    role: Role,
    completes_at: Instant,
}

/// Form state for the login screen.
///
/// While a login is in flight the submit action is a no-op; the pending
/// attempt is dropped with the form, so navigating away cancels it.
#[derive(Debug)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub focus: LoginField,
    pub show_password: bool,
    pub role_tab: Role,
    pub error: Option<String>,
    pending: Option<PendingLogin>,
}

impl LoginForm {
    pub fn new() -> Self {
        LoginForm {
            email: String::new(),
            password: String::new(),
            focus: LoginField::Email,
            show_password: false,
            role_tab: Role::Student,
            error: None,
            pending: None,
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::Email,
        };
    }

    pub fn set_role(&mut self, role: Role) {
        self.role_tab = role;
    }

    pub fn push_char(&mut self, c: char) {
        match self.focus {
            LoginField::Email => self.email.push(c),
            LoginField::Password => self.password.push(c),
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            LoginField::Email => {
                self.email.pop();
            }
            LoginField::Password => {
                self.password.pop();
            }
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Start a real login for the active role tab. Returns `false` while
    /// a previous attempt is still in flight.
    pub fn submit(&mut self, now: Instant) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.error = None;
        self.pending = Some(PendingLogin {
            role: self.role_tab,
            completes_at: now + LOGIN_DELAY,
        });
        true
    }

    /// Demo login: the fallback identity for the active role tab,
    /// immediately and regardless of typed input.
    pub fn demo(&self) -> UserProfile {
        mock::demo_profile(self.role_tab)
    }

    /// Resolve the pending login once its deadline has passed.
    ///
    /// Yields at most one outcome per submit.
    pub fn poll(&mut self, now: Instant) -> Option<Result<UserProfile, ServiceError>> {
        match &self.pending {
            Some(p) if now >= p.completes_at => {
                let role = p.role;
                self.pending = None;
                Some(mock::authenticate(role, &self.email))
            }
            _ => None,
        }
    }

    /// Record an authentication failure inline. Typed credentials are
    /// kept and the submit action is re-enabled.
    pub fn set_error(&mut self, message: String) {
        self.pending = None;
        self.error = Some(message);
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        LoginForm::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_then_poll_after_delay_yields_profile() {
        let mut form = LoginForm::new();
        form.email = "a@b.com".to_string();
        let now = Instant::now();

        assert!(form.submit(now));
        assert!(form.is_pending());
        assert!(form.poll(now).is_none());

        let profile = form.poll(now + LOGIN_DELAY).unwrap().unwrap();
        assert_eq!(profile.email(), "a@b.com");
        assert_eq!(profile.role(), Role::Student);
        assert!(!form.is_pending());

        // Exactly one completion per submit
        assert!(form.poll(now + LOGIN_DELAY).is_none());
    }

    #[test]
    fn empty_email_falls_back_to_demo_identity() {
        let mut form = LoginForm::new();
        form.set_role(Role::Mentor);
        let now = Instant::now();
        form.submit(now);

        let profile = form.poll(now + LOGIN_DELAY).unwrap().unwrap();
        assert_eq!(profile.email(), mock::MENTOR_FALLBACK_EMAIL);
    }

    #[test]
    fn submit_is_noop_while_pending() {
        let mut form = LoginForm::new();
        let now = Instant::now();
        assert!(form.submit(now));
        assert!(!form.submit(now + Duration::from_millis(100)));
    }

    #[test]
    fn demo_ignores_typed_input() {
        let mut form = LoginForm::new();
        form.email = "typed@example.com".to_string();
        form.password = "secret".to_string();

        let profile = form.demo();
        assert_eq!(profile.email(), mock::STUDENT_FALLBACK_EMAIL);
    }

    #[test]
    fn role_is_captured_at_submit() {
        let mut form = LoginForm::new();
        let now = Instant::now();
        form.submit(now);
        // Switching tabs mid-flight does not change the attempt
        form.set_role(Role::Mentor);

        let profile = form.poll(now + LOGIN_DELAY).unwrap().unwrap();
        assert_eq!(profile.role(), Role::Student);
    }

    #[test]
    fn error_keeps_credentials_and_reenables_submit() {
        let mut form = LoginForm::new();
        form.email = "a@b.com".to_string();
        form.password = "pw".to_string();
        let now = Instant::now();
        form.submit(now);

        form.set_error("ошибка авторизации".to_string());
        assert!(!form.is_pending());
        assert_eq!(form.email, "a@b.com");
        assert_eq!(form.password, "pw");
        assert!(form.submit(now + Duration::from_millis(10)));
        assert!(form.error.is_none());
    }

    #[test]
    fn field_editing_follows_focus() {
        let mut form = LoginForm::new();
        form.push_char('a');
        form.toggle_focus();
        form.push_char('p');
        form.push_char('w');
        form.backspace();

        assert_eq!(form.email, "a");
        assert_eq!(form.password, "p");
    }
}
