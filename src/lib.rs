pub mod cli;
pub mod dashboard;
pub mod export;
pub mod login;
pub mod mock;
pub mod report;
pub mod router;
pub mod session;
pub mod tui;
pub mod upload;

use thiserror::Error;

/// Errors surfaced by the external collaborators (authentication,
/// document analysis, the submission store) and by the report export.
///
/// The bundled mock services never fail, but every screen handles these
/// outcomes: a failure is shown inline next to the triggering control and
/// the action is re-enabled, never tearing down the current screen.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("ошибка авторизации: {0}")]
    AuthenticationFailed(String),
    #[error("ошибка анализа: {0}")]
    AnalysisFailed(String),
    #[error("отчет для работы {0} не найден")]
    ReportNotFound(u32),
    #[error("не удалось сохранить отчет: {0}")]
    Export(#[from] std::io::Error),
}
