//! Upload screen state: at most one selected file and the simulated
//! analysis delay. File contents are never read — the selection is an
//! opaque name plus size handed to the analysis service.

use std::path::Path;
use std::time::{Duration, Instant};

use crate::ServiceError;
use crate::mock;
use crate::report::AnalysisReport;

/// Simulated processing time of the document-analysis service.
pub const ANALYSIS_DELAY: Duration = Duration::from_millis(3000);

pub const SUPPORTED_FORMATS: &str = "DOCX, PDF, TXT";

/// Opaque handle to the file the user picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size_bytes: u64,
}

#[derive(Debug)]
struct PendingAnalysis {
    completes_at: Instant,
}

/// State of the upload screen.
#[derive(Debug, Default)]
pub struct UploadState {
    pub path_input: String,
    pub selected: Option<SelectedFile>,
    pub error: Option<String>,
    analyzing: Option<PendingAnalysis>,
}

impl UploadState {
    pub fn new() -> Self {
        UploadState::default()
    }

    pub fn push_char(&mut self, c: char) {
        self.path_input.push(c);
    }

    pub fn backspace(&mut self) {
        self.path_input.pop();
    }

    /// Turn the typed path into the selection, replacing any previous
    /// one. The size is taken from file metadata when the path exists;
    /// the contents are never read. Returns `false` for an empty input.
    pub fn select_from_input(&mut self) -> bool {
        let typed = self.path_input.trim();
        if typed.is_empty() {
            return false;
        }
        let path = Path::new(typed);
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| typed.to_string());
        let size_bytes = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);
        self.select_file(SelectedFile { name, size_bytes });
        self.path_input.clear();
        true
    }

    /// Replace the selection; the previous one is discarded.
    pub fn select_file(&mut self, file: SelectedFile) {
        self.error = None;
        self.selected = Some(file);
    }

    /// Clear the selection. Also aborts an in-flight analysis, so a
    /// cancelled file never produces a report.
    pub fn cancel_selection(&mut self) {
        self.selected = None;
        self.analyzing = None;
    }

    pub fn is_analyzing(&self) -> bool {
        self.analyzing.is_some()
    }

    /// Start the simulated analysis. A no-op without a selection or
    /// while a previous run is still in flight.
    pub fn start_analysis(&mut self, now: Instant) -> bool {
        if self.selected.is_none() || self.analyzing.is_some() {
            return false;
        }
        self.error = None;
        self.analyzing = Some(PendingAnalysis {
            completes_at: now + ANALYSIS_DELAY,
        });
        true
    }

    /// Resolve the pending analysis once its deadline has passed.
    ///
    /// Yields at most one outcome per started analysis and clears the
    /// analyzing flag.
    pub fn poll(&mut self, now: Instant) -> Option<Result<AnalysisReport, ServiceError>> {
        match (&self.analyzing, &self.selected) {
            (Some(p), Some(file)) if now >= p.completes_at => {
                let outcome = mock::analyze(file);
                self.analyzing = None;
                Some(outcome)
            }
            _ => None,
        }
    }

    /// Record an analysis failure inline; the selection is kept so the
    /// user can retry.
    pub fn set_error(&mut self, message: String) {
        self.analyzing = None;
        self.error = Some(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> SelectedFile {
        SelectedFile {
            name: name.to_string(),
            size_bytes: 2048,
        }
    }

    #[test]
    fn second_selection_replaces_first() {
        let mut upload = UploadState::new();
        upload.select_file(file("first.docx"));
        upload.select_file(file("second.pdf"));

        let selected = upload.selected.as_ref().unwrap();
        assert_eq!(selected.name, "second.pdf");
    }

    #[test]
    fn select_from_input_uses_file_name_component() {
        let mut upload = UploadState::new();
        upload.path_input = "/home/anna/работы/coursework.docx".to_string();
        assert!(upload.select_from_input());

        assert_eq!(upload.selected.as_ref().unwrap().name, "coursework.docx");
        assert!(upload.path_input.is_empty());
    }

    #[test]
    fn select_from_empty_input_is_noop() {
        let mut upload = UploadState::new();
        upload.path_input = "   ".to_string();
        assert!(!upload.select_from_input());
        assert!(upload.selected.is_none());
    }

    #[test]
    fn analyze_without_file_is_noop() {
        let mut upload = UploadState::new();
        let now = Instant::now();
        assert!(!upload.start_analysis(now));
        assert!(upload.poll(now + ANALYSIS_DELAY).is_none());
    }

    #[test]
    fn analyze_is_not_reentrant() {
        let mut upload = UploadState::new();
        upload.select_file(file("essay.txt"));
        let now = Instant::now();

        assert!(upload.start_analysis(now));
        assert!(!upload.start_analysis(now + Duration::from_millis(500)));
    }

    #[test]
    fn poll_yields_exactly_one_report() {
        let mut upload = UploadState::new();
        upload.select_file(file("essay.txt"));
        let now = Instant::now();
        upload.start_analysis(now);

        assert!(upload.poll(now).is_none());
        assert!(upload.poll(now + Duration::from_millis(2999)).is_none());

        let report = upload.poll(now + ANALYSIS_DELAY).unwrap().unwrap();
        assert_eq!(report.overall.structure, 6);
        assert_eq!(report.grammar.issues.len(), 3);
        assert!(!upload.is_analyzing());

        assert!(upload.poll(now + ANALYSIS_DELAY).is_none());
    }

    #[test]
    fn cancel_aborts_pending_analysis() {
        let mut upload = UploadState::new();
        upload.select_file(file("essay.txt"));
        let now = Instant::now();
        upload.start_analysis(now);

        upload.cancel_selection();
        assert!(upload.selected.is_none());
        assert!(!upload.is_analyzing());
        assert!(upload.poll(now + ANALYSIS_DELAY).is_none());
    }

    #[test]
    fn error_keeps_selection_for_retry() {
        let mut upload = UploadState::new();
        upload.select_file(file("essay.txt"));
        let now = Instant::now();
        upload.start_analysis(now);

        upload.set_error("ошибка анализа".to_string());
        assert!(!upload.is_analyzing());
        assert!(upload.selected.is_some());
        assert!(upload.start_analysis(now + Duration::from_millis(10)));
    }
}
