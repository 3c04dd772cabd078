//! The analysis report produced for one submitted work: four fixed
//! evaluation criteria, each with a 0–10 score and a list of issues with
//! recommendations. Reports are immutable once created; screens only
//! read them.

/// One of the four fixed evaluation axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    Structure,
    Content,
    Grammar,
    Style,
}

impl Criterion {
    /// Display order used by the score summary and the dashboard.
    pub const ALL: [Criterion; 4] = [
        Criterion::Structure,
        Criterion::Content,
        Criterion::Grammar,
        Criterion::Style,
    ];

    /// Section order of the exported plain-text report.
    pub const EXPORT_ORDER: [Criterion; 4] = [
        Criterion::Grammar,
        Criterion::Structure,
        Criterion::Content,
        Criterion::Style,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Criterion::Structure => "Структура",
            Criterion::Content => "Содержание",
            Criterion::Grammar => "Грамотность",
            Criterion::Style => "Стиль",
        }
    }

    /// Section heading in the exported report.
    pub fn export_heading(&self) -> &'static str {
        match self {
            Criterion::Structure => "СТРУКТУРА",
            Criterion::Content => "СОДЕРЖАНИЕ",
            Criterion::Grammar => "ГРАМОТНОСТЬ",
            Criterion::Style => "СТИЛЬ",
        }
    }
}

/// One flagged excerpt or observation with its recommendation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub text: String,
    pub recommendation: String,
}

/// Per-criterion feedback: the score plus every issue found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CriterionDetail {
    pub score: u8,
    pub issues: Vec<Issue>,
}

/// The four overall scores, each an integer 0–10.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CriterionScores {
    pub structure: u8,
    pub content: u8,
    pub grammar: u8,
    pub style: u8,
}

impl CriterionScores {
    pub fn get(&self, criterion: Criterion) -> u8 {
        match criterion {
            Criterion::Structure => self.structure,
            Criterion::Content => self.content,
            Criterion::Grammar => self.grammar,
            Criterion::Style => self.style,
        }
    }
}

/// The structured scoring and feedback record for one submitted work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisReport {
    pub overall: CriterionScores,
    pub structure: CriterionDetail,
    pub content: CriterionDetail,
    pub grammar: CriterionDetail,
    pub style: CriterionDetail,
}

impl AnalysisReport {
    pub fn detail(&self, criterion: Criterion) -> &CriterionDetail {
        match criterion {
            Criterion::Structure => &self.structure,
            Criterion::Content => &self.content,
            Criterion::Grammar => &self.grammar,
            Criterion::Style => &self.style,
        }
    }

    /// Total number of issues across all criteria.
    pub fn total_issues(&self) -> usize {
        Criterion::ALL
            .iter()
            .map(|c| self.detail(*c).issues.len())
            .sum()
    }

    /// Whether each per-criterion detail score matches the overall score
    /// for that criterion. Holds for every report the mock services emit.
    pub fn is_consistent(&self) -> bool {
        Criterion::ALL
            .iter()
            .all(|c| self.detail(*c).score == self.overall.get(*c))
    }
}

/// Qualitative tier derived from a 0–10 score, used for badge coloring
/// on the report screen and the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    Negative,
    Neutral,
    Positive,
}

impl ScoreTier {
    /// Fixed thresholds: >= 8 positive, >= 6 neutral, else negative.
    pub fn of(score: u8) -> ScoreTier {
        if score >= 8 {
            ScoreTier::Positive
        } else if score >= 6 {
            ScoreTier::Neutral
        } else {
            ScoreTier::Negative
        }
    }
}
