//! Fixed demo data standing in for the external collaborators: the
//! authentication service, the document-analysis service and the
//! submission store. A real deployment replaces this module with backend
//! calls behind the same signatures; everything here is a literal.

use chrono::{NaiveDate, NaiveDateTime};

use crate::ServiceError;
use crate::dashboard::{Submission, SubmissionScores, SubmissionStatus};
use crate::report::{AnalysisReport, CriterionDetail, CriterionScores, Issue};
use crate::session::{MentorProfile, Role, StudentProfile, UserProfile};
use crate::upload::SelectedFile;

pub const STUDENT_FALLBACK_EMAIL: &str = "anna.petrova@example.com";
pub const MENTOR_FALLBACK_EMAIL: &str = "dmitry.sidorov@example.com";

/// The fallback identity used by demo login and by real login when no
/// email was typed.
pub fn demo_profile(role: Role) -> UserProfile {
    match role {
        Role::Student => UserProfile::Student(StudentProfile {
            id: 1,
            name: "Анна Петрова".to_string(),
            email: STUDENT_FALLBACK_EMAIL.to_string(),
            group: "ИС-21-1".to_string(),
            course: 3,
        }),
        Role::Mentor => UserProfile::Mentor(MentorProfile {
            id: 1,
            name: "Дмитрий Сидоров".to_string(),
            email: MENTOR_FALLBACK_EMAIL.to_string(),
            department: "Кафедра информационных систем".to_string(),
            experience_years: 5,
        }),
    }
}

/// Mock authentication: always succeeds after the login delay has been
/// simulated by the caller. Uses the typed email exactly as entered,
/// falling back to the demo identity only for an empty string.
pub fn authenticate(role: Role, email: &str) -> Result<UserProfile, ServiceError> {
    let mut profile = demo_profile(role);
    if !email.is_empty() {
        match &mut profile {
            UserProfile::Student(p) => p.email = email.to_string(),
            UserProfile::Mentor(p) => p.email = email.to_string(),
        }
    }
    Ok(profile)
}

/// Mock document analysis: ignores the file contents and yields the same
/// fixed report. The caller simulates the processing delay.
pub fn analyze(_file: &SelectedFile) -> Result<AnalysisReport, ServiceError> {
    Ok(upload_report())
}

fn issue(text: &str, recommendation: &str) -> Issue {
    Issue {
        text: text.to_string(),
        recommendation: recommendation.to_string(),
    }
}

const GRAMMAR_IHNY: (&str, &str) = (
    "В данном случае ихний вариант был лучше...",
    "Заменить разговорное \"ихний\" на литературное \"их\".",
);
const GRAMMAR_FUNDAMENTAL: (&str, &str) = (
    "Он подошел к вопросу фундаментально...",
    "Слово \"фундаментально\" здесь неуместно. Рекомендуется использовать \"всесторонне\" или \"основательно\".",
);
const GRAMMAR_BUREAUCRATIC: (&str, &str) = (
    "Данный вопрос требует более детального рассмотрения",
    "Избегайте канцеляризмов. Лучше написать: \"Этот вопрос требует более подробного рассмотрения\".",
);
const STRUCTURE_NO_LINK: (&str, &str) = (
    "Отсутствует логическая связь между вторым и третьим абзацами",
    "Добавьте переходное предложение, которое свяжет основные мысли этих абзацев.",
);
const STRUCTURE_WEAK_CONCLUSION: (&str, &str) = (
    "Заключение не подводит итоги основных аргументов",
    "Перепишите заключение, включив краткую сводку ключевых аргументов из основной части.",
);
const STRUCTURE_GOOD: (&str, &str) = (
    "Хорошая структура работы с четким введением и заключением",
    "Продолжайте придерживаться логичной структуры в будущих работах.",
);
const CONTENT_GOOD: (&str, &str) = (
    "Отличное раскрытие темы с использованием актуальных источников",
    "Продолжайте использовать современные исследования для подкрепления ваших аргументов.",
);
const STYLE_LONG_SENTENCES: (&str, &str) = (
    "Некоторые предложения слишком длинные и сложные для восприятия",
    "Разделите сложные предложения на более короткие для улучшения читаемости.",
);

/// The report produced for a freshly analyzed student upload.
pub fn upload_report() -> AnalysisReport {
    AnalysisReport {
        overall: CriterionScores {
            structure: 6,
            content: 9,
            grammar: 5,
            style: 7,
        },
        grammar: CriterionDetail {
            score: 5,
            issues: vec![
                issue(GRAMMAR_IHNY.0, GRAMMAR_IHNY.1),
                issue(GRAMMAR_FUNDAMENTAL.0, GRAMMAR_FUNDAMENTAL.1),
                issue(GRAMMAR_BUREAUCRATIC.0, GRAMMAR_BUREAUCRATIC.1),
            ],
        },
        structure: CriterionDetail {
            score: 6,
            issues: vec![
                issue(STRUCTURE_NO_LINK.0, STRUCTURE_NO_LINK.1),
                issue(STRUCTURE_WEAK_CONCLUSION.0, STRUCTURE_WEAK_CONCLUSION.1),
            ],
        },
        content: CriterionDetail {
            score: 9,
            issues: vec![issue(CONTENT_GOOD.0, CONTENT_GOOD.1)],
        },
        style: CriterionDetail {
            score: 7,
            issues: vec![issue(STYLE_LONG_SENTENCES.0, STYLE_LONG_SENTENCES.1)],
        },
    }
}

fn ts(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .expect("valid demo timestamp")
}

/// The submission list a real system would query from the store.
pub fn submissions() -> Vec<Submission> {
    vec![
        Submission {
            id: 1,
            student_name: "Анна Петрова".to_string(),
            student_group: "ИС-21-1".to_string(),
            assignment: "Курсовая работа по базам данных".to_string(),
            submitted_at: ts(2024, 1, 15, 10, 30),
            file_name: "database_coursework.docx".to_string(),
            status: SubmissionStatus::Analyzed(SubmissionScores {
                overall: 7.5,
                criteria: CriterionScores {
                    structure: 8,
                    content: 9,
                    grammar: 6,
                    style: 7,
                },
            }),
            needs_review: true,
        },
        Submission {
            id: 2,
            student_name: "Максим Сидоров".to_string(),
            student_group: "ИС-21-2".to_string(),
            assignment: "Реферат по программированию".to_string(),
            submitted_at: ts(2024, 1, 14, 16, 45),
            file_name: "programming_essay.pdf".to_string(),
            status: SubmissionStatus::Pending,
            needs_review: false,
        },
        Submission {
            id: 3,
            student_name: "Елена Кузнецова".to_string(),
            student_group: "ИС-21-1".to_string(),
            assignment: "Лабораторная работа №5".to_string(),
            submitted_at: ts(2024, 1, 13, 9, 15),
            file_name: "lab5_report.docx".to_string(),
            status: SubmissionStatus::Reviewed(SubmissionScores {
                overall: 8.2,
                criteria: CriterionScores {
                    structure: 8,
                    content: 9,
                    grammar: 8,
                    style: 8,
                },
            }),
            needs_review: false,
        },
        Submission {
            id: 4,
            student_name: "Дмитрий Волков".to_string(),
            student_group: "ИС-21-2".to_string(),
            assignment: "Эссе по информационной безопасности".to_string(),
            submitted_at: ts(2024, 1, 12, 14, 20),
            file_name: "security_essay.txt".to_string(),
            status: SubmissionStatus::Analyzed(SubmissionScores {
                overall: 6.8,
                criteria: CriterionScores {
                    structure: 7,
                    content: 8,
                    grammar: 5,
                    style: 7,
                },
            }),
            needs_review: true,
        },
    ]
}

/// Keyed report lookup, the contract a real analysis store would serve.
///
/// Pending or unknown submissions have no report.
pub fn report_for(submission_id: u32) -> Result<AnalysisReport, ServiceError> {
    match submission_id {
        1 => Ok(AnalysisReport {
            overall: CriterionScores {
                structure: 8,
                content: 9,
                grammar: 6,
                style: 7,
            },
            grammar: CriterionDetail {
                score: 6,
                issues: vec![
                    issue(GRAMMAR_IHNY.0, GRAMMAR_IHNY.1),
                    issue(GRAMMAR_FUNDAMENTAL.0, GRAMMAR_FUNDAMENTAL.1),
                ],
            },
            structure: CriterionDetail {
                score: 8,
                issues: vec![issue(STRUCTURE_GOOD.0, STRUCTURE_GOOD.1)],
            },
            content: CriterionDetail {
                score: 9,
                issues: vec![issue(CONTENT_GOOD.0, CONTENT_GOOD.1)],
            },
            style: CriterionDetail {
                score: 7,
                issues: vec![issue(STYLE_LONG_SENTENCES.0, STYLE_LONG_SENTENCES.1)],
            },
        }),
        3 => Ok(AnalysisReport {
            overall: CriterionScores {
                structure: 8,
                content: 9,
                grammar: 8,
                style: 8,
            },
            grammar: CriterionDetail {
                score: 8,
                issues: vec![issue(GRAMMAR_BUREAUCRATIC.0, GRAMMAR_BUREAUCRATIC.1)],
            },
            structure: CriterionDetail {
                score: 8,
                issues: vec![issue(STRUCTURE_GOOD.0, STRUCTURE_GOOD.1)],
            },
            content: CriterionDetail {
                score: 9,
                issues: vec![issue(CONTENT_GOOD.0, CONTENT_GOOD.1)],
            },
            style: CriterionDetail {
                score: 8,
                issues: vec![issue(STYLE_LONG_SENTENCES.0, STYLE_LONG_SENTENCES.1)],
            },
        }),
        4 => Ok(AnalysisReport {
            overall: CriterionScores {
                structure: 7,
                content: 8,
                grammar: 5,
                style: 7,
            },
            grammar: CriterionDetail {
                score: 5,
                issues: vec![
                    issue(GRAMMAR_IHNY.0, GRAMMAR_IHNY.1),
                    issue(GRAMMAR_FUNDAMENTAL.0, GRAMMAR_FUNDAMENTAL.1),
                    issue(GRAMMAR_BUREAUCRATIC.0, GRAMMAR_BUREAUCRATIC.1),
                ],
            },
            structure: CriterionDetail {
                score: 7,
                issues: vec![issue(STRUCTURE_NO_LINK.0, STRUCTURE_NO_LINK.1)],
            },
            content: CriterionDetail {
                score: 8,
                issues: vec![issue(CONTENT_GOOD.0, CONTENT_GOOD.1)],
            },
            style: CriterionDetail {
                score: 7,
                issues: vec![issue(STYLE_LONG_SENTENCES.0, STYLE_LONG_SENTENCES.1)],
            },
        }),
        other => Err(ServiceError::ReportNotFound(other)),
    }
}
