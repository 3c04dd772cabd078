//! Plain-text report export.
//!
//! The layout is carried over byte-for-byte from the original client so
//! previously downloaded reports stay comparable: header, one
//! `- Label: N/10` line per overall score, then one section per
//! criterion listing every issue with its recommendation.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use crate::ServiceError;
use crate::report::{AnalysisReport, Criterion};

/// File name the report is saved under.
pub const EXPORT_FILE_NAME: &str = "mentorflow-analysis-report.txt";

/// Render the full report as the flat text document offered for
/// download.
pub fn report_text(report: &AnalysisReport) -> String {
    let mut out = String::new();

    out.push_str("\nОТЧЕТ АНАЛИЗА РАБОТЫ\n===================\n\nОБЩАЯ ОЦЕНКА:\n");
    let _ = writeln!(out, "- Структура: {}/10", report.overall.structure);
    // The original writer left two trailing spaces on this line; kept
    // for byte compatibility.
    let _ = writeln!(out, "- Содержание: {}/10  ", report.overall.content);
    let _ = writeln!(out, "- Грамотность: {}/10", report.overall.grammar);
    let _ = writeln!(out, "- Стиль: {}/10", report.overall.style);
    out.push_str("\nДЕТАЛЬНАЯ ОБРАТНАЯ СВЯЗЬ:\n");

    for (i, criterion) in Criterion::EXPORT_ORDER.into_iter().enumerate() {
        let detail = report.detail(criterion);
        // Two blank lines between sections, one after the block heading
        if i > 0 {
            out.push('\n');
        }
        let _ = write!(out, "\n{} ({}/10):\n", criterion.export_heading(), detail.score);
        for issue in &detail.issues {
            // Grammar issues are verbatim excerpts and stay quoted.
            if criterion == Criterion::Grammar {
                let _ = write!(out, "\n• \"{}\"\n  Рекомендация: {}\n", issue.text, issue.recommendation);
            } else {
                let _ = write!(out, "\n• {}\n  Рекомендация: {}\n", issue.text, issue.recommendation);
            }
        }
    }

    out.push_str("\n    ");
    out
}

/// Write the report into `dir` under [`EXPORT_FILE_NAME`], returning the
/// full path of the written file.
pub fn write_report(dir: &Path, report: &AnalysisReport) -> Result<PathBuf, ServiceError> {
    let path = dir.join(EXPORT_FILE_NAME);
    fs::write(&path, report_text(report))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;

    // The full document for the fixed upload report, byte for byte.
    const UPLOAD_REPORT_TEXT: &str = concat!(
        "\nОТЧЕТ АНАЛИЗА РАБОТЫ\n",
        "===================\n",
        "\n",
        "ОБЩАЯ ОЦЕНКА:\n",
        "- Структура: 6/10\n",
        "- Содержание: 9/10  \n",
        "- Грамотность: 5/10\n",
        "- Стиль: 7/10\n",
        "\n",
        "ДЕТАЛЬНАЯ ОБРАТНАЯ СВЯЗЬ:\n",
        "\n",
        "ГРАМОТНОСТЬ (5/10):\n",
        "\n",
        "• \"В данном случае ихний вариант был лучше...\"\n",
        "  Рекомендация: Заменить разговорное \"ихний\" на литературное \"их\".\n",
        "\n",
        "• \"Он подошел к вопросу фундаментально...\"\n",
        "  Рекомендация: Слово \"фундаментально\" здесь неуместно. Рекомендуется использовать \"всесторонне\" или \"основательно\".\n",
        "\n",
        "• \"Данный вопрос требует более детального рассмотрения\"\n",
        "  Рекомендация: Избегайте канцеляризмов. Лучше написать: \"Этот вопрос требует более подробного рассмотрения\".\n",
        "\n",
        "\n",
        "СТРУКТУРА (6/10):\n",
        "\n",
        "• Отсутствует логическая связь между вторым и третьим абзацами\n",
        "  Рекомендация: Добавьте переходное предложение, которое свяжет основные мысли этих абзацев.\n",
        "\n",
        "• Заключение не подводит итоги основных аргументов\n",
        "  Рекомендация: Перепишите заключение, включив краткую сводку ключевых аргументов из основной части.\n",
        "\n",
        "\n",
        "СОДЕРЖАНИЕ (9/10):\n",
        "\n",
        "• Отличное раскрытие темы с использованием актуальных источников\n",
        "  Рекомендация: Продолжайте использовать современные исследования для подкрепления ваших аргументов.\n",
        "\n",
        "\n",
        "СТИЛЬ (7/10):\n",
        "\n",
        "• Некоторые предложения слишком длинные и сложные для восприятия\n",
        "  Рекомендация: Разделите сложные предложения на более короткие для улучшения читаемости.\n",
        "\n",
        "    ",
    );

    #[test]
    fn upload_report_text_matches_golden_document() {
        assert_eq!(report_text(&mock::upload_report()), UPLOAD_REPORT_TEXT);
    }

    #[test]
    fn sections_are_separated_by_two_blank_lines() {
        let text = report_text(&mock::upload_report());
        assert!(text.contains("рассмотрения\".\n\n\nСТРУКТУРА (6/10):"));
        assert!(text.contains("части.\n\n\nСОДЕРЖАНИЕ (9/10):"));
        assert!(text.contains("аргументов.\n\n\nСТИЛЬ (7/10):"));
        // The first section keeps a single blank line after the block header
        assert!(text.contains("ДЕТАЛЬНАЯ ОБРАТНАЯ СВЯЗЬ:\n\nГРАМОТНОСТЬ (5/10):"));
    }

    #[test]
    fn header_and_overall_block() {
        let text = report_text(&mock::upload_report());
        assert!(text.starts_with("\nОТЧЕТ АНАЛИЗА РАБОТЫ\n===================\n"));
        assert!(text.contains("ОБЩАЯ ОЦЕНКА:\n- Структура: 6/10\n- Содержание: 9/10  \n- Грамотность: 5/10\n- Стиль: 7/10\n"));
    }

    #[test]
    fn one_overall_line_per_criterion() {
        let text = report_text(&mock::upload_report());
        let score_lines = text
            .lines()
            .filter(|l| l.starts_with("- ") && l.contains("/10"))
            .count();
        assert_eq!(score_lines, 4);
    }

    #[test]
    fn one_recommendation_line_per_issue() {
        let report = mock::upload_report();
        let text = report_text(&report);
        let recommendations = text.matches("  Рекомендация: ").count();
        assert_eq!(recommendations, report.total_issues());
    }

    #[test]
    fn sections_appear_in_fixed_order() {
        let text = report_text(&mock::upload_report());
        let grammar = text.find("ГРАМОТНОСТЬ (5/10):").unwrap();
        let structure = text.find("\nСТРУКТУРА (6/10):").unwrap();
        let content = text.find("\nСОДЕРЖАНИЕ (9/10):").unwrap();
        let style = text.find("\nСТИЛЬ (7/10):").unwrap();
        assert!(grammar < structure && structure < content && content < style);
    }

    #[test]
    fn grammar_excerpts_are_quoted() {
        let text = report_text(&mock::upload_report());
        assert!(text.contains("• \"В данном случае ихний вариант был лучше...\""));
        // Non-grammar issues are unquoted
        assert!(text.contains("• Отсутствует логическая связь между вторым и третьим абзацами"));
    }

    #[test]
    fn document_tail_is_preserved() {
        let text = report_text(&mock::upload_report());
        assert!(text.ends_with("\n\n    "));
    }
}
