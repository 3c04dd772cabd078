use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Tabs, Wrap},
};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::dashboard::DashboardState;
use crate::export;
use crate::login::{LoginField, LoginForm};
use crate::mock;
use crate::report::{AnalysisReport, Criterion, ScoreTier};
use crate::router::{MentorScreen, StudentScreen, View};
use crate::session::{MentorProfile, Role, StudentProfile, UserProfile};
use crate::upload::{SUPPORTED_FORMATS, UploadState};

/// Which screen the current view resolves to, for input dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScreenKind {
    Login,
    Upload,
    Results,
    Dashboard,
}

/// Application state for the TUI.
///
/// Owns the view router, the expiring status message and the export
/// target directory. All screen state lives inside the view.
pub struct App {
    view: View,
    should_quit: bool,
    scroll_offset: u16,
    status_message: Option<(String, Instant)>,
    export_dir: PathBuf,
}

impl App {
    /// Create an App starting at the login screen.
    pub fn new(export_dir: PathBuf) -> Self {
        Self::with_view(View::new(), export_dir)
    }

    /// Create an App already logged in (the `--demo` shortcut).
    pub fn logged_in(profile: UserProfile, export_dir: PathBuf) -> Self {
        Self::with_view(View::new().login(profile), export_dir)
    }

    fn with_view(view: View, export_dir: PathBuf) -> Self {
        App {
            view,
            should_quit: false,
            scroll_offset: 0,
            status_message: None,
            export_dir,
        }
    }

    fn screen_kind(&self) -> ScreenKind {
        match &self.view {
            View::Login(_) => ScreenKind::Login,
            View::Student {
                screen: StudentScreen::Upload(_),
                ..
            } => ScreenKind::Upload,
            View::Student {
                screen: StudentScreen::Results(_),
                ..
            } => ScreenKind::Results,
            View::Mentor {
                screen: MentorScreen::Dashboard(_),
                ..
            } => ScreenKind::Dashboard,
            View::Mentor {
                screen: MentorScreen::Results { .. },
                ..
            } => ScreenKind::Results,
        }
    }

    /// Handle keyboard input, dispatching to the current screen.
    fn handle_input(&mut self, key: event::KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('q') {
                self.should_quit = true;
            }
            return;
        }

        match self.screen_kind() {
            ScreenKind::Login => self.handle_login_input(key),
            ScreenKind::Upload => self.handle_upload_input(key),
            ScreenKind::Results => self.handle_results_input(key),
            ScreenKind::Dashboard => self.handle_dashboard_input(key),
        }
    }

    fn handle_login_input(&mut self, key: event::KeyEvent) {
        if key.code == KeyCode::Esc {
            self.should_quit = true;
            return;
        }
        if key.code == KeyCode::F(2) {
            // Demo login bypasses the simulated delay
            let profile = match &self.view {
                View::Login(form) => form.demo(),
                _ => return,
            };
            self.view = std::mem::take(&mut self.view).login(profile);
            return;
        }

        let View::Login(form) = &mut self.view else {
            return;
        };
        match key.code {
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => form.toggle_focus(),
            KeyCode::Left => form.set_role(Role::Student),
            KeyCode::Right => form.set_role(Role::Mentor),
            KeyCode::F(3) => form.show_password = !form.show_password,
            KeyCode::Enter => {
                form.submit(Instant::now());
            }
            KeyCode::Backspace => form.backspace(),
            KeyCode::Char(c) => form.push_char(c),
            _ => {}
        }
    }

    fn handle_upload_input(&mut self, key: event::KeyEvent) {
        if key.code == KeyCode::Esc {
            self.logout();
            return;
        }

        let View::Student {
            screen: StudentScreen::Upload(upload),
            ..
        } = &mut self.view
        else {
            return;
        };
        match key.code {
            KeyCode::Enter => {
                if !upload.path_input.trim().is_empty() {
                    upload.select_from_input();
                } else {
                    // No-op without a selection or while analyzing
                    upload.start_analysis(Instant::now());
                }
            }
            KeyCode::Delete => upload.cancel_selection(),
            KeyCode::Backspace => upload.backspace(),
            KeyCode::Char(c) => upload.push_char(c),
            _ => {}
        }
    }

    fn handle_results_input(&mut self, key: event::KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.scroll_offset = 0;
                self.view = std::mem::take(&mut self.view).back();
            }
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('e') => self.export_current(),
            KeyCode::Char('m') => {
                // Present but permanently disabled
                self.status_message = Some((
                    "Отправить ментору: функция в разработке".to_string(),
                    Instant::now(),
                ));
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
            }
            KeyCode::PageDown => {
                self.scroll_offset = self.scroll_offset.saturating_add(10);
            }
            KeyCode::PageUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(10);
            }
            _ => {}
        }
    }

    fn handle_dashboard_input(&mut self, key: event::KeyEvent) {
        if key.code == KeyCode::Esc {
            self.logout();
            return;
        }
        if key.code == KeyCode::Enter {
            self.open_selected_analysis();
            return;
        }

        let View::Mentor {
            screen: MentorScreen::Dashboard(dashboard),
            ..
        } = &mut self.view
        else {
            return;
        };
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => dashboard.select_next(),
            KeyCode::Char('k') | KeyCode::Up => dashboard.select_prev(),
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    fn logout(&mut self) {
        self.scroll_offset = 0;
        self.status_message = None;
        self.view = std::mem::take(&mut self.view).logout();
    }

    /// Look up the report for the selected submission and open it.
    fn open_selected_analysis(&mut self) {
        let submission_id = {
            let View::Mentor {
                screen: MentorScreen::Dashboard(dashboard),
                ..
            } = &self.view
            else {
                return;
            };
            match dashboard.selected_submission() {
                Some(s) if s.status.scores().is_some() => s.id,
                Some(_) => {
                    self.status_message =
                        Some(("Работа еще обрабатывается".to_string(), Instant::now()));
                    return;
                }
                None => return,
            }
        };

        match mock::report_for(submission_id) {
            Ok(report) => {
                self.scroll_offset = 0;
                self.view = std::mem::take(&mut self.view).view_analysis(report);
            }
            Err(e) => self.status_message = Some((e.to_string(), Instant::now())),
        }
    }

    fn export_current(&mut self) {
        let result = match &self.view {
            View::Student {
                screen: StudentScreen::Results(report),
                ..
            } => export::write_report(&self.export_dir, report),
            View::Mentor {
                screen: MentorScreen::Results { report, .. },
                ..
            } => export::write_report(&self.export_dir, report),
            _ => return,
        };

        let message = match result {
            Ok(path) => format!("Отчет сохранен: {}", path.display()),
            Err(e) => e.to_string(),
        };
        self.status_message = Some((message, Instant::now()));
    }

    /// Advance simulated operations: completed login and analysis
    /// delays resolve here and drive the router.
    pub fn tick(&mut self, now: Instant) {
        let login_outcome = match &mut self.view {
            View::Login(form) => form.poll(now),
            _ => None,
        };
        if let Some(outcome) = login_outcome {
            match outcome {
                Ok(profile) => self.view = std::mem::take(&mut self.view).login(profile),
                Err(e) => {
                    if let View::Login(form) = &mut self.view {
                        form.set_error(e.to_string());
                    }
                }
            }
        }

        let analysis_outcome = match &mut self.view {
            View::Student {
                screen: StudentScreen::Upload(upload),
                ..
            } => upload.poll(now),
            _ => None,
        };
        if let Some(outcome) = analysis_outcome {
            match outcome {
                Ok(report) => {
                    self.scroll_offset = 0;
                    self.view = std::mem::take(&mut self.view).file_analyzed(report);
                }
                Err(e) => {
                    if let View::Student {
                        screen: StudentScreen::Upload(upload),
                        ..
                    } = &mut self.view
                    {
                        upload.set_error(e.to_string());
                    }
                }
            }
        }
    }

    /// Render the UI, dispatching to the current screen renderer.
    fn render(&mut self, frame: &mut Frame) {
        // Expire old status messages
        let expired = self
            .status_message
            .as_ref()
            .map(|(_, time)| time.elapsed() >= Duration::from_secs(4))
            .unwrap_or(false);
        if expired {
            self.status_message = None;
        }

        match &self.view {
            View::Login(form) => self.render_login(frame, form),
            View::Student {
                profile,
                screen: StudentScreen::Upload(upload),
            } => self.render_upload(frame, profile, upload),
            View::Student {
                screen: StudentScreen::Results(report),
                ..
            } => self.render_results(frame, report),
            View::Mentor {
                profile,
                screen: MentorScreen::Dashboard(dashboard),
            } => self.render_dashboard(frame, profile, dashboard),
            View::Mentor {
                screen: MentorScreen::Results { report, .. },
                ..
            } => self.render_results(frame, report),
        }
    }

    fn render_login(&self, frame: &mut Frame, form: &LoginForm) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(3)])
            .split(frame.area());

        let area = centered_rect(60, 80, chunks[0]);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(2),
                Constraint::Min(0),
            ])
            .split(area);

        let title = Paragraph::new(vec![
            Line::from(Span::styled(
                "MentorFlow",
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Авторизация в системе анализа студенческих работ",
                Style::default().fg(Color::DarkGray),
            )),
        ]);
        frame.render_widget(title, rows[0]);

        let selected_tab = match form.role_tab {
            Role::Student => 0,
            Role::Mentor => 1,
        };
        let tabs = Tabs::new(vec![Role::Student.label(), Role::Mentor.label()])
            .select(selected_tab)
            .highlight_style(
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            )
            .block(Block::default().borders(Borders::ALL).title("Вход"));
        frame.render_widget(tabs, rows[1]);

        let field_block = |label: &'static str, focused: bool| {
            let style = if focused {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            Block::default()
                .borders(Borders::ALL)
                .title(label)
                .border_style(style)
        };

        let email_focused = form.focus == LoginField::Email;
        let email_text = if email_focused {
            format!("{}_", form.email)
        } else {
            form.email.clone()
        };
        frame.render_widget(
            Paragraph::new(email_text).block(field_block("Email", email_focused)),
            rows[2],
        );

        let password_focused = form.focus == LoginField::Password;
        let mut password_text = if form.show_password {
            form.password.clone()
        } else {
            "•".repeat(form.password.chars().count())
        };
        if password_focused {
            password_text.push('_');
        }
        frame.render_widget(
            Paragraph::new(password_text).block(field_block("Пароль", password_focused)),
            rows[3],
        );

        let message = if form.is_pending() {
            Line::from(Span::styled("Вход...", Style::default().fg(Color::Yellow)))
        } else if let Some(error) = &form.error {
            Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            ))
        } else {
            Line::from(Span::styled(
                "Для демонстрации используйте демо вход (F2)",
                Style::default().fg(Color::DarkGray),
            ))
        };
        frame.render_widget(Paragraph::new(message), rows[4]);

        self.render_status_bar(
            frame,
            chunks[1],
            "Tab: поле  ←/→: роль  Enter: войти  F2: демо вход  F3: пароль  Esc: выход",
        );
    }

    fn render_upload(&self, frame: &mut Frame, profile: &StudentProfile, upload: &UploadState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(1),
                Constraint::Length(3),
            ])
            .split(frame.area());

        let header = Paragraph::new(Line::from(vec![
            Span::styled(
                "MentorFlow",
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(
                "  |  Добро пожаловать, {} • {}",
                profile.name, profile.group
            )),
        ]))
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(header, chunks[0]);

        let area = centered_rect(70, 70, chunks[1]);
        let mut lines: Vec<Line> = Vec::new();

        match &upload.selected {
            Some(file) => {
                lines.push(Line::from(Span::styled(
                    format!("Файл: {}", file.name),
                    Style::default().add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(format!(
                    "Размер: {:.1} KB",
                    file.size_bytes as f64 / 1024.0
                )));
            }
            None => {
                lines.push(Line::from("Укажите путь к файлу с работой"));
                lines.push(Line::from(Span::styled(
                    format!("Поддерживаемые форматы: {}", SUPPORTED_FORMATS),
                    Style::default().fg(Color::DarkGray),
                )));
            }
        }
        lines.push(Line::from(""));
        lines.push(Line::from(format!("Путь к файлу: {}_", upload.path_input)));
        lines.push(Line::from(""));

        if upload.is_analyzing() {
            lines.push(Line::from(Span::styled(
                "Анализируем...",
                Style::default().fg(Color::Yellow),
            )));
        } else if upload.selected.is_some() {
            lines.push(Line::from(
                "[Enter] Проанализировать   [Del] Отменить",
            ));
        } else {
            lines.push(Line::from("[Enter] Выбрать файл"));
        }

        if let Some(error) = &upload.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        }

        let card = Paragraph::new(Text::from(lines))
            .block(Block::default().borders(Borders::ALL).title("Загрузка работы"))
            .wrap(Wrap { trim: false });
        frame.render_widget(card, area);

        self.render_status_bar(
            frame,
            chunks[2],
            "Enter: выбрать/проанализировать  Del: отменить  Esc: выход из аккаунта  Ctrl+Q: выход",
        );
    }

    fn render_results(&self, frame: &mut Frame, report: &AnalysisReport) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(6),
                Constraint::Min(1),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(frame.area());

        let header = Paragraph::new(Span::styled(
            "Результаты анализа",
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        ))
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(header, chunks[0]);

        let overall_lines: Vec<Line> = Criterion::ALL
            .iter()
            .map(|criterion| {
                let score = report.overall.get(*criterion);
                let color = tier_color(ScoreTier::of(score));
                Line::from(vec![
                    Span::raw(format!("{:<12}", criterion.label())),
                    Span::styled(score_bar(score), Style::default().fg(color)),
                    Span::styled(
                        format!(" {}/10", score),
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    ),
                ])
            })
            .collect();
        let overall = Paragraph::new(Text::from(overall_lines))
            .block(Block::default().borders(Borders::ALL).title("Общая оценка"));
        frame.render_widget(overall, chunks[1]);

        let mut detail_lines: Vec<Line> = Vec::new();
        for criterion in Criterion::EXPORT_ORDER {
            let detail = report.detail(criterion);
            let color = tier_color(ScoreTier::of(detail.score));
            detail_lines.push(Line::from(vec![
                Span::styled(
                    accordion_label(criterion),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("   Оценка: {}/10", detail.score),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
            ]));
            for issue in &detail.issues {
                let text = if criterion == Criterion::Grammar {
                    format!("• \"{}\"", issue.text)
                } else {
                    format!("• {}", issue.text)
                };
                detail_lines.push(Line::from(Span::styled(
                    text,
                    Style::default().fg(Color::White),
                )));
                detail_lines.push(Line::from(Span::styled(
                    format!("  Рекомендация: {}", issue.recommendation),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            detail_lines.push(Line::from(""));
        }
        let details = Paragraph::new(Text::from(detail_lines))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Детализированная обратная связь"),
            )
            .wrap(Wrap { trim: false })
            .scroll((self.scroll_offset, 0));
        frame.render_widget(details, chunks[2]);

        let actions = Paragraph::new(Line::from(vec![
            Span::raw("[e] Скачать полный отчет   "),
            // Disabled action: rendered greyed out, [m] only shows a notice
            Span::styled(
                "[m] Отправить ментору (В разработке)",
                Style::default().fg(Color::DarkGray),
            ),
        ]))
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(actions, chunks[3]);

        self.render_status_bar(
            frame,
            chunks[4],
            "e: скачать отчет  j/k: прокрутка  Esc: назад  q: выход",
        );
    }

    fn render_dashboard(
        &self,
        frame: &mut Frame,
        profile: &MentorProfile,
        dashboard: &DashboardState,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(4),
                Constraint::Min(1),
                Constraint::Length(3),
            ])
            .split(frame.area());

        let header = Paragraph::new(Line::from(vec![
            Span::styled(
                "MentorFlow — Панель ментора",
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("  |  {} · {}", profile.name, profile.department)),
        ]))
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(header, chunks[0]);

        let stats = dashboard.stats();
        let stat_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
            ])
            .split(chunks[1]);

        let average = match stats.average_score {
            Some(avg) => format!("{:.1}", avg),
            None => "—".to_string(),
        };
        let cells = [
            ("Всего работ", stats.total.to_string(), Color::Red),
            ("Ожидают анализа", stats.pending.to_string(), Color::Yellow),
            (
                "Требуют проверки",
                stats.needs_review.to_string(),
                Color::Red,
            ),
            ("Средний балл", average, Color::Green),
        ];
        for (i, (label, value, color)) in cells.iter().enumerate() {
            let cell = Paragraph::new(vec![
                Line::from(Span::styled(*label, Style::default().fg(Color::DarkGray))),
                Line::from(Span::styled(
                    value.clone(),
                    Style::default().fg(*color).add_modifier(Modifier::BOLD),
                )),
            ])
            .block(Block::default().borders(Borders::ALL));
            frame.render_widget(cell, stat_areas[i]);
        }

        let items: Vec<ListItem> = dashboard
            .submissions
            .iter()
            .enumerate()
            .map(|(idx, submission)| {
                let is_selected = idx == dashboard.selected;
                let prefix = if is_selected { "> " } else { "  " };
                let title_style = if is_selected {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().add_modifier(Modifier::BOLD)
                };

                let mut lines = vec![
                    Line::from(Span::styled(
                        format!("{}{}", prefix, submission.assignment),
                        title_style,
                    )),
                    Line::from(Span::styled(
                        format!(
                            "  {} • {}   {}   {}",
                            submission.student_name,
                            submission.student_group,
                            submission.file_name,
                            submission.submitted_at.format("%d.%m.%Y, %H:%M"),
                        ),
                        Style::default().fg(Color::DarkGray),
                    )),
                ];

                let status_color = match submission.status {
                    crate::dashboard::SubmissionStatus::Pending => Color::Yellow,
                    crate::dashboard::SubmissionStatus::Analyzed(_) => Color::Blue,
                    crate::dashboard::SubmissionStatus::Reviewed(_) => Color::Green,
                };
                let mut status_spans = vec![Span::styled(
                    format!("  [{}]", submission.status.label()),
                    Style::default().fg(status_color),
                )];
                if submission.needs_review {
                    status_spans.push(Span::styled(
                        "  Требует внимания",
                        Style::default().fg(Color::Red),
                    ));
                }
                if let Some(scores) = submission.status.scores() {
                    status_spans.push(Span::raw(format!(
                        "  Средний балл: {:.1}",
                        scores.overall
                    )));
                }
                lines.push(Line::from(status_spans));

                if let Some(scores) = submission.status.scores() {
                    let mut score_spans: Vec<Span> = vec![Span::raw("  ")];
                    for criterion in Criterion::ALL {
                        let score = scores.criteria.get(criterion);
                        let color = tier_color(ScoreTier::of(score));
                        score_spans.push(Span::styled(
                            format!("{} {}/10   ", criterion.label(), score),
                            Style::default().fg(color),
                        ));
                    }
                    lines.push(Line::from(score_spans));
                }
                lines.push(Line::from(""));

                ListItem::new(Text::from(lines))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Работы студентов"),
        );
        frame.render_widget(list, chunks[2]);

        self.render_status_bar(
            frame,
            chunks[3],
            "j/k: навигация  Enter: просмотреть анализ  Esc: выход из аккаунта  q: выход",
        );
    }

    /// Render the status bar: the pending status message if one is
    /// active, otherwise the screen's key hints.
    fn render_status_bar(&self, frame: &mut Frame, area: Rect, hint: &str) {
        let text = match &self.status_message {
            Some((message, _)) => message.clone(),
            None => hint.to_string(),
        };
        let bar = Paragraph::new(text)
            .block(Block::default().borders(Borders::ALL))
            .wrap(Wrap { trim: false });
        frame.render_widget(bar, area);
    }
}

/// Accordion section label on the results screen.
fn accordion_label(criterion: Criterion) -> &'static str {
    match criterion {
        Criterion::Grammar => "Критерий: Грамотность и стиль",
        Criterion::Structure => "Критерий: Структура",
        Criterion::Content => "Критерий: Содержание",
        Criterion::Style => "Критерий: Стиль изложения",
    }
}

fn tier_color(tier: ScoreTier) -> Color {
    match tier {
        ScoreTier::Positive => Color::Green,
        ScoreTier::Neutral => Color::Yellow,
        ScoreTier::Negative => Color::Red,
    }
}

/// Text progress bar for a 0–10 score.
fn score_bar(score: u8) -> String {
    let filled = usize::from(score.min(10));
    format!("{}{}", "█".repeat(filled), "░".repeat(10 - filled))
}

/// Create a centered rectangle.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Setup the terminal for TUI rendering.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).context("Failed to create terminal")
}

/// Restore the terminal to its original state.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Launch the interactive UI with a pre-configured App.
pub fn run_tui(mut app: App) -> Result<()> {
    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    let mut terminal = setup_terminal()?;

    // Main event loop
    let result = (|| -> Result<()> {
        loop {
            terminal
                .draw(|f| app.render(f))
                .context("Failed to draw frame")?;

            if app.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(200)).context("Failed to poll events")?
                && let Event::Key(key) = event::read().context("Failed to read event")?
            {
                // Ignore key release events
                if key.kind == event::KeyEventKind::Press {
                    app.handle_input(key);
                }
            }

            // Resolve completed login/analysis delays
            app.tick(Instant::now());
        }
        Ok(())
    })();

    // Restore terminal in all cases
    restore_terminal(&mut terminal)?;

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_bar_is_ten_cells() {
        for score in 0..=10u8 {
            assert_eq!(score_bar(score).chars().count(), 10);
        }
        assert_eq!(score_bar(10), "██████████");
        assert_eq!(score_bar(0), "░░░░░░░░░░");
    }

    #[test]
    fn demo_app_starts_on_role_screen() {
        let dir = std::env::temp_dir();
        let app = App::logged_in(mock::demo_profile(Role::Student), dir.clone());
        assert_eq!(app.screen_kind(), ScreenKind::Upload);

        let app = App::logged_in(mock::demo_profile(Role::Mentor), dir);
        assert_eq!(app.screen_kind(), ScreenKind::Dashboard);
    }

    #[test]
    fn tick_completes_pending_login() {
        let mut app = App::new(std::env::temp_dir());
        let now = Instant::now();
        if let View::Login(form) = &mut app.view {
            form.submit(now);
        }

        app.tick(now);
        assert_eq!(app.screen_kind(), ScreenKind::Login);

        app.tick(now + crate::login::LOGIN_DELAY);
        assert_eq!(app.screen_kind(), ScreenKind::Upload);
    }

    #[test]
    fn tick_completes_pending_analysis() {
        let mut app = App::logged_in(mock::demo_profile(Role::Student), std::env::temp_dir());
        let now = Instant::now();
        if let View::Student {
            screen: StudentScreen::Upload(upload),
            ..
        } = &mut app.view
        {
            upload.select_file(crate::upload::SelectedFile {
                name: "essay.txt".to_string(),
                size_bytes: 1024,
            });
            upload.start_analysis(now);
        }

        app.tick(now);
        assert_eq!(app.screen_kind(), ScreenKind::Upload);

        app.tick(now + crate::upload::ANALYSIS_DELAY);
        assert_eq!(app.screen_kind(), ScreenKind::Results);
    }
}
