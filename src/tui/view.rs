use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use super::{App, Focus};

const SPINNER_FRAMES: [&str; 4] = ["⠋", "⠙", "⠸", "⠴"];

const ACCENT: Color = Color::Green;

pub(super) fn render(frame: &mut Frame, app: &App) {
    let history_height = if app.history().is_empty() { 0 } else { 3 };
    let status_height = if app.is_loading() || app.error().is_some() {
        1
    } else {
        0
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(history_height),
            Constraint::Length(status_height),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, chunks[0]);
    render_form(frame, chunks[1], app);
    if history_height > 0 {
        render_history(frame, chunks[2], app);
    }
    if status_height > 0 {
        render_status(frame, chunks[3], app);
    }
    render_result(frame, chunks[4], app);
    render_footer(frame, chunks[5]);
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(ACCENT)
    } else {
        Style::default()
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled(
            "Conjugador",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  verbos do português falado no Brasil"),
    ]);
    frame.render_widget(Paragraph::new(title), area);
}

fn render_form(frame: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let verb_focused = app.focus() == Focus::Verb;
    let verb_text = if app.verb_input().is_empty() && !verb_focused {
        Span::styled("Ex: cantar, partir, ser…", Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(app.verb_input().to_string())
    };
    let verb = Paragraph::new(Line::from(verb_text)).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Verbo")
            .border_style(focus_style(verb_focused)),
    );
    frame.render_widget(verb, columns[0]);

    let tense_focused = app.focus() == Focus::Tense;
    let tense = Paragraph::new(Line::from(vec![
        Span::raw("◂ "),
        Span::raw(app.selected_tense().label()),
        Span::raw(" ▸"),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Tempo verbal")
            .border_style(focus_style(tense_focused)),
    );
    frame.render_widget(tense, columns[1]);
}

fn render_history(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus() == Focus::History;
    let cursor = app.history_cursor();

    let mut spans = Vec::new();
    for (i, verb) in app.history().entries().iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if focused && i == cursor {
            Style::default().fg(Color::Black).bg(ACCENT)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {verb} "), style));
    }

    let strip = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Buscas recentes")
            .border_style(focus_style(focused)),
    );
    frame.render_widget(strip, area);
}

fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let line = if app.is_loading() {
        let spinner = SPINNER_FRAMES[app.spinner_tick() % SPINNER_FRAMES.len()];
        Line::from(Span::styled(
            format!("{spinner} consultando…"),
            Style::default().fg(ACCENT),
        ))
    } else if let Some(error) = app.error() {
        Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(Color::Red),
        ))
    } else {
        Line::default()
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_result(frame: &mut Frame, area: Rect, app: &App) {
    let Some(result) = app.result() else {
        let intro = Paragraph::new(
            "Digite um verbo, escolha o tempo verbal e pressione Enter para ver \
             todas as suas formas no português brasileiro.",
        )
        .style(Style::default().fg(Color::DarkGray))
        .wrap(Wrap { trim: true });
        frame.render_widget(intro, area);
        return;
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
        .split(area);

    render_table(frame, columns[0], result);
    render_notes(frame, columns[1], result);
}

fn render_table(frame: &mut Frame, area: Rect, result: &crate::domain::ConjugationResult) {
    let mut lines = vec![Line::from(Span::styled(
        result.tense().to_string(),
        Style::default().fg(ACCENT),
    ))];
    lines.push(Line::default());

    // Entries render in whatever order the model returned them.
    for entry in result.entries() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<12}", entry.person()),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                entry.form().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled("Infinitivo ", Style::default().fg(Color::DarkGray)),
        Span::raw(result.infinitive().to_string()),
        Span::styled("   Gerúndio ", Style::default().fg(Color::DarkGray)),
        Span::raw(result.gerund().to_string()),
        Span::styled("   Particípio ", Style::default().fg(Color::DarkGray)),
        Span::raw(result.past_participle().to_string()),
    ]));

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(result.verb().to_string()),
    );
    frame.render_widget(panel, area);
}

fn render_notes(frame: &mut Frame, area: Rect, result: &crate::domain::ConjugationResult) {
    let mut lines = vec![
        Line::from(Span::styled(
            "Significado",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(result.meaning().to_string()),
    ];

    if let Some(trivia) = result.trivia() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Você sabia?",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(trivia.to_string()));
    }

    let panel = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(panel, area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new("Tab alterna campo · ◂▸ ajusta · Enter conjuga · Esc sai")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
