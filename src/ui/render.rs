use crate::client::BackendHealth;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{body_columns, layout_regions, overflow_rows};
use crate::ui::summariser::SummariserState;
use crate::ui::theme::Palette;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const LOADING_TEXT: &str = "Thinking through your notes and condensing the key ideas...";
const EMPTY_TEXT: &str =
    "Your summary will appear here. Paste some notes and press Ctrl+S to get started.";
const INPUT_PLACEHOLDER: &str =
    "Paste your lecture notes, textbook content, or any long text here...";

/// Measurements from a drawn frame that the state needs back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Rows the summary is taller than its panel.
    pub summary_max_scroll: u16,
}

pub fn draw(frame: &mut Frame<'_>, app: &App) -> FrameReport {
    draw_view(frame, app.state(), app.health(), app.endpoint())
}

fn draw_view(
    frame: &mut Frame<'_>,
    state: &SummariserState,
    health: BackendHealth,
    endpoint: &str,
) -> FrameReport {
    let palette = state.theme.palette();
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Clear, area);
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        area,
    );

    let header_widget = Header::new(health, endpoint, state.theme);
    frame.render_widget(header_widget.widget(header.width), header);

    let (notes, summary) = body_columns(body);
    draw_notes(frame, notes, state, &palette);
    let summary_max_scroll = draw_summary(frame, summary, state, &palette);

    let footer_widget = Footer::new(state.variant, state.theme, state.is_in_flight());
    frame.render_widget(footer_widget.widget(footer), footer);

    FrameReport { summary_max_scroll }
}

fn panel<'a>(title: &'a str, tag: &'a str, palette: &Palette) -> Block<'a> {
    Block::default()
        .title(Line::from(vec![
            Span::styled(
                format!(" {} ", title),
                Style::default()
                    .fg(palette.text)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("[{}] ", tag), Style::default().fg(palette.muted)),
        ]))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
}

fn draw_notes(frame: &mut Frame<'_>, area: Rect, state: &SummariserState, palette: &Palette) {
    let block = panel("Your Notes", "Input", palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let error_height = if state.error.is_some() { 2 } else { 0 };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(error_height),
        ])
        .split(inner);

    // Keep the end of the text (where typing happens) in view.
    let input = if state.text.is_empty() {
        Paragraph::new(Line::from(Span::styled(
            INPUT_PLACEHOLDER,
            Style::default()
                .fg(palette.muted)
                .add_modifier(Modifier::ITALIC),
        )))
        .wrap(Wrap { trim: false })
    } else {
        let paragraph = Paragraph::new(format!("{}▏", state.text))
            .style(Style::default().fg(palette.text))
            .wrap(Wrap { trim: false });
        let overflow = overflow_rows(&paragraph, rows[0]);
        paragraph.scroll((overflow, 0))
    };
    frame.render_widget(input, rows[0]);

    let meta = Line::from(vec![
        Span::styled(
            format!("{} words", state.word_count()),
            Style::default().fg(palette.text),
        ),
        Span::styled(
            format!("  {}", state.word_count_hint()),
            Style::default().fg(palette.muted),
        ),
    ]);
    frame.render_widget(Paragraph::new(meta), rows[1]);

    let length = Line::from(vec![
        Span::styled("Summary length: ", Style::default().fg(palette.muted)),
        Span::styled("◀ ", Style::default().fg(palette.accent)),
        Span::styled(state.length_label(), Style::default().fg(palette.text)),
        Span::styled(" ▶", Style::default().fg(palette.accent)),
        Span::styled("  ^P/^N", Style::default().fg(palette.muted)),
    ]);
    frame.render_widget(Paragraph::new(length), rows[2]);

    if let Some(error) = &state.error {
        let line = Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(palette.error),
        ));
        frame.render_widget(Paragraph::new(line).wrap(Wrap { trim: true }), rows[3]);
    }
}

/// Returns how far the summary can scroll.
fn draw_summary(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &SummariserState,
    palette: &Palette,
) -> u16 {
    let mut block = panel("Summary", "Output", palette);
    if state.copied {
        block = block.title(
            Line::from(Span::styled(
                " Copied! ",
                Style::default()
                    .fg(palette.background)
                    .bg(palette.ok)
                    .add_modifier(Modifier::BOLD),
            ))
            .right_aligned(),
        );
    } else if state.summary().is_some() && !state.is_in_flight() {
        block = block.title(
            Line::from(Span::styled(
                " ^Y Copy ",
                Style::default().fg(palette.muted),
            ))
            .right_aligned(),
        );
    }
    let inner = block.inner(area);

    let paragraph = Paragraph::new(summary_lines(state, palette)).wrap(Wrap { trim: true });
    let max_scroll = overflow_rows(&paragraph, inner);
    let scroll = state.summary_scroll().min(max_scroll);
    if max_scroll > 0 {
        block = block.title_bottom(
            Line::from(Span::styled(
                format!(" PgUp/PgDn {}/{} ", scroll, max_scroll),
                Style::default().fg(palette.muted),
            ))
            .right_aligned(),
        );
    }

    frame.render_widget(block, area);
    frame.render_widget(paragraph.scroll((scroll, 0)), inner);
    max_scroll
}

/// Lines shown in the summary panel for the current state.
fn summary_lines(state: &SummariserState, palette: &Palette) -> Vec<Line<'static>> {
    if state.is_in_flight() {
        let spinner = SPINNER_FRAMES[(state.animation_tick as usize) % SPINNER_FRAMES.len()];
        return vec![
            Line::from(""),
            Line::from(vec![
                Span::styled(format!("  {} ", spinner), Style::default().fg(palette.ok)),
                Span::styled(LOADING_TEXT, Style::default().fg(palette.text)),
            ]),
        ];
    }

    let Some(result) = state.result.as_ref().filter(|r| !r.summary.is_empty()) else {
        if state.error.is_some() {
            return Vec::new();
        }
        return vec![Line::from(Span::styled(
            EMPTY_TEXT,
            Style::default().fg(palette.muted),
        ))];
    };

    let mut lines: Vec<Line<'static>> = result
        .summary
        .split('\n')
        .map(|paragraph| {
            Line::from(Span::styled(
                paragraph.to_string(),
                Style::default().fg(palette.text),
            ))
        })
        .collect();

    if let Some(keywords) = result.keywords.as_ref().filter(|k| !k.is_empty()) {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Keywords: ", Style::default().fg(palette.muted)),
            Span::styled(keywords.join(", "), Style::default().fg(palette.accent)),
        ]));
    }

    if let Some(sentiment) = &result.sentiment {
        lines.push(Line::from(vec![
            Span::styled("Sentiment: ", Style::default().fg(palette.muted)),
            Span::styled(
                format!("{} ({:.2})", sentiment.label, sentiment.score),
                Style::default().fg(palette.text),
            ),
        ]));
    }

    lines
}
