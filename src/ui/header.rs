use crate::client::BackendHealth;
use crate::ui::theme::{Palette, ThemeMode};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    health: BackendHealth,
    endpoint: &'a str,
    theme: ThemeMode,
}

impl<'a> Header<'a> {
    pub fn new(health: BackendHealth, endpoint: &'a str, theme: ThemeMode) -> Self {
        Self {
            health,
            endpoint,
            theme,
        }
    }

    pub fn widget(&self, width: u16) -> Paragraph<'a> {
        let border = self.theme.palette().border;
        Paragraph::new(self.line(width)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(border)),
        )
    }

    /// Header text for `width` columns. The endpoint is the first thing
    /// dropped when space runs out.
    pub fn line(&self, width: u16) -> Line<'a> {
        let full = self.build_line(true);
        if full.width() <= width as usize {
            return full;
        }
        self.build_line(false)
    }

    fn build_line(&self, with_endpoint: bool) -> Line<'a> {
        let palette = self.theme.palette();
        let text_style = Style::default().fg(palette.text);
        let separator_style = Style::default().fg(palette.muted);
        let (status_icon, status_text, status_color) = health_badge(self.health, &palette);

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(
                "AI Notes Summariser",
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(status_icon, Style::default().fg(status_color)),
            Span::styled(format!(" {}", status_text), text_style),
        ];
        if with_endpoint {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(self.endpoint, separator_style));
        }
        spans.push(Span::styled("  │  ", separator_style));
        spans.push(Span::styled(self.theme.toggle_label(), text_style));
        Line::from(spans)
    }
}

fn health_badge(
    health: BackendHealth,
    palette: &Palette,
) -> (&'static str, &'static str, ratatui::style::Color) {
    match health {
        BackendHealth::Unknown => ("●", "checking...", palette.muted),
        BackendHealth::Online => ("●", "online", palette.ok),
        BackendHealth::Offline => ("●", "offline", palette.error),
    }
}
