use crate::config::Variant;
use crate::ui::theme::ThemeMode;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer {
    variant: Variant,
    theme: ThemeMode,
    busy: bool,
}

impl Footer {
    pub fn new(variant: Variant, theme: ThemeMode, busy: bool) -> Self {
        Self {
            variant,
            theme,
            busy,
        }
    }

    /// Key hints in priority order, keeping only those that fit in `width`
    /// columns. Keys that also appear inside the panels come last.
    pub fn hints(&self, width: usize) -> String {
        let mut hints = String::new();
        for item in self.items() {
            let separator = if hints.is_empty() { " " } else { " │ " };
            let needed = hints.chars().count() + separator.chars().count() + item.chars().count();
            if needed > width {
                continue;
            }
            hints.push_str(separator);
            hints.push_str(item);
        }
        hints
    }

    fn items(&self) -> Vec<&'static str> {
        let submit = if self.busy {
            "Summarising..."
        } else {
            "^S Summarise"
        };
        let mut items = vec![submit, "^Q Quit", "^T Theme", "^L Clear"];
        if self.variant.supports_sample() {
            items.push("^F Sample");
        }
        items.extend(["^Y Copy", "^N/^P Length", "PgUp/PgDn Scroll"]);
        items
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let palette = self.theme.palette();
        let version = format!("v{} ", VERSION);
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let hints = self.hints(content_width.saturating_sub(version_width));

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = hints.chars().count();
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(palette.text).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.border)),
            )
    }
}
