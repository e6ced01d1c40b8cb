use crate::ui::app::App;
use crate::ui::summariser::SummariserIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Rows moved by PageUp/PageDown in the summary panel.
const SUMMARY_PAGE: i32 = 5;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') || key.code == KeyCode::Esc {
        app.request_quit();
        return;
    }

    if is_shortcut(key.modifiers) {
        let KeyCode::Char(ch) = key.code else {
            return;
        };
        match ch.to_ascii_lowercase() {
            's' => app.submit(),
            'l' => app.clear(),
            'f' => app.fill_sample(),
            'y' => app.copy_result(),
            't' => app.toggle_theme(),
            'n' => app.dispatch(SummariserIntent::CycleLength { longer: true }),
            'p' => app.dispatch(SummariserIntent::CycleLength { longer: false }),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Enter => app.dispatch(SummariserIntent::InsertNewline),
        KeyCode::Backspace => app.dispatch(SummariserIntent::DeleteBackward),
        KeyCode::Tab => app.dispatch(SummariserIntent::InsertChar(' ')),
        KeyCode::Up => app.dispatch(SummariserIntent::ScrollSummary { rows: -1 }),
        KeyCode::Down => app.dispatch(SummariserIntent::ScrollSummary { rows: 1 }),
        KeyCode::PageUp => app.dispatch(SummariserIntent::ScrollSummary {
            rows: -SUMMARY_PAGE,
        }),
        KeyCode::PageDown => app.dispatch(SummariserIntent::ScrollSummary { rows: SUMMARY_PAGE }),
        KeyCode::Char(ch) if !is_alt_only(key.modifiers) => {
            app.dispatch(SummariserIntent::InsertChar(ch))
        }
        _ => {}
    }
}

/// Ctrl chords, excluding AltGr, which Windows terminals report as Ctrl+Alt.
fn is_shortcut(modifiers: KeyModifiers) -> bool {
    modifiers.contains(KeyModifiers::CONTROL) && !modifiers.contains(KeyModifiers::ALT)
}

fn is_alt_only(modifiers: KeyModifiers) -> bool {
    modifiers.contains(KeyModifiers::ALT) && !modifiers.contains(KeyModifiers::CONTROL)
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && is_shortcut(key.modifiers)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
