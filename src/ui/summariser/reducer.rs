//! Reducer for the summariser form.

use crate::ui::mvi::Reducer;

use super::intent::SummariserIntent;
use super::state::{RequestState, SummariserState, SAMPLE_NOTES};
use super::validation::validate;

/// Reducer for summariser state transitions.
pub struct SummariserReducer;

impl Reducer for SummariserReducer {
    type State = SummariserState;
    type Intent = SummariserIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SummariserIntent::InsertChar(ch) => {
                state.text.push(ch);
                state.copied = false;
            }

            SummariserIntent::InsertNewline => {
                state.text.push('\n');
                state.copied = false;
            }

            SummariserIntent::DeleteBackward => {
                if state.text.pop().is_some() {
                    state.copied = false;
                }
            }

            SummariserIntent::Paste(pasted) => {
                // Terminals deliver pasted line breaks as CR.
                let normalized = pasted.replace("\r\n", "\n").replace('\r', "\n");
                state.text.push_str(&normalized);
                state.copied = false;
            }

            SummariserIntent::CycleLength { longer } => {
                let length = state.length_policy().step(state.length, longer);
                if length != state.length {
                    state.length = length;
                    state.copied = false;
                }
            }

            SummariserIntent::SetLength(length) => {
                let length = state.length_policy().snap(length);
                if length != state.length {
                    state.length = length;
                    state.copied = false;
                }
            }

            SummariserIntent::Submit => {
                // The submit control is disabled while a request is outstanding.
                if state.request.is_in_flight() {
                    return state;
                }

                state.clear_outcome();
                match validate(&state.text, state.variant) {
                    Ok(()) => {
                        state.last_request_id += 1;
                        state.request = RequestState::InFlight {
                            request_id: state.last_request_id,
                        };
                        state.animation_tick = 0;
                    }
                    Err(err) => state.error = Some(err.user_message()),
                }
            }

            SummariserIntent::RequestSucceeded { request_id, result } => {
                if !is_current(&state, request_id) {
                    return state;
                }
                state.request = RequestState::Idle;
                state.result = Some(result);
                state.error = None;
                state.summary_scroll = 0;
            }

            SummariserIntent::RequestFailed {
                request_id,
                message,
            } => {
                if !is_current(&state, request_id) {
                    return state;
                }
                state.request = RequestState::Idle;
                state.result = None;
                state.error = Some(message);
                state.summary_scroll = 0;
            }

            SummariserIntent::Clear => {
                state.text.clear();
                state.clear_outcome();
            }

            SummariserIntent::FillSample => {
                if state.variant.supports_sample() {
                    state.text = SAMPLE_NOTES.to_string();
                    state.clear_outcome();
                }
            }

            SummariserIntent::CopySucceeded => {
                state.copied = true;
                state.copy_generation += 1;
            }

            SummariserIntent::CopyFailed { message } => {
                state.copied = false;
                state.error = Some(message);
            }

            SummariserIntent::CopyAckExpired { generation } => {
                if generation == state.copy_generation {
                    state.copied = false;
                }
            }

            SummariserIntent::ToggleTheme => {
                state.theme = state.theme.toggled();
            }

            SummariserIntent::ScrollSummary { rows } => {
                let target = i32::from(state.summary_scroll).saturating_add(rows);
                state.summary_scroll = target.clamp(0, i32::from(state.summary_scroll_max)) as u16;
            }

            SummariserIntent::SummaryViewport { max_scroll } => {
                state.summary_scroll_max = max_scroll;
                state.summary_scroll = state.summary_scroll.min(max_scroll);
            }

            SummariserIntent::Tick => {
                if state.request.is_in_flight() {
                    state.animation_tick = state.animation_tick.wrapping_add(1);
                }
            }
        }

        state
    }
}

/// Responses for anything but the request currently in flight are stale.
fn is_current(state: &SummariserState, request_id: u64) -> bool {
    state.request == RequestState::InFlight { request_id }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::SummaryResult;
    use crate::config::Variant;
    use crate::ui::theme::ThemeMode;

    fn words(n: usize) -> String {
        vec!["note"; n].join(" ")
    }

    fn in_flight(text: &str) -> SummariserState {
        let mut state = SummariserState::default();
        state.text = text.to_string();
        SummariserReducer::reduce(state, SummariserIntent::Submit)
    }

    fn summary(text: &str) -> SummaryResult {
        SummaryResult {
            summary: text.to_string(),
            ..SummaryResult::default()
        }
    }

    #[test]
    fn insert_and_delete_edit_text() {
        let state = SummariserState::default();
        let state = SummariserReducer::reduce(state, SummariserIntent::InsertChar('h'));
        let state = SummariserReducer::reduce(state, SummariserIntent::InsertChar('i'));
        let state = SummariserReducer::reduce(state, SummariserIntent::InsertNewline);
        assert_eq!(state.text, "hi\n");
        let state = SummariserReducer::reduce(state, SummariserIntent::DeleteBackward);
        let state = SummariserReducer::reduce(state, SummariserIntent::DeleteBackward);
        assert_eq!(state.text, "h");
    }

    #[test]
    fn paste_normalizes_carriage_returns() {
        let state = SummariserReducer::reduce(
            SummariserState::default(),
            SummariserIntent::Paste("a\r\nb\rc".into()),
        );
        assert_eq!(state.text, "a\nb\nc");
    }

    #[test]
    fn valid_submit_goes_in_flight_with_new_id() {
        let state = in_flight(&words(30));
        assert_eq!(state.request, RequestState::InFlight { request_id: 1 });
        assert_eq!(state.last_request_id(), 1);
        assert_eq!(state.error, None);
    }

    #[test]
    fn invalid_submit_stays_idle_and_clears_old_result() {
        let mut state = SummariserState::default();
        state.result = Some(summary("old"));
        state.copied = true;
        let state = SummariserReducer::reduce(state, SummariserIntent::Submit);
        assert_eq!(state.request, RequestState::Idle);
        assert_eq!(state.result, None);
        assert!(!state.copied);
        assert_eq!(
            state.error.as_deref(),
            Some("Please paste or type some notes first.")
        );
        assert_eq!(state.last_request_id(), 0);
    }

    #[test]
    fn submit_while_in_flight_is_ignored() {
        let state = in_flight(&words(30));
        let again = SummariserReducer::reduce(state.clone(), SummariserIntent::Submit);
        assert_eq!(again, state);
    }

    #[test]
    fn success_applies_result() {
        let state = in_flight(&words(30));
        let state = SummariserReducer::reduce(
            state,
            SummariserIntent::RequestSucceeded {
                request_id: 1,
                result: summary("X"),
            },
        );
        assert_eq!(state.request, RequestState::Idle);
        assert_eq!(state.summary(), Some("X"));
        assert_eq!(state.error, None);
    }

    #[test]
    fn stale_response_is_discarded() {
        let state = in_flight(&words(30));
        let after = SummariserReducer::reduce(
            state.clone(),
            SummariserIntent::RequestFailed {
                request_id: 7,
                message: "late".into(),
            },
        );
        assert_eq!(after, state);
    }

    #[test]
    fn response_after_clear_still_applies() {
        let state = in_flight(&words(30));
        let state = SummariserReducer::reduce(state, SummariserIntent::Clear);
        assert!(state.text.is_empty());
        assert!(state.is_in_flight());
        let state = SummariserReducer::reduce(
            state,
            SummariserIntent::RequestSucceeded {
                request_id: 1,
                result: summary("late but applied"),
            },
        );
        assert_eq!(state.summary(), Some("late but applied"));
    }

    #[test]
    fn fill_sample_only_in_strict() {
        let state = SummariserReducer::reduce(SummariserState::default(), SummariserIntent::FillSample);
        assert_eq!(state.text, SAMPLE_NOTES);

        let rich = SummariserState::new(Variant::Rich, 3, ThemeMode::Dark);
        let after = SummariserReducer::reduce(rich.clone(), SummariserIntent::FillSample);
        assert_eq!(after, rich);
    }

    #[test]
    fn copy_ack_expiry_respects_generation() {
        let state = SummariserReducer::reduce(SummariserState::default(), SummariserIntent::CopySucceeded);
        let state = SummariserReducer::reduce(state, SummariserIntent::CopySucceeded);
        assert_eq!(state.copy_generation(), 2);

        let state = SummariserReducer::reduce(state, SummariserIntent::CopyAckExpired { generation: 1 });
        assert!(state.copied);
        let state = SummariserReducer::reduce(state, SummariserIntent::CopyAckExpired { generation: 2 });
        assert!(!state.copied);
    }

    #[test]
    fn copy_failure_keeps_result() {
        let mut state = SummariserState::default();
        state.result = Some(summary("keep me"));
        let state = SummariserReducer::reduce(
            state,
            SummariserIntent::CopyFailed {
                message: "Could not copy to clipboard.".into(),
            },
        );
        assert_eq!(state.summary(), Some("keep me"));
        assert_eq!(state.error.as_deref(), Some("Could not copy to clipboard."));
        assert!(!state.copied);
    }

    #[test]
    fn cycle_length_walks_choices() {
        let state = SummariserState::default();
        let state = SummariserReducer::reduce(state, SummariserIntent::CycleLength { longer: true });
        assert_eq!(state.length, 8);
        let state = SummariserReducer::reduce(state, SummariserIntent::SetLength(2));
        assert_eq!(state.length, 3);
    }

    #[test]
    fn tick_only_animates_in_flight() {
        let idle = SummariserReducer::reduce(SummariserState::default(), SummariserIntent::Tick);
        assert_eq!(idle.animation_tick, 0);
        let busy = SummariserReducer::reduce(in_flight(&words(30)), SummariserIntent::Tick);
        assert_eq!(busy.animation_tick, 1);
    }

    #[test]
    fn length_change_drops_copy_ack() {
        let mut state = SummariserState::default();
        state.result = Some(summary("done"));
        let state = SummariserReducer::reduce(state, SummariserIntent::CopySucceeded);
        let state = SummariserReducer::reduce(state, SummariserIntent::CycleLength { longer: true });
        assert!(!state.copied);

        let state = SummariserReducer::reduce(state, SummariserIntent::CopySucceeded);
        let state = SummariserReducer::reduce(state, SummariserIntent::SetLength(3));
        assert!(!state.copied);
    }

    #[test]
    fn length_at_its_limit_keeps_copy_ack() {
        let mut state = SummariserState::new(Variant::Strict, 12, ThemeMode::Dark);
        state.result = Some(summary("done"));
        let state = SummariserReducer::reduce(state, SummariserIntent::CopySucceeded);
        let state = SummariserReducer::reduce(state, SummariserIntent::CycleLength { longer: true });
        assert_eq!(state.length, 12);
        assert!(state.copied);
    }

    #[test]
    fn summary_scroll_is_bounded_by_viewport() {
        let state = SummariserReducer::reduce(
            SummariserState::default(),
            SummariserIntent::ScrollSummary { rows: 5 },
        );
        assert_eq!(state.summary_scroll(), 0);

        let state = SummariserReducer::reduce(state, SummariserIntent::SummaryViewport { max_scroll: 4 });
        let state = SummariserReducer::reduce(state, SummariserIntent::ScrollSummary { rows: 3 });
        assert_eq!(state.summary_scroll(), 3);
        let state = SummariserReducer::reduce(state, SummariserIntent::ScrollSummary { rows: 10 });
        assert_eq!(state.summary_scroll(), 4);
        let state = SummariserReducer::reduce(state, SummariserIntent::SummaryViewport { max_scroll: 2 });
        assert_eq!(state.summary_scroll(), 2);
        let state = SummariserReducer::reduce(state, SummariserIntent::ScrollSummary { rows: -10 });
        assert_eq!(state.summary_scroll(), 0);
    }

    #[test]
    fn summary_scroll_resets_on_new_outcome_and_clear() {
        let scrolled = |state: SummariserState| {
            let state = SummariserReducer::reduce(state, SummariserIntent::SummaryViewport { max_scroll: 9 });
            SummariserReducer::reduce(state, SummariserIntent::ScrollSummary { rows: 6 })
        };

        let state = scrolled(in_flight(&words(30)));
        assert_eq!(state.summary_scroll(), 6);
        let state = SummariserReducer::reduce(
            state,
            SummariserIntent::RequestSucceeded {
                request_id: 1,
                result: summary("new"),
            },
        );
        assert_eq!(state.summary_scroll(), 0);

        let state = scrolled(state);
        let state = SummariserReducer::reduce(state, SummariserIntent::Submit);
        assert_eq!(state.summary_scroll(), 0);

        let state = SummariserReducer::reduce(
            state,
            SummariserIntent::RequestFailed {
                request_id: 2,
                message: "boom".into(),
            },
        );
        let state = scrolled(state);
        let state = SummariserReducer::reduce(state, SummariserIntent::Clear);
        assert_eq!(state.summary_scroll(), 0);
    }
}
