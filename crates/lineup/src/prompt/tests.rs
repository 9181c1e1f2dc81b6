use super::{DismissBehavior, GoalPrompt, PromptSurface};
use std::cell::RefCell;
use std::rc::Rc;

const ACCENT: (u8, u8, u8) = (0x7a, 0xa2, 0xf7);

/// Records surface requests and callback firings in arrival order, so
/// tests can assert both counts and ordering.
#[derive(Default)]
struct RecordingSurface {
    calls: Rc<RefCell<Vec<String>>>,
}

impl PromptSurface for RecordingSurface {
    fn close(&mut self) {
        self.calls.borrow_mut().push("close".to_string());
    }

    fn focus_input(&mut self) {
        self.calls.borrow_mut().push("focus".to_string());
    }
}

fn prompt_with_log(dismiss: DismissBehavior) -> (GoalPrompt, RecordingSurface, Rc<RefCell<Vec<String>>>) {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let callback_calls = Rc::clone(&calls);
    let prompt = GoalPrompt::new("Writing".to_string(), ACCENT, dismiss, move |goal| {
        callback_calls
            .borrow_mut()
            .push(format!("notify:{goal:?}"));
    });
    let surface = RecordingSurface {
        calls: Rc::clone(&calls),
    };
    (prompt, surface, calls)
}

fn resolutions(calls: &Rc<RefCell<Vec<String>>>) -> Vec<String> {
    calls
        .borrow()
        .iter()
        .filter(|call| call.starts_with("notify:"))
        .cloned()
        .collect()
}

#[test]
fn counter_tracks_raw_length_including_whitespace() {
    let (mut prompt, _surface, _calls) = prompt_with_log(DismissBehavior::Skip);
    assert_eq!(prompt.counter(), "0 / 200");

    prompt.set_draft("  Finish Chapter 3  ".to_string());
    assert_eq!(prompt.counter(), "20 / 200");

    prompt.set_draft("   ".to_string());
    assert_eq!(prompt.counter(), "3 / 200");
}

#[test]
fn counter_counts_characters_not_bytes() {
    let (mut prompt, _surface, _calls) = prompt_with_log(DismissBehavior::Skip);
    prompt.set_draft("écrire ch. 3".to_string());
    assert_eq!(prompt.counter(), "12 / 200");
}

#[test]
fn submit_empty_draft_resolves_without_goal() {
    let (mut prompt, mut surface, calls) = prompt_with_log(DismissBehavior::Skip);
    prompt.submit(&mut surface);
    assert_eq!(resolutions(&calls), vec!["notify:None"]);
}

#[test]
fn submit_whitespace_only_resolves_without_goal() {
    let (mut prompt, mut surface, calls) = prompt_with_log(DismissBehavior::Skip);
    prompt.set_draft("   ".to_string());
    prompt.submit(&mut surface);
    assert_eq!(resolutions(&calls), vec!["notify:None"]);
}

#[test]
fn submit_trims_edges_and_keeps_interior() {
    let (mut prompt, mut surface, calls) = prompt_with_log(DismissBehavior::Skip);
    prompt.set_draft("  Finish Chapter 3  ".to_string());
    prompt.submit(&mut surface);
    assert_eq!(
        resolutions(&calls),
        vec![format!("notify:{:?}", Some("Finish Chapter 3"))]
    );
}

#[test]
fn skip_resolves_without_goal_even_with_draft() {
    let (mut prompt, mut surface, calls) = prompt_with_log(DismissBehavior::Skip);
    prompt.set_draft("Finish Chapter 3".to_string());
    prompt.skip(&mut surface);
    assert_eq!(resolutions(&calls), vec!["notify:None"]);
}

#[test]
fn close_is_requested_before_the_callback_runs() {
    let (mut prompt, mut surface, calls) = prompt_with_log(DismissBehavior::Skip);
    prompt.set_draft("ship it".to_string());
    prompt.submit(&mut surface);
    assert_eq!(
        calls.borrow().as_slice(),
        [
            "close".to_string(),
            format!("notify:{:?}", Some("ship it"))
        ]
    );
}

#[test]
fn second_submit_is_a_noop() {
    let (mut prompt, mut surface, calls) = prompt_with_log(DismissBehavior::Skip);
    prompt.set_draft("once".to_string());
    prompt.submit(&mut surface);
    prompt.submit(&mut surface);
    assert_eq!(resolutions(&calls).len(), 1);
    assert_eq!(
        calls
            .borrow()
            .iter()
            .filter(|call| call.as_str() == "close")
            .count(),
        1
    );
}

#[test]
fn submit_then_skip_resolves_once() {
    let (mut prompt, mut surface, calls) = prompt_with_log(DismissBehavior::Skip);
    prompt.set_draft("once".to_string());
    prompt.submit(&mut surface);
    prompt.skip(&mut surface);
    assert_eq!(
        resolutions(&calls),
        vec![format!("notify:{:?}", Some("once"))]
    );
}

#[test]
fn dismiss_defaults_to_skip() {
    let (mut prompt, mut surface, calls) = prompt_with_log(DismissBehavior::Skip);
    prompt.set_draft("unsaved".to_string());
    prompt.dismiss(&mut surface);
    assert!(!prompt.is_open());
    assert_eq!(resolutions(&calls), vec!["notify:None"]);
}

#[test]
fn dismiss_can_be_configured_to_keep_the_prompt_open() {
    let (mut prompt, mut surface, calls) = prompt_with_log(DismissBehavior::Ignore);
    prompt.set_draft("still here".to_string());
    prompt.dismiss(&mut surface);
    assert!(prompt.is_open());
    assert!(resolutions(&calls).is_empty());

    // The prompt is still live: submit works normally afterwards.
    prompt.submit(&mut surface);
    assert_eq!(
        resolutions(&calls),
        vec![format!("notify:{:?}", Some("still here"))]
    );
}

#[test]
fn focus_request_is_forwarded_only_while_open() {
    let (mut prompt, mut surface, calls) = prompt_with_log(DismissBehavior::Skip);
    prompt.request_focus(&mut surface);
    prompt.skip(&mut surface);
    prompt.request_focus(&mut surface);
    assert_eq!(
        calls
            .borrow()
            .iter()
            .filter(|call| call.as_str() == "focus")
            .count(),
        1
    );
}

#[test]
fn draft_edits_after_resolution_are_ignored() {
    let (mut prompt, mut surface, _calls) = prompt_with_log(DismissBehavior::Skip);
    prompt.set_draft("final".to_string());
    prompt.submit(&mut surface);
    prompt.set_draft("too late".to_string());
    assert_eq!(prompt.draft(), "final");
}
