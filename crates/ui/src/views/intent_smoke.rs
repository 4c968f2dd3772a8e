use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;
use quiz_core::RngSource;
use quiz_core::model::{Country, Dataset};
use quiz_core::timing::INCORRECT_ADVANCE_DELAY;
use services::QuizSession;

use super::quiz::use_quiz_dispatcher;
use super::test_harness::drive_dom;
use crate::vm::{QuizBoardVm, QuizIntent, QuizVm};

#[derive(Clone, Default)]
struct HarnessHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    vm: Rc<RefCell<Option<Signal<Option<QuizVm>>>>>,
}

impl HarnessHandles {
    fn dispatch(&self) -> Callback<QuizIntent> {
        self.dispatch.borrow().clone().expect("dispatch registered")
    }

    fn vm(&self) -> Signal<Option<QuizVm>> {
        self.vm.borrow().clone().expect("vm registered")
    }
}

#[derive(Props, Clone)]
struct HarnessProps {
    names: Vec<String>,
    handles: HarnessHandles,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn QuizIntentHarness(props: HarnessProps) -> Element {
    let names = props.names.clone();
    let vm = use_signal(move || {
        let countries = names
            .iter()
            .map(|name| {
                Country::new(name.as_str(), Vec::new(), format!("https://flags.example/{name}.svg"))
                    .expect("valid country")
            })
            .collect();
        Some(QuizVm::new(QuizSession::with_dataset(
            Dataset::new(countries),
            RngSource::seeded(6).build(),
        )))
    });
    let dispatch = use_quiz_dispatcher(vm);

    let mut registered = use_signal(|| false);
    if !registered() {
        registered.set(true);
        *props.handles.dispatch.borrow_mut() = Some(dispatch);
        *props.handles.vm.borrow_mut() = Some(vm);
    }
    rsx! { div {} }
}

struct IntentHarness {
    dom: VirtualDom,
    handles: HarnessHandles,
}

impl IntentHarness {
    fn new(names: &[&str]) -> Self {
        let handles = HarnessHandles::default();
        let mut dom = VirtualDom::new_with_props(
            QuizIntentHarness,
            HarnessProps {
                names: names.iter().map(ToString::to_string).collect(),
                handles: handles.clone(),
            },
        );
        dom.rebuild_in_place();
        drive_dom(&mut dom);
        Self { dom, handles }
    }

    fn send(&mut self, intent: QuizIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    fn board(&self) -> QuizBoardVm {
        let vm = self.handles.vm();
        self.dom
            .in_runtime(|| vm.read().as_ref().and_then(QuizVm::board))
            .expect("board available")
    }

    fn is_locked(&self) -> bool {
        let vm = self.handles.vm();
        self.dom
            .in_runtime(|| vm.read().as_ref().is_some_and(QuizVm::is_locked))
    }

    /// Let spawned tasks run for at least `span` of wall time.
    async fn run_for(&mut self, span: Duration) {
        let deadline = tokio::time::Instant::now() + span;
        while tokio::time::Instant::now() < deadline {
            let _ = tokio::time::timeout_at(deadline, self.dom.wait_for_work()).await;
            drive_dom(&mut self.dom);
        }
    }
}

const SETTLE: Duration = Duration::from_millis(300);

#[tokio::test(flavor = "current_thread")]
async fn pick_locks_then_advances_after_delay() {
    let mut harness = IntentHarness::new(&["A", "B", "C", "D", "E"]);
    assert_eq!(harness.board().flag_alt, "Flag of A");

    harness.send(QuizIntent::Select("A".to_string()));
    let board = harness.board();
    assert!(harness.is_locked());
    assert_eq!(board.score_label, "Score: 1");
    assert_eq!(board.feedback.as_deref(), Some("Correct! It is A."));
    assert!(board.options.iter().all(|option| option.disabled));

    // A second pick while locked changes nothing.
    let wrong = board
        .options
        .iter()
        .find(|option| option.label != "A")
        .map(|option| option.label.clone())
        .expect("a distractor");
    harness.send(QuizIntent::Select(wrong));
    assert_eq!(harness.board().attempts_label, "Attempts: 1");

    harness.run_for(INCORRECT_ADVANCE_DELAY + SETTLE).await;

    let board = harness.board();
    assert!(!harness.is_locked());
    assert_eq!(board.flag_alt, "Flag of B");
    assert_eq!(board.feedback, None);
    assert_eq!(board.score_label, "Score: 1");
    assert_eq!(board.attempts_label, "Attempts: 1");
}

#[tokio::test(flavor = "current_thread")]
async fn skip_during_pause_advances_once() {
    let mut harness = IntentHarness::new(&["A", "B", "C", "D", "E"]);

    harness.send(QuizIntent::Select("A".to_string()));
    assert!(harness.is_locked());
    harness.send(QuizIntent::Skip);

    let board = harness.board();
    assert_eq!(board.flag_alt, "Flag of B");
    assert!(!harness.is_locked());
    assert_eq!(board.attempts_label, "Attempts: 2");

    harness.run_for(INCORRECT_ADVANCE_DELAY + SETTLE).await;

    let board = harness.board();
    assert_eq!(board.flag_alt, "Flag of B");
    assert_eq!(board.score_label, "Score: 1");
    assert_eq!(board.attempts_label, "Attempts: 2");
}
