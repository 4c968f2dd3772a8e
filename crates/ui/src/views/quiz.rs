use dioxus::document::eval;
use dioxus::core::Task;
use dioxus::prelude::*;
use log::debug;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{OptionVm, QuizBoardVm, QuizIntent, QuizVm, load_quiz};

const FOCUS_ROOT_JS: &str = r#"document.getElementById("quiz-root")?.focus();"#;
const FOCUS_PRIMARY_JS: &str = r#"document.getElementById("quiz-option-0")?.focus();"#;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Shortcut {
    Option(usize),
    Skip,
}

fn shortcut_for_key(key: &Key) -> Option<Shortcut> {
    match key {
        Key::Character(ch) => match ch.as_str() {
            "1" => Some(Shortcut::Option(0)),
            "2" => Some(Shortcut::Option(1)),
            "3" => Some(Shortcut::Option(2)),
            "4" => Some(Shortcut::Option(3)),
            "s" | "S" | "n" | "N" => Some(Shortcut::Skip),
            _ => None,
        },
        Key::ArrowRight => Some(Shortcut::Skip),
        _ => None,
    }
}

/// Intent dispatcher for a quiz held in `vm`.
///
/// A pick schedules the delayed advance as a task; at most one is in flight,
/// and a skip cancels it before moving on.
pub(crate) fn use_quiz_dispatcher(vm: Signal<Option<QuizVm>>) -> Callback<QuizIntent> {
    let pending = use_signal(|| None::<Task>);

    use_callback(move |intent: QuizIntent| {
        let mut vm = vm;
        let mut pending = pending;

        match intent {
            QuizIntent::Select(option) => {
                let ticket = vm.write().as_mut().and_then(|vm| vm.select(&option));
                let Some(ticket) = ticket else {
                    return;
                };
                let task = spawn(async move {
                    tokio::time::sleep(ticket.delay()).await;
                    let advanced = vm
                        .write()
                        .as_mut()
                        .is_some_and(|vm| vm.complete_advance(ticket));
                    if !advanced {
                        debug!("dropped stale advance");
                    }
                    pending.set(None);
                });
                pending.set(Some(task));
            }
            QuizIntent::Skip => {
                if let Some(task) = pending.write().take() {
                    debug!("skip cancelled pending advance");
                    task.cancel();
                }
                let skipped = vm.write().as_mut().is_some_and(QuizVm::skip);
                if skipped {
                    let _ = eval(FOCUS_PRIMARY_JS);
                }
            }
        }
    })
}

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let quiz_loop = ctx.quiz_loop();
    let seed = ctx.seed();

    let vm = use_signal(|| None::<QuizVm>);
    let dispatch_intent = use_quiz_dispatcher(vm);

    let resource = use_resource(move || {
        let quiz_loop = quiz_loop.clone();
        let mut vm = vm;
        async move {
            let loaded = load_quiz(&quiz_loop).await?;
            vm.set(Some(loaded));
            Ok::<_, ViewError>(())
        }
    });
    let state = view_state_from_resource(&resource);

    let on_key = move |evt: KeyboardEvent| {
        let Some(shortcut) = shortcut_for_key(&evt.key()) else {
            return;
        };
        evt.prevent_default();
        match shortcut {
            Shortcut::Option(index) => {
                let label = vm
                    .read()
                    .as_ref()
                    .filter(|vm| !vm.is_locked())
                    .and_then(|vm| vm.option_label(index));
                if let Some(label) = label {
                    dispatch_intent.call(QuizIntent::Select(label));
                }
            }
            Shortcut::Skip => dispatch_intent.call(QuizIntent::Skip),
        }
    };

    let mut did_focus = use_signal(|| false);
    use_effect(move || {
        if did_focus() || vm.read().is_none() {
            return;
        }
        did_focus.set(true);
        let _ = eval(FOCUS_ROOT_JS);
    });

    let board = vm.read().as_ref().and_then(QuizVm::board);

    rsx! {
        div { class: "page quiz-page", id: "quiz-root", tabindex: "0", onkeydown: on_key,
            div { class: "container",
                match state {
                    ViewState::Idle => rsx! {
                        p { class: "quiz-status", "Idle" }
                    },
                    ViewState::Loading => rsx! {
                        p { class: "quiz-status", "Loading flags…" }
                    },
                    ViewState::Error(err) => rsx! {
                        p { class: "quiz-status quiz-status--error", "{err.message()}" }
                    },
                    ViewState::Ready(()) => rsx! {
                        match board {
                            Some(board) => rsx! {
                                QuizBoard { board, on_intent: dispatch_intent }
                            },
                            None => rsx! {
                                p { class: "quiz-status", "No data." }
                            },
                        }
                    },
                }
                if let Some(seed) = seed {
                    p { class: "quiz-seed", "Seed {seed}" }
                }
            }
        }
    }
}

#[component]
fn QuizBoard(board: QuizBoardVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let QuizBoardVm {
        flag_url,
        flag_alt,
        options,
        score_label,
        attempts_label,
        accuracy_label,
        feedback,
    } = board;

    rsx! {
        div { class: "header-row",
            h1 { "Guess the Flag" }
            div { class: "scorebox", aria_live: "polite",
                div { class: "score-main", "{score_label}" }
                div { class: "score-sub", "{attempts_label}" }
                if let Some(accuracy) = accuracy_label {
                    div { class: "score-sub", "{accuracy}" }
                }
            }
        }
        div { class: "flag-wrap",
            img { class: "flag", src: "{flag_url}", alt: "{flag_alt}" }
        }
        div {
            class: "options-grid",
            role: "group",
            aria_label: "Choose the country name",
            for option in options {
                OptionButton { key: "{option.index}", option: option.clone(), on_intent }
            }
        }
        div { class: "controls",
            button {
                id: "quiz-skip",
                r#type: "button",
                title: "Skip to next flag",
                onclick: move |_| on_intent.call(QuizIntent::Skip),
                "Skip"
            }
        }
        if let Some(feedback) = feedback {
            div { class: "feedback", "{feedback}" }
        }
    }
}

#[component]
fn OptionButton(option: OptionVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let label = option.label.clone();
    rsx! {
        button {
            class: "{option.class}",
            id: "quiz-option-{option.index}",
            r#type: "button",
            disabled: option.disabled,
            onclick: move |_| on_intent.call(QuizIntent::Select(label.clone())),
            "{option.label}"
        }
    }
}
