use dioxus::prelude::*;

use quiz_core::GameSession;

use crate::context::AppContext;
use crate::vm::{FeedbackVm, QUESTION_PROMPT, QuizIntent, QuizOptionVm, map_quiz};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let quiz_loop = ctx.quiz_loop();

    let session = {
        let quiz_loop = quiz_loop.clone();
        use_signal(move || quiz_loop.start_game())
    };

    let dispatch_intent = {
        let quiz_loop = quiz_loop.clone();
        use_callback(move |intent: QuizIntent| {
            let mut session = session;
            let current = GameSession::clone(&session.peek());
            session.set(quiz_loop.apply(current, &intent.into_action()));
        })
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch_intent, session);
            }
        }
    }

    let vm = map_quiz(&session.read());
    let locked = vm.locked;

    rsx! {
        div { class: "game-area",
            div { class: "main-content",
                div { class: "question-score",
                    p { class: "medium-font", "{QUESTION_PROMPT}" }
                    if !vm.question_label.is_empty() {
                        p { class: "question-number", "{vm.question_label}" }
                        p { class: "remaining", id: "quiz-remaining", "{vm.remaining_label}" }
                    }
                    p { class: "medium-font", id: "quiz-score", "{vm.score_label}" }
                }

                div { class: "options",
                    for option in vm.options.iter().cloned() {
                        OptionCard {
                            key: "{option.composer}",
                            option,
                            locked,
                            on_intent: dispatch_intent,
                        }
                    }
                }

                div { class: "control-area",
                    if let Some(src) = vm.audio_src.clone() {
                        div { class: "music-player",
                            if let Some(message) = vm.audio_error {
                                p { class: "error", id: "quiz-audio-error", "{message}" }
                            } else {
                                audio {
                                    controls: true,
                                    src: "{src}",
                                    onerror: move |_| dispatch_intent.call(QuizIntent::AudioFailed),
                                }
                            }
                        }
                    }

                    div { class: "button-group",
                        button {
                            id: "quiz-check",
                            r#type: "button",
                            disabled: !vm.can_check,
                            onclick: move |_| dispatch_intent.call(QuizIntent::Check),
                            "Check Answer"
                        }
                        button {
                            id: "quiz-next",
                            r#type: "button",
                            disabled: !vm.can_advance,
                            onclick: move |_| dispatch_intent.call(QuizIntent::Next),
                            "Next Question"
                        }
                        button {
                            id: "quiz-restart",
                            r#type: "button",
                            onclick: move |_| dispatch_intent.call(QuizIntent::Restart),
                            "Start New Game"
                        }
                    }
                }

                if let Some(feedback) = vm.feedback.clone() {
                    FeedbackPanel { feedback }
                }
            }
        }

        if let Some(game_over) = vm.game_over.clone() {
            div { class: "modal-overlay",
                div { class: "modal-content", role: "dialog", aria_modal: "true",
                    h2 { "Game Over!" }
                    p { "{game_over.final_score_label}" }
                    button {
                        id: "quiz-play-again",
                        r#type: "button",
                        onclick: move |_| dispatch_intent.call(QuizIntent::Restart),
                        "Play Again"
                    }
                }
            }
        }
    }
}

#[component]
fn OptionCard(option: QuizOptionVm, locked: bool, on_intent: EventHandler<QuizIntent>) -> Element {
    let class = if option.selected { "option selected" } else { "option" };
    let composer = option.composer.clone();

    rsx! {
        label { class: "{class}",
            input {
                r#type: "radio",
                name: "composer",
                value: "{option.composer}",
                checked: option.selected,
                disabled: locked,
                onchange: move |_| on_intent.call(QuizIntent::Select(composer.clone())),
            }
            img { class: "composer-image", src: "{option.image_src}", alt: "{option.composer}" }
            span { class: "composer-name", "{option.composer}" }
        }
    }
}

#[component]
fn FeedbackPanel(feedback: FeedbackVm) -> Element {
    let verdict_class = if feedback.is_correct { "success" } else { "error" };

    rsx! {
        div { class: "feedback-area",
            p { class: "medium-font", "{feedback.title_label}" }
            p { class: "{verdict_class}", "{feedback.verdict_label}" }
            p { class: "info", "{feedback.fun_fact_label}" }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    session: Rc<RefCell<Option<Signal<GameSession>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>, session: Signal<GameSession>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.session.borrow_mut() = Some(session);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn session(&self) -> Signal<GameSession> {
        (*self.session.borrow()).expect("quiz session registered")
    }
}
