//! Quiz widget
//!
//! Renders a [`QuizSession`] one question at a time. All rules (one answer
//! per question, scoring, restart) live in the session; this module only
//! maps its state onto buttons and text.

use leptos::prelude::*;

use crate::core::quiz::{AnswerOption, Question, QuizSession};

#[component]
pub fn QuizWidget(questions: Vec<Question>) -> impl IntoView {
    let session = RwSignal::new(QuizSession::new(questions));

    // Options are rebuilt only when a new question comes up (or on restart),
    // never on selection, so every question starts from fresh controls.
    let question_key = Memo::new(move |_| session.with(|s| (s.index(), s.is_finished())));

    let on_next = move |_| {
        session.update(|s| {
            if let Err(e) = s.advance() {
                leptos::logging::warn!("Quiz: {}", e);
            }
        });
    };

    view! {
        <div class="quiz-card">
            <div id="quiz-question" class="quiz-question">
                {move || {
                    session.with(|s| match s.summary() {
                        Some(summary) => view! {
                            <h3>{summary.headline()}</h3>
                            <p>{summary.detail()}</p>
                        }.into_any(),
                        None => {
                            let prompt = s.current_question().map(|q| q.prompt.clone()).unwrap_or_default();
                            view! { <p>{prompt}</p> }.into_any()
                        }
                    })
                }}
            </div>

            <div id="quiz-options" class="quiz-options">
                {move || {
                    let _ = question_key.get();
                    let options: Vec<AnswerOption> = session.with_untracked(|s| {
                        s.current_question().map(|q| q.options.clone()).unwrap_or_default()
                    });
                    options
                        .into_iter()
                        .enumerate()
                        .map(|(index, option)| view! { <QuizOptionButton session=session index=index option=option /> })
                        .collect_view()
                }}
            </div>

            <div
                id="quiz-feedback"
                class=move || session.with(|s| s.feedback().map(|f| f.class()).unwrap_or("quiz-feedback"))
                style:display=move || if session.with(|s| s.feedback().is_some()) { "block" } else { "none" }
            >
                {move || session.with(|s| s.feedback().map(|f| f.message))}
            </div>

            <button
                id="quiz-next"
                class="quiz-next"
                style:display=move || if session.with(|s| s.next_visible()) { "block" } else { "none" }
                on:click=on_next
            >
                {move || session.with(|s| s.next_label())}
            </button>
        </div>
    }
}

/// A single answer button. Disabled for the whole question once any option is chosen.
#[component]
fn QuizOptionButton(session: RwSignal<QuizSession>, index: usize, option: AnswerOption) -> impl IntoView {
    let class = move || {
        let mark = session.with(|s| s.option_mark(index)).class();
        if mark.is_empty() {
            "quiz-option".to_string()
        } else {
            format!("quiz-option {}", mark)
        }
    };

    let on_click = move |_| {
        // A locked session rejects the selection and keeps its score
        session.update(|s| {
            if let Err(e) = s.select_answer(index) {
                leptos::logging::log!("Quiz option ignored: {}", e);
            }
        });
    };

    view! {
        <button
            class=class
            data-answer=if option.correct { "correct" } else { "wrong" }
            disabled=move || session.with(|s| s.options_locked())
            on:click=on_click
        >
            {option.text}
        </button>
    }
}
