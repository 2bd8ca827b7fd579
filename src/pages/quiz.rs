//! Quiz page: options rendered with Leptos into the existing container.

use std::rc::Rc;

use leptos::mount::mount_to;
use leptos::prelude::*;
use web_sys::{Document, HtmlButtonElement, HtmlElement};

use super::dom::{listen, require};
use crate::config::{QUIZ_CONTAINER_ID, QUIZ_NEXT_ID};
use crate::controllers::{NextPolicy, QuizController, QuizSnapshot};
use crate::error::AppResult;
use crate::models::quiz_questions;
use crate::platform::Timer;

pub fn attach(doc: &Document, timer: Rc<dyn Timer>) -> AppResult<()> {
    let container: HtmlElement = require(doc, QUIZ_CONTAINER_ID)?;
    let next: HtmlButtonElement = require(doc, QUIZ_NEXT_ID)?;
    let Some(quiz) = QuizController::new(quiz_questions(), NextPolicy::default(), timer) else {
        return Ok(());
    };

    let snapshot = RwSignal::new(quiz.snapshot());
    next.set_disabled(!quiz.next_enabled());
    {
        let next = next.clone();
        quiz.on_change(move |snap| {
            next.set_disabled(!snap.next_enabled);
            snapshot.set(snap.clone());
        });
    }
    {
        let quiz = quiz.clone();
        listen(&next, "click", move |_| quiz.next());
    }

    container.set_inner_html("");
    mount_to(container, move || quiz_view(snapshot.read_only(), quiz)).forget();
    Ok(())
}

fn option_class(mark_class: &str) -> String {
    if mark_class.is_empty() {
        "btn opcao".to_string()
    } else {
        format!("btn opcao {}", mark_class)
    }
}

fn quiz_view(snapshot: ReadSignal<QuizSnapshot>, quiz: QuizController) -> impl IntoView {
    let quiz = StoredValue::new_local(quiz);

    view! {
        <h3>{move || snapshot.with(|s| s.prompt.clone())}</h3>
        <div class="opcoes-container">
            {move || {
                let snap = snapshot.get();
                let locked = snap.locked;
                snap.options
                    .into_iter()
                    .enumerate()
                    .map(|(i, (label, mark))| {
                        view! {
                            <button
                                class=option_class(mark.css_class())
                                data-index=i.to_string()
                                disabled=locked
                                on:click=move |_| quiz.with_value(|q| q.select(i))
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_class() {
        assert_eq!(option_class(""), "btn opcao");
        assert_eq!(option_class("correta"), "btn opcao correta");
    }
}
