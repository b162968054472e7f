//! Click-to-flip flashcards

use leptos::prelude::*;

use crate::core::flashcards::{Flashcard, FlipState};
use crate::ui::context::use_page_settings;

#[component]
pub fn FlashcardTile(card: Flashcard) -> impl IntoView {
    let state = RwSignal::new(FlipState::default());
    let vibration_ms = use_page_settings().vibration_ms;

    let on_click = move |_| {
        state.update(FlipState::toggle);

        #[cfg(not(feature = "ssr"))]
        crate::ui::dom::vibrate(vibration_ms);
        #[cfg(feature = "ssr")]
        let _ = vibration_ms;
    };

    view! {
        <div
            class=move || state.get().class_attr()
            tabindex="0"
            role="button"
            aria-pressed=move || state.get().is_flipped().to_string()
            on:click=on_click
        >
            <div class="flashcard-inner">
                <div class="flashcard-front">
                    <p>{card.front}</p>
                </div>
                <div class="flashcard-back">
                    <p>{card.back}</p>
                </div>
            </div>
        </div>
    }
}

/// All flashcards, each flipping independently
#[component]
pub fn FlashcardDeck(cards: &'static [Flashcard]) -> impl IntoView {
    view! {
        <div id="flashcards" class="flashcards-container">
            <h3 class="flashcards-title">"Quick Revision"</h3>
            <div class="flashcards-grid">
                {cards
                    .iter()
                    .map(|card| view! { <FlashcardTile card=*card /> })
                    .collect_view()}
            </div>
        </div>
    }
}
