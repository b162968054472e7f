//! Content sections of the home page

use leptos::prelude::*;

use crate::core::content::{
    DISASTERS, EMERGENCY_CONTACTS, EmergencyContact, FIRST_AID, InfoCard, RISK_LEVELS, STATISTICS,
};
use crate::core::flashcards::FLASHCARDS;
use crate::core::quiz::default_question_bank;
use crate::ui::flashcards::FlashcardDeck;
use crate::ui::quiz::QuizWidget;
use crate::ui::stats::{RiskBar, StatCounter};

/// Title block observed by the reveal watcher
#[component]
fn SectionHeader(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="section-header">
            <h2 class="section-title">{title}</h2>
            <p class="section-subtitle">{subtitle}</p>
        </div>
    }
}

#[component]
fn InfoCardView(card: InfoCard, class: &'static str) -> impl IntoView {
    view! {
        <div class=class>
            <div class="card-icon" aria-hidden="true">{card.icon}</div>
            <h3>{card.title}</h3>
            <p>{card.body}</p>
        </div>
    }
}

#[component]
pub fn DisastersSection() -> impl IntoView {
    view! {
        <section id="disasters" class="section">
            <SectionHeader
                title="Know Your Disasters"
                subtitle="What to expect and the first thing to do."
            />
            <div class="disasters-grid">
                {DISASTERS
                    .iter()
                    .map(|card| view! { <InfoCardView card=*card class="disaster-card" /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn FirstAidSection() -> impl IntoView {
    view! {
        <section id="first-aid" class="section section-alt">
            <SectionHeader
                title="First Aid Essentials"
                subtitle="Simple steps that save lives before help arrives."
            />
            <div class="first-aid-grid">
                {FIRST_AID
                    .iter()
                    .map(|card| view! { <InfoCardView card=*card class="first-aid-card" /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn StatisticsSection() -> impl IntoView {
    view! {
        <section id="statistics" class="section">
            <SectionHeader
                title="By the Numbers"
                subtitle="Why preparation matters."
            />
            <div class="stats-grid">
                {STATISTICS
                    .iter()
                    .map(|stat| view! { <StatCounter stat=*stat /> })
                    .collect_view()}
            </div>
            <div class="risk-levels">
                {RISK_LEVELS
                    .iter()
                    .map(|level| view! { <RiskBar level=*level /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn QuizSection() -> impl IntoView {
    let quiz = match default_question_bank() {
        Ok(questions) => view! { <QuizWidget questions=questions /> }.into_any(),
        Err(e) => {
            leptos::logging::warn!("Quiz unavailable: {}", e);
            view! {
                <div class="quiz-card">
                    <p>"The quiz could not be loaded."</p>
                </div>
            }
            .into_any()
        }
    };

    view! {
        <section id="quiz" class="section section-alt">
            <SectionHeader
                title="Test Your Knowledge"
                subtitle="Four questions. One answer each. No second chances."
            />
            <div class="quiz-container">
                {quiz}
                <FlashcardDeck cards=&FLASHCARDS />
            </div>
        </section>
    }
}

#[component]
fn EmergencyCard(contact: EmergencyContact) -> impl IntoView {
    view! {
        <div class="emergency-card">
            <h3>{contact.service}</h3>
            <a class="emergency-number" href=format!("tel:{}", contact.number)>
                {contact.number}
            </a>
        </div>
    }
}

#[component]
pub fn EmergencySection() -> impl IntoView {
    view! {
        <section id="emergency" class="section">
            <SectionHeader
                title="Emergency Contacts"
                subtitle="Save these numbers before you need them."
            />
            <div class="emergency-grid">
                {EMERGENCY_CONTACTS
                    .iter()
                    .map(|contact| view! { <EmergencyCard contact=*contact /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn Footer(#[prop(into)] title: String) -> impl IntoView {
    view! {
        <footer class="footer">
            <p>{title}" · Stay informed, stay safe."</p>
        </footer>
    }
}
