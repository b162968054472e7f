//! Home page
//!
//! The whole site is this one page: hero, disaster cards, first aid,
//! statistics, quiz with flashcards and emergency contacts. Interactive
//! parts start after hydration and stop when the page is unmounted.

use leptos::prelude::*;

use crate::ui::context::provide_stats_trigger;
use crate::ui::hero::HeroBanner;
use crate::ui::nav::NavBar;
use crate::ui::reveal::RevealObserver;
use crate::ui::sections::{
    DisastersSection, EmergencySection, FirstAidSection, Footer, QuizSection, StatisticsSection,
};
use crate::ui::styles::SiteStyles;

#[component]
pub fn HomePage(#[prop(into)] title: String) -> impl IntoView {
    provide_stats_trigger();

    view! {
        <SiteStyles />
        <NavBar title=title.clone() />
        <main>
            <HeroBanner title=title.clone() />
            <DisastersSection />
            <FirstAidSection />
            <StatisticsSection />
            <QuizSection />
            <EmergencySection />
        </main>
        <Footer title=title />

        // Must come after the sections it observes
        <RevealObserver />
    }
}
