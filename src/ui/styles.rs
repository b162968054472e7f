//! Stylesheet rendered with the page: disaster background variants,
//! the open mobile menu, focus outlines and reveal transitions.

use leptos::prelude::*;

const SITE_CSS: &str = r#"
:root {
    --primary-blue: #007aff;
    --spacing-lg: 1.5rem;
    --shadow-lg: 0 10px 30px rgba(0, 0, 0, 0.12);
}

.navbar {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 100;
    transition: background 0.3s ease, backdrop-filter 0.3s ease;
}

.hero {
    position: relative;
    overflow: hidden;
    min-height: 100vh;
}

.disaster-animation {
    position: absolute;
    inset: 0;
    z-index: -1;
    transition: background 1s ease;
}

.flood-animation {
    background: linear-gradient(45deg,
        rgba(0, 122, 255, 0.8) 0%,
        rgba(90, 200, 250, 0.6) 50%,
        rgba(52, 199, 89, 0.4) 100%);
    animation: floodWaves 6s ease-in-out infinite;
}

.earthquake-animation {
    background: linear-gradient(45deg,
        rgba(255, 149, 0, 0.8) 0%,
        rgba(255, 59, 48, 0.6) 50%,
        rgba(255, 214, 10, 0.4) 100%);
    animation: earthquakeShake 0.5s ease-in-out infinite;
}

.drought-animation {
    background: linear-gradient(45deg,
        rgba(255, 214, 10, 0.8) 0%,
        rgba(255, 149, 0, 0.6) 50%,
        rgba(255, 107, 107, 0.4) 100%);
    animation: droughtHeat 3s ease-in-out infinite;
}

.cyclone-animation {
    background: linear-gradient(45deg,
        rgba(142, 142, 147, 0.8) 0%,
        rgba(28, 28, 30, 0.6) 50%,
        rgba(0, 122, 255, 0.4) 100%);
    animation: cycloneSpin 4s linear infinite;
}

@keyframes floodWaves {
    0%, 100% { transform: translateY(0); }
    50% { transform: translateY(-8px); }
}

@keyframes earthquakeShake {
    0%, 100% { transform: translateX(0); }
    25% { transform: translateX(-2px) translateY(-1px); }
    75% { transform: translateX(2px) translateY(1px); }
}

@keyframes droughtHeat {
    0%, 100% { transform: scale(1); }
    50% { transform: scale(1.01); }
}

@keyframes cycloneSpin {
    0% { transform: rotate(0deg); }
    100% { transform: rotate(360deg); }
}

/* Reveal */
.section-header,
.first-aid-grid,
.disasters-grid,
.stats-grid,
.quiz-container,
.emergency-grid {
    opacity: 0;
    transform: translateY(30px);
    transition: opacity 0.8s ease, transform 0.8s ease;
}

.section-header.animate,
.first-aid-grid.animate,
.disasters-grid.animate,
.stats-grid.animate,
.quiz-container.animate,
.emergency-grid.animate {
    opacity: 1;
    transform: translateY(0);
}

.first-aid-card,
.disaster-card,
.stat-card,
.quiz-card,
.flashcards-container,
.emergency-card {
    opacity: 0;
    transform: translateY(20px);
    transition: opacity 0.6s ease, transform 0.6s ease;
}

.risk-fill {
    height: 100%;
    background: var(--primary-blue);
    transition: width 1.5s ease;
}

/* Quiz */
.quiz-option.correct {
    background: rgba(52, 199, 89, 0.15);
    border-color: #34c759;
}

.quiz-option.wrong {
    background: rgba(255, 59, 48, 0.15);
    border-color: #ff3b30;
}

.quiz-option:disabled {
    cursor: default;
}

/* Flashcards */
.flashcard {
    perspective: 1000px;
    cursor: pointer;
}

.flashcard-inner {
    position: relative;
    transition: transform 0.6s;
    transform-style: preserve-3d;
}

.flashcard.flipped .flashcard-inner {
    transform: rotateY(180deg);
}

.flashcard-front,
.flashcard-back {
    backface-visibility: hidden;
}

.flashcard-back {
    position: absolute;
    inset: 0;
    transform: rotateY(180deg);
}

/* Mobile navigation */
.nav-links.active {
    display: flex;
    flex-direction: column;
    position: absolute;
    top: 100%;
    left: 0;
    right: 0;
    background: rgba(255, 255, 255, 0.98);
    backdrop-filter: blur(25px);
    padding: var(--spacing-lg);
    box-shadow: var(--shadow-lg);
    border-top: 1px solid rgba(0, 0, 0, 0.1);
}

.nav-toggle.active span:nth-child(1) {
    transform: rotate(45deg) translate(5px, 5px);
}

.nav-toggle.active span:nth-child(2) {
    opacity: 0;
}

.nav-toggle.active span:nth-child(3) {
    transform: rotate(-45deg) translate(7px, -6px);
}

/* Focus outlines */
.quiz-option:focus,
.flashcard:focus {
    outline: 2px solid var(--primary-blue);
    outline-offset: 2px;
}

.success-animation {
    animation: successPulse 0.6s ease-out;
}

@keyframes successPulse {
    0% { transform: scale(1); }
    50% { transform: scale(1.05); }
    100% { transform: scale(1); }
}

.hidden {
    display: none;
}
"#;

/// Page stylesheet; lives and dies with the page component
#[component]
pub fn SiteStyles() -> impl IntoView {
    view! { <style>{SITE_CSS}</style> }
}
