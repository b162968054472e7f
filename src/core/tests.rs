#[cfg(test)]
mod tests {
    use crate::core::counter::CounterAnimation;
    use crate::core::cycler::{AnimationCycle, DISASTER_VARIANTS};
    use crate::core::quiz::{
        AnswerOption, OptionMark, Question, QuizError, QuizPhase, QuizSession, default_question_bank,
    };
    use crate::core::reveal::{RevealKind, RevealTracker};
    use crate::core::settings::PageSettings;

    fn correct_index(question: &Question) -> usize {
        question.options.iter().position(|o| o.correct).unwrap()
    }

    fn wrong_index(question: &Question) -> usize {
        question.options.iter().position(|o| !o.correct).unwrap()
    }

    /// Answer the current question right or wrong and move on
    fn answer(session: &mut QuizSession, right: bool) {
        let question = session.current_question().unwrap().clone();
        let option = if right {
            correct_index(&question)
        } else {
            wrong_index(&question)
        };
        session.select_answer(option).unwrap();
        session.next_question().unwrap();
    }

    #[test]
    fn test_bundled_quiz_three_of_four() {
        let mut session = QuizSession::new(default_question_bank().unwrap());

        for right in [true, false, true, true] {
            answer(&mut session, right);
        }

        assert_eq!(session.phase(), QuizPhase::Results);
        let summary = session.summary().unwrap();
        assert_eq!(summary.score, 3);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.percentage, 75);
        assert_eq!(summary.detail(), "You scored 3 out of 4 (75%)");
    }

    #[test]
    fn test_score_never_exceeds_answered() {
        let bank = default_question_bank().unwrap();
        let patterns: [[bool; 4]; 4] = [
            [false, false, false, false],
            [true, true, true, true],
            [true, false, false, true],
            [false, true, true, false],
        ];

        for pattern in patterns {
            let mut session = QuizSession::new(bank.clone());
            let mut expected = 0;
            for (answered, right) in pattern.into_iter().enumerate() {
                let before = session.score();
                answer(&mut session, right);
                if right {
                    expected += 1;
                    assert_eq!(session.score(), before + 1);
                } else {
                    assert_eq!(session.score(), before);
                }
                assert!(session.score() <= answered + 1);
            }
            assert_eq!(session.score(), expected);
            assert_eq!(
                session.summary().unwrap().percentage,
                (expected * 100 / 4) as u32
            );
        }
    }

    #[test]
    fn test_selection_locks_every_option() {
        let mut session = QuizSession::new(default_question_bank().unwrap());
        let question = session.current_question().unwrap().clone();
        let wrong = wrong_index(&question);

        session.select_answer(wrong).unwrap();

        assert!(session.options_locked());
        for option in 0..question.options.len() {
            assert_eq!(session.select_answer(option), Err(QuizError::AnswerLocked));
        }
        assert_eq!(session.option_mark(correct_index(&question)), OptionMark::Correct);
        assert_eq!(session.option_mark(wrong), OptionMark::Wrong);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_restart_after_results_reuses_questions() {
        let mut session = QuizSession::new(default_question_bank().unwrap());
        for _ in 0..4 {
            answer(&mut session, true);
        }
        assert_eq!(session.summary().unwrap().percentage, 100);

        session.advance().unwrap();
        assert_eq!(session.phase(), QuizPhase::AwaitingAnswer { index: 0 });
        assert_eq!(session.score(), 0);
        assert_eq!(
            session.current_question().unwrap().prompt,
            "What should you do if you're caught in a flood?"
        );
    }

    #[test]
    fn test_question_without_correct_option_never_scores() {
        let question = Question::new(
            "unscored",
            vec![AnswerOption::new("a", false), AnswerOption::new("b", false)],
        );
        let mut session = QuizSession::new(vec![question]);
        session.select_answer(0).unwrap();
        assert_eq!(session.score(), 0);
        assert_eq!(session.option_mark(0), OptionMark::Wrong);
        assert_eq!(session.option_mark(1), OptionMark::Unmarked);
    }

    #[test]
    fn test_counter_with_default_settings() {
        let settings = PageSettings::default();
        let mut counter = CounterAnimation::new(12000, settings.counter_duration_ms, settings.counter_tick_ms);
        let mut ticks = 0u32;
        while !counter.tick() {
            ticks += 1;
        }
        assert_eq!(counter.display(), "12,000");
        // ~2 seconds of 16 ms ticks
        assert!((ticks + 1) * settings.counter_tick_ms >= 1990);
        assert!((ticks + 1) * settings.counter_tick_ms <= 2020);
    }

    #[test]
    fn test_stats_reveal_triggers_once() {
        let settings = PageSettings::default();
        let mut tracker = RevealTracker::new(settings.stagger_step_ms);
        let kind = RevealKind::from_classes(["stats-grid"]);

        let first = tracker.on_visible(3u32, kind, 4).unwrap();
        assert!(first.start_statistics());
        assert_eq!(first.child_delays_ms, [0, 100, 200, 300]);

        for _ in 0..3 {
            assert!(tracker.on_visible(3u32, kind, 4).is_none());
        }
    }

    #[test]
    fn test_cycle_sequence_of_switch_delays() {
        let mut cycle = AnimationCycle::disaster();
        let mut elapsed = 0u32;
        let mut schedule = Vec::new();
        for _ in 0..DISASTER_VARIANTS.len() + 1 {
            let variant = cycle.advance().unwrap();
            schedule.push((elapsed, variant.class_name));
            elapsed += variant.duration_ms;
        }
        assert_eq!(
            schedule,
            [
                (0, "flood-animation"),
                (10_000, "earthquake-animation"),
                (18_000, "drought-animation"),
                (30_000, "cyclone-animation"),
                (39_000, "flood-animation"),
            ]
        );
    }
}
