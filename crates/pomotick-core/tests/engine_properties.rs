//! Property tests for the timer engine.

use pomotick_core::{Cadence, Direction, Durations, Event, Mode, TimerEngine};
use proptest::prelude::*;

fn any_mode() -> impl Strategy<Value = Mode> {
    prop_oneof![
        Just(Mode::Focus),
        Just(Mode::ShortBreak),
        Just(Mode::LongBreak)
    ]
}

fn finish_interval(engine: &mut TimerEngine) -> Event {
    engine.start();
    loop {
        if let Some(event) = engine.tick() {
            return event;
        }
    }
}

proptest! {
    #[test]
    fn decrements_floor_at_one_minute(mode in any_mode(), initial in 1u32..60, extra in 0u32..20) {
        let mut durations = Durations::default();
        while durations.minutes(mode) < initial {
            durations.adjust(mode, Direction::Increment);
        }
        while durations.minutes(mode) > initial {
            durations.adjust(mode, Direction::Decrement);
        }
        let mut engine = TimerEngine::with_durations(durations);

        for n in 1..initial {
            prop_assert!(engine.change_duration(mode, Direction::Decrement).is_some());
            prop_assert_eq!(engine.durations().minutes(mode), initial - n);
        }
        for _ in 0..extra {
            prop_assert!(engine.change_duration(mode, Direction::Decrement).is_none());
        }
        prop_assert_eq!(engine.durations().minutes(mode), 1);
    }

    #[test]
    fn running_ticks_decrease_by_exactly_one(minutes in 1u32..5, ticks in 0u64..240) {
        let mut engine = TimerEngine::with_durations(Durations::new(minutes, 1, 1));
        engine.start();
        let ticks = ticks.min(engine.remaining_secs());
        for _ in 0..ticks {
            let before = engine.remaining_secs();
            prop_assert!(engine.tick().is_none());
            prop_assert_eq!(engine.remaining_secs(), before - 1);
        }
    }

    #[test]
    fn paused_ticks_never_move(minutes in 1u32..5, elapsed in 0u64..60, ticks in 1usize..50) {
        let mut engine = TimerEngine::with_durations(Durations::new(minutes, 1, 1));
        engine.start();
        for _ in 0..elapsed {
            engine.tick();
        }
        engine.pause();
        let frozen = engine.remaining_secs();
        for _ in 0..ticks {
            prop_assert!(engine.tick().is_none());
        }
        prop_assert_eq!(engine.remaining_secs(), frozen);
    }

    #[test]
    fn pause_is_idempotent(elapsed in 0u64..100) {
        let mut engine = TimerEngine::new();
        engine.start();
        for _ in 0..elapsed {
            engine.tick();
        }
        engine.pause();
        let once = engine.snapshot();
        prop_assert!(engine.pause().is_none());
        let twice = engine.snapshot();
        match (once, twice) {
            (
                Event::StateSnapshot { remaining_secs: a, running: ra, mode: ma, .. },
                Event::StateSnapshot { remaining_secs: b, running: rb, mode: mb, .. },
            ) => {
                prop_assert_eq!(a, b);
                prop_assert_eq!(ra, rb);
                prop_assert_eq!(ma, mb);
            }
            _ => prop_assert!(false, "snapshot must be a StateSnapshot"),
        }
    }

    #[test]
    fn breaks_always_lead_back_to_focus(intervals in 1usize..12) {
        let mut engine = TimerEngine::with_durations(Durations::new(1, 1, 1));
        for _ in 0..intervals {
            let was = engine.mode();
            finish_interval(&mut engine);
            if was.is_break() {
                prop_assert_eq!(engine.mode(), Mode::Focus);
            } else {
                let expected = if engine.completed_focus_count() % 4 == 0 {
                    Mode::LongBreak
                } else {
                    Mode::ShortBreak
                };
                prop_assert_eq!(engine.mode(), expected);
            }
            prop_assert!(!engine.is_running());
            prop_assert_eq!(engine.remaining_secs(), engine.total_secs());
        }
    }
}

#[test]
fn third_completed_focus_then_one_more_gives_long_break() {
    let mut engine = TimerEngine::with_durations(Durations::new(1, 1, 1));
    for _ in 0..3 {
        finish_interval(&mut engine);
        finish_interval(&mut engine);
    }
    assert_eq!(engine.mode(), Mode::Focus);
    assert_eq!(engine.completed_focus_count(), 3);

    let event = finish_interval(&mut engine);
    assert!(matches!(
        event,
        Event::IntervalCompleted {
            next: Mode::LongBreak,
            completed_focus_count: 4,
            ..
        }
    ));
}

#[test]
fn legacy_alternation_is_a_separate_cadence() {
    let mut classic = TimerEngine::with_durations(Durations::new(1, 1, 1));
    let mut legacy = TimerEngine::with_cadence(Durations::new(1, 1, 1), Cadence::Alternating);
    let mut classic_modes = Vec::new();
    let mut legacy_modes = Vec::new();
    for _ in 0..8 {
        finish_interval(&mut classic);
        finish_interval(&mut legacy);
        classic_modes.push(classic.mode());
        legacy_modes.push(legacy.mode());
    }
    assert!(classic_modes.contains(&Mode::LongBreak));
    assert!(!legacy_modes.contains(&Mode::LongBreak));
}
