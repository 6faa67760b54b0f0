use super::*;
use proptest::prelude::*;

fn any_speed() -> impl Strategy<Value = Speed> {
    prop::sample::select(Speed::ALL.to_vec())
}

/// Collect every snapshot until the engine finishes.
fn run(engine: &mut TypewriterEngine) -> Vec<String> {
    let mut frames = Vec::new();
    loop {
        let snapshot = engine.advance();
        frames.push(snapshot.revealed.to_string());
        if snapshot.finished {
            return frames;
        }
        assert!(frames.len() < 100_000, "engine never finished");
    }
}

// Property: plain text reveals one character every `divisor` ticks
proptest! {
    #[test]
    fn prop_plain_text_rate(message in "[a-zA-Z0-9!?,]{1,24}", speed in any_speed()) {
        let mut engine = TypewriterEngine::new(message.clone(), speed);
        let divisor = speed.divisor() as usize;
        let total = message.len() * divisor;

        for tick in 1..total {
            let snapshot = engine.advance();
            prop_assert!(!snapshot.finished);
            prop_assert_eq!(snapshot.revealed, &message[..tick / divisor]);
        }

        let last = engine.advance();
        prop_assert!(last.finished);
        prop_assert_eq!(last.revealed, message.as_str());
    }
}

// Property: pause markers are never shown, everything else is
proptest! {
    #[test]
    fn prop_markers_stripped(message in "[ab #.]{0,30}", speed in any_speed()) {
        let mut engine = TypewriterEngine::with_sentence_pause(message.clone(), speed, 2);
        let frames = run(&mut engine);

        for frame in &frames {
            prop_assert!(!frame.contains('#'));
        }
        prop_assert_eq!(engine.revealed(), message.replace('#', ""));
        prop_assert_eq!(engine.cursor(), engine.len());
    }
}

// Property: each revealed frame extends the previous one
proptest! {
    #[test]
    fn prop_revealed_grows_monotonically(message in "[ab #.]{0,30}", speed in any_speed()) {
        let mut engine = TypewriterEngine::with_sentence_pause(message, speed, 3);
        let frames = run(&mut engine);

        for pair in frames.windows(2) {
            prop_assert!(pair[1].starts_with(pair[0].as_str()));
        }
    }
}

// Property: K pause markers delay the next character by K gated ticks
proptest! {
    #[test]
    fn prop_marker_costs_one_slot(markers in 0usize..8, speed in any_speed()) {
        let message = format!("a{}b", "#".repeat(markers));
        let mut engine = TypewriterEngine::new(message, speed);
        let frames = run(&mut engine);

        prop_assert_eq!(frames.len(), (2 + markers) * speed.divisor() as usize);
        prop_assert_eq!(engine.revealed(), "ab");
    }
}

// Property: a run of spaces lands within a single advance
proptest! {
    #[test]
    fn prop_space_run_in_one_call(spaces in 1usize..10, speed in any_speed()) {
        let message = format!("a{}b", " ".repeat(spaces));
        let mut engine = TypewriterEngine::new(message, speed);

        for _ in 0..speed.divisor() {
            engine.advance();
        }
        prop_assert_eq!(engine.revealed(), "a");

        let expected = format!("a{}", " ".repeat(spaces));
        let snapshot = engine.advance();
        prop_assert!(snapshot.revealed.starts_with(expected.as_str()));
    }
}

// Property: a sentence-ending period holds for exactly the pause length
proptest! {
    #[test]
    fn prop_sentence_pause_length(pause in 0u32..12, speed in any_speed()) {
        let mut engine = TypewriterEngine::with_sentence_pause("a.", speed, pause);
        let frames = run(&mut engine);

        // "a", the period, then `pause` held slots.
        let slots = 2 + pause as usize;
        prop_assert_eq!(frames.len(), slots * speed.divisor() as usize);
        prop_assert_eq!(engine.revealed(), "a.");
    }
}

// Property: advancing a finished engine changes nothing
proptest! {
    #[test]
    fn prop_finished_is_idempotent(message in "[ab #.]{0,20}", extra in 1usize..10) {
        let mut engine = TypewriterEngine::with_sentence_pause(message, Speed::VeryFast, 1);
        run(&mut engine);
        let revealed = engine.revealed().to_string();
        let ticks = engine.tick_count();

        for _ in 0..extra {
            let snapshot = engine.advance();
            prop_assert!(snapshot.finished);
            prop_assert_eq!(snapshot.revealed, revealed.as_str());
        }
        prop_assert_eq!(engine.tick_count(), ticks);
    }
}

// Property: reset replays exactly like a fresh engine
proptest! {
    #[test]
    fn prop_reset_replays(message in "[ab #.]{0,20}", speed in any_speed(), partial in 0usize..15) {
        let mut fresh = TypewriterEngine::with_sentence_pause(message.clone(), speed, 2);
        let expected = run(&mut fresh);

        let mut reused = TypewriterEngine::with_sentence_pause("something else. entirely", Speed::Fast, 2);
        for _ in 0..partial {
            reused.advance();
        }
        reused.reset(message, speed);

        prop_assert_eq!(run(&mut reused), expected);
    }
}
