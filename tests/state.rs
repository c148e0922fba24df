mod tests {
    use std::thread;

    use waste_signal::schedule::{Category, CategorySet};
    use waste_signal::{AnimationState, DisplayIntent};

    fn intent_for(i: usize) -> DisplayIntent {
        let set: CategorySet = Category::COLLECTIONS
            .iter()
            .enumerate()
            .filter(|(bit, _)| i & (1usize << *bit) != 0)
            .map(|(_, c)| *c)
            .collect();
        match i % 4 {
            0 => DisplayIntent::UpcomingCollection(set),
            1 => DisplayIntent::TodayOrTomorrowCollection(set),
            2 => DisplayIntent::HolidayThenCollection(set),
            _ => DisplayIntent::Processing,
        }
    }

    #[test]
    fn test_starts_idle() {
        let state = AnimationState::new();
        assert_eq!(state.get(), DisplayIntent::Idle);
    }

    #[test]
    fn test_last_write_wins() {
        let state = AnimationState::new();
        state.set(DisplayIntent::Processing);
        state.set(DisplayIntent::ErrorFallback);
        state.set(DisplayIntent::HolidayOnly);
        assert_eq!(state.get(), DisplayIntent::HolidayOnly);
        assert_eq!(state.get(), DisplayIntent::HolidayOnly);
    }

    #[test]
    fn test_concurrent_reads_never_tear() {
        static STATE: AnimationState = AnimationState::new();
        const WRITES: usize = 10_000;

        // intent_for repeats every 8 values
        let valid: Vec<DisplayIntent> = (0..8).map(intent_for).collect();

        let writer = thread::spawn(|| {
            for i in 0..WRITES {
                STATE.set(intent_for(i));
            }
        });

        let reader = thread::spawn(move || {
            for _ in 0..WRITES {
                let seen = STATE.get();
                assert!(seen == DisplayIntent::Idle || valid.contains(&seen));
            }
        });

        writer.join().unwrap();
        reader.join().unwrap();
        assert_eq!(STATE.get(), intent_for(WRITES - 1));
    }
}
