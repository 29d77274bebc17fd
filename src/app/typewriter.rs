/// Delay before the first character appears, in seconds.
pub const START_DELAY: f64 = 1.0;

const TYPE_DELAY: f64 = 0.1;
const DELETE_DELAY: f64 = 0.05;
const HOLD_DELAY: f64 = 1.5;
const NEXT_PHRASE_DELAY: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Deleting,
}

/// The hero tagline effect: reveals a phrase character by character, holds it,
/// retracts it, then moves on to the next phrase, forever.
///
/// Each `tick` performs one step and returns the delay until the next one, so
/// the caller drives the whole automaton with a single rescheduled timer.
pub struct Typewriter {
    phrases: &'static [&'static str],
    phrase: usize,
    visible: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new(phrases: &'static [&'static str]) -> Self {
        debug_assert!(!phrases.is_empty());
        Self {
            phrases,
            phrase: 0,
            visible: 0,
            phase: Phase::Typing,
        }
    }

    fn current(&self) -> &'static str {
        self.phrases[self.phrase]
    }

    fn current_len(&self) -> usize {
        self.current().chars().count()
    }

    /// The currently revealed prefix of the active phrase.
    pub fn text(&self) -> String {
        self.current().chars().take(self.visible).collect()
    }

    /// Advance one step. Returns the delay in seconds until the next tick.
    pub fn tick(&mut self) -> f64 {
        match self.phase {
            Phase::Typing => self.visible += 1,
            Phase::Deleting => self.visible -= 1,
        }

        if self.phase == Phase::Typing && self.visible == self.current_len() {
            self.phase = Phase::Deleting;
            HOLD_DELAY
        } else if self.phase == Phase::Deleting && self.visible == 0 {
            self.phase = Phase::Typing;
            self.phrase = (self.phrase + 1) % self.phrases.len();
            NEXT_PHRASE_DELAY
        } else if self.phase == Phase::Deleting {
            DELETE_DELAY
        } else {
            TYPE_DELAY
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHRASES: &[&str] = &["abc", "de"];

    #[test]
    fn test_types_one_char_per_tick() {
        let mut tw = Typewriter::new(PHRASES);
        assert_eq!(tw.text(), "");

        assert_eq!(tw.tick(), TYPE_DELAY);
        assert_eq!(tw.text(), "a");
        assert_eq!(tw.tick(), TYPE_DELAY);
        assert_eq!(tw.text(), "ab");
    }

    #[test]
    fn test_holds_when_fully_typed_then_deletes_faster() {
        let mut tw = Typewriter::new(PHRASES);
        tw.tick();
        tw.tick();
        // Third tick completes "abc" and requests the hold pause
        assert_eq!(tw.tick(), HOLD_DELAY);
        assert_eq!(tw.text(), "abc");

        assert_eq!(tw.tick(), DELETE_DELAY);
        assert_eq!(tw.text(), "ab");
    }

    #[test]
    fn test_full_cycle_advances_phrase_by_one() {
        let mut tw = Typewriter::new(PHRASES);
        // Type "abc" (3), delete it (3); the last delete switches phrases
        for _ in 0..5 {
            tw.tick();
        }
        assert_eq!(tw.tick(), NEXT_PHRASE_DELAY);
        assert_eq!(tw.text(), "");

        tw.tick();
        assert_eq!(tw.text(), "d");
    }

    #[test]
    fn test_phrase_index_wraps() {
        let mut tw = Typewriter::new(PHRASES);
        // "abc": 6 ticks, "de": 4 ticks, back at phrase 0
        for _ in 0..10 {
            tw.tick();
        }
        tw.tick();
        assert_eq!(tw.text(), "a");
    }

    #[test]
    fn test_visible_count_stays_in_bounds() {
        let mut tw = Typewriter::new(PHRASES);
        for _ in 0..200 {
            tw.tick();
            let len = tw.current_len();
            assert!(tw.visible <= len, "revealed past the end of the phrase");
        }
    }

    #[test]
    fn test_multibyte_phrases_count_chars_not_bytes() {
        let mut tw = Typewriter::new(&["héllo"]);
        tw.tick();
        tw.tick();
        assert_eq!(tw.text(), "h\u{e9}");
    }
}
