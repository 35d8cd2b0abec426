//! Typewriter Effect
//!
//! Types a word out, pauses, deletes it, then moves to the next word, looping.

pub const TYPE_MS: u32 = 100;
pub const DELETE_MS: u32 = 50;
pub const PAUSE_MS: u32 = 1500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Deleting,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    words: Vec<Vec<char>>,
    word: usize,
    shown: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new(words: &[String]) -> Self {
        Self {
            words: words.iter().map(|w| w.chars().collect()).collect(),
            word: 0,
            shown: 0,
            phase: Phase::Typing,
        }
    }

    /// Visible text
    pub fn text(&self) -> String {
        self.words
            .get(self.word)
            .map(|w| w[..self.shown].iter().collect())
            .unwrap_or_default()
    }

    /// Advance one keystroke. Returns the delay before the next one, in ms.
    pub fn step(&mut self) -> u32 {
        let Some(len) = self.words.get(self.word).map(Vec::len) else {
            return PAUSE_MS;
        };

        match self.phase {
            Phase::Typing => {
                if self.shown < len {
                    self.shown += 1;
                }
                if self.shown >= len {
                    self.phase = Phase::Deleting;
                    PAUSE_MS
                } else {
                    TYPE_MS
                }
            }
            Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.word = (self.word + 1) % self.words.len();
                    self.phase = Phase::Typing;
                    TYPE_MS
                } else {
                    DELETE_MS
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_types_pauses_and_deletes() {
        let mut tw = Typewriter::new(&words(&["Hi", "Yo"]));
        assert_eq!(tw.text(), "");

        assert_eq!(tw.step(), TYPE_MS);
        assert_eq!(tw.text(), "H");
        assert_eq!(tw.step(), PAUSE_MS);
        assert_eq!(tw.text(), "Hi");

        assert_eq!(tw.step(), DELETE_MS);
        assert_eq!(tw.text(), "H");
        assert_eq!(tw.step(), TYPE_MS);
        assert_eq!(tw.text(), "");

        tw.step();
        assert_eq!(tw.text(), "Y");
    }

    #[test]
    fn test_wraps_to_first_word() {
        let mut tw = Typewriter::new(&words(&["ab", "c"]));
        let mut seen = Vec::new();
        for _ in 0..12 {
            tw.step();
            let text = tw.text();
            if !text.is_empty() && !seen.contains(&text) {
                seen.push(text);
            }
        }
        assert_eq!(seen, vec!["a".to_string(), "ab".to_string(), "c".to_string()]);
        // One full cycle is 6 keystrokes, so 12 lands back at the start
        assert_eq!(tw.text(), "");
        tw.step();
        assert_eq!(tw.text(), "a");
    }

    #[test]
    fn test_multibyte_words() {
        let mut tw = Typewriter::new(&words(&["é•"]));
        tw.step();
        assert_eq!(tw.text(), "é");
        tw.step();
        assert_eq!(tw.text(), "é•");
    }

    #[test]
    fn test_no_words_is_inert() {
        let mut tw = Typewriter::new(&[]);
        assert_eq!(tw.step(), PAUSE_MS);
        assert_eq!(tw.text(), "");
    }
}
