//! Secret-sequence detection.
//!
//! Rolling buffer of the most recent key names, bounded to the target length;
//! every appended key is followed by one exact-order comparison. Stale
//! partial matches never expire; they are simply overwritten.

use std::collections::VecDeque;

pub(super) struct SequenceDetector {
    target: &'static [&'static str],
    recent: VecDeque<String>,
}

impl SequenceDetector {
    pub(super) fn new(target: &'static [&'static str]) -> Self {
        Self {
            target,
            recent: VecDeque::with_capacity(target.len() + 1),
        }
    }

    /// Feed one key. True exactly when the latest keys equal the target; the
    /// buffer resets on a match.
    pub(super) fn observe(&mut self, key: &str) -> bool {
        self.recent.push_back(key.to_owned());
        while self.recent.len() > self.target.len() {
            self.recent.pop_front();
        }
        let matched = self.recent.len() == self.target.len()
            && self
                .recent
                .iter()
                .zip(self.target.iter())
                .all(|(got, want)| got.as_str() == *want);
        if matched {
            self.recent.clear();
        }
        matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TARGET: &[&str] = &[
        "ArrowUp",
        "ArrowUp",
        "ArrowDown",
        "ArrowDown",
        "ArrowLeft",
        "ArrowRight",
        "ArrowLeft",
        "ArrowRight",
        "b",
        "a",
    ];

    fn feed(det: &mut SequenceDetector, keys: &[&str]) -> usize {
        keys.iter().filter(|k| det.observe(k)).count()
    }

    #[test]
    fn exact_sequence_matches_once() {
        let mut det = SequenceDetector::new(TARGET);
        assert_eq!(feed(&mut det, TARGET), 1);
    }

    #[test]
    fn noise_prefix_still_matches() {
        let mut det = SequenceDetector::new(TARGET);
        assert_eq!(feed(&mut det, &["x", "y", "Enter"]), 0);
        assert_eq!(feed(&mut det, TARGET), 1);
    }

    #[test]
    fn wrong_key_midway_requires_restart() {
        let mut det = SequenceDetector::new(TARGET);
        assert_eq!(feed(&mut det, &TARGET[..6]), 0);
        assert!(!det.observe("q"));
        // the tail is now polluted; only a full fresh run matches
        assert_eq!(feed(&mut det, TARGET), 1);
    }

    #[test]
    fn buffer_resets_after_match() {
        let mut det = SequenceDetector::new(TARGET);
        feed(&mut det, TARGET);
        assert!(det.recent.is_empty());
        // the closing keys alone must not re-trigger
        assert_eq!(feed(&mut det, &["b", "a"]), 0);
        assert_eq!(feed(&mut det, TARGET), 1);
    }

    #[test]
    fn buffer_never_exceeds_target_length() {
        let mut det = SequenceDetector::new(TARGET);
        for _ in 0..25 {
            det.observe("ArrowUp");
        }
        assert_eq!(det.recent.len(), TARGET.len());
    }

    #[test]
    fn repeated_secret_triggers_each_time() {
        let mut det = SequenceDetector::new(TARGET);
        assert_eq!(feed(&mut det, TARGET), 1);
        assert_eq!(feed(&mut det, TARGET), 1);
    }
}
