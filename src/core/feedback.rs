//! Per-letter feedback for finalized rows
//!
//! Each letter of a submitted row is tagged with one of three categories:
//! - Correct (letter sits at the same position in the target)
//! - Present (letter occurs somewhere else in the target)
//! - Absent (letter does not occur in the target)
//!
//! Scoring is deliberately position-local: every occurrence of a letter is
//! judged on its own, so a guess with two copies of a letter that appears
//! once in the target marks both copies as Present.

use super::Word;
use super::word::WORD_LENGTH;

/// Feedback category for a single letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterFeedback {
    Correct,
    Present,
    Absent,
}

impl LetterFeedback {
    /// Evaluate the letter at `position` of a finalized row against `target`
    ///
    /// # Examples
    /// ```
    /// use skole_wordle::core::{LetterFeedback, Word};
    ///
    /// let target = Word::new("skole").unwrap();
    /// assert_eq!(LetterFeedback::evaluate(b'K', 1, &target), LetterFeedback::Correct);
    /// assert_eq!(LetterFeedback::evaluate(b'E', 0, &target), LetterFeedback::Present);
    /// assert_eq!(LetterFeedback::evaluate(b'Z', 2, &target), LetterFeedback::Absent);
    /// ```
    #[must_use]
    pub fn evaluate(letter: u8, position: usize, target: &Word) -> Self {
        if position < WORD_LENGTH && target.char_at(position) == letter {
            Self::Correct
        } else if target.has_letter(letter) {
            Self::Present
        } else {
            Self::Absent
        }
    }

    /// Emoji square used in the end-of-game summary
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback for every letter of one finalized row
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<LetterFeedback>);

impl Feedback {
    /// Tag each letter of `row` against `target`
    ///
    /// # Examples
    /// ```
    /// use skole_wordle::core::{Feedback, Word};
    ///
    /// let target = Word::new("skole").unwrap();
    /// let feedback = Feedback::calculate("EKOLS", &target);
    ///
    /// // E(present) K(correct) O(correct) L(correct) S(present)
    /// assert_eq!(feedback.to_emoji(), "🟨🟩🟩🟩🟨");
    /// ```
    #[must_use]
    pub fn calculate(row: &str, target: &Word) -> Self {
        Self(
            row.bytes()
                .enumerate()
                .map(|(i, letter)| LetterFeedback::evaluate(letter, i, target))
                .collect(),
        )
    }

    /// Tags in row order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[LetterFeedback] {
        &self.0
    }

    /// Check if every letter is in its correct position
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.0.len() == WORD_LENGTH && self.count_correct() == WORD_LENGTH
    }

    /// Count the number of correct letters
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count(LetterFeedback::Correct)
    }

    /// Count the number of present-but-misplaced letters
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(LetterFeedback::Present)
    }

    fn count(&self, kind: LetterFeedback) -> usize {
        self.0.iter().filter(|&&f| f == kind).count()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|f| f.emoji()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterFeedback::{Absent, Correct, Present};

    fn skole() -> Word {
        Word::new("SKOLE").unwrap()
    }

    #[test]
    fn exact_guess_is_all_correct() {
        let feedback = Feedback::calculate("SKOLE", &skole());

        assert_eq!(feedback.letters(), &[Correct; 5]);
        assert!(feedback.is_perfect());
        assert_eq!(feedback.count_correct(), 5);
        assert_eq!(feedback.count_present(), 0);
    }

    #[test]
    fn disjoint_guess_is_all_absent() {
        let feedback = Feedback::calculate("ABCDE", &skole());

        // E is the fifth letter of both words
        assert_eq!(feedback.letters(), &[Absent, Absent, Absent, Absent, Correct]);

        let feedback = Feedback::calculate("ABCDF", &skole());
        assert_eq!(feedback.letters(), &[Absent; 5]);
        assert!(!feedback.is_perfect());
    }

    #[test]
    fn swapped_ends_are_present() {
        let feedback = Feedback::calculate("EKOLS", &skole());

        assert_eq!(
            feedback.letters(),
            &[Present, Correct, Correct, Correct, Present]
        );
        assert_eq!(feedback.count_correct(), 3);
        assert_eq!(feedback.count_present(), 2);
    }

    #[test]
    fn duplicate_letters_are_each_present() {
        // Target has a single O; both guessed O's are reported
        let feedback = Feedback::calculate("OOZZZ", &skole());

        assert_eq!(feedback.letters(), &[Present, Present, Absent, Absent, Absent]);
    }

    #[test]
    fn duplicate_letter_with_correct_copy_keeps_other_present() {
        // Position 2 is the real O; the O at position 0 still reads Present
        let feedback = Feedback::calculate("OAOAA", &skole());

        assert_eq!(feedback.letters(), &[Present, Absent, Correct, Absent, Absent]);
    }

    #[test]
    fn emoji_summary() {
        let feedback = Feedback::calculate("SLOZZ", &skole());
        assert_eq!(feedback.to_emoji(), "🟩🟨🟩⬜⬜");
    }

    #[test]
    fn evaluate_is_case_sensitive_to_stored_uppercase() {
        assert_eq!(LetterFeedback::evaluate(b's', 0, &skole()), Absent);
    }
}
