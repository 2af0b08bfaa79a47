use crate::{
    data::{quiz, STYLE_QUESTIONS},
    error::{AppError, AppResult},
    models::{StyleQuestion, StyleResultProfile, StyleTag, StyleTally},
};

/// Turns an ordered list of quiz answers into a dominant style
///
/// Scoring is a plain tally: each answer that matches an option of its
/// question adds one point to that option's tag. The highest tally wins,
/// earliest tag in [`StyleTag::ALL`] on a tie, [`StyleTag::FALLBACK`] when
/// nothing matched.
#[derive(Debug, Clone, Copy)]
pub struct StyleQuizScorer {
    questions: &'static [StyleQuestion],
}

impl Default for StyleQuizScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleQuizScorer {
    /// Scorer over the built-in eight-question quiz
    pub fn new() -> Self {
        Self {
            questions: &STYLE_QUESTIONS,
        }
    }

    pub fn questions(&self) -> &'static [StyleQuestion] {
        self.questions
    }

    /// Per-tag counts for a set of answers
    ///
    /// An empty answer list yields an empty tally. Any other length must match
    /// the question count. Answers naming no option of their question are skipped.
    pub fn tally<S: AsRef<str>>(&self, answers: &[S]) -> AppResult<StyleTally> {
        let mut tally = StyleTally::default();

        if answers.is_empty() {
            return Ok(tally);
        }

        if answers.len() != self.questions.len() {
            return Err(AppError::InvalidInput(format!(
                "Expected {} answers, got {}",
                self.questions.len(),
                answers.len()
            )));
        }

        for (question, answer) in self.questions.iter().zip(answers) {
            match question.option(answer.as_ref()) {
                Some(option) => tally.increment(option.style_tag),
                None => tracing::debug!(
                    question_id = question.id,
                    answer = %answer.as_ref(),
                    "Answer matches no option, skipped"
                ),
            }
        }

        Ok(tally)
    }

    /// Dominant style for a set of answers
    pub fn score<S: AsRef<str>>(&self, answers: &[S]) -> AppResult<StyleTag> {
        self.evaluate(answers).map(|(style, _)| style)
    }

    /// Dominant style together with the tally it was derived from
    pub fn evaluate<S: AsRef<str>>(&self, answers: &[S]) -> AppResult<(StyleTag, StyleTally)> {
        let tally = self.tally(answers)?;
        let style = tally.dominant().unwrap_or(StyleTag::FALLBACK);
        Ok((style, tally))
    }

    /// Result profile shown for a style
    pub fn profile(&self, tag: StyleTag) -> &'static StyleResultProfile {
        quiz::profile(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn answers(letters: &str) -> Vec<String> {
        letters
            .chars()
            .enumerate()
            .map(|(i, c)| format!("{}{}", i + 1, c))
            .collect()
    }

    #[test]
    fn test_all_vintage_answers_score_vintage() {
        let scorer = StyleQuizScorer::new();
        let answers = ["1a", "2a", "3a", "4a", "5a", "6a", "7a", "8a"];
        assert_eq!(scorer.score(&answers).unwrap(), StyleTag::Vintage);
    }

    #[test]
    fn test_unanimous_answers_score_that_tag() {
        let scorer = StyleQuizScorer::new();
        for (letter, tag) in "abcdef".chars().zip(StyleTag::ALL) {
            let letters: String = std::iter::repeat(letter).take(8).collect();
            assert_eq!(scorer.score(&answers(&letters)).unwrap(), tag);
        }
    }

    #[test]
    fn test_empty_answers_fall_back_to_minimalist() {
        let scorer = StyleQuizScorer::new();
        let empty: Vec<String> = vec![];
        assert_eq!(scorer.score(&empty).unwrap(), StyleTag::Minimalist);
    }

    #[test]
    fn test_unmatched_answers_fall_back_to_minimalist() {
        let scorer = StyleQuizScorer::new();
        let answers = ["x", "y", "z", "1a", "2a", "3a", "4a", "5a"];
        // Answers are matched positionally: "1a" is not an option of question 4
        assert_eq!(scorer.score(&answers).unwrap(), StyleTag::Minimalist);
    }

    #[test]
    fn test_unmatched_answers_are_skipped() {
        let scorer = StyleQuizScorer::new();
        let answers = ["1b", "bogus", "3b", "4c", "", "6f", "7f", "8f"];
        let tally = scorer.tally(&answers).unwrap();

        assert_eq!(tally.matched(), 6);
        assert_eq!(tally.count(StyleTag::Industrial), 2);
        assert_eq!(tally.count(StyleTag::MidCentury), 3);
        assert_eq!(scorer.score(&answers).unwrap(), StyleTag::MidCentury);
    }

    #[test]
    fn test_tie_resolves_to_earliest_tag() {
        let scorer = StyleQuizScorer::new();
        // four scandinavian, four industrial
        let tag = scorer.score(&answers("eeeebbbb")).unwrap();
        assert_eq!(tag, StyleTag::Industrial);

        // two each of boho, minimalist, scandinavian, mid-century
        let tag = scorer.score(&answers("ffeeddcc")).unwrap();
        assert_eq!(tag, StyleTag::Boho);
    }

    #[test]
    fn test_wrong_length_is_invalid_input() {
        let scorer = StyleQuizScorer::new();

        let short = ["1a", "2a", "3a"];
        assert!(matches!(scorer.score(&short), Err(AppError::InvalidInput(_))));

        let long = answers("aaaaaaaaa");
        assert!(matches!(scorer.score(&long), Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_profile_lookup() {
        let scorer = StyleQuizScorer::new();
        assert_eq!(scorer.profile(StyleTag::Boho).name, "Bohemian Spirit");
        assert_eq!(scorer.questions().len(), 8);
    }

    proptest! {
        #[test]
        fn prop_valid_answers_score_a_known_tag(letters in "[a-f]{8}") {
            let scorer = StyleQuizScorer::new();
            let tag = scorer.score(&answers(&letters)).unwrap();
            prop_assert!(StyleTag::ALL.contains(&tag));

            let tally = scorer.tally(&answers(&letters)).unwrap();
            prop_assert_eq!(tally.matched(), 8);
            for other in StyleTag::ALL {
                prop_assert!(tally.count(other) <= tally.count(tag));
            }
        }

        #[test]
        fn prop_scoring_is_deterministic(letters in "[a-g]{8}") {
            let scorer = StyleQuizScorer::new();
            let first = scorer.score(&answers(&letters)).unwrap();
            let second = scorer.score(&answers(&letters)).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
