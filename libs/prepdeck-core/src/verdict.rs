//! Interview verdicts: average score banding and Russian pluralization.

/// Minimum number of answered questions for a passing verdict to be possible.
pub const MIN_ANSWERED: u32 = 5;

/// Verdict band, selected from the answered count and the average score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerdictBand {
    /// Fewer than [`MIN_ANSWERED`] questions answered, regardless of score.
    TooFew,
    /// Average in `[0, 5)`.
    Fail,
    /// Average in `[5, 7)`.
    Borderline,
    /// Average in `[7, 9)`.
    Good,
    /// Average `>= 9`.
    Excellent,
}

/// Final interview result.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub answered: u32,
    pub average: f64,
    pub band: VerdictBand,
}

impl Verdict {
    /// Compute the verdict for a finished interview.
    pub fn new(answered: u32, total_score: f64) -> Self {
        let average = if answered > 0 {
            total_score / answered as f64
        } else {
            0.0
        };
        let band = if answered < MIN_ANSWERED {
            VerdictBand::TooFew
        } else if average < 5.0 {
            VerdictBand::Fail
        } else if average < 7.0 {
            VerdictBand::Borderline
        } else if average < 9.0 {
            VerdictBand::Good
        } else {
            VerdictBand::Excellent
        };
        Self {
            answered,
            average,
            band,
        }
    }

    /// Average rounded down to a whole number, used inside the message text.
    pub fn floored_average(&self) -> i64 {
        self.average.floor() as i64
    }

    /// Average with one decimal, used for the on-screen score.
    pub fn average_display(&self) -> String {
        format!("{:.1}", self.average)
    }

    /// The verdict narrative.
    pub fn message(&self) -> String {
        let n = self.answered;
        let word = plural_questions(n);
        let grade = self.floored_average();
        match self.band {
            VerdictBand::TooFew => format!(
                "Вы ответили на {n} {word}. Вы не прошли интервью. \
                 Нужно ответить на минимум 5 вопросов."
            ),
            VerdictBand::Fail => format!(
                "Вы ответили на {n} {word}. Спасибо за интервью! \
                 Ваша оценка {grade}. Вы не прошли."
            ),
            VerdictBand::Borderline => format!(
                "Вы ответили на {n} {word}. Спасибо за интервью! \
                 Ваша оценка {grade}, не плохо. Мы вам перезвоним."
            ),
            VerdictBand::Good => format!(
                "Вы ответили на {n} {word}. Спасибо за интервью. \
                 Ваша оценка {grade}, это впечатляет. Очень хорошо!"
            ),
            VerdictBand::Excellent => format!(
                "Вы ответили на {n} {word}. Спасибо за интервью. \
                 Ваша оценка {grade}, это отличный результат. \
                 Поздравляем, вы прошли интервью!"
            ),
        }
    }
}

/// Display tier of a single score, for result styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    /// Failed grading or a zero average.
    Zero,
    /// Below 5.
    Low,
    /// 5 to 8 exclusive.
    Medium,
    /// 8 and above.
    High,
}

impl ScoreTier {
    pub fn for_score(score: f64) -> Self {
        if score <= 0.0 {
            Self::Zero
        } else if score >= 8.0 {
            Self::High
        } else if score >= 5.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// Russian plural form of «вопрос» for a count.
///
/// Forms: 1 → «вопрос», 2–4 → «вопроса», 0/5–20 → «вопросов», with the 11–14
/// band always taking the genitive plural.
pub fn plural_questions(count: u32) -> &'static str {
    const FORMS: [&str; 3] = ["вопрос", "вопроса", "вопросов"];
    const CASES: [usize; 6] = [2, 0, 1, 1, 1, 2];

    let n100 = count % 100;
    let n10 = count % 10;
    let idx = if (5..20).contains(&n100) {
        2
    } else {
        CASES[n10.min(5) as usize]
    };
    FORMS[idx]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plural_forms() {
        assert_eq!(plural_questions(1), "вопрос");
        assert_eq!(plural_questions(2), "вопроса");
        assert_eq!(plural_questions(4), "вопроса");
        assert_eq!(plural_questions(5), "вопросов");
        assert_eq!(plural_questions(11), "вопросов");
        assert_eq!(plural_questions(14), "вопросов");
        assert_eq!(plural_questions(21), "вопрос");
        assert_eq!(plural_questions(22), "вопроса");
        assert_eq!(plural_questions(0), "вопросов");
        assert_eq!(plural_questions(100), "вопросов");
    }

    #[test]
    fn test_too_few_regardless_of_score() {
        let verdict = Verdict::new(4, 40.0);
        assert_eq!(verdict.band, VerdictBand::TooFew);
        assert!(verdict.message().contains("минимум 5 вопросов"));
    }

    #[test]
    fn test_band_thresholds() {
        assert_eq!(Verdict::new(5, 20.0).band, VerdictBand::Fail);
        assert_eq!(Verdict::new(5, 30.0).band, VerdictBand::Borderline);
        assert_eq!(Verdict::new(5, 40.0).band, VerdictBand::Good);
        assert_eq!(Verdict::new(5, 46.0).band, VerdictBand::Excellent);
    }

    #[test]
    fn test_fractional_average_floors_in_message() {
        let verdict = Verdict::new(5, 46.0);
        assert_eq!(verdict.average, 9.2);
        assert_eq!(verdict.floored_average(), 9);
        assert_eq!(verdict.average_display(), "9.2");
        assert!(verdict.message().contains("Ваша оценка 9,"));
    }

    #[test]
    fn test_zero_answered_average_is_zero() {
        let verdict = Verdict::new(0, 0.0);
        assert_eq!(verdict.average, 0.0);
        assert_eq!(verdict.band, VerdictBand::TooFew);
    }

    #[test]
    fn test_message_pluralizes_count() {
        let verdict = Verdict::new(21, 189.0);
        assert!(verdict.message().starts_with("Вы ответили на 21 вопрос."));
    }

    #[test]
    fn test_score_tiers() {
        assert_eq!(ScoreTier::for_score(0.0), ScoreTier::Zero);
        assert_eq!(ScoreTier::for_score(3.0), ScoreTier::Low);
        assert_eq!(ScoreTier::for_score(5.0), ScoreTier::Medium);
        assert_eq!(ScoreTier::for_score(7.9), ScoreTier::Medium);
        assert_eq!(ScoreTier::for_score(8.0), ScoreTier::High);
        assert_eq!(ScoreTier::for_score(10.0), ScoreTier::High);
    }
}
