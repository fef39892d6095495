/// Position within a quiz, useful for the progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    /// 1-based number of the active question.
    pub position: usize,
    pub total: usize,
    pub is_complete: bool,
}

impl QuizProgress {
    /// `position / total`, in `(0, 1]`.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let fraction = self.position as f64 / self.total as f64;
        fraction
    }

    #[must_use]
    pub fn percent(&self) -> u32 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let percent = (self.fraction() * 100.0).round() as u32;
        percent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_rounds_to_nearest() {
        let progress = QuizProgress {
            position: 1,
            total: 3,
            is_complete: false,
        };
        assert_eq!(progress.percent(), 33);

        let progress = QuizProgress {
            position: 2,
            total: 3,
            is_complete: false,
        };
        assert_eq!(progress.percent(), 67);
    }
}
