use chrono::NaiveDate;
use lingo_core::model::{CompletionNotice, LearnerProgress};
use lingo_core::unlock::LessonStatus;
use services::{CourseOverview, LessonTile, UnitBoard};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonButtonVm {
    pub id: u64,
    pub title: String,
    pub status: LessonStatus,
}

impl LessonButtonVm {
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.status == LessonStatus::Locked
    }

    #[must_use]
    pub fn class(&self) -> &'static str {
        match self.status {
            LessonStatus::Completed => "lesson-btn lesson-btn--completed",
            LessonStatus::Current => "lesson-btn lesson-btn--current",
            LessonStatus::Locked => "lesson-btn lesson-btn--locked",
        }
    }

    #[must_use]
    pub fn icon(&self) -> &'static str {
        match self.status {
            LessonStatus::Completed => "✔",
            LessonStatus::Current => "▶",
            LessonStatus::Locked => "🔒",
        }
    }
}

impl From<&LessonTile> for LessonButtonVm {
    fn from(tile: &LessonTile) -> Self {
        Self {
            id: tile.id.value(),
            title: tile.title.clone(),
            status: tile.status,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnitVm {
    pub heading: String,
    pub title: String,
    pub description: String,
    pub lessons: Vec<LessonButtonVm>,
}

impl From<&UnitBoard> for UnitVm {
    fn from(board: &UnitBoard) -> Self {
        Self {
            heading: format!("Unit {}", board.id),
            title: board.title.clone(),
            description: board.description.clone(),
            lessons: board.lessons.iter().map(LessonButtonVm::from).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DailyGoalVm {
    pub earned_label: String,
    pub goal_label: String,
    pub percent: u32,
    pub remaining_label: String,
}

impl DailyGoalVm {
    /// Daily goal card as of `today`.
    #[must_use]
    pub fn new(progress: &LearnerProgress, today: NaiveDate) -> Self {
        let remaining = progress.xp_to_daily_goal(today);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let percent = (progress.daily_goal_fraction(today) * 100.0).round() as u32;
        Self {
            earned_label: format!("{} XP earned", progress.today_xp(today)),
            goal_label: format!("{} XP goal", progress.daily_goal()),
            percent,
            remaining_label: if remaining == 0 {
                "Daily goal reached!".to_string()
            } else {
                format!("{remaining} XP to reach your daily goal")
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SampleWordVm {
    pub word: String,
    pub translation: String,
    pub pronunciation: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardVm {
    pub language_name: String,
    pub streak: u32,
    pub total_xp: u32,
    pub units: Vec<UnitVm>,
    pub daily_goal: DailyGoalVm,
    pub sample_words: Vec<SampleWordVm>,
    pub achievement_text: String,
}

#[must_use]
pub fn map_dashboard(
    overview: &CourseOverview,
    boards: &[UnitBoard],
    progress: &LearnerProgress,
    today: NaiveDate,
) -> DashboardVm {
    let completed = progress.completed().len();
    let noun = if completed == 1 { "lesson" } else { "lessons" };

    DashboardVm {
        language_name: overview.language.name().to_string(),
        streak: progress.streak(),
        total_xp: progress.total_xp(),
        units: boards.iter().map(UnitVm::from).collect(),
        daily_goal: DailyGoalVm::new(progress, today),
        sample_words: overview
            .language
            .sample_words()
            .iter()
            .map(|word| SampleWordVm {
                word: word.word.clone(),
                translation: word.translation.clone(),
                pronunciation: word.pronunciation.clone(),
            })
            .collect(),
        achievement_text: format!("You've completed {completed} {noun}. Keep it up!"),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastVm {
    pub title: String,
    pub description: String,
}

#[must_use]
pub fn completion_toast(notice: &CompletionNotice) -> ToastVm {
    let mut description = format!(
        "You earned {} XP and got {} questions correct!",
        notice.xp_earned, notice.correct_answers
    );
    if notice.reached_daily_goal {
        description.push_str(" Daily goal reached.");
    }
    ToastVm {
        title: "Lesson Completed! 🎉".to_string(),
        description,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lingo_core::model::{LessonId, UnitId};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn progress(today_xp: u32, goal: u32, completed: &[u64]) -> LearnerProgress {
        LearnerProgress::restore(
            1250,
            7,
            today_xp,
            goal,
            Some(day(10)),
            completed.iter().copied().map(LessonId::new).collect(),
        )
        .unwrap()
    }

    #[test]
    fn daily_goal_labels() {
        let goal = DailyGoalVm::new(&progress(30, 50, &[]), day(10));
        assert_eq!(goal.earned_label, "30 XP earned");
        assert_eq!(goal.goal_label, "50 XP goal");
        assert_eq!(goal.percent, 60);
        assert_eq!(goal.remaining_label, "20 XP to reach your daily goal");

        let over = DailyGoalVm::new(&progress(70, 50, &[]), day(10));
        assert_eq!(over.percent, 100);
        assert_eq!(over.remaining_label, "Daily goal reached!");
    }

    #[test]
    fn daily_goal_card_starts_over_on_a_new_day() {
        let card = DailyGoalVm::new(&progress(70, 50, &[]), day(11));
        assert_eq!(card.earned_label, "0 XP earned");
        assert_eq!(card.percent, 0);
        assert_eq!(card.remaining_label, "50 XP to reach your daily goal");
    }

    #[test]
    fn unit_heading_and_lesson_buttons() {
        let board = UnitBoard {
            id: UnitId::new(2),
            title: "Basics 2".into(),
            description: "Learn about daily activities".into(),
            lessons: vec![
                LessonTile {
                    id: LessonId::new(6),
                    title: "Time".into(),
                    status: LessonStatus::Current,
                },
                LessonTile {
                    id: LessonId::new(7),
                    title: "Numbers".into(),
                    status: LessonStatus::Locked,
                },
            ],
        };

        let unit = UnitVm::from(&board);
        assert_eq!(unit.heading, "Unit 2");
        assert!(!unit.lessons[0].is_locked());
        assert!(unit.lessons[1].is_locked());
        assert_eq!(unit.lessons[1].class(), "lesson-btn lesson-btn--locked");
    }

    #[test]
    fn toast_mentions_xp_and_correct_answers() {
        let notice = CompletionNotice {
            lesson_id: LessonId::new(3),
            xp_earned: 20,
            correct_answers: 2,
            streak: 7,
            reached_daily_goal: false,
        };
        let toast = completion_toast(&notice);
        assert_eq!(toast.title, "Lesson Completed! 🎉");
        assert_eq!(
            toast.description,
            "You earned 20 XP and got 2 questions correct!"
        );
    }
}
