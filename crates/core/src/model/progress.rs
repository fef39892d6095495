use std::collections::BTreeSet;

use chrono::NaiveDate;
use thiserror::Error;

use crate::model::completion::LessonCompleted;
use crate::model::ids::LessonId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProgressError {
    #[error("daily goal must be > 0")]
    InvalidDailyGoal,

    #[error("today's XP ({today}) exceeds total XP ({total})")]
    TodayExceedsTotal { today: u32, total: u32 },
}

/// What the dashboard tells the learner after merging a completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionNotice {
    pub lesson_id: LessonId,
    pub xp_earned: u32,
    pub correct_answers: u32,
    pub streak: u32,
    /// True when this completion pushed today's XP over the daily goal.
    pub reached_daily_goal: bool,
}

/// Dashboard-side counters: XP, streak, daily goal and completed lessons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LearnerProgress {
    total_xp: u32,
    streak: u32,
    today_xp: u32,
    daily_goal: u32,
    last_active: Option<NaiveDate>,
    completed: BTreeSet<LessonId>,
}

impl LearnerProgress {
    /// Fresh learner with no history.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::InvalidDailyGoal` if `daily_goal` is zero.
    pub fn new(daily_goal: u32) -> Result<Self, ProgressError> {
        Self::restore(0, 0, 0, daily_goal, None, BTreeSet::new())
    }

    /// Rebuild progress from a seeded profile.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError` if the goal is zero or today's XP exceeds the total.
    pub fn restore(
        total_xp: u32,
        streak: u32,
        today_xp: u32,
        daily_goal: u32,
        last_active: Option<NaiveDate>,
        completed: BTreeSet<LessonId>,
    ) -> Result<Self, ProgressError> {
        if daily_goal == 0 {
            return Err(ProgressError::InvalidDailyGoal);
        }
        if today_xp > total_xp {
            return Err(ProgressError::TodayExceedsTotal {
                today: today_xp,
                total: total_xp,
            });
        }
        Ok(Self {
            total_xp,
            streak,
            today_xp,
            daily_goal,
            last_active,
            completed,
        })
    }

    /// Merge a finished lesson into the counters.
    ///
    /// Taking the event by value means each completion is applied once.
    pub fn record_completion(&mut self, event: LessonCompleted, today: NaiveDate) -> CompletionNotice {
        let before_goal = self.today_xp(today) >= self.daily_goal;

        match self.last_active {
            Some(day) if day == today => {
                self.streak = self.streak.max(1);
                self.today_xp = self.today_xp.saturating_add(event.xp_earned);
            }
            Some(day) if day.succ_opt() == Some(today) => {
                self.streak = self.streak.saturating_add(1);
                self.today_xp = event.xp_earned;
            }
            _ => {
                self.streak = 1;
                self.today_xp = event.xp_earned;
            }
        }
        self.last_active = Some(today);
        self.total_xp = self.total_xp.saturating_add(event.xp_earned);
        self.completed.insert(event.lesson_id);

        CompletionNotice {
            lesson_id: event.lesson_id,
            xp_earned: event.xp_earned,
            correct_answers: event.correct_answers,
            streak: self.streak,
            reached_daily_goal: !before_goal && self.today_xp >= self.daily_goal,
        }
    }

    /// Overrides the daily goal.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::InvalidDailyGoal` if `goal` is zero.
    pub fn set_daily_goal(&mut self, goal: u32) -> Result<(), ProgressError> {
        if goal == 0 {
            return Err(ProgressError::InvalidDailyGoal);
        }
        self.daily_goal = goal;
        Ok(())
    }

    #[must_use]
    pub fn total_xp(&self) -> u32 {
        self.total_xp
    }

    #[must_use]
    pub fn streak(&self) -> u32 {
        self.streak
    }

    /// XP earned on `today`. XP recorded on an earlier day counts as zero.
    #[must_use]
    pub fn today_xp(&self, today: NaiveDate) -> u32 {
        if self.last_active == Some(today) {
            self.today_xp
        } else {
            0
        }
    }

    #[must_use]
    pub fn daily_goal(&self) -> u32 {
        self.daily_goal
    }

    #[must_use]
    pub fn last_active(&self) -> Option<NaiveDate> {
        self.last_active
    }

    #[must_use]
    pub fn completed(&self) -> &BTreeSet<LessonId> {
        &self.completed
    }

    #[must_use]
    pub fn is_completed(&self, lesson: LessonId) -> bool {
        self.completed.contains(&lesson)
    }

    /// Share of the daily goal reached on `today`, clamped to `[0, 1]`.
    #[must_use]
    pub fn daily_goal_fraction(&self, today: NaiveDate) -> f64 {
        (f64::from(self.today_xp(today)) / f64::from(self.daily_goal)).min(1.0)
    }

    #[must_use]
    pub fn xp_to_daily_goal(&self, today: NaiveDate) -> u32 {
        self.daily_goal.saturating_sub(self.today_xp(today))
    }
}
