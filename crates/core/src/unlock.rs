//! Lesson unlocking rules for the dashboard.
//!
//! A policy maps the set of completed lessons to the set of lessons the learner
//! may open. Statuses are derived from that set.

use std::collections::BTreeSet;

use crate::model::LessonId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LessonStatus {
    Completed,
    Current,
    Locked,
}

pub trait UnlockPolicy: Send + Sync {
    /// Lessons from `path` the learner may open given `completed`.
    fn unlocked(&self, path: &[LessonId], completed: &BTreeSet<LessonId>) -> BTreeSet<LessonId>;
}

/// Status of every lesson in `path`, in path order.
#[must_use]
pub fn lesson_statuses(
    policy: &dyn UnlockPolicy,
    path: &[LessonId],
    completed: &BTreeSet<LessonId>,
) -> Vec<(LessonId, LessonStatus)> {
    let unlocked = policy.unlocked(path, completed);
    path.iter()
        .map(|id| {
            let status = if completed.contains(id) {
                LessonStatus::Completed
            } else if unlocked.contains(id) {
                LessonStatus::Current
            } else {
                LessonStatus::Locked
            };
            (*id, status)
        })
        .collect()
}

/// Opens the first lesson, every completed lesson, and each lesson whose
/// predecessor in the path is completed.
#[derive(Debug, Clone, Default)]
pub struct SequentialUnlock {
    always_open: BTreeSet<LessonId>,
}

impl SequentialUnlock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep `lesson` open regardless of what has been completed.
    #[must_use]
    pub fn with_always_open(mut self, lesson: LessonId) -> Self {
        self.always_open.insert(lesson);
        self
    }
}

impl UnlockPolicy for SequentialUnlock {
    fn unlocked(&self, path: &[LessonId], completed: &BTreeSet<LessonId>) -> BTreeSet<LessonId> {
        let mut open: BTreeSet<LessonId> = path
            .iter()
            .filter(|id| completed.contains(*id) || self.always_open.contains(*id))
            .copied()
            .collect();

        if let Some(first) = path.first() {
            open.insert(*first);
        }
        for pair in path.windows(2) {
            if completed.contains(&pair[0]) {
                open.insert(pair[1]);
            }
        }
        open
    }
}

/// Every lesson in the path is open.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnlockAll;

impl UnlockPolicy for UnlockAll {
    fn unlocked(&self, path: &[LessonId], _completed: &BTreeSet<LessonId>) -> BTreeSet<LessonId> {
        path.iter().copied().collect()
    }
}
