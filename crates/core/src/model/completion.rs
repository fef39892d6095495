use crate::model::ids::LessonId;

/// Emitted once when a quiz session reaches its terminal state.
///
/// Not `Clone`: the dashboard consumes it by value.
#[derive(Debug, PartialEq, Eq)]
pub struct LessonCompleted {
    pub lesson_id: LessonId,
    pub xp_earned: u32,
    pub correct_answers: u32,
}
