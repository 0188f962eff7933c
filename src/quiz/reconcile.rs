use crate::quiz::models::QuizPhase;

/// Restores the index/phase invariants after any collection mutation: an
/// empty collection forces index 0 and `NotStarted`, otherwise the index is
/// clamped into bounds and the phase stands.
pub fn reconcile(len: usize, index: usize, phase: QuizPhase) -> (usize, QuizPhase) {
    if len == 0 {
        return (0, QuizPhase::NotStarted);
    }

    let index = if index >= len { len - 1 } else { index };
    (index, phase)
}
