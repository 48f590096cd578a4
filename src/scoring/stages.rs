//! Wonder stage progression.
//!
//! Stages are built strictly left to right, so the completed stages always
//! form a prefix of the stage vector. Vectors shorter than the board's stage
//! count are read as padded with `false`.

/// Right-pads `stages` with `false` up to `stage_count`.
pub fn normalize(stages: &[bool], stage_count: usize) -> Vec<bool> {
    let mut padded = stages.to_vec();
    if padded.len() < stage_count {
        padded.resize(stage_count, false);
    }
    padded
}

/// Number of stages in the completed prefix.
pub fn completed_count(stages: &[bool]) -> usize {
    stages.iter().take_while(|completed| **completed).count()
}

/// Whether stage `index` may be marked complete right now.
pub fn can_complete(stages: &[bool], index: usize) -> bool {
    index <= stages.len() && stages[..index].iter().all(|completed| *completed)
}

/// Toggles stage `index` and returns the resulting vector; `stages` is left untouched.
///
/// Completing a stage requires every earlier stage to be complete, otherwise
/// the request is ignored. Un-completing a stage also clears every later
/// stage. Indices outside the board's `stage_count` are ignored.
pub fn toggle_stage(stages: &[bool], stage_count: usize, index: usize) -> Vec<bool> {
    let mut next = normalize(stages, stage_count);
    if index >= stage_count {
        return next;
    }

    if next[index] {
        for stage in next.iter_mut().skip(index) {
            *stage = false;
        }
    } else if can_complete(&next, index) {
        next[index] = true;
    }

    next
}

/// Keeps the completed prefix of `stages`, cut to `stage_count`, and pads the rest.
pub fn fit_to(stages: &[bool], stage_count: usize) -> Vec<bool> {
    let completed = completed_count(stages).min(stage_count);
    let mut fitted = vec![true; completed];
    fitted.resize(stage_count, false);
    fitted
}
