use crate::models::Candidate;

/// Orders candidates by descending rating
///
/// The sort is stable, so equal ratings keep their discovery order.
pub fn rank(mut candidates: Vec<Candidate>) -> Vec<Candidate> {
    candidates.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    candidates
}
