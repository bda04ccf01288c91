/// Rounds a similarity score to two decimals, halves away from zero.
///
/// `0.125` becomes `0.13`. Values whose binary form sits just below a half
/// (`0.285` is stored as `0.28499...`) round down.
pub fn round_score(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}

/// Indices of the `k` highest scores, best first.
///
/// Equal scores keep their input order, so the posting retrieved first wins a tie.
/// NaN sorts as equal to everything and therefore never moves.
pub fn rank_top_k(scores: &[f64], k: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    // sort_by is stable
    order.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    order.truncate(k);
    order
}
