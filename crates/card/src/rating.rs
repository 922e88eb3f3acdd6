use thutorium_client::Rating;

/// Mean of the given ratings' points, or 0 if there are none.
pub fn average_rating(ratings: &[Rating]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }

    ratings.iter().map(|r| r.points).sum::<f64>() / ratings.len() as f64
}
