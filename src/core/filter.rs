use crate::domain::model::{RatingSet, ReviewRecord};

/// Keeps the reviews whose score is in `allowed`, in their original order.
pub fn filter_reviews(reviews: Vec<ReviewRecord>, allowed: &RatingSet) -> Vec<ReviewRecord> {
    reviews
        .into_iter()
        .filter(|review| allowed.contains(review.score))
        .collect()
}
