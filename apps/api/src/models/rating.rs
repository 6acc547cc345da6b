use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Rating bounds shared by worker and employer ratings.
pub const MIN_RATING: i16 = 1;
pub const MAX_RATING: i16 = 5;

/// A worker's 1-5 rating of an employer, one per (job, worker) pair.
/// Worker ratings live on the application row instead.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct EmployerRatingRow {
    pub id: Uuid,
    pub job_id: Uuid,
    pub employer_id: Uuid,
    pub worker_id: Uuid,
    pub rating: i16,
    pub created_at: DateTime<Utc>,
}

/// Validates a rating value submitted by either side.
pub fn validate_rating(rating: i16) -> bool {
    (MIN_RATING..=MAX_RATING).contains(&rating)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        assert!(validate_rating(1));
        assert!(validate_rating(3));
        assert!(validate_rating(5));
        assert!(!validate_rating(0));
        assert!(!validate_rating(6));
        assert!(!validate_rating(-1));
    }
}
