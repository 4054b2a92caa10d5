use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// At most one row per user; activity is derived from the date window,
/// never stored.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Subscription {
    pub id: Uuid,
    pub user_id: Uuid,
    pub start_date: NaiveDateTime,
    pub end_date: Option<NaiveDateTime>,
}

impl Subscription {
    /// Active iff the given day falls within the start/end window,
    /// inclusive on both ends. A row without an end date reads as
    /// inactive rather than erroring.
    pub fn is_active_on(&self, today: NaiveDate) -> bool {
        match self.end_date {
            Some(end) => self.start_date.date() <= today && today <= end.date(),
            None => false,
        }
    }
}
