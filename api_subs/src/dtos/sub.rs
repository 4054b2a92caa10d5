use chrono::NaiveDateTime;
use db::models::subscription::Subscription;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SubscriptionStatusResponse {
    pub subscription: Option<Subscription>,
    pub active: bool,
    /// Set when a subscription exists but its window has passed.
    pub expired_on: Option<NaiveDateTime>,
}
