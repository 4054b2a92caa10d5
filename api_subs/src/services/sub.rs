use chrono::{Duration, NaiveDateTime};
use common::error::Res;
use db::models::subscription::Subscription;
use sqlx::PgPool;
use uuid::Uuid;

/// Window granted per successful payment.
pub const SUBSCRIPTION_DAYS: i64 = 30;

/// The window a successful payment should write, if any.
///
/// Absent and expired subscriptions get a fresh `[now, now + days]`
/// window; an active subscription is left untouched rather than extended.
/// A row without an end date counts as expired and is re-derived.
pub fn window_after_payment(
    existing: Option<&Subscription>,
    now: NaiveDateTime,
    days: i64,
) -> Option<(NaiveDateTime, NaiveDateTime)> {
    let expired = match existing {
        None => true,
        Some(sub) => match sub.end_date {
            Some(end) => end < now,
            None => true,
        },
    };

    expired.then(|| (now, now + Duration::days(days)))
}

/// Creates the user's subscription or renews an expired one.
///
/// At most one row exists per user; an active subscription is returned
/// unchanged.
pub async fn activate_or_renew(
    pool: &PgPool,
    user_id: Uuid,
    now: NaiveDateTime,
) -> Res<Subscription> {
    match db::subscription::get_subscription(pool, user_id).await? {
        None => {
            let (start_date, end_date) = (now, now + Duration::days(SUBSCRIPTION_DAYS));
            db::subscription::insert_subscription(pool, user_id, start_date, end_date).await
        }
        Some(sub) => match window_after_payment(Some(&sub), now, SUBSCRIPTION_DAYS) {
            Some((start_date, end_date)) => {
                db::subscription::update_subscription_window(pool, user_id, start_date, end_date)
                    .await
            }
            // still active, leave the window as it is
            None => Ok(sub),
        },
    }
}

/// Whether the user currently holds an active subscription. Users with no
/// subscription row read as inactive.
pub async fn is_active(pool: &PgPool, user_id: Uuid, now: NaiveDateTime) -> Res<bool> {
    let subscription = db::subscription::get_subscription(pool, user_id).await?;
    Ok(subscription.is_some_and(|sub| sub.is_active_on(now.date())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn subscription(start: NaiveDateTime, end: Option<NaiveDateTime>) -> Subscription {
        Subscription {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            start_date: start,
            end_date: end,
        }
    }

    #[test]
    fn absent_subscription_gets_a_fresh_window() {
        let now = at(2026, 3, 10);
        let window = window_after_payment(None, now, SUBSCRIPTION_DAYS);
        assert_eq!(window, Some((now, at(2026, 4, 9))));
    }

    #[test]
    fn expired_subscription_is_renewed_from_now() {
        let now = at(2026, 3, 10);
        let expired = subscription(at(2026, 1, 1), Some(at(2026, 1, 31)));

        let window = window_after_payment(Some(&expired), now, SUBSCRIPTION_DAYS);
        assert_eq!(window, Some((now, at(2026, 4, 9))));
    }

    #[test]
    fn active_subscription_is_not_extended_by_early_renewal() {
        let now = at(2026, 3, 10);
        let active = subscription(at(2026, 3, 1), Some(at(2026, 3, 31)));

        assert_eq!(window_after_payment(Some(&active), now, SUBSCRIPTION_DAYS), None);
    }

    #[test]
    fn missing_end_date_counts_as_expired() {
        let now = at(2026, 3, 10);
        let dangling = subscription(at(2026, 1, 1), None);

        assert!(window_after_payment(Some(&dangling), now, SUBSCRIPTION_DAYS).is_some());
    }

    #[test]
    fn window_is_inclusive_of_its_last_day() {
        let sub = subscription(at(2026, 3, 1), Some(at(2026, 3, 31)));

        assert!(sub.is_active_on(at(2026, 3, 1).date()));
        assert!(sub.is_active_on(at(2026, 3, 31).date()));
        assert!(!sub.is_active_on(at(2026, 4, 1).date()));
    }

    #[test]
    fn subscription_without_end_date_is_inactive_not_an_error() {
        let sub = subscription(at(2026, 3, 1), None);
        assert!(!sub.is_active_on(at(2026, 3, 10).date()));
    }
}
