use chrono::NaiveDateTime;
use sqlx::{PgPool, types::BigDecimal};
use std::str::FromStr;
use uuid::Uuid;

use common::{
    env_config::PayPalConfig,
    error::{AppError, Res},
    misc::PaymentStatus,
    paypal::{CreatePayment, PaymentGateway},
};
use db::models::{payment::PaymentRecord, subscription::Subscription};

pub const PAYMENT_DESCRIPTION: &str = "Subscription payment";

/// Provider-facing decimal formatting, always two places.
pub fn format_amount(amount: &BigDecimal) -> String {
    amount.with_scale(2).to_string()
}

/// Parses a user-submitted amount: positive, at most two decimal places.
pub fn parse_amount(input: &str) -> Res<BigDecimal> {
    let amount = BigDecimal::from_str(input.trim())
        .map_err(|_| AppError::BadRequest("Invalid amount".to_string()))?;
    if amount <= BigDecimal::from(0) {
        return Err(AppError::BadRequest("Amount must be positive".to_string()));
    }
    if amount.with_scale(2) != amount {
        return Err(AppError::BadRequest(
            "Amount can carry at most two decimal places".to_string(),
        ));
    }
    Ok(amount)
}

/// Outcome of a settled (or replayed) return callback.
pub struct Settlement {
    pub record: PaymentRecord,
    /// `None` only on a replay whose subscription row has since vanished.
    pub subscription: Option<Subscription>,
    pub already_settled: bool,
}

/// Initiate + Redirect: asks the provider for a payment, persists the
/// `Created` record and hands back the approval link.
///
/// A provider failure aborts the attempt before anything is persisted.
pub async fn start_checkout(
    gateway: &dyn PaymentGateway,
    pool: &PgPool,
    paypal: &PayPalConfig,
    user_id: Uuid,
    amount: BigDecimal,
) -> Res<String> {
    let spec = CreatePayment::sale(
        format_amount(&amount),
        PAYMENT_DESCRIPTION,
        &paypal.return_url,
        &paypal.cancel_url,
    );

    let payment = gateway.create(&spec).await?;

    db::payment::insert_payment(
        pool,
        user_id,
        &payment.id,
        &amount,
        &PaymentStatus::Created.to_string(),
    )
    .await?;

    payment
        .approval_url()
        .map(|url| url.to_string())
        .ok_or_else(|| AppError::Provider("created payment carries no approval link".to_string()))
}

/// Return + Settle: resolves the stored record, executes with the
/// provider, flips the record to `Approved` and activates or renews the
/// paying user's subscription.
///
/// Idempotent per payment id: a record that is already `Approved` (for
/// example a browser back-button replay) is a no-op. Provider failures
/// are terminal for the attempt; the record stays `Created` and nothing
/// else mutates.
pub async fn complete_checkout(
    gateway: &dyn PaymentGateway,
    pool: &PgPool,
    payment_id: &str,
    payer_id: &str,
    now: NaiveDateTime,
) -> Res<Settlement> {
    let record = db::payment::get_payment_by_provider_id(pool, payment_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Payment not found".to_string()))?;

    if record.status == PaymentStatus::Approved.to_string() {
        let subscription = db::subscription::get_subscription(pool, record.user_id).await?;
        return Ok(Settlement {
            record,
            subscription,
            already_settled: true,
        });
    }

    // provider-side lookup; an id the provider no longer knows reads the
    // same as a missing record
    gateway.find(payment_id).await?;

    gateway.execute(payment_id, payer_id).await?;

    let record = db::payment::set_payment_status(
        pool,
        payment_id,
        &PaymentStatus::Approved.to_string(),
    )
    .await?;
    let subscription = super::sub::activate_or_renew(pool, record.user_id, now).await?;

    Ok(Settlement {
        record,
        subscription: Some(subscription),
        already_settled: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_format_with_two_places() {
        assert_eq!(format_amount(&parse_amount("50").unwrap()), "50.00");
        assert_eq!(format_amount(&parse_amount("49.9").unwrap()), "49.90");
        assert_eq!(format_amount(&parse_amount("50.00").unwrap()), "50.00");
    }

    #[test]
    fn malformed_amounts_are_rejected() {
        assert!(parse_amount("fifty").is_err());
        assert!(parse_amount("").is_err());
        assert!(parse_amount("0").is_err());
        assert!(parse_amount("-5.00").is_err());
        assert!(parse_amount("5.001").is_err());
    }

    #[test]
    fn whitespace_around_an_amount_is_tolerated() {
        assert_eq!(format_amount(&parse_amount(" 25.50 ").unwrap()), "25.50");
    }
}
