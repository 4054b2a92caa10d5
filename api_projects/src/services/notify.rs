use mailer::{Mailer, notify::NotificationKind};
use sqlx::PgPool;

/// Fans an update notification out to every active subscriber.
///
/// Notification delivery is a side effect of publishing, not part of the
/// request contract: failures are logged and the request proceeds.
pub async fn broadcast_update(pool: &PgPool, mailer: &Mailer, kind: NotificationKind) {
    let subscribers = match db::subscriber::list_active_subscribers(pool).await {
        Ok(subscribers) => subscribers,
        Err(e) => {
            log::error!("Failed to load update subscribers: {}", e);
            return;
        }
    };

    for subscriber in subscribers {
        if let Err(e) = mailer.send(
            &subscriber.email,
            kind.subject(),
            &kind.html(&subscriber.name),
        ) {
            log::warn!("Failed to notify {}: {}", subscriber.email, e);
        }
    }
}
