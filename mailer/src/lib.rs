use lettre::message::{MultiPart, SinglePart, header::ContentType};
use lettre::transport::smtp::PoolConfig;
use lettre::transport::smtp::authentication::{Credentials, Mechanism};
use lettre::{Message, SmtpTransport, Transport};

use common::{
    env_config::SmtpConfig,
    error::{AppError, Res},
};

pub mod notify;

/// Outgoing-mail capability: `send(to, subject, html)` over a pooled
/// SMTP relay.
pub struct Mailer {
    transport: SmtpTransport,
    from_address: String,
}

impl Mailer {
    pub fn from_config(config: &SmtpConfig) -> Res<Self> {
        let creds = Credentials::new(config.username.clone(), config.password.clone());

        let transport = SmtpTransport::starttls_relay(&config.host)
            .map_err(|e| AppError::Internal(format!("Invalid SMTP relay host: {}", e)))?
            .port(config.port)
            .credentials(creds)
            .authentication(vec![Mechanism::Plain])
            .pool_config(PoolConfig::new().max_size(5))
            .build();

        Ok(Mailer {
            transport,
            from_address: config.from_address.clone(),
        })
    }

    /// Sends a multipart message carrying the html body and a plain-text
    /// fallback with the markup stripped.
    pub fn send(&self, to_address: &str, subject: &str, html_body: &str) -> Res<()> {
        let message = Message::builder()
            .from(
                self.from_address
                    .parse()
                    .map_err(|_| AppError::Internal("Invalid From address".to_string()))?,
            )
            .to(to_address
                .parse()
                .map_err(|_| AppError::BadRequest("Invalid recipient address".to_string()))?)
            .subject(subject)
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(strip_tags(html_body)),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(html_body.to_string()),
                    ),
            )
            .map_err(|e| AppError::Internal(format!("Failed to build message: {}", e)))?;

        self.transport.send(&message)?;
        Ok(())
    }
}

/// Plain-text rendering of an html body for the alternative part.
fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_tags_drops_markup_and_keeps_text() {
        assert_eq!(
            strip_tags("<p>Hello <strong>world</strong></p>"),
            "Hello world"
        );
        assert_eq!(strip_tags("no markup at all"), "no markup at all");
    }
}
