use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{
    env_config::PayPalConfig,
    error::{AppError, Res},
};

const SANDBOX_BASE_URL: &str = "https://api.sandbox.paypal.com";
const LIVE_BASE_URL: &str = "https://api.paypal.com";

/// Link relation PayPal uses for the payer-approval redirect.
pub const APPROVAL_LINK_REL: &str = "approval_url";

#[derive(Debug, Clone, Serialize)]
pub struct CreatePayment {
    pub intent: String,
    pub payer: Payer,
    pub transactions: Vec<Transaction>,
    pub redirect_urls: RedirectUrls,
}

#[derive(Debug, Clone, Serialize)]
pub struct Payer {
    pub payment_method: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Transaction {
    pub amount: Amount,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Amount {
    /// String-formatted decimal, e.g. "50.00".
    pub total: String,
    pub currency: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RedirectUrls {
    pub return_url: String,
    pub cancel_url: String,
}

impl CreatePayment {
    /// Builds a one-off "sale" payment spec in USD with the given
    /// string-formatted total and callback endpoints.
    pub fn sale(total: String, description: &str, return_url: &str, cancel_url: &str) -> Self {
        CreatePayment {
            intent: "sale".to_string(),
            payer: Payer {
                payment_method: "paypal".to_string(),
            },
            transactions: vec![Transaction {
                amount: Amount {
                    total,
                    currency: "USD".to_string(),
                },
                description: description.to_string(),
            }],
            redirect_urls: RedirectUrls {
                return_url: return_url.to_string(),
                cancel_url: cancel_url.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Payment {
    pub id: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub links: Vec<PaymentLink>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaymentLink {
    pub href: String,
    pub rel: String,
    #[serde(default)]
    pub method: String,
}

impl Payment {
    /// The provider-supplied link the payer's browser is handed to
    /// for approval, if the link set carries one.
    pub fn approval_url(&self) -> Option<&str> {
        self.links
            .iter()
            .find(|link| link.rel == APPROVAL_LINK_REL)
            .map(|link| link.href.as_str())
    }
}

/// The payment provider capability: create a checkout payment, look one
/// up by provider id, and execute an approved payment.
///
/// Constructed explicitly and injected into the payment routes so tests
/// can substitute a fake provider.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn create(&self, payment: &CreatePayment) -> Res<Payment>;
    /// Lookup by provider payment id. An unknown id is `AppError::NotFound`.
    async fn find(&self, payment_id: &str) -> Res<Payment>;
    async fn execute(&self, payment_id: &str, payer_id: &str) -> Res<Payment>;
}

/// PayPal REST v1 payments client.
pub struct PayPalClient {
    http: reqwest::Client,
    base_url: String,
    client_id: String,
    client_secret: String,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Serialize)]
struct ExecutePayment<'a> {
    payer_id: &'a str,
}

impl PayPalClient {
    pub fn new(config: &PayPalConfig) -> Self {
        let base_url = if config.mode == "live" {
            LIVE_BASE_URL
        } else {
            SANDBOX_BASE_URL
        };
        Self::with_base_url(base_url, &config.client_id, &config.client_secret)
    }

    pub fn with_base_url(base_url: &str, client_id: &str, client_secret: &str) -> Self {
        PayPalClient {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
        }
    }

    /// Client-credentials grant. Tokens are short-lived; one is fetched
    /// per provider call rather than cached across requests.
    async fn access_token(&self) -> Res<String> {
        let response = self
            .http
            .post(format!("{}/v1/oauth2/token", self.base_url))
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::Provider(format!(
                "token endpoint returned {}",
                response.status()
            )));
        }

        let token: TokenResponse = response.json().await?;
        Ok(token.access_token)
    }
}

#[async_trait]
impl PaymentGateway for PayPalClient {
    async fn create(&self, payment: &CreatePayment) -> Res<Payment> {
        let token = self.access_token().await?;
        let response = self
            .http
            .post(format!("{}/v1/payments/payment", self.base_url))
            .bearer_auth(token)
            .json(payment)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::Provider(format!(
                "payment create returned {}",
                response.status()
            )));
        }
        response.json::<Payment>().await.map_err(AppError::from)
    }

    async fn find(&self, payment_id: &str) -> Res<Payment> {
        let token = self.access_token().await?;
        let response = self
            .http
            .get(format!("{}/v1/payments/payment/{}", self.base_url, payment_id))
            .bearer_auth(token)
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(AppError::NotFound("Payment not found".to_string()));
        }
        if !response.status().is_success() {
            return Err(AppError::Provider(format!(
                "payment lookup returned {}",
                response.status()
            )));
        }
        response.json::<Payment>().await.map_err(AppError::from)
    }

    async fn execute(&self, payment_id: &str, payer_id: &str) -> Res<Payment> {
        let token = self.access_token().await?;
        let response = self
            .http
            .post(format!(
                "{}/v1/payments/payment/{}/execute",
                self.base_url, payment_id
            ))
            .bearer_auth(token)
            .json(&ExecutePayment { payer_id })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::Provider(format!(
                "payment execute returned {}",
                response.status()
            )));
        }
        response.json::<Payment>().await.map_err(AppError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeGateway;

    #[async_trait]
    impl PaymentGateway for FakeGateway {
        async fn create(&self, _payment: &CreatePayment) -> Res<Payment> {
            Ok(Payment {
                id: "PAY-FAKE".to_string(),
                state: "created".to_string(),
                links: vec![PaymentLink {
                    href: "https://provider.test/approve".to_string(),
                    rel: APPROVAL_LINK_REL.to_string(),
                    method: "REDIRECT".to_string(),
                }],
            })
        }

        async fn find(&self, payment_id: &str) -> Res<Payment> {
            if payment_id == "PAY-FAKE" {
                Ok(Payment {
                    id: payment_id.to_string(),
                    state: "created".to_string(),
                    links: vec![],
                })
            } else {
                Err(AppError::NotFound("Payment not found".to_string()))
            }
        }

        async fn execute(&self, payment_id: &str, _payer_id: &str) -> Res<Payment> {
            Ok(Payment {
                id: payment_id.to_string(),
                state: "approved".to_string(),
                links: vec![],
            })
        }
    }

    #[tokio::test]
    async fn fake_gateway_drives_the_checkout_protocol() {
        let gateway: &dyn PaymentGateway = &FakeGateway;

        let spec = CreatePayment::sale("50.00".to_string(), "Subscription payment", "r", "c");
        let created = gateway.create(&spec).await.unwrap();
        assert_eq!(created.approval_url(), Some("https://provider.test/approve"));

        assert!(matches!(
            gateway.find("PAY-UNKNOWN").await,
            Err(AppError::NotFound(_))
        ));

        let executed = gateway.execute(&created.id, "PAYER-7").await.unwrap();
        assert_eq!(executed.state, "approved");
    }

    #[test]
    fn sale_spec_serializes_provider_fields() {
        let payment = CreatePayment::sale(
            "50.00".to_string(),
            "Subscription payment",
            "http://localhost:8080/api/pay/return",
            "http://localhost:8080/api/pay/cancel",
        );
        let value = serde_json::to_value(&payment).unwrap();

        assert_eq!(value["intent"], "sale");
        assert_eq!(value["payer"]["payment_method"], "paypal");
        assert_eq!(value["transactions"][0]["amount"]["total"], "50.00");
        assert_eq!(value["transactions"][0]["amount"]["currency"], "USD");
        assert_eq!(
            value["redirect_urls"]["return_url"],
            "http://localhost:8080/api/pay/return"
        );
        assert_eq!(
            value["redirect_urls"]["cancel_url"],
            "http://localhost:8080/api/pay/cancel"
        );
    }

    #[test]
    fn created_payment_deserializes_with_link_set() {
        let body = r#"{
            "id": "PAY-1B56960729604235TKQQIYVY",
            "state": "created",
            "links": [
                {"href": "https://api.sandbox.paypal.com/v1/payments/payment/PAY-1B56960729604235TKQQIYVY", "rel": "self", "method": "GET"},
                {"href": "https://www.sandbox.paypal.com/cgi-bin/webscr?cmd=_express-checkout&token=EC-60385559L1062554J", "rel": "approval_url", "method": "REDIRECT"},
                {"href": "https://api.sandbox.paypal.com/v1/payments/payment/PAY-1B56960729604235TKQQIYVY/execute", "rel": "execute", "method": "POST"}
            ]
        }"#;

        let payment: Payment = serde_json::from_str(body).unwrap();
        assert_eq!(payment.id, "PAY-1B56960729604235TKQQIYVY");
        assert_eq!(payment.state, "created");
        assert_eq!(
            payment.approval_url(),
            Some(
                "https://www.sandbox.paypal.com/cgi-bin/webscr?cmd=_express-checkout&token=EC-60385559L1062554J"
            )
        );
    }

    #[test]
    fn approval_url_absent_when_provider_omits_the_link() {
        let payment = Payment {
            id: "PAY-123".to_string(),
            state: "created".to_string(),
            links: vec![PaymentLink {
                href: "https://api.sandbox.paypal.com/v1/payments/payment/PAY-123".to_string(),
                rel: "self".to_string(),
                method: "GET".to_string(),
            }],
        };
        assert!(payment.approval_url().is_none());
    }
}
