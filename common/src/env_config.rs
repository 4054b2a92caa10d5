use std::{env, sync::Arc};

#[derive(Clone, Debug)]
/// Configuration struct for the server.
///
/// Holds everything needed to initialize and run the portal:
/// database connection details, JWT configuration, server host and port,
/// worker count, CORS settings, logging preferences, the PayPal client
/// credentials and the SMTP relay used for outgoing mail.
pub struct Config {
    // environment
    pub environment: String, // development or production
    /// The URL of the database to connect to.
    pub database_url: String,
    /// Configuration for JWT (JSON Web Token) authentication.
    pub jwt_config: JwtConfig,
    /// The hostname or IP address the server will bind to.
    pub server_host: String,
    /// The port number the server will listen on.
    pub server_port: u16,
    /// The number of worker threads to spawn for handling requests.
    pub num_workers: usize,
    /// The allowed origin for CORS (Cross-Origin Resource Sharing).
    pub cors_allowed_origin: String,
    /// A boolean indicating whether console logging is enabled.
    pub console_logging_enabled: bool,
    /// Email domain required of project creators (admins are exempt).
    pub university_email_domain: String,
    /// Configuration for the PayPal REST client.
    pub paypal: PayPalConfig,
    /// Configuration for the SMTP relay.
    pub smtp: SmtpConfig,
}

#[derive(Clone, Debug)]
/// Credentials and callback endpoints for the PayPal checkout flow.
///
/// The client built from this config is constructed once at startup and
/// injected into the payment routes; nothing reads these values at
/// module load time.
pub struct PayPalConfig {
    /// "sandbox" or "live"; selects the API base URL.
    pub mode: String,
    /// The REST API client id.
    pub client_id: String,
    /// The REST API client secret.
    pub client_secret: String,
    /// Absolute URL the provider redirects approved payers back to.
    pub return_url: String,
    /// Absolute URL the provider redirects cancelling payers back to.
    pub cancel_url: String,
}

#[derive(Clone, Debug)]
/// SMTP relay settings for outgoing portal mail.
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    /// Address used in the From header of every message.
    pub from_address: String,
}

#[derive(Clone, Debug)]
/// Configuration for JSON Web Token (JWT) authentication.
///
/// This struct contains the secret key used to sign JWTs and
/// the expiration time in hours for issued tokens.
pub struct JwtConfig {
    /// The secret key used to sign and verify JWTs.
    pub secret: String,
    /// The expiration time for JWTs in hours.
    pub expiration_hours: i64,
}

impl JwtConfig {
    /// Creates a new `JwtConfig` instance from environment variables.
    ///
    /// Reads the JWT configuration from environment variables:
    /// - `JWT_SECRET`: Required. The secret key for JWT signing.
    /// - `JWT_EXPIRATION_HOURS`: Optional. Defaults to 24 hours if not provided.
    ///
    /// # Panics
    ///
    /// This function will panic if:
    /// - `JWT_SECRET` environment variable is not set
    /// - `JWT_EXPIRATION_HOURS` is set but cannot be parsed as a valid number
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        JwtConfig {
            secret: env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
            expiration_hours: env::var("JWT_EXPIRATION_HOURS")
                .unwrap_or_else(|_| "24".to_string())
                .parse()
                .expect("JWT_EXPIRATION_HOURS must be a valid number"),
        }
    }
}

impl Config {
    /// Creates a new `Config` instance from environment variables.
    ///
    /// # Environment Variables
    ///
    /// Required:
    /// - `ENVIRONMENT`: "development" or "production"
    /// - `DATABASE_URL`: Connection string for the database
    /// - `JWT_SECRET`: Secret key for JWT signing (via `JwtConfig::from_env()`)
    /// - `PAYPAL_CLIENT_ID` / `PAYPAL_CLIENT_SECRET`: PayPal REST credentials
    ///
    /// Optional (with defaults):
    /// - `IP`: Server host (default: "127.0.0.1")
    /// - `PORT`: Server port (default: 8080)
    /// - `WORKERS`: Number of worker threads (default: 4)
    /// - `CORS_ALLOWED_ORIGIN`: Allowed CORS origin (default: "http://localhost:3000")
    /// - `ENABLE_CONSOLE_LOGGING`: Whether to enable console logging (default: true)
    /// - `UNIVERSITY_EMAIL_DOMAIN`: Domain required of project creators
    /// - `PAYPAL_MODE`: "sandbox" (default) or "live"
    /// - `PAYPAL_RETURN_URL` / `PAYPAL_CANCEL_URL`: checkout callback endpoints
    /// - `SMTP_*`: relay host, port, credentials and From address
    ///
    /// # Panics
    ///
    /// This function will panic if required environment variables are missing or if
    /// numeric values cannot be parsed correctly.
    pub fn from_env() -> Arc<Self> {
        dotenvy::dotenv().ok();

        Arc::new(Config {
            environment: env::var("ENVIRONMENT").expect("ENVIRONMENT must be set"),
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            jwt_config: JwtConfig::from_env(),
            server_host: env::var("IP").unwrap_or_else(|_| "127.0.0.1".to_string()),
            server_port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            num_workers: env::var("WORKERS")
                .unwrap_or_else(|_| "4".to_string())
                .parse()
                .unwrap_or(4),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            console_logging_enabled: env::var("ENABLE_CONSOLE_LOGGING")
                .unwrap_or_else(|_| "true".to_string())
                .to_lowercase()
                == "true",
            university_email_domain: env::var("UNIVERSITY_EMAIL_DOMAIN")
                .unwrap_or_else(|_| "jkuat.ac.ke".to_string()),
            paypal: PayPalConfig {
                mode: env::var("PAYPAL_MODE").unwrap_or_else(|_| "sandbox".to_string()),
                client_id: env::var("PAYPAL_CLIENT_ID").expect("PAYPAL_CLIENT_ID must be set"),
                client_secret: env::var("PAYPAL_CLIENT_SECRET")
                    .expect("PAYPAL_CLIENT_SECRET must be set"),
                return_url: env::var("PAYPAL_RETURN_URL")
                    .unwrap_or_else(|_| "http://localhost:8080/api/pay/return".to_string()),
                cancel_url: env::var("PAYPAL_CANCEL_URL")
                    .unwrap_or_else(|_| "http://localhost:8080/api/pay/cancel".to_string()),
            },
            smtp: SmtpConfig {
                host: env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string()),
                port: env::var("SMTP_PORT")
                    .unwrap_or_else(|_| "587".to_string())
                    .parse()
                    .unwrap_or(587),
                username: env::var("SMTP_USERNAME").unwrap_or_default(),
                password: env::var("SMTP_PASSWORD").unwrap_or_default(),
                from_address: env::var("SMTP_FROM_ADDRESS")
                    .unwrap_or_else(|_| "no-reply@localhost".to_string()),
            },
        })
    }
}
