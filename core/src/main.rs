mod cors;

use std::sync::Arc;

use actix_web::{
    App, HttpServer,
    web::{self},
};
use common::{
    env_config::Config,
    paypal::{PayPalClient, PaymentGateway},
};
use mailer::Mailer;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // get env vars
    let config = Config::from_env();
    let config_data = config.clone();

    // get info
    let is_production = config.environment == "production";
    let origin = config.cors_allowed_origin.clone();

    // init logger
    if config.console_logging_enabled {
        logger::setup().expect("Failed to set up logger");
    }

    // init db connection
    let pool = db::setup(&config.database_url, is_production)
        .await
        .expect("Failed to set up database");

    // the payment gateway and mailer are constructed once here and
    // injected; no route builds its own provider client
    let gateway: Arc<dyn PaymentGateway> = Arc::new(PayPalClient::new(&config.paypal));
    let mailer =
        web::Data::new(Mailer::from_config(&config.smtp).expect("Failed to set up mailer"));

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(config_data.clone()))
            .app_data(web::Data::from(gateway.clone()))
            .app_data(mailer.clone())
            .wrap(logger::middleware()) // 3rd
            .wrap(extractor::middleware()) // 2nd
            .wrap(cors::middleware(&origin)) // 1st
            .service(
                web::scope("/api")
                    .service(api_auth::mount_auth())
                    .service(api_subs::mount_callbacks())
                    .service(api_projects::mount_showcase())
                    .service(api_projects::mount_reviews())
                    .service(api_projects::mount_news())
                    .service(api_projects::mount_updates())
                    .service(api_projects::mount_pages())
                    .service(
                        web::scope("/dashboard")
                            .wrap(api_auth::auth_middleware())
                            .service(api_auth::mount_user())
                            .service(api_projects::mount_dashboard())
                            .service(api_projects::mount_news_admin())
                            .service(api_subs::mount_subs()),
                    ),
            )
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .workers(config.num_workers)
    .run()
    .await
}
