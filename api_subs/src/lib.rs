use actix_web::web::{self};

pub mod routes {
    pub mod pay;
    pub mod sub;
}

pub mod services {
    pub mod pay;
    pub mod sub;
}

mod dtos {
    pub(crate) mod pay;
    pub(crate) mod sub;
}

/// Dashboard surface: subscription status and checkout initiation.
pub fn mount_subs() -> actix_web::Scope {
    web::scope("/sub")
        .service(routes::sub::get_status)
        .service(routes::pay::post_subscribe)
}

/// Provider redirect targets. The payer's browser lands here without a
/// bearer token; the paying user is resolved from the stored payment.
pub fn mount_callbacks() -> actix_web::Scope {
    web::scope("/pay")
        .service(routes::pay::get_return)
        .service(routes::pay::get_cancel)
}
