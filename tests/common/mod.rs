use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App};
use std::sync::Arc;

use mebelmarket_api::data::rate_table::RateTable;
use mebelmarket_api::routes;

pub struct TestApp {
    pub table: Arc<RateTable>,
}

impl TestApp {
    pub fn new() -> Self {
        Self {
            table: Arc::new(RateTable::builtin()),
        }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(self.table.clone()))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .route("/", web::get().to(|| async { "MebelMarket API is running" }))
            .route("/health", web::get().to(routes::health::health_check))
            .service(
                web::scope("/api").service(
                    web::scope("/delivery")
                        .route("/quote", web::get().to(routes::delivery::get_quote))
                        .route(
                            "/cities",
                            web::get().to(routes::delivery::get_city_suggestions),
                        )
                        .route(
                            "/floor-carry",
                            web::post().to(routes::delivery::calculate_floor_carry),
                        ),
                ),
            )
    }
}
