use std::env;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use mebelmarket_api::data::rate_table::RateTable;
use mebelmarket_api::routes;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    println!("Application starting...");

    env_logger::init_from_env(Env::default().default_filter_or("info"));
    println!("Logger initialized");

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    } else {
        println!("Release mode");
    }

    let host = env::var("HOST").unwrap_or_else(|_| HOST.to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| PORT.to_string())
        .parse()
        .unwrap_or(PORT);
    println!("Attempting to bind to {}:{}", host, port);

    let rate_table = Arc::new(RateTable::builtin());
    println!(
        "Rate table loaded: {} cities, {} free zones",
        rate_table.entries().len(),
        rate_table.free_zones().len()
    );

    println!("Starting HTTP server...");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .app_data(web::Data::new(rate_table.clone()))
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
    })
    .bind((host, port))?
    .run()
    .await
}
