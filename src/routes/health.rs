use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use std::env;
use std::sync::Arc;

use crate::data::rate_table::RateTable;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    environment: String,
    version: String,
    timestamp: String,
    rate_table: RateTableStatus,
}

#[derive(Serialize)]
struct RateTableStatus {
    entries: usize,
    free_zones: usize,
}

pub async fn health_check(data: web::Data<Arc<RateTable>>) -> impl Responder {
    let table = data.into_inner();

    let rate_table = RateTableStatus {
        entries: table.entries().len(),
        free_zones: table.free_zones().len(),
    };

    // An empty rate table means every quote degrades to "unknown city".
    let status = if rate_table.entries == 0 || rate_table.free_zones == 0 {
        "degraded"
    } else {
        "ok"
    };

    let health = HealthStatus {
        status: status.to_string(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        rate_table,
    };

    HttpResponse::Ok().json(health)
}
