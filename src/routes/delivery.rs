use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::data::rate_table::RateTable;
use crate::models::floor_carry::{FloorCarryRequest, FurnitureCategory};
use crate::services::city_search::CitySearch;
use crate::services::delivery_service::DeliveryService;
use crate::services::floor_carry_service::FloorCarryService;

#[derive(serde::Deserialize)]
pub struct QuoteParams {
    city: Option<String>,
    address: Option<String>,
}

#[derive(serde::Deserialize)]
pub struct SuggestParams {
    search: Option<String>,
}

/*
    /api/delivery/quote?city=..&address=..
*/
pub async fn get_quote(
    data: web::Data<Arc<RateTable>>,
    params: web::Query<QuoteParams>,
) -> impl Responder {
    let table = data.into_inner();

    // A missing city param is the "nothing typed yet" case, not an error.
    let city = params.city.as_deref().unwrap_or("");
    let quote = DeliveryService::resolve(&table, city, params.address.as_deref());

    HttpResponse::Ok().json(quote)
}

/*
    /api/delivery/cities?search=..
*/
pub async fn get_city_suggestions(
    data: web::Data<Arc<RateTable>>,
    params: web::Query<SuggestParams>,
) -> impl Responder {
    let table = data.into_inner();

    let query = params.search.as_deref().unwrap_or("");
    let suggestions = CitySearch::suggest(&table, query);

    HttpResponse::Ok().json(suggestions)
}

/*
    /api/delivery/floor-carry
*/
pub async fn calculate_floor_carry(body: web::Json<FloorCarryRequest>) -> impl Responder {
    let request = body.into_inner();

    // The calculator treats a countertop without a length as a programmer
    // error, so the contract is enforced here at the boundary.
    if request.carry_required
        && request.category == FurnitureCategory::Countertop
        && request.countertop_length_mm.is_none()
    {
        return HttpResponse::BadRequest()
            .body("countertop_length_mm is required for countertop carry quotes");
    }

    let quote = FloorCarryService::quote(&request);

    HttpResponse::Ok().json(quote)
}
