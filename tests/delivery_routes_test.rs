mod common;

use actix_web::test;

use common::TestApp;

#[actix_rt::test]
async fn test_health_check() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/health").to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert!(body["rate_table"]["entries"].as_u64().unwrap() > 0);
    assert!(body["rate_table"]["free_zones"].as_u64().unwrap() > 0);
}

#[actix_rt::test]
async fn test_root_endpoint() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/").to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body = test::read_body(resp).await;
    assert_eq!(body, "MebelMarket API is running");
}

#[actix_rt::test]
async fn test_quote_free_zone_city() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    // city=Екатеринбург
    let req = test::TestRequest::get()
        .uri("/api/delivery/quote?city=%D0%95%D0%BA%D0%B0%D1%82%D0%B5%D1%80%D0%B8%D0%BD%D0%B1%D1%83%D1%80%D0%B3")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["is_free"], true);
    assert_eq!(body["price"], 0);
    assert_eq!(body["city_label"], "Екатеринбург");
    assert_eq!(body["eta"], "1-3 дня");
}

#[actix_rt::test]
async fn test_quote_free_zone_full_address_string() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    // city=г. Екатеринбург, ул. Мира 4
    let req = test::TestRequest::get()
        .uri("/api/delivery/quote?city=%D0%B3.%20%D0%95%D0%BA%D0%B0%D1%82%D0%B5%D1%80%D0%B8%D0%BD%D0%B1%D1%83%D1%80%D0%B3%2C%20%D1%83%D0%BB.%20%D0%9C%D0%B8%D1%80%D0%B0%204")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["is_free"], true);
    assert_eq!(body["city_label"], "г. Екатеринбург, ул. Мира 4");
}

#[actix_rt::test]
async fn test_quote_tabulated_city() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    // city=Тюмень
    let req = test::TestRequest::get()
        .uri("/api/delivery/quote?city=%D0%A2%D1%8E%D0%BC%D0%B5%D0%BD%D1%8C")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["is_free"], false);
    assert_eq!(body["city_label"], "Тюмень");
    assert_eq!(body["price"], 6200);
    assert_eq!(body["distance"], "320 км");
    assert_eq!(body["eta"], "5-10 дней");
}

#[actix_rt::test]
async fn test_quote_unknown_city() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    // city=Нижний Тагил
    let req = test::TestRequest::get()
        .uri("/api/delivery/quote?city=%D0%9D%D0%B8%D0%B6%D0%BD%D0%B8%D0%B9%20%D0%A2%D0%B0%D0%B3%D0%B8%D0%BB")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["is_free"], false);
    assert_eq!(body["price"], 0);
    assert_eq!(body["city_label"], "Нижний Тагил");
    assert_eq!(body["eta"], "уточняется у менеджера");
}

#[actix_rt::test]
async fn test_quote_without_city_param_is_the_blank_sentinel() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/api/delivery/quote").to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["is_free"], false);
    assert_eq!(body["price"], 0);
    assert_eq!(body["city_label"], "");
    // The blank sentinel carries no ETA at all, unlike the unknown-city
    // result.
    assert!(body.get("eta").is_none());
}

#[actix_rt::test]
async fn test_city_suggestions() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    // search=тюм
    let req = test::TestRequest::get()
        .uri("/api/delivery/cities?search=%D1%82%D1%8E%D0%BC")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body, serde_json::json!(["Тюмень"]));
}

#[actix_rt::test]
async fn test_city_suggestions_below_query_threshold() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    // search=к (a single character)
    let req = test::TestRequest::get()
        .uri("/api/delivery/cities?search=%D0%BA")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body, serde_json::json!([]));
}

#[actix_rt::test]
async fn test_city_suggestions_without_param() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/api/delivery/cities").to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body, serde_json::json!([]));
}
