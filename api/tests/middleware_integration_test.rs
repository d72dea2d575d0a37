//! Integration tests for the catch-all error middleware

#[cfg(test)]
mod tests {
    use actix_web::{
        body::to_bytes,
        error::{ErrorBadRequest, ErrorInternalServerError},
        http::header,
        test, web, App, HttpResponse,
    };
    use ar_api::{ApiError, ErrorHandlerMiddleware, InvalidModel};
    use ar_core::DomainError;
    use ar_shared::config::SerializerSettings;
    use ar_shared::errors::ErrorKey;
    use ar_shared::types::{ResponseStatus, ResultEnvelope};
    use serde_json::Value;

    async fn plain_failure() -> Result<HttpResponse, actix_web::Error> {
        Err(ErrorBadRequest("plain failure"))
    }

    async fn server_failure() -> Result<HttpResponse, actix_web::Error> {
        Err(ErrorInternalServerError("database unavailable"))
    }

    async fn domain_failure() -> Result<HttpResponse, ApiError> {
        Err(DomainError::forbidden().into())
    }

    async fn invalid_failure() -> Result<HttpResponse, InvalidModel> {
        Err(InvalidModel::from_binding("query", "missing field `page`"))
    }

    async fn panicking() -> HttpResponse {
        panic!("kaboom")
    }

    async fn plain_success() -> HttpResponse {
        HttpResponse::Ok().body("plain")
    }

    async fn item(id: web::Path<u32>) -> HttpResponse {
        HttpResponse::Ok().body(format!("item {}", id.into_inner()))
    }

    macro_rules! app {
        () => {
            test::init_service(
                App::new()
                    .wrap(ErrorHandlerMiddleware::new())
                    .route("/plain-failure", web::get().to(plain_failure))
                    .route("/server-failure", web::get().to(server_failure))
                    .route("/domain-failure", web::get().to(domain_failure))
                    .route("/invalid-failure", web::get().to(invalid_failure))
                    .route("/panic", web::get().to(panicking))
                    .route("/plain-success", web::get().to(plain_success))
                    .route("/items/{id}", web::get().to(item)),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_unclassified_error_becomes_unknown_400() {
        let app = app!();

        for (route, message) in [
            ("/plain-failure", "plain failure"),
            ("/server-failure", "database unavailable"),
        ] {
            let req = test::TestRequest::get().uri(route).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status().as_u16(), 400);
            assert_eq!(
                resp.headers().get(header::CONTENT_TYPE).unwrap(),
                "application/json; charset=utf-8"
            );

            let result: ResultEnvelope = test::read_body_json(resp).await;
            assert_eq!(result.status, ResponseStatus::Error);
            assert_eq!(result.error, Some(ErrorKey::Unknown));
            assert_eq!(result.message.as_deref(), Some(message));
        }
    }

    #[actix_web::test]
    async fn test_domain_error_keeps_its_classification() {
        let app = app!();

        let req = test::TestRequest::get().uri("/domain-failure").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 403);

        let result: ResultEnvelope = test::read_body_json(resp).await;
        assert_eq!(result.code, 403);
        assert_eq!(result.error, Some(ErrorKey::Forbidden));
        assert_eq!(result.message.as_deref(), Some(ErrorKey::Forbidden.description()));
    }

    #[actix_web::test]
    async fn test_invalid_model_keeps_its_state() {
        let app = app!();

        let req = test::TestRequest::get().uri("/invalid-failure").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 422);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "FAILED_TO_PARSE_REQUEST");
        assert_eq!(body["data"]["query"][0], "missing field `page`");
    }

    #[actix_web::test]
    async fn test_panic_becomes_unknown_400() {
        let app = app!();

        let req = test::TestRequest::get().uri("/panic").to_request();
        let err = test::try_call_service(&app, req).await.unwrap_err();
        let resp = err.error_response();
        assert_eq!(resp.status().as_u16(), 400);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json; charset=utf-8"
        );

        let body = to_bytes(resp.into_body()).await.unwrap();
        let result: ResultEnvelope = serde_json::from_slice(&body).unwrap();
        assert_eq!(result.error, Some(ErrorKey::Unknown));
        assert_eq!(result.message.as_deref(), Some("kaboom"));
    }

    #[actix_web::test]
    async fn test_success_passes_through_untouched() {
        let app = app!();

        let req = test::TestRequest::get().uri("/plain-success").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 200);

        let body = test::read_body(resp).await;
        assert_eq!(body, "plain");
    }

    #[actix_web::test]
    async fn test_routing_with_path_parameters_passes_through() {
        let app = app!();

        let req = test::TestRequest::get().uri("/items/42").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 200);

        let body = test::read_body(resp).await;
        assert_eq!(body, "item 42");
    }

    #[actix_web::test]
    async fn test_domain_error_through_middleware_keeps_not_found() {
        async fn missing() -> Result<HttpResponse, ApiError> {
            Err(DomainError::not_found().into())
        }

        let app = test::init_service(
            App::new()
                .wrap(ErrorHandlerMiddleware::new())
                .route("/missing", web::get().to(missing)),
        )
        .await;

        let req = test::TestRequest::get().uri("/missing").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 404);

        let result: ResultEnvelope = test::read_body_json(resp).await;
        assert_eq!(result.error, Some(ErrorKey::NotFound));
    }

    #[actix_web::test]
    async fn test_registered_settings_apply_to_every_error_body() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(SerializerSettings {
                    strip_nulls: true,
                    pretty: true,
                }))
                .wrap(ErrorHandlerMiddleware::new())
                .route("/plain-failure", web::get().to(plain_failure))
                .route("/domain-failure", web::get().to(domain_failure))
                .route("/invalid-failure", web::get().to(invalid_failure)),
        )
        .await;

        for (route, status) in [
            ("/plain-failure", 400),
            ("/domain-failure", 403),
            ("/invalid-failure", 422),
        ] {
            let req = test::TestRequest::get().uri(route).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status().as_u16(), status, "route {route}");

            let body = test::read_body(resp).await;
            assert!(body.contains(&b'\n'), "route {route} is pretty printed");
        }
    }
}
