use actix_cors::Cors;
use actix_web::http::Method;

/// Allows cross-origin requests from any origin.
///
/// Responses carry `Access-Control-Allow-Origin: *`, preflights echo the
/// requested headers back and no `Access-Control-Max-Age` is sent.
pub fn permissive_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allowed_methods([
            Method::GET,
            Method::POST,
            Method::HEAD,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
        ])
        .allow_any_header()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::{header, StatusCode};
    use actix_web::{test, web, App, HttpResponse};

    async fn pong() -> HttpResponse {
        HttpResponse::Ok().body("pong")
    }

    #[actix_web::test]
    async fn test_simple_request_gets_wildcard_origin() {
        let app = test::init_service(
            App::new()
                .wrap(permissive_cors())
                .route("/ping", web::get().to(pong)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/ping")
            .insert_header((header::ORIGIN, "http://example.com"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );
    }

    #[actix_web::test]
    async fn test_preflight_is_answered_without_handler() {
        let app = test::init_service(
            App::new()
                .wrap(permissive_cors())
                .route("/ping", web::get().to(pong)),
        )
        .await;

        let req = test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/ping")
            .insert_header((header::ORIGIN, "http://example.com"))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "PUT"))
            .insert_header((header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let headers = resp.headers();
        assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), "*");
        let methods = headers
            .get(header::ACCESS_CONTROL_ALLOW_METHODS)
            .unwrap()
            .to_str()
            .unwrap();
        for method in ["GET", "POST", "HEAD", "PUT", "DELETE", "PATCH"] {
            assert!(methods.contains(method), "Missing {method} in {methods}");
        }
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_HEADERS).unwrap(),
            "content-type"
        );
        assert!(headers.get(header::ACCESS_CONTROL_MAX_AGE).is_none());
    }
}
