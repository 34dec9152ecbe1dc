use actix_web::{http::header::ContentType, web, HttpResponse, Responder};
use crate::core::HospitalDirectory;
use crate::models::{City, CityListResponse, HealthResponse, HospitalSearchParams};
use crate::routes::error::ApiError;
use crate::services::SearchCache;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub directory: HospitalDirectory,
    pub cache: SearchCache,
}

/// Configure all hospital routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/hospitals", web::get().to(search_hospitals))
        .route("/cities", web::get().to(list_cities));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        hospitals: state.directory.len(),
    })
}

/// Search hospitals
///
/// GET /api/hospitals?q={text}&city={city}
///
/// Both parameters are optional; empty values impose no constraint. When a
/// parameter is repeated only its first value is used.
///
/// Response body:
/// ```json
/// { "data": [Hospital], "total": 1 }
/// ```
async fn search_hospitals(
    state: web::Data<AppState>,
    query: web::Query<Vec<(String, String)>>,
) -> Result<HttpResponse, ApiError> {
    let params = HospitalSearchParams::from_pairs(query.into_inner());

    let body = state
        .cache
        .search_json(&state.directory, &params)
        .await
        .map_err(|e| {
            tracing::error!("Hospital search failed for {:?}: {}", params, e);
            ApiError::from(e)
        })?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::json())
        .body(body))
}

/// List the cities offered by the search control
///
/// GET /api/cities
async fn list_cities() -> impl Responder {
    let data = City::ALL.to_vec();
    HttpResponse::Ok().json(CityListResponse {
        total: data.len(),
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HospitalListResponse;
    use crate::routes::{configure_routes, handle_query_payload_error};
    use actix_web::{test, App};

    fn app_state() -> AppState {
        AppState {
            directory: HospitalDirectory::bundled().unwrap(),
            cache: SearchCache::new(100, 60),
        }
    }

    macro_rules! init_app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(app_state()))
                    .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
                    .configure(configure_routes),
            )
            .await
        };
    }

    fn search_uri(q: Option<&str>, city: Option<&str>) -> String {
        let mut parts = Vec::new();
        if let Some(q) = q {
            parts.push(format!("q={}", urlencoding::encode(q)));
        }
        if let Some(city) = city {
            parts.push(format!("city={}", urlencoding::encode(city)));
        }
        format!("/api/hospitals?{}", parts.join("&"))
    }

    #[actix_web::test]
    async fn test_search_without_params_returns_all() {
        let app = init_app!();
        let req = test::TestRequest::get().uri("/api/hospitals").to_request();
        let body: HospitalListResponse = test::call_and_read_body_json(&app, req).await;

        let directory = HospitalDirectory::bundled().unwrap();
        assert_eq!(body.total, directory.len());
        assert_eq!(body.data, directory.hospitals());
    }

    #[actix_web::test]
    async fn test_search_by_query() {
        let app = init_app!();
        let req = test::TestRequest::get().uri(&search_uri(Some("聯合"), None)).to_request();
        let body: HospitalListResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.total, 1);
        assert_eq!(body.data[0].id, "0101090517");
    }

    #[actix_web::test]
    async fn test_search_by_city_and_query() {
        let app = init_app!();

        let req = test::TestRequest::get()
            .uri(&search_uri(None, Some("高雄市")))
            .to_request();
        let body: HospitalListResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.total, 2);
        assert!(body.data.iter().all(|h| h.city == City::Kaohsiung));

        let req = test::TestRequest::get()
            .uri(&search_uri(Some("聯合"), Some("高雄市")))
            .to_request();
        let body: HospitalListResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.total, 0);
        assert!(body.data.is_empty());
    }

    #[actix_web::test]
    async fn test_empty_params_are_ignored() {
        let app = init_app!();
        let req = test::TestRequest::get().uri("/api/hospitals?q=&city=").to_request();
        let body: HospitalListResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.total, HospitalDirectory::bundled().unwrap().len());
    }

    #[actix_web::test]
    async fn test_repeated_query_uses_first_value() {
        let app = init_app!();
        let uri = format!("{}&q=zzz", search_uri(Some("聯合"), None));
        let req = test::TestRequest::get().uri(&uri).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::OK);
        let body: HospitalListResponse = test::read_body_json(resp).await;
        assert_eq!(body.total, 1);
        assert_eq!(body.data[0].id, "0101090517");
    }

    #[actix_web::test]
    async fn test_unknown_params_are_ignored() {
        let app = init_app!();
        let req = test::TestRequest::get().uri("/api/hospitals?page=2&sort=name").to_request();
        let body: HospitalListResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.total, HospitalDirectory::bundled().unwrap().len());
    }

    #[actix_web::test]
    async fn test_list_cities() {
        let app = init_app!();
        let req = test::TestRequest::get().uri("/api/cities").to_request();
        let body: CityListResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.total, City::ALL.len());
        assert_eq!(body.data[0], City::Taipei);
    }

    #[actix_web::test]
    async fn test_health_check() {
        let app = init_app!();
        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: HealthResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.status, "healthy");
        assert!(body.hospitals > 0);
    }
}
