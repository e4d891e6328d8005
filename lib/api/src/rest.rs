use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use cinex_core::{ContentBasedRecommender, Error, Recommender};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Result-size default applied when a request omits `limit`. The engine
/// itself rejects zero; the default lives here, at the caller.
const DEFAULT_LIMIT: usize = 10;

#[derive(Deserialize)]
struct RecommendationRequest {
    movie_title: String,
    features: Vec<String>,
    limit: Option<usize>,
}

#[derive(Serialize)]
struct RecommendationResponse {
    movie_title: String,
    result: Vec<String>,
}

pub struct RestApi;

impl RestApi {
    pub async fn start(
        engine: Arc<ContentBasedRecommender>,
        port: u16,
    ) -> std::io::Result<()> {
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(engine.clone()))
                .route("/features", web::get().to(list_features))
                .route("/recommendations", web::post().to(recommend))
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }
}

async fn list_features(
    engine: web::Data<Arc<ContentBasedRecommender>>,
) -> ActixResult<HttpResponse> {
    let features: Vec<&str> = engine.catalog().feature_columns();
    Ok(HttpResponse::Ok().json(features))
}

async fn recommend(
    engine: web::Data<Arc<ContentBasedRecommender>>,
    req: web::Json<RecommendationRequest>,
) -> ActixResult<HttpResponse> {
    let limit = req.limit.unwrap_or(DEFAULT_LIMIT);
    debug!(
        "recommendation request: title={:?} features={:?} limit={}",
        req.movie_title, req.features, limit
    );

    match engine.similar(&req.movie_title, &req.features, limit) {
        Ok(result) => Ok(HttpResponse::Ok().json(RecommendationResponse {
            movie_title: req.movie_title.clone(),
            result,
        })),
        Err(e) => Ok(error_response(&e)),
    }
}

/// Map engine error kinds onto HTTP statuses: absent title is a 404, bad
/// client input is a 400, anything else is a 500.
fn error_response(err: &Error) -> HttpResponse {
    let body = serde_json::json!({ "error": err.to_string() });
    match err {
        Error::TitleNotFound(_) => HttpResponse::NotFound().json(body),
        Error::UnknownFeature(_) | Error::InvalidLimit(_) => {
            HttpResponse::BadRequest().json(body)
        }
        _ => HttpResponse::InternalServerError().json(body),
    }
}
