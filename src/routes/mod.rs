use axum::{Router, response::IntoResponse, routing::get};
use tower_http::services::ServeDir;

use crate::{assets::AssetsService, config::Config, data::MealData, template::Template};

pub mod health;
pub mod index;
pub mod recipes;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub data: MealData,
}

pub fn router(app_state: AppState) -> Router {
    let images = ServeDir::new(&app_state.config.data.images_dir);

    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/", get(index::page))
        .route("/recipes", get(recipes::index::page))
        .route("/recipes/{id}", get(recipes::detail::page))
        .nest_service("/static", AssetsService::new())
        .nest_service("/images", images)
        .fallback(fallback)
        .with_state(app_state)
}

async fn fallback(template: Template) -> impl IntoResponse {
    template.not_found()
}
