use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use http_body_util::BodyExt;
use mealweek::{
    AppState, Config, MealData,
    config::{DataConfig, ObservabilityConfig, ScheduleConfig, ServerConfig, SiteConfig},
};
use tower::ServiceExt;

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        observability: ObservabilityConfig::default(),
        schedule: ScheduleConfig::default(),
        data: DataConfig::default(),
        site: SiteConfig::default(),
    }
}

pub fn create_test_app(config: Config) -> Router {
    let data = MealData::builtin().expect("built-in data should load");

    mealweek::router(AppState { config, data }).layer(axum::middleware::from_fn(
        mealweek::middleware::cache_control_middleware,
    ))
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
