use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use mealweek_mealplan::{DayCard, parse_weekday};
use serde::Deserialize;

use crate::{data, routes::AppState, template::Template};

#[derive(Deserialize, Default)]
pub struct WeekQuery {
    /// Weekday name or 0-6 (Sunday first) to show instead of today
    pub day: Option<String>,
}

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub title: String,
    pub subtitle: String,
    pub cards: Vec<DayCard>,
    pub notes: Vec<String>,
}

pub async fn page(
    template: Template,
    State(app): State<AppState>,
    Query(query): Query<WeekQuery>,
) -> Response {
    let today = match query.day.as_deref() {
        Some(day) => match parse_weekday(day) {
            Ok(day) => day,
            Err(err) => return (StatusCode::BAD_REQUEST, err.to_string()).into_response(),
        },
        None => match data::today(app.config.schedule.utc_offset_hours) {
            Ok(day) => day,
            Err(err) => {
                tracing::error!(err = %err, "Failed to resolve today's weekday");
                return template.server_error();
            }
        },
    };

    let cards = app.data.schedule.cards(today, &app.data.catalog);

    template.render(IndexTemplate {
        title: template.site.title.to_owned(),
        subtitle: template.site.subtitle.to_owned(),
        cards,
        notes: app.data.schedule.notes().to_vec(),
    })
}
