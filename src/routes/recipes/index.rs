use axum::{extract::State, response::IntoResponse};
use mealweek_recipe::{Category, Recipe};
use strum::VariantArray;

use crate::{routes::AppState, template::Template};

pub struct CategorySection<'a> {
    pub heading: &'static str,
    pub icon: &'static str,
    pub recipes: Vec<&'a Recipe>,
}

#[derive(askama::Template)]
#[template(path = "recipes.html")]
pub struct RecipesTemplate<'a> {
    pub sections: Vec<CategorySection<'a>>,
}

pub async fn page(template: Template, State(app): State<AppState>) -> impl IntoResponse {
    let sections = Category::VARIANTS
        .iter()
        .map(|category| CategorySection {
            heading: category.heading(),
            icon: category.icon(),
            recipes: app.data.catalog.by_category(*category),
        })
        .filter(|section| !section.recipes.is_empty())
        .collect();

    template.render(RecipesTemplate { sections })
}
