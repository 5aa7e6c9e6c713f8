use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use axum_extra::extract::Query;
use mealweek_recipe::{IngredientChecklist, Recipe};
use serde::Deserialize;

use crate::{routes::AppState, template::Template};

#[derive(Deserialize, Default)]
pub struct ChecklistQuery {
    /// Indices of the ingredients already gathered
    #[serde(default)]
    pub checked: Vec<usize>,
}

pub struct IngredientRow<'a> {
    pub item: &'a str,
    pub amount: Option<&'a str>,
    pub checked: bool,
    /// Link that flips this ingredient and keeps the rest as they are
    pub toggle_href: String,
}

#[derive(askama::Template)]
#[template(path = "recipe-detail.html")]
pub struct RecipeDetailTemplate<'a> {
    pub recipe: &'a Recipe,
    pub favorite_label: String,
    pub ingredients: Vec<IngredientRow<'a>>,
    pub gathered: usize,
    pub total: usize,
    pub progress: u8,
    pub ready: bool,
}

fn checklist_href(recipe: &Recipe, indices: &[usize]) -> String {
    let query = indices
        .iter()
        .map(|i| format!("checked={i}"))
        .collect::<Vec<_>>()
        .join("&");

    if query.is_empty() {
        format!("{}#ingredients", recipe.href())
    } else {
        format!("{}?{query}#ingredients", recipe.href())
    }
}

pub async fn page(
    template: Template,
    State(app): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ChecklistQuery>,
) -> impl IntoResponse {
    let Some(recipe) = app.data.catalog.get_by_id(&id) else {
        tracing::debug!(recipe = %id, "Recipe not found");
        return template.not_found();
    };

    let checklist = IngredientChecklist::from_indices(recipe.ingredients.len(), query.checked);

    let ingredients = recipe
        .ingredients
        .iter()
        .enumerate()
        .map(|(index, ingredient)| IngredientRow {
            item: &ingredient.item,
            amount: ingredient.amount.as_deref(),
            checked: checklist.is_checked(index),
            toggle_href: checklist_href(recipe, &checklist.toggled_indices(index)),
        })
        .collect();

    template.render(RecipeDetailTemplate {
        recipe,
        favorite_label: template.site.favorite_label.to_owned(),
        ingredients,
        gathered: checklist.gathered(),
        total: checklist.total(),
        progress: checklist.progress_percent(),
        ready: checklist.all_checked(),
    })
}
