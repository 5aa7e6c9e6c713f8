use mealweek_recipe::{Catalog, Recipe};
use serde::Deserialize;
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Shown when a slot has neither override text nor a resolved recipe.
pub const PLACEHOLDER_TEXT: &str = "—";

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MealState {
    Planned,
    Prep,
    Unavailable,
    Leftovers,
    Flexible,
}

impl MealState {
    /// Only cooked meals link through to their recipe.
    pub fn links_recipe(&self) -> bool {
        match self {
            MealState::Planned | MealState::Prep => true,
            MealState::Unavailable | MealState::Leftovers | MealState::Flexible => false,
        }
    }

    pub fn badge(&self) -> Option<&'static str> {
        match self {
            MealState::Prep => Some("PREP"),
            MealState::Planned
            | MealState::Unavailable
            | MealState::Leftovers
            | MealState::Flexible => None,
        }
    }

    /// CSS class used for the slot text.
    pub fn style(&self) -> &'static str {
        match self {
            MealState::Planned => "meal-planned",
            MealState::Prep => "meal-prep",
            MealState::Unavailable => "meal-unavailable",
            MealState::Leftovers | MealState::Flexible => "meal-flex",
        }
    }
}

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
)]
pub enum Meal {
    Breakfast,
    Lunch,
    Dinner,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct MealSlot {
    pub recipe_id: Option<String>,
    pub state: MealState,
    pub display_text: Option<String>,
    pub emoji: Option<String>,
}

impl MealSlot {
    pub fn recipe<'c>(&self, catalog: &'c Catalog) -> Option<&'c Recipe> {
        self.recipe_id
            .as_deref()
            .and_then(|id| catalog.get_by_id(id))
    }

    /// Display attributes for this slot given the recipe its id resolved to.
    pub fn resolve(&self, recipe: Option<&Recipe>) -> SlotDisplay {
        let emoji = self
            .emoji
            .as_deref()
            .or_else(|| recipe.and_then(|r| r.emoji.as_deref()))
            .unwrap_or_default()
            .to_owned();

        let text = self
            .display_text
            .as_deref()
            .or_else(|| recipe.map(|r| r.title.as_str()))
            .unwrap_or(PLACEHOLDER_TEXT)
            .to_owned();

        let linked = recipe.filter(|_| self.state.links_recipe());

        SlotDisplay {
            state: self.state,
            emoji,
            text,
            link: linked.map(|r| r.id.to_owned()),
            favorite: linked.is_some_and(|r| r.favorite),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SlotDisplay {
    pub state: MealState,
    pub emoji: String,
    pub text: String,
    /// Id of the recipe to link to.
    pub link: Option<String>,
    pub favorite: bool,
}

impl SlotDisplay {
    pub fn show_link(&self) -> bool {
        self.link.is_some()
    }

    pub fn href(&self) -> Option<String> {
        self.link.as_ref().map(|id| format!("/recipes/{id}"))
    }

    pub fn badge(&self) -> Option<&'static str> {
        self.state.badge()
    }

    pub fn style(&self) -> &'static str {
        self.state.style()
    }

    /// Emoji and text joined the way they are displayed.
    pub fn label(&self) -> String {
        if self.emoji.is_empty() {
            self.text.to_owned()
        } else {
            format!("{} {}", self.emoji, self.text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn slot(state: MealState, recipe_id: Option<&str>) -> MealSlot {
        MealSlot {
            recipe_id: recipe_id.map(str::to_owned),
            state,
            display_text: None,
            emoji: None,
        }
    }

    #[test]
    fn test_planned_slot_resolves_recipe() {
        let catalog = Catalog::builtin().unwrap();
        let slot = slot(MealState::Planned, Some("turkey-burrito-skillet"));

        let display = slot.resolve(slot.recipe(&catalog));

        assert_eq!(display.emoji, "🍲");
        assert_eq!(display.text, "One-Pan Turkey Burrito Skillet");
        assert!(display.show_link());
        assert!(display.favorite);
        assert_eq!(
            display.href().as_deref(),
            Some("/recipes/turkey-burrito-skillet")
        );
    }

    #[test]
    fn test_unavailable_slot_never_links() {
        let catalog = Catalog::builtin().unwrap();
        let mut slot = slot(MealState::Unavailable, None);

        let display = slot.resolve(slot.recipe(&catalog));
        assert!(!display.show_link());
        assert_eq!(display.text, PLACEHOLDER_TEXT);
        assert_eq!(display.emoji, "");

        slot.display_text = Some("Grab something".to_owned());
        slot.emoji = Some("🚗".to_owned());
        let display = slot.resolve(slot.recipe(&catalog));
        assert!(!display.show_link());
        assert_eq!(display.label(), "🚗 Grab something");
    }

    #[test]
    fn test_leftovers_with_recipe_does_not_link() {
        let catalog = Catalog::builtin().unwrap();
        let slot = slot(MealState::Leftovers, Some("cajun-sirloin"));

        let display = slot.resolve(slot.recipe(&catalog));

        assert!(!display.show_link());
        assert!(!display.favorite);
        assert_eq!(display.text, "Cajun Sirloin with Parmesan Smashed Potatoes");
    }

    #[test]
    fn test_overrides_win_over_recipe() {
        let catalog = Catalog::builtin().unwrap();
        let slot = MealSlot {
            recipe_id: Some("freezer-breakfast-burritos".to_owned()),
            state: MealState::Prep,
            display_text: Some("PREP: Make Freezer Burritos".to_owned()),
            emoji: Some("🥣".to_owned()),
        };

        let display = slot.resolve(slot.recipe(&catalog));

        assert_eq!(display.label(), "🥣 PREP: Make Freezer Burritos");
        assert!(display.show_link());
        assert_eq!(display.badge(), Some("PREP"));
        assert_eq!(display.style(), "meal-prep");
    }

    #[test]
    fn test_unknown_recipe_degrades_to_placeholder() {
        let catalog = Catalog::builtin().unwrap();
        let slot = slot(MealState::Planned, Some("pancakes"));

        let display = slot.resolve(slot.recipe(&catalog));

        assert!(!display.show_link());
        assert_eq!(display.text, PLACEHOLDER_TEXT);
    }

    #[test]
    fn test_state_rules() {
        let linking: Vec<MealState> = MealState::VARIANTS
            .iter()
            .copied()
            .filter(MealState::links_recipe)
            .collect();
        assert_eq!(linking, vec![MealState::Planned, MealState::Prep]);

        assert_eq!(MealState::Leftovers.style(), MealState::Flexible.style());
        assert_eq!(MealState::Planned.badge(), None);
        assert_eq!(MealState::from_str("leftovers").unwrap(), MealState::Leftovers);
        assert!(MealState::from_str("skipped").is_err());
    }

    #[test]
    fn test_invalid_state_is_rejected() {
        let result = serde_json::from_str::<MealSlot>(r#"{ "state": "skipped" }"#);

        assert!(result.is_err());
    }
}
