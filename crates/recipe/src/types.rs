use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use validator::Validate;

/// Placeholder shown when a recipe has neither a rendered image nor an emoji.
pub const PLACEHOLDER_EMOJI: &str = "🍽️";

/// Whether an image reference points at a rendered asset.
///
/// Image paths are opaque strings produced by the offline image pipeline. Only
/// `.png` files are final renders, anything else is treated as absent.
pub fn is_rendered_image(path: &str) -> bool {
    path.ends_with(".png")
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
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Breakfast,
    Lunch,
    Dinner,
}

impl Category {
    pub fn heading(&self) -> &'static str {
        match self {
            Category::Breakfast => "Breakfasts",
            Category::Lunch => "Lunches",
            Category::Dinner => "Dinners",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Category::Breakfast => "🌅",
            Category::Lunch => "🥪",
            Category::Dinner => "🍽️",
        }
    }
}

#[derive(Deserialize, Serialize, Validate, Clone, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Ingredient {
    #[validate(length(min = 1, message = "ingredient item must not be empty"))]
    pub item: String,
    pub amount: Option<String>,
}

#[derive(Deserialize, Validate, Clone, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PrepStep {
    #[validate(length(min = 1, message = "prep step text must not be empty"))]
    pub text: String,
    pub image: Option<String>,
}

/// Highlighted note attached to an instruction step.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Callout {
    pub message: String,
    pub detail: Option<String>,
}

#[derive(Deserialize, Serialize, Validate, Clone, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Instruction {
    #[validate(range(min = 1, message = "step numbers start at 1"))]
    pub step: u16,
    pub title: Option<String>,
    #[validate(length(min = 1, message = "instruction text must not be empty"))]
    pub text: String,
    pub image: Option<String>,
    /// Something to time, e.g. a simmer that must not be interrupted.
    pub timing: Option<Callout>,
    /// Something to set aside for a later meal.
    pub reserve: Option<Callout>,
}

impl Instruction {
    pub fn rendered_image(&self) -> Option<&str> {
        self.image.as_deref().filter(|i| is_rendered_image(i))
    }

    /// Alt text for the step image.
    pub fn label(&self) -> String {
        match &self.title {
            Some(title) => title.to_owned(),
            None => format!("Step {}", self.step),
        }
    }
}

#[derive(Deserialize, Validate, Clone, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Recipe {
    #[validate(length(min = 1, message = "recipe id must not be empty"))]
    pub id: String,
    #[validate(length(min = 1, message = "recipe title must not be empty"))]
    pub title: String,
    pub emoji: Option<String>,
    pub image: Option<String>,
    pub category: Category,
    pub prep_time: Option<String>,
    pub cook_time: Option<String>,
    pub total_time: String,
    pub serves: String,
    #[serde(default)]
    pub favorite: bool,
    pub description: Option<String>,
    #[validate(length(min = 1, message = "a recipe needs at least one ingredient"), nested)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    #[validate(nested)]
    pub prep_steps: Vec<PrepStep>,
    #[validate(length(min = 1, message = "a recipe needs at least one instruction"), nested)]
    pub instructions: Vec<Instruction>,
    #[serde(default)]
    pub tips: Vec<String>,
}

impl Recipe {
    pub fn hero_image(&self) -> Option<&str> {
        self.image.as_deref().filter(|i| is_rendered_image(i))
    }

    pub fn display_emoji(&self) -> &str {
        self.emoji.as_deref().unwrap_or(PLACEHOLDER_EMOJI)
    }

    /// Image shown at the top of the prep section, taken from the first prep step.
    pub fn prep_image(&self) -> Option<&str> {
        self.prep_steps
            .first()
            .and_then(|s| s.image.as_deref())
            .filter(|i| is_rendered_image(i))
    }

    pub fn href(&self) -> String {
        format!("/recipes/{}", self.id)
    }

    /// Whether steps are numbered 1, 2, 3... in order.
    pub fn has_contiguous_steps(&self) -> bool {
        self.instructions
            .iter()
            .enumerate()
            .all(|(i, s)| usize::from(s.step) == i + 1)
    }

    /// Every image path this recipe references, rendered or not.
    pub fn image_refs(&self) -> impl Iterator<Item = &str> {
        self.image
            .as_deref()
            .into_iter()
            .chain(self.prep_steps.iter().filter_map(|s| s.image.as_deref()))
            .chain(self.instructions.iter().filter_map(|s| s.image.as_deref()))
    }
}
