use std::path::Path;

use mealweek_recipe::Catalog;
use serde::Deserialize;
use strum::{AsRefStr, Display, EnumString};
use time::Weekday;

use crate::{Error, Meal, MealSlot, Result, WEEK, weekday_index};

const BUILTIN: &str = include_str!("../data/schedule.json");

/// Marker for days with something special going on.
#[derive(EnumString, Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DayBadge {
    Grocery,
    Prep,
}

impl DayBadge {
    pub fn label(&self) -> &'static str {
        match self {
            DayBadge::Grocery => "🛒 Grocery",
            DayBadge::Prep => "🥣 Prep Day",
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DaySchedule {
    #[serde(deserialize_with = "crate::weekday::deserialize")]
    pub day: Weekday,
    pub badge: Option<DayBadge>,
    pub breakfast: MealSlot,
    pub lunch: MealSlot,
    pub dinner: MealSlot,
}

impl DaySchedule {
    pub fn slot(&self, meal: Meal) -> &MealSlot {
        match meal {
            Meal::Breakfast => &self.breakfast,
            Meal::Lunch => &self.lunch,
            Meal::Dinner => &self.dinner,
        }
    }

    pub fn slots(&self) -> [(Meal, &MealSlot); 3] {
        [
            (Meal::Breakfast, &self.breakfast),
            (Meal::Lunch, &self.lunch),
            (Meal::Dinner, &self.dinner),
        ]
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ScheduleFile {
    days: Vec<DaySchedule>,
    #[serde(default)]
    notes: Vec<String>,
}

/// The fixed weekly template.
///
/// Holds exactly one entry per weekday, stored in canonical order so a
/// lookup by weekday cannot miss.
#[derive(Debug, Clone)]
pub struct WeeklySchedule {
    days: Vec<DaySchedule>,
    notes: Vec<String>,
}

impl WeeklySchedule {
    pub fn new(days: Vec<DaySchedule>, notes: Vec<String>) -> Result<Self> {
        let mut slots: [Option<DaySchedule>; 7] = Default::default();

        for day in days {
            let slot = &mut slots[usize::from(weekday_index(day.day))];
            if slot.is_some() {
                return Err(Error::DuplicateDay(day.day));
            }

            for (meal, meal_slot) in day.slots() {
                if meal_slot.state.links_recipe() && meal_slot.recipe_id.is_none() {
                    tracing::warn!(
                        day = %day.day,
                        meal = %meal,
                        state = %meal_slot.state,
                        "slot has no recipe to link to"
                    );
                }
            }

            *slot = Some(day);
        }

        let days = WEEK
            .iter()
            .zip(slots)
            .map(|(weekday, slot)| slot.ok_or(Error::MissingDay(*weekday)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { days, notes })
    }

    /// The schedule shipped inside the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let file: ScheduleFile = serde_json::from_str(json)?;

        Self::new(file.days, file.notes)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&json)
    }

    /// Checks that every slot recipe reference exists in the catalog.
    pub fn validate_against(&self, catalog: &Catalog) -> Result<()> {
        for day in &self.days {
            for (meal, slot) in day.slots() {
                let Some(recipe_id) = slot.recipe_id.as_deref() else {
                    continue;
                };

                if !catalog.contains(recipe_id) {
                    return Err(Error::UnknownRecipe {
                        day: day.day,
                        meal,
                        recipe_id: recipe_id.to_owned(),
                    });
                }
            }
        }

        Ok(())
    }

    pub fn get(&self, day: Weekday) -> &DaySchedule {
        &self.days[usize::from(weekday_index(day))]
    }

    /// Days in canonical order, Sunday first.
    pub fn days(&self) -> &[DaySchedule] {
        &self.days
    }

    pub fn notes(&self) -> &[String] {
        &self.notes
    }
}
