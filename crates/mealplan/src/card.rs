use mealweek_recipe::Catalog;
use time::Weekday;

use crate::{DayBadge, Meal, RotatedDay, SlotDisplay, WeeklySchedule};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardBadge {
    Today,
    Day(DayBadge),
}

impl CardBadge {
    pub fn label(&self) -> &'static str {
        match self {
            CardBadge::Today => "Today",
            CardBadge::Day(badge) => badge.label(),
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            CardBadge::Today => "badge-today",
            CardBadge::Day(DayBadge::Grocery) => "badge-grocery",
            CardBadge::Day(DayBadge::Prep) => "badge-prep",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MealRow {
    pub meal: Meal,
    pub display: SlotDisplay,
}

/// Everything needed to draw one day of the rotated week.
#[derive(Clone, Debug, PartialEq)]
pub struct DayCard {
    pub day: Weekday,
    pub is_today: bool,
    pub days_from_now: u8,
    pub badge: Option<CardBadge>,
    pub hero_image: Option<String>,
    pub hero_alt: String,
    pub meals: Vec<MealRow>,
}

impl DayCard {
    pub fn build(rotated: &RotatedDay<'_>, catalog: &Catalog) -> Self {
        let schedule = rotated.schedule;

        let meals = schedule
            .slots()
            .into_iter()
            .map(|(meal, slot)| MealRow {
                meal,
                display: slot.resolve(slot.recipe(catalog)),
            })
            .collect();

        // Today takes precedence over the grocery and prep markers.
        let badge = if rotated.is_today {
            Some(CardBadge::Today)
        } else {
            schedule.badge.map(CardBadge::Day)
        };

        let dinner = schedule.dinner.recipe(catalog);

        Self {
            day: schedule.day,
            is_today: rotated.is_today,
            days_from_now: rotated.days_from_now,
            badge,
            hero_image: dinner.and_then(|r| r.hero_image()).map(str::to_owned),
            hero_alt: dinner.map(|r| r.title.to_owned()).unwrap_or_default(),
            meals,
        }
    }
}

impl WeeklySchedule {
    /// Day cards for the week starting at `today`.
    pub fn cards(&self, today: Weekday, catalog: &Catalog) -> Vec<DayCard> {
        self.rotate(today)
            .iter()
            .map(|day| DayCard::build(day, catalog))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(today: Weekday) -> Vec<DayCard> {
        let schedule = WeeklySchedule::builtin().unwrap();
        let catalog = Catalog::builtin().unwrap();

        schedule.cards(today, &catalog)
    }

    #[test]
    fn test_today_badge_replaces_day_badge() {
        let week = cards(Weekday::Friday);

        assert_eq!(week[0].badge, Some(CardBadge::Today));
        assert_eq!(week[0].badge.map(|b| b.label()), Some("Today"));
    }

    #[test]
    fn test_day_badges_when_not_today() {
        let week = cards(Weekday::Thursday);

        let friday = week.iter().find(|c| c.day == Weekday::Friday).unwrap();
        let sunday = week.iter().find(|c| c.day == Weekday::Sunday).unwrap();
        let monday = week.iter().find(|c| c.day == Weekday::Monday).unwrap();

        assert_eq!(friday.badge, Some(CardBadge::Day(DayBadge::Grocery)));
        assert_eq!(sunday.badge, Some(CardBadge::Day(DayBadge::Prep)));
        assert_eq!(monday.badge, None);
    }

    #[test]
    fn test_hero_image_comes_from_dinner() {
        let week = cards(Weekday::Friday);

        assert_eq!(
            week[0].hero_image.as_deref(),
            Some("/images/recipes/turkey-burrito-skillet.png")
        );
        assert_eq!(week[0].hero_alt, "One-Pan Turkey Burrito Skillet");

        // Monday dinner is leftovers with no recipe.
        let monday = week.iter().find(|c| c.day == Weekday::Monday).unwrap();
        assert_eq!(monday.hero_image, None);
        assert_eq!(monday.hero_alt, "");
    }

    #[test]
    fn test_meal_rows_in_order() {
        let week = cards(Weekday::Friday);
        let meals: Vec<Meal> = week[0].meals.iter().map(|m| m.meal).collect();

        assert_eq!(meals, vec![Meal::Breakfast, Meal::Lunch, Meal::Dinner]);
        assert_eq!(week[0].meals[0].display.label(), "🚗 Grab something");
        assert!(week[0].meals[2].display.show_link());
    }
}
