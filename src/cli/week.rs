use std::fmt;

use anyhow::Result;
use mealweek_mealplan::{DayCard, parse_weekday};

use crate::{config::Config, data};

/// Plain-text rendering of the rotated week.
pub struct WeekText<'a>(pub &'a [DayCard]);

impl fmt::Display for WeekText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in self.0 {
            write!(f, "{}", card.day)?;
            if let Some(badge) = card.badge {
                write!(f, "  [{}]", badge.label())?;
            }
            writeln!(f)?;

            for row in &card.meals {
                write!(f, "  {:<10} {}", row.meal.as_ref(), row.display.label())?;
                if row.display.favorite {
                    write!(f, " ⭐")?;
                }
                if let Some(href) = row.display.href() {
                    write!(f, " → {href}")?;
                }
                if let Some(badge) = row.display.badge() {
                    write!(f, " [{badge}]")?;
                }
                writeln!(f)?;
            }
        }

        Ok(())
    }
}

pub fn week(config: &Config, day: Option<String>) -> Result<()> {
    let data = data::MealData::load(&config.data)?;

    let today = match day {
        Some(day) => parse_weekday(&day)?,
        None => data::today(config.schedule.utc_offset_hours)?,
    };

    let cards = data.schedule.cards(today, &data.catalog);
    print!("{}", WeekText(&cards));

    if !data.schedule.notes().is_empty() {
        println!();
        for note in data.schedule.notes() {
            println!("{note}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mealweek_mealplan::Weekday;

    fn text(today: Weekday) -> String {
        let data = data::MealData::builtin().unwrap();
        let cards = data.schedule.cards(today, &data.catalog);

        WeekText(&cards).to_string()
    }

    #[test]
    fn test_week_starts_on_today() {
        let text = text(Weekday::Friday);
        let first = text.lines().next().unwrap();

        assert_eq!(first, "Friday  [Today]");
    }

    #[test]
    fn test_week_links_planned_dinner() {
        let text = text(Weekday::Friday);

        assert!(text.contains("→ /recipes/turkey-burrito-skillet"));
    }

    #[test]
    fn test_week_marks_prep_slots() {
        let text = text(Weekday::Monday);

        assert!(text.contains("[PREP]"));
        assert!(text.contains("[🥣 Prep Day]"));
    }

    #[test]
    fn test_week_lists_every_meal() {
        let text = text(Weekday::Sunday);

        assert_eq!(text.lines().count(), 7 * 4);
    }
}
