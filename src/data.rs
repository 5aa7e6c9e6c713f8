use std::sync::Arc;

use anyhow::{Context, Result};
use mealweek_mealplan::{Weekday, WeeklySchedule};
use mealweek_recipe::Catalog;
use time::{OffsetDateTime, UtcOffset};

use crate::config::DataConfig;

/// Catalog and schedule, loaded and cross-checked once at startup.
#[derive(Clone, Debug)]
pub struct MealData {
    pub catalog: Arc<Catalog>,
    pub schedule: Arc<WeeklySchedule>,
}

impl MealData {
    pub fn load(config: &DataConfig) -> Result<Self> {
        let catalog = match &config.recipes {
            Some(path) => Catalog::from_path(path)
                .with_context(|| format!("Failed to load recipe catalog from {path}"))?,
            None => Catalog::builtin().context("Failed to load built-in recipe catalog")?,
        };

        let schedule = match &config.schedule {
            Some(path) => WeeklySchedule::from_path(path)
                .with_context(|| format!("Failed to load weekly schedule from {path}"))?,
            None => WeeklySchedule::builtin().context("Failed to load built-in weekly schedule")?,
        };

        Self::new(catalog, schedule)
    }

    pub fn builtin() -> Result<Self> {
        Self::new(Catalog::builtin()?, WeeklySchedule::builtin()?)
    }

    pub fn new(catalog: Catalog, schedule: WeeklySchedule) -> Result<Self> {
        schedule
            .validate_against(&catalog)
            .context("Weekly schedule does not match the recipe catalog")?;

        tracing::info!(
            recipes = catalog.len(),
            days = schedule.days().len(),
            "Meal data loaded"
        );

        Ok(Self {
            catalog: Arc::new(catalog),
            schedule: Arc::new(schedule),
        })
    }
}

/// The current weekday at the given offset from UTC.
pub fn today(utc_offset_hours: i8) -> Result<Weekday> {
    let offset = UtcOffset::from_hms(utc_offset_hours, 0, 0)?;

    Ok(OffsetDateTime::now_utc().to_offset(offset).weekday())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DataConfig;
    use temp_dir::TempDir;

    #[test]
    fn test_load_builtin_by_default() {
        let data = MealData::load(&DataConfig::default()).unwrap();

        assert_eq!(data.catalog.len(), 8);
        assert_eq!(data.schedule.days().len(), 7);
    }

    #[test]
    fn test_load_rejects_schedule_with_unknown_recipe() {
        let dir = TempDir::new().unwrap();
        let path = dir.child("recipes.json");
        std::fs::write(&path, r#"{ "recipes": [] }"#).unwrap();

        let config = DataConfig {
            recipes: Some(path.to_string_lossy().into_owned()),
            ..Default::default()
        };

        let err = MealData::load(&config).unwrap_err();
        assert!(format!("{err:#}").contains("unknown recipe"));
    }

    #[test]
    fn test_today_offsets() {
        assert!(today(0).is_ok());
        assert!(today(14).is_ok());
        assert!(today(-12).is_ok());
    }
}
