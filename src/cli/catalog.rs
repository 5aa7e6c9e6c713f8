use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use anyhow::Result;
use mealweek_recipe::{Catalog, Category};
use strum::VariantArray;

use crate::{config::Config, data::MealData};

pub fn recipes(config: &Config, category: Option<Category>) -> Result<()> {
    let data = MealData::load(&config.data)?;

    let categories = match category {
        Some(category) => vec![category],
        None => Category::VARIANTS.to_vec(),
    };

    for category in categories {
        let recipes = data.catalog.by_category(category);
        if recipes.is_empty() {
            continue;
        }

        println!("{} {}", category.icon(), category.heading());
        for recipe in recipes {
            let favorite = if recipe.favorite { " ⭐" } else { "" };
            println!(
                "  {:<28} {}{} ({} · Serves {})",
                recipe.id, recipe.title, favorite, recipe.total_time, recipe.serves
            );
        }
    }

    Ok(())
}

pub fn check(config: &Config) -> Result<()> {
    let data = MealData::load(&config.data)?;

    println!(
        "OK: {} recipes, {} days, {} notes",
        data.catalog.len(),
        data.schedule.days().len(),
        data.schedule.notes().len()
    );

    Ok(())
}

pub fn images(config: &Config, missing: bool) -> Result<()> {
    let data = MealData::load(&config.data)?;
    let images_dir = Path::new(&config.data.images_dir);

    for reference in image_refs(&data.catalog) {
        let path = image_path(images_dir, reference);
        let exists = path.is_file();

        if missing && exists {
            continue;
        }

        if missing {
            println!("{reference}");
        } else {
            let status = if exists { "ok" } else { "missing" };
            println!("{status:<8} {reference}");
        }
    }

    Ok(())
}

/// Every distinct image path the catalog references, sorted.
pub fn image_refs(catalog: &Catalog) -> BTreeSet<&str> {
    catalog
        .recipes()
        .iter()
        .flat_map(|recipe| recipe.image_refs())
        .collect()
}

/// Maps a `/images/...` reference onto the images directory, the way `/images` is served.
pub fn image_path(images_dir: &Path, reference: &str) -> PathBuf {
    let relative = reference
        .strip_prefix("/images/")
        .unwrap_or_else(|| reference.trim_start_matches('/'));

    images_dir.join(relative)
}
