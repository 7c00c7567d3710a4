//! Restaurant command handlers.

use prostory_core::models::{MealType, RestaurantBenefit, RestaurantImage};
use tabled::Tabled;

use crate::cli::{RestaurantArgs, RestaurantCommand};
use crate::error::CliError;
use crate::output;

use super::Context;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct ImageRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Order")]
    order: i32,
    #[tabled(rename = "Alt")]
    alt: String,
    #[tabled(rename = "Image")]
    image: String,
}

impl From<&RestaurantImage> for ImageRow {
    fn from(i: &RestaurantImage) -> Self {
        Self {
            id: i.id.to_string(),
            order: i.order,
            alt: i.alt_text.clone().unwrap_or_default(),
            image: i.image_url.clone().unwrap_or_default(),
        }
    }
}

#[derive(Tabled)]
struct MealRow {
    #[tabled(rename = "Meal")]
    name: String,
    #[tabled(rename = "From")]
    starts: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl From<&MealType> for MealRow {
    fn from(m: &MealType) -> Self {
        Self {
            name: m.name.clone(),
            starts: m
                .time_start
                .map(|t| t.format("%H:%M").to_string())
                .unwrap_or_default(),
            description: m.description.clone().unwrap_or_default(),
        }
    }
}

#[derive(Tabled)]
struct BenefitRow {
    #[tabled(rename = "Order")]
    order: i32,
    #[tabled(rename = "Benefit")]
    text: String,
}

impl From<&RestaurantBenefit> for BenefitRow {
    fn from(b: &RestaurantBenefit) -> Self {
        Self {
            order: b.order,
            text: b.text.clone(),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(ctx: &Context<'_>, args: RestaurantArgs) -> Result<(), CliError> {
    let format = &ctx.global.output;
    let out = match args.command {
        RestaurantCommand::Info => {
            let info =
                ctx.require_item(ctx.pass.restaurant().await, "restaurant", "restaurant info")?;
            let color = ctx.color();
            output::render_single(
                format,
                &info,
                |r| {
                    output::detail(
                        &[
                            ("Title", r.title.clone()),
                            ("Images", r.images.len().to_string()),
                            ("Meals", r.meal_types.len().to_string()),
                            ("Benefits", r.benefits.len().to_string()),
                            ("About", r.description.clone().unwrap_or_default()),
                        ],
                        color,
                    )
                },
                |r| r.title.clone(),
            )?
        }

        RestaurantCommand::Images => {
            let images = ctx.require(
                ctx.pass.restaurant_images().await,
                "restaurant image",
                "restaurant images",
            )?;
            output::render_list(format, &images, |i| ImageRow::from(i), |i| i.id.to_string())?
        }

        RestaurantCommand::MealTypes => {
            let meals =
                ctx.require(ctx.pass.meal_types().await, "meal type", "restaurant meal-types")?;
            output::render_list(format, &meals, |m| MealRow::from(m), |m| m.name.clone())?
        }

        RestaurantCommand::Benefits => {
            let benefits = ctx.require(
                ctx.pass.restaurant_benefits().await,
                "benefit",
                "restaurant benefits",
            )?;
            output::render_list(format, &benefits, |b| BenefitRow::from(b), |b| b.text.clone())?
        }
    };
    ctx.emit(&out);
    Ok(())
}
