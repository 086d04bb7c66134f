use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use outpost_core::{Blueprint, Material};

pub fn run(catalog_path: Option<&Path>, id: &str) -> Result<(), String> {
    let catalog = super::load_catalog(catalog_path)?;

    if let Some(material) = catalog.material(id) {
        show_material(material);
        return Ok(());
    }
    if let Some(blueprint) = catalog.blueprint(id) {
        show_blueprint(blueprint);
        return Ok(());
    }
    Err(format!("no material or blueprint with id '{id}'"))
}

fn show_material(material: &Material) {
    println!("  {} {}", material.name.bold(), format!("({})", material.id).dimmed());
    if !material.description.is_empty() {
        println!("  {}", material.description);
    }
    if material.tags.is_empty() {
        println!("  Tags: {}", "(none)".dimmed());
    } else {
        println!("  Tags: {}", material.tags.join(", ").cyan());
    }
}

fn show_blueprint(blueprint: &Blueprint) {
    println!(
        "  {} {}",
        blueprint.name.bold(),
        format!("({})", blueprint.id).dimmed()
    );
    if !blueprint.description.is_empty() {
        println!("  {}", blueprint.description);
    }
    println!();

    let mut slots = Table::new();
    slots.set_content_arrangement(ContentArrangement::Dynamic);
    slots.set_header(vec!["Slot", "Name", "Suggested Tags"]);
    for slot in &blueprint.slots {
        let tags = if slot.allowed_tags.is_empty() {
            "any".to_string()
        } else {
            slot.allowed_tags.join(", ")
        };
        slots.add_row(vec![&slot.id, &slot.name, &tags]);
    }
    println!("{slots}");
    println!();

    let mut stats = Table::new();
    stats.set_content_arrangement(ContentArrangement::Dynamic);
    stats.set_header(vec!["Base Stat", "Value"]);
    for (name, value) in blueprint.base_stats.iter() {
        stats.add_row(vec![name.to_string(), super::format_stat(value)]);
    }
    println!("{stats}");

    if !blueprint.base_layers.is_empty() {
        println!();
        for layer in &blueprint.base_layers {
            println!(
                "  layer {} ({}) {}",
                layer.id,
                layer.sprite_id.dimmed(),
                super::format_color(layer.color)
            );
        }
    }
}
