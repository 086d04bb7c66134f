use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use rand::SeedableRng;
use rand::rngs::StdRng;

use outpost_forge::SynthesisEngine;

pub fn run(
    catalog_path: Option<&Path>,
    blueprint_id: &str,
    pairs: &[String],
    seed: u64,
    json: bool,
) -> Result<(), String> {
    let catalog = super::load_catalog(catalog_path)?;
    let blueprint = catalog
        .blueprint(blueprint_id)
        .ok_or_else(|| format!("unknown blueprint: \"{blueprint_id}\""))?;
    let assignment = super::parse_assignment(pairs)?;

    let engine = SynthesisEngine::standard();
    let mut rng = StdRng::seed_from_u64(seed);
    let item = engine
        .synthesize(blueprint, &assignment, &catalog, &mut rng)
        .map_err(|e| e.to_string())?;

    if json {
        let rendered = serde_json::to_string_pretty(&item).map_err(|e| e.to_string())?;
        println!("{rendered}");
        return Ok(());
    }

    println!(
        "  {} {} {}",
        "Crafted".bold(),
        item.blueprint_name.bold(),
        format!("({})", item.id).dimmed()
    );
    println!();

    for slot in &blueprint.slots {
        let material_id = &item.materials[&slot.id];
        let name = catalog
            .material(material_id)
            .map_or(material_id.as_str(), |m| m.name.as_str());
        println!("  {:<12} {}", slot.name, name.cyan());
    }
    println!();

    let mut stats = Table::new();
    stats.set_content_arrangement(ContentArrangement::Dynamic);
    stats.set_header(vec!["Stat", "Base", "Final"]);
    for (name, value) in item.final_stats.iter() {
        let base = blueprint
            .base_stats
            .get(name)
            .map_or_else(|| "—".to_string(), super::format_stat);
        stats.add_row(vec![name.to_string(), base, super::format_stat(value)]);
    }
    println!("{stats}");

    if !item.visual_layers.is_empty() {
        println!();
        for layer in &item.visual_layers {
            let glow = if layer.emissive {
                " (emissive)".yellow().to_string()
            } else {
                String::new()
            };
            println!(
                "  layer {} {}{}",
                layer.id,
                super::format_color(layer.color),
                glow
            );
        }
    }

    Ok(())
}
