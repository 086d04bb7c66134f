use std::path::Path;

use comfy_table::{ContentArrangement, Table};

use outpost_core::Catalog;

pub fn run(catalog_path: Option<&Path>, kind: Option<&str>) -> Result<(), String> {
    let catalog = super::load_catalog(catalog_path)?;

    match kind {
        None => {
            list_materials(&catalog);
            println!();
            list_blueprints(&catalog);
        }
        Some("materials") => list_materials(&catalog),
        Some("blueprints") => list_blueprints(&catalog),
        Some(other) => {
            return Err(format!(
                "unknown kind '{other}' (expected materials or blueprints)"
            ));
        }
    }

    Ok(())
}

fn list_materials(catalog: &Catalog) {
    if catalog.materials().is_empty() {
        println!("  No materials in catalog.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Name", "Tags", "Description"]);

    for material in catalog.materials() {
        table.add_row(vec![
            &material.id,
            &material.name,
            &material.tags.join(", "),
            &material.description,
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} materials", catalog.materials().len());
}

fn list_blueprints(catalog: &Catalog) {
    if catalog.blueprints().is_empty() {
        println!("  No blueprints in catalog.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Name", "Slots", "Description"]);

    for blueprint in catalog.blueprints() {
        let slots: Vec<&str> = blueprint.slots.iter().map(|s| s.id.as_str()).collect();
        table.add_row(vec![
            &blueprint.id,
            &blueprint.name,
            &slots.join(", "),
            &blueprint.description,
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} blueprints", catalog.blueprints().len());
}
