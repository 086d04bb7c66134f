use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use outpost_core::PawnStatus;
use outpost_sim::{GameEvent, SimConfig, Simulation};

pub fn run(
    catalog_path: Option<&Path>,
    ticks: u64,
    dt: f64,
    seed: u64,
    speed: f64,
    verbose: bool,
) -> Result<(), String> {
    let catalog = super::load_catalog(catalog_path)?;

    let config = SimConfig::default().with_seed(seed).with_max_events(500);
    let mut sim = Simulation::new(catalog, outpost_core::content::starting_crew(), config);
    if (speed - 1.0).abs() > f64::EPSILON {
        sim.set_time_scale(speed).map_err(|e| e.to_string())?;
    }

    sim.run(ticks, dt);

    // Header
    println!(
        "  {} {}",
        "Simulation".bold(),
        format!("({ticks} ticks, dt={dt}s, seed={seed}, speed={speed}x)").dimmed()
    );
    println!(
        "  {} pawns, {:.1}s simulated, {} events logged",
        sim.pawns().len(),
        sim.game_time(),
        sim.events().len()
    );
    println!();

    // Events
    if verbose {
        println!("  {}", "Event Log".bold().underline());
        println!();
        for entry in sim.events().entries() {
            let time_label = format!("[t {:>7.1}]", entry.game_time).dimmed();
            println!("  {time_label} {}", colorize_event(&entry.event));
        }
        if sim.events().is_empty() {
            println!("  {}", "(no events)".dimmed());
        }
        println!();
    } else {
        let notable: Vec<_> = sim
            .events()
            .entries()
            .iter()
            .filter(|e| {
                matches!(
                    e.event,
                    GameEvent::DilemmaPresented { .. } | GameEvent::PawnDied { .. }
                )
            })
            .collect();
        if !notable.is_empty() {
            println!("  {}", "Notable Events".bold().underline());
            for entry in notable {
                println!("  {}", colorize_event(&entry.event));
            }
            println!();
        }
    }

    // Pawn status table
    println!("  {}", "Pawn Status".bold().underline());
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Pawn", "Status", "HP", "Position"]);

    for pawn in sim.pawns() {
        let hp = pawn
            .vitals
            .map_or_else(|| "--".to_string(), |v| format!("{:.0}/{:.0}", v.hp, v.max_hp));
        let position = pawn
            .position
            .map_or_else(|| "--".to_string(), |p| format!("({:.1}, {:.1})", p.x, p.y));
        table.add_row(vec![
            pawn.name.clone(),
            colorize_status(pawn.status),
            hp,
            position,
        ]);
    }

    println!("{table}");

    // Pending dilemma
    if let Some(dilemma) = sim.active_dilemma() {
        println!();
        println!("  {} {}", "DILEMMA".red().bold(), dilemma.title.bold());
        println!("  {}", dilemma.description);
        for (i, choice) in dilemma.choices.iter().enumerate() {
            println!("    {i}. {}", choice.text);
        }
        println!("  {}", "(simulation paused awaiting a decision)".dimmed());
    }

    Ok(())
}

fn colorize_event(event: &GameEvent) -> colored::ColoredString {
    match event {
        GameEvent::ItemSynthesized { blueprint_name } => {
            format!("Crafted {blueprint_name}").green()
        }
        GameEvent::PawnDied { id } => format!("Pawn {id} died").red().bold(),
        GameEvent::DilemmaPresented { title, .. } => {
            format!("Dilemma presented: {title}").yellow()
        }
        GameEvent::DilemmaResolved { consequence_key } => {
            format!("Dilemma resolved ({consequence_key})").cyan()
        }
    }
}

fn colorize_status(status: PawnStatus) -> String {
    match status {
        PawnStatus::Idle => status.to_string(),
        PawnStatus::Working => status.to_string().cyan().to_string(),
        PawnStatus::Injured => status.to_string().yellow().to_string(),
        PawnStatus::Dead => status.to_string().red().to_string(),
    }
}
