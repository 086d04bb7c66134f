//! Integration tests for the outpost CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn outpost() -> Command {
    Command::cargo_bin("outpost").unwrap()
}

/// Write a minimal two-material, one-blueprint catalog to a temp file.
fn custom_catalog() -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.json");
    fs::write(
        &path,
        r#"{
    "materials": [
        { "id": "mat_scrap", "name": "Scrap Plate", "description": "Salvaged hull plating.", "tags": ["Metal"] },
        { "id": "mat_resin", "name": "Amber Resin", "description": "", "tags": ["Biomass"] }
    ],
    "blueprints": [
        {
            "id": "bp_shiv", "name": "Shiv", "description": "A sharpened scrap blade.",
            "slots": [{ "id": "slot_blade", "name": "Blade", "allowed_tags": ["Metal"] }],
            "base_stats": { "damage": 4 },
            "base_layers": [{ "id": "blade", "sprite_id": "shiv_blade", "color": 11184810 }]
        }
    ]
}"#,
    )
    .unwrap();
    (dir, path)
}

// ---------------------------------------------------------------------------
// list
// ---------------------------------------------------------------------------

#[test]
fn list_shows_materials_and_blueprints() {
    outpost()
        .arg("list")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Ironwood")
                .and(predicate::str::contains("Phase Crystal"))
                .and(predicate::str::contains("Assault Rifle"))
                .and(predicate::str::contains("5 materials"))
                .and(predicate::str::contains("2 blueprints")),
        );
}

#[test]
fn list_materials_only() {
    outpost()
        .args(["list", "materials"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Ironwood")
                .and(predicate::str::contains("Assault Rifle").not()),
        );
}

#[test]
fn list_rejects_unknown_kind() {
    outpost()
        .args(["list", "pawns"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown kind 'pawns'"));
}

#[test]
fn list_reads_custom_catalog() {
    let (_dir, path) = custom_catalog();
    outpost()
        .args(["list", "-c", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Scrap Plate")
                .and(predicate::str::contains("Shiv"))
                .and(predicate::str::contains("Ironwood").not()),
        );
}

#[test]
fn list_rejects_invalid_catalog() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ nope").unwrap();
    outpost()
        .args(["list", "-c", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid catalog"));
}

// ---------------------------------------------------------------------------
// show
// ---------------------------------------------------------------------------

#[test]
fn show_material_details() {
    outpost()
        .args(["show", "mat_titanium"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Titanium")
                .and(predicate::str::contains("Durable"))
                .and(predicate::str::contains("Lightweight")),
        );
}

#[test]
fn show_blueprint_details() {
    outpost()
        .args(["show", "bp_rifle"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Assault Rifle")
                .and(predicate::str::contains("slot_body"))
                .and(predicate::str::contains("slot_core"))
                .and(predicate::str::contains("damage")),
        );
}

#[test]
fn show_unknown_id_fails() {
    outpost()
        .args(["show", "mat_unobtainium"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no material or blueprint"));
}

// ---------------------------------------------------------------------------
// craft
// ---------------------------------------------------------------------------

#[test]
fn craft_prints_final_stats() {
    outpost()
        .args([
            "craft",
            "bp_rifle",
            "slot_body=mat_titanium",
            "slot_core=mat_crystal",
        ])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Assault Rifle")
                .and(predicate::str::contains("22.5"))
                .and(predicate::str::contains("Plasma"))
                .and(predicate::str::contains("emissive")),
        );
}

#[test]
fn craft_json_output_is_parseable() {
    let output = outpost()
        .args([
            "craft",
            "bp_armor",
            "slot_plating=mat_chitin",
            "slot_core=mat_crystal",
            "--json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let item: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(item["blueprint_id"], "bp_armor");
    assert_eq!(item["materials"]["slot_plating"], "mat_chitin");
}

#[test]
fn craft_is_deterministic_for_a_seed() {
    let run = || {
        outpost()
            .args([
                "craft",
                "bp_rifle",
                "slot_body=mat_ironwood",
                "slot_core=mat_crystal",
                "--seed",
                "7",
                "--json",
            ])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone()
    };
    assert_eq!(run(), run());
}

#[test]
fn craft_rejects_missing_slot() {
    outpost()
        .args(["craft", "bp_rifle", "slot_body=mat_titanium"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no material assigned to slot"));
}

#[test]
fn craft_rejects_malformed_pair() {
    outpost()
        .args(["craft", "bp_rifle", "slot_body"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected slot=material"));
}

#[test]
fn craft_rejects_unknown_blueprint() {
    outpost()
        .args(["craft", "bp_catapult", "slot_arm=mat_ironwood"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown blueprint"));
}

// ---------------------------------------------------------------------------
// simulate
// ---------------------------------------------------------------------------

#[test]
fn simulate_prints_pawn_status() {
    outpost()
        .args(["simulate", "--ticks", "10"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Simulation")
                .and(predicate::str::contains("Pawn Status"))
                .and(predicate::str::contains("Mira"))
                .and(predicate::str::contains("Sable")),
        );
}

#[test]
fn simulate_is_deterministic_for_a_seed() {
    let run = || {
        outpost()
            .args(["simulate", "--ticks", "120", "--seed", "7"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone()
    };
    assert_eq!(run(), run());
}

#[test]
fn simulate_rejects_non_positive_speed() {
    outpost()
        .args(["simulate", "--speed", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("time scale must be positive"));
}
