pub mod craft;
pub mod list;
pub mod show;
pub mod simulate;

use std::collections::BTreeMap;
use std::path::Path;

use outpost_core::{Catalog, StatValue};

/// Load a catalog from a JSON file, or fall back to the bundled content.
fn load_catalog(path: Option<&Path>) -> Result<Catalog, String> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
            Catalog::from_json(&text).map_err(|e| format!("invalid catalog: {e}"))
        }
        None => Ok(outpost_core::content::standard_catalog()),
    }
}

/// Parse `slot=material` pairs into a slot-to-material assignment.
fn parse_assignment(pairs: &[String]) -> Result<BTreeMap<String, String>, String> {
    let mut assignment = BTreeMap::new();
    for pair in pairs {
        let Some((slot, material)) = pair.split_once('=') else {
            return Err(format!("expected slot=material, got '{pair}'"));
        };
        if slot.is_empty() || material.is_empty() {
            return Err(format!("expected slot=material, got '{pair}'"));
        }
        if assignment.insert(slot.to_string(), material.to_string()).is_some() {
            return Err(format!("slot '{slot}' assigned twice"));
        }
    }
    Ok(assignment)
}

/// Render a stat value without trailing noise (integers print as integers).
fn format_stat(value: &StatValue) -> String {
    match value {
        StatValue::Number(n) if n.fract() == 0.0 => format!("{n:.0}"),
        StatValue::Number(n) => format!("{n}"),
        StatValue::Text(s) => s.clone(),
    }
}

/// Render a sprite layer color as a hex triplet.
fn format_color(color: u32) -> String {
    format!("#{color:06X}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignment_pairs_parse() {
        let pairs = vec![
            "slot_body=mat_titanium".to_string(),
            "slot_core=mat_crystal".to_string(),
        ];
        let assignment = parse_assignment(&pairs).unwrap();
        assert_eq!(assignment["slot_body"], "mat_titanium");
        assert_eq!(assignment["slot_core"], "mat_crystal");
    }

    #[test]
    fn malformed_pairs_are_rejected() {
        assert!(parse_assignment(&["slot_body".to_string()]).is_err());
        assert!(parse_assignment(&["=mat_x".to_string()]).is_err());
        assert!(parse_assignment(&["slot_body=".to_string()]).is_err());
        let twice = vec!["a=b".to_string(), "a=c".to_string()];
        assert!(parse_assignment(&twice).is_err());
    }

    #[test]
    fn stat_formatting() {
        assert_eq!(format_stat(&StatValue::Number(22.5)), "22.5");
        assert_eq!(format_stat(&StatValue::Number(50.0)), "50");
        assert_eq!(format_stat(&StatValue::Text("Plasma".into())), "Plasma");
        assert_eq!(format_color(0x4A4A4A), "#4A4A4A");
    }
}
