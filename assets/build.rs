//! Build script: reads /units/units.json and generates Rust source code that
//! statically constructs the default unit catalog.
//! The assets crate embeds the data without runtime JSON parsing, keeping it
//! no_std compatible.

use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

/// Speeds in the JSON are decimals; the engine stores hundredths.
const SPEED_SCALE: f64 = 100.0;

// ── JSON schema types (build-time only) ──────────────────────────────────────

#[derive(Deserialize)]
struct JsonUnit {
    id: String,
    name: String,
    attack: i32,
    health: i32,
    speed: f64,
    merge_tag: Option<String>,
}

// ── Validation ───────────────────────────────────────────────────────────────

fn validate(units: &[JsonUnit]) {
    let mut seen = std::collections::BTreeSet::new();
    for unit in units {
        if unit.id.is_empty() {
            panic!("Unit with empty id in units.json");
        }
        if !seen.insert(unit.id.as_str()) {
            panic!("Duplicate unit id in units.json: {}", unit.id);
        }
        if unit.name.is_empty() || unit.attack <= 0 || unit.health <= 0 || unit.speed <= 0.0 {
            panic!("Unit {} has missing or non-positive stats", unit.id);
        }
    }
}

// ── Code generation helpers ──────────────────────────────────────────────────

fn gen_unit(unit: &JsonUnit) -> String {
    let id = &unit.id;
    let name = &unit.name;
    let attack = unit.attack;
    let health = unit.health;
    let speed = (unit.speed * SPEED_SCALE).round() as u32;
    let tag = unit.merge_tag.as_deref().unwrap_or(&unit.id);

    format!(
        r#"        (
            String::from("{id}"),
            UnitDefinition {{
                name: String::from("{name}"),
                attack: {attack},
                health: {health},
                speed: {speed},
                merge_tag: String::from("{tag}"),
            }},
        )"#
    )
}

// ── Main ─────────────────────────────────────────────────────────────────────

fn main() {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let units_path = Path::new(&manifest_dir).join("../units/units.json");

    // Tell Cargo to re-run if the JSON changes
    println!("cargo:rerun-if-changed={}", units_path.display());

    let units_json = fs::read_to_string(&units_path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", units_path.display()));
    let units: Vec<JsonUnit> =
        serde_json::from_str(&units_json).expect("Failed to parse units.json");

    validate(&units);

    let entries: Vec<String> = units.iter().map(gen_unit).collect();

    // ── Write output ─────────────────────────────────────────────────────────
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest = Path::new(&out_dir).join("units_generated.rs");

    let generated = format!(
        r#"// Auto-generated from units.json. DO NOT EDIT
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use mb_battle::UnitDefinition;

/// Returns every unit type defined in units.json, in file order.
pub fn get_all_unit_types() -> Vec<(String, UnitDefinition)> {{
    vec![
{}
    ]
}}
"#,
        entries.join(",\n"),
    );

    fs::write(&dest, generated).expect("Failed to write generated units file");
}
