// format.rs
// Display helpers for the details view. No I/O.

use crate::model::{FlavorText, Genus};

const INCHES_PER_DECIMETER: f64 = 3.937;
const POUNDS_PER_HECTOGRAM: f64 = 0.220462;
const ENGLISH: &str = "en";

/// `7` -> `#0007`
pub fn format_number(id: u32) -> String {
    format!("#{id:04}")
}

/// Decimeters to feet and inches, e.g. `7` -> `2'04"`.
pub fn convert_height(decimeters: u32) -> String {
    let total_inches = f64::from(decimeters) * INCHES_PER_DECIMETER;
    let feet = (total_inches / 12.0).floor() as u32;
    let inches = (total_inches % 12.0).round() as u32;
    format!("{feet}'{inches:02}\"")
}

/// Hectograms to pounds, e.g. `69` -> `15.2 lbs`.
pub fn convert_weight(hectograms: u32) -> String {
    let pounds = f64::from(hectograms) * POUNDS_PER_HECTOGRAM;
    format!("{pounds:.1} lbs")
}

/// English flavor text from the version whose name sorts last.
///
/// Version names are compared as plain strings, which only approximates
/// release order. On equal names the first entry wins.
pub fn description(entries: &[FlavorText]) -> String {
    entries
        .iter()
        .filter(|entry| entry.language.name == ENGLISH)
        .fold(None::<&FlavorText>, |best, entry| match best {
            Some(best) if entry.version.name <= best.version.name => Some(best),
            _ => Some(entry),
        })
        .map(|entry| entry.flavor_text.replace(['\u{c}', '\n'], " "))
        .unwrap_or_default()
}

/// First English genus, empty when there is none.
pub fn category(genera: &[Genus]) -> String {
    genera
        .iter()
        .find(|genus| genus.language.name == ENGLISH)
        .map(|genus| genus.genus.clone())
        .unwrap_or_default()
}

pub fn gender_display(gender_rate: i8) -> &'static str {
    match gender_rate {
        -1 => "Genderless",
        0 => "♂",
        8 => "♀",
        _ => "♂ ♀",
    }
}

pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `special-attack` -> `Special attack`
pub fn stat_label(stat: &str) -> String {
    capitalize(&stat.replacen('-', " ", 1))
}
