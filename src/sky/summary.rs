//! One-sentence highlight of tonight's sky.

use crate::constants::{SUMMARY_MAX_CONSTELLATIONS, SUMMARY_MAX_PLANETS, SUMMARY_STAR_LIMIT};
use crate::sky::types::{ObjectKind, SkyObject};

pub const EMPTY_SKY: &str =
    "Clear skies tonight, though major celestial objects are currently below the horizon";
pub const NO_HIGHLIGHTS: &str = "Several celestial objects are visible in tonight's sky";

const LEAD: &str = "Tonight's sky offers excellent views of ";

/// Build the highlight sentence for a list of sky objects.
///
/// Highlights are picked in priority order: the Moon, up to three planets
/// (further planets are counted rather than named), up to two
/// constellations, and a single star while there is room.
pub fn compose_summary(objects: &[SkyObject]) -> String {
    if objects.is_empty() {
        return EMPTY_SKY.to_string();
    }

    let planets = of_kind(objects, ObjectKind::Planet);
    let constellations = of_kind(objects, ObjectKind::Constellation);
    let stars = of_kind(objects, ObjectKind::Star);
    let has_moon = objects.iter().any(|object| object.is_kind(ObjectKind::Moon));

    let mut highlights: Vec<String> = Vec::new();

    if has_moon {
        highlights.push("the Moon".to_string());
    }

    let named: Vec<&str> = planets
        .iter()
        .take(SUMMARY_MAX_PLANETS)
        .map(|planet| planet.name.as_str())
        .collect();
    if planets.len() > SUMMARY_MAX_PLANETS {
        let remaining = planets.len() - SUMMARY_MAX_PLANETS;
        let plural = if remaining > 1 { "s" } else { "" };
        highlights.push(format!(
            "{}, and {remaining} more planet{plural}",
            named.join(", ")
        ));
    } else {
        highlights.extend(named.iter().map(|name| name.to_string()));
    }

    highlights.extend(
        constellations
            .iter()
            .take(SUMMARY_MAX_CONSTELLATIONS)
            .map(|constellation| format!("the {} constellation", constellation.name)),
    );

    if let Some(star) = stars.first()
        && highlights.len() < SUMMARY_STAR_LIMIT
    {
        highlights.push(star.name.clone());
    }

    if highlights.is_empty() {
        return NO_HIGHLIGHTS.to_string();
    }

    let mut summary = format!("{LEAD}{}", join_highlights(&highlights));

    if planets.iter().any(|planet| is_evening_time(&planet.best_time)) {
        summary.push_str(" in the early evening");
    } else if !planets.is_empty() || !constellations.is_empty() {
        summary.push_str(" tonight");
    }

    summary
}

fn of_kind(objects: &[SkyObject], kind: ObjectKind) -> Vec<&SkyObject> {
    objects.iter().filter(|object| object.is_kind(kind)).collect()
}

/// "a", "a and b", or "a, b, and c".
fn join_highlights(highlights: &[String]) -> String {
    match highlights {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} and {second}"),
        [init @ .., last] => format!("{}, and {last}", init.join(", ")),
    }
}

/// Text heuristic for an early-evening time: mentions PM but neither 11 nor 12.
///
/// This is a substring check, not time parsing; "1:12 PM" does not count and
/// any string merely containing "pm" does.
fn is_evening_time(best_time: &str) -> bool {
    let lowered = best_time.to_lowercase();
    lowered.contains("pm") && !lowered.contains("11") && !lowered.contains("12")
}
