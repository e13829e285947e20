//! Prose descriptions for sky cards.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Built-in descriptions for the planets worth pointing out to a casual observer.
const PLANET_DESCRIPTIONS: [(&str, &str); 7] = [
    (
        "Mercury",
        "The swift innermost planet, never straying far from the Sun and best caught low in the twilight glow.",
    ),
    (
        "Venus",
        "The brilliant evening and morning star, outshining everything in the night sky except the Moon.",
    ),
    (
        "Mars",
        "The Red Planet, its rusty hue unmistakable even without a telescope.",
    ),
    (
        "Jupiter",
        "The king of planets, a steady bright beacon with four Galilean moons visible through binoculars.",
    ),
    (
        "Saturn",
        "The ringed jewel of the solar system, glowing a soft golden yellow.",
    ),
    (
        "Uranus",
        "A pale blue-green ice giant at the very edge of naked-eye visibility under dark skies.",
    ),
    (
        "Neptune",
        "The distant ice giant, a faint blue point that rewards patient observers with optical aid.",
    ),
];

static DEFAULT_TABLE: Lazy<DescriptionTable> = Lazy::new(DescriptionTable::default);

/// Lookup table from object name to prose.
///
/// Built once from the built-in planet entries; the configuration file may
/// add entries or replace existing ones.
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptionTable {
    entries: HashMap<String, String>,
}

impl Default for DescriptionTable {
    fn default() -> Self {
        Self {
            entries: PLANET_DESCRIPTIONS
                .iter()
                .map(|(name, text)| (name.to_string(), text.to_string()))
                .collect(),
        }
    }
}

impl DescriptionTable {
    /// Built-in entries plus the given overrides.
    pub fn with_overrides<I>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut table = Self::default();
        table.entries.extend(overrides);
        table
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Describe a single object, mentioning its constellation when known.
    pub fn describe(&self, name: &str, constellation: Option<&str>) -> String {
        let mut text = match self.get(name) {
            Some(known) => known.to_string(),
            None => format!("{name}, a celestial wonder in tonight's sky."),
        };

        if let Some(constellation) = constellation {
            text.push_str(&format!(" Currently in {constellation}."));
        }

        text
    }
}

/// Describe an object using the built-in table.
pub fn describe_object(name: &str, constellation: Option<&str>) -> String {
    DEFAULT_TABLE.describe(name, constellation)
}

/// Describe a constellation by the visible objects it currently hosts.
pub fn describe_constellation<S: AsRef<str>>(name: &str, members: &[S]) -> String {
    let members = members
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ");
    format!("The {name} constellation is currently hosting {members}.")
}
