use once_cell::sync::Lazy;

use crate::models::{CatalogEntry, Locale, River};

static CATALOG: Lazy<Vec<CatalogEntry>> = Lazy::new(|| vec![en_gb()]);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiverMatch<'a> {
    Found(&'a River),
    NotFound,
}

impl<'a> RiverMatch<'a> {
    pub fn river(self) -> Option<&'a River> {
        match self {
            Self::Found(river) => Some(river),
            Self::NotFound => None,
        }
    }
}

/// Default locale entry. Built on first access and never mutated.
pub fn load() -> &'static CatalogEntry {
    &CATALOG[0]
}

pub fn resolve_river<'a>(entry: &'a CatalogEntry, name: &str) -> RiverMatch<'a> {
    let wanted = name.trim().to_lowercase();

    entry
        .rivers
        .iter()
        .find(|river| river.name.to_lowercase() == wanted)
        .map_or(RiverMatch::NotFound, RiverMatch::Found)
}

impl CatalogEntry {
    pub fn resolve_river(&self, name: &str) -> RiverMatch<'_> {
        resolve_river(self, name)
    }
}

fn en_gb() -> CatalogEntry {
    CatalogEntry {
        locale: Locale::EnGb,
        description: "UK river levels".to_string(),
        help_text: "Ask me for the level of your favourite river".to_string(),
        stop_text: "See you on the river!".to_string(),
        unknown_text: "Sorry, I don't know about that river".to_string(),
        rivers: vec![
            River::new("Clough", "4b50bd9e-9c88-4795-93e0-b1e5c213e9ed"),
            River::new("Crake", "dd32f5a5-a507-4d87-b718-dd4adf9631dc"),
            River::new("Dee", "75148ca0-ee5e-4344-8534-db9a59ed4cd0"),
            River::new("Lune", "7ea17714-96c1-4e4f-a7df-a10b05251348"),
            River::new("North Tyne", "9a417b1b-464e-4f49-be17-bbb38241e500"),
            River::new("Rawthey", "60d6bb57-a6c5-43a2-8969-59d2cf8509c4"),
            River::new("Ribble", "3ac9af6d-df37-49a8-86f3-222e52744cc4"),
        ],
    }
}
