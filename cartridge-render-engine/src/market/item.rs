use super::error::CatalogError;
use bevy::prelude::*;
use constants::catalog::{CATALOG, CatalogEntry, Rarity, Region};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Stable identity of a catalog item, unique across the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogItem {
    pub id: ItemId,
    pub name: String,
    pub region: Region,
    pub price: f64,
    pub market_value: f64,
    pub release_year: u16,
    pub colour_hex: String,
    pub colour: Color,
    pub rarity: Rarity,
}

impl CatalogItem {
    /// Build an item from a table row. An unreadable colour falls back to white.
    pub fn from_entry(entry: &CatalogEntry) -> Self {
        let colour = parse_display_colour(entry.id, entry.colour_hex).unwrap_or_else(|err| {
            warn!("{err}; rendering it white");
            Color::WHITE
        });

        Self {
            id: ItemId(entry.id),
            name: entry.name.to_string(),
            region: entry.region,
            price: entry.price,
            market_value: entry.market_value,
            release_year: entry.year,
            colour_hex: entry.colour_hex.to_string(),
            colour,
            rarity: entry.rarity,
        }
    }
}

pub fn parse_display_colour(id: u32, hex: &str) -> Result<Color, CatalogError> {
    Srgba::hex(hex)
        .map(Color::from)
        .map_err(|source| CatalogError::InvalidColour {
            id,
            hex: hex.to_string(),
            source,
        })
}

/// The fixed, ordered catalog for the session. Order drives the layout.
#[derive(Resource, Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    pub fn from_entries(entries: &[CatalogEntry]) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in entries {
            if !seen.insert(entry.id) {
                return Err(CatalogError::DuplicateId { id: entry.id });
            }
        }

        Ok(Self {
            items: entries.iter().map(CatalogItem::from_entry).collect(),
        })
    }

    /// The compiled-in catalog. A broken table yields an empty scene rather than a crash.
    pub fn builtin() -> Self {
        match Self::from_entries(CATALOG) {
            Ok(catalog) => {
                info!("Catalog ready with {} items", catalog.len());
                catalog
            }
            Err(err) => {
                error!("Built-in catalog rejected: {err}");
                Self::default()
            }
        }
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_eighteen_unique_items() {
        let catalog = Catalog::from_entries(CATALOG).expect("built-in catalog must validate");
        assert_eq!(catalog.len(), 18);

        let ids: HashSet<_> = catalog.items().iter().map(|item| item.id).collect();
        assert_eq!(ids.len(), 18);
    }

    #[test]
    fn builtin_catalog_preserves_table_order() {
        let catalog = Catalog::builtin();
        let ids: Vec<u32> = catalog.items().iter().map(|item| item.id.0).collect();
        assert_eq!(ids, (1..=18).collect::<Vec<_>>());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let entries = [
            CatalogEntry {
                id: 7,
                name: "First",
                region: Region::Jp,
                price: 10.0,
                market_value: 20.0,
                year: 2000,
                colour_hex: "#ffffff",
                rarity: Rarity::Common,
            },
            CatalogEntry {
                id: 7,
                name: "Second",
                region: Region::Us,
                price: 10.0,
                market_value: 20.0,
                year: 2001,
                colour_hex: "#000000",
                rarity: Rarity::Rare,
            },
        ];

        let err = Catalog::from_entries(&entries).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId { id: 7 }));
    }

    #[test]
    fn unreadable_colour_is_reported_and_falls_back_to_white() {
        assert!(matches!(
            parse_display_colour(3, "#nothex"),
            Err(CatalogError::InvalidColour { id: 3, .. })
        ));

        let entry = CatalogEntry {
            id: 3,
            name: "Broken",
            region: Region::Eu,
            price: 1.0,
            market_value: 2.0,
            year: 1999,
            colour_hex: "#nothex",
            rarity: Rarity::Common,
        };
        assert_eq!(CatalogItem::from_entry(&entry).colour, Color::WHITE);
    }

    #[test]
    fn lookup_by_id() {
        let catalog = Catalog::builtin();
        let crystal = catalog.get(ItemId(6)).expect("Crystal is in the catalog");
        assert_eq!(crystal.name, "Pokemon Crystal");
        assert!(catalog.get(ItemId(99)).is_none());
    }
}
