use serde::{Deserialize, Serialize};
use std::fmt;

/// Market region a cartridge was released in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Region {
    Jp,
    Us,
    Eu,
}

impl Region {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Jp => "JP",
            Self::Us => "US",
            Self::Eu => "EU",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "JP" => Some(Self::Jp),
            "US" => Some(Self::Us),
            "EU" => Some(Self::Eu),
            _ => None,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Common => "Common",
            Self::Uncommon => "Uncommon",
            Self::Rare => "Rare",
        })
    }
}

/// One row of the built-in catalog. Prices are in whole dollars.
pub struct CatalogEntry {
    pub id: u32,
    pub name: &'static str,
    pub region: Region,
    pub price: f64,
    pub market_value: f64,
    pub year: u16,
    pub colour_hex: &'static str,
    pub rarity: Rarity,
}

const fn entry(
    id: u32,
    name: &'static str,
    region: Region,
    price: f64,
    market_value: f64,
    year: u16,
    colour_hex: &'static str,
    rarity: Rarity,
) -> CatalogEntry {
    CatalogEntry {
        id,
        name,
        region,
        price,
        market_value,
        year,
        colour_hex,
        rarity,
    }
}

/// Simulated global market snapshot, fixed for the session.
pub const CATALOG: &[CatalogEntry] = &[
    entry(1, "Pokemon Red", Region::Jp, 45.0, 89.0, 1996, "#DC143C", Rarity::Common),
    entry(2, "Pokemon Blue", Region::Us, 52.0, 95.0, 1996, "#4169E1", Rarity::Common),
    entry(3, "Pokemon Yellow", Region::Eu, 78.0, 120.0, 1998, "#FFD700", Rarity::Uncommon),
    entry(4, "Pokemon Gold", Region::Jp, 35.0, 85.0, 1999, "#B8860B", Rarity::Common),
    entry(5, "Pokemon Silver", Region::Us, 42.0, 82.0, 1999, "#C0C0C0", Rarity::Common),
    entry(6, "Pokemon Crystal", Region::Jp, 180.0, 350.0, 2000, "#00CED1", Rarity::Rare),
    entry(7, "Pokemon Ruby", Region::Eu, 28.0, 55.0, 2002, "#E0115F", Rarity::Common),
    entry(8, "Pokemon Sapphire", Region::Jp, 25.0, 52.0, 2002, "#0F52BA", Rarity::Common),
    entry(9, "Pokemon Emerald", Region::Us, 95.0, 145.0, 2004, "#50C878", Rarity::Uncommon),
    entry(10, "Pokemon FireRed", Region::Jp, 38.0, 68.0, 2004, "#FF4500", Rarity::Common),
    entry(11, "Pokemon LeafGreen", Region::Eu, 42.0, 72.0, 2004, "#32CD32", Rarity::Common),
    entry(12, "Pokemon Diamond", Region::Us, 32.0, 48.0, 2006, "#B9F2FF", Rarity::Common),
    entry(13, "Pokemon Pearl", Region::Jp, 28.0, 45.0, 2006, "#FDEEF4", Rarity::Common),
    entry(14, "Pokemon Platinum", Region::Us, 125.0, 165.0, 2008, "#E5E4E2", Rarity::Uncommon),
    entry(15, "Pokemon HeartGold", Region::Jp, 145.0, 280.0, 2009, "#CFB53B", Rarity::Rare),
    entry(16, "Pokemon SoulSilver", Region::Eu, 135.0, 260.0, 2009, "#AAA9AD", Rarity::Rare),
    entry(17, "Pokemon Black", Region::Us, 55.0, 75.0, 2010, "#1C1C1C", Rarity::Uncommon),
    entry(18, "Pokemon White", Region::Jp, 48.0, 70.0, 2010, "#FFFAFA", Rarity::Uncommon),
];
