use bevy::color::HexColorError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog id {id} appears more than once")]
    DuplicateId { id: u32 },
    #[error("catalog id {id} has an unreadable display colour '{hex}'")]
    InvalidColour {
        id: u32,
        hex: String,
        #[source]
        source: HexColorError,
    },
}
