use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;

use super::positions_model::PositionHistory;
use crate::errors::{Error, Result, ValidationError};

/// Parses position rows from CSV with a `date,symbol,quantity,cost_basis` header.
///
/// Column order is free; header names are matched after trimming. Symbols are
/// upper-cased. Any malformed row fails the whole import.
pub fn parse_positions_csv<R: Read>(reader: R) -> Result<Vec<PositionHistory>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut positions = Vec::new();
    for (index, row) in csv_reader.deserialize::<PositionHistory>().enumerate() {
        let mut position = row.map_err(|e| {
            Error::Validation(ValidationError::InvalidInput(format!(
                "row {}: {}",
                index + 1,
                e
            )))
        })?;
        if position.symbol.is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(format!(
                "symbol (row {})",
                index + 1
            ))));
        }
        position.symbol = position.symbol.to_uppercase();
        positions.push(position);
    }

    debug!("Parsed {} position rows", positions.len());
    Ok(positions)
}

/// Opens `path` and parses it with [`parse_positions_csv`].
pub fn read_positions_csv(path: &Path) -> Result<Vec<PositionHistory>> {
    let file = File::open(path)?;
    parse_positions_csv(file)
}
