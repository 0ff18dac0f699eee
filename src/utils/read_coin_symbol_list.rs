use std::fs;
use std::io::Cursor;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::models::Error;
use crate::types::CoinSymbolList;

/// Parses a coin symbol list from CSV text with `Symbol`, `Name`, and
/// `Bare Match` columns. Symbols are canonicalized to uppercase; empty names
/// are carried as `None`.
pub fn read_coin_symbol_list_from_string(csv: &str) -> Result<CoinSymbolList, Error> {
    let mut coin_symbol_list = CoinSymbolList::new();

    // Use a cursor to simulate a file reader from the string
    let mut reader = ReaderBuilder::new()
        .has_headers(true) // Ensure headers are expected
        .from_reader(Cursor::new(csv));

    // Extract column headers
    let headers = reader
        .headers()
        .map_err(|e| Error::ParserError(format!("Failed to read headers: {}", e)))?
        .clone();

    let symbol_index = header_position(&headers, "Symbol")?;
    let name_index = header_position(&headers, "Name")?;
    let bare_match_index = header_position(&headers, "Bare Match")?;

    for record in reader.records() {
        let record =
            record.map_err(|e| Error::ParserError(format!("Failed to read record: {}", e)))?;

        // Extract values based on header names
        let symbol = record
            .get(symbol_index)
            .map(str::trim)
            .filter(|symbol| !symbol.is_empty())
            .ok_or_else(|| Error::ParserError("Missing or empty 'Symbol' field".to_string()))?;

        let coin_name = record
            .get(name_index)
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(|name| name.to_string());

        let bare_match = match record.get(bare_match_index).map(str::trim) {
            Some(value) if value.eq_ignore_ascii_case("true") => true,
            Some(value) if value.eq_ignore_ascii_case("false") => false,
            Some("") | None => false,
            Some(other) => {
                return Err(Error::ParserError(format!(
                    "Invalid 'Bare Match' value: '{}' (expected 'true' or 'false')",
                    other
                )))
            }
        };

        coin_symbol_list.push((symbol.to_uppercase(), coin_name, bare_match));
    }

    Ok(coin_symbol_list)
}

/// Reads a coin symbol list CSV from disk.
pub fn read_coin_symbol_list_from_path<P: AsRef<Path>>(path: P) -> Result<CoinSymbolList, Error> {
    let csv = fs::read_to_string(path)?;
    read_coin_symbol_list_from_string(&csv)
}

fn header_position(headers: &StringRecord, name: &str) -> Result<usize, Error> {
    headers
        .iter()
        .position(|header| header == name)
        .ok_or_else(|| Error::ParserError(format!("Missing '{}' column header", name)))
}
