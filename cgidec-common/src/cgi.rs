//! 4G and 5G CGI decoding.
//!
//! A CGI (Cell Global Identity) arrives as a single hex string that
//! concatenates fixed-width sub-fields:
//! - 4G: MCC (3 chars), MNC (2 chars), TAC (4 hex chars), Cell ID (rest)
//! - 5G: MCC (3 chars), MNC (5 chars), TAC (6 hex chars), Cell ID (rest)
//!
//! TAC and Cell ID are converted from hex to zero-padded decimal and the
//! parts are reassembled into a composite decimal CGI string. Decoding is
//! pure: one input string in, an ordered list of [`CgiField`] records out.

use crate::error::Error;

/// One decoded field of a CGI breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CgiField {
    /// Display label (e.g. "TAC (Dec)")
    pub label: &'static str,
    /// Decoded value
    pub value: String,
    /// Character length of `value`
    pub digits: usize,
}

impl CgiField {
    /// Creates a field, deriving the digit count from the value.
    pub fn new(label: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        let digits = value.chars().count();
        Self {
            label,
            value,
            digits,
        }
    }
}

/// Extracts the characters in `[start, end)`.
///
/// Ranges past the end of the input degrade to a shorter or empty string,
/// never an error.
fn slice_chars(s: &str, start: usize, end: usize) -> String {
    s.chars()
        .skip(start)
        .take(end.saturating_sub(start))
        .collect()
}

/// Extracts the characters from `start` to the end of the input.
fn slice_chars_from(s: &str, start: usize) -> String {
    s.chars().skip(start).collect()
}

/// Parses a sub-field as a base-16 unsigned integer.
///
/// An empty sub-field decodes as 0, so that input shorter than the full
/// field layout degrades instead of failing.
fn parse_hex_field(field: &'static str, hex: &str) -> Result<u128, Error> {
    if hex.is_empty() {
        return Ok(0);
    }
    u128::from_str_radix(hex, 16).map_err(|_| Error::InvalidHexDigit {
        field,
        value: hex.to_string(),
    })
}

/// Decodes a 4G CGI hex string into its ordered field breakdown.
///
/// An empty input returns the fixed all-zero placeholder breakdown (5
/// entries); any other input returns the full 7-entry breakdown. Fails only
/// when the TAC or Cell ID slice contains a non-hex character.
pub fn decode_4g(hex: &str) -> Result<Vec<CgiField>, Error> {
    if hex.is_empty() {
        return Ok(vec![
            CgiField::new("MCC", "000"),
            CgiField::new("MNC", "00"),
            CgiField::new("TAC", "00000"),
            CgiField::new("Cell ID", "000000000"),
            CgiField::new("4G CGI (Dec)", "0".repeat(19)),
        ]);
    }

    let mcc = slice_chars(hex, 0, 3);
    let mnc = slice_chars(hex, 3, 5);
    let tac_hex = slice_chars(hex, 5, 9);
    let cell_id_hex = slice_chars_from(hex, 9);

    let tac_dec = parse_hex_field("TAC", &tac_hex)?;
    let cell_id_dec = parse_hex_field("Cell ID", &cell_id_hex)?;

    let tac_dec = format!("{tac_dec:05}");
    let cell_id_dec = format!("{cell_id_dec:09}");
    let cgi_dec = format!("{mcc}{mnc}{tac_dec}{cell_id_dec}");

    Ok(vec![
        CgiField::new("MCC", mcc),
        CgiField::new("MNC", mnc),
        CgiField::new("TAC (Hex)", tac_hex),
        CgiField::new("TAC (Dec)", tac_dec),
        CgiField::new("Cell ID (Hex)", cell_id_hex),
        CgiField::new("Cell ID (Dec)", cell_id_dec),
        CgiField::new("4G CGI (Dec)", cgi_dec),
    ])
}

/// Decodes a 5G CGI hex string into its ordered field breakdown.
///
/// Same shape as [`decode_4g`] with 5G field widths: TAC is 6 hex chars
/// padded to 6 decimal digits, Cell ID is padded to 11 decimal digits.
pub fn decode_5g(hex: &str) -> Result<Vec<CgiField>, Error> {
    if hex.is_empty() {
        return Ok(vec![
            CgiField::new("MCC", "000"),
            CgiField::new("MNC", "00"),
            CgiField::new("TAC", "000000"),
            CgiField::new("Cell ID", "00000000000"),
            CgiField::new("5G CGI (Dec)", "0".repeat(22)),
        ]);
    }

    let mcc = slice_chars(hex, 0, 3);
    // MNC is the first five characters, not [3..5): it repeats the MCC
    // prefix. Intentional; changing it changes every 5G composite.
    let mnc = slice_chars(hex, 0, 5);
    let tac_hex = slice_chars(hex, 5, 11);
    let cell_id_hex = slice_chars_from(hex, 11);

    let tac_dec = parse_hex_field("TAC", &tac_hex)?;
    let cell_id_dec = parse_hex_field("Cell ID", &cell_id_hex)?;

    let tac_dec = format!("{tac_dec:06}");
    let cell_id_dec = format!("{cell_id_dec:011}");
    let cgi_dec = format!("{mcc}{mnc}{tac_dec}{cell_id_dec}");

    Ok(vec![
        CgiField::new("MCC", mcc),
        CgiField::new("MNC", mnc),
        CgiField::new("TAC (Hex)", tac_hex),
        CgiField::new("TAC (Dec)", tac_dec),
        CgiField::new("Cell ID (Hex)", cell_id_hex),
        CgiField::new("Cell ID (Dec)", cell_id_dec),
        CgiField::new("5G CGI (Dec)", cgi_dec),
    ])
}
