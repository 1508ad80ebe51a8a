// Wire format of the raw index export
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;

use crate::error::ParseError;

/// Opening of the JSON payload embedded in an export document. Everything
/// before the marker is free-form text (HTTP headers, tool banners) and is
/// ignored; everything from the marker onward must be one JSON document.
pub const PAYLOAD_MARKER: &str = "{\"code\":0,\"content\":";

/// Top level of the embedded payload.
#[derive(Debug, Deserialize)]
pub struct RawExport {
    pub code: i64,
    pub content: ExportContent,
}

/// Payload body. Entries in `resp_list` stay untyped here because only the
/// configured positions are ever read; the rest can have any shape.
#[derive(Debug, Deserialize)]
pub struct ExportContent {
    pub resp_list: Vec<Value>,
}

/// One platform block at a configured position of `resp_list`.
#[derive(Debug, Deserialize)]
pub struct PlatformBlock {
    pub indexes: Vec<IndexGroup>,
}

#[derive(Debug, Deserialize)]
pub struct IndexGroup {
    pub time_indexes: Vec<TimeIndexRecord>,
}

/// A raw sample as exported: an 8-digit date code and a score.
#[derive(Debug, Deserialize)]
pub struct TimeIndexRecord {
    pub time: u32,
    pub score: f64,
}

/// Locates the payload marker and decodes the embedded JSON document.
///
/// Decoding happens in two stages so error messages stay free of document
/// content: JSON syntax errors only ever cite a line and column, and the
/// structural mapping reports a fixed description instead of echoing values.
pub fn extract_payload(raw_text: &str) -> Result<RawExport, ParseError> {
    let start = raw_text
        .find(PAYLOAD_MARKER)
        .ok_or(ParseError::MissingPayloadMarker)?;

    let document: Value = serde_json::from_str(raw_text[start..].trim_end())
        .map_err(|err| ParseError::malformed(format!("not valid JSON after the marker: {}", err)))?;

    serde_json::from_value(document).map_err(|_| {
        ParseError::malformed("payload does not have the expected code/content structure")
    })
}

/// Decodes the platform block at one configured `resp_list` position.
pub fn platform_block(export: &RawExport, position: usize) -> Result<PlatformBlock, ParseError> {
    let entries = &export.content.resp_list;
    let value = entries.get(position).ok_or_else(|| {
        ParseError::malformed(format!(
            "platform position {} is out of range, resp_list has {} entries",
            position,
            entries.len()
        ))
    })?;

    serde_json::from_value(value.clone()).map_err(|_| {
        ParseError::malformed(format!(
            "platform block at position {} does not match the expected structure",
            position
        ))
    })
}

/// Converts an 8-digit YYYYMMDD code into a calendar date. Returns `None`
/// for codes with the wrong number of digits or an impossible date.
pub fn parse_date_code(code: u32) -> Option<NaiveDate> {
    if !(10_000_000..=99_999_999).contains(&code) {
        return None;
    }
    let year = (code / 10_000) as i32;
    let month = (code / 100) % 100;
    let day = code % 100;
    NaiveDate::from_ymd_opt(year, month, day)
}
