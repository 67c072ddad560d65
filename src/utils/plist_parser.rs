use plist::{Dictionary, Value};
use std::io::Cursor;

use crate::utils::AppResult;

/// Parse raw bytes (binary or XML property list) into a generic value tree.
pub fn parse_document(bytes: &[u8]) -> AppResult<Value> {
    let val = Value::from_reader(Cursor::new(bytes))?;
    log::debug!("Parsed property list ({} bytes)", bytes.len());
    Ok(val)
}

pub fn get_string<'a>(dict: &'a Dictionary, key: &str) -> Option<&'a str> {
    dict.get(key)?.as_string()
}

pub fn get_bool(dict: &Dictionary, key: &str) -> Option<bool> {
    dict.get(key)?.as_boolean()
}

pub fn get_dict<'a>(dict: &'a Dictionary, key: &str) -> Option<&'a Dictionary> {
    dict.get(key)?.as_dictionary()
}

pub fn get_array<'a>(dict: &'a Dictionary, key: &str) -> Option<&'a Vec<Value>> {
    dict.get(key)?.as_array()
}

/// Numbers in preference files may be stored as either integer or real.
pub fn get_number(dict: &Dictionary, key: &str) -> Option<f64> {
    match dict.get(key)? {
        Value::Real(r) => Some(*r),
        Value::Integer(i) => i.as_signed().map(|n| n as f64),
        _ => None,
    }
}
