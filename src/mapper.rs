//! Maps the generic plist tree onto [`DockPreferences`].
//!
//! The first missing or mistyped field aborts the mapping with a
//! `SchemaMismatch` naming the full key path. Only two things are tolerated:
//! unrecognized enum strings (mapped to `Unknown`) and an absent `trash-full`.

use plist::{Dictionary, Value};

use crate::models::{
    keys, DockApp, DockFile, DockPreferences, FileReference, MinimizeEffect, Orientation,
};
use crate::utils::plist_parser::{get_array, get_bool, get_dict, get_number, get_string};
use crate::utils::{AppError, AppResult};

pub fn map_preferences(root: &Value) -> AppResult<DockPreferences> {
    let dict = root
        .as_dictionary()
        .ok_or_else(|| AppError::mistyped("<root>", "dictionary"))?;

    let prefs = DockPreferences {
        show_recents: required_bool(dict, keys::SHOW_RECENTS, "")?,
        autohide: required_bool(dict, keys::AUTOHIDE, "")?,
        shows_process_indicators: required_bool(dict, keys::SHOW_PROCESS_INDICATORS, "")?,
        minimize_effect: MinimizeEffect::from_str(required_string(
            dict,
            keys::MINIMIZE_EFFECT,
            "",
        )?),
        orientation: Orientation::from_str(required_string(dict, keys::ORIENTATION, "")?),
        trash_state: optional_bool(dict, keys::TRASH_FULL, "")?,
        persistent_apps: map_tiles(dict, keys::PERSISTENT_APPS, map_app)?,
        recent_apps: map_tiles(dict, keys::RECENT_APPS, map_app)?,
        files: map_tiles(dict, keys::PERSISTENT_OTHERS, map_file)?,
        tile_size: get_number(dict, keys::TILE_SIZE),
        magnification: get_bool(dict, keys::MAGNIFICATION),
        large_size: get_number(dict, keys::LARGE_SIZE),
    };

    log::debug!(
        "Mapped Dock preferences: {} pinned apps, {} recent apps, {} files",
        prefs.persistent_apps.len(),
        prefs.recent_apps.len(),
        prefs.files.len()
    );
    Ok(prefs)
}

fn key_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

fn required_bool(dict: &Dictionary, key: &str, prefix: &str) -> AppResult<bool> {
    match dict.get(key) {
        None => Err(AppError::missing(key_path(prefix, key))),
        Some(v) => v
            .as_boolean()
            .ok_or_else(|| AppError::mistyped(key_path(prefix, key), "boolean")),
    }
}

fn optional_bool(dict: &Dictionary, key: &str, prefix: &str) -> AppResult<Option<bool>> {
    match dict.get(key) {
        None => Ok(None),
        Some(v) => v
            .as_boolean()
            .map(Some)
            .ok_or_else(|| AppError::mistyped(key_path(prefix, key), "boolean")),
    }
}

fn required_string<'a>(dict: &'a Dictionary, key: &str, prefix: &str) -> AppResult<&'a str> {
    match dict.get(key) {
        None => Err(AppError::missing(key_path(prefix, key))),
        Some(_) => get_string(dict, key)
            .ok_or_else(|| AppError::mistyped(key_path(prefix, key), "string")),
    }
}

fn required_dict<'a>(dict: &'a Dictionary, key: &str, prefix: &str) -> AppResult<&'a Dictionary> {
    match dict.get(key) {
        None => Err(AppError::missing(key_path(prefix, key))),
        Some(_) => get_dict(dict, key)
            .ok_or_else(|| AppError::mistyped(key_path(prefix, key), "dictionary")),
    }
}

/// Decode one tile list in source order, unwrapping each tile's `tile-data`.
fn map_tiles<T>(
    dict: &Dictionary,
    key: &str,
    map_tile: fn(&Dictionary, &str) -> AppResult<T>,
) -> AppResult<Vec<T>> {
    let tiles = match dict.get(key) {
        None => return Err(AppError::missing(key)),
        Some(_) => get_array(dict, key).ok_or_else(|| AppError::mistyped(key, "array"))?,
    };

    tiles
        .iter()
        .enumerate()
        .map(|(i, tile)| {
            let prefix = format!("{}[{}]", key, i);
            let tile = tile
                .as_dictionary()
                .ok_or_else(|| AppError::mistyped(prefix.clone(), "dictionary"))?;
            let data = required_dict(tile, keys::TILE_DATA, &prefix)?;
            map_tile(data, &key_path(&prefix, keys::TILE_DATA))
        })
        .collect()
}

fn map_file_reference(data: &Dictionary, prefix: &str) -> AppResult<FileReference> {
    let file_data = required_dict(data, keys::FILE_DATA, prefix)?;
    let url = required_string(file_data, keys::URL_STRING, &key_path(prefix, keys::FILE_DATA))?;
    Ok(FileReference::new(url))
}

fn map_app(data: &Dictionary, prefix: &str) -> AppResult<DockApp> {
    Ok(DockApp::new(
        required_string(data, keys::BUNDLE_IDENTIFIER, prefix)?.to_string(),
        required_bool(data, keys::IS_BETA, prefix)?,
        required_string(data, keys::FILE_LABEL, prefix)?.to_string(),
        map_file_reference(data, prefix)?,
    ))
}

fn map_file(data: &Dictionary, prefix: &str) -> AppResult<DockFile> {
    Ok(DockFile::new(
        required_string(data, keys::FILE_LABEL, prefix)?.to_string(),
        map_file_reference(data, prefix)?,
    ))
}
