use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Render the Finder icon of `target` (an app bundle, folder or file) as a PNG
/// in `output_dir`.
///
/// 1. `sips` on the bundle's `.icns` when the target is an `.app`
/// 2. `qlmanage` thumbnail for everything else, and as fallback
pub fn extract_icon_png(target: &Path, output_dir: &Path) -> Option<PathBuf> {
    let output_path = output_dir.join(format!("{}.png", cache_key(target)));

    if output_path.exists() {
        log::debug!("Icon already cached for {}", target.display());
        return Some(output_path);
    }

    if let Some(path) = try_bundle_icns(target, &output_path) {
        return Some(path);
    }

    if let Some(path) = try_qlmanage(target, &output_path) {
        return Some(path);
    }

    log::warn!("Icon extraction failed for {}", target.display());
    None
}

/// Stable, filesystem-safe name for a target path.
fn cache_key(target: &Path) -> String {
    let raw = target.to_string_lossy();
    let key: String = raw
        .trim_matches('/')
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '.' || c == '-' { c } else { '_' })
        .collect();
    if key.is_empty() {
        "root".to_string()
    } else {
        key
    }
}

fn try_bundle_icns(target: &Path, output_path: &Path) -> Option<PathBuf> {
    let is_app = target
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("app"))
        .unwrap_or(false);
    if !is_app {
        return None;
    }

    let resources_dir = target.join("Contents/Resources");
    let entries: Vec<_> = std::fs::read_dir(&resources_dir)
        .ok()?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.extension()
                .map(|ext| ext.eq_ignore_ascii_case("icns"))
                .unwrap_or(false)
        })
        .collect();

    // Prefer AppIcon.icns if present
    let icns_path = entries
        .iter()
        .find(|p| {
            p.file_name()
                .map(|n| n.to_string_lossy().eq_ignore_ascii_case("AppIcon.icns"))
                .unwrap_or(false)
        })
        .or_else(|| entries.first())?;

    let status = Command::new("sips")
        .args([
            "-s",
            "format",
            "png",
            "-z",
            "128",
            "128",
            &icns_path.to_string_lossy(),
            "--out",
            &output_path.to_string_lossy(),
        ])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .output();

    match status {
        Ok(output) if output.status.success() => {
            log::debug!("sips converted {}", icns_path.display());
            Some(output_path.to_path_buf())
        }
        Ok(_) => {
            log::debug!("sips failed for {}", icns_path.display());
            None
        }
        Err(e) => {
            log::debug!("sips command error: {}", e);
            None
        }
    }
}

fn try_qlmanage(target: &Path, output_path: &Path) -> Option<PathBuf> {
    let tmp_dir = match tempfile::tempdir() {
        Ok(d) => d,
        Err(e) => {
            log::debug!("Failed to create temp dir for qlmanage: {}", e);
            return None;
        }
    };

    let output = Command::new("qlmanage")
        .args([
            "-t",
            "-s",
            "128",
            "-o",
            &tmp_dir.path().to_string_lossy(),
            &target.to_string_lossy(),
        ])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .output();

    match output {
        Ok(output) if output.status.success() => {
            // qlmanage writes <input_name>.png into the output dir
            let png = std::fs::read_dir(tmp_dir.path())
                .ok()?
                .filter_map(|e| e.ok())
                .map(|e| e.path())
                .find(|p| p.extension().map(|ext| ext == "png").unwrap_or(false))?;

            if std::fs::copy(&png, output_path).is_ok() {
                log::debug!("qlmanage thumbnail for {}", target.display());
                return Some(output_path.to_path_buf());
            }
            None
        }
        Ok(_) => {
            log::debug!("qlmanage exited with non-zero status for {}", target.display());
            None
        }
        Err(e) => {
            log::debug!("qlmanage failed to execute: {}", e);
            None
        }
    }
}
