use std::process::Command;

use crate::utils::{AppError, AppResult};

/// Check if a GUI app with the given bundle ID is currently running.
/// Uses `lsappinfo list` which is the most reliable method for GUI apps on macOS.
pub fn is_app_running(bundle_id: &str) -> bool {
    let output = match Command::new("lsappinfo")
        .current_dir("/tmp")
        .args(["list"])
        .output()
    {
        Ok(o) => o,
        Err(_) => return false,
    };

    let stdout = String::from_utf8_lossy(&output.stdout);
    listing_has_bundle_id(&stdout, bundle_id)
}

/// Exact match on the quoted `bundleID` field of `lsappinfo` output, so
/// `com.apple.Safari` does not match `com.apple.SafariTechnologyPreview`.
/// Accepts both `bundleID="id"` (`list`) and `"bundleID"="id"` (`info`).
fn listing_has_bundle_id(listing: &str, bundle_id: &str) -> bool {
    listing.lines().any(|line| {
        let Some(pos) = line.find("bundleID") else {
            return false;
        };
        let rest = line[pos + "bundleID".len()..]
            .trim_start_matches('"')
            .trim_start();
        let Some(rest) = rest.strip_prefix('=') else {
            return false;
        };
        rest.trim_start()
            .strip_prefix('"')
            .and_then(|v| v.split('"').next())
            .map(|v| v == bundle_id)
            .unwrap_or(false)
    })
}

/// Ask a running app to quit via AppleScript. No-op when it isn't running.
pub fn quit_app(bundle_id: &str) -> AppResult<()> {
    if !is_app_running(bundle_id) {
        log::debug!("{} is not running, nothing to terminate", bundle_id);
        return Ok(());
    }

    Command::new("osascript")
        .current_dir("/tmp")
        .args(["-e", &quit_script(bundle_id)])
        .output()
        .map_err(|e| AppError::CommandFailed(format!("osascript: {}", e)))?;
    Ok(())
}

/// Hand a path or URL to LaunchServices (`open`).
pub fn open_target(target: &str) -> AppResult<()> {
    Command::new("open")
        .current_dir("/tmp")
        .arg(target)
        .output()
        .map_err(|e| AppError::CommandFailed(format!("open: {}", e)))?;
    Ok(())
}

fn quit_script(bundle_id: &str) -> String {
    let escaped = bundle_id.replace('\\', "\\\\").replace('"', "\\\"");
    format!("tell application id \"{}\" to quit", escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"
 3) "Safari Technology Preview" ASN:0x0-0x4a04a:
    bundleID="com.apple.SafariTechnologyPreview"
    bundle path="/Applications/Safari Technology Preview.app"
 4) "Finder" ASN:0x0-0x1e01e:
    bundleID="com.apple.finder"
"#;

    #[test]
    fn bundle_id_must_match_exactly() {
        assert!(!listing_has_bundle_id(LISTING, "com.apple.Safari"));
        assert!(listing_has_bundle_id(LISTING, "com.apple.SafariTechnologyPreview"));
        assert!(listing_has_bundle_id(LISTING, "com.apple.finder"));
        assert!(!listing_has_bundle_id(LISTING, "com.apple"));
    }

    #[test]
    fn info_style_bundle_id_field() {
        let info = r#""bundleID"="com.apple.Safari""#;
        assert!(listing_has_bundle_id(info, "com.apple.Safari"));
        assert!(!listing_has_bundle_id(info, "com.apple.Saf"));
    }

    #[test]
    fn bundle_id_outside_field_is_ignored() {
        let listing = r#"    bundle path="/Applications/com.apple.Safari.app""#;
        assert!(!listing_has_bundle_id(listing, "com.apple.Safari"));
    }

    #[test]
    fn quit_script_targets_bundle_id() {
        assert_eq!(
            quit_script("com.apple.Safari"),
            "tell application id \"com.apple.Safari\" to quit"
        );
    }

    #[test]
    fn quit_script_escapes_quotes() {
        assert_eq!(
            quit_script("evil\" to quit\n"),
            "tell application id \"evil\\\" to quit\n\" to quit"
        );
    }
}
