//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use directories::ProjectDirs;

const QUALIFIER: &str = "org";
const ORGANIZATION: &str = "scenariomodelinghub";
const APPLICATION: &str = "smhviz";

const LATEST_LOG: &str = "latest.log";

/// Maximum number of old log files to keep.
const MAX_OLD_LOGS: usize = 10;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Cache directory, home of the log files.
///
/// - Linux: `$XDG_CACHE_HOME/smhviz` or `~/.cache/smhviz`
/// - macOS: `~/Library/Caches/org.scenariomodelinghub.smhviz`
/// - Windows: `C:\Users\<User>\AppData\Local\scenariomodelinghub\smhviz\cache`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Config directory.
///
/// - Linux: `$XDG_CONFIG_HOME/smhviz` or `~/.config/smhviz`
/// - macOS: `~/Library/Application Support/org.scenariomodelinghub.smhviz`
/// - Windows: `C:\Users\<User>\AppData\Roaming\scenariomodelinghub\smhviz\config`
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Default layout configuration file.
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.json"))
}

/// Path of the current log file.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(LATEST_LOG))
}

/// Move `latest.log` aside as `<timestamp>.log`, keeping at most
/// [`MAX_OLD_LOGS`] archives. Runs before the new log file is opened.
pub fn rotate_logs() {
    let Some(cache) = cache_dir() else { return };
    let latest = cache.join(LATEST_LOG);

    if latest.is_file() {
        let archive = cache.join(chrono::Local::now().format("%Y%m%d_%H%M%S.log").to_string());
        if let Err(e) = fs::rename(&latest, &archive) {
            eprintln!("Could not archive {}: {e}", latest.display());
        }
    }

    for path in expired_logs(archived_logs(&cache), MAX_OLD_LOGS) {
        if let Err(e) = fs::remove_file(&path) {
            eprintln!("Could not remove {}: {e}", path.display());
        }
    }
}

/// Archived log files of `dir` with their modification time.
fn archived_logs(dir: &Path) -> Vec<(SystemTime, PathBuf)> {
    let Ok(entries) = fs::read_dir(dir) else { return Vec::new() };
    entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "log"))
        .filter(|path| path.file_name().is_some_and(|name| name != LATEST_LOG))
        .filter_map(|path| {
            let modified = fs::metadata(&path).and_then(|m| m.modified()).ok()?;
            Some((modified, path))
        })
        .collect()
}

/// Logs beyond the `keep` most recent ones.
fn expired_logs(mut logs: Vec<(SystemTime, PathBuf)>, keep: usize) -> Vec<PathBuf> {
    logs.sort_unstable_by(|a, b| b.0.cmp(&a.0));
    logs.into_iter().skip(keep).map(|(_, path)| path).collect()
}
