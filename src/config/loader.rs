//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::ConfigWarning;
use crate::error::{CutoverError, CutoverResult};

use super::types::DeployConfig;

/// File name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "cutover.toml";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> CutoverResult<(DeployConfig, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| CutoverError::Configuration {
        message: format!("cannot read {}: {}", path.display(), e),
        file: Some(path.to_path_buf()),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: DeployConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| CutoverError::Configuration {
        message: e.to_string(),
        file: Some(path.to_path_buf()),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Locate the configuration file.
///
/// `explicit` is the `--config` flag. `get_env` reads environment
/// variables, `cwd` is the working directory and `user_config_dir` the
/// platform config directory.
pub fn discover_config_path(
    explicit: Option<&Path>,
    get_env: impl Fn(&str) -> Option<String>,
    cwd: &Path,
    user_config_dir: Option<&Path>,
) -> CutoverResult<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    if let Some(path) = get_env("CUTOVER_CONFIG").filter(|v| !v.trim().is_empty()) {
        return Ok(PathBuf::from(path));
    }

    let local = cwd.join(CONFIG_FILE_NAME);
    if local.is_file() {
        return Ok(local);
    }

    if let Some(dir) = user_config_dir {
        let user = dir.join("cutover").join("config.toml");
        if user.is_file() {
            return Ok(user);
        }
    }

    Err(CutoverError::configuration(format!(
        "no configuration found: pass --config, set CUTOVER_CONFIG or create ./{}",
        CONFIG_FILE_NAME
    )))
}

/// Apply environment variable overrides (CUTOVER_* prefix)
pub fn with_env_overrides(
    mut config: DeployConfig,
    get_env: impl Fn(&str) -> Option<String>,
) -> DeployConfig {
    if let Some(branch) = get_env("CUTOVER_BRANCH") {
        config.branch = branch;
    }

    if let Some(user) = get_env("CUTOVER_AS_USER") {
        config.as_user = user;
    }

    if let Some(root) = get_env("CUTOVER_ROOT_PATH") {
        config.root_path = PathBuf::from(root);
    }

    if let Some(repository) = get_env("CUTOVER_REPOSITORY") {
        config.repository = repository;
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "as_user",
        "root_path",
        "repository",
        "branch",
        "shared_resources",
        "build",
        "bootstrap",
        "run",
        "services",
        "control_dir",
        "web_frontend",
        "promotion",
        "atomic_pointer_swap",
        "transport",
        "kind",
        "ssh_command",
        "ssh_options",
        "sudo",
        "environments",
        "qa",
        "production",
        "host",
        "app_services",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
