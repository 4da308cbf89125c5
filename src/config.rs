use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;

use crate::command::{Assignment, ScenarioCount};

/// Flags that can be saved as defaults in a config file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub assignment: Option<Assignment>,
    pub scenarios: Option<ScenarioCount>,
    pub dry_run: bool,
    pub json: bool,
    pub perf: bool,
    pub debug_log: Option<PathBuf>,
}

impl ConfigFlags {
    pub fn union(&self, other: &Self) -> Self {
        Self {
            assignment: other.assignment.or(self.assignment),
            scenarios: other.scenarios.or(self.scenarios),
            dry_run: self.dry_run || other.dry_run,
            json: self.json || other.json,
            perf: self.perf || other.perf,
            debug_log: other.debug_log.clone().or_else(|| self.debug_log.clone()),
        }
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("gradeline").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("gradeline")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("gradeline").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join(".config")
                .join("gradeline")
                .join("config");
        }
    }

    local_override_path()
}

/// Per-directory defaults, e.g. one `.gradelinerc` per assignment folder.
pub fn local_override_path() -> PathBuf {
    PathBuf::from(".gradelinerc")
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = vec!["# gradeline defaults (saved with --save)".to_string()];
    if let Some(assignment) = flags.assignment {
        lines.push(format!("--assignment {}", assignment.name()));
    }
    if let Some(scenarios) = flags.scenarios {
        lines.push(format!("--scenarios {}", scenarios.name()));
    }
    if flags.dry_run {
        lines.push("--dry-run".to_string());
    }
    if flags.json {
        lines.push("--json".to_string());
    }
    if flags.perf {
        lines.push("--perf".to_string());
    }
    if let Some(path) = &flags.debug_log {
        lines.push(format!("--debug-log {}", path.display()));
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

/// Pick known flags out of raw arguments; anything else is ignored.
pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i].as_str();
        let (name, inline) = match token.split_once('=') {
            Some((name, value)) if name.starts_with('-') => (name, Some(value)),
            _ => (token, None),
        };
        match name {
            "--dry-run" => flags.dry_run = true,
            "--json" => flags.json = true,
            "--perf" => flags.perf = true,
            "--assignment" | "-a" | "--scenarios" | "--debug-log" => {
                let value = match inline {
                    Some(value) => Some(value),
                    None => {
                        i += 1;
                        tokens.get(i).map(String::as_str)
                    }
                };
                if let Some(value) = value {
                    apply_option(&mut flags, name, value);
                }
            }
            _ => {}
        }
        i += 1;
    }
    flags
}

fn apply_option(flags: &mut ConfigFlags, name: &str, value: &str) {
    match name {
        "--assignment" | "-a" => flags.assignment = parse_assignment(value),
        "--scenarios" => flags.scenarios = parse_scenarios(value),
        "--debug-log" => flags.debug_log = Some(PathBuf::from(value)),
        _ => {}
    }
}

// Case-sensitive, the same way the command line parses these values.
fn parse_assignment(s: &str) -> Option<Assignment> {
    Assignment::from_str(s, false).ok()
}

fn parse_scenarios(s: &str) -> Option<ScenarioCount> {
    ScenarioCount::from_str(s, false).ok()
}
