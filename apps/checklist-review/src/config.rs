//! Configuration discovery and effective settings resolution.
//!
//! Reads `checklist-review.toml|yaml|yml` from the repository root (or
//! closest ancestor) and merges it with CLI flags to produce an `Effective`
//! config.
//! Defaults:
//! - `dir`: `docs/10-appendix/checklists/workflow`
//! - `out`: `docs/10-appendix/checklists/implementation-review.md`
//! - `pattern`: `*.md`
//! - `title`: `Implementation Review`
//! - `link_prefix`: path from the report's directory to `dir`
//! - `output`: `human`
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::error::{Result, ReviewError};
use crate::render::{RenderOptions, DEFAULT_TITLE};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_NAMES: [&str; 3] = [
    "checklist-review.toml",
    "checklist-review.yaml",
    "checklist-review.yml",
];
pub const DEFAULT_DIR: &str = "docs/10-appendix/checklists/workflow";
pub const DEFAULT_OUT: &str = "docs/10-appendix/checklists/implementation-review.md";
pub const DEFAULT_PATTERN: &str = "*.md";

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `checklist-review.toml|yaml`.
pub struct ReviewConfig {
    pub dir: Option<String>,
    pub out: Option<String>,
    pub pattern: Option<String>,
    pub title: Option<String>,
    pub link_prefix: Option<String>,
    pub output: Option<String>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by the report run.
pub struct Effective {
    pub repo_root: PathBuf,
    pub dir: PathBuf,
    pub out: PathBuf,
    pub pattern: String,
    pub output: String,
    pub render: RenderOptions,
    /// Config file the settings were read from, if any.
    pub config_path: Option<PathBuf>,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `checklist-review.*` config or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if CONFIG_NAMES.iter().any(|n| cur.join(n).exists()) || cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `ReviewConfig` from the first config file present in `root`.
///
/// Returns `Ok(None)` when there is no config file; a file that exists but
/// cannot be read or parsed is an error.
pub fn load_config(root: &Path) -> Result<Option<(PathBuf, ReviewConfig)>> {
    for name in CONFIG_NAMES {
        let p = root.join(name);
        if !p.is_file() {
            continue;
        }
        let s = fs::read_to_string(&p).map_err(|source| ReviewError::Read {
            path: p.clone(),
            source,
        })?;
        let parsed = if name.ends_with(".toml") {
            toml::from_str::<ReviewConfig>(&s).map_err(|e| e.to_string())
        } else {
            serde_yaml::from_str::<ReviewConfig>(&s).map_err(|e| e.to_string())
        };
        return match parsed {
            Ok(cfg) => Ok(Some((p, cfg))),
            Err(message) => Err(ReviewError::Config { path: p, message }),
        };
    }
    Ok(None)
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_dir: Option<&str>,
    cli_out: Option<&str>,
    cli_output: Option<&str>,
) -> Result<Effective> {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let (config_path, cfg) = match load_config(&repo_root)? {
        Some((p, cfg)) => (Some(p), cfg),
        None => (None, ReviewConfig::default()),
    };

    let dir = repo_root.join(
        cli_dir
            .map(|s| s.to_string())
            .or(cfg.dir)
            .unwrap_or_else(|| DEFAULT_DIR.to_string()),
    );
    let out = repo_root.join(
        cli_out
            .map(|s| s.to_string())
            .or(cfg.out)
            .unwrap_or_else(|| DEFAULT_OUT.to_string()),
    );
    let pattern = cfg.pattern.unwrap_or_else(|| DEFAULT_PATTERN.to_string());
    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());
    let title = cfg.title.unwrap_or_else(|| DEFAULT_TITLE.to_string());
    let link_prefix = cfg
        .link_prefix
        .unwrap_or_else(|| default_link_prefix(&dir, &out));

    Ok(Effective {
        repo_root,
        dir,
        out,
        pattern,
        output,
        render: RenderOptions { title, link_prefix },
        config_path,
    })
}

/// Relative link from the report's directory to the checklist directory,
/// e.g. `./workflow/` when the checklists sit next to the report.
pub fn default_link_prefix(dir: &Path, out: &Path) -> String {
    let base = out.parent().unwrap_or_else(|| Path::new(""));
    let rel = pathdiff::diff_paths(dir, base).unwrap_or_else(|| dir.to_path_buf());
    let rel = rel.to_string_lossy().replace('\\', "/");
    if rel.is_empty() {
        "./".to_string()
    } else if rel.starts_with("..") || rel.starts_with('/') {
        format!("{}/", rel)
    } else {
        format!("./{}/", rel)
    }
}
