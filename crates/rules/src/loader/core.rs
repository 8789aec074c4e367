//! Core [`RuleLoader`] struct: resolves input locations and parses rule files.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::schema::RuleSet;

use super::error::{LoadResult, LoadStatus, Result, RuleError};

/// Characters that make an input a glob pattern rather than a path.
const GLOB_META: &[char] = &['*', '?', '['];

/// How input directories are scanned.
#[derive(Debug, Clone)]
pub struct LoaderOptions {
    /// Descend into subdirectories of input directories.
    pub recursive: bool,
    /// File extensions (without the dot) picked up from directories.
    pub extensions: Vec<String>,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            recursive: false,
            extensions: vec!["yml".to_string(), "yaml".to_string()],
        }
    }
}

/// Parse one rule file's contents.
///
/// A document that is blank or holds only comments is an empty rule set.
pub fn parse_rule_set(text: &str) -> std::result::Result<RuleSet, serde_yaml::Error> {
    let blank = text
        .lines()
        .map(str::trim)
        .all(|l| l.is_empty() || l.starts_with('#') || l == "---");
    if blank {
        return Ok(RuleSet::default());
    }
    serde_yaml::from_str(text)
}

/// Filesystem-backed rule loader.
///
/// Inputs may be files, directories, or glob patterns. Directory listings
/// are sorted by file name so the merge order is stable across runs.
#[derive(Debug, Clone, Default)]
pub struct RuleLoader {
    options: LoaderOptions,
}

impl RuleLoader {
    pub fn new(options: LoaderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &LoaderOptions {
        &self.options
    }

    /// Expand inputs into an ordered, de-duplicated list of absolute file paths.
    pub fn resolve_inputs<S: AsRef<str>>(&self, inputs: &[S]) -> Result<Vec<PathBuf>> {
        let mut paths: Vec<PathBuf> = Vec::new();

        for input in inputs {
            let input = input.as_ref();
            let expanded = if input.contains(GLOB_META) {
                self.expand_glob(input)?
            } else {
                self.expand_path(Path::new(input), input)?
            };

            for path in expanded {
                let path = std::path::absolute(&path).map_err(|source| RuleError::Io {
                    path: path.clone(),
                    source,
                })?;
                if paths.contains(&path) {
                    debug!(path = %path.display(), "skipping duplicate input");
                    continue;
                }
                paths.push(path);
            }
        }

        Ok(paths)
    }

    fn expand_path(&self, path: &Path, input: &str) -> Result<Vec<PathBuf>> {
        if path.is_dir() {
            self.scan_dir(path)
        } else if path.is_file() {
            Ok(vec![path.to_path_buf()])
        } else {
            Err(RuleError::InputNotFound(input.to_string()))
        }
    }

    fn expand_glob(&self, pattern: &str) -> Result<Vec<PathBuf>> {
        let entries = glob::glob(pattern).map_err(|e| RuleError::Glob {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| RuleError::Glob {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })?;
            if path.is_dir() {
                files.extend(self.scan_dir(&path)?);
            } else {
                files.push(path);
            }
        }

        if files.is_empty() {
            return Err(RuleError::InputNotFound(pattern.to_string()));
        }
        Ok(files)
    }

    /// List rule files in a directory, skipping dotfiles and other extensions.
    fn scan_dir(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut walker = WalkDir::new(dir).min_depth(1).sort_by_file_name();
        if !self.options.recursive {
            walker = walker.max_depth(1);
        }

        let mut files = Vec::new();
        for entry in walker.into_iter().filter_entry(|e| !is_hidden(e)) {
            let entry = entry.map_err(|e| RuleError::Io {
                path: e.path().unwrap_or(dir).to_path_buf(),
                source: e.into(),
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            if self.has_rule_extension(entry.path()) {
                files.push(entry.into_path());
            } else {
                debug!(path = %entry.path().display(), "skipping non-rule file");
            }
        }

        if files.is_empty() {
            warn!(path = %dir.display(), "no rule files in directory");
        }
        Ok(files)
    }

    fn has_rule_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| self.options.extensions.iter().any(|x| x == e))
            .unwrap_or(false)
    }

    /// Read and parse one rule file.
    ///
    /// Returns `Ok(None)` when the file parses but defines no groups.
    pub fn load_file(&self, path: &Path) -> Result<Option<RuleSet>> {
        let contents = fs::read_to_string(path).map_err(|source| RuleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let rule_set = parse_rule_set(&contents).map_err(|source| RuleError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if rule_set.is_empty() {
            return Ok(None);
        }
        Ok(Some(rule_set))
    }

    /// Load every path, reporting each outcome without stopping at failures.
    pub fn load_all(&self, paths: &[PathBuf]) -> Vec<LoadResult> {
        paths
            .iter()
            .map(|path| {
                let status = match self.load_file(path) {
                    Ok(Some(rule_set)) => {
                        info!(path = %path.display(), groups = rule_set.groups.len(), "loaded rule file");
                        LoadStatus::Loaded { rule_set }
                    }
                    Ok(None) => {
                        warn!(path = %path.display(), "rule file has no groups");
                        LoadStatus::Skipped {
                            reason: "no groups".to_string(),
                        }
                    }
                    Err(error) => {
                        warn!(path = %path.display(), error = %error, "failed to load rule file");
                        LoadStatus::Failed { error }
                    }
                };
                LoadResult {
                    path: path.clone(),
                    status,
                }
            })
            .collect()
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .map(|s| s.starts_with('.'))
            .unwrap_or(false)
}
