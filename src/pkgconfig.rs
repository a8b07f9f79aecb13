//! pkg-config invocation and flag aggregation.
//!
//! All dependency names are opaque tokens handed to the tool; any
//! transitive resolution happens inside pkg-config itself. Names are
//! joined with single spaces and passed as one argument, matching how
//! the makefiles quote their expansions.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::UserbuildError;

/// Handle to the package-metadata query tool.
#[derive(Debug, Clone)]
pub struct PkgConfig {
    program: PathBuf,
}

impl PkgConfig {
    /// Use an explicit program path. Tests point this at stub scripts.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Resolve the tool: the `PKG_CONFIG` variable wins (cross builds set
    /// it), then PATH, then the bare name.
    pub fn from_env() -> Self {
        if let Ok(program) = std::env::var("PKG_CONFIG") {
            if !program.trim().is_empty() {
                return Self::new(program);
            }
        }
        match which::which("pkg-config") {
            Ok(path) => Self::new(path),
            Err(_) => Self::new("pkg-config"),
        }
    }

    /// The resolved program path.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Compiler flags for the given dependencies, one invocation.
    pub fn cflags(&self, deps: &[String]) -> Result<String, UserbuildError> {
        self.query("--cflags", deps)
    }

    /// Linker flags for the given dependencies, one invocation.
    pub fn libs(&self, deps: &[String]) -> Result<String, UserbuildError> {
        self.query("--libs", deps)
    }

    fn query(&self, flag: &str, deps: &[String]) -> Result<String, UserbuildError> {
        let joined = deps.join(" ");
        if joined.is_empty() {
            return Ok(String::new());
        }

        let output = Command::new(&self.program)
            .arg(flag)
            .arg(&joined)
            .output()
            .map_err(|e| self.failure(flag, &joined, format!("{e}. Is it installed?")))?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            let detail = if stderr.is_empty() {
                format!("exit code {code}")
            } else {
                format!("exit code {code}: {stderr}")
            };
            return Err(self.failure(flag, &joined, detail));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn failure(&self, flag: &str, names: &str, detail: String) -> UserbuildError {
        UserbuildError::ExternalToolFailure {
            tool: self.program.display().to_string(),
            args: format!("{flag} {names}"),
            detail,
        }
    }
}

/// Dependency cflags with locally declared flags prepended.
///
/// An empty dependency list short-circuits to an empty string without
/// invoking the tool; local flags are not surfaced through this path.
pub fn resolve_cflags(
    local: &str,
    deps: &[String],
    tool: &PkgConfig,
) -> Result<String, UserbuildError> {
    if deps.is_empty() {
        return Ok(String::new());
    }
    let resolved = tool.cflags(deps)?;
    if local.is_empty() {
        Ok(resolved)
    } else if resolved.is_empty() {
        Ok(local.to_string())
    } else {
        Ok(format!("{local} {resolved}"))
    }
}

/// Dependency linker flags. Locally declared LDFLAGS are surfaced by the
/// caller on their own and never merged here.
pub fn resolve_libs(deps: &[String], tool: &PkgConfig) -> Result<String, UserbuildError> {
    tool.libs(deps)
}
