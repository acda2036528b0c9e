//! Package manager discovery and build command construction.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::process::Command;

use crate::build::BuildError;

/// The external tool that builds one front-end app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildTool {
    program: PathBuf,
    leading_args: Vec<String>,
}

impl BuildTool {
    /// `npm run build --prefix <dir>`
    pub fn npm(program: impl Into<PathBuf>) -> Self {
        Self::custom(program, ["run"])
    }

    /// `yarn build --prefix <dir>`
    pub fn yarn(program: impl Into<PathBuf>) -> Self {
        Self::custom(program, Vec::<String>::new())
    }

    /// Any program; `leading_args` go before `build --prefix <dir>`.
    pub fn custom<I, S>(program: impl Into<PathBuf>, leading_args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            leading_args: leading_args.into_iter().map(Into::into).collect(),
        }
    }

    /// Find npm (or yarn when preferred or when npm is missing) on the PATH.
    pub async fn locate(prefer_yarn: bool) -> Result<Self, BuildError> {
        if !prefer_yarn {
            if let Some(npm) = which("npm").await {
                tracing::debug!(path = %npm.display(), "Using npm");
                return Ok(Self::npm(npm));
            }
        }

        match which("yarn").await {
            Some(yarn) => {
                tracing::debug!(path = %yarn.display(), "Using yarn");
                Ok(Self::yarn(yarn))
            }
            None => Err(BuildError::ToolNotFound),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Full argument list for building the app in `app_dir`.
    pub fn args(&self, app_dir: &Path) -> Vec<String> {
        let mut args = self.leading_args.clone();
        args.push("build".to_string());
        args.push("--prefix".to_string());
        args.push(app_dir.display().to_string());
        args
    }

    /// A ready-to-spawn command with captured output.
    pub fn command(&self, app_dir: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(self.args(app_dir))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        cmd
    }
}

async fn which(binary: &str) -> Option<PathBuf> {
    let output = Command::new("which").arg(binary).output().await.ok()?;
    if !output.status.success() {
        return None;
    }
    let path = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if path.is_empty() {
        None
    } else {
        Some(PathBuf::from(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_npm_uses_run() {
        let tool = BuildTool::npm("/usr/bin/npm");
        assert_eq!(
            tool.args(Path::new("/srv/shop")),
            ["run", "build", "--prefix", "/srv/shop"]
        );
    }

    #[test]
    fn test_yarn_has_no_run() {
        let tool = BuildTool::yarn("/usr/bin/yarn");
        assert_eq!(tool.program(), Path::new("/usr/bin/yarn"));
        assert_eq!(
            tool.args(Path::new("/srv/shop")),
            ["build", "--prefix", "/srv/shop"]
        );
    }
}
