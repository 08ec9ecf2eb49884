//! Driver for the external `create-app` scaffolding tool.

use crate::models::combination::Combination;

use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// The scaffolding CLI that turns a flag combination into a project tree.
const SCAFFOLD_BIN: &str = "create-app";

/// Switch telling the scaffolder to overwrite whatever is in its way.
const FORCE_FLAG: &str = "--force";

/// Drives the scaffolding tool against an explicit playground root.
///
/// The root is carried here instead of changing the process working
/// directory; every spawn sets its own `current_dir`.
#[derive(Debug)]
pub struct Scaffolder {
    program: PathBuf,
    playground: PathBuf,
}

impl Scaffolder {
    /// Creates a driver for the default scaffolder binary, resolved from `PATH`.
    #[must_use]
    pub fn new(playground: PathBuf) -> Self {
        Self { program: PathBuf::from(SCAFFOLD_BIN), playground }
    }

    /// Override the scaffolder binary (useful for testing/custom setups).
    pub fn with_program(program: impl Into<PathBuf>, playground: PathBuf) -> Self {
        Self { program: program.into(), playground }
    }

    /// Removes a previously generated project, recursively.
    ///
    /// # Result
    /// Returns `Ok(())` when the entry is gone, including when it never
    /// existed.
    ///
    /// # Errors
    /// Returns an error for any removal failure other than a missing target.
    pub fn remove_project(&self, project_name: &str) -> Result<()> {
        let target = self.playground.join(project_name);

        let metadata = match fs::symlink_metadata(&target) {
            Ok(metadata) => metadata,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Failed to inspect '{}'", target.display()));
            },
        };

        let removed = if metadata.is_dir() {
            fs::remove_dir_all(&target)
        } else {
            fs::remove_file(&target)
        };

        removed.with_context(|| format!("Failed to remove '{}'", target.display()))
    }

    /// Regenerates the project for one combination.
    ///
    /// Any pre-existing entry of the same name is removed first; the
    /// scaffolder then runs with the playground as its working directory and
    /// its output streamed to the terminal.
    ///
    /// # Errors
    /// Returns an error if the cleanup fails, the scaffolder cannot be
    /// spawned, or it exits with a non-zero status.
    pub fn generate(&self, combination: &Combination) -> Result<()> {
        let project_name = combination.project_name();
        self.remove_project(&project_name)?;

        println!("📦 Creating project {project_name}");
        let status = Command::new(&self.program)
            .args(scaffold_args(combination))
            .current_dir(&self.playground)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .with_context(|| {
                format!(
                    "Failed to execute '{}'. Is the scaffolder built and in your PATH?",
                    self.program.display()
                )
            })?;

        if !status.success() {
            anyhow::bail!("Scaffolding '{project_name}' failed with status: {status}");
        }

        Ok(())
    }
}

/// Renders the argument list for one combination: the target directory
/// first, then one `--<flag>` switch per flag, then the overwrite switch.
#[must_use]
pub fn scaffold_args(combination: &Combination) -> Vec<String> {
    let mut args = vec![combination.project_name()];
    args.extend(combination.flags().iter().map(|flag| format!("--{flag}")));
    args.push(FORCE_FLAG.to_owned());
    args
}
