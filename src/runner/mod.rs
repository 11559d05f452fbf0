//! External `mvn dependency:tree` invocation.
//!
//! The graph reconstruction itself never talks to Maven; this module is the
//! thin process collaborator that produces the raw report lines. A non-zero
//! exit from Maven is a hard failure for the whole operation - stderr is
//! captured and surfaced verbatim, never parsed.

use std::path::{Path, PathBuf};
use std::process::Command;

/// Errors that can occur while producing a dependency report.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// The project directory does not look like a Maven project.
    #[error("no pom.xml found in {0}")]
    NotAMavenProject(PathBuf),

    /// The Maven process could not be spawned.
    #[error("failed to run {binary}: {source}")]
    Io {
        /// The executable that failed to spawn.
        binary: String,
        /// The underlying spawn error.
        source: std::io::Error,
    },

    /// Maven ran but exited non-zero.
    #[error("mvn dependency:tree exited with {status}:\n{stderr}")]
    CommandFailed {
        /// The process exit status.
        status: std::process::ExitStatus,
        /// Captured stderr content.
        stderr: String,
    },
}

/// Result type alias for runner operations.
pub type RunnerResult<T> = Result<T, RunnerError>;

/// Runs `mvn dependency:tree` in a project directory and collects stdout.
///
/// # Example
///
/// ```no_run
/// use mvnscope::runner::MavenRunner;
///
/// let runner = MavenRunner::new("/path/to/project")?;
/// let lines = runner.run()?;
/// println!("captured {} report lines", lines.len());
/// # Ok::<(), mvnscope::runner::RunnerError>(())
/// ```
#[derive(Debug, Clone)]
pub struct MavenRunner {
    project_dir: PathBuf,
    binary: String,
}

impl MavenRunner {
    /// Creates a runner for a Maven project directory.
    ///
    /// Fails fast when the directory has no `pom.xml`, so misconfiguration
    /// is caught before spawning anything.
    pub fn new(project_dir: impl AsRef<Path>) -> RunnerResult<Self> {
        let project_dir = project_dir.as_ref().to_path_buf();

        if !project_dir.join("pom.xml").exists() {
            return Err(RunnerError::NotAMavenProject(project_dir));
        }

        Ok(Self {
            project_dir,
            binary: "mvn".to_string(),
        })
    }

    /// Overrides the Maven executable name (e.g., `mvnw` or an absolute path).
    pub fn with_binary(mut self, binary: impl Into<String>) -> Self {
        self.binary = binary.into();
        self
    }

    /// Returns the project directory this runner targets.
    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// Runs `mvn dependency:tree` and returns the stdout lines.
    ///
    /// The full output is collected before returning; the report is small
    /// and the classifier works on an in-memory list, not a stream.
    pub fn run(&self) -> RunnerResult<Vec<String>> {
        tracing::debug!(dir = %self.project_dir.display(), binary = %self.binary, "running dependency:tree");

        let output = Command::new(&self.binary)
            .arg("dependency:tree")
            .current_dir(&self.project_dir)
            .output()
            .map_err(|source| RunnerError::Io {
                binary: self.binary.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(RunnerError::CommandFailed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::to_string)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_directory_without_pom() {
        let result = MavenRunner::new(std::env::temp_dir());
        assert!(matches!(result, Err(RunnerError::NotAMavenProject(_))));
    }

    #[test]
    fn test_error_display_includes_stderr() {
        let err = RunnerError::CommandFailed {
            status: std::process::ExitStatus::default(),
            stderr: "BUILD FAILURE: missing artifact".to_string(),
        };
        assert!(err.to_string().contains("BUILD FAILURE"));
    }

    #[test]
    fn test_with_binary_override() {
        let dir = pom_dir("override");
        let runner = MavenRunner::new(&dir).unwrap().with_binary("./mvnw");
        assert_eq!(runner.binary, "./mvnw");
        assert_eq!(runner.project_dir(), dir.as_path());
    }

    #[test]
    fn test_nonzero_exit_is_a_hard_failure() {
        let runner = MavenRunner::new(pom_dir("exit"))
            .unwrap()
            .with_binary("false");

        // A failing process never yields report lines
        let result = runner.run();
        assert!(matches!(result, Err(RunnerError::CommandFailed { .. })));
    }

    #[test]
    fn test_missing_binary_is_io_error() {
        let runner = MavenRunner::new(pom_dir("missing"))
            .unwrap()
            .with_binary("mvnscope-no-such-binary");

        assert!(matches!(runner.run(), Err(RunnerError::Io { .. })));
    }

    fn pom_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("mvnscope-runner-{name}"));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("pom.xml"), "<project/>").unwrap();
        dir
    }
}
