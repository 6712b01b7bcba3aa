use std::fs;
use std::path::Path;
use std::process::{ExitStatus, Stdio};

use tokio::io::AsyncWriteExt;

/// Path to the `checkdiff` binary built by cargo for this test run.
const CHECKDIFF_BIN: &str = env!("CARGO_BIN_EXE_checkdiff");

/// Comma-separated sample shared across tests.
pub const SAMPLE_CSV: &str = "a,1\nb,2\n";

/// Tab-separated rendition of [`SAMPLE_CSV`].
pub const SAMPLE_TSV: &str = "a\t1\nb\t2\n";

/// Output from running a binary command
#[derive(Eq, PartialEq)]
pub struct Output {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

/// Shared test fixture utilities to keep filesystem interactions isolated
pub struct Fixture {
    root_dir: tempfile::TempDir,
}

impl Fixture {
    /// Create fixture with multiple files
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created or if any fixture file
    /// cannot be written.
    pub fn with_files(names: &[&str], contents: &[&[u8]]) -> Self {
        let root_dir = tempfile::TempDir::new().unwrap();
        for (name, contents) in names.iter().zip(contents) {
            fs::write(root_dir.path().join(name), contents).unwrap();
        }

        Self { root_dir }
    }

    /// Create fixture with a comma-separated and a tab-separated file
    ///
    /// # Panics
    ///
    /// Panics if the fixture files cannot be written.
    pub fn with_pair(csv: &str, tsv: &str) -> Self {
        Self::with_files(&["a.csv", "b.tsv"], &[csv.as_bytes(), tsv.as_bytes()])
    }

    /// Get full path for a file in the fixture
    pub fn path(&self, name: &str) -> String {
        format!("{}/{}", self.root_dir.path().display(), name)
    }

    pub fn root_dir_path(&self) -> &Path {
        self.root_dir.path()
    }

    /// Run `checkdiff` with the specified arguments
    pub async fn run(&mut self, args: &[&str]) -> Output {
        self.run_with_stdin(args, None).await
    }

    /// Run `checkdiff` on the pair created by [`Fixture::with_pair`]
    pub async fn run_pair(&mut self, extra_args: &[&str]) -> Output {
        let a = self.path("a.csv");
        let b = self.path("b.tsv");
        let mut args: Vec<&str> = extra_args.to_vec();
        args.push(&a);
        args.push(&b);
        self.run(&args).await
    }

    /// Run `checkdiff` with the specified arguments and optional stdin input
    ///
    /// # Panics
    ///
    /// Panics if the process cannot be spawned, if writing to stdin fails, or if
    /// awaiting process output fails.
    pub async fn run_with_stdin(&mut self, args: &[&str], stdin_bytes: Option<&[u8]>) -> Output {
        let mut child = tokio::process::Command::new(CHECKDIFF_BIN)
            .args(args)
            .env_remove("CHECKDIFF_LOG")
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .stdin(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .unwrap();

        if let Some(stdin_bytes) = stdin_bytes {
            if let Some(ref mut stdin) = child.stdin {
                stdin.write_all(stdin_bytes).await.unwrap_or_else(|err| {
                    // The child may exit before consuming stdin (e.g. usage errors).
                    if err.kind() == std::io::ErrorKind::BrokenPipe {
                        return;
                    }
                    panic!("failed write to stdin ({} bytes): {err}", stdin_bytes.len());
                });
            }
        }

        // Drop stdin to send EOF to the child process
        drop(child.stdin.take());

        let raw_output = child.wait_with_output().await.unwrap();
        Output {
            status: raw_output.status,
            stdout: String::from_utf8_lossy(&raw_output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&raw_output.stderr).into_owned(),
        }
    }
}
