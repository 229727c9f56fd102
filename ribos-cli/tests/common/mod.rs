#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A scratch directory with its own input and output folders.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("input")).unwrap();
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn input_dir(&self) -> PathBuf {
        self.path().join("input")
    }

    pub fn output_dir(&self) -> PathBuf {
        self.path().join("output")
    }

    /// Writes a file into the input directory and returns its path.
    pub fn write_input(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.input_dir().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    pub fn read_input(&self, name: &str) -> String {
        fs::read_to_string(self.input_dir().join(name)).unwrap()
    }

    pub fn read_output(&self, name: &str) -> String {
        fs::read_to_string(self.output_dir().join(name)).unwrap()
    }

    pub fn output_exists(&self, name: &str) -> bool {
        self.output_dir().join(name).is_file()
    }

    /// The `ribos` binary, run inside the workspace with its directories set.
    pub fn ribos(&self) -> Command {
        let mut cmd = Command::cargo_bin("ribos").unwrap();
        cmd.current_dir(self.path())
            .arg("--input-dir")
            .arg(self.input_dir())
            .arg("--output-dir")
            .arg(self.output_dir());
        cmd
    }
}

/// Runs `ribos` with the given arguments in `workspace` and returns stdout.
pub fn run_ribos(workspace: &Workspace, args: &[&str]) -> String {
    let output = workspace.ribos().args(args).assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}
