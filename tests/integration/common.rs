use std::{
    fs,
    io::Write,
    path::PathBuf,
    process::{Command, Output, Stdio},
};

use anyhow::{Context, Result};
use tempfile::{tempdir, TempDir};

pub const BINARY_PATH: &str = env!("CARGO_BIN_EXE_nvcs");

/// Isolated HOME / XDG_CONFIG_HOME for one binary run.
pub struct Sandbox {
    temp: TempDir,
}

impl Sandbox {
    pub fn new() -> Result<Self> {
        let temp = tempdir().context("failed to create sandbox")?;
        fs::create_dir_all(temp.path().join("config")).context("failed to create config home")?;
        Ok(Self { temp })
    }

    pub fn root(&self) -> PathBuf {
        self.temp.path().to_path_buf()
    }

    pub fn config_home(&self) -> PathBuf {
        self.temp.path().join("config")
    }

    pub fn registry_path(&self) -> PathBuf {
        self.config_home().join("nv-config").join("configs.json")
    }

    pub fn mkdir(&self, name: &str) -> Result<()> {
        fs::create_dir_all(self.config_home().join(name))
            .with_context(|| format!("failed to create folder {name}"))
    }

    pub fn command(&self) -> Command {
        let mut command = Command::new(BINARY_PATH);
        command
            .env("HOME", self.temp.path())
            .env("XDG_CONFIG_HOME", self.config_home())
            .env("RUST_LOG", "off")
            .env_remove("NVCS_CONFIG_HOME")
            .env_remove("NVCS_REGISTRY_PATH")
            .env_remove("NVCS_EDITOR")
            .env_remove("NVCS_SCAN_PATTERN");
        command
    }

    pub fn run(&self, args: &[&str], input: &str) -> Result<Output> {
        run_with_input(self.command().args(args), input)
    }
}

pub fn run_with_input(command: &mut Command, input: &str) -> Result<Output> {
    let mut child = command
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .context("failed to spawn nvcs")?;
    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(input.as_bytes())
            .context("failed to write stdin")?;
    }
    child.wait_with_output().context("failed to wait for nvcs")
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
