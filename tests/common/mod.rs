//! Shared testing utilities for vibe CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[allow(dead_code)]
pub const API_KEY_ENV: &str = "VIBE_TEST_API_KEY";

/// Testing harness providing an isolated directory with input files.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment with default inputs.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let ctx = Self { root };
        ctx.write_product("a todo app\n");
        ctx.write_tools("React, Postgres\n");
        ctx
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn product_file(&self) -> PathBuf {
        self.root().join("product.txt")
    }

    pub fn tools_file(&self) -> PathBuf {
        self.root().join("tools.txt")
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root().join("out")
    }

    pub fn write_product(&self, content: &str) {
        fs::write(self.product_file(), content).expect("Failed to write product file");
    }

    pub fn write_tools(&self, content: &str) {
        fs::write(self.tools_file(), content).expect("Failed to write tools file");
    }

    /// Write a config file pointing the completion client at `api_url`.
    pub fn write_config(&self, api_url: &str, extra: &str) -> PathBuf {
        let path = self.root().join("vibe.toml");
        let content = format!(
            "[completion]\napi_url = \"{}\"\napi_key_env = \"{}\"\ntimeout_secs = 5\n\n[guidelines]\npath = \"{}\"\n{}",
            api_url,
            API_KEY_ENV,
            self.root().join("agents.md").display(),
            extra
        );
        fs::write(&path, content).expect("Failed to write config file");
        path
    }

    /// Build a command for invoking the compiled `vibe` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("vibe").expect("Failed to locate vibe binary");
        cmd.current_dir(self.root()).env_remove("OPENAI_API_KEY").env_remove(API_KEY_ENV);
        cmd
    }

    /// Command with the three positional arguments filled in.
    pub fn generate_cmd(&self) -> Command {
        let mut cmd = self.cli();
        cmd.arg(self.output_dir()).arg(self.product_file()).arg(self.tools_file());
        cmd
    }

    pub fn read_output(&self, name: &str) -> String {
        fs::read_to_string(self.output_dir().join(name))
            .unwrap_or_else(|_| panic!("{} should exist", name))
    }

    pub fn output_exists(&self, name: &str) -> bool {
        self.output_dir().join(name).exists()
    }
}
