//! Test environment builder for isolated appfleet runs.
//!
//! Every run gets its own project directory and a `bin/` directory that is
//! put first on `PATH`, so `heroku` and `git` resolve to logging fakes.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tempfile::TempDir;

use super::fixtures::{FAKE_GIT, FAKE_HEROKU};

/// Result of running the appfleet binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

pub struct TestEnv {
    pub project_root: TempDir,
    bin_dir: PathBuf,
    log_path: PathBuf,
    envs: Vec<(String, String)>,
    stdin: Option<String>,
}

impl TestEnv {
    /// Project with `config/apps.yml` set to `apps_yml`.
    pub fn with_config(apps_yml: &str) -> Self {
        let env = Self::empty();
        env.write_file("config/apps.yml", apps_yml);
        env
    }

    /// Project without any config file.
    pub fn empty() -> Self {
        let project_root = tempfile::tempdir().unwrap();
        let bin_dir = project_root.path().join(".fake-bin");
        fs::create_dir_all(&bin_dir).unwrap();
        write_script(&bin_dir.join("heroku"), FAKE_HEROKU);
        write_script(&bin_dir.join("git"), FAKE_GIT);

        let log_path = project_root.path().join(".fake-bin.log");
        Self {
            project_root,
            bin_dir,
            log_path,
            envs: Vec::new(),
            stdin: None,
        }
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    pub fn stdin(mut self, input: &str) -> Self {
        self.stdin = Some(input.to_string());
        self
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn write_file(&self, relative: &str, content: &str) {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    pub fn read_file(&self, relative: &str) -> String {
        fs::read_to_string(self.project_path(relative)).unwrap()
    }

    /// Lines logged by the fake `heroku` and `git`, in call order.
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(&self.log_path)
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Calls excluding read-only `git branch` / `git remote` listings.
    pub fn mutating_calls(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|c| c != "git branch" && c != "git remote")
            .collect()
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        let bin = env!("CARGO_BIN_EXE_appfleet");
        let path = format!(
            "{}:{}",
            self.bin_dir.display(),
            std::env::var("PATH").unwrap_or_default()
        );

        let mut command = Command::new(bin);
        command
            .current_dir(self.project_root.path())
            .args(args)
            .env("PATH", path)
            .env("APPFLEET_TEST_LOG", &self.log_path)
            .env("NO_COLOR", "1")
            .env_remove("APPFLEET_CONFIG")
            .env_remove("APPFLEET_VARS")
            .env_remove("APPFLEET_PLATFORM_CLI")
            .env_remove("VISUAL")
            .env_remove("EDITOR")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        for (key, value) in &self.envs {
            command.env(key, value);
        }

        let mut child = command.spawn().unwrap();
        {
            let mut stdin = child.stdin.take().unwrap();
            if let Some(input) = &self.stdin {
                stdin.write_all(input.as_bytes()).unwrap();
            }
        }
        let output = child.wait_with_output().unwrap();

        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

fn write_script(path: &Path, content: &str) {
    fs::write(path, content).unwrap();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
    }
}
