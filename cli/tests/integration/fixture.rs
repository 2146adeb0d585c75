//! Scratch project with fake Python executables on a private PATH.

#![allow(clippy::expect_used)]

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Answers `--version`, and on `-m venv DIR` lays out `DIR/bin/python` and a
/// `DIR/bin/pip` that records `$VIRTUAL_ENV|<args>` into `pip-args.txt`.
/// Every venv request is appended to `venv-calls.txt`.
const WORKING_PYTHON: &str = r#"#!/bin/sh
PATH=/usr/bin:/bin
if [ "$1" = "--version" ]; then
  echo "Python 3.12.1"
  exit 0
fi
if [ "$1" = "-m" ] && [ "$2" = "venv" ]; then
  echo "$0 $3" >> venv-calls.txt
  mkdir -p "$3/bin"
  printf '#!/bin/sh\necho "$VIRTUAL_ENV|$*" > pip-args.txt\nexit ${FAKE_PIP_EXIT:-0}\n' > "$3/bin/pip"
  chmod +x "$3/bin/pip"
  : > "$3/bin/python"
  exit ${FAKE_VENV_EXIT:-0}
fi
exit 2
"#;

/// Fails every invocation without touching the filesystem.
const BROKEN_PYTHON: &str = "#!/bin/sh\nexit 3\n";

pub struct Project {
    root: TempDir,
    bin: PathBuf,
    name: String,
}

impl Project {
    /// Empty project directory with a `requirements.txt` and an empty PATH dir.
    pub fn new() -> Self {
        Self::named("plugin")
    }

    /// Like `new`, with the project directory called `name`.
    pub fn named(name: &str) -> Self {
        let root = tempfile::tempdir().expect("tempdir");
        let bin = root.path().join("fake-path");
        std::fs::create_dir(&bin).expect("create bin");
        let project = Self {
            root,
            bin,
            name: name.to_string(),
        };
        std::fs::create_dir(project.dir()).expect("create project");
        std::fs::write(project.dir().join("requirements.txt"), "requests==2.32.3\n")
            .expect("write requirements");
        project
    }

    /// Working directory the binary runs in.
    pub fn dir(&self) -> PathBuf {
        self.root.path().join(&self.name)
    }

    pub fn with_python(self, name: &str) -> Self {
        self.install_script(name, WORKING_PYTHON);
        self
    }

    pub fn with_broken_python(self, name: &str) -> Self {
        self.install_script(name, BROKEN_PYTHON);
        self
    }

    /// A pre-existing environment whose pip records its arguments.
    pub fn with_existing_venv(self) -> Self {
        let scripts = self.dir().join(".venv").join("bin");
        std::fs::create_dir_all(&scripts).expect("create venv");
        std::fs::write(scripts.join("python"), "").expect("write python");
        write_executable(
            &scripts.join("pip"),
            "#!/bin/sh\necho \"$VIRTUAL_ENV|$*\" > pip-args.txt\n",
        );
        self
    }

    fn install_script(&self, name: &str, body: &str) {
        write_executable(&self.bin.join(name), body);
    }

    /// `venvboot` with PATH restricted to the fake executables.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("venvboot"));
        cmd.current_dir(self.dir())
            .env("PATH", &self.bin)
            .env("NO_COLOR", "1")
            .env("XDG_CONFIG_HOME", self.root.path().join("xdg"))
            .env_remove("VENVBOOT_CONFIG")
            .env_remove("VENVBOOT_VENV_DIR")
            .env_remove("VENVBOOT_REQUIREMENTS")
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn read(&self, name: &str) -> Option<String> {
        std::fs::read_to_string(self.dir().join(name)).ok()
    }

    pub fn exists(&self, name: &str) -> bool {
        self.dir().join(name).exists()
    }

    /// Names of every entry in the project directory.
    pub fn entries(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.dir())
            .expect("read dir")
            .map(|e| e.expect("entry").file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

fn write_executable(path: &Path, body: &str) {
    std::fs::write(path, body).expect("write script");
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).expect("chmod");
}
