use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub doc: PathBuf,
}

impl TestEnv {
    pub fn with_doc(text: &str) -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let doc = tmp.path().join("undocumented.md");
        fs::write(&doc, text).expect("write fixture doc");
        Self { _tmp: tmp, doc }
    }

    pub fn valid() -> Self {
        Self::with_doc(VALID_DOC)
    }

    pub fn broken() -> Self {
        Self::with_doc(BROKEN_DOC)
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("refdoc").expect("binary under test");
        cmd.arg("--doc").arg(&self.doc);
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn run_json_fail(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .failure()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn doc_text(&self) -> String {
        fs::read_to_string(&self.doc).expect("read doc back")
    }
}

pub const VALID_DOC: &str = r"# Pending features

Entries awaiting documentation.

- [Alpha channels] - Not yet documented, see also [Beta draft]
- Runtime behavior of the [Gamma hook]

[Alpha channels]: https://example.com/rfc/1
[Beta draft]: https://example.com/rfc/2
[Gamma hook]: https://example.com/rfc/3
";

pub const BROKEN_DOC: &str = r"# Pending features

- [Alpha channels] - Not yet documented, see also [Beta draft]
- Runtime behavior of the [Gamma hook] and the [Missing] flag

[Alpha channels]: https://example.com/rfc/1
[Beta draft]: https://example.com/rfc/2
[Gamma hook]: https://example.com/rfc/3
[Alpha channels]: https://example.com/rfc/1-dup
[Orphan]: https://example.com/rfc/9
";
