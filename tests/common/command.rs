use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn workspace_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn old_file() -> String {
    r#"fn main() {
    let total = 0;
    for i in 0..10 {
        total += i;
    }
    println!("{}", total);
}
"#
    .to_string()
}

#[fixture]
pub fn new_file() -> String {
    r#"fn main() {
    let mut total = 0;
    for i in 0..10 {
        total += i;
    }
    println!("{}", total);
    println!("done");
}
"#
    .to_string()
}

#[fixture]
pub fn changes_output() -> String {
    "unchanged -1,1 +1,1\nreplaced -2,1 +2,1\n-    let total = 0;\n+    let mut total = 0;\nunchanged -3,4 +3,4\ninserted -6,0 +7,1\n+    println!(\"done\");\nunchanged -7,1 +8,1\n"
        .to_string()
}

#[fixture]
pub fn populated_workspace_dir(workspace_dir: TempDir, old_file: String, new_file: String) -> TempDir {
    write_file(FileSpec::new(workspace_dir.path().join("old.rs"), old_file.clone()));
    write_file(FileSpec::new(workspace_dir.path().join("new.rs"), new_file));
    write_file(FileSpec::new(workspace_dir.path().join("copy.rs"), old_file));

    workspace_dir
}

pub fn run_ldiff_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("ldiff").expect("Failed to find ldiff binary");
    cmd.envs(vec![("NO_PAGER", "1")]);
    cmd.env_remove("LDIFF_LOG");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}
