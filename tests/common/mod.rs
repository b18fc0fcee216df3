#![allow(dead_code)]

use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::fixture::{FileWriteStr, PathChild};
use rstest::fixture;
use std::path::{Path, PathBuf};

/// Five-line file whose third line changes from "old" to "new"
#[fixture]
pub fn single_change_diff() -> String {
    "diff --git a/five.txt b/five.txt
index 3b18e51..8f4e2a1 100644
--- a/five.txt
+++ b/five.txt
@@ -1,5 +1,5 @@
 one
 two
-old
+new
 four
 five
"
    .to_string()
}

#[fixture]
pub fn mixed_diff() -> String {
    "diff --git a/src/app.rs b/src/app.rs
index 1111111..2222222 100644
--- a/src/app.rs
+++ b/src/app.rs
@@ -3,6 +3,7 @@ use std::io;
 fn main() {
-    let name = \"world\";
-    println!(\"hello {}\", name);
+    let name = \"there\";
+    let greeting = \"hello\";
+    println!(\"{} {}\", greeting, name);
 
     run();
 }
@@ -20,3 +21,2 @@ fn run() {
     step();
-    cleanup();
 }
diff --git a/docs/new.md b/docs/new.md
new file mode 100644
index 0000000..e69de29
--- /dev/null
+++ b/docs/new.md
@@ -0,0 +1,2 @@
+# Title
+Body
\\ No newline at end of file
diff --git a/old.txt b/old.txt
deleted file mode 100644
index e69de29..0000000
--- a/old.txt
+++ /dev/null
@@ -1 +0,0 @@
-gone
diff --git a/assets/icon.png b/assets/icon.png
index 1234567..89abcde 100644
Binary files a/assets/icon.png and b/assets/icon.png differ
"
    .to_string()
}

#[fixture]
pub fn work_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

pub fn write_diff_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let file = dir.child(name);
    file.write_str(content).expect("Failed to write diff file");
    file.path().to_path_buf()
}

pub fn run_diffkit_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("diffkit").expect("Failed to find diffkit binary");
    cmd.envs(vec![("NO_PAGER", "1"), ("NO_COLOR", "1")]);
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}
