//! Test fixture generators
//!
//! Java sources with known line layouts, plus a scratch directory to load
//! them from.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Scratch directory of source files; removed on drop
pub struct SourceTree {
    dir: TempDir,
}

impl SourceTree {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    /// Write `content` to `relative` (parent directories created) and return the path
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dirs");
        }
        fs::write(&path, content).expect("write fixture");
        path
    }

    /// Write raw bytes, for sources that are not valid UTF-8
    pub fn write_bytes(&self, relative: &str, content: &[u8]) -> PathBuf {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dirs");
        }
        fs::write(&path, content).expect("write fixture");
        path
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    pub fn root(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }
}

/// `int add(int a, int b)` on lines 10-12, `void run()` on lines 14-16
pub fn fixture_calculator() -> String {
    [
        "package demo;",                     // 1
        "",                                  // 2
        "public class Calculator {",         // 3
        "    private int total;",            // 4
        "",                                  // 5
        "    public Calculator(int start) {", // 6
        "        this.total = start;",       // 7
        "    }",                             // 8
        "",                                  // 9
        "    public int add(int a, int b) {", // 10
        "        return a + b;",             // 11
        "    }",                             // 12
        "",                                  // 13
        "    public void run() {",           // 14
        "        total++;",                  // 15
        "    }",                             // 16
        "}",                                 // 17
    ]
    .join("\n")
        + "\n"
}

/// Class `name` in `package` with one no-arg method per entry in `methods`
pub fn fixture_class(package: &str, name: &str, methods: &[&str]) -> String {
    let body: String = methods
        .iter()
        .map(|m| format!("    public void {m}() {{}}\n"))
        .collect();
    format!("package {package};\n\npublic class {name} {{\n{body}}}\n")
}

/// Outer class with a static nested class, an interface and a local class
pub fn fixture_nested() -> String {
    [
        "package demo;",
        "",
        "public class Outer {",
        "    static class Inner {",
        "        int value;",
        "    }",
        "",
        "    interface Callback {",
        "        void call(String... args);",
        "    }",
        "",
        "    void work() {",
        "        class Local {}",
        "    }",
        "}",
    ]
    .join("\n")
        + "\n"
}

/// Enum with constants, a field, a constructor and a method
pub fn fixture_enum() -> String {
    [
        "package demo;",
        "",
        "public enum Level {",
        "    LOW(1), HIGH(2);",
        "",
        "    private final int weight;",
        "",
        "    Level(int weight) {",
        "        this.weight = weight;",
        "    }",
        "",
        "    public int weight() {",
        "        return weight;",
        "    }",
        "}",
    ]
    .join("\n")
        + "\n"
}

/// Source with generics, annotations, arrays and varargs in signatures
pub fn fixture_generics() -> String {
    [
        "package demo.util;",
        "",
        "import java.util.List;",
        "import java.util.Map;",
        "",
        "public class Registry<K, V> {",
        "    private Map<K, List<V>> entries;",
        "    private int[] counts, totals;",
        "    private int flags[];",
        "    private int[] grid, cube[];",
        "",
        "    public <T> List<T> select(@Deprecated Map<String, T> source, String... keys) {",
        "        return null;",
        "    }",
        "",
        "    static void main(String args[]) {}",
        "}",
    ]
    .join("\n")
        + "\n"
}

/// Class in the default package
pub fn fixture_default_package() -> String {
    "public class Main {\n    public static void main(String[] args) {}\n}\n".to_string()
}

/// Source that does not parse
pub fn fixture_broken() -> String {
    "package demo;\n\npublic class Broken {\n    void f( {\n}\n".to_string()
}
