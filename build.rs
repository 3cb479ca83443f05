use std::fs;

/// 从 `.verinfo` 中读取 `[INFIX2POSTFIX]` 段的 `version`
fn read_version(content: &str) -> Option<String> {
    let mut in_section = false;

    for line in content.lines().map(str::trim) {
        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }
        if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            in_section = name.trim() == "INFIX2POSTFIX";
            continue;
        }
        if !in_section {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            if key.trim() == "version" {
                return Some(value.trim().trim_matches('"').to_string());
            }
        }
    }

    None
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.verinfo");

    let version = match fs::read_to_string(".verinfo") {
        Ok(content) => read_version(&content),
        Err(e) => {
            println!("cargo:warning=Failed to read .verinfo: {}", e);
            None
        }
    };

    // 缺省时退回到 Cargo 包版本
    let version = version.unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());
    println!("cargo:rustc-env=INFIX2POSTFIX_VERSION={}", version);
}
