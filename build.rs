//! Build script to generate embedded game data
//!
//! Reads pool corpora, the category lexicon and the filler vocabulary from `data/`
//! and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_pools("data/pools", &Path::new(&out_dir).join("pools.rs"));

    generate_tagged_list(
        "data/lexicon.txt",
        &Path::new(&out_dir).join("lexicon.rs"),
        "LEXICON",
        "Category-tagged corpus words (word, categories)",
        ',',
    );

    generate_tagged_list(
        "data/filler.txt",
        &Path::new(&out_dir).join("filler.rs"),
        "FILLER",
        "Fallback story vocabulary (category, words)",
        ' ',
    );

    // Rebuild if data changes
    println!("cargo:rerun-if-changed=data/pools");
    println!("cargo:rerun-if-changed=data/lexicon.txt");
    println!("cargo:rerun-if-changed=data/filler.txt");
}

/// One file per pool, named after the pool key, one word per line
fn generate_pools(input_dir: &str, output_path: &Path) {
    let mut entries: Vec<_> = fs::read_dir(input_dir)
        .unwrap_or_else(|e| panic!("Failed to read {input_dir}: {e}"))
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
        .collect();
    entries.sort();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated pool corpora").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Letter pools and their valid words (key, words)").unwrap();
    writeln!(output, "pub const POOLS: &[(&str, &[&str])] = &[").unwrap();

    for path in &entries {
        let key = path.file_stem().unwrap().to_string_lossy();
        let content = fs::read_to_string(path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()));

        writeln!(output, "    (\"{key}\", &[").unwrap();
        for word in content.lines().map(str::trim).filter(|w| !w.is_empty()) {
            writeln!(output, "        \"{word}\",").unwrap();
        }
        writeln!(output, "    ]),").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of embedded pools").unwrap();
    writeln!(output, "pub const POOLS_COUNT: usize = {};", entries.len()).unwrap();
}

/// Lines of `head: item<sep>item`, `#` starts a comment line
fn generate_tagged_list(
    input_path: &str,
    output_path: &Path,
    const_name: &str,
    doc_comment: &str,
    separator: char,
) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated from {input_path}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[(&str, &[&str])] = &[").unwrap();

    let mut count = 0;
    for line in content.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (head, tail) = line
            .split_once(':')
            .unwrap_or_else(|| panic!("Malformed line in {input_path}: {line}"));

        let items: Vec<String> = tail
            .split(separator)
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(|item| format!("\"{item}\""))
            .collect();

        writeln!(output, "    (\"{}\", &[{}]),", head.trim(), items.join(", ")).unwrap();
        count += 1;
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of entries in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
