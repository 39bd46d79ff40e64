//! Build script to generate the embedded word table
//!
//! Reads one word list per category from `data/words/` and generates Rust
//! source code with a const table.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Categories in display order; each has a `data/words/<name>.txt` file.
const CATEGORIES: &[&str] = &["food", "sports", "household", "animals", "places"];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("word_table.rs");

    let mut output = fs::File::create(&output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word table").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// Six-letter words per category, one list per data file").unwrap();
    writeln!(output).unwrap();

    let mut total = 0;
    for category in CATEGORIES {
        let input_path = format!("data/words/{category}.txt");
        total += generate_word_list(&input_path, &mut output, &category.to_uppercase(), category);
        println!("cargo:rerun-if-changed={input_path}");
    }

    writeln!(output, "/// Embedded word lists keyed by category name").unwrap();
    writeln!(output, "pub const WORD_TABLE: &[(&str, &[&str])] = &[").unwrap();
    for category in CATEGORIES {
        writeln!(output, "    (\"{category}\", {}),", category.to_uppercase()).unwrap();
    }
    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words across all embedded categories").unwrap();
    writeln!(output, "pub const TOTAL_WORD_COUNT: usize = {total};").unwrap();
}

fn generate_word_list(
    input_path: &str,
    output: &mut fs::File,
    const_name: &str,
    category: &str,
) -> usize {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();

    for word in &words {
        assert!(
            word.len() == 6 && word.chars().all(|c| c.is_ascii_alphabetic()),
            "{input_path}: '{word}' is not a six-letter word"
        );
    }

    writeln!(output, "/// Words for the `{category}` category").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();
    for word in &words {
        writeln!(output, "    \"{}\",", word.to_lowercase()).unwrap();
    }
    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();

    words.len()
}
