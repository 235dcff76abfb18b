//! Build script that embeds the dictionary
//!
//! Reads the word list file and generates Rust source with a const array.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest = Path::new(&out_dir).join("words.rs");

    let content = fs::read_to_string("data/words.txt")
        .unwrap_or_else(|e| panic!("Failed to read data/words.txt: {e}"));
    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .collect();

    let mut output = fs::File::create(&dest)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", dest.display()));

    writeln!(output, "// Generated from data/words.txt").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Embedded dictionary of 5-letter words").unwrap();
    writeln!(output, "pub const WORDS: &[&str] = &[").unwrap();
    for word in &words {
        writeln!(output, "    \"{word}\",").unwrap();
    }
    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in WORDS").unwrap();
    writeln!(output, "pub const WORDS_COUNT: usize = {};", words.len()).unwrap();

    println!("cargo:rerun-if-changed=data/words.txt");
}
