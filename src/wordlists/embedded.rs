//! Embedded word lists
//!
//! Word lists compiled into the binary at build time from `data/words/`.

include!(concat!(env!("OUT_DIR"), "/word_table.rs"));
