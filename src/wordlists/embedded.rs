//! Embedded word lists
//!
//! Word lists compiled into the binary at build time.

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/start.rs"));
include!(concat!(env!("OUT_DIR"), "/dictionary.rs"));
