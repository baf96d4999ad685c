//! Embedded password list
//!
//! Compiled into the binary at build time.

// Include generated password list from build script
include!(concat!(env!("OUT_DIR"), "/passwords.rs"));
