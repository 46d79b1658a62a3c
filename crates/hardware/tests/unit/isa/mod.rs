//! # ISA Unit Tests
//!
//! Field extraction and decoding of MIPS I instruction words.
