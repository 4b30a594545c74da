//! The external collaborators around the merkledrop engine: CSV record
//! loading, JSON artifact serialization, and the command-line surface.
//!
//! The engine itself stays pure; everything with a file handle lives here.

pub mod cli;
pub mod loader;
pub mod output;
