//! This is the Scanning module, split into two submodules.
//!
//! - [tokens] specifies the data types making up the tokens of the MiGo language.
//! - [scanner] contains the code for turning source text into tokens, one token
//!   per call, alongside with the error definitions that can occur during this phase.
pub mod scanner;
pub mod tokens;
