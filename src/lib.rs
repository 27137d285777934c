//! # Rust-Migo - A scanner for the MiGo process specification language
//!
//! MiGo describes the behaviour of communicating processes: process definitions,
//! spawning, channel creation, synchronous send and receive, internal choice via
//! `select`, silent `tau` actions and `if`/`else` control flow. This crate is the
//! lexical front end of that language; it turns source text into a pull-based
//! stream of typed, position-tagged tokens for a downstream parser.
//!
//! ## Layout
//!
//! - [`migo::types`] holds source locations and the [position tracker](migo::types::Position),
//!   which supports exact single-character undo.
//! - [`migo::token`] holds the token definitions and the [scanner](migo::token::scanner::Scanner).
//! - [`migo::errors`] describes what can go wrong when driving the scanner from the outside.
//!
//! ## Lexical Grammar
//!
//! - Punctuation: `:` `;` `,` `(` `)` `=`.
//! - Keywords: `def call spawn case close else endif endselect if let newchan select send recv tau`.
//! - Names and numbers are runs of `[A-Za-z0-9_./#]`. A run that is no keyword but
//!   parses as a base-10 integer is a number, everything else is an identifier.
//! - `--` starts a comment running to the end of the line.
//! - Any other character is reported as an illegal token; scanning continues after it.
//!
//! ```rust
//! use rust_migo::migo::token::scanner::Scanner;
//! use rust_migo::migo::token::tokens::TokenType;
//!
//! let mut scanner = Scanner::for_source("def main(): tau;");
//! assert_eq!(scanner.next_token().token_type.name(), "DEF");
//! assert!(scanner.any(|token| token.token_type == TokenType::Semicolon));
//! ```
#![deny(
    warnings,
)]
#![deny(
    future_incompatible,
    keyword_idents,
    let_underscore,
    nonstandard_style,
    refining_impl_trait,
)]
#![deny(
    rust_2018_compatibility,
    rust_2021_compatibility,
    rust_2024_compatibility,
)]
#![deny(
    clippy::all,
    clippy::pedantic,
)]
#![deny(
    clippy::absolute_paths,
    clippy::alloc_instead_of_core,
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::arithmetic_side_effects,
    clippy::as_conversions,
    clippy::as_underscore,
    clippy::assertions_on_result_states,
    clippy::big_endian_bytes,
    clippy::cfg_not_test,
    clippy::clone_on_ref_ptr,
    clippy::create_dir,
    clippy::dbg_macro,
    clippy::decimal_literal_representation,
    clippy::default_numeric_fallback,
    clippy::default_union_representation,
    clippy::deref_by_slicing,
    clippy::disallowed_script_idents,
    clippy::else_if_without_else,
    clippy::empty_drop,
    clippy::empty_enum_variants_with_brackets,
    clippy::empty_structs_with_brackets,
    clippy::error_impl_error,
    clippy::exhaustive_enums,
    clippy::exhaustive_structs,
    clippy::exit,
    clippy::field_scoped_visibility_modifiers,
    clippy::filetype_is_file,
    clippy::float_arithmetic,
    clippy::float_cmp_const,
    clippy::fn_to_numeric_cast_any,
    clippy::get_unwrap,
    clippy::host_endian_bytes,
    clippy::if_then_some_else_none,
    clippy::impl_trait_in_params,
    clippy::indexing_slicing,
    clippy::infinite_loop,
    clippy::inline_asm_x86_att_syntax,
    clippy::inline_asm_x86_intel_syntax,
    clippy::integer_division,
    clippy::integer_division_remainder_used,
    clippy::iter_over_hash_type,
    clippy::large_include_file,
    clippy::let_underscore_must_use,
    clippy::let_underscore_untyped,
    clippy::little_endian_bytes,
    clippy::lossy_float_literal,
    clippy::map_err_ignore,
    clippy::mem_forget,
    clippy::min_ident_chars,
    clippy::missing_assert_message,
    clippy::missing_asserts_for_indexing,
    clippy::missing_docs_in_private_items,
    clippy::missing_inline_in_public_items,
    clippy::missing_trait_methods,
    clippy::mixed_read_write_in_expression,
    clippy::module_name_repetitions,
    clippy::modulo_arithmetic,
    clippy::multiple_inherent_impl,
    clippy::multiple_unsafe_ops_per_block,
    clippy::mutex_atomic,
    clippy::mutex_integer,
    clippy::needless_raw_strings,
    clippy::non_ascii_literal,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::partial_pub_fields,
    clippy::pathbuf_init_then_push,
    clippy::pattern_type_mismatch,
    clippy::pub_with_shorthand,
    clippy::pub_without_shorthand,
    clippy::rc_buffer,
    clippy::rc_mutex,
    clippy::redundant_type_annotations,
    clippy::renamed_function_params,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::same_name_method,
    clippy::self_named_module_files,
    clippy::semicolon_inside_block,
    clippy::semicolon_outside_block,
    clippy::separated_literal_suffix,
    clippy::single_char_lifetime_names,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    clippy::str_to_string,
    clippy::string_add,
    clippy::string_lit_chars_any,
    clippy::string_slice,
    clippy::string_to_string,
    clippy::suspicious_xor_used_as_pow,
    clippy::tests_outside_test_module,
    clippy::todo,
    clippy::try_err,
    clippy::undocumented_unsafe_blocks,
    clippy::unimplemented,
    clippy::unnecessary_safety_comment,
    clippy::unnecessary_safety_doc,
    clippy::unnecessary_self_imports,
    clippy::unneeded_field_pattern,
    clippy::unreachable,
    clippy::unused_result_ok,
    clippy::unwrap_in_result,
    clippy::unwrap_used,
    clippy::verbose_file_reads,
    clippy::wildcard_enum_match_arm
)]
#![warn(unused)]
#![allow(
    edition_2024_expr_fragment_specifier,
    reason = "the macros expect the 2024 edition behaviour."
)]
pub mod migo;
