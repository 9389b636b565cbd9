#![forbid(missing_docs)]
//! # `strscan`
//! The `strscan` crate provides a string scanner: a cursor over an in-memory character buffer
//! with lookahead, matching of character runs and literals, and search for delimiters.
//! It is designed as the lexical layer of hand-written parsers, e.g. parsers for protocol
//! headers, configuration lines or small grammars, where a full lexer generator would be
//! overkill.
//!
//! The scanner works on bytes. All character classes use ASCII semantics, so the scanner can be
//! used on UTF-8 text as long as the delimiters and classes of interest are ASCII.
//!
//! A scanner either owns a copy of its input ([`Scanner::new`]) or borrows it
//! ([`Scanner::new_borrowed`]). Scan operations return a [`Match`], which is a view into the
//! buffer. Use [`Scanner::text`] to borrow the matched text and [`Scanner::copy_match`] to get
//! an owned copy.
//!
//! # Example
//! ```rust
//! use strscan::Scanner;
//!
//! const INPUT: &str = "Content-Type: text/plain; charset=utf-8";
//!
//! fn main() {
//!     let mut scanner = Scanner::new_borrowed(INPUT);
//!     let name = scanner.scan_charclass("h").expect("header name");
//!     scanner.scan_char(b':').expect("colon");
//!     scanner.scan_charclass("s");
//!     let value = scanner.scan_upto_char(b';').expect("media type");
//!     println!("Name: '{}'", scanner.text_str(name).unwrap());
//!     println!("Value: '{}'", scanner.text_str(value).unwrap());
//!     while scanner.scan_charset("; ").is_some() {
//!         let key = scanner.scan_upto_char(b'=').expect("parameter name");
//!         scanner.forward(1);
//!         let val = scanner
//!             .scan_upto_charset("; ")
//!             .or_else(|| scanner.scan_while(|_: u8| true))
//!             .expect("parameter value");
//!         println!(
//!             "Parameter: '{}': '{}'",
//!             scanner.text_str(key).unwrap(),
//!             scanner.text_str(val).unwrap()
//!         );
//!     }
//! }
//! ```
//! The output of the example is:
//! ```text
//! Name: 'Content-Type'
//! Value: 'text/plain'
//! Parameter: 'charset': 'utf-8'
//! ```
//!
//! # Character classes
//! [`Scanner::scan_charclass`] and [`Scanner::scan_upto_charclass`] take a sequence of class
//! codes. A character matches the sequence if it matches any of its entries. Characters that
//! are not class codes match themselves.
//!
//! | code | class | code | class |
//! |---|---|---|---|
//! | `a` | alphabetic | `A` | not alphabetic |
//! | `d` | digit | `D` | not a digit |
//! | `h` | alphanumeric or `-` | `H` | neither |
//! | `l` | lowercase | `L` | not lowercase |
//! | `n` | alphanumeric | `N` | not alphanumeric |
//! | `s` | space, `\t`, `\r`, `\n`, `\f` | `S` | not a space |
//! | `u` | uppercase | `U` | not uppercase |
//! | `w` | alphanumeric or `_` | `W` | neither |
//!
//! # Crate features
//! - `serde`: enabled by default. Derives `Serialize` and `Deserialize` for [`Span`], [`Match`],
//!   [`Position`] and [`ScannerOptions`].

/// Module with the buffer type
mod buffer;
pub use buffer::Buffer;

/// Module with the character class codes
mod char_class;
pub use char_class::{ClassCode, ClassSet, ClassToken};

/// Module with the character predicate trait and the character set type
mod char_set;
pub use char_set::{CharPredicate, CharSet};

/// Module with error definitions
mod errors;
pub use errors::{Result, StrScanError, StrScanErrorKind};

/// The module with internal implementation details.
mod internal;

/// Module that provides a Match type
mod match_type;
pub use match_type::Match;

/// Module that provides a position type
mod position;
pub use position::{Position, PositionProvider};

/// The module with the scanner.
mod scanner;
pub use scanner::Scanner;

/// The module with the scanner builder.
mod scanner_builder;
pub use scanner_builder::ScannerBuilder;

/// The module with the scanner options.
mod scanner_options;
pub use scanner_options::ScannerOptions;

/// Module that provides a Span type
mod span;
pub use span::Span;
