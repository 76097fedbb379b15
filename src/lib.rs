//! Decoder and encoder for MIL-STD-2525 symbol identification codes (SIDCs).
//!
//! A SIDC is a 15-character positional string. Position 1 names the coding
//! scheme, and the scheme decides which fields occupy the remaining
//! positions.
//!
//! ```
//! use sidc::{decode, DecodeOutcome, Field, Scheme};
//!
//! let decoded = decode("SFGP--------USX")?;
//! assert_eq!(decoded.code.scheme, Some(Scheme::Warfighting));
//! assert_eq!(decoded.code.country_code.as_deref(), Some("US"));
//! assert_eq!(decoded.outcome, DecodeOutcome::PartiallyUnrecognized(vec![Field::OrderOfBattle]));
//! assert_eq!(decoded.code.encode_masked().as_deref(), Some("S-G------------"));
//! # Ok::<(), sidc::SidcError>(())
//! ```

pub mod codec;
pub mod scheme;
pub mod symbol_code;
pub mod symbology;

pub use codec::{
    decode, decode_with, encode, parse, DecodeOptions, DecodeOutcome, Decoded, LengthPolicy,
    SidcError, SIDC_LENGTH,
};
pub use scheme::Scheme;
pub use symbol_code::{is_field_empty, Field, SymbolCode};
