//! SIDC decode and encode.
//!
//! # Layout
//! Position 1 is the scheme code. It picks one of six slot tables in
//! [`layout`]; every other position is read or written by walking that table
//! in position order. Decode and encode share the tables, so a field can never
//! sit at one place on the way in and another on the way out.
//!
//! # Validation
//! Decode never stops at the first bad field. Each slot is tested on its own:
//!   - value accepted by the slot's validity test: stored verbatim;
//!   - value is the placeholder (`-` repeated to the slot width): absent;
//!   - anything else: the field is reported and left absent.
//!
//! Only a wrong length is a hard failure. Everything else lands in
//! [`DecodeOutcome`], and [`Decoded::into_result`] turns it into an error for
//! callers that want strict behaviour.

pub mod layout;

use thiserror::Error;
use tracing::debug;

use crate::scheme::Scheme;
use crate::symbol_code::{Field, SymbolCode};
use crate::symbology::{is_placeholder, UNUSED_POSITION_CODE};
use layout::{Slot, SlotKind};

/// Number of characters in every SIDC.
pub const SIDC_LENGTH: usize = 15;

// ── Error type ───────────────────────────────────────────────────────────────

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SidcError {
    #[error("SIDC must be {expected} characters, got {0}", expected = SIDC_LENGTH)]
    InvalidLength(usize),

    #[error("Unrecognized scheme {scheme:?} in SIDC {code:?}")]
    UnrecognizedScheme { scheme: String, code: String },

    #[error("Unrecognized {} in SIDC {code:?}", join_names(.fields))]
    UnrecognizedFields { fields: Vec<Field>, code: String },
}

fn join_names(fields: &[Field]) -> String {
    fields.iter().map(|f| f.name()).collect::<Vec<_>>().join(", ")
}

// ── Decode outcome ───────────────────────────────────────────────────────────

/// How much of a code was understood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeOutcome {
    /// Every slot held a valid value or a placeholder.
    Recognized,
    /// These fields failed validation, in position order. All other fields
    /// were decoded.
    PartiallyUnrecognized(Vec<Field>),
    /// Position 1 named no known scheme. Nothing was decoded.
    UnrecognizedScheme(String),
}

/// Result of a decode that passed the length check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub code:    SymbolCode,
    pub outcome: DecodeOutcome,
    /// The input as read, truncated to [`SIDC_LENGTH`] characters.
    pub sidc:    String,
}

impl Decoded {
    pub fn is_recognized(&self) -> bool {
        self.outcome == DecodeOutcome::Recognized
    }

    /// Names of everything that failed to decode. An unrecognized scheme
    /// reports just `"scheme"`.
    pub fn unrecognized(&self) -> Vec<&'static str> {
        match &self.outcome {
            DecodeOutcome::Recognized                    => Vec::new(),
            DecodeOutcome::PartiallyUnrecognized(fields) => fields.iter().map(|f| f.name()).collect(),
            DecodeOutcome::UnrecognizedScheme(_)         => vec![Field::Scheme.name()],
        }
    }

    /// The decoded record, or an error if any part of the code was not
    /// recognized.
    pub fn into_result(self) -> Result<SymbolCode, SidcError> {
        match self.outcome {
            DecodeOutcome::Recognized => Ok(self.code),
            DecodeOutcome::PartiallyUnrecognized(fields) => {
                Err(SidcError::UnrecognizedFields { fields, code: self.sidc })
            }
            DecodeOutcome::UnrecognizedScheme(scheme) => {
                Err(SidcError::UnrecognizedScheme { scheme, code: self.sidc })
            }
        }
    }
}

// ── Options ──────────────────────────────────────────────────────────────────

/// Accepted input lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthPolicy {
    /// Exactly [`SIDC_LENGTH`] characters.
    #[default]
    Exact,
    /// At least [`SIDC_LENGTH`] characters; anything past position 15 is
    /// ignored.
    AtLeast,
}

#[derive(Debug, Clone, Default)]
pub struct DecodeOptions {
    pub length: LengthPolicy,
}

// ── Decode ───────────────────────────────────────────────────────────────────

/// Decode a code of exactly 15 characters.
pub fn decode(code: &str) -> Result<Decoded, SidcError> {
    decode_with(code, &DecodeOptions::default())
}

/// Decode a code of at least 15 characters, ignoring anything after
/// position 15.
pub fn parse(code: &str) -> Result<Decoded, SidcError> {
    decode_with(code, &DecodeOptions { length: LengthPolicy::AtLeast })
}

pub fn decode_with(code: &str, opts: &DecodeOptions) -> Result<Decoded, SidcError> {
    let chars: Vec<char> = code.chars().collect();
    let length_ok = match opts.length {
        LengthPolicy::Exact   => chars.len() == SIDC_LENGTH,
        LengthPolicy::AtLeast => chars.len() >= SIDC_LENGTH,
    };
    if !length_ok {
        debug!(length = chars.len(), policy = ?opts.length, "rejecting SIDC of wrong length");
        return Err(SidcError::InvalidLength(chars.len()));
    }
    let chars = &chars[..SIDC_LENGTH];
    let sidc: String = chars.iter().collect();

    let scheme_code = chars[0].to_string();
    let Some(scheme) = Scheme::from_code(&scheme_code) else {
        debug!(scheme = %scheme_code, sidc = %sidc, "unrecognized SIDC scheme");
        return Ok(Decoded {
            code:    SymbolCode::default(),
            outcome: DecodeOutcome::UnrecognizedScheme(scheme_code),
            sidc,
        });
    };

    let mut record = SymbolCode::new().with_scheme(scheme);
    let mut failed = Vec::new();
    for slot in scheme.layout().slots {
        let value: String = chars[slot.range()].iter().collect();
        decode_slot(slot, value, &mut record, &mut failed);
    }

    let outcome = if failed.is_empty() {
        DecodeOutcome::Recognized
    } else {
        debug!(sidc = %sidc, fields = %join_names(&failed), "SIDC has unrecognized fields");
        DecodeOutcome::PartiallyUnrecognized(failed)
    };
    Ok(Decoded { code: record, outcome, sidc })
}

fn decode_slot(slot: &Slot, value: String, record: &mut SymbolCode, failed: &mut Vec<Field>) {
    match slot.kind {
        SlotKind::Coded { field, validity } => {
            if validity.accepts(&value) {
                record.set(field, Some(value));
            } else if !is_placeholder(&value) {
                failed.push(field);
            }
        }
        SlotKind::Unused { report_as: Some(field) } => {
            if !is_placeholder(&value) {
                failed.push(field);
            }
        }
        SlotKind::Unused { report_as: None } => {}
    }
}

// ── Encode ───────────────────────────────────────────────────────────────────

/// Encode `record` to its 15-character code. Returns `None` if no scheme is
/// set. Fields the scheme does not carry are ignored.
pub fn encode(record: &SymbolCode) -> Option<String> {
    let scheme = record.scheme?;
    let mut out = String::with_capacity(SIDC_LENGTH);
    out.push_str(scheme.code());
    for slot in scheme.layout().slots {
        let value = match slot.kind {
            SlotKind::Coded { field, .. } => record.get(field),
            SlotKind::Unused { .. }       => None,
        };
        append_field_value(&mut out, value, slot.width);
    }
    Some(out)
}

/// Append at most `width` characters of `value`, then pad with `-` up to
/// `width`. `None` or an empty value yields only placeholders.
pub fn append_field_value(out: &mut String, value: Option<&str>, width: usize) {
    let mut written = 0;
    for c in value.unwrap_or_default().chars().take(width) {
        out.push(c);
        written += 1;
    }
    out.extend(std::iter::repeat(UNUSED_POSITION_CODE).take(width - written));
}
