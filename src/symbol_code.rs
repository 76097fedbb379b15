//! [`SymbolCode`]: the structured form of a 15-character SIDC.
//!
//! ```
//! use sidc::{Scheme, SymbolCode};
//! use sidc::symbology::*;
//!
//! let code = SymbolCode::new()
//!     .with_scheme(Scheme::Warfighting)
//!     .with_standard_identity(STANDARD_IDENTITY_FRIEND)
//!     .with_battle_dimension(BATTLE_DIMENSION_GROUND)
//!     .with_status(STATUS_PRESENT)
//!     .with_country_code("US")
//!     .with_order_of_battle(ORDER_OF_BATTLE_AIR);
//! assert_eq!(code.encode().as_deref(), Some("SFGP--------USA"));
//!
//! let parsed: SymbolCode = "SFGP--------USA".parse()?;
//! assert_eq!(parsed, code);
//! # Ok::<(), sidc::SidcError>(())
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::codec::{self, SidcError};
use crate::scheme::Scheme;
use crate::symbology::{self as sym, contains, UNUSED_POSITION_CODE};

// ── Field ────────────────────────────────────────────────────────────────────

/// Names one field of a symbol code. Used by layouts and in unrecognized-field
/// reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Scheme,
    StandardIdentity,
    Category,
    BattleDimension,
    Status,
    StaticDynamic,
    FunctionId,
    SymbolModifier,
    Echelon,
    GraphicType,
    CountryCode,
    OrderOfBattle,
}

impl Field {
    /// Human-readable name, as it appears in decode reports.
    ///
    /// METOC failures at positions 3-4 and 11-13 are reported as
    /// `"static/dynamic"` and `"graphic type"`, never as `"status"` or
    /// `"echelon"`.
    pub fn name(self) -> &'static str {
        match self {
            Field::Scheme           => "scheme",
            Field::StandardIdentity => "standard identity",
            Field::Category         => "category",
            Field::BattleDimension  => "battle dimension",
            Field::Status           => "status",
            Field::StaticDynamic    => "static/dynamic",
            Field::FunctionId       => "function ID",
            Field::SymbolModifier   => "symbol modifier",
            Field::Echelon          => "echelon",
            Field::GraphicType      => "graphic type",
            Field::CountryCode      => "country code",
            Field::OrderOfBattle    => "order of battle",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── SymbolCode ───────────────────────────────────────────────────────────────

/// Field values of one symbol code.
///
/// Every slot is `None` when absent. Values are kept exactly as given (or as
/// decoded, original case preserved); validation happens only when decoding.
/// An empty string encodes as placeholders, so it reads back as `None`.
/// Which slots are meaningful depends on [`scheme`](Self::scheme), see
/// [`Scheme::fields`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SymbolCode {
    /// Decoding resolves position 1 ignoring case; encoding always writes the
    /// upper-case code.
    pub scheme:            Option<Scheme>,
    pub standard_identity: Option<String>,
    pub category:          Option<String>,
    pub battle_dimension:  Option<String>,
    pub status:            Option<String>,
    pub static_dynamic:    Option<String>,
    pub function_id:       Option<String>,
    pub symbol_modifier:   Option<String>,
    pub echelon:           Option<String>,
    pub graphic_type:      Option<String>,
    pub country_code:      Option<String>,
    pub order_of_battle:   Option<String>,
}

impl SymbolCode {
    /// An empty symbol code, every field absent.
    pub fn new() -> Self {
        Self::default()
    }

    // An empty value passed to any `with_*` builder below encodes as
    // placeholders and decodes back as absent.

    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = Some(scheme);
        self
    }

    pub fn with_standard_identity(mut self, value: impl Into<String>) -> Self {
        self.standard_identity = Some(value.into());
        self
    }

    pub fn with_category(mut self, value: impl Into<String>) -> Self {
        self.category = Some(value.into());
        self
    }

    pub fn with_battle_dimension(mut self, value: impl Into<String>) -> Self {
        self.battle_dimension = Some(value.into());
        self
    }

    pub fn with_status(mut self, value: impl Into<String>) -> Self {
        self.status = Some(value.into());
        self
    }

    pub fn with_static_dynamic(mut self, value: impl Into<String>) -> Self {
        self.static_dynamic = Some(value.into());
        self
    }

    pub fn with_function_id(mut self, value: impl Into<String>) -> Self {
        self.function_id = Some(value.into());
        self
    }

    pub fn with_symbol_modifier(mut self, value: impl Into<String>) -> Self {
        self.symbol_modifier = Some(value.into());
        self
    }

    pub fn with_echelon(mut self, value: impl Into<String>) -> Self {
        self.echelon = Some(value.into());
        self
    }

    pub fn with_graphic_type(mut self, value: impl Into<String>) -> Self {
        self.graphic_type = Some(value.into());
        self
    }

    pub fn with_country_code(mut self, value: impl Into<String>) -> Self {
        self.country_code = Some(value.into());
        self
    }

    pub fn with_order_of_battle(mut self, value: impl Into<String>) -> Self {
        self.order_of_battle = Some(value.into());
        self
    }

    /// Value of `field`. The scheme reads back as its position-1 code.
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Scheme => self.scheme.map(Scheme::code),
            _             => self.slot(field).and_then(|v| v.as_deref()),
        }
    }

    /// Set or clear `field`.
    ///
    /// For [`Field::Scheme`] the value is resolved with [`Scheme::from_code`];
    /// an unknown code clears the scheme.
    pub fn set(&mut self, field: Field, value: Option<String>) {
        match field {
            Field::Scheme => self.scheme = value.as_deref().and_then(Scheme::from_code),
            _ => {
                if let Some(slot) = self.slot_mut(field) {
                    *slot = value;
                }
            }
        }
    }

    fn slot(&self, field: Field) -> Option<&Option<String>> {
        Some(match field {
            Field::Scheme           => return None,
            Field::StandardIdentity => &self.standard_identity,
            Field::Category         => &self.category,
            Field::BattleDimension  => &self.battle_dimension,
            Field::Status           => &self.status,
            Field::StaticDynamic    => &self.static_dynamic,
            Field::FunctionId       => &self.function_id,
            Field::SymbolModifier   => &self.symbol_modifier,
            Field::Echelon          => &self.echelon,
            Field::GraphicType      => &self.graphic_type,
            Field::CountryCode      => &self.country_code,
            Field::OrderOfBattle    => &self.order_of_battle,
        })
    }

    fn slot_mut(&mut self, field: Field) -> Option<&mut Option<String>> {
        Some(match field {
            Field::Scheme           => return None,
            Field::StandardIdentity => &mut self.standard_identity,
            Field::Category         => &mut self.category,
            Field::BattleDimension  => &mut self.battle_dimension,
            Field::Status           => &mut self.status,
            Field::StaticDynamic    => &mut self.static_dynamic,
            Field::FunctionId       => &mut self.function_id,
            Field::SymbolModifier   => &mut self.symbol_modifier,
            Field::Echelon          => &mut self.echelon,
            Field::GraphicType      => &mut self.graphic_type,
            Field::CountryCode      => &mut self.country_code,
            Field::OrderOfBattle    => &mut self.order_of_battle,
        })
    }

    /// Copy every field that is set on `other` into `self`. Fields absent on
    /// `other` are left alone.
    pub fn set_values(&mut self, other: &SymbolCode) -> &mut Self {
        if other.scheme.is_some() {
            self.scheme = other.scheme;
        }
        for field in FIELDS_AFTER_SCHEME {
            if let Some(value) = other.get(field) {
                self.set(field, Some(value.to_string()));
            }
        }
        self
    }

    /// Copy with the instance-specific fields cleared: standard identity,
    /// status, echelon, symbol modifier, country code and order of battle.
    /// What remains identifies the symbol's class.
    pub fn mask(&self) -> SymbolCode {
        SymbolCode {
            standard_identity: None,
            status:            None,
            echelon:           None,
            symbol_modifier:   None,
            country_code:      None,
            order_of_battle:   None,
            ..self.clone()
        }
    }

    /// The 15-character code for this record, or `None` if no scheme is set.
    pub fn encode(&self) -> Option<String> {
        codec::encode(self)
    }

    /// Encoding of [`mask`](Self::mask).
    pub fn encode_masked(&self) -> Option<String> {
        self.mask().encode()
    }

    // ── Units/equipment modifier accessors ──────────────────────────────────

    fn modifier_code(&self) -> Option<&str> {
        let modifier = self.symbol_modifier.as_deref()?;
        modifier.get(..1)
    }

    /// Position 11 marks a headquarters (plain, task force, or feint/dummy).
    pub fn is_headquarters(&self) -> bool {
        self.modifier_code().is_some_and(|c| contains(sym::MODIFIER_CODE_ALL_HEADQUARTERS, c))
    }

    /// Position 11 marks a task force.
    pub fn is_task_force(&self) -> bool {
        self.modifier_code().is_some_and(|c| contains(sym::MODIFIER_CODE_ALL_TASK_FORCE, c))
    }

    /// Position 11 marks a feint/dummy, or the code is a feint/dummy installation.
    pub fn is_feint_dummy(&self) -> bool {
        self.modifier_code().is_some_and(|c| contains(sym::MODIFIER_CODE_ALL_FEINT_DUMMY, c))
            || self
                .symbol_modifier
                .as_deref()
                .is_some_and(|m| m.eq_ignore_ascii_case(sym::INSTALLATION_FEINT_DUMMY))
    }

    /// Echelon code for unit symbols.
    ///
    /// Tactical Graphics carry it in [`echelon`](Self::echelon); Warfighting
    /// and Stability Operations carry it in position 12 of a units/equipment
    /// symbol modifier. Installation and mobility modifiers have no echelon.
    pub fn unit_echelon(&self) -> Option<&str> {
        match self.scheme? {
            Scheme::TacticalGraphics => self.echelon.as_deref(),
            Scheme::Warfighting | Scheme::StabilityOperations => {
                let modifier = self.symbol_modifier.as_deref()?;
                if !crate::codec::layout::is_units_equipment_modifier(modifier) {
                    return None;
                }
                modifier.get(1..2).filter(|e| contains(sym::ECHELON_ALL, e))
            }
            _ => None,
        }
    }
}

const FIELDS_AFTER_SCHEME: [Field; 11] = [
    Field::StandardIdentity,
    Field::Category,
    Field::BattleDimension,
    Field::Status,
    Field::StaticDynamic,
    Field::FunctionId,
    Field::SymbolModifier,
    Field::Echelon,
    Field::GraphicType,
    Field::CountryCode,
    Field::OrderOfBattle,
];

impl FromStr for SymbolCode {
    type Err = SidcError;

    /// Strict parse: exactly 15 characters, a known scheme and no
    /// unrecognized fields.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        codec::decode(s)?.into_result()
    }
}

/// True if `value` is absent, empty, or nothing but placeholders and
/// whitespace.
pub fn is_field_empty(value: Option<&str>) -> bool {
    value.map_or(true, |v| {
        v.chars().all(|c| c == UNUSED_POSITION_CODE || c.is_whitespace())
    })
}
