//! Coding scheme: the position-1 discriminant of a symbol code.
//!
//! The scheme decides which fields a code carries and where they sit. Each
//! variant maps to exactly one [`Layout`]; the codec never looks at any other
//! position before resolving the scheme.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::codec::layout::{self, Layout, SlotKind};
use crate::symbol_code::Field;
use crate::symbology;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scheme {
    Warfighting,
    TacticalGraphics,
    Metoc,
    Intelligence,
    StabilityOperations,
    EmergencyManagement,
}

impl Scheme {
    pub const ALL: [Scheme; 6] = [
        Scheme::Warfighting,
        Scheme::TacticalGraphics,
        Scheme::Metoc,
        Scheme::Intelligence,
        Scheme::StabilityOperations,
        Scheme::EmergencyManagement,
    ];

    /// Upper-case code written at position 1.
    #[inline]
    pub fn code(self) -> &'static str {
        match self {
            Scheme::Warfighting         => symbology::SCHEME_WARFIGHTING,
            Scheme::TacticalGraphics    => symbology::SCHEME_TACTICAL_GRAPHICS,
            Scheme::Metoc               => symbology::SCHEME_METOC,
            Scheme::Intelligence        => symbology::SCHEME_INTELLIGENCE,
            Scheme::StabilityOperations => symbology::SCHEME_STABILITY_OPERATIONS,
            Scheme::EmergencyManagement => symbology::SCHEME_EMERGENCY_MANAGEMENT,
        }
    }

    /// Resolve a position-1 code, ignoring case.
    /// Returns `None` if the code names no known scheme.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code().eq_ignore_ascii_case(code))
    }

    /// Human-readable name (diagnostics only).
    pub fn name(self) -> &'static str {
        match self {
            Scheme::Warfighting         => "warfighting",
            Scheme::TacticalGraphics    => "tactical graphics",
            Scheme::Metoc               => "meteorological and oceanographic",
            Scheme::Intelligence        => "intelligence",
            Scheme::StabilityOperations => "stability operations",
            Scheme::EmergencyManagement => "emergency management",
        }
    }

    /// Parse a scheme from a user-facing name. Accepts the names returned by
    /// [`Scheme::name`] plus a few short aliases.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "warfighting"                                => Some(Scheme::Warfighting),
            "tactical graphics" | "tactical-graphics"    => Some(Scheme::TacticalGraphics),
            "meteorological and oceanographic" | "metoc" => Some(Scheme::Metoc),
            "intelligence"                               => Some(Scheme::Intelligence),
            "stability operations" | "stability-operations" => Some(Scheme::StabilityOperations),
            "emergency management" | "emergency-management" => Some(Scheme::EmergencyManagement),
            _                                            => None,
        }
    }

    /// Positional layout shared by decode and encode.
    #[inline]
    pub fn layout(self) -> &'static Layout {
        layout::layout_for(self)
    }

    /// Fields this scheme can carry, in position order, scheme first.
    pub fn fields(self) -> impl Iterator<Item = Field> {
        std::iter::once(Field::Scheme).chain(self.layout().slots.iter().filter_map(|slot| {
            match slot.kind {
                SlotKind::Coded { field, .. } => Some(field),
                SlotKind::Unused { .. }       => None,
            }
        }))
    }

    /// Whether `field` has a slot in this scheme's layout.
    pub fn carries(self, field: Field) -> bool {
        self.fields().any(|f| f == field)
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
