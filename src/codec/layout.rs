//! Declarative per-scheme slot tables.
//!
//! Positions follow the standard's 1-based numbering. Position 1 (the scheme
//! code) is not part of any table: the codec reads it before picking a
//! layout, and writes it before walking one. Every table therefore covers
//! positions 2..=15 exactly, with no gaps or overlaps.

use crate::scheme::Scheme;
use crate::symbol_code::Field;
use crate::symbology::{self as sym, contains, is_placeholder};

// ── Validity ─────────────────────────────────────────────────────────────────

/// Which branches make up a scheme's symbol-modifier validity.
///
/// The branches differ per scheme and are kept apart on purpose: merging them
/// would accept modifiers a scheme does not define.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModifierRule {
    /// Units/equipment: `-` + echelon, modifier code + `-`, or modifier code + echelon.
    pub units_equipment:     bool,
    pub installation:        bool,
    pub mobility:            bool,
    pub auxiliary_equipment: bool,
}

pub const WARFIGHTING_MODIFIERS: ModifierRule = ModifierRule {
    units_equipment:     true,
    installation:        true,
    mobility:            true,
    auxiliary_equipment: true,
};

pub const STABILITY_OPERATIONS_MODIFIERS: ModifierRule = ModifierRule {
    units_equipment:     true,
    installation:        true,
    mobility:            false,
    auxiliary_equipment: false,
};

pub const EMERGENCY_MANAGEMENT_MODIFIERS: ModifierRule = ModifierRule {
    units_equipment:     false,
    installation:        true,
    mobility:            true,
    auxiliary_equipment: false,
};

impl ModifierRule {
    pub fn accepts(&self, value: &str) -> bool {
        (self.units_equipment && is_units_equipment_modifier(value))
            || (self.installation && contains(sym::INSTALLATION_ALL, value))
            || (self.mobility && contains(sym::MOBILITY_ALL, value))
            || (self.auxiliary_equipment && contains(sym::AUXILIARY_EQUIPMENT_ALL, value))
    }
}

/// Two-character units/equipment modifier: position 11 is a modifier code or
/// unused, position 12 is an echelon or unused, and at least one is set.
pub fn is_units_equipment_modifier(value: &str) -> bool {
    let mut chars = value.chars();
    let (Some(first), Some(second), None) = (chars.next(), chars.next(), chars.next()) else {
        return false;
    };
    let mut buf = [0u8; 4];
    let first_modifier = contains(sym::MODIFIER_CODE_ALL_UEI, first.encode_utf8(&mut buf));
    let second_echelon = contains(sym::ECHELON_ALL, second.encode_utf8(&mut buf));

    (first == sym::UNUSED_POSITION_CODE && second_echelon)
        || (first_modifier && second == sym::UNUSED_POSITION_CODE)
        || (first_modifier && second_echelon)
}

/// Validity test applied to one slot's substring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
    /// Must be one of the listed codes (case-insensitive).
    OneOf(&'static [&'static str]),
    /// Any value other than the placeholder is accepted as-is.
    FreeForm,
    /// Composite symbol-modifier test.
    Modifier(ModifierRule),
}

impl Validity {
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            Validity::OneOf(table)    => contains(table, value),
            Validity::FreeForm        => !is_placeholder(value),
            Validity::Modifier(rule)  => rule.accepts(value),
        }
    }

    /// The code table behind a plain set test, if any.
    pub fn codes(&self) -> Option<&'static [&'static str]> {
        match self {
            Validity::OneOf(table) => Some(*table),
            _                      => None,
        }
    }
}

// ── Slots ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    /// A user-settable field.
    Coded { field: Field, validity: Validity },
    /// Positions the scheme never uses. Encode always writes placeholders.
    /// When `report_as` is set, decode reports any non-placeholder content
    /// under that field; otherwise the content is ignored.
    Unused { report_as: Option<Field> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    /// 1-based position of the first character.
    pub position: usize,
    pub width:    usize,
    pub kind:     SlotKind,
}

impl Slot {
    const fn coded(field: Field, position: usize, width: usize, validity: Validity) -> Self {
        Self { position, width, kind: SlotKind::Coded { field, validity } }
    }

    const fn unused(position: usize, width: usize, report_as: Option<Field>) -> Self {
        Self { position, width, kind: SlotKind::Unused { report_as } }
    }

    /// 0-based character range covered by this slot.
    #[inline]
    pub fn range(&self) -> std::ops::Range<usize> {
        self.position - 1..self.position - 1 + self.width
    }
}

/// Slot table for one scheme.
#[derive(Debug)]
pub struct Layout {
    pub scheme: Scheme,
    pub slots:  &'static [Slot],
}

impl Layout {
    pub fn slot(&self, field: Field) -> Option<&'static Slot> {
        self.slots.iter().find(|slot| matches!(slot.kind, SlotKind::Coded { field: f, .. } if f == field))
    }
}

// ── Scheme tables ────────────────────────────────────────────────────────────

use Field::{
    BattleDimension, Category, CountryCode, Echelon, FunctionId, GraphicType, OrderOfBattle,
    StandardIdentity, StaticDynamic, Status, SymbolModifier,
};
use Validity::{FreeForm, Modifier, OneOf};

pub static WARFIGHTING: Layout = Layout {
    scheme: Scheme::Warfighting,
    slots: &[
        Slot::coded(StandardIdentity, 2,  1, OneOf(sym::STANDARD_IDENTITY_ALL)),
        Slot::coded(BattleDimension,  3,  1, OneOf(sym::BATTLE_DIMENSION_ALL)),
        Slot::coded(Status,           4,  1, OneOf(sym::STATUS_ALL_UEI_SIGINT_SO_EM)),
        Slot::coded(FunctionId,       5,  6, FreeForm),
        Slot::coded(SymbolModifier,   11, 2, Modifier(WARFIGHTING_MODIFIERS)),
        Slot::coded(CountryCode,      13, 2, FreeForm),
        Slot::coded(OrderOfBattle,    15, 1, OneOf(sym::ORDER_OF_BATTLE_ALL_UEI_SIGINT_SO_EM)),
    ],
};

pub static TACTICAL_GRAPHICS: Layout = Layout {
    scheme: Scheme::TacticalGraphics,
    slots: &[
        Slot::coded(StandardIdentity, 2,  1, OneOf(sym::STANDARD_IDENTITY_ALL)),
        Slot::coded(Category,         3,  1, OneOf(sym::CATEGORY_ALL_TACTICAL_GRAPHICS)),
        Slot::coded(Status,           4,  1, OneOf(sym::STATUS_ALL_TACTICAL_GRAPHICS_METOC)),
        Slot::coded(FunctionId,       5,  6, FreeForm),
        // Echelon only takes position 12.
        Slot::unused(11, 1, None),
        Slot::coded(Echelon,          12, 1, OneOf(sym::ECHELON_ALL)),
        Slot::coded(CountryCode,      13, 2, FreeForm),
        Slot::coded(OrderOfBattle,    15, 1, OneOf(sym::ORDER_OF_BATTLE_ALL_TACTICAL_GRAPHICS)),
    ],
};

pub static METOC: Layout = Layout {
    scheme: Scheme::Metoc,
    slots: &[
        Slot::coded(Category,         2,  1, OneOf(sym::CATEGORY_ALL_METOC)),
        Slot::coded(StaticDynamic,    3,  2, OneOf(sym::STATIC_DYNAMIC_ALL)),
        Slot::coded(FunctionId,       5,  6, FreeForm),
        Slot::coded(GraphicType,      11, 3, OneOf(sym::GRAPHIC_TYPE_ALL)),
        Slot::unused(14, 2, None),
    ],
};

pub static INTELLIGENCE: Layout = Layout {
    scheme: Scheme::Intelligence,
    slots: &[
        Slot::coded(StandardIdentity, 2,  1, OneOf(sym::STANDARD_IDENTITY_ALL)),
        Slot::coded(BattleDimension,  3,  1, OneOf(sym::BATTLE_DIMENSION_ALL_INTELLIGENCE)),
        Slot::coded(Status,           4,  1, OneOf(sym::STATUS_ALL_UEI_SIGINT_SO_EM)),
        Slot::coded(FunctionId,       5,  6, FreeForm),
        Slot::unused(11, 2, Some(SymbolModifier)),
        Slot::coded(CountryCode,      13, 2, FreeForm),
        Slot::coded(OrderOfBattle,    15, 1, OneOf(sym::ORDER_OF_BATTLE_ALL_UEI_SIGINT_SO_EM)),
    ],
};

pub static STABILITY_OPERATIONS: Layout = Layout {
    scheme: Scheme::StabilityOperations,
    slots: &[
        Slot::coded(StandardIdentity, 2,  1, OneOf(sym::STANDARD_IDENTITY_ALL)),
        Slot::coded(Category,         3,  1, OneOf(sym::CATEGORY_ALL_STABILITY_OPERATIONS)),
        Slot::coded(Status,           4,  1, OneOf(sym::STATUS_ALL_UEI_SIGINT_SO_EM)),
        Slot::coded(FunctionId,       5,  6, FreeForm),
        Slot::coded(SymbolModifier,   11, 2, Modifier(STABILITY_OPERATIONS_MODIFIERS)),
        Slot::coded(CountryCode,      13, 2, FreeForm),
        Slot::coded(OrderOfBattle,    15, 1, OneOf(sym::ORDER_OF_BATTLE_ALL_UEI_SIGINT_SO_EM)),
    ],
};

pub static EMERGENCY_MANAGEMENT: Layout = Layout {
    scheme: Scheme::EmergencyManagement,
    slots: &[
        Slot::coded(StandardIdentity, 2,  1, OneOf(sym::STANDARD_IDENTITY_ALL)),
        Slot::coded(Category,         3,  1, OneOf(sym::CATEGORY_ALL_EMERGENCY_MANAGEMENT)),
        Slot::coded(Status,           4,  1, OneOf(sym::STATUS_ALL_UEI_SIGINT_SO_EM)),
        Slot::coded(FunctionId,       5,  6, FreeForm),
        Slot::coded(SymbolModifier,   11, 2, Modifier(EMERGENCY_MANAGEMENT_MODIFIERS)),
        Slot::coded(CountryCode,      13, 2, FreeForm),
        Slot::coded(OrderOfBattle,    15, 1, OneOf(sym::ORDER_OF_BATTLE_ALL_UEI_SIGINT_SO_EM)),
    ],
};

/// Resolve a scheme to its slot table.
pub fn layout_for(scheme: Scheme) -> &'static Layout {
    match scheme {
        Scheme::Warfighting         => &WARFIGHTING,
        Scheme::TacticalGraphics    => &TACTICAL_GRAPHICS,
        Scheme::Metoc               => &METOC,
        Scheme::Intelligence        => &INTELLIGENCE,
        Scheme::StabilityOperations => &STABILITY_OPERATIONS,
        Scheme::EmergencyManagement => &EMERGENCY_MANAGEMENT,
    }
}

/// Valid codes for `field` under `scheme`.
///
/// Returns `None` when the scheme does not carry the field, or when the field
/// is free-form or composite (function ID, country code, symbol modifier).
pub fn valid_codes(scheme: Scheme, field: Field) -> Option<&'static [&'static str]> {
    match field {
        Field::Scheme => Some(sym::SCHEME_ALL),
        _ => layout_for(scheme).slot(field).and_then(|slot| match slot.kind {
            SlotKind::Coded { validity, .. } => validity.codes(),
            SlotKind::Unused { .. }          => None,
        }),
    }
}
