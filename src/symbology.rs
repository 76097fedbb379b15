//! Symbology tables: every legal code value for each SIDC field.
//!
//! All codes are stored upper-case. Membership goes through [`contains`],
//! which ignores ASCII case.
//!
//! Several codes share a letter across schemes (`"O"` is Tactical Graphics
//! "other", Stability Operations "operations" and METOC "oceanic"). The
//! per-scheme `*_ALL_*` tables are what the codec validates against; the
//! plain `*_ALL` tables are unions for callers that do not care which scheme
//! a code came from.

/// Character marking an unused position in a symbol code.
pub const UNUSED_POSITION_CODE: char = '-';

// ── Coding scheme (position 1) ───────────────────────────────────────────────

pub const SCHEME_WARFIGHTING:          &str = "S";
pub const SCHEME_TACTICAL_GRAPHICS:    &str = "G";
pub const SCHEME_METOC:                &str = "W";
pub const SCHEME_INTELLIGENCE:         &str = "I";
pub const SCHEME_STABILITY_OPERATIONS: &str = "O";
pub const SCHEME_EMERGENCY_MANAGEMENT: &str = "E";

pub const SCHEME_ALL: &[&str] = &[
    SCHEME_WARFIGHTING,
    SCHEME_TACTICAL_GRAPHICS,
    SCHEME_METOC,
    SCHEME_INTELLIGENCE,
    SCHEME_STABILITY_OPERATIONS,
    SCHEME_EMERGENCY_MANAGEMENT,
];

// ── Standard identity (position 2) ───────────────────────────────────────────

pub const STANDARD_IDENTITY_PENDING:                 &str = "P";
pub const STANDARD_IDENTITY_UNKNOWN:                 &str = "U";
pub const STANDARD_IDENTITY_FRIEND:                  &str = "F";
pub const STANDARD_IDENTITY_NEUTRAL:                 &str = "N";
pub const STANDARD_IDENTITY_HOSTILE:                 &str = "H";
pub const STANDARD_IDENTITY_ASSUMED_FRIEND:          &str = "A";
pub const STANDARD_IDENTITY_SUSPECT:                 &str = "S";
pub const STANDARD_IDENTITY_EXERCISE_PENDING:        &str = "G";
pub const STANDARD_IDENTITY_EXERCISE_UNKNOWN:        &str = "W";
pub const STANDARD_IDENTITY_EXERCISE_FRIEND:         &str = "D";
pub const STANDARD_IDENTITY_EXERCISE_NEUTRAL:        &str = "L";
pub const STANDARD_IDENTITY_EXERCISE_ASSUMED_FRIEND: &str = "M";
pub const STANDARD_IDENTITY_JOKER:                   &str = "J";
pub const STANDARD_IDENTITY_FAKER:                   &str = "K";

pub const STANDARD_IDENTITY_ALL: &[&str] = &[
    STANDARD_IDENTITY_PENDING,
    STANDARD_IDENTITY_UNKNOWN,
    STANDARD_IDENTITY_FRIEND,
    STANDARD_IDENTITY_NEUTRAL,
    STANDARD_IDENTITY_HOSTILE,
    STANDARD_IDENTITY_ASSUMED_FRIEND,
    STANDARD_IDENTITY_SUSPECT,
    STANDARD_IDENTITY_EXERCISE_PENDING,
    STANDARD_IDENTITY_EXERCISE_UNKNOWN,
    STANDARD_IDENTITY_EXERCISE_FRIEND,
    STANDARD_IDENTITY_EXERCISE_NEUTRAL,
    STANDARD_IDENTITY_EXERCISE_ASSUMED_FRIEND,
    STANDARD_IDENTITY_JOKER,
    STANDARD_IDENTITY_FAKER,
];

// ── Battle dimension (position 3, Warfighting and Intelligence) ─────────────

pub const BATTLE_DIMENSION_UNKNOWN:         &str = "Z";
pub const BATTLE_DIMENSION_SPACE:           &str = "P";
pub const BATTLE_DIMENSION_AIR:             &str = "A";
pub const BATTLE_DIMENSION_GROUND:          &str = "G";
pub const BATTLE_DIMENSION_SEA_SURFACE:     &str = "S";
pub const BATTLE_DIMENSION_SEA_SUBSURFACE:  &str = "U";
pub const BATTLE_DIMENSION_SOF:             &str = "F";
pub const BATTLE_DIMENSION_OTHER:           &str = "X";

pub const BATTLE_DIMENSION_ALL: &[&str] = &[
    BATTLE_DIMENSION_UNKNOWN,
    BATTLE_DIMENSION_SPACE,
    BATTLE_DIMENSION_AIR,
    BATTLE_DIMENSION_GROUND,
    BATTLE_DIMENSION_SEA_SURFACE,
    BATTLE_DIMENSION_SEA_SUBSURFACE,
    BATTLE_DIMENSION_SOF,
    BATTLE_DIMENSION_OTHER,
];

/// Intelligence has no SOF dimension.
pub const BATTLE_DIMENSION_ALL_INTELLIGENCE: &[&str] = &[
    BATTLE_DIMENSION_UNKNOWN,
    BATTLE_DIMENSION_SPACE,
    BATTLE_DIMENSION_AIR,
    BATTLE_DIMENSION_GROUND,
    BATTLE_DIMENSION_SEA_SURFACE,
    BATTLE_DIMENSION_SEA_SUBSURFACE,
    BATTLE_DIMENSION_OTHER,
];

// ── Category (position 3, or position 2 for METOC) ───────────────────────────

// Tactical Graphics
pub const CATEGORY_TASKS:                            &str = "T";
pub const CATEGORY_COMMAND_CONTROL_GENERAL_MANEUVER: &str = "G";
pub const CATEGORY_MOBILITY_SURVIVABILITY:           &str = "M";
pub const CATEGORY_FIRE_SUPPORT:                     &str = "F";
pub const CATEGORY_COMBAT_SERVICE_SUPPORT:           &str = "S";
pub const CATEGORY_OTHER:                            &str = "O";
// Stability Operations
pub const CATEGORY_VIOLENT_ACTIVITIES:               &str = "V";
pub const CATEGORY_LOCATIONS:                        &str = "L";
pub const CATEGORY_OPERATIONS:                       &str = "O";
pub const CATEGORY_ITEMS:                            &str = "I";
pub const CATEGORY_INDIVIDUAL:                       &str = "P";
pub const CATEGORY_NONMILITARY_GROUP_ORGANIZATION:   &str = "G";
pub const CATEGORY_RAPE:                             &str = "R";
// Emergency Management (also uses CATEGORY_OPERATIONS)
pub const CATEGORY_INCIDENT:                         &str = "I";
pub const CATEGORY_NATURAL_EVENTS:                   &str = "N";
pub const CATEGORY_INFRASTRUCTURE:                   &str = "F";
// METOC
pub const CATEGORY_ATMOSPHERIC:                      &str = "A";
pub const CATEGORY_OCEANIC:                          &str = "O";
pub const CATEGORY_SPACE:                            &str = "S";

pub const CATEGORY_ALL_TACTICAL_GRAPHICS: &[&str] = &[
    CATEGORY_TASKS,
    CATEGORY_COMMAND_CONTROL_GENERAL_MANEUVER,
    CATEGORY_MOBILITY_SURVIVABILITY,
    CATEGORY_FIRE_SUPPORT,
    CATEGORY_COMBAT_SERVICE_SUPPORT,
    CATEGORY_OTHER,
];

pub const CATEGORY_ALL_STABILITY_OPERATIONS: &[&str] = &[
    CATEGORY_VIOLENT_ACTIVITIES,
    CATEGORY_LOCATIONS,
    CATEGORY_OPERATIONS,
    CATEGORY_ITEMS,
    CATEGORY_INDIVIDUAL,
    CATEGORY_NONMILITARY_GROUP_ORGANIZATION,
    CATEGORY_RAPE,
];

pub const CATEGORY_ALL_EMERGENCY_MANAGEMENT: &[&str] = &[
    CATEGORY_INCIDENT,
    CATEGORY_NATURAL_EVENTS,
    CATEGORY_OPERATIONS,
    CATEGORY_INFRASTRUCTURE,
];

pub const CATEGORY_ALL_METOC: &[&str] = &[
    CATEGORY_ATMOSPHERIC,
    CATEGORY_OCEANIC,
    CATEGORY_SPACE,
];

/// Union of every category code, duplicates across schemes listed once.
pub const CATEGORY_ALL: &[&str] = &[
    CATEGORY_TASKS,
    CATEGORY_COMMAND_CONTROL_GENERAL_MANEUVER,
    CATEGORY_MOBILITY_SURVIVABILITY,
    CATEGORY_FIRE_SUPPORT,
    CATEGORY_COMBAT_SERVICE_SUPPORT,
    CATEGORY_OTHER,
    CATEGORY_VIOLENT_ACTIVITIES,
    CATEGORY_LOCATIONS,
    CATEGORY_ITEMS,
    CATEGORY_INDIVIDUAL,
    CATEGORY_RAPE,
    CATEGORY_NATURAL_EVENTS,
    CATEGORY_ATMOSPHERIC,
];

// ── Status / operational condition (position 4) ─────────────────────────────

pub const STATUS_ANTICIPATED:      &str = "A";
pub const STATUS_PRESENT:          &str = "P";
pub const STATUS_FULLY_CAPABLE:    &str = "C";
pub const STATUS_DAMAGED:          &str = "D";
pub const STATUS_DESTROYED:        &str = "X";
pub const STATUS_FULL_TO_CAPACITY: &str = "F";
pub const STATUS_SUSPECTED:        &str = "S";
pub const STATUS_KNOWN:            &str = "K";

/// Warfighting, Intelligence, Stability Operations and Emergency Management.
pub const STATUS_ALL_UEI_SIGINT_SO_EM: &[&str] = &[
    STATUS_ANTICIPATED,
    STATUS_PRESENT,
    STATUS_FULLY_CAPABLE,
    STATUS_DAMAGED,
    STATUS_DESTROYED,
    STATUS_FULL_TO_CAPACITY,
];

pub const STATUS_ALL_TACTICAL_GRAPHICS_METOC: &[&str] = &[
    STATUS_ANTICIPATED,
    STATUS_SUSPECTED,
    STATUS_PRESENT,
    STATUS_KNOWN,
];

pub const STATUS_ALL: &[&str] = &[
    STATUS_ANTICIPATED,
    STATUS_PRESENT,
    STATUS_FULLY_CAPABLE,
    STATUS_DAMAGED,
    STATUS_DESTROYED,
    STATUS_FULL_TO_CAPACITY,
    STATUS_SUSPECTED,
    STATUS_KNOWN,
];

// ── Static/dynamic (positions 3-4, METOC) ────────────────────────────────────

pub const STATIC:  &str = "S-";
pub const DYNAMIC: &str = "-D";

pub const STATIC_DYNAMIC_ALL: &[&str] = &[STATIC, DYNAMIC];

// ── Echelon ──────────────────────────────────────────────────────────────────

pub const ECHELON_TEAM_CREW:             &str = "A";
pub const ECHELON_SQUAD:                 &str = "B";
pub const ECHELON_SECTION:               &str = "C";
pub const ECHELON_PLATOON_DETACHMENT:    &str = "D";
pub const ECHELON_COMPANY_BATTERY_TROOP: &str = "E";
pub const ECHELON_BATTALION_SQUADRON:    &str = "F";
pub const ECHELON_REGIMENT_GROUP:        &str = "G";
pub const ECHELON_BRIGADE:               &str = "H";
pub const ECHELON_DIVISION:              &str = "I";
pub const ECHELON_CORPS:                 &str = "J";
pub const ECHELON_ARMY:                  &str = "K";
pub const ECHELON_ARMY_GROUP_FRONT:      &str = "L";
pub const ECHELON_REGION:                &str = "M";
pub const ECHELON_COMMAND:               &str = "N";

pub const ECHELON_ALL: &[&str] = &[
    ECHELON_TEAM_CREW,
    ECHELON_SQUAD,
    ECHELON_SECTION,
    ECHELON_PLATOON_DETACHMENT,
    ECHELON_COMPANY_BATTERY_TROOP,
    ECHELON_BATTALION_SQUADRON,
    ECHELON_REGIMENT_GROUP,
    ECHELON_BRIGADE,
    ECHELON_DIVISION,
    ECHELON_CORPS,
    ECHELON_ARMY,
    ECHELON_ARMY_GROUP_FRONT,
    ECHELON_REGION,
    ECHELON_COMMAND,
];

// ── Units/equipment modifier codes (position 11) ────────────────────────────

pub const MODIFIER_CODE_HEADQUARTERS:                        &str = "A";
pub const MODIFIER_CODE_TASK_FORCE_HEADQUARTERS:             &str = "B";
pub const MODIFIER_CODE_FEINT_DUMMY_HEADQUARTERS:            &str = "C";
pub const MODIFIER_CODE_FEINT_DUMMY_TASK_FORCE_HEADQUARTERS: &str = "D";
pub const MODIFIER_CODE_TASK_FORCE:                          &str = "E";
pub const MODIFIER_CODE_FEINT_DUMMY:                         &str = "F";
pub const MODIFIER_CODE_FEINT_DUMMY_TASK_FORCE:              &str = "G";

pub const MODIFIER_CODE_ALL_UEI: &[&str] = &[
    MODIFIER_CODE_HEADQUARTERS,
    MODIFIER_CODE_TASK_FORCE_HEADQUARTERS,
    MODIFIER_CODE_FEINT_DUMMY_HEADQUARTERS,
    MODIFIER_CODE_FEINT_DUMMY_TASK_FORCE_HEADQUARTERS,
    MODIFIER_CODE_TASK_FORCE,
    MODIFIER_CODE_FEINT_DUMMY,
    MODIFIER_CODE_FEINT_DUMMY_TASK_FORCE,
];

pub const MODIFIER_CODE_ALL_HEADQUARTERS: &[&str] = &[
    MODIFIER_CODE_HEADQUARTERS,
    MODIFIER_CODE_TASK_FORCE_HEADQUARTERS,
    MODIFIER_CODE_FEINT_DUMMY_HEADQUARTERS,
    MODIFIER_CODE_FEINT_DUMMY_TASK_FORCE_HEADQUARTERS,
];

pub const MODIFIER_CODE_ALL_TASK_FORCE: &[&str] = &[
    MODIFIER_CODE_TASK_FORCE_HEADQUARTERS,
    MODIFIER_CODE_FEINT_DUMMY_TASK_FORCE_HEADQUARTERS,
    MODIFIER_CODE_TASK_FORCE,
    MODIFIER_CODE_FEINT_DUMMY_TASK_FORCE,
];

pub const MODIFIER_CODE_ALL_FEINT_DUMMY: &[&str] = &[
    MODIFIER_CODE_FEINT_DUMMY_HEADQUARTERS,
    MODIFIER_CODE_FEINT_DUMMY_TASK_FORCE_HEADQUARTERS,
    MODIFIER_CODE_FEINT_DUMMY,
    MODIFIER_CODE_FEINT_DUMMY_TASK_FORCE,
];

// ── Installation, mobility, auxiliary equipment (positions 11-12) ───────────

pub const INSTALLATION_NORMAL:      &str = "H-";
pub const INSTALLATION_FEINT_DUMMY: &str = "HB";

pub const INSTALLATION_ALL: &[&str] = &[INSTALLATION_NORMAL, INSTALLATION_FEINT_DUMMY];

pub const MOBILITY_WHEELED:                    &str = "MO";
pub const MOBILITY_CROSS_COUNTRY:              &str = "MP";
pub const MOBILITY_TRACKED:                    &str = "MQ";
pub const MOBILITY_WHEELED_TRACKED_COMBINATION: &str = "MR";
pub const MOBILITY_TOWED:                      &str = "MS";
pub const MOBILITY_RAIL:                       &str = "MT";
pub const MOBILITY_OVER_THE_SNOW:              &str = "MU";
pub const MOBILITY_SLED:                       &str = "MV";
pub const MOBILITY_PACK_ANIMALS:               &str = "MW";
pub const MOBILITY_BARGE:                      &str = "MX";
pub const MOBILITY_AMPHIBIOUS:                 &str = "MY";

pub const MOBILITY_ALL: &[&str] = &[
    MOBILITY_WHEELED,
    MOBILITY_CROSS_COUNTRY,
    MOBILITY_TRACKED,
    MOBILITY_WHEELED_TRACKED_COMBINATION,
    MOBILITY_TOWED,
    MOBILITY_RAIL,
    MOBILITY_OVER_THE_SNOW,
    MOBILITY_SLED,
    MOBILITY_PACK_ANIMALS,
    MOBILITY_BARGE,
    MOBILITY_AMPHIBIOUS,
];

pub const AUXILIARY_EQUIPMENT_TOWED_SONAR_ARRAY_SHORT: &str = "NS";
pub const AUXILIARY_EQUIPMENT_TOWED_SONAR_ARRAY_LONG:  &str = "NL";

pub const AUXILIARY_EQUIPMENT_ALL: &[&str] = &[
    AUXILIARY_EQUIPMENT_TOWED_SONAR_ARRAY_SHORT,
    AUXILIARY_EQUIPMENT_TOWED_SONAR_ARRAY_LONG,
];

// ── Graphic type (positions 11-13, METOC) ────────────────────────────────────

pub const GRAPHIC_TYPE_POINT: &str = "P--";
pub const GRAPHIC_TYPE_LINE:  &str = "-L-";
pub const GRAPHIC_TYPE_AREA:  &str = "--A";

pub const GRAPHIC_TYPE_ALL: &[&str] = &[GRAPHIC_TYPE_POINT, GRAPHIC_TYPE_LINE, GRAPHIC_TYPE_AREA];

// ── Order of battle (position 15) ────────────────────────────────────────────

pub const ORDER_OF_BATTLE_AIR:                     &str = "A";
pub const ORDER_OF_BATTLE_ELECTRONIC:              &str = "E";
pub const ORDER_OF_BATTLE_CIVILIAN:                &str = "C";
pub const ORDER_OF_BATTLE_GROUND:                  &str = "G";
pub const ORDER_OF_BATTLE_MARITIME:                &str = "N";
pub const ORDER_OF_BATTLE_STRATEGIC_FORCE_RELATED: &str = "S";
pub const ORDER_OF_BATTLE_CONTROL_MARKINGS:        &str = "X";

pub const ORDER_OF_BATTLE_ALL_UEI_SIGINT_SO_EM: &[&str] = &[
    ORDER_OF_BATTLE_AIR,
    ORDER_OF_BATTLE_ELECTRONIC,
    ORDER_OF_BATTLE_CIVILIAN,
    ORDER_OF_BATTLE_GROUND,
    ORDER_OF_BATTLE_MARITIME,
    ORDER_OF_BATTLE_STRATEGIC_FORCE_RELATED,
];

pub const ORDER_OF_BATTLE_ALL_TACTICAL_GRAPHICS: &[&str] = &[ORDER_OF_BATTLE_CONTROL_MARKINGS];

pub const ORDER_OF_BATTLE_ALL: &[&str] = &[
    ORDER_OF_BATTLE_AIR,
    ORDER_OF_BATTLE_CIVILIAN,
    ORDER_OF_BATTLE_CONTROL_MARKINGS,
    ORDER_OF_BATTLE_ELECTRONIC,
    ORDER_OF_BATTLE_GROUND,
    ORDER_OF_BATTLE_MARITIME,
    ORDER_OF_BATTLE_STRATEGIC_FORCE_RELATED,
];

// ── Operational condition amplifiers ─────────────────────────────────────────
//
// Not part of the 15-character code. Renderers derive these from the status
// field when drawing damaged/destroyed overlays.

pub const OPERATIONAL_CONDITION_DAMAGED:   &str = "OD";
pub const OPERATIONAL_CONDITION_DESTROYED: &str = "OX";

pub const OPERATIONAL_CONDITION_ALL: &[&str] = &[
    OPERATIONAL_CONDITION_DAMAGED,
    OPERATIONAL_CONDITION_DESTROYED,
];

pub const OPERATIONAL_CONDITION_ALTERNATE_FULLY_CAPABLE:    &str = "PC";
pub const OPERATIONAL_CONDITION_ALTERNATE_DAMAGED:          &str = "PD";
pub const OPERATIONAL_CONDITION_ALTERNATE_DESTROYED:        &str = "PX";
pub const OPERATIONAL_CONDITION_ALTERNATE_FULL_TO_CAPACITY: &str = "PF";

pub const OPERATIONAL_CONDITION_ALTERNATE_ALL: &[&str] = &[
    OPERATIONAL_CONDITION_ALTERNATE_FULLY_CAPABLE,
    OPERATIONAL_CONDITION_ALTERNATE_DAMAGED,
    OPERATIONAL_CONDITION_ALTERNATE_DESTROYED,
    OPERATIONAL_CONDITION_ALTERNATE_FULL_TO_CAPACITY,
];

// ── Lookup ───────────────────────────────────────────────────────────────────

/// Case-insensitive membership test against one of the tables above.
pub fn contains(table: &[&str], value: &str) -> bool {
    table.iter().any(|code| code.eq_ignore_ascii_case(value))
}

/// Returns true when `value` is non-empty and made only of
/// [`UNUSED_POSITION_CODE`].
pub fn is_placeholder(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c == UNUSED_POSITION_CODE)
}
