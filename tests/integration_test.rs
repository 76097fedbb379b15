use sidc::symbology::*;
use sidc::{decode, parse, DecodeOutcome, Field, Scheme, SidcError, SymbolCode};

fn recognized(code: &str) -> SymbolCode {
    let decoded = decode(code).unwrap();
    assert!(decoded.is_recognized(), "{code}: {:?}", decoded.outcome);
    decoded.code
}

fn unrecognized(code: &str) -> Vec<Field> {
    match decode(code).unwrap().outcome {
        DecodeOutcome::PartiallyUnrecognized(fields) => fields,
        other => panic!("{code}: expected unrecognized fields, got {other:?}"),
    }
}

#[test]
fn test_identity_only_codes() {
    let cases = [
        (Scheme::Warfighting,         "SH-------------"),
        (Scheme::TacticalGraphics,    "GH-------------"),
        (Scheme::StabilityOperations, "OH-------------"),
        (Scheme::Intelligence,        "IH-------------"),
        (Scheme::EmergencyManagement, "EH-------------"),
    ];
    for (scheme, expected) in cases {
        let code = SymbolCode::new()
            .with_scheme(scheme)
            .with_standard_identity(STANDARD_IDENTITY_HOSTILE);
        assert_eq!(code.encode().as_deref(), Some(expected));
        assert_eq!(recognized(expected), code);
    }
}

#[test]
fn test_metoc_ignores_identity() {
    let code = SymbolCode::new()
        .with_scheme(Scheme::Metoc)
        .with_standard_identity(STANDARD_IDENTITY_HOSTILE);
    assert_eq!(code.encode().as_deref(), Some("W--------------"));
    assert_eq!(recognized("W--------------"), SymbolCode::new().with_scheme(Scheme::Metoc));
}

#[test]
fn test_unset_scheme_has_no_encoding() {
    let code = SymbolCode::new().with_standard_identity(STANDARD_IDENTITY_FRIEND);
    assert_eq!(code.encode(), None);
    assert_eq!(sidc::encode(&SymbolCode::new()), None);
}

#[test]
fn test_unrecognized_scheme() {
    let decoded = decode("ZH-------------").unwrap();
    assert_eq!(decoded.outcome, DecodeOutcome::UnrecognizedScheme("Z".to_string()));
    assert!(!decoded.unrecognized().is_empty());
    assert_eq!(decoded.code, SymbolCode::default());

    let err = decoded.into_result().unwrap_err();
    assert!(matches!(err, SidcError::UnrecognizedScheme { ref scheme, .. } if scheme == "Z"));
}

#[test]
fn test_warfighting_country_and_order_of_battle() {
    let code = SymbolCode::new()
        .with_scheme(Scheme::Warfighting)
        .with_standard_identity(STANDARD_IDENTITY_FRIEND)
        .with_battle_dimension(BATTLE_DIMENSION_GROUND)
        .with_status(STATUS_PRESENT)
        .with_country_code("US")
        .with_order_of_battle(ORDER_OF_BATTLE_AIR);
    assert_eq!(code.encode().as_deref(), Some("SFGP--------USA"));

    let decoded = decode("SFGP--------USA").unwrap();
    assert!(decoded.unrecognized().is_empty());
    assert_eq!(decoded.code, code);
}

#[test]
fn test_invalid_order_of_battle_isolated() {
    let code = SymbolCode::new()
        .with_scheme(Scheme::Warfighting)
        .with_standard_identity(STANDARD_IDENTITY_FRIEND)
        .with_battle_dimension(BATTLE_DIMENSION_GROUND)
        .with_status(STATUS_PRESENT)
        .with_country_code("US")
        .with_order_of_battle(ORDER_OF_BATTLE_CONTROL_MARKINGS);
    let sidc = code.encode().unwrap();
    assert_eq!(sidc, "SFGP--------USX");

    let decoded = decode(&sidc).unwrap();
    assert_eq!(decoded.unrecognized(), vec!["order of battle"]);
    assert_eq!(decoded.code.standard_identity.as_deref(), Some("F"));
    assert_eq!(decoded.code.battle_dimension.as_deref(), Some("G"));
    assert_eq!(decoded.code.status.as_deref(), Some("P"));
    assert_eq!(decoded.code.country_code.as_deref(), Some("US"));
    assert_eq!(decoded.code.order_of_battle, None);
}

#[test]
fn test_every_failure_reported_in_position_order() {
    assert_eq!(
        unrecognized("SZGZ----------X"),
        vec![Field::StandardIdentity, Field::Status, Field::OrderOfBattle],
    );
}

#[test]
fn test_metoc_layout() {
    let code = recognized("WOS-HPBA--P----");
    assert_eq!(code.scheme, Some(Scheme::Metoc));
    assert_eq!(code.category.as_deref(), Some(CATEGORY_OCEANIC));
    assert_eq!(code.static_dynamic.as_deref(), Some(STATIC));
    assert_eq!(code.function_id.as_deref(), Some("HPBA--"));
    assert_eq!(code.graphic_type.as_deref(), Some(GRAPHIC_TYPE_POINT));
    assert_eq!(code.standard_identity, None);
    assert_eq!(code.status, None);
    assert_eq!(code.battle_dimension, None);
    assert_eq!(code.echelon, None);
    assert_eq!(code.encode().as_deref(), Some("WOS-HPBA--P----"));
}

#[test]
fn test_metoc_fields_reported_by_name() {
    assert_eq!(unrecognized("WOXXHPBA--P----"), vec![Field::StaticDynamic]);
    assert_eq!(unrecognized("WOS-HPBA--X----"), vec![Field::GraphicType]);
    assert_eq!(unrecognized("WZ-------------"), vec![Field::Category]);

    let decoded = decode("WOXXHPBA--X----").unwrap();
    assert_eq!(decoded.unrecognized(), vec!["static/dynamic", "graphic type"]);
}

#[test]
fn test_metoc_trailing_positions_ignored() {
    let code = recognized("WOS-HPBA--P--ZZ");
    assert_eq!(code.encode().as_deref(), Some("WOS-HPBA--P----"));
}

#[test]
fn test_reference_codes_per_scheme() {
    let code = recognized("SFUPSK---------");
    assert_eq!(code.battle_dimension.as_deref(), Some(BATTLE_DIMENSION_SEA_SUBSURFACE));
    assert_eq!(code.function_id.as_deref(), Some("SK----"));

    let code = recognized("EFOPDG---------");
    assert_eq!(code.scheme, Some(Scheme::EmergencyManagement));
    assert_eq!(code.category.as_deref(), Some(CATEGORY_OPERATIONS));

    let code = recognized("OFVPD----------");
    assert_eq!(code.scheme, Some(Scheme::StabilityOperations));
    assert_eq!(code.category.as_deref(), Some(CATEGORY_VIOLENT_ACTIVITIES));
    assert_eq!(code.function_id.as_deref(), Some("D-----"));

    let code = recognized("GFGPGLB-------X");
    assert_eq!(code.category.as_deref(), Some(CATEGORY_COMMAND_CONTROL_GENERAL_MANEUVER));
    assert_eq!(code.order_of_battle.as_deref(), Some(ORDER_OF_BATTLE_CONTROL_MARKINGS));

    let code = recognized("IFPPSCD--------");
    assert_eq!(code.battle_dimension.as_deref(), Some(BATTLE_DIMENSION_SPACE));
    assert_eq!(code.function_id.as_deref(), Some("SCD---"));

    for sidc in ["SFUPSK---------", "EFOPDG---------", "OFVPD----------", "GFGPGLB-------X", "IFPPSCD--------"] {
        assert_eq!(recognized(sidc).encode().as_deref(), Some(sidc));
    }
}

#[test]
fn test_tactical_graphics_position_eleven() {
    let code = SymbolCode::new()
        .with_scheme(Scheme::TacticalGraphics)
        .with_standard_identity(STANDARD_IDENTITY_FRIEND)
        .with_echelon(ECHELON_PLATOON_DETACHMENT);
    assert_eq!(code.encode().as_deref(), Some("GF---------D---"));

    let decoded = recognized("GFGPGLB---ZD--X");
    assert_eq!(decoded.echelon.as_deref(), Some("D"));
    assert_eq!(decoded.encode().as_deref(), Some("GFGPGLB----D--X"));
}

#[test]
fn test_symbol_modifier_per_scheme() {
    // Warfighting accepts all four branches.
    for modifier in ["BD", "-D", "A-", "H-", "MO", "NS"] {
        let code = recognized(&format!("SFGPUCI---{modifier}---"));
        assert_eq!(code.symbol_modifier.as_deref(), Some(modifier));
    }
    // Stability operations: units/equipment and installation only.
    recognized("OFVPD-----AD---");
    recognized("OFVPD-----HB---");
    assert_eq!(unrecognized("OFVPD-----MO---"), vec![Field::SymbolModifier]);
    // Emergency management: installation and mobility only.
    recognized("EFOPDG----MO---");
    recognized("EFOPDG----H----");
    assert_eq!(unrecognized("EFOPDG----AD---"), vec![Field::SymbolModifier]);
    // Intelligence carries no modifier at all.
    assert_eq!(unrecognized("IFPPSCD---AD---"), vec![Field::SymbolModifier]);
}

#[test]
fn test_modifier_accessors_after_decode() {
    let code = recognized("SFGPUCI---DE---");
    assert!(code.is_headquarters());
    assert!(code.is_task_force());
    assert!(code.is_feint_dummy());
    assert_eq!(code.unit_echelon(), Some(ECHELON_COMPANY_BATTERY_TROOP));
}

#[test]
fn test_mask_tactical_graphics() {
    let code = SymbolCode::new()
        .with_scheme(Scheme::TacticalGraphics)
        .with_standard_identity(STANDARD_IDENTITY_FRIEND)
        .with_category(CATEGORY_COMMAND_CONTROL_GENERAL_MANEUVER)
        .with_status(STATUS_PRESENT)
        .with_function_id("GLB---")
        .with_symbol_modifier("AD")
        .with_echelon(ECHELON_PLATOON_DETACHMENT)
        .with_country_code("US")
        .with_order_of_battle(ORDER_OF_BATTLE_CONTROL_MARKINGS);
    assert_eq!(code.encode().as_deref(), Some("GFGPGLB----DUSX"));

    let masked = code.mask();
    assert_eq!(masked.scheme, Some(Scheme::TacticalGraphics));
    assert_eq!(masked.category.as_deref(), Some("G"));
    assert_eq!(masked.function_id.as_deref(), Some("GLB---"));
    for field in [
        Field::StandardIdentity,
        Field::Status,
        Field::Echelon,
        Field::SymbolModifier,
        Field::CountryCode,
        Field::OrderOfBattle,
    ] {
        assert_eq!(masked.get(field), None, "{field} survived the mask");
    }
    assert_eq!(code.encode_masked().as_deref(), Some("G-G-GLB--------"));
    // The source record is untouched.
    assert_eq!(code.country_code.as_deref(), Some("US"));
}

#[test]
fn test_lowercase_input_preserved() {
    let code = recognized("sfgp--------usa");
    assert_eq!(code.scheme, Some(Scheme::Warfighting));
    assert_eq!(code.standard_identity.as_deref(), Some("f"));
    assert_eq!(code.country_code.as_deref(), Some("us"));
    assert_eq!(code.encode().as_deref(), Some("Sfgp--------usa"));
}

#[test]
fn test_lowercase_scheme_encodes_upper_case() {
    let code = recognized("sh-------------");
    assert_eq!(code.scheme, Some(Scheme::Warfighting));
    assert_eq!(code.get(Field::Scheme), Some(SCHEME_WARFIGHTING));
    assert_eq!(code.encode().as_deref(), Some("Sh-------------"));
}

#[test]
fn test_empty_value_reads_back_absent() {
    let code = SymbolCode::new()
        .with_scheme(Scheme::Warfighting)
        .with_standard_identity(STANDARD_IDENTITY_FRIEND)
        .with_country_code("");
    let sidc = code.encode().unwrap();
    assert_eq!(sidc, "SF-------------");

    let decoded = recognized(&sidc);
    assert_eq!(decoded.country_code, None);
    assert_ne!(decoded, code);
    assert_eq!(decoded, SymbolCode { country_code: None, ..code });
}

#[test]
fn test_length_checks() {
    assert_eq!(decode("SFGP").unwrap_err(), SidcError::InvalidLength(4));
    assert_eq!(decode("").unwrap_err(), SidcError::InvalidLength(0));
    assert_eq!(decode("SFGP--------USA-").unwrap_err(), SidcError::InvalidLength(16));

    let decoded = parse("SFGP--------USA trailing").unwrap();
    assert!(decoded.is_recognized());
    assert_eq!(decoded.sidc, "SFGP--------USA");
    assert_eq!(decoded.code.order_of_battle.as_deref(), Some("A"));
    assert_eq!(parse("SFGP--------US").unwrap_err(), SidcError::InvalidLength(14));
}

#[test]
fn test_length_counts_characters() {
    let code = recognized("SFGP--------ÜSA");
    assert_eq!(code.country_code.as_deref(), Some("ÜS"));
    assert_eq!(code.order_of_battle.as_deref(), Some("A"));
}

#[test]
fn test_from_str_is_strict() {
    let code: SymbolCode = "SFGP--------USA".parse().unwrap();
    assert_eq!(code.country_code.as_deref(), Some("US"));

    let err = "SFGP--------USX".parse::<SymbolCode>().unwrap_err();
    assert_eq!(
        err,
        SidcError::UnrecognizedFields {
            fields: vec![Field::OrderOfBattle],
            code:   "SFGP--------USX".to_string(),
        },
    );
    assert_eq!(err.to_string(), "Unrecognized order of battle in SIDC \"SFGP--------USX\"");
    assert!(matches!("SFGP".parse::<SymbolCode>(), Err(SidcError::InvalidLength(4))));
}

#[test]
fn test_set_values_then_encode() {
    let mut code = decode("SFGPUCI--------").unwrap().code;
    code.set_values(&SymbolCode::new().with_standard_identity(STANDARD_IDENTITY_HOSTILE).with_country_code("RU"));
    assert_eq!(code.encode().as_deref(), Some("SHGPUCI-----RU-"));
}

#[test]
fn test_is_field_empty_on_decoded_values() {
    let code = recognized("GFGPGLB-------X");
    assert!(sidc::is_field_empty(code.echelon.as_deref()));
    assert!(!sidc::is_field_empty(code.function_id.as_deref()));
    assert!(sidc::is_field_empty(Some("------")));
}

#[test]
fn test_serde_roundtrip() {
    let code = recognized("SFGPUCI---BD--A");
    let json = serde_json::to_string(&code).unwrap();
    let back: SymbolCode = serde_json::from_str(&json).unwrap();
    assert_eq!(back, code);

    let sparse: SymbolCode =
        serde_json::from_str(r#"{"scheme":"Warfighting","standard_identity":"H"}"#).unwrap();
    assert_eq!(sparse.encode().as_deref(), Some("SH-------------"));
}
