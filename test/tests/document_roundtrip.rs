/// PROPERTY-BASED TESTS: conversion between text, blob and package
///
/// Key invariants:
/// 1. parse(serialize(d)) == d for every document with at least one piece
/// 2. decode_blob(id, encode_blob(d)) == d
/// 3. decode_package(encode_package(d)) carries d.id and d
/// 4. an entry a constructor accepts always reads back equal from its line

use bplocation_shared::{
    decode_blob, decode_package, encode_blob, encode_package, parse_lines, Biome, BlobCodec,
    BlueprintLocation, CompressionConfig, Format, GroupName, LineEntry, LocationConfig,
    PieceEntry, Quat, SnapPointEntry, TerrainModEntry, Vec3,
};
use proptest::prelude::*;

fn coordinate() -> impl Strategy<Value = f32> {
    -1000.0f32..1000.0f32
}

fn vec3_strategy() -> impl Strategy<Value = Vec3> {
    (coordinate(), coordinate(), coordinate()).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

fn quat_strategy() -> impl Strategy<Value = Quat> {
    (-1.0f32..1.0, -1.0f32..1.0, -1.0f32..1.0, -1.0f32..1.0)
        .prop_map(|(x, y, z, w)| Quat::from_xyzw(x, y, z, w))
}

/// Names and free text that include comment markers, separators, line
/// breaks and padding.
fn awkward_text() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => "[a-z_]{1,12}",
        1 => r"[#a-z_|\n\r\t ]{1,12}",
    ]
}

fn piece_strategy() -> impl Strategy<Value = PieceEntry> {
    (
        awkward_text(),
        vec3_strategy(),
        quat_strategy(),
        vec3_strategy(),
        proptest::option::of(r"[a-z=| \n]{0,10}"),
    )
        .prop_filter_map("piece text not storable", |(name, position, rotation, scale, extra)| {
            PieceEntry::with_extra(name, position, rotation, scale, extra).ok()
        })
}

fn terrain_strategy() -> impl Strategy<Value = TerrainModEntry> {
    (
        prop::sample::select(vec!["circle", " Square ", "hexagon", "#circle", "sq|uare"]),
        vec3_strategy(),
        -360.0f32..360.0,
        0.0f32..20.0,
        0.0f32..1.0,
        prop::sample::select(vec!["", "Paved", " dirt\t", "Dirt|Paved"]),
    )
        .prop_filter_map("terrain text not storable", |(shape, position, yaw, radius, smooth, paint)| {
            TerrainModEntry::new(shape, position, yaw, radius, smooth, paint).ok()
        })
}

fn biome_strategy() -> impl Strategy<Value = Biome> {
    prop_oneof![
        prop::sample::select(vec![
            Biome::NONE,
            Biome::MEADOWS,
            Biome::BLACK_FOREST.union(Biome::PLAINS),
            Biome::MISTLANDS,
        ]),
        any::<u32>().prop_map(Biome::from_bits),
    ]
}

fn config_strategy() -> impl Strategy<Value = LocationConfig> {
    (
        proptest::option::of(biome_strategy()),
        proptest::option::of(1i32..500),
        proptest::option::of(any::<bool>()),
        proptest::option::of("[a-z ]{0,10}".prop_map(|group| GroupName::new(group).unwrap())),
        proptest::option::of(coordinate()),
        proptest::option::of(coordinate()),
        proptest::option::of(0.0f32..1.0),
    )
        .prop_map(
            |(biome, quantity, unique, group, exterior_radius, min_altitude, forest_threshold_max)| {
                LocationConfig {
                    biome,
                    quantity,
                    unique,
                    group,
                    exterior_radius,
                    min_altitude,
                    forest_threshold_max,
                    ..LocationConfig::default()
                }
            },
        )
}

prop_compose! {
    fn document_strategy()(
        id in "[a-z][a-z0-9_]{0,10}",
        name in "[A-Za-z0-9 ]{0,16}",
        creator in "[A-Za-z0-9 ]{0,12}",
        description in "[ -~\n\t]{0,40}",
        pieces in prop::collection::vec(piece_strategy(), 1..8),
        snap_points in prop::collection::vec(vec3_strategy().prop_map(SnapPointEntry::new), 0..4),
        terrain_mods in prop::collection::vec(terrain_strategy(), 0..4),
        config in config_strategy(),
    ) -> BlueprintLocation {
        BlueprintLocation::new(id)
            .with_name(name)
            .with_creator(creator)
            .with_description(description)
            .with_pieces(pieces)
            .with_snap_points(snap_points)
            .with_terrain_mods(terrain_mods)
            .with_location_config(config)
    }
}

proptest! {
    /// Text lines reproduce the document field for field
    #[test]
    fn prop_text_roundtrip(doc in document_strategy()) {
        let lines = doc.to_lines().expect("document has pieces");
        let parsed = parse_lines(doc.id(), &lines, Format::BlueprintLocation).unwrap();
        prop_assert_eq!(parsed, doc);
    }

    /// Re-serializing a parsed document reproduces its lines exactly
    #[test]
    fn prop_lines_are_stable(doc in document_strategy()) {
        let lines = doc.to_lines().expect("document has pieces");
        let parsed = parse_lines(doc.id(), &lines, Format::BlueprintLocation).unwrap();
        prop_assert_eq!(parsed.to_lines().unwrap(), lines);
    }

    #[test]
    fn prop_blob_roundtrip(doc in document_strategy()) {
        let blob = encode_blob(&doc).unwrap().expect("document has pieces");
        prop_assert_eq!(decode_blob(doc.id(), &blob).unwrap(), doc);
    }

    #[test]
    fn prop_package_roundtrip(doc in document_strategy()) {
        let mut codec = BlobCodec::try_new(&CompressionConfig::default()).unwrap();
        let package = encode_package(&mut codec, &doc).unwrap().expect("document has pieces");
        let decoded = decode_package(&mut codec, &package).unwrap();
        prop_assert_eq!(decoded.id(), doc.id());
        prop_assert_eq!(decoded, doc);
    }

    /// A piece name or extra field is either refused up front or survives
    /// a trip through its own line and a whole document
    #[test]
    fn prop_constructed_pieces_reparse(
        name in r"[#a-z_|\n\r ]{1,12}",
        extra in proptest::option::of(r"[a-z|\n ]{0,6}"),
    ) {
        match PieceEntry::with_extra(name.clone(), Vec3::ONE, Quat::IDENTITY, Vec3::ONE, extra.clone()) {
            Ok(piece) => {
                prop_assert_eq!(PieceEntry::decode(piece.line()).unwrap(), piece.clone());
                let doc = BlueprintLocation::new("doc").with_pieces(vec![piece]);
                let lines = doc.to_lines().expect("document has pieces");
                prop_assert_eq!(parse_lines("doc", &lines, Format::BlueprintLocation).unwrap(), doc);
            }
            Err(_) => {
                let breaks = |text: &str| text.contains('\n') || text.contains('\r');
                prop_assert!(
                    name.trim().is_empty()
                        || name.starts_with('#')
                        || name.contains('|')
                        || breaks(&name)
                        || extra.as_deref().map_or(false, breaks)
                );
            }
        }
    }

    /// No pieces means no text, blob or package
    #[test]
    fn prop_empty_pieces_sentinel(id in "[a-z]{1,8}", description in "[a-z ]{0,20}") {
        let doc = BlueprintLocation::new(id).with_description(description);
        prop_assert!(doc.to_lines().is_none());
        prop_assert!(encode_blob(&doc).unwrap().is_none());
    }
}
