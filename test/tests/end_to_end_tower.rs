/// Integration tests for the line format: the Tower example, header rules
/// and format variants.

use bplocation_shared::{
    decode_blob, encode_blob, parse_lines, serialize_lines, DocumentError, EntryError, Format,
    LocationConfigOutput, Quat, SerializeOptions, Vec3,
};
use bplocation_test::{init_logger, ring_location, tower_lines, TOWER_LINES};

#[test]
fn tower_parses_and_serializes_back() {
    init_logger();
    let doc = parse_lines("tower", TOWER_LINES, Format::BlueprintLocation).unwrap();

    assert_eq!(doc.id(), "tower");
    assert_eq!(doc.name(), "Tower");
    assert_eq!(doc.creator(), "Bob");
    assert_eq!(doc.description(), "A tower");
    assert_eq!(doc.piece_entries().len(), 1);
    let piece = &doc.piece_entries()[0];
    assert_eq!(piece.name(), "wood_beam");
    assert_eq!(piece.position(), Vec3::ZERO);
    assert_eq!(piece.rotation(), Quat::IDENTITY);
    assert_eq!(piece.scale(), Vec3::ONE);

    assert_eq!(doc.to_lines().unwrap(), TOWER_LINES.to_vec());
}

#[test]
fn tower_file_text_with_crlf_and_blank_lines() {
    let text = format!("\r\n{}\r\n\r\n", tower_lines().replace('\n', "\r\n"));
    let doc = parse_lines("tower", text.lines(), Format::BlueprintLocation).unwrap();
    assert_eq!(doc.to_lines().unwrap(), TOWER_LINES.to_vec());
}

#[test]
fn tower_survives_blob() {
    let doc = parse_lines("tower", TOWER_LINES, Format::BlueprintLocation).unwrap();
    let blob = encode_blob(&doc).unwrap().unwrap();
    assert_eq!(decode_blob("tower", &blob).unwrap(), doc);
}

#[test]
fn metadata_header_after_section_switch_sets_name() {
    let lines = [
        "#SnapPoints",
        "0,1,0",
        "#Name:Foo",
        "1,1,0",
        "#Pieces",
        "wood_beam|0,0,0|0,0,0,1|1,1,1",
    ];
    let doc = parse_lines("foo_file", lines, Format::BlueprintLocation).unwrap();
    assert_eq!(doc.name(), "Foo");
    assert_eq!(doc.snap_points().len(), 2);
}

#[test]
fn missing_name_defaults_to_id() {
    let lines = ["#Creator:Bob", "wood_beam|0,0,0|0,0,0,1|1,1,1"];
    let doc = parse_lines("hut", lines, Format::BlueprintLocation).unwrap();
    assert_eq!(doc.name(), "hut");
}

#[test]
fn too_few_fields_is_malformed() {
    let lines = ["#Name:Tower", "#Pieces", "wood_beam|0,0,0|0,0,0,1"];
    let result = parse_lines("tower", lines, Format::BlueprintLocation);
    assert!(matches!(
        result,
        Err(DocumentError::MalformedEntry(EntryError::WrongFieldCount { .. }))
    ));
}

#[test]
fn unknown_hash_lines_are_comments() {
    let lines = [
        "#Name:Tower",
        "# built on day 12",
        "#Pieces",
        "#wood_beam|9,9,9|0,0,0,1|1,1,1",
        "wood_beam|0,0,0|0,0,0,1|1,1,1",
    ];
    let doc = parse_lines("tower", lines, Format::BlueprintLocation).unwrap();
    assert_eq!(doc.piece_entries().len(), 1);
}

#[test]
fn empty_sections_are_not_written() {
    let doc = parse_lines("tower", TOWER_LINES, Format::BlueprintLocation).unwrap();
    let lines = doc.to_lines().unwrap();
    assert!(!lines.iter().any(|line| line == "#SnapPoints" || line == "#Terrain"));
}

#[test]
fn sections_are_written_in_fixed_order() {
    let lines = ring_location("ring").to_lines().unwrap();
    let position = |header: &str| lines.iter().position(|line| line == header).unwrap();
    assert!(position("#Terrain") < position("#Pieces"));
    assert_eq!(&lines[..3], &["#Name:Stone ring", "#Creator:Ann", "#Description:\"\""]);
}

#[test]
fn legacy_format_treats_new_headers_as_comments() {
    let lines = [
        "#Name:Shed",
        "#SnapPoints",
        "wood_wall|0,0,0|0,0,0,1|1,1,1",
        "#Terrain",
        "wood_wall|1,0,0|0,0,0,1|1,1,1",
    ];
    let doc = parse_lines("shed", lines, Format::Blueprint).unwrap();
    assert!(doc.snap_points().is_empty());
    assert!(doc.terrain_mods().is_empty());
    assert_eq!(doc.piece_entries().len(), 2);
}

#[test]
fn legacy_output_drops_terrain() {
    let options = SerializeOptions {
        format: Format::Blueprint,
        ..SerializeOptions::default()
    };
    let lines = serialize_lines(&ring_location("ring"), &options).unwrap();
    assert!(!lines.iter().any(|line| line == "#Terrain"));
    assert!(lines.iter().any(|line| line == "#Pieces"));
}

#[test]
fn location_options_roundtrip_unless_omitted() {
    let lines = [
        "#Name:Camp",
        "#Location",
        "Biome: Meadows, BlackForest",
        "Quantity: 20",
        "SpawnChance: 12",
        "#Pieces",
        "fire_pit|0,0,0|0,0,0,1|1,1,1",
    ];
    let doc = parse_lines("camp", lines, Format::BlueprintLocation).unwrap();
    assert_eq!(doc.location_config().quantity, Some(20));

    let written = doc.to_lines().unwrap();
    assert!(written.contains(&"Biome: Meadows, BlackForest".to_string()));
    assert!(!written.iter().any(|line| line.starts_with("SpawnChance")));
    let reparsed = parse_lines("camp", &written, Format::BlueprintLocation).unwrap();
    assert_eq!(reparsed, doc);

    let omitted = doc
        .to_lines_with(&SerializeOptions {
            location_config: LocationConfigOutput::Omit,
            ..SerializeOptions::default()
        })
        .unwrap();
    assert!(!omitted.iter().any(|line| line == "#Location"));
}
