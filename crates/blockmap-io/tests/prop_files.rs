use blockmap_blocks::{BlockRecord, MappingTable};
use blockmap_io::{load_records, write_mapping};
use proptest::prelude::*;
use std::fs;

const SAMPLE: &str = r#"[
  {"id": 0, "name": "air", "boundingBox": "empty"},
  {"id": 1, "name": "stone", "boundingBox": "block"},
  {"id": 2, "name": "granite", "boundingBox": "block"},
  {"id": 3, "name": "oak_planks", "boundingBox": "block"},
  {"id": 4, "name": "birch_planks", "boundingBox": "block"},
  {"id": 5, "name": "sand", "boundingBox": "block"},
  {"id": 6, "name": "red_sand", "boundingBox": "block"},
  {"id": 7, "name": "diamond_ore", "boundingBox": "block"},
  {"id": 8, "name": "oak_stairs", "boundingBox": "empty"},
  {"id": 9, "boundingBox": "block"},
  {"id": 10, "name": "", "boundingBox": "block"},
  {"id": 11, "name": "hard_stained_glass", "boundingBox": "block"},
  {"id": 12, "name": "netherrack", "boundingBox": "block"}
]"#;

#[test]
fn sample_file_to_mapping_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("blocks.json");
    let output = dir.path().join("mappings.json");
    fs::write(&input, SAMPLE).unwrap();

    let records = load_records(&input).unwrap();
    let table = MappingTable::from_records(&records);
    write_mapping(&output, &table).unwrap();

    assert_eq!(table.len(), 11);
    let expected = "{
  \"air\": null,
  \"stone\": \"stone\",
  \"granite\": \"stone\",
  \"oak_planks\": \"oak-planks\",
  \"birch_planks\": \"oak-planks\",
  \"sand\": \"sand\",
  \"red_sand\": \"sand-light\",
  \"diamond_ore\": null,
  \"oak_stairs\": null,
  \"hard_stained_glass\": null,
  \"netherrack\": \"shadowrock\"
}";
    assert_eq!(fs::read_to_string(&output).unwrap(), expected);
}

#[test]
fn failed_read_leaves_output_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("blocks.json");
    let output = dir.path().join("mappings.json");
    fs::write(&input, "[{\"name\": \"stone\",").unwrap();
    fs::write(&output, "previous").unwrap();

    assert!(load_records(&input).is_err());
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous");
}

fn arb_record() -> impl Strategy<Value = BlockRecord> {
    (
        proptest::option::of("[a-z_]{0,12}"),
        proptest::option::of(prop::sample::select(vec!["block", "empty"])),
    )
        .prop_map(|(name, bb)| BlockRecord {
            name,
            bounding_box: bb.map(str::to_string),
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    // Two runs over the same input produce byte-identical files.
    #[test]
    fn regenerating_is_byte_identical(records in prop::collection::vec(arb_record(), 0..24)) {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("mappings.json");
        write_mapping(&out, &MappingTable::from_records(&records)).unwrap();
        let first = fs::read(&out).unwrap();
        write_mapping(&out, &MappingTable::from_records(&records)).unwrap();
        let second = fs::read(&out).unwrap();
        prop_assert_eq!(first, second);
    }
}
