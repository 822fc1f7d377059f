#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;

// === Default table ===

#[test]
fn default_table_covers_every_native_type() {
    let map = TypeMap::default();
    for native in NativeType::ALL {
        assert_eq!(
            map.lookup(native.short_name()),
            Some(&native.column_type()),
            "{native:?}"
        );
    }
}

#[test]
fn canonical_names() {
    let map = TypeMap::default();
    let resolved: Vec<String> = [
        "int",
        "float",
        "bool",
        "Decimal",
        "date",
        "datetime",
        "time",
        "timedelta",
        "None",
        "bytes",
        "str",
    ]
    .iter()
    .map(|a| map.resolve(a).unwrap_or_default())
    .collect();
    assert_eq!(
        resolved,
        vec![
            "INTEGER",
            "FLOAT",
            "BOOLEAN",
            "NUMERIC",
            "DATE",
            "TIMESTAMP WITHOUT TIME ZONE",
            "TIME WITHOUT TIME ZONE",
            "INTERVAL",
            "NULL",
            "BYTEA",
            "VARCHAR",
        ]
    );
}

// === Lookup normalization ===

#[test]
fn qualified_names_fall_back_to_last_segment() {
    let map = TypeMap::default();
    assert_eq!(map.lookup("datetime.date"), Some(&ColumnType::Date));
    assert_eq!(map.lookup("dt.date"), Some(&ColumnType::Date));
    assert_eq!(map.lookup("decimal.Decimal"), Some(&ColumnType::NUMERIC));
}

#[test]
fn string_annotations_are_unquoted() {
    let map = TypeMap::default();
    assert_eq!(map.lookup("'int'"), Some(&ColumnType::Integer));
    assert_eq!(map.lookup("\"bytes\""), Some(&ColumnType::LargeBinary));
}

#[test]
fn exact_key_wins_over_fallback() {
    let mut map = TypeMap::default();
    map.insert("mymod.date", ColumnType::Text);
    assert_eq!(map.lookup("mymod.date"), Some(&ColumnType::Text));
    assert_eq!(map.lookup("other.date"), Some(&ColumnType::Date));
}

#[test]
fn insert_extends_and_replaces() {
    let mut map = TypeMap::default();
    assert_eq!(map.lookup("UUID"), None);
    assert_eq!(map.insert("UUID", ColumnType::Text), None);
    assert_eq!(map.lookup("UUID"), Some(&ColumnType::Text));
    assert_eq!(
        map.insert("int", ColumnType::BigInteger),
        Some(ColumnType::Integer)
    );
    assert_eq!(map.resolve("int"), Ok("BIGINT".to_string()));
}

// === Failures and return special case ===

#[test]
fn unmapped_annotation_is_unresolved() {
    let map = TypeMap::default();
    assert_eq!(
        map.resolve("list[int]"),
        Err(TypeError::Unresolved {
            annotation: "list[int]".to_string()
        })
    );
}

#[test]
fn unresolved_message_names_the_override_path() {
    let err = TypeMap::default().resolve("Money").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("`Money`"));
    assert!(message.contains("override"));
}

#[test]
fn none_return_is_empty() {
    let map = TypeMap::default();
    assert_eq!(map.resolve_return("None"), Ok(String::new()));
    assert_eq!(map.resolve_return("NoneType"), Ok(String::new()));
    assert_eq!(map.resolve_return("int"), Ok("INTEGER".to_string()));
}

proptest! {
    #[test]
    fn any_module_prefix_resolves_like_the_bare_name(
        module in "[a-z_][a-z0-9_]{0,8}",
        idx in 0usize..NativeType::ALL.len(),
    ) {
        let native = NativeType::ALL[idx];
        let map = TypeMap::default();
        let qualified = format!("{module}.{}", native.short_name());
        prop_assert_eq!(map.lookup(&qualified), map.lookup(native.short_name()));
    }
}
