use pretty_assertions::assert_eq;
use tests::{init_logging, models::*, row};
use tinymap::Mapper;

fn strict() -> Mapper<Person> {
    Mapper::<Person>::builder()
        .require_all_columns(true)
        .build()
        .unwrap()
}

#[test]
fn every_column_present() {
    init_logging();

    let row = row! {
        "id" => 1_i64,
        "name" => "jdoe",
        "first" => "Jane",
        "last" => "Doe",
    };

    let person = strict().map(&row).unwrap();
    assert_eq!(person.full_name.first, "Jane");
}

#[test]
fn missing_top_level_column() {
    let row = row! {
        "id" => 1_i64,
        "first" => "Jane",
        "last" => "Doe",
    };

    let err = strict().map(&row).unwrap_err();
    assert!(err.is_missing_column());
    assert_eq!(
        err.to_string(),
        "column `name` required by `Person` is not present in the row"
    );
}

#[test]
fn missing_embedded_column() {
    let row = row! {
        "id" => 1_i64,
        "name" => "jdoe",
        "first" => "Jane",
    };

    let err = strict().map(&row).unwrap_err();
    assert!(err.is_missing_column());
    assert_eq!(
        err.to_string(),
        "column `last` required by `Person` is not present in the row"
    );
}

#[test]
fn default_policy_allows_missing_columns() {
    let mapper = Mapper::<Person>::builder()
        .require_all_columns(false)
        .build()
        .unwrap();

    assert!(mapper.map(&row! { "id" => 1_i64 }).is_ok());
}
