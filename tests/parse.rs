// tests/parse.rs
use boas_shop::feed::parse::{parse, parse_manual, parse_primary};

#[test]
fn header_row_names_the_fields() {
    let rows = parse("Name,SKU,Size\nSamba,B75806,41\n");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get("Name"), Some("Samba"));
    assert_eq!(rows[0].get("SKU"), Some("B75806"));
    assert_eq!(rows[0].get("Size"), Some("41"));
    assert_eq!(rows[0].get("notes"), None);
}

#[test]
fn quoted_commas_stay_in_one_field() {
    let rows = parse("Name,Size,Price + ship\n\"Air Max 90, White\",\"42,5\",\"100,00 €\"\n");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get("Name"), Some("Air Max 90, White"));
    assert_eq!(rows[0].get("Size"), Some("42,5"));
    assert_eq!(rows[0].get("Price + ship"), Some("100,00 €"));
}

#[test]
fn values_are_trimmed_and_blank_lines_skipped() {
    let rows = parse("Name,Size\n  Samba  , 41 \n\n\nGazelle,40\n");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].get("Name"), Some("Samba"));
    assert_eq!(rows[0].get("Size"), Some("41"));
    assert_eq!(rows[1].get("Name"), Some("Gazelle"));
}

#[test]
fn short_rows_leave_trailing_columns_absent() {
    let rows = parse_primary("Name,Size,notes\nSamba,41\n").unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get("Size"), Some("41"));
    assert_eq!(rows[0].get("notes"), None);
}

#[test]
fn empty_and_header_only_feeds_have_no_rows() {
    assert!(parse("").is_empty());
    assert!(parse("Name,SKU,Size\n").is_empty());
    assert!(parse("\n\n").is_empty());
}

#[test]
fn manual_split_is_positional() {
    let rows = parse_manual("Name, Size ,notes\r\nSamba,41\nGazelle,40,hold\n");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].get("Name"), Some("Samba"));
    assert_eq!(rows[0].get("Size"), Some("41"));
    // missing trailing values become empty strings
    assert_eq!(rows[0].get("notes"), Some(""));
    assert_eq!(rows[1].get("notes"), Some("hold"));
}

#[test]
fn manual_split_does_not_understand_quotes() {
    let rows = parse_manual("Name,Size\n\"Air Max, White\",42\n");
    assert_eq!(rows[0].get("Name"), Some("\"Air Max"));
    assert_eq!(rows[0].get("Size"), Some("White\""));
}

#[test]
fn manual_split_needs_a_data_line() {
    assert!(parse_manual("Name,Size").is_empty());
    assert!(parse_manual("").is_empty());
}
