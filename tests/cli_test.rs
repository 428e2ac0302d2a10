#![cfg(feature = "std")]

use fifteen::render::parse_tile;

#[test]
fn test_parse_tile_accepts_labels() {
    assert_eq!(parse_tile("1"), Some(1));
    assert_eq!(parse_tile("15"), Some(15));
    assert_eq!(parse_tile("  7 \n"), Some(7));
}

#[test]
fn test_parse_tile_rejects_garbage() {
    assert_eq!(parse_tile("0"), None);
    assert_eq!(parse_tile("16"), None);
    assert_eq!(parse_tile("-3"), None);
    assert_eq!(parse_tile("abc"), None);
    assert_eq!(parse_tile(""), None);
}
