//! Unit tests for location hash parsing.

use rstest::rstest;

use shelfmark::types::route::Route;

#[rstest]
#[case("",            Route::Index(1))]
#[case("#",           Route::Index(1))]
#[case("#/",          Route::Index(1))]
#[case("#/1",         Route::Index(1))]
#[case("#/2",         Route::Index(2))]
#[case("#/12",        Route::Index(12))]
#[case("#/0",         Route::Index(1))]
#[case("#/-3",        Route::Index(1))]
#[case("#/7abc",      Route::Index(7))]
#[case("#/abc",       Route::Index(1))]
#[case("#/ 4 ",       Route::Index(4))]
#[case("#/submitted", Route::Submitted)]
#[case("#submitted",  Route::Submitted)]
#[case("#/Submitted", Route::Index(1))]
fn test_parse(#[case] hash: &str, #[case] expected: Route) {
    assert_eq!(Route::parse(hash), expected, "parsing {hash:?}");
}

#[rstest]
#[case(Route::Index(1), "#/1")]
#[case(Route::Index(3), "#/3")]
#[case(Route::Submitted, "#/submitted")]
fn test_to_hash(#[case] route: Route, #[case] expected: &str) {
    assert_eq!(route.to_hash(), expected);
    assert_eq!(Route::parse(expected), route);
}

#[test]
fn test_default_is_first_page() {
    assert_eq!(Route::default(), Route::Index(1));
    assert_eq!(Route::default().page(), Some(1));
    assert_eq!(Route::Submitted.page(), None);
}
