use storewatch_core::brand::{map_brand, BRAND_RULES};
use storewatch_core::types::Brand;

#[test]
fn maps_keywords_case_insensitively() {
    assert_eq!(map_brand(Some("MLB官方旗舰店")), Some(Brand::Mlb));
    assert_eq!(map_brand(Some("mk童装旗舰店")), Some(Brand::MlbKids));
    assert_eq!(map_brand(Some("dx户外专营店")), Some(Brand::Discovery));
}

#[test]
fn first_table_entry_wins_on_keyword_overlap() {
    // Contains both "MLB" (entry 1) and "MK" (entry 2): entry order decides.
    assert_eq!(map_brand(Some("MK x MLB联名店")), Some(Brand::Mlb));
    // "MLBKIDS…" carries an embedded "MLB", so the earlier entry claims it.
    assert_eq!(map_brand(Some("MLBKIDS首尔店")), Some(Brand::Mlb));
}

#[test]
fn standalone_ml_code_requires_its_trailing_space() {
    assert_eq!(map_brand(Some("ML 首尔直营")), Some(Brand::Mlb));
    assert_eq!(map_brand(Some("MLSHOP")), None);
}

#[test]
fn unmatched_blank_and_missing_names_are_excluded() {
    assert_eq!(map_brand(Some("运营支援部")), None);
    assert_eq!(map_brand(Some("")), None);
    assert_eq!(map_brand(None), None);
}

#[test]
fn rule_table_is_ordered_as_published() {
    let brands: Vec<Brand> = BRAND_RULES.iter().map(|(brand, _)| *brand).collect();
    assert_eq!(brands, vec![Brand::Mlb, Brand::MlbKids, Brand::Discovery]);
}
