use crate::types::Brand;

/// Ordered brand keyword table, scanned top to bottom; the first entry with
/// a substring hit wins, so entry order is part of the observable contract.
/// DV/SP support shops are deliberately absent and fall through to `None`.
/// "ML " keeps its trailing space: it targets the standalone ML shop code.
pub const BRAND_RULES: &[(Brand, &[&str])] = &[
    (Brand::Mlb, &["MLB", "MM", "ML "]),
    (Brand::MlbKids, &["MK", "MLBKIDS"]),
    (Brand::Discovery, &["DX"]),
];

/// Map a free-text shop name to its brand, case-insensitively. Unmatched,
/// blank, or missing names yield `None` and are excluded by the caller.
pub fn map_brand(shop_name: Option<&str>) -> Option<Brand> {
    let upper = shop_name?.to_uppercase();
    BRAND_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| upper.contains(keyword)))
        .map(|(brand, _)| *brand)
}
