use std::fs;
use std::path::PathBuf;

use crate::errors::IngestError;
use crate::reader::{read_rows, SHOP_COLUMN};

fn fixture(path: &str) -> String {
    let base = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let full_path = base.join("tests/data").join(path);
    fs::read_to_string(&full_path)
        .unwrap_or_else(|err| panic!("failed to read fixture {}: {}", full_path.display(), err))
}

#[test]
fn parses_store_metrics_export() {
    let content = fixture("ec_return_rates.csv");
    let rows = read_rows(&content).expect("export parse failed");

    assert_eq!(rows.len(), 6);

    let first = &rows[0];
    assert_eq!(first.channel.as_deref(), Some("天猫"));
    assert_eq!(first.shop_name.as_deref(), Some("MLB官方旗舰店"));
    assert_eq!(first.sales_2025.as_deref(), Some("1,250,400"));
    assert_eq!(first.return_rate_2025.as_deref(), Some("5.2%"));

    // The padded dash sentinel survives the reader untouched.
    assert_eq!(rows[1].sales_2024.as_deref(), Some(" -   "));
    assert_eq!(rows[1].return_rate_2024.as_deref(), Some("-"));

    // Separator rows arrive as empty cells, not as missing ones.
    assert_eq!(rows[3].channel.as_deref(), Some(""));
}

#[test]
fn trims_incidental_header_whitespace() {
    let content = "\
  渠道  , 店铺 ,2025年净销售 , 2024年净销售,2025年YTD-退货率 , 2024年YTD-退货率
天猫,MLB旗舰店,100,200,3%,4%
";
    let rows = read_rows(content).expect("padded header parse failed");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].channel.as_deref(), Some("天猫"));
    assert_eq!(rows[0].sales_2024.as_deref(), Some("200"));
}

#[test]
fn missing_required_column_is_fatal() {
    let content = "\
渠道,2025年净销售,2024年净销售,2025年YTD-退货率,2024年YTD-退货率
天猫,100,200,3%,4%
";
    let err = read_rows(content).expect_err("missing column should be fatal");
    match err {
        IngestError::MissingColumn { column } => assert_eq!(column, SHOP_COLUMN),
        other => panic!("expected MissingColumn, got {other:?}"),
    }
}

#[test]
fn header_only_file_has_no_data_rows() {
    let content = "渠道,店铺,2025年净销售,2024年净销售,2025年YTD-退货率,2024年YTD-退货率\n";
    let err = read_rows(content).expect_err("header-only file should be rejected");
    assert!(matches!(err, IngestError::EmptyData));
}

#[test]
fn empty_file_is_missing_its_header() {
    let err = read_rows("").expect_err("empty file should be rejected");
    assert!(matches!(err, IngestError::MissingHeader));
}

#[test]
fn short_rows_become_missing_cells() {
    let content = "\
渠道,店铺,2025年净销售,2024年净销售,2025年YTD-退货率,2024年YTD-退货率
天猫,MLB旗舰店
";
    let rows = read_rows(content).expect("short row parse failed");
    assert_eq!(rows[0].shop_name.as_deref(), Some("MLB旗舰店"));
    assert_eq!(rows[0].sales_2025, None);
    assert_eq!(rows[0].return_rate_2024, None);
}
