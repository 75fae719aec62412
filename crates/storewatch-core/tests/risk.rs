use storewatch_core::risk::{assess_risk, RISK_RULES};
use storewatch_core::types::RiskLevel;
use storewatch_core::yoy::YoyOutcome;

fn outcome(
    sales_amount: Option<f64>,
    sales_pct: Option<f64>,
    return_rate: Option<f64>,
) -> YoyOutcome {
    YoyOutcome {
        is_new_store: false,
        sales_amount,
        sales_pct,
        return_rate,
    }
}

#[test]
fn new_store_outranks_every_other_branch() {
    let yoy = YoyOutcome {
        is_new_store: true,
        sales_amount: None,
        sales_pct: None,
        return_rate: None,
    };
    assert_eq!(assess_risk(&yoy).0, RiskLevel::NewStore);
}

#[test]
fn any_missing_delta_yields_insufficient_data() {
    assert_eq!(
        assess_risk(&outcome(None, Some(5.0), Some(1.0))).0,
        RiskLevel::InsufficientData
    );
    assert_eq!(
        assess_risk(&outcome(Some(10.0), None, Some(1.0))).0,
        RiskLevel::InsufficientData
    );
    assert_eq!(
        assess_risk(&outcome(Some(10.0), Some(5.0), None)).0,
        RiskLevel::InsufficientData
    );
}

#[test]
fn falling_sales_with_rising_returns_is_high_risk() {
    // 900 against 1,000 while returns move 3% -> 6%.
    let (level, suggestion) = assess_risk(&outcome(Some(-100.0), Some(-10.0), Some(3.0)));
    assert_eq!(level, RiskLevel::HighRisk);
    assert!(suggestion.contains("fulfillment"));
}

#[test]
fn return_growth_outpacing_sales_growth_is_risk() {
    assert_eq!(
        assess_risk(&outcome(Some(50.0), Some(5.0), Some(6.0))).0,
        RiskLevel::Risk
    );
}

#[test]
fn sales_growth_keeping_pace_is_watch() {
    // 1,200 against 1,000 while returns move 3% -> 5%.
    assert_eq!(
        assess_risk(&outcome(Some(200.0), Some(20.0), Some(2.0))).0,
        RiskLevel::Watch
    );
    // Equal growth resolves to watch, not risk.
    assert_eq!(
        assess_risk(&outcome(Some(50.0), Some(5.0), Some(5.0))).0,
        RiskLevel::Watch
    );
}

#[test]
fn everything_else_is_normal() {
    // Sales up, returns flat or falling.
    assert_eq!(
        assess_risk(&outcome(Some(200.0), Some(20.0), Some(-1.0))).0,
        RiskLevel::Normal
    );
    assert_eq!(
        assess_risk(&outcome(Some(200.0), Some(20.0), Some(0.0))).0,
        RiskLevel::Normal
    );
    // Sales and returns both falling.
    assert_eq!(
        assess_risk(&outcome(Some(-100.0), Some(-10.0), Some(0.0))).0,
        RiskLevel::Normal
    );
    // Flat sales with rising returns never reaches the growth branches.
    assert_eq!(
        assess_risk(&outcome(Some(0.0), Some(0.0), Some(2.0))).0,
        RiskLevel::Normal
    );
}

#[test]
fn rule_table_keeps_its_published_order() {
    let order: Vec<RiskLevel> = RISK_RULES.iter().map(|rule| rule.level).collect();
    assert_eq!(
        order,
        vec![
            RiskLevel::NewStore,
            RiskLevel::InsufficientData,
            RiskLevel::HighRisk,
            RiskLevel::Risk,
            RiskLevel::Watch,
        ]
    );
}
