use crate::types::RiskLevel;
use crate::yoy::YoyOutcome;

/// One branch of the risk decision tree.
pub struct RiskRule {
    pub level: RiskLevel,
    pub suggestion: &'static str,
    matches: fn(&YoyOutcome) -> bool,
}

impl RiskRule {
    pub fn applies(&self, yoy: &YoyOutcome) -> bool {
        (self.matches)(yoy)
    }
}

/// Ordered decision table; the first applicable rule wins. Rule order is
/// load-bearing: new-store and missing-data checks shield the numeric
/// branches, and the high-risk branch is consulted before the growth
/// comparisons.
///
/// TODO: confirm with the product owner whether comparing return-rate
/// points against relative sales growth is intended; the last two rules
/// inherit that comparison unchanged from the operations ruleset.
pub const RISK_RULES: &[RiskRule] = &[
    RiskRule {
        level: RiskLevel::NewStore,
        suggestion: "New store without a prior-year baseline; monitor operational quality and the return-rate trend",
        matches: |yoy| yoy.is_new_store,
    },
    RiskRule {
        level: RiskLevel::InsufficientData,
        suggestion: "Incomplete metrics; supplement the missing sales or return-rate figures",
        matches: |yoy| {
            yoy.sales_amount.is_none() || yoy.sales_pct.is_none() || yoy.return_rate.is_none()
        },
    },
    RiskRule {
        level: RiskLevel::HighRisk,
        suggestion: "Sales fell while the return rate rose; inspect product quality, fulfillment lead time, sizing accuracy and the return policy",
        matches: |yoy| {
            yoy.sales_amount.is_some_and(|amount| amount < 0.0)
                && yoy.return_rate.is_some_and(|rate| rate > 0.0)
        },
    },
    RiskRule {
        level: RiskLevel::Risk,
        suggestion: "Return-rate growth is outpacing sales growth; review product quality, logistics service and the after-sales policy",
        matches: |yoy| match (yoy.sales_pct, yoy.return_rate) {
            (Some(pct), Some(rate)) => pct > 0.0 && rate > 0.0 && rate > pct,
            _ => false,
        },
    },
    RiskRule {
        level: RiskLevel::Watch,
        suggestion: "Sales growth is outpacing return-rate growth; keep monitoring the return-rate trend",
        matches: |yoy| match (yoy.sales_pct, yoy.return_rate) {
            (Some(pct), Some(rate)) => pct > 0.0 && rate > 0.0 && rate <= pct,
            _ => false,
        },
    },
];

/// Classify one store's YOY outcome. Total: anything the table does not
/// claim is normal.
pub fn assess_risk(yoy: &YoyOutcome) -> (RiskLevel, &'static str) {
    for rule in RISK_RULES {
        if rule.applies(yoy) {
            return (rule.level, rule.suggestion);
        }
    }
    (RiskLevel::Normal, "Maintain the current operating strategy")
}
