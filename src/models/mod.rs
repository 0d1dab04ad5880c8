mod badges;
mod calculator;
mod generator;
mod scanner;

pub use {
    badges::{
        Accent, BadgeTone, BadgeVariant, demand_tone, feature_accent, opportunity_difficulty_tone,
        resource_difficulty_tone, resource_kind_tone, strategy_difficulty_variant,
    },
    calculator::{
        CalculationResult, FALLBACK_SERVICE_NAME, IncomeInputs, RateComparison, calculate,
        parse_amount,
    },
    generator::{BudgetRange, StrategyGenerator, StrategyRequest, TimeCommitment, pick_strategy},
    scanner::{OpportunityScanner, ScanPhase, sample_catalog},
};
