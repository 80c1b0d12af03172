pub mod scale_strategy_trait;
