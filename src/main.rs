use crate::cli::Cli;
use crate::errors::{AppErrors, AppResult};
use crate::models::scale_table::ScaleTable;
use crate::services::decimal_service::render_fraction;
use crate::services::emit_service::write_table;
use crate::services::scale::closed_form_strategy::ClosedFormStrategy;
use crate::services::scale::refinement_strategy::RefinementStrategy;
use clap::Parser;
use log::{debug, info};
use std::io;

mod cli;
mod consts;
mod errors;
mod models;
mod services;

fn main() -> AppResult<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("Application started");

    let _args = Cli::parse();

    let table = ScaleTable::build(&ClosedFormStrategy)?;
    cross_check(&table, &ScaleTable::build(&RefinementStrategy)?)?;
    log_expansions(&table)?;

    let out = io::stdout();
    write_table(&table, out.lock())?;

    info!("Wrote {} table entries", table.len());
    Ok(())
}

/// Fails on the first exponent where the two tables differ.
fn cross_check(table: &ScaleTable, refined: &ScaleTable) -> AppResult<()> {
    if let Some((entry, _)) = table.iter().zip(refined.iter()).find(|(a, b)| a != b) {
        return Err(AppErrors::ScaleMismatch(entry.exponent));
    }
    Ok(())
}

fn log_expansions(table: &ScaleTable) -> AppResult<()> {
    if !log::log_enabled!(log::Level::Debug) {
        return Ok(());
    }
    for entry in table.iter() {
        let decimal = render_fraction(table, 1, entry.exponent)?;
        debug!("2^-{} = {decimal}", entry.exponent);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::internal::Internal;
    use crate::services::scale::traits::scale_strategy_trait::ScaleStrategyTrait;

    #[test]
    fn cross_check_accepts_matching_tables() {
        let closed = ScaleTable::build(&ClosedFormStrategy).unwrap();
        let refined = ScaleTable::build(&RefinementStrategy).unwrap();

        assert!(cross_check(&closed, &refined).is_ok());
    }

    struct OffByOneAt(u32);

    impl ScaleStrategyTrait for OffByOneAt {
        fn scale(&self, exponent: u32) -> AppResult<Internal> {
            let Internal(cur, inc) = ClosedFormStrategy.scale(exponent)?;
            if exponent == self.0 {
                return Ok(Internal(cur + 1, inc));
            }
            Ok(Internal(cur, inc))
        }
    }

    #[test]
    fn cross_check_reports_first_disagreeing_exponent() {
        let closed = ScaleTable::build(&ClosedFormStrategy).unwrap();
        let skewed = ScaleTable::build(&OffByOneAt(17)).unwrap();

        let res = cross_check(&closed, &skewed);

        assert!(matches!(res, Err(AppErrors::ScaleMismatch(17))));
    }
}
