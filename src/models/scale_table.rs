use crate::consts::{MAX_EXPONENT, MIN_EXPONENT};
use crate::errors::AppResult;
use crate::models::internal::{Internal, TableEntry};
use crate::services::scale::traits::scale_strategy_trait::ScaleStrategyTrait;
use log::debug;

/// Exact decimal scales for every exponent in `MIN_EXPONENT..=MAX_EXPONENT`,
/// stored in ascending exponent order.
#[derive(Clone, Debug, Default)]
pub struct ScaleTable {
    entries: Vec<TableEntry>,
}

impl ScaleTable {
    /// Computes one entry per exponent with the given strategy.
    ///
    /// # Returns
    /// * `AppResult<ScaleTable>` - The filled table, or the first error the strategy reports.
    pub fn build(strategy: &dyn ScaleStrategyTrait) -> AppResult<Self> {
        let entries = (MIN_EXPONENT..=MAX_EXPONENT)
            .map(|exponent| {
                let internal = strategy.scale(exponent)?;
                debug!("2^-{exponent} -> {internal}");
                Ok(TableEntry { exponent, internal })
            })
            .collect::<AppResult<Vec<_>>>()?;
        Ok(Self { entries })
    }

    /// Returns the scale for `exponent`, or `None` if it is not tabulated.
    pub fn get(&self, exponent: u32) -> Option<&Internal> {
        let idx = exponent.checked_sub(MIN_EXPONENT)? as usize;
        self.entries
            .get(idx)
            .filter(|e| e.exponent == exponent)
            .map(|e| &e.internal)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TableEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::scale::closed_form_strategy::ClosedFormStrategy;

    #[test]
    fn table_covers_every_exponent_once_in_order() {
        // act
        let table = ScaleTable::build(&ClosedFormStrategy).unwrap();

        // assert
        assert_eq!(table.len(), 23);
        let exponents: Vec<u32> = table.iter().map(|e| e.exponent).collect();
        assert_eq!(exponents, (1..=23).collect::<Vec<u32>>());
    }

    #[test]
    fn get_returns_none_outside_the_table() {
        let table = ScaleTable::build(&ClosedFormStrategy).unwrap();

        assert!(table.get(0).is_none());
        assert!(table.get(24).is_none());
        assert_eq!(table.get(3), Some(&Internal(125, 3)));
        assert_eq!(table.get(23), Some(&Internal(11_920_928_955_078_125, 23)));
    }
}
