//! Lookup from period kind to calculator.

use std::collections::BTreeMap;
use std::fmt;

use tracing::debug;

use crate::calculator::PeriodCalculator;
use crate::day::DayCalculator;
use crate::error::PeriodError;
use crate::kind::PeriodKind;
use crate::month::MonthCalculator;
use crate::quarter::QuarterCalculator;
use crate::week::WeekCalculator;
use crate::year::YearCalculator;

/// An immutable table of period calculators keyed by [`PeriodKind`].
///
/// The table is assembled by value ([`PeriodRegistry::new`] or
/// [`PeriodRegistry::empty`] followed by [`PeriodRegistry::with`]) and is
/// read-only once shared. It is `Send + Sync` and needs no locking.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use kalends_period::{PeriodCalculatorExt, PeriodKind, PeriodRegistry};
///
/// let registry = PeriodRegistry::new();
/// let quarter = registry.get_provider(PeriodKind::Quarter).unwrap();
/// let date = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
/// assert_eq!(quarter.end_of_current(date).unwrap(), NaiveDate::from_ymd_opt(2024, 6, 30).unwrap());
/// ```
pub struct PeriodRegistry {
    providers: BTreeMap<PeriodKind, Box<dyn PeriodCalculator>>,
}

impl PeriodRegistry {
    /// Creates a registry with the built-in calculator for every [`PeriodKind`].
    pub fn new() -> Self {
        Self::empty()
            .with(PeriodKind::Day, DayCalculator)
            .with(PeriodKind::Week, WeekCalculator)
            .with(PeriodKind::Month, MonthCalculator)
            .with(PeriodKind::Quarter, QuarterCalculator)
            .with(PeriodKind::Year, YearCalculator)
    }

    /// Creates a registry with no calculators.
    pub fn empty() -> Self {
        Self {
            providers: BTreeMap::new(),
        }
    }

    /// Registers `calculator` for `kind`, replacing any previous entry.
    pub fn with<C: PeriodCalculator + 'static>(mut self, kind: PeriodKind, calculator: C) -> Self {
        if self.providers.insert(kind, Box::new(calculator)).is_some() {
            debug!(%kind, "replaced registered period calculator");
        }
        self
    }

    /// Returns the calculator registered for `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`PeriodError::NotImplemented`] if no calculator is registered.
    pub fn get_provider(&self, kind: PeriodKind) -> Result<&dyn PeriodCalculator, PeriodError> {
        self.providers
            .get(&kind)
            .map(|provider| &**provider)
            .ok_or(PeriodError::NotImplemented { kind })
    }

    /// Returns the registered kinds, finest first.
    pub fn kinds(&self) -> impl Iterator<Item = PeriodKind> + '_ {
        self.providers.keys().copied()
    }

    /// Returns the number of registered calculators.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Returns `true` if no calculator is registered.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl Default for PeriodRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PeriodRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PeriodRegistry")
            .field("kinds", &self.kinds().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::PeriodCalculatorExt;
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn default_registers_every_kind() {
        let registry = PeriodRegistry::default();
        assert_eq!(registry.len(), 5);
        assert_eq!(registry.kinds().collect::<Vec<_>>(), PeriodKind::ALL.to_vec());
        for kind in PeriodKind::ALL {
            assert!(registry.get_provider(kind).is_ok(), "{kind} missing");
        }
    }

    #[test]
    fn providers_match_their_kind() {
        let registry = PeriodRegistry::new();
        let date = d(2024, 5, 15);
        let expected = [
            (PeriodKind::Day, d(2024, 5, 15)),
            (PeriodKind::Week, d(2024, 5, 18)),
            (PeriodKind::Month, d(2024, 5, 31)),
            (PeriodKind::Quarter, d(2024, 6, 30)),
            (PeriodKind::Year, d(2024, 12, 31)),
        ];
        for (kind, end) in expected {
            let provider = registry.get_provider(kind).unwrap();
            assert_eq!(provider.end_of_current(date).unwrap(), end, "{kind}");
        }
    }

    #[test]
    fn empty_registry_is_not_implemented() {
        let registry = PeriodRegistry::empty();
        assert!(registry.is_empty());
        assert_eq!(
            registry.get_provider(PeriodKind::Week).unwrap_err(),
            PeriodError::NotImplemented {
                kind: PeriodKind::Week
            }
        );
    }

    #[test]
    fn with_replaces_existing_entry() {
        let registry = PeriodRegistry::empty()
            .with(PeriodKind::Month, DayCalculator)
            .with(PeriodKind::Month, MonthCalculator);
        assert_eq!(registry.len(), 1);
        let month = registry.get_provider(PeriodKind::Month).unwrap();
        assert_eq!(month.start_of_current(d(2024, 5, 15)).unwrap(), d(2024, 5, 1));
    }

    #[test]
    fn debug_lists_kinds() {
        let registry = PeriodRegistry::empty().with(PeriodKind::Year, YearCalculator);
        assert_eq!(format!("{registry:?}"), "PeriodRegistry { kinds: [Year] }");
    }

    #[test]
    fn registry_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<PeriodRegistry>();
    }
}
