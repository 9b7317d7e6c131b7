//! Guards for the exhaustive searches.
//!
//! [Longest path](crate::algo::LongestPath) and [tour](crate::algo::Tour)
//! enumerate simple paths or permutations and take exponential or factorial
//! time in the worst case. [`Limits`] bounds them by a number of search steps,
//! a wall-clock deadline and, for tours, the number of cities.

use std::time::{Duration, Instant};

use thiserror::Error;

/// Configuration of the search guards.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use citynet::core::Limits;
///
/// let limits = Limits::default()
///     .max_expansions(100_000)
///     .deadline(Duration::from_millis(250));
///
/// assert_eq!(limits.get_max_expansions(), Some(100_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    max_expansions: Option<u64>,
    deadline: Option<Duration>,
    max_tour_cities: Option<usize>,
}

impl Limits {
    pub const DEFAULT_MAX_EXPANSIONS: u64 = 10_000_000;
    pub const DEFAULT_MAX_TOUR_CITIES: usize = 10;

    /// No guards at all.
    pub fn unbounded() -> Self {
        Self {
            max_expansions: None,
            deadline: None,
            max_tour_cities: None,
        }
    }

    /// Maximum number of search steps (paths extended by one city) per query.
    pub fn max_expansions(self, max_expansions: u64) -> Self {
        Self {
            max_expansions: Some(max_expansions),
            ..self
        }
    }

    /// Maximum wall-clock time per query.
    pub fn deadline(self, deadline: Duration) -> Self {
        Self {
            deadline: Some(deadline),
            ..self
        }
    }

    /// Maximum number of cities in a single tour request.
    pub fn max_tour_cities(self, max_tour_cities: usize) -> Self {
        Self {
            max_tour_cities: Some(max_tour_cities),
            ..self
        }
    }

    pub fn get_max_expansions(&self) -> Option<u64> {
        self.max_expansions
    }

    pub fn get_deadline(&self) -> Option<Duration> {
        self.deadline
    }

    pub fn get_max_tour_cities(&self) -> Option<usize> {
        self.max_tour_cities
    }

    pub(crate) fn check_tour_size(&self, cities: usize) -> Result<(), LimitExceeded> {
        match self.max_tour_cities {
            Some(max) if cities > max => Err(LimitExceeded::TourCities { max }),
            _ => Ok(()),
        }
    }

    pub(crate) fn budget(&self) -> Budget {
        Budget {
            remaining: self.max_expansions,
            max_expansions: self.max_expansions.unwrap_or_default(),
            deadline: self
                .deadline
                .and_then(|d| Instant::now().checked_add(d).map(|at| (at, d))),
            ticks: 0,
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_expansions: Some(Self::DEFAULT_MAX_EXPANSIONS),
            deadline: None,
            max_tour_cities: Some(Self::DEFAULT_MAX_TOUR_CITIES),
        }
    }
}

/// A search guard was hit before the search finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LimitExceeded {
    #[error("search limit exceeded after {max} steps")]
    Expansions { max: u64 },
    #[error("search deadline of {}ms exceeded", .max.as_millis())]
    Deadline { max: Duration },
    #[error("too many cities (at most {max} allowed)")]
    TourCities { max: usize },
}

/// Running state of the guards during one search.
#[derive(Debug)]
pub(crate) struct Budget {
    remaining: Option<u64>,
    max_expansions: u64,
    deadline: Option<(Instant, Duration)>,
    ticks: u64,
}

impl Budget {
    // Reading the clock on every step would dominate small searches.
    const CLOCK_INTERVAL: u64 = 1024;

    /// Accounts for one search step.
    pub fn tick(&mut self) -> Result<(), LimitExceeded> {
        self.ticks += 1;

        if let Some(remaining) = self.remaining.as_mut() {
            if *remaining == 0 {
                return Err(LimitExceeded::Expansions {
                    max: self.max_expansions,
                });
            }
            *remaining -= 1;
        }

        if let Some((at, max)) = self.deadline {
            if self.ticks % Self::CLOCK_INTERVAL == 0 && Instant::now() >= at {
                return Err(LimitExceeded::Deadline { max });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn default_guards() {
        let limits = Limits::default();
        assert_eq!(
            limits.get_max_expansions(),
            Some(Limits::DEFAULT_MAX_EXPANSIONS)
        );
        assert_eq!(limits.get_deadline(), None);
        assert_eq!(
            limits.get_max_tour_cities(),
            Some(Limits::DEFAULT_MAX_TOUR_CITIES)
        );
    }

    #[test]
    fn expansions_exhausted() {
        let limits = Limits::unbounded().max_expansions(3);
        let mut budget = limits.budget();

        for _ in 0..3 {
            assert_matches!(budget.tick(), Ok(()));
        }
        assert_matches!(
            budget.tick(),
            Err(LimitExceeded::Expansions { max: 3 })
        );
    }

    #[test]
    fn deadline_passed() {
        let limits = Limits::unbounded().deadline(Duration::ZERO);
        let mut budget = limits.budget();

        let result = (0..Budget::CLOCK_INTERVAL).try_for_each(|_| budget.tick());
        assert_matches!(result, Err(LimitExceeded::Deadline { .. }));
    }

    #[test]
    fn unbounded_never_fails() {
        let limits = Limits::unbounded();
        let mut budget = limits.budget();

        for _ in 0..10_000 {
            assert_matches!(budget.tick(), Ok(()));
        }
        assert_matches!(limits.check_tour_size(usize::MAX), Ok(()));
    }

    #[test]
    fn tour_size() {
        let limits = Limits::default().max_tour_cities(3);
        assert_matches!(limits.check_tour_size(3), Ok(()));
        assert_matches!(
            limits.check_tour_size(4),
            Err(LimitExceeded::TourCities { max: 3 })
        );
    }
}
