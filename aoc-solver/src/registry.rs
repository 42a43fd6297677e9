//! Solver registry: year/day lookup and plugin collection

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::Solver;

// ============================================================================
// Storage layout
// ============================================================================

/// First Advent of Code year
pub const BASE_YEAR: u16 = 2015;
/// Number of years the flat storage can hold (2015-2034)
pub const MAX_YEARS: usize = 20;
pub const DAYS_PER_YEAR: usize = 25;
pub const CAPACITY: usize = MAX_YEARS * DAYS_PER_YEAR;

/// Flat index for year/day, `None` when outside the supported range
#[inline]
fn calc_index(year: u16, day: u8) -> Option<usize> {
    if year < BASE_YEAR || year >= BASE_YEAR + MAX_YEARS as u16 {
        return None;
    }
    if day == 0 || day > DAYS_PER_YEAR as u8 {
        return None;
    }
    let y = (year - BASE_YEAR) as usize;
    let d = (day - 1) as usize;
    Some(y * DAYS_PER_YEAR + d)
}

#[inline]
fn from_index(index: usize) -> (u16, u8) {
    let year = BASE_YEAR + (index / DAYS_PER_YEAR) as u16;
    let day = (index % DAYS_PER_YEAR) as u8 + 1;
    (year, day)
}

// ============================================================================
// Factories
// ============================================================================

/// Creates a solver instance by parsing the given input
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

/// Metadata for a registered solver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactoryInfo {
    pub year: u16,
    pub day: u8,
    /// Number of parts the solver supports
    pub parts: u8,
}

struct FactoryEntry {
    factory: SolverFactory,
    parts: u8,
}

/// Read-only storage of registered factories, ordered by year then day.
pub struct SolverFactoryStorage {
    entries: Vec<Option<FactoryEntry>>,
}

impl SolverFactoryStorage {
    /// Metadata of every registered solver in (year, day) order
    pub fn iter_info(&self) -> impl Iterator<Item = FactoryInfo> + '_ {
        self.entries.iter().enumerate().filter_map(|(i, entry)| {
            entry.as_ref().map(|e| {
                let (year, day) = from_index(i);
                FactoryInfo {
                    year,
                    day,
                    parts: e.parts,
                }
            })
        })
    }

    pub fn get_info(&self, year: u16, day: u8) -> Option<FactoryInfo> {
        calc_index(year, day)
            .and_then(|i| self.entries.get(i)?.as_ref())
            .map(|e| FactoryInfo {
                year,
                day,
                parts: e.parts,
            })
    }

    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.get_info(year, day).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|e| e.is_none())
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builds an immutable [`SolverRegistry`].
///
/// Registration fails on duplicates and on year/day pairs outside
/// 2015-2034 / 1-25.
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver, SolverRegistryBuilder, register_solver};
///
/// struct Echo;
///
/// impl AocParser for Echo {
///     type SharedData<'a> = &'a str;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input)
///     }
/// }
///
/// impl Solver for Echo {
///     const PARTS: u8 = 1;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, _part: u8) -> Result<String, SolveError> {
///         Ok(shared.to_string())
///     }
/// }
///
/// let mut builder = SolverRegistryBuilder::new();
/// register_solver!(builder, Echo, 2024, 16);
/// let registry = builder.build();
///
/// assert!(registry.storage().contains(2024, 16));
/// let mut solver = registry.create_solver(2024, 16, "#S.E#").unwrap();
/// assert_eq!(solver.solve(1).unwrap().answer, "#S.E#");
/// ```
pub struct SolverRegistryBuilder {
    entries: Vec<Option<FactoryEntry>>,
}

impl SolverRegistryBuilder {
    pub fn new() -> Self {
        Self {
            entries: (0..CAPACITY).map(|_| None).collect(),
        }
    }

    /// Register a factory for `year`/`day` that supports `parts` parts
    pub fn register<F>(
        mut self,
        year: u16,
        day: u8,
        parts: u8,
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        let index = calc_index(year, day).ok_or(RegistrationError::InvalidYearDay(year, day))?;

        if self.entries[index].is_some() {
            return Err(RegistrationError::DuplicateSolver(year, day));
        }

        log::debug!("registered solver {}/{:02} ({} parts)", year, day, parts);
        self.entries[index] = Some(FactoryEntry {
            factory: Box::new(factory),
            parts,
        });
        Ok(self)
    }

    /// Register every plugin submitted through `inventory`
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Register the plugins accepted by `filter`
    ///
    /// ```no_run
    /// # use aoc_solver::SolverRegistryBuilder;
    /// let registry = SolverRegistryBuilder::new()
    ///     .register_solver_plugins(|plugin| plugin.year == 2024 && plugin.tags.contains(&"grid"))
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_solver_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self = plugin.solver.register_with(self, plugin.year, plugin.day)?;
            }
        }
        Ok(self)
    }

    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            storage: SolverFactoryStorage {
                entries: self.entries,
            },
        }
    }
}

impl Default for SolverRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Immutable registry mapping year/day to solver factories
pub struct SolverRegistry {
    storage: SolverFactoryStorage,
}

impl SolverRegistry {
    /// Read-only access to the registered factories
    pub fn storage(&self) -> &SolverFactoryStorage {
        &self.storage
    }

    /// Parse `input` with the solver registered for `year`/`day`
    pub fn create_solver<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let index = calc_index(year, day).ok_or(SolverError::InvalidYearDay(year, day))?;

        let entry = self
            .storage
            .entries
            .get(index)
            .and_then(|e| e.as_ref())
            .ok_or(SolverError::NotFound(year, day))?;

        (entry.factory)(input).map_err(SolverError::ParseError)
    }
}

// ============================================================================
// Plugins
// ============================================================================

/// Object-safe registration hook, implemented for every [`Solver`].
///
/// `Solver` has associated types and cannot be stored as a trait object;
/// plugins keep a `&'static dyn RegisterableSolver` instead.
pub trait RegisterableSolver: Sync {
    /// Register this solver with `builder` for `year`/`day`
    fn register_with(
        &self,
        builder: SolverRegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<SolverRegistryBuilder, RegistrationError>;

    /// Number of parts this solver supports
    fn parts(&self) -> u8;
}

impl<S> RegisterableSolver for S
where
    S: Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: SolverRegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<SolverRegistryBuilder, RegistrationError> {
        builder.register(year, day, S::PARTS, move |input: &str| {
            let instance = SolverInstance::<S>::new(year, day, input)?;
            Ok(Box::new(instance))
        })
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

/// A solver submitted for automatic registration.
///
/// Normally produced by `#[derive(AutoRegisterSolver)]`:
///
/// ```ignore
/// #[derive(AocSolver, AutoRegisterSolver)]
/// #[aoc_solver(max_parts = 2)]
/// #[aoc(year = 2024, day = 16, tags = ["grid", "dijkstra"])]
/// pub struct Solver;
/// ```
pub struct SolverPlugin {
    pub year: u16,
    pub day: u8,
    pub solver: &'static dyn RegisterableSolver,
    /// Free-form labels used by the CLI's `--tags` filter
    pub tags: &'static [&'static str],
}

inventory::collect!(SolverPlugin);

/// Register a solver type with a mutable builder binding.
///
/// Panics on duplicate or out-of-range registration; meant for tests and
/// small programs that build a registry by hand.
#[macro_export]
macro_rules! register_solver {
    ($builder:expr, $solver:ty, $year:expr, $day:expr) => {
        $builder = $builder
            .register(
                $year,
                $day,
                <$solver as $crate::Solver>::PARTS,
                |input: &str| {
                    let instance = $crate::SolverInstance::<$solver>::new($year, $day, input)?;
                    Ok(::std::boxed::Box::new(instance))
                },
            )
            .expect("failed to register solver");
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolveError;
    use crate::solver::AocParser;

    struct Lines;

    impl AocParser for Lines {
        type SharedData<'a> = Vec<&'a str>;

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            if input.is_empty() {
                return Err(ParseError::MissingData("no lines".into()));
            }
            Ok(input.lines().collect())
        }
    }

    impl Solver for Lines {
        const PARTS: u8 = 2;

        fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
            match part {
                1 => Ok(shared.len().to_string()),
                _ => Err(SolveError::PartNotImplemented(part)),
            }
        }
    }

    #[test]
    fn test_index_roundtrip_covers_capacity() {
        for index in 0..CAPACITY {
            let (year, day) = from_index(index);
            assert_eq!(calc_index(year, day), Some(index));
        }
        assert_eq!(calc_index(2014, 1), None);
        assert_eq!(calc_index(2035, 1), None);
        assert_eq!(calc_index(2024, 0), None);
        assert_eq!(calc_index(2024, 26), None);
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let builder = Lines.register_with(SolverRegistryBuilder::new(), 2024, 16).unwrap();
        let result = Lines.register_with(builder, 2024, 16);
        assert!(matches!(
            result,
            Err(RegistrationError::DuplicateSolver(2024, 16))
        ));
    }

    #[test]
    fn test_out_of_range_registration_rejected() {
        let result = Lines.register_with(SolverRegistryBuilder::new(), 2040, 1);
        assert!(matches!(
            result,
            Err(RegistrationError::InvalidYearDay(2040, 1))
        ));
    }

    #[test]
    fn test_iter_info_is_ordered() {
        let builder = SolverRegistryBuilder::new();
        let builder = Lines.register_with(builder, 2024, 18).unwrap();
        let builder = Lines.register_with(builder, 2023, 17).unwrap();
        let builder = Lines.register_with(builder, 2024, 16).unwrap();
        let registry = builder.build();

        let keys: Vec<(u16, u8)> = registry
            .storage()
            .iter_info()
            .map(|info| (info.year, info.day))
            .collect();
        assert_eq!(keys, vec![(2023, 17), (2024, 16), (2024, 18)]);
        assert_eq!(registry.storage().len(), 3);
        assert_eq!(registry.storage().get_info(2024, 16).map(|i| i.parts), Some(2));
    }

    #[test]
    fn test_create_solver_errors() {
        let registry = Lines
            .register_with(SolverRegistryBuilder::new(), 2024, 16)
            .unwrap()
            .build();

        assert!(matches!(
            registry.create_solver(2024, 17, "x"),
            Err(SolverError::NotFound(2024, 17))
        ));
        assert!(matches!(
            registry.create_solver(1999, 1, "x"),
            Err(SolverError::InvalidYearDay(1999, 1))
        ));
        assert!(matches!(
            registry.create_solver(2024, 16, ""),
            Err(SolverError::ParseError(ParseError::MissingData(_)))
        ));
    }

    #[test]
    fn test_created_solver_checks_part_range() {
        let registry = Lines
            .register_with(SolverRegistryBuilder::new(), 2024, 16)
            .unwrap()
            .build();
        let mut solver = registry.create_solver(2024, 16, "a\nb\nc").unwrap();

        assert_eq!(solver.parts(), 2);
        assert_eq!(solver.solve(1).unwrap().answer, "3");
        assert!(matches!(solver.solve(2), Err(SolveError::PartNotImplemented(2))));
        assert!(matches!(solver.solve(3), Err(SolveError::PartOutOfRange(3))));
    }
}
