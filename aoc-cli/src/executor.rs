//! Sequential executor for running solvers

use crate::config::Config;
use crate::error::CliError;
use crate::inputs::InputStore;
use aoc_solver::{DynSolver, SolverRegistry};
use chrono::TimeDelta;
use std::ops::RangeInclusive;
use std::rc::Rc;

/// Result from a single part
#[derive(Debug)]
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    /// Errors are shared between the parts of one day when input or parsing fails
    pub answer: Result<String, Rc<CliError>>,
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// Work item representing a solver to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Runs work items one after another, in year/day/part order
pub struct Executor {
    registry: SolverRegistry,
    inputs: InputStore,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(registry: SolverRegistry, config: &Config) -> Self {
        Self {
            registry,
            inputs: InputStore::new(config.input_dir.clone()),
            year_filter: config.year_filter,
            day_filter: config.day_filter,
            part_filter: config.part_filter,
        }
    }

    pub fn inputs(&self) -> &InputStore {
        &self.inputs
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.registry
            .storage()
            .iter_info()
            .filter(|info| self.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| self.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Work items whose input file is absent
    pub fn missing_inputs<'w>(&self, work_items: &'w [WorkItem]) -> Vec<&'w WorkItem> {
        work_items
            .iter()
            .filter(|w| !self.inputs.contains(w.year, w.day))
            .collect()
    }

    /// Filter parts based on the part filter and the solver's part count
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0,
            None => 1..=max_parts,
        }
    }

    /// Execute every work item, handing each part's result to `on_result`
    /// as soon as it is ready
    pub fn execute<F>(&self, work_items: &[WorkItem], mut on_result: F)
    where
        F: FnMut(SolverResult),
    {
        for work in work_items {
            self.run_solver(work, &mut on_result);
        }
    }

    fn run_solver<F>(&self, work: &WorkItem, on_result: &mut F)
    where
        F: FnMut(SolverResult),
    {
        let (year, day) = (work.year, work.day);

        let input = match self.inputs.get(year, day) {
            Ok(input) => input,
            Err(e) => {
                log::debug!("skipping {}/{:02}: {}", year, day, e);
                fail_parts(work, CliError::from(e), on_result);
                return;
            }
        };

        let mut solver = match self.registry.create_solver(year, day, &input) {
            Ok(solver) => solver,
            Err(e) => {
                fail_parts(work, CliError::from(e), on_result);
                return;
            }
        };

        let parse_duration = solver.parse_duration();
        for part in work.parts.clone() {
            let mut result = solve_part(work, part, &mut *solver);
            // Parsing is shared, so its time is reported on the first part only
            if part == *work.parts.start() {
                result.parse_duration = Some(parse_duration);
            }
            on_result(result);
        }
    }
}

/// Report the same error for every part of a work item
fn fail_parts<F>(work: &WorkItem, error: CliError, on_result: &mut F)
where
    F: FnMut(SolverResult),
{
    let error = Rc::new(error);
    for part in work.parts.clone() {
        on_result(SolverResult {
            year: work.year,
            day: work.day,
            part,
            answer: Err(Rc::clone(&error)),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        });
    }
}

fn solve_part(work: &WorkItem, part: u8, solver: &mut dyn DynSolver) -> SolverResult {
    let (answer, solve_duration) = match solver.solve(part) {
        Ok(result) => {
            let duration = result.duration();
            (Ok(result.answer), duration)
        }
        Err(e) => (
            Err(Rc::new(CliError::Solver(e.into()))),
            TimeDelta::zero(),
        ),
    };

    SolverResult {
        year: work.year,
        day: work.day,
        part,
        answer,
        parse_duration: None,
        solve_duration,
    }
}
