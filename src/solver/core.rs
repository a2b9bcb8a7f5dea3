use std::time::Instant;

use log::{debug, info, trace, warn};

use crate::engine::{
    Arrangement, Evaluation, Evaluator, OperatorMultiset, PairSplit, SkeletonCatalogue, rank,
    render_postfix, sweep_splits,
};
use crate::game::{SourceNumbers, Target};
use crate::solver::config::SolverConfig;
use crate::solver::errors::SolverError;
use crate::solver::pool::{WorkerPool, WorkerSlot};
use crate::solver::report::{
    NoProgress, Progress, SearchObserver, SearchOutcome, SearchReport, Solution,
};

/// Searches the postfix space of a game for an expression equal to its target.
///
/// Sweep order is ranked operator bag, then arrangement of that bag, then
/// batches of pair-splits, then skeletons. Within a batch the lowest-index
/// hit wins, so a given game and worker count always report the same
/// solution.
pub struct CountdownSolver {
    config: SolverConfig,
    skeletons: &'static SkeletonCatalogue,
    ranking: Vec<OperatorMultiset>,
    pool: WorkerPool,
}

impl CountdownSolver {
    /// # Errors
    ///
    /// Returns an error if the configuration asks for no workers or no time,
    /// or if the worker threads cannot be started.
    pub fn new(config: SolverConfig) -> Result<Self, SolverError> {
        if config.workers == 0 {
            return Err(SolverError::InvalidConfig(
                "at least one worker is required".to_string(),
            ));
        }
        if config.time_limit.is_zero() {
            return Err(SolverError::InvalidConfig(
                "time limit must be greater than zero".to_string(),
            ));
        }

        let skeletons = SkeletonCatalogue::global();
        let ranking = rank(config.mode);
        let pool = WorkerPool::new(config.workers)?;
        debug!(
            "Solver ready: {} workers, {:?} mode, {} operator bags",
            config.workers,
            config.mode,
            ranking.len()
        );

        Ok(Self {
            config,
            skeletons,
            ranking,
            pool,
        })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Operator bags in sweep order.
    pub fn ranking(&self) -> &[OperatorMultiset] {
        &self.ranking
    }

    pub fn solve(&self, numbers: &SourceNumbers, target: Target) -> SearchReport {
        self.solve_with_observer(numbers, target, &mut NoProgress)
    }

    pub fn solve_with_observer<O: SearchObserver + ?Sized>(
        &self,
        numbers: &SourceNumbers,
        target: Target,
        observer: &mut O,
    ) -> SearchReport {
        let start = Instant::now();
        let deadline = start + self.config.time_limit;
        let evaluator = Evaluator::new(target.value(), self.config.mode.pruning_rules());
        let splits = sweep_splits(numbers.values(), self.config.mode);
        let skeletons = self.skeletons;
        let mut tried = 0u64;

        info!("Searching for {} using {}", target, numbers);

        let outcome = 'search: {
            for (multiset_index, bag) in self.ranking.iter().enumerate() {
                if Instant::now() >= deadline {
                    break 'search SearchOutcome::TimedOut;
                }
                debug!(
                    "Operator bag {} ({}/{})",
                    bag,
                    multiset_index + 1,
                    self.ranking.len()
                );

                for (arrangement_index, arrangement) in bag.arrangements().iter().enumerate() {
                    if Instant::now() >= deadline {
                        break 'search SearchOutcome::TimedOut;
                    }

                    for batch in splits.chunks(self.pool.workers()) {
                        if Instant::now() >= deadline {
                            break 'search SearchOutcome::TimedOut;
                        }
                        trace!("Dispatching {} pair-splits", batch.len());

                        let slots = self.pool.run_batch(batch, |split| {
                            sweep_split(skeletons, &evaluator, split, arrangement)
                        });
                        tried += slots.iter().map(|slot| slot.tried).sum::<u64>();

                        observer.on_batch(&Progress {
                            multiset_index,
                            arrangement_index,
                            combinations_tried: tried,
                            elapsed: start.elapsed(),
                        });

                        if let Some(solution) = first_solution(target.value(), slots) {
                            break 'search SearchOutcome::Found(solution);
                        }
                    }
                }
            }
            SearchOutcome::Exhausted
        };

        let elapsed = start.elapsed();
        match &outcome {
            SearchOutcome::Found(solution) => info!("Found {}", solution),
            SearchOutcome::Exhausted => info!("Search space exhausted"),
            SearchOutcome::TimedOut => warn!("Time limit of {:?} reached", self.config.time_limit),
        }
        info!("{} combinations tried in {:?}", tried, elapsed);

        SearchReport {
            outcome,
            combinations_tried: tried,
            elapsed,
        }
    }
}

/// The lowest-index hit of a batch that rebuilds into an expression.
pub(crate) fn first_solution(target: u64, slots: Vec<WorkerSlot>) -> Option<Solution> {
    for hit in slots.into_iter().filter_map(|slot| slot.hit) {
        match Solution::from_hit(target, &hit) {
            Some(solution) => {
                debug!("Hit postfix: {}", render_postfix(hit.postfix()));
                return Some(solution);
            }
            None => {
                let postfix = render_postfix(hit.tokens());
                warn!("Discarding unreadable hit: {}", postfix);
            }
        }
    }
    None
}

/// Bind every skeleton to one split and arrangement, stopping at the first hit.
fn sweep_split(
    skeletons: &SkeletonCatalogue,
    evaluator: &Evaluator,
    split: &PairSplit,
    arrangement: &Arrangement,
) -> WorkerSlot {
    let mut slot = WorkerSlot::default();

    for skeleton in skeletons {
        let tokens = skeleton.bind(split.numbers(), arrangement.operators());
        slot.tried += 1;
        if let Evaluation::Hit(hit) = evaluator.evaluate(&tokens) {
            slot.hit = Some(hit);
            break;
        }
    }

    slot
}
