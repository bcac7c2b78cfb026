use crate::error::{ClusterError, Result};
use crate::{assign, dataset, inits, update, ClusterConfig, InitMethod, Point};
use serde::Serialize;

/// Coordinate range used by [`Session::generate`], matching the plot area
/// interactive front-ends click manual centroids into.
pub const DEFAULT_COORDINATE_RANGE: (f64, f64) = (0.0, 100.0);

/// Snapshot of a clustering run: the current centroid set, the assignment of
/// every dataset point to a cluster label, and the convergence status.
///
/// ## Fields
/// - **k**: amount of clusters requested for this run
/// - **centroids**: cluster centers; the index is the cluster label
/// - **assignments**: one label in `[0, k)` per dataset point, positionally
///   aligned with the dataset
/// - **distsum**: sum of each point's distance to its assigned centroid
/// - **converged**: whether the last convergence pass found the centroid set
///   stable under exact coordinate equality
#[derive(Clone, Debug, Serialize)]
pub struct ClusteringState {
    pub k: usize,
    pub centroids: Vec<Point>,
    pub assignments: Vec<usize>,
    pub distsum: f64,
    pub converged: bool,
}

/// Lifecycle stage of a [`Session`], derived from which state is present.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum SessionStage {
    /// No dataset yet.
    Empty,
    /// Dataset present, clustering not initialized.
    DatasetReady,
    /// Centroids and assignments present, not yet confirmed converged.
    Clustering,
    /// Centroids stable; terminal for the current run.
    Converged,
}

/// Result of a [`Session::converge`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ConvergeOutcome {
    /// Amount of updater/assigner passes that ran, including the final pass
    /// that confirmed stability.
    pub iterations: usize,
    /// `false` if the iteration cap was hit before the centroid set
    /// stabilized.
    pub converged: bool,
}

/// An interactive clustering session: one dataset, at most one clustering
/// run, advanced step by step or to convergence.
///
/// The session is plain owned state with no interior mutability. Every
/// operation validates its inputs first, computes the full result, and only
/// then commits it, so a failed call never leaves partially-updated state
/// behind and a reader never observes a half-written centroid/assignment
/// pair. A hosting service that shares one session across concurrent requests
/// wraps it in a `std::sync::Mutex` and holds the lock for the whole
/// operation; the convergence loop is CPU-bound with no suspension points, so
/// such a host should run it on a worker it can time out independently.
#[derive(Debug, Default)]
pub struct Session {
    dataset: Option<Vec<Point>>,
    clustering: Option<ClusteringState>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the dataset with `num_points` freshly generated points, drawn
    /// uniformly from [`DEFAULT_COORDINATE_RANGE`] in both coordinates.
    /// Clears any existing clustering state.
    pub fn generate(&mut self, num_points: usize, config: &ClusterConfig<'_>) -> &[Point] {
        let points = dataset::generate_uniform(
            num_points,
            DEFAULT_COORDINATE_RANGE,
            DEFAULT_COORDINATE_RANGE,
            config,
        );
        self.clustering = None;
        self.dataset.insert(points).as_slice()
    }

    /// Install a caller-supplied dataset, clearing any existing clustering
    /// state. This is the entry point for hosts that own their own dataset
    /// generation policy.
    pub fn set_dataset(&mut self, points: Vec<Point>) -> &[Point] {
        self.clustering = None;
        self.dataset.insert(points).as_slice()
    }

    pub fn dataset(&self) -> Option<&[Point]> {
        self.dataset.as_deref()
    }

    pub fn clustering(&self) -> Option<&ClusteringState> {
        self.clustering.as_ref()
    }

    pub fn stage(&self) -> SessionStage {
        match (&self.dataset, &self.clustering) {
            (None, _) => SessionStage::Empty,
            (Some(_), None) => SessionStage::DatasetReady,
            (Some(_), Some(c)) if c.converged => SessionStage::Converged,
            (Some(_), Some(_)) => SessionStage::Clustering,
        }
    }

    /// Start a clustering run: seed `k` centroids with the chosen
    /// initialization method, then assign every dataset point once.
    ///
    /// Fires the `init_done` callback with the freshly committed state.
    ///
    /// ## Errors
    /// [`ClusterError::NotInitialized`] without a dataset;
    /// [`ClusterError::InvalidInput`] for bad `k`, an unknown method or a
    /// mis-sized manual centroid list (see [`crate::initialize`]).
    pub fn initialize(
        &mut self,
        k: usize,
        method: InitMethod,
        manual: Option<&[Point]>,
        config: &ClusterConfig<'_>,
    ) -> Result<&ClusteringState> {
        let dataset = self
            .dataset
            .as_deref()
            .ok_or_else(|| ClusterError::NotInitialized("no dataset found".into()))?;
        let centroids = inits::initialize(dataset, k, method, manual, config)?;
        let assignments = assign::assign(dataset, &centroids);
        let distsum = assign::distance_sum(dataset, &centroids, &assignments);
        let state = ClusteringState { k, centroids, assignments, distsum, converged: false };
        (config.init_done)(&state);
        Ok(self.clustering.insert(state))
    }

    /// Re-seed the clustering with a fresh initialization pass.
    ///
    /// This deliberately does not advance from the current centroids: like
    /// the classic sandbox behavior it replays the initializer, letting the
    /// caller watch how the chosen strategy scatters its starting centroids.
    /// Use [`Session::converge`] to iterate from the current state.
    pub fn step(
        &mut self,
        k: usize,
        method: InitMethod,
        manual: Option<&[Point]>,
        config: &ClusterConfig<'_>,
    ) -> Result<&ClusteringState> {
        self.initialize(k, method, manual, config)
    }

    /// Alternate updater and assigner passes until the recomputed centroid
    /// set is element-wise equal to the previous one, or until
    /// `config.max_iterations` passes ran.
    ///
    /// Exact floating-point equality can in principle oscillate forever, so
    /// the cap is always enforced; when it fires, the session keeps the
    /// latest (non-converged) state and a later `converge` call resumes from
    /// it. Fires `iteration_done` once per pass.
    ///
    /// ## Errors
    /// [`ClusterError::NotInitialized`] if no clustering run exists.
    pub fn converge(&mut self, config: &ClusterConfig<'_>) -> Result<ConvergeOutcome> {
        let dataset = self
            .dataset
            .as_deref()
            .ok_or_else(|| ClusterError::NotInitialized("clustering is not initialized".into()))?;
        let mut state = self
            .clustering
            .clone()
            .ok_or_else(|| ClusterError::NotInitialized("clustering is not initialized".into()))?;

        state.converged = false;
        let mut iterations = 0;
        while iterations < config.max_iterations {
            iterations += 1;
            let new_centroids = update::update(dataset, &state.assignments, state.k, config);
            if new_centroids == state.centroids {
                state.converged = true;
                (config.iteration_done)(&state, iterations);
                break;
            }
            state.centroids = new_centroids;
            state.assignments = assign::assign(dataset, &state.centroids);
            state.distsum = assign::distance_sum(dataset, &state.centroids, &state.assignments);
            (config.iteration_done)(&state, iterations);
        }

        let outcome = ConvergeOutcome { iterations, converged: state.converged };
        self.clustering = Some(state);
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;
    use std::cell::Cell;

    fn seeded(seed: u64) -> ClusterConfig<'static> {
        ClusterConfig::build()
            .random_generator(rand::rngs::StdRng::seed_from_u64(seed))
            .build()
    }

    fn unit_square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
        ]
    }

    #[test]
    fn stage_walks_through_the_lifecycle() {
        let conf = seeded(1);
        let mut session = Session::new();
        assert_eq!(session.stage(), SessionStage::Empty);

        session.generate(50, &conf);
        assert_eq!(session.stage(), SessionStage::DatasetReady);

        session.initialize(3, InitMethod::KMeansPlusPlus, None, &conf).unwrap();
        assert_eq!(session.stage(), SessionStage::Clustering);

        let outcome = session.converge(&conf).unwrap();
        assert!(outcome.converged);
        assert_eq!(session.stage(), SessionStage::Converged);

        // regeneration invalidates the clustering run
        session.generate(50, &conf);
        assert_eq!(session.stage(), SessionStage::DatasetReady);
        assert!(session.clustering().is_none());
    }

    #[test]
    fn unit_square_manual_centroids_tie_break_to_lowest_label() {
        let conf = seeded(1);
        let mut session = Session::new();
        session.set_dataset(unit_square());
        let manual = [Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
        let state = session.initialize(2, InitMethod::Manual, Some(&manual), &conf).unwrap();
        // (0,1) and (1,0) are equidistant from both centroids and must land
        // on label 0
        assert_eq!(state.assignments, vec![0, 0, 0, 1]);
        assert_eq!(state.centroids, manual.to_vec());
    }

    #[test]
    fn single_cluster_at_the_mean_converges_on_the_first_comparison() {
        let conf = seeded(1);
        let mut session = Session::new();
        session.set_dataset(unit_square());
        // the mean of the unit square
        let manual = [Point::new(0.5, 0.5)];
        session.initialize(1, InitMethod::Manual, Some(&manual), &conf).unwrap();
        let outcome = session.converge(&conf).unwrap();
        assert_eq!(outcome, ConvergeOutcome { iterations: 1, converged: true });
        assert_eq!(session.clustering().unwrap().centroids, vec![Point::new(0.5, 0.5)]);
    }

    #[test]
    fn single_cluster_snaps_to_the_mean_in_one_update() {
        let conf = seeded(1);
        let mut session = Session::new();
        session.set_dataset(unit_square());
        let manual = [Point::new(17.0, -3.0)];
        session.initialize(1, InitMethod::Manual, Some(&manual), &conf).unwrap();
        // pass 1 moves the centroid onto the mean, pass 2 confirms stability
        let outcome = session.converge(&conf).unwrap();
        assert_eq!(outcome, ConvergeOutcome { iterations: 2, converged: true });
        assert_eq!(session.clustering().unwrap().centroids, vec![Point::new(0.5, 0.5)]);
    }

    #[test]
    fn converge_before_initialize_is_not_initialized() {
        let conf = seeded(1);
        let mut session = Session::new();
        assert!(matches!(
            session.converge(&conf),
            Err(ClusterError::NotInitialized(_))
        ));
        session.generate(10, &conf);
        assert!(matches!(
            session.converge(&conf),
            Err(ClusterError::NotInitialized(_))
        ));
    }

    #[test]
    fn initialize_before_generate_is_not_initialized() {
        let conf = seeded(1);
        let mut session = Session::new();
        assert!(matches!(
            session.initialize(2, InitMethod::Random, None, &conf),
            Err(ClusterError::NotInitialized(_))
        ));
    }

    #[test]
    fn converge_is_idempotent_at_the_fixed_point() {
        let conf = seeded(8);
        let mut session = Session::new();
        session.generate(80, &conf);
        session.initialize(4, InitMethod::FurthestFirst, None, &conf).unwrap();
        session.converge(&conf).unwrap();
        let settled = session.clustering().unwrap().centroids.clone();

        let outcome = session.converge(&conf).unwrap();
        assert_eq!(outcome, ConvergeOutcome { iterations: 1, converged: true });
        assert_eq!(session.clustering().unwrap().centroids, settled);
    }

    #[test]
    fn iteration_cap_halts_without_convergence_and_resumes() {
        let capped = ClusterConfig::build()
            .random_generator(rand::rngs::StdRng::seed_from_u64(2))
            .max_iterations(1)
            .build();
        let mut session = Session::new();
        session.set_dataset(unit_square());
        // far off the mean, so one pass cannot possibly settle
        let manual = [Point::new(50.0, 50.0)];
        session.initialize(1, InitMethod::Manual, Some(&manual), &capped).unwrap();

        let outcome = session.converge(&capped).unwrap();
        assert_eq!(outcome, ConvergeOutcome { iterations: 1, converged: false });
        assert_eq!(session.stage(), SessionStage::Clustering);

        // a later call picks up the intermediate state and finishes
        let outcome = session.converge(&seeded(2)).unwrap();
        assert!(outcome.converged);
        assert_eq!(session.stage(), SessionStage::Converged);
    }

    #[test]
    fn failed_operations_leave_the_session_untouched() {
        let conf = seeded(4);
        let mut session = Session::new();
        session.generate(20, &conf);
        session.initialize(2, InitMethod::Random, None, &conf).unwrap();
        let before = session.clustering().unwrap().centroids.clone();

        assert!(session.initialize(0, InitMethod::Random, None, &conf).is_err());
        assert!(session
            .initialize(2, InitMethod::Manual, Some(&[Point::new(0.0, 0.0)]), &conf)
            .is_err());
        assert_eq!(session.clustering().unwrap().centroids, before);
        assert_eq!(session.stage(), SessionStage::Clustering);
    }

    #[test]
    fn invariants_hold_after_a_full_run() {
        let conf = seeded(1234);
        let mut session = Session::new();
        session.generate(150, &conf);
        session.initialize(5, InitMethod::KMeansPlusPlus, None, &conf).unwrap();

        let outcome = session.converge(&conf).unwrap();
        assert!(outcome.converged);

        let state = session.clustering().unwrap();
        let dataset = session.dataset().unwrap();
        assert_eq!(state.k, 5);
        assert_eq!(state.centroids.len(), 5);
        assert_eq!(state.assignments.len(), dataset.len());
        assert!(state.assignments.iter().all(|&label| label < 5));
        // assignments must actually be the nearest-centroid mapping
        assert_eq!(state.assignments, crate::assign(dataset, &state.centroids));
        assert_approx_eq!(
            state.distsum,
            crate::distance_sum(dataset, &state.centroids, &state.assignments)
        );
    }

    #[test]
    fn step_reseeds_centroids_from_scratch() {
        let conf = seeded(6);
        let mut session = Session::new();
        session.generate(40, &conf);
        session.initialize(3, InitMethod::Random, None, &conf).unwrap();
        session.converge(&conf).unwrap();
        assert_eq!(session.stage(), SessionStage::Converged);

        let state = session.step(3, InitMethod::Random, None, &conf).unwrap();
        // a step discards the converged run and starts over
        assert!(!state.converged);
        let reseeded = state.centroids.clone();
        assert!(reseeded.iter().all(|c| session.dataset().unwrap().contains(c)));
        assert_eq!(session.stage(), SessionStage::Clustering);
    }

    #[test]
    fn callbacks_fire_per_phase() {
        let inits = Cell::new(0usize);
        let iterations = Cell::new(0usize);
        let on_init = |_: &ClusteringState| inits.set(inits.get() + 1);
        let on_iteration = |_: &ClusteringState, _: usize| iterations.set(iterations.get() + 1);
        let conf = ClusterConfig::build()
            .random_generator(rand::rngs::StdRng::seed_from_u64(3))
            .init_done(&on_init)
            .iteration_done(&on_iteration)
            .build();

        let mut session = Session::new();
        session.generate(30, &conf);
        session.initialize(2, InitMethod::KMeansPlusPlus, None, &conf).unwrap();
        assert_eq!(inits.get(), 1);
        assert_eq!(iterations.get(), 0);

        let outcome = session.converge(&conf).unwrap();
        assert_eq!(iterations.get(), outcome.iterations);
    }

    #[test]
    fn clustering_state_serializes_with_wire_point_pairs() {
        let conf = seeded(1);
        let mut session = Session::new();
        session.set_dataset(unit_square());
        let manual = [Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
        let state = session.initialize(2, InitMethod::Manual, Some(&manual), &conf).unwrap();

        let json: serde_json::Value = serde_json::from_str(&serde_json::to_string(state).unwrap()).unwrap();
        assert_eq!(json["k"], 2);
        assert_eq!(json["centroids"][1][0], 1.0);
        assert_eq!(json["assignments"], serde_json::json!([0, 0, 0, 1]));
        assert_eq!(json["converged"], false);
    }
}
