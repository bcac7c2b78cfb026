use crate::session::ClusteringState;
use rand::prelude::*;
use std::cell::RefCell;

pub type InitDoneCallbackFn<'a> = &'a dyn Fn(&ClusteringState);
pub type IterationDoneCallbackFn<'a> = &'a dyn Fn(&ClusteringState, usize);

/// Configuration shared by all randomized and iterative operations: the
/// random number generator to use, the convergence-loop iteration cap, and a
/// couple of callbacks for observing a running calculation.
///
/// Use [`ClusterConfig::build`] to construct one. Pass a seeded generator for
/// deterministically repeatable results.
pub struct ClusterConfig<'a> {
    /// Callback that is called once centroid initialization (plus the first
    /// assignment pass) finished.
    /// ## Arguments
    /// - **state**: the freshly initialized [`ClusteringState`]
    pub(crate) init_done: InitDoneCallbackFn<'a>,
    /// Callback that is called after each convergence-loop iteration.
    /// ## Arguments
    /// - **state**: current [`ClusteringState`] after the iteration
    /// - **iteration_id**: number of the current iteration
    pub(crate) iteration_done: IterationDoneCallbackFn<'a>,
    /// Random number generator used for initialization, dataset generation
    /// and empty-cluster re-seeding.
    pub(crate) rnd: Box<RefCell<dyn RngCore>>,
    /// Upper bound on convergence-loop iterations. Exact floating-point
    /// equality between successive centroid sets can in principle oscillate
    /// forever, so the loop is always capped.
    pub(crate) max_iterations: usize,
}

impl<'a> Default for ClusterConfig<'a> {
    fn default() -> Self {
        Self {
            init_done: &|_| {},
            iteration_done: &|_, _| {},
            rnd: Box::new(RefCell::new(rand::thread_rng())),
            max_iterations: 10_000,
        }
    }
}

impl<'a> ClusterConfig<'a> {
    /// Use the [`ClusterConfigBuilder`] to build a [`ClusterConfig`] instance.
    pub fn build() -> ClusterConfigBuilder<'a> {
        ClusterConfigBuilder { config: ClusterConfig::default() }
    }
}

impl<'a> std::fmt::Debug for ClusterConfig<'a> {
    fn fmt(&self, _: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Ok(())
    }
}

pub struct ClusterConfigBuilder<'a> {
    config: ClusterConfig<'a>,
}

impl<'a> ClusterConfigBuilder<'a> {
    /// Set the callback that should be called after clustering was
    /// initialized, before any convergence iteration ran.
    pub fn init_done(mut self, init_done: InitDoneCallbackFn<'a>) -> Self {
        self.config.init_done = init_done;
        self
    }

    /// Set the callback that should be called after each iteration of a
    /// running convergence loop.
    pub fn iteration_done(mut self, iteration_done: IterationDoneCallbackFn<'a>) -> Self {
        self.config.iteration_done = iteration_done;
        self
    }

    /// Set the random number generator that should be used by all randomized
    /// operations. Use a seeded generator for deterministically repeatable
    /// results.
    pub fn random_generator<R: RngCore + 'static>(mut self, rnd: R) -> Self {
        self.config.rnd = Box::new(RefCell::new(rnd));
        self
    }

    /// Set the maximum amount of convergence-loop iterations.
    /// ## Default
    /// `10_000`
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.config.max_iterations = max_iterations;
        self
    }

    /// Return the internally built configuration structure.
    pub fn build(self) -> ClusterConfig<'a> {
        self.config
    }
}
