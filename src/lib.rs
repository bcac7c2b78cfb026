//! # kmeans-sandbox - API documentation
//!
//! An interactive k-means clustering sandbox for 2-D point sets: generate or
//! supply a dataset, seed centroids with one of four initialization
//! strategies, and advance the clustering one re-seeding step at a time or
//! run it to convergence while watching the evolving assignment.
//!
//! ## Design target
//! The crate is built around a single [`Session`] holding the current
//! dataset, centroid set and assignment vector. Operations never leave
//! partially-updated state behind: they either commit a complete new
//! clustering state or fail with a structured [`ClusterError`]. All
//! randomness flows through the generator installed in [`ClusterConfig`], so
//! a seeded generator makes every run deterministically repeatable.
//!
//! ## Supported centroid initializations
//! - Random sampling without replacement ([`InitMethod::Random`])
//! - Furthest-first traversal ([`InitMethod::FurthestFirst`])
//! - K-Means++ ([`InitMethod::KMeansPlusPlus`])
//! - Manual, caller-supplied centroids ([`InitMethod::Manual`])
//!
//! ## Example
//! ```rust
//! use kmeans_sandbox::{ClusterConfig, InitMethod, Session};
//! use rand::prelude::*;
//!
//! let config = ClusterConfig::build()
//!     .random_generator(StdRng::seed_from_u64(1337))
//!     .build();
//!
//! let mut session = Session::new();
//! session.generate(100, &config);
//! session.initialize(3, InitMethod::KMeansPlusPlus, None, &config).unwrap();
//! let outcome = session.converge(&config).unwrap();
//!
//! assert!(outcome.converged);
//! let state = session.clustering().unwrap();
//! println!("Centroids: {:?}", state.centroids);
//! println!("Assignments: {:?}", state.assignments);
//! ```
//!
//! ## Example (using the status event callbacks)
//! ```rust
//! use kmeans_sandbox::{ClusterConfig, InitMethod, Session};
//! use rand::prelude::*;
//!
//! let config = ClusterConfig::build()
//!     .random_generator(StdRng::seed_from_u64(42))
//!     .init_done(&|s| println!("Initialization completed. Error: {:.2}", s.distsum))
//!     .iteration_done(&|s, nr| println!("Iteration {} - Error: {:.2}", nr, s.distsum))
//!     .max_iterations(500)
//!     .build();
//!
//! let mut session = Session::new();
//! session.generate(250, &config);
//! session.initialize(4, InitMethod::FurthestFirst, None, &config).unwrap();
//! session.converge(&config).unwrap();
//! ```
//!
//! ## Short API-Overview / Description
//! [`Session`] is the entry point: it walks the `Empty` → `DatasetReady` →
//! `Clustering` → `Converged` lifecycle (see [`SessionStage`]) through
//! [`Session::generate`]/[`Session::set_dataset`], [`Session::initialize`],
//! [`Session::step`] and [`Session::converge`]. The algorithmic building
//! blocks are also exposed directly for callers that want to drive the loop
//! themselves: [`initialize`] seeds centroids, [`assign`] maps every point to
//! its nearest centroid (ties to the lowest label), and [`update`] recomputes
//! centroids as cluster means, re-seeding clusters that lost all points.

#[macro_use]
mod helpers;
mod assign;
mod config;
mod dataset;
mod error;
mod geometry;
mod inits;
mod session;
mod update;

pub use assign::{assign, distance_sum};
pub use config::{ClusterConfig, ClusterConfigBuilder, InitDoneCallbackFn, IterationDoneCallbackFn};
pub use dataset::generate_uniform;
pub use error::{ClusterError, Result};
pub use geometry::Point;
pub use inits::{initialize, InitMethod};
pub use session::{
    ClusteringState, ConvergeOutcome, Session, SessionStage, DEFAULT_COORDINATE_RANGE,
};
pub use update::update;
