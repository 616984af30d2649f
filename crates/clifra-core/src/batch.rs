//! Batch construction of independent multivectors.
//!
//! With the `parallel` feature, large batches are spread over the rayon
//! thread pool. Each construction owns its accumulator; nothing mutable is
//! shared between tasks.

use clifra_scalar::Scalar;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

use crate::error::Result;
use crate::multivector::Multivector;
use crate::signature::Signature;
use crate::source::Source;

/// One construction request: a source and an optional signature.
pub type BuildRequest<S> = (Source<S>, Option<Signature>);

/// Configuration for batch construction.
#[derive(Clone, Debug)]
pub struct BatchConfig {
    /// Minimum number of requests before work is parallelized.
    pub parallel_threshold: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 64,
        }
    }
}

/// Builds every request, returning one result per request in input order.
///
/// A failing request does not affect the others.
pub fn build_batch<S>(requests: Vec<BuildRequest<S>>, config: &BatchConfig) -> Vec<Result<Multivector<S>>>
where
    S: Scalar + Send + Sync,
{
    let parallel = cfg!(feature = "parallel") && requests.len() >= config.parallel_threshold;
    debug!(requests = requests.len(), parallel, "building multivector batch");
    run(requests, parallel)
}

#[cfg(feature = "parallel")]
fn run<S>(requests: Vec<BuildRequest<S>>, parallel: bool) -> Vec<Result<Multivector<S>>>
where
    S: Scalar + Send + Sync,
{
    if parallel {
        requests
            .into_par_iter()
            .map(|(source, signature)| Multivector::new(source, signature))
            .collect()
    } else {
        run_sequential(requests)
    }
}

#[cfg(not(feature = "parallel"))]
fn run<S>(requests: Vec<BuildRequest<S>>, _parallel: bool) -> Vec<Result<Multivector<S>>>
where
    S: Scalar + Send + Sync,
{
    run_sequential(requests)
}

fn run_sequential<S: Scalar>(requests: Vec<BuildRequest<S>>) -> Vec<Result<Multivector<S>>> {
    requests
        .into_iter()
        .map(|(source, signature)| Multivector::new(source, signature))
        .collect()
}
