use std::{collections::VecDeque, fmt::Debug};

use log::{debug, info, trace};
use rand::rngs::StdRng;
use thiserror::Error;

use crate::TesterConfig;

mod traits;
pub use traits::*;

/// how many of the operations leading up to a failure are kept for the report
const HISTORY: usize = 8;

/// A generated operation gave a different result on the target than on the reference.
#[derive(Debug, Error)]
#[error(
    "operation #{op_num} diverged from the reference: expected {expected}, got {actual} \
     (replay with TESTER_SEED={seed}); last operations: {recent:?}"
)]
pub struct OperationFailure {
    pub seed: u64,
    pub op_num: usize,
    pub expected: String,
    pub actual: String,
    /// oldest first, the failing operation last
    pub recent: Vec<String>,
}

/// Replays `config.ops` operations from `G` against a fresh target.
///
/// Returns the first divergence, if any.
pub fn run<G>(config: &TesterConfig) -> Result<(), OperationFailure>
where
    G: OperationGenerator<StdRng>,
    G::Operation: Debug,
    <G::Operation as Operation>::Result: PartialEq + Debug,
    <G::Operation as Operation>::Target: Default + Debug,
{
    let seed = config.resolve_seed();
    info!(
        "running {} operations of {} with seed {seed}",
        config.ops,
        std::any::type_name::<G::Operation>()
    );

    let mut target = <G::Operation as Operation>::Target::default();
    let mut recent = VecDeque::with_capacity(HISTORY);

    for (op_num, (op, expected)) in G::from_seed(seed).take(config.ops).enumerate() {
        let actual = op.apply(&mut target);
        trace!("#{op_num}: {op:?} -> {actual:?}");

        if recent.len() == HISTORY {
            recent.pop_front();
        }
        recent.push_back(format!("{op:?}"));

        if actual != expected {
            debug!("target state at failure: {target:?}");
            return Err(OperationFailure {
                seed,
                op_num,
                expected: format!("{expected:?}"),
                actual: format!("{actual:?}"),
                recent: recent.into(),
            });
        }
    }
    Ok(())
}
