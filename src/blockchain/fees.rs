//! EIP-1559 fee computation.

use crate::blockchain::ops::ChainOps;
use crate::blockchain::types::{ChainResult, Fees};

// 10% headroom over (gas price + priority fee), absorbing base-fee
// drift between quote and inclusion.
const HEADROOM_NUM: u128 = 11;
const HEADROOM_DEN: u128 = 10;

/// Compute the fee pair from current network suggestions.
///
/// `max_fee = floor((gas_price + priority_fee) * 1.1)`, as exact
/// integer math. A stale quote risks underpricing; that surfaces later
/// as an estimation or submission error, never a retry here.
pub fn compute(gas_price: u128, priority_fee: u128) -> Fees {
    let max_fee = (gas_price + priority_fee) * HEADROOM_NUM / HEADROOM_DEN;
    Fees {
        priority_fee,
        max_fee,
    }
}

/// Query current suggestions from the chain and compute the fee pair.
pub async fn quote<C: ChainOps>(chain: &C) -> ChainResult<Fees> {
    let gas_price = chain.gas_price().await?;
    let priority_fee = chain.max_priority_fee().await?;
    Ok(compute(gas_price, priority_fee))
}
