//! Contract selection for the options variant.

use crate::models::options::{OptionChain, OptionContract};
use crate::models::signal::SignalDirection;

/// Pick the out-of-the-money contract with traded volume whose strike is
/// closest to `spot`.
///
/// Calls back a LONG, puts back a SHORT. Equal distances resolve to the
/// contract that appears first in the chain.
pub fn select_contract<'a>(
    calls: &'a [OptionContract],
    puts: &'a [OptionContract],
    spot: f64,
    direction: SignalDirection,
) -> Option<&'a OptionContract> {
    let source = match direction {
        SignalDirection::Long => calls,
        SignalDirection::Short => puts,
        SignalDirection::None => return None,
    };

    source
        .iter()
        .filter(|contract| !contract.in_the_money && contract.volume > 0.0)
        .map(|contract| ((contract.strike - spot).abs(), contract))
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, contract)| contract)
}

/// Select from a full chain using its own spot price.
pub fn select_from_chain(chain: &OptionChain, direction: SignalDirection) -> Option<&OptionContract> {
    select_contract(&chain.calls, &chain.puts, chain.spot_price, direction)
}
