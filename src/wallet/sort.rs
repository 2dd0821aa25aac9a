use std::cmp::Reverse;

use crate::models::balance::{FormattedWalletBalance, WalletBalance};
use crate::utils::priority::get_priority;

/// Drop empty balances and order the rest by chain priority, highest first.
///
/// The sort is stable, so balances on equally ranked chains keep their
/// input order.
pub fn sort_wallet_balances(balances: &[WalletBalance]) -> Vec<FormattedWalletBalance> {
    let mut sorted: Vec<FormattedWalletBalance> = balances
        .iter()
        .filter(|b| b.is_displayable())
        .cloned()
        .map(FormattedWalletBalance::new)
        .collect();

    sorted.sort_by_key(|b| Reverse(get_priority(&b.balance.blockchain)));
    sorted
}
