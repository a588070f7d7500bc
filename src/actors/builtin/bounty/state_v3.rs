// Copyright 2019-2025 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use cid::Cid;
use fvm_ipld_amt::Amt;
use fvm_ipld_blockstore::Blockstore;
use fvm_ipld_encoding::tuple::*;
use fvm_ipld_encoding::CborStore;
use fvm_shared::address::Address;
use fvm_shared::clock::ChainEpoch;
use fvm_shared::econ::TokenAmount;

use super::{BountyInfo, DealBounty};
use crate::errors::Error;

/// Persisted state of the v3 bounty actor. Field order is fixed by the
/// on-chain schema.
#[derive(Serialize_tuple, Deserialize_tuple, Clone, Debug, PartialEq, Eq)]
pub struct State {
    pub piece_cid: Cid,
    pub token: Option<Address>,
    pub from: Address,
    pub value: TokenAmount,
    pub duration: ChainEpoch,
    pub bounties: u64,
    /// AMT of [`DealBounty`], keyed by insertion order.
    pub deals: Cid,
}

/// Loads the v3 bounty actor state at the given root.
pub fn load<BS: Blockstore>(store: &BS, root: &Cid) -> Result<super::State, Error> {
    let state: State = store
        .get_cbor(root)
        .map_err(|e| Error::Decode(format!("failed to read state at {root}: {e}")))?
        .ok_or_else(|| Error::Decode(format!("state root {root} not found in store")))?;
    Ok(super::State::V3(state))
}

impl State {
    /// Resolves the deals AMT and returns the version-independent view of
    /// this state.
    pub fn bounty_info<BS: Blockstore>(&self, store: &BS) -> Result<BountyInfo, Error> {
        let amt = Amt::<DealBounty, _>::load(&self.deals, store)
            .map_err(|e| Error::Decode(format!("failed to load deals amt {}: {e}", self.deals)))?;

        let mut deals = Vec::with_capacity(amt.count() as usize);
        amt.for_each(|_, deal| {
            deals.push(deal.clone());
            Ok(())
        })
        .map_err(|e| Error::Decode(format!("failed to walk deals amt {}: {e}", self.deals)))?;

        Ok(BountyInfo {
            piece_cid: self.piece_cid,
            token: self.token,
            from: self.from,
            value: self.value.clone(),
            duration: self.duration,
            bounties: self.bounties,
            deals,
        })
    }
}
