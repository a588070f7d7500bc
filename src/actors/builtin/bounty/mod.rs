// Copyright 2019-2025 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! Version-independent interface to the bounty actor: building its
//! constructor and claim messages, and reading its persisted state.
//! Everything version specific lives in the per-version submodules; the
//! caller only ever sees [`MessageBuilder`], [`State`] and [`BountyInfo`].

pub mod message_v3;
pub mod state_v3;

use cid::Cid;
use fvm_ipld_blockstore::Blockstore;
use fvm_ipld_encoding::tuple::*;
use fvm_shared::address::Address;
use fvm_shared::clock::ChainEpoch;
use fvm_shared::deal::DealID;
use fvm_shared::econ::TokenAmount;
use fvm_shared::message::Message;
use fvm_shared::METHOD_CONSTRUCTOR;
use num_derive::FromPrimitive;
use serde::Serialize;

use crate::actors::ActorVersion;
use crate::errors::Error;

/// Bounty actor methods.
#[derive(FromPrimitive)]
#[repr(u64)]
pub enum Method {
    Constructor = METHOD_CONSTRUCTOR,
    Claim = 2,
}

/// Returns the message builder for the given actors version. A version
/// without a builder is a reportable error: callers must opt into new
/// encodings explicitly, a silent fallback would produce messages the
/// network cannot decode.
pub fn message_builder(
    version: ActorVersion,
    from: Address,
) -> Result<Box<dyn MessageBuilder + Send + Sync>, Error> {
    match version {
        ActorVersion::V3 => Ok(Box::new(message_v3::MessageBuilderV3::new(from))),
        v => Err(Error::UnsupportedVersion(v)),
    }
}

/// Builds fully formed, unsigned messages against the bounty actor for
/// one specific actors version. Gas fields are left for the message pool
/// to estimate.
pub trait MessageBuilder {
    /// Produces a message to construct a new bounty actor rewarding deals
    /// that carry `piece_cid`, funded with `value` for `duration` epochs
    /// and paying out up to `bounties` deals at a time.
    fn create(
        &self,
        piece_cid: Cid,
        token: Option<Address>,
        from: Address,
        value: TokenAmount,
        duration: ChainEpoch,
        bounties: u64,
    ) -> Result<Message, Error>;

    /// Produces a message claiming the bounty for already recognized
    /// deals, optionally registering `new_deal_id` as a recipient.
    fn claim(&self, bounty: Address, new_deal_id: Option<DealID>) -> Result<Message, Error>;
}

/// Bounty actor state, abstracted over the actor version that persisted
/// it. Decoded once, immutable afterwards.
#[derive(Debug)]
pub enum State {
    V3(state_v3::State),
}

impl State {
    /// Returns the version-independent view of the state, resolving the
    /// recognized deals through the given blockstore.
    pub fn bounty_info<BS: Blockstore>(&self, store: &BS) -> Result<BountyInfo, Error> {
        match self {
            State::V3(st) => st.bounty_info(store),
        }
    }
}

/// A deal currently recognized by the bounty as earning payouts.
#[derive(Serialize_tuple, Deserialize_tuple, Clone, Debug, PartialEq, Eq)]
pub struct DealBounty {
    /// Market deal id cited as satisfying the bounty's piece.
    pub deal: DealID,
    /// Address the payouts for this deal are sent to.
    pub payee: Address,
    /// Amount already paid out against this deal.
    pub paid: TokenAmount,
}

/// Point-in-time copy of the bounty actor's on-chain record.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BountyInfo {
    /// Piece the bounty rewards deals for.
    pub piece_cid: Cid,
    /// Token the bounty pays in; `None` pays in the native currency.
    pub token: Option<Address>,
    /// Account the bounty is funded from.
    pub from: Address,
    /// Value remaining in the bounty.
    pub value: TokenAmount,
    /// Number of epochs the bounty remains claimable.
    pub duration: ChainEpoch,
    /// Maximum number of deals rewarded at the same time.
    pub bounties: u64,
    /// Deals currently recognized as claimants.
    pub deals: Vec<DealBounty>,
}
