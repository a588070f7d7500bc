// Copyright 2019-2025 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use async_trait::async_trait;
use cid::Cid;
use fvm_shared::address::Address;
use fvm_shared::message::Message;
use fvm_shared::receipt::Receipt;
use fvm_shared::version::NetworkVersion;

use crate::actors::ActorState;
use crate::errors::Error;

/// Chain state queries the bounty manager depends on. Implementations
/// resolve against the heaviest tipset at call time.
#[async_trait]
pub trait StateProvider {
    /// Returns the actor record at the given address, or `None` if no actor
    /// exists there.
    async fn get_actor(&self, addr: &Address) -> Result<Option<ActorState>, Error>;

    /// Returns the network version currently active on chain.
    async fn network_version(&self) -> Result<NetworkVersion, Error>;
}

/// Message pool access for submitting built messages. Gas estimation,
/// sequence assignment and signing all happen behind `push_message`.
#[async_trait]
pub trait MpoolProvider {
    /// Submits the message for inclusion and returns the CID of the signed
    /// message accepted by the pool.
    async fn push_message(&self, msg: Message) -> Result<Cid, Error>;

    /// Blocks until the message is at least `confidence` epochs deep and
    /// returns its execution receipt.
    async fn wait_message(&self, msg: &Cid, confidence: u64) -> Result<Receipt, Error>;
}
