// Copyright 2019-2025 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::sync::Arc;

use cid::Cid;
use fvm_ipld_blockstore::Blockstore;
use fvm_shared::address::Address;
use fvm_shared::clock::ChainEpoch;
use fvm_shared::deal::DealID;
use fvm_shared::econ::TokenAmount;
use fvm_shared::message::Message;
use tracing::{debug, warn};

use crate::actors::builtin::bounty::{message_builder, BountyInfo, MessageBuilder};
use crate::actors::builtin::init::ExecReturn;
use crate::actors::registry::ActorRegistry;
use crate::actors::version_for_network;
use crate::errors::Error;
use crate::provider::{MpoolProvider, StateProvider};

/// Default number of epochs a message should be buried under before its
/// receipt is trusted.
pub const MESSAGE_CONFIDENCE: u64 = 5;

/// Bounty actor orchestration: composes chain queries, version
/// resolution, message building and mempool submission behind the three
/// bounty operations. Holds no mutable state of its own, so operations
/// may run concurrently from multiple callers.
pub struct Manager<DB, SP, MP> {
    store: Arc<DB>,
    state: SP,
    mpool: MP,
    registry: ActorRegistry<DB>,
}

impl<DB, SP, MP> Manager<DB, SP, MP>
where
    DB: Blockstore,
    SP: StateProvider,
    MP: MpoolProvider,
{
    /// Creates a manager over an already populated registry. Registration
    /// happens before construction, so lookups never race with it.
    pub fn new(store: Arc<DB>, state: SP, mpool: MP, registry: ActorRegistry<DB>) -> Self {
        Self {
            store,
            state,
            mpool,
            registry,
        }
    }

    /// Returns the decoded information of the bounty actor at the given
    /// address.
    pub async fn info(&self, bounty: &Address) -> Result<BountyInfo, Error> {
        let actor = self
            .state
            .get_actor(bounty)
            .await?
            .ok_or(Error::ActorNotFound(*bounty))?;
        let state = self.registry.load(&self.store, &actor)?;
        state.bounty_info(self.store.as_ref())
    }

    /// Builds and submits a message creating a new bounty actor. Returns
    /// the CID of the submitted message; use [`Manager::wait_create`] to
    /// wait for the new actor's address.
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        creator: Address,
        piece_cid: Cid,
        token: Option<Address>,
        from: Address,
        value: TokenAmount,
        duration: ChainEpoch,
        bounties: u64,
    ) -> Result<Cid, Error> {
        debug!("creating bounty for piece {piece_cid} with value {value}");
        self.push_message(creator, move |mb| {
            mb.create(piece_cid, token, from, value, duration, bounties)
        })
        .await
    }

    /// Builds and submits a claim against the bounty actor at `bounty`,
    /// optionally citing a new deal. The actor must exist; its state is
    /// not decoded.
    pub async fn claim(
        &self,
        bounty: Address,
        from: Address,
        new_deal_id: Option<DealID>,
    ) -> Result<Cid, Error> {
        self.state
            .get_actor(&bounty)
            .await?
            .ok_or(Error::ActorNotFound(bounty))?;

        debug!("claiming bounty {bounty} with new deal {new_deal_id:?}");
        self.push_message(from, move |mb| mb.claim(bounty, new_deal_id))
            .await
    }

    /// Waits until a create message is `confidence` epochs deep and
    /// decodes the addresses assigned to the new actor.
    pub async fn wait_create(&self, msg: &Cid, confidence: u64) -> Result<ExecReturn, Error> {
        let receipt = self.mpool.wait_message(msg, confidence).await?;
        if !receipt.exit_code.is_success() {
            warn!(
                "bounty create message {msg} aborted with exit code {}",
                receipt.exit_code
            );
            return Err(Error::MessageFailed {
                cid: *msg,
                exit_code: receipt.exit_code,
            });
        }
        receipt
            .return_data
            .deserialize()
            .map_err(|e| Error::Decode(format!("failed to decode exec return of {msg}: {e}")))
    }

    /// Resolves the message builder for the network's active version,
    /// runs `build` against it, and submits the result. The builder never
    /// outlives the build step; nothing is submitted if any stage fails.
    async fn push_message<F>(&self, from: Address, build: F) -> Result<Cid, Error>
    where
        F: FnOnce(&dyn MessageBuilder) -> Result<Message, Error>,
    {
        let network = self.state.network_version().await?;
        let version = version_for_network(network)?;
        let msg = {
            let builder = message_builder(version, from)?;
            build(builder.as_ref())?
        };
        debug!(
            "pushing bounty message to {} (method {})",
            msg.to, msg.method_num
        );
        self.mpool.push_message(msg).await
    }
}
