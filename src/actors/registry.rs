// Copyright 2019-2025 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use ahash::{HashMap, HashMapExt};
use cid::Cid;
use fvm_ipld_blockstore::Blockstore;

use crate::actors::builtin::{bounty, BOUNTY_ACTOR_CODE_ID_V3};
use crate::actors::ActorState;
use crate::errors::Error;

/// Decodes one version's persisted state at the given root into the
/// version-abstracted [`bounty::State`].
pub type StateLoader<DB> = fn(&DB, &Cid) -> Result<bounty::State, Error>;

/// Dispatch table from actor code ids to state decoders. Populated during
/// start-up and read-only afterwards, so lookups take `&self` and need no
/// locking. The table is append-only: a code id can never be re-bound to
/// a different decoder.
pub struct ActorRegistry<DB> {
    loaders: HashMap<Cid, StateLoader<DB>>,
}

impl<DB: Blockstore> ActorRegistry<DB> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            loaders: HashMap::new(),
        }
    }

    /// Creates a registry with decoders for every bounty actor version
    /// this crate supports.
    pub fn with_builtin_actors() -> Self {
        let mut registry = Self::new();
        registry
            .register(*BOUNTY_ACTOR_CODE_ID_V3, bounty::state_v3::load)
            .expect("builtin actor code ids are distinct");
        registry
    }

    /// Binds a state decoder to an actor code id. Re-registering a code id
    /// is a programming error and is rejected, the existing binding stays.
    pub fn register(&mut self, code: Cid, loader: StateLoader<DB>) -> Result<(), Error> {
        if self.loaders.contains_key(&code) {
            return Err(Error::DuplicateActorCode(code));
        }
        self.loaders.insert(code, loader);
        Ok(())
    }

    /// Returns true if a decoder is registered for the code id.
    pub fn is_registered(&self, code: &Cid) -> bool {
        self.loaders.contains_key(code)
    }

    /// Decodes the state of the given actor record by dispatching on its
    /// code id.
    pub fn load(&self, store: &DB, actor: &ActorState) -> Result<bounty::State, Error> {
        let loader = self
            .loaders
            .get(&actor.code)
            .ok_or(Error::UnknownActorCode(actor.code))?;
        loader(store, &actor.state)
    }
}

impl<DB: Blockstore> Default for ActorRegistry<DB> {
    fn default() -> Self {
        Self::new()
    }
}
