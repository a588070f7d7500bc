// Copyright 2019-2025 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

pub mod builtin;
pub mod registry;

use std::fmt;

use cid::Cid;
use fvm_ipld_encoding::tuple::*;
use fvm_shared::econ::TokenAmount;
use fvm_shared::version::NetworkVersion;
use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// Identifies an epoch of the built-in actor encodings and method tables.
/// The space is open ended: versions this crate has no builder or decoder
/// for are representable and rejected at resolution time, never at
/// construction time.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ActorVersion(pub u32);

impl ActorVersion {
    pub const V0: Self = Self(0);
    pub const V2: Self = Self(2);
    pub const V3: Self = Self(3);
}

impl From<u32> for ActorVersion {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

impl fmt::Display for ActorVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Maps a network version to the actors version active at that network
/// version. A network version past the known table is a reportable error,
/// not a fallback to the newest mapping: building a message with a guessed
/// encoding would be wire incompatible.
pub fn version_for_network(network: NetworkVersion) -> Result<ActorVersion, Error> {
    match u32::from(network) {
        0..=3 => Ok(ActorVersion::V0),
        4..=9 => Ok(ActorVersion::V2),
        10..=11 => Ok(ActorVersion::V3),
        v => Err(Error::VersionLookup(format!(
            "no actors version known for network version {v}"
        ))),
    }
}

/// On-chain actor record as held by the state tree: the actor's code id,
/// its state root, and account bookkeeping.
#[derive(Serialize_tuple, Deserialize_tuple, Clone, Debug, PartialEq, Eq)]
pub struct ActorState {
    pub code: Cid,
    pub state: Cid,
    pub sequence: u64,
    pub balance: TokenAmount,
}

impl ActorState {
    pub fn new(code: Cid, state: Cid, balance: TokenAmount, sequence: u64) -> Self {
        Self {
            code,
            state,
            sequence,
            balance,
        }
    }
}
