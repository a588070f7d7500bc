// Copyright 2019-2025 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use cid::Cid;
use fvm_ipld_encoding::Error as EncodingError;
use fvm_shared::address::Address;
use fvm_shared::error::ExitCode;
use thiserror::Error;

use crate::actors::ActorVersion;

/// Bounty actor client error.
#[derive(Debug, PartialEq, Error)]
pub enum Error {
    /// No message builder is registered for the requested actors version.
    /// Surfaced verbatim; never downgraded to the newest known version.
    #[error("unsupported actors version {0}")]
    UnsupportedVersion(ActorVersion),
    /// Parameters rejected before encoding, e.g. a negative bounty value.
    #[error("invalid message parameters: {0}")]
    InvalidParams(String),
    #[error("failed to encode params: {0}")]
    Encoding(String),
    #[error("actor not found at address {0}")]
    ActorNotFound(Address),
    /// The actor exists but no state decoder is registered for its code id.
    #[error("unknown actor code {0}")]
    UnknownActorCode(Cid),
    /// A state decoder for this code id is already registered.
    #[error("duplicate state decoder for actor code {0}")]
    DuplicateActorCode(Cid),
    /// On-chain bytes do not match the schema of the resolved version.
    #[error("failed to decode actor state: {0}")]
    Decode(String),
    #[error("failed to resolve network version: {0}")]
    VersionLookup(String),
    #[error("failed to push message to mempool: {0}")]
    Submission(String),
    #[error("timed out waiting for message {0}")]
    Timeout(Cid),
    /// The message landed on chain but its execution aborted.
    #[error("message {cid} failed with exit code {exit_code}")]
    MessageFailed { cid: Cid, exit_code: ExitCode },
    #[error("{0}")]
    Other(String),
}

impl From<EncodingError> for Error {
    fn from(e: EncodingError) -> Error {
        Error::Encoding(e.to_string())
    }
}
