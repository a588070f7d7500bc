// Copyright 2019-2025 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

pub mod bounty;
pub mod init;

use std::sync::LazyLock;

use cid::multihash::Multihash;
use cid::Cid;

const IPLD_RAW: u64 = 0x55;
const IDENTITY_HASH: u64 = 0x0;

/// Code id of the v3 bounty actor, `fil/3/bounty` in the built-in actor
/// manifest.
pub static BOUNTY_ACTOR_CODE_ID_V3: LazyLock<Cid> = LazyLock::new(|| make_builtin(b"fil/3/bounty"));

/// Builds a code id from a canonical built-in actor name. Built-in actor
/// code ids are identity-hashed so the name is recoverable from the cid.
fn make_builtin(name: &[u8]) -> Cid {
    Cid::new_v1(
        IPLD_RAW,
        Multihash::wrap(IDENTITY_HASH, name).expect("builtin actor name exceeds multihash size"),
    )
}

/// Returns true if the code belongs to any supported bounty actor version.
pub fn is_bounty_actor(code: &Cid) -> bool {
    code == &*BOUNTY_ACTOR_CODE_ID_V3
}
