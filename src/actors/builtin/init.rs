// Copyright 2019-2025 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! The slice of the init actor interface needed to create new actors:
//! the singleton address, the `Exec` method, and its parameter and return
//! types.

use cid::Cid;
use fvm_ipld_encoding::tuple::*;
use fvm_ipld_encoding::RawBytes;
use fvm_shared::address::Address;
use fvm_shared::METHOD_CONSTRUCTOR;
use num_derive::FromPrimitive;

/// Init actor singleton address, `f01`.
pub const ADDRESS: Address = Address::new_id(1);

/// Init actor methods.
#[derive(FromPrimitive)]
#[repr(u64)]
pub enum Method {
    Constructor = METHOD_CONSTRUCTOR,
    Exec = 2,
}

/// Parameters of `Exec`: the code id of the actor to instantiate and its
/// already-encoded constructor parameters.
#[derive(Serialize_tuple, Deserialize_tuple, Clone, Debug, PartialEq, Eq)]
pub struct ExecParams {
    pub code_cid: Cid,
    pub constructor_params: RawBytes,
}

/// Return of `Exec`: the id and robust addresses assigned to the new
/// actor.
#[derive(Serialize_tuple, Deserialize_tuple, Clone, Debug, PartialEq, Eq)]
pub struct ExecReturn {
    /// ID based address of the created actor.
    pub id_address: Address,
    /// Reorg safe address of the created actor.
    pub robust_address: Address,
}
