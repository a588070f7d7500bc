// Copyright 2019-2025 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use cid::Cid;
use fvm_ipld_encoding::tuple::*;
use fvm_ipld_encoding::RawBytes;
use fvm_shared::address::Address;
use fvm_shared::clock::ChainEpoch;
use fvm_shared::deal::DealID;
use fvm_shared::econ::TokenAmount;
use fvm_shared::message::Message;
use fvm_shared::MethodNum;
use num_traits::Zero;

use super::{Method, MessageBuilder};
use crate::actors::builtin::{init, BOUNTY_ACTOR_CODE_ID_V3};
use crate::errors::Error;

/// Constructor parameters of the v3 bounty actor. Field order is fixed by
/// the on-chain schema.
#[derive(Serialize_tuple, Deserialize_tuple, Clone, Debug, PartialEq, Eq)]
pub struct ConstructorParams {
    pub piece_cid: Cid,
    pub token: Option<Address>,
    pub from: Address,
    pub value: TokenAmount,
    pub duration: ChainEpoch,
    pub bounties: u64,
}

/// Claim parameters of the v3 bounty actor.
#[derive(Serialize_tuple, Deserialize_tuple, Clone, Debug, PartialEq, Eq)]
pub struct ClaimParams {
    pub new_deal_id: Option<DealID>,
}

/// Message builder for the v3 bounty actor encoding.
pub struct MessageBuilderV3 {
    from: Address,
}

impl MessageBuilderV3 {
    pub fn new(from: Address) -> Self {
        Self { from }
    }

    fn message(&self, to: Address, method_num: MethodNum, params: RawBytes) -> Message {
        Message {
            version: 0,
            to,
            from: self.from,
            sequence: 0,
            value: TokenAmount::zero(),
            method_num,
            params,
            gas_limit: 0,
            gas_fee_cap: TokenAmount::zero(),
            gas_premium: TokenAmount::zero(),
        }
    }
}

impl MessageBuilder for MessageBuilderV3 {
    fn create(
        &self,
        piece_cid: Cid,
        token: Option<Address>,
        from: Address,
        value: TokenAmount,
        duration: ChainEpoch,
        bounties: u64,
    ) -> Result<Message, Error> {
        if value.is_negative() {
            return Err(Error::InvalidParams(format!(
                "bounty value must be non-negative, got {value}"
            )));
        }
        if duration < 0 {
            return Err(Error::InvalidParams(format!(
                "bounty duration must be non-negative, got {duration}"
            )));
        }
        if bounties == 0 {
            return Err(Error::InvalidParams(
                "bounty must reward at least one deal".into(),
            ));
        }

        let params = RawBytes::serialize(ConstructorParams {
            piece_cid,
            token,
            from,
            value,
            duration,
            bounties,
        })?;

        let exec_params = RawBytes::serialize(init::ExecParams {
            code_cid: *BOUNTY_ACTOR_CODE_ID_V3,
            constructor_params: params,
        })?;

        Ok(self.message(init::ADDRESS, init::Method::Exec as MethodNum, exec_params))
    }

    fn claim(&self, bounty: Address, new_deal_id: Option<DealID>) -> Result<Message, Error> {
        let params = RawBytes::serialize(ClaimParams { new_deal_id })?;
        Ok(self.message(bounty, Method::Claim as MethodNum, params))
    }
}
