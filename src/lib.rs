// Copyright 2019-2025 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! Client layer for the Filecoin bounty actor: an escrow that pays out a
//! fixed value to submitters of deals carrying a target piece, across a
//! bounded duration and replication factor.
//!
//! The crate hides the per-version actor encodings behind a stable
//! surface: [`Manager`] exposes the create, claim and info operations,
//! while the version-specific message schemas and state layouts live
//! under [`actors::builtin::bounty`]. Chain access and mempool
//! submission are consumed through the [`StateProvider`] and
//! [`MpoolProvider`] traits.

pub mod actors;
mod errors;
mod manager;
mod provider;

pub use errors::Error;
pub use manager::{Manager, MESSAGE_CONFIDENCE};
pub use provider::{MpoolProvider, StateProvider};
