//! Fungible token module
//!
//! - DexToken: CEP-18 compatible ledger for a single asset
//! - Cep18Token: external interface the pool uses to move tokens

pub mod dex_token;

pub use dex_token::DexToken;

use odra::casper_types::U256;
use odra::prelude::*;

/// External interface for any CEP-18 compatible token
#[odra::external_contract]
pub trait Cep18Token {
    fn total_supply(&self) -> U256;
    fn balance_of(&self, owner: Address) -> U256;
    fn allowance(&self, owner: Address, spender: Address) -> U256;
    fn transfer(&mut self, to: Address, amount: U256) -> bool;
    fn approve(&mut self, spender: Address, amount: U256) -> bool;
    fn transfer_from(&mut self, from: Address, to: Address, amount: U256) -> bool;
}
