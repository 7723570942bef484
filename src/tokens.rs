//! Concrete token contracts for the two pool assets
//!
//! TokenA and TokenB wrap the shared DexToken ledger with fixed metadata,
//! so each side of the pool is deployed as its own contract.

use odra::prelude::*;
use odra::casper_types::U256;
use crate::token::DexToken;

/// Token for the A side of the pool
#[odra::module]
pub struct TokenA {
    /// Underlying ledger
    token: SubModule<DexToken>,
}

#[odra::module]
impl TokenA {
    /// Initialize the token and credit the initial supply to the deployer
    pub fn init(&mut self, initial_supply: U256) {
        self.token
            .init(String::from("Token A"), String::from("TKA"), initial_supply);
    }

    /// Get the token name
    pub fn name(&self) -> String {
        self.token.name()
    }

    /// Get the token symbol
    pub fn symbol(&self) -> String {
        self.token.symbol()
    }

    /// Get the token decimals
    pub fn decimals(&self) -> u8 {
        self.token.decimals()
    }

    /// Get the total supply
    pub fn total_supply(&self) -> U256 {
        self.token.total_supply()
    }

    /// Get the balance of an address
    pub fn balance_of(&self, owner: Address) -> U256 {
        self.token.balance_of(owner)
    }

    /// Get the remaining allowance for a spender
    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.token.allowance(owner, spender)
    }

    /// Transfer tokens from the caller to another address
    pub fn transfer(&mut self, to: Address, amount: U256) -> bool {
        self.token.transfer(to, amount)
    }

    /// Set a spender's allowance
    pub fn approve(&mut self, spender: Address, amount: U256) -> bool {
        self.token.approve(spender, amount)
    }

    /// Transfer tokens on the strength of a prior approval
    pub fn transfer_from(&mut self, from: Address, to: Address, amount: U256) -> bool {
        self.token.transfer_from(from, to, amount)
    }

    /// Burn tokens from the caller's own balance
    pub fn burn(&mut self, amount: U256) -> bool {
        self.token.burn(amount)
    }
}

/// Token for the B side of the pool
#[odra::module]
pub struct TokenB {
    /// Underlying ledger
    token: SubModule<DexToken>,
}

#[odra::module]
impl TokenB {
    /// Initialize the token and credit the initial supply to the deployer
    pub fn init(&mut self, initial_supply: U256) {
        self.token
            .init(String::from("Token B"), String::from("TKB"), initial_supply);
    }

    /// Get the token name
    pub fn name(&self) -> String {
        self.token.name()
    }

    /// Get the token symbol
    pub fn symbol(&self) -> String {
        self.token.symbol()
    }

    /// Get the token decimals
    pub fn decimals(&self) -> u8 {
        self.token.decimals()
    }

    /// Get the total supply
    pub fn total_supply(&self) -> U256 {
        self.token.total_supply()
    }

    /// Get the balance of an address
    pub fn balance_of(&self, owner: Address) -> U256 {
        self.token.balance_of(owner)
    }

    /// Get the remaining allowance for a spender
    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.token.allowance(owner, spender)
    }

    /// Transfer tokens from the caller to another address
    pub fn transfer(&mut self, to: Address, amount: U256) -> bool {
        self.token.transfer(to, amount)
    }

    /// Set a spender's allowance
    pub fn approve(&mut self, spender: Address, amount: U256) -> bool {
        self.token.approve(spender, amount)
    }

    /// Transfer tokens on the strength of a prior approval
    pub fn transfer_from(&mut self, from: Address, to: Address, amount: U256) -> bool {
        self.token.transfer_from(from, to, amount)
    }

    /// Burn tokens from the caller's own balance
    pub fn burn(&mut self, amount: U256) -> bool {
        self.token.burn(amount)
    }
}
