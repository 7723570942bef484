//! Event definitions for the token and pool contracts
use odra::casper_types::U256;
use odra::prelude::*;

/// Emitted on every balance movement, including the initial supply
/// credit at deployment and burns
#[odra::event]
pub struct Transfer {
    /// Debited account
    pub from: Address,
    /// Credited account
    pub to: Address,
    /// Amount moved
    pub value: U256,
}

/// Emitted when an owner sets a spender's allowance
#[odra::event]
pub struct Approval {
    /// Account granting the allowance
    pub owner: Address,
    /// Account allowed to spend
    pub spender: Address,
    /// New absolute allowance
    pub value: U256,
}

/// Emitted when liquidity is deposited into the pool
#[odra::event]
pub struct LiquidityAdded {
    /// Account that deposited the tokens
    pub provider: Address,
    /// Amount of token A deposited
    pub amount_a: U256,
    /// Amount of token B deposited
    pub amount_b: U256,
}

/// Emitted when liquidity is withdrawn from the pool
#[odra::event]
pub struct LiquidityRemoved {
    /// Account that received the tokens
    pub provider: Address,
    /// Amount of token A withdrawn
    pub amount_a: U256,
    /// Amount of token B withdrawn
    pub amount_b: U256,
}

/// Emitted on every executed swap
#[odra::event]
pub struct Swap {
    /// Account that traded
    pub trader: Address,
    /// Token pulled from the trader
    pub token_in: Address,
    /// Input amount
    pub amount_in: U256,
    /// Output amount sent to the trader
    pub amount_out: U256,
}

/// Emitted whenever the reserves change
#[odra::event]
pub struct Sync {
    /// Reserve of token A after the operation
    pub reserve_a: U256,
    /// Reserve of token B after the operation
    pub reserve_b: U256,
}
