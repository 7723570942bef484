//! Liquidity pool contract for the DEX
//!
//! The pool holds reserves of two tokens and allows:
//! - Adding liquidity in any ratio
//! - Removing liquidity up to the current reserves
//! - Swapping one token for the other at the constant-product price
//!
//! Liquidity is tracked as raw reserve amounts only. No share token is
//! minted, so withdrawals are not tied to what a caller contributed.
use odra::prelude::*;
use odra::casper_types::U256;
use odra::ContractRef;
use crate::errors::DexError;
use crate::events::{LiquidityAdded, LiquidityRemoved, Swap, Sync};
use crate::math::{AmmMath, SafeMath};
use crate::token::Cep18TokenContractRef;

/// Two-asset liquidity pool contract
#[odra::module]
pub struct Pool {
    /// Address of token A
    token_a: Var<Address>,
    /// Address of token B
    token_b: Var<Address>,
    /// Reserve of token A
    reserve_a: Var<U256>,
    /// Reserve of token B
    reserve_b: Var<U256>,
    /// Reentrancy lock
    locked: Var<bool>,
}

#[odra::module]
impl Pool {
    /// Initialize the pool with its two token addresses. The binding is
    /// permanent for the lifetime of the contract.
    pub fn init(&mut self, token_a: Address, token_b: Address) {
        self.token_a.set(token_a);
        self.token_b.set(token_b);
        self.reserve_a.set(U256::zero());
        self.reserve_b.set(U256::zero());
        self.locked.set(false);
    }

    // ============ View Functions ============

    /// Get the token A address
    pub fn token_a(&self) -> Address {
        self.token_a.get_or_revert()
    }

    /// Get the token B address
    pub fn token_b(&self) -> Address {
        self.token_b.get_or_revert()
    }

    /// Get the reserve of token A
    pub fn reserve_a(&self) -> U256 {
        self.reserve_a.get_or_default()
    }

    /// Get the reserve of token B
    pub fn reserve_b(&self) -> U256 {
        self.reserve_b.get_or_default()
    }

    /// Get the spot price of the given token quoted in the other pool
    /// asset, with 18 decimal precision. Addresses that are neither pool
    /// token are rejected rather than priced at zero.
    pub fn get_price(&self, token: Address) -> U256 {
        if token != self.token_a() && token != self.token_b() {
            self.env().revert(DexError::UnknownToken);
        }

        let reserve_a = self.reserve_a.get_or_default();
        let reserve_b = self.reserve_b.get_or_default();
        if reserve_a.is_zero() || reserve_b.is_zero() {
            self.env().revert(DexError::ReserveUninitialized);
        }

        if token == self.token_a() {
            AmmMath::price(reserve_b, reserve_a).unwrap_or_revert(&self.env())
        } else {
            AmmMath::price(reserve_a, reserve_b).unwrap_or_revert(&self.env())
        }
    }

    // ============ Liquidity Functions ============

    /// Deposit both tokens into the pool. The caller must have approved
    /// the pool on each token beforehand. The deposited ratio is not
    /// checked against the reserve ratio; an imbalanced deposit shifts
    /// the effective exchange rate.
    pub fn add_liquidity(&mut self, amount_a: U256, amount_b: U256) {
        self.lock();

        let caller = self.env().caller();
        self.pull(self.token_a(), caller, amount_a);
        self.pull(self.token_b(), caller, amount_b);

        let new_reserve_a = SafeMath::add(self.reserve_a.get_or_default(), amount_a)
            .unwrap_or_revert(&self.env());
        let new_reserve_b = SafeMath::add(self.reserve_b.get_or_default(), amount_b)
            .unwrap_or_revert(&self.env());
        self.update_reserves(new_reserve_a, new_reserve_b);

        self.env().emit_event(LiquidityAdded {
            provider: caller,
            amount_a,
            amount_b,
        });

        self.unlock();
    }

    /// Withdraw both tokens from the pool up to the current reserves.
    /// Contributions are not tracked, so any caller may withdraw.
    pub fn remove_liquidity(&mut self, amount_a: U256, amount_b: U256) {
        self.lock();

        let reserve_a = self.reserve_a.get_or_default();
        let reserve_b = self.reserve_b.get_or_default();
        if amount_a > reserve_a || amount_b > reserve_b {
            self.env().revert(DexError::InsufficientReserve);
        }

        let caller = self.env().caller();
        self.update_reserves(reserve_a - amount_a, reserve_b - amount_b);
        self.push(self.token_a(), caller, amount_a);
        self.push(self.token_b(), caller, amount_b);

        self.env().emit_event(LiquidityRemoved {
            provider: caller,
            amount_a,
            amount_b,
        });

        self.unlock();
    }

    // ============ Swap Functions ============

    /// Swap token A for token B at the constant-product price.
    /// Returns the amount of token B sent to the caller.
    pub fn swap_a_for_b(&mut self, amount_a_in: U256) -> U256 {
        self.lock();

        if amount_a_in.is_zero() {
            self.env().revert(DexError::ZeroAmount);
        }

        let reserve_a = self.reserve_a.get_or_default();
        let reserve_b = self.reserve_b.get_or_default();
        if reserve_a.is_zero() || reserve_b.is_zero() {
            self.env().revert(DexError::ReserveUninitialized);
        }

        let caller = self.env().caller();
        self.pull(self.token_a(), caller, amount_a_in);

        let amount_b_out = AmmMath::get_amount_out(amount_a_in, reserve_a, reserve_b)
            .unwrap_or_revert(&self.env());
        if amount_b_out.is_zero() {
            self.env().revert(DexError::InsufficientOutput);
        }

        let new_reserve_a =
            SafeMath::add(reserve_a, amount_a_in).unwrap_or_revert(&self.env());
        self.update_reserves(new_reserve_a, reserve_b - amount_b_out);
        self.push(self.token_b(), caller, amount_b_out);

        self.env().emit_event(Swap {
            trader: caller,
            token_in: self.token_a(),
            amount_in: amount_a_in,
            amount_out: amount_b_out,
        });

        self.unlock();
        amount_b_out
    }

    /// Swap token B for token A at the constant-product price.
    /// Returns the amount of token A sent to the caller.
    pub fn swap_b_for_a(&mut self, amount_b_in: U256) -> U256 {
        self.lock();

        if amount_b_in.is_zero() {
            self.env().revert(DexError::ZeroAmount);
        }

        let reserve_a = self.reserve_a.get_or_default();
        let reserve_b = self.reserve_b.get_or_default();
        if reserve_a.is_zero() || reserve_b.is_zero() {
            self.env().revert(DexError::ReserveUninitialized);
        }

        let caller = self.env().caller();
        self.pull(self.token_b(), caller, amount_b_in);

        let amount_a_out = AmmMath::get_amount_out(amount_b_in, reserve_b, reserve_a)
            .unwrap_or_revert(&self.env());
        if amount_a_out.is_zero() {
            self.env().revert(DexError::InsufficientOutput);
        }

        let new_reserve_b =
            SafeMath::add(reserve_b, amount_b_in).unwrap_or_revert(&self.env());
        self.update_reserves(reserve_a - amount_a_out, new_reserve_b);
        self.push(self.token_a(), caller, amount_a_out);

        self.env().emit_event(Swap {
            trader: caller,
            token_in: self.token_b(),
            amount_in: amount_b_in,
            amount_out: amount_a_out,
        });

        self.unlock();
        amount_a_out
    }

    // ============ Internal Functions ============

    /// Update reserves and emit Sync. After every successful operation the
    /// stored reserves equal the pool's actual token balances.
    fn update_reserves(&mut self, reserve_a: U256, reserve_b: U256) {
        self.reserve_a.set(reserve_a);
        self.reserve_b.set(reserve_b);

        self.env().emit_event(Sync {
            reserve_a,
            reserve_b,
        });
    }

    /// Pull tokens from an account into the pool. Reverts inside the token
    /// when the balance or allowance does not cover the amount, which rolls
    /// back the whole pool call.
    fn pull(&self, token: Address, from: Address, amount: U256) {
        let mut token_ref = Cep18TokenContractRef::new(self.env(), token);
        token_ref.transfer_from(from, self.env().self_address(), amount);
    }

    /// Send tokens out of the pool's own balance
    fn push(&self, token: Address, to: Address, amount: U256) {
        let mut token_ref = Cep18TokenContractRef::new(self.env(), token);
        token_ref.transfer(to, amount);
    }

    /// Reentrancy lock
    fn lock(&mut self) {
        if self.locked.get_or_default() {
            self.env().revert(DexError::Locked);
        }
        self.locked.set(true);
    }

    /// Reentrancy unlock
    fn unlock(&mut self) {
        self.locked.set(false);
    }
}
