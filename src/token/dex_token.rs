//! DexToken - CEP-18 compatible fungible token
//!
//! Each deployment is an independent ledger: balances, allowances and
//! total supply for one asset. The full initial supply is credited to
//! the deployer at init time.

use odra::prelude::*;
use odra::casper_types::U256;
use crate::errors::DexError;
use crate::events::{Approval, Transfer};

/// Fungible token ledger module
#[odra::module]
pub struct DexToken {
    /// Token name
    name: Var<String>,
    /// Token symbol
    symbol: Var<String>,
    /// Token decimals
    decimals: Var<u8>,
    /// Total supply, equal to the sum of all balances at all times
    total_supply: Var<U256>,
    /// Balance mapping: owner -> balance
    balances: Mapping<Address, U256>,
    /// Allowance mapping: (owner, spender) -> amount
    allowances: Mapping<(Address, Address), U256>,
}

#[odra::module]
impl DexToken {
    /// Initialize the token and credit the initial supply to the deployer
    pub fn init(&mut self, name: String, symbol: String, initial_supply: U256) {
        self.name.set(name);
        self.symbol.set(symbol);
        self.decimals.set(18);
        self.total_supply.set(initial_supply);

        let deployer = self.env().caller();
        self.balances.set(&deployer, initial_supply);

        self.env().emit_event(Transfer {
            from: self.env().self_address(),
            to: deployer,
            value: initial_supply,
        });
    }

    // ============ View Functions ============

    /// Get the token name
    pub fn name(&self) -> String {
        self.name.get_or_default()
    }

    /// Get the token symbol
    pub fn symbol(&self) -> String {
        self.symbol.get_or_default()
    }

    /// Get the token decimals
    pub fn decimals(&self) -> u8 {
        self.decimals.get_or_default()
    }

    /// Get the total supply
    pub fn total_supply(&self) -> U256 {
        self.total_supply.get_or_default()
    }

    /// Get the balance of an address
    pub fn balance_of(&self, owner: Address) -> U256 {
        self.balances.get(&owner).unwrap_or_default()
    }

    /// Get the remaining allowance for a spender
    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.allowances.get(&(owner, spender)).unwrap_or_default()
    }

    // ============ Write Functions ============

    /// Transfer tokens from the caller to another address
    pub fn transfer(&mut self, to: Address, amount: U256) -> bool {
        let caller = self.env().caller();
        self.transfer_internal(caller, to, amount);
        true
    }

    /// Set a spender's allowance to an absolute amount, overwriting
    /// any prior value
    pub fn approve(&mut self, spender: Address, amount: U256) -> bool {
        if spender == self.env().self_address() {
            self.env().revert(DexError::InvalidRecipient);
        }
        let caller = self.env().caller();
        self.approve_internal(caller, spender, amount);
        true
    }

    /// Transfer tokens from one address to another on the strength of
    /// a prior approval. Both the allowance and the balance must cover
    /// the amount before anything is written.
    pub fn transfer_from(&mut self, from: Address, to: Address, amount: U256) -> bool {
        let caller = self.env().caller();
        let current_allowance = self.allowance(from, caller);

        if current_allowance < amount {
            self.env().revert(DexError::InsufficientAllowance);
        }
        if self.balance_of(from) < amount {
            self.env().revert(DexError::InsufficientBalance);
        }

        self.approve_internal(from, caller, current_allowance - amount);
        self.transfer_internal(from, to, amount);
        true
    }

    /// Burn tokens from the caller's own balance, shrinking total supply.
    /// No allowance path exists; only self-burn is supported.
    pub fn burn(&mut self, amount: U256) -> bool {
        let caller = self.env().caller();
        let balance = self.balance_of(caller);

        if balance < amount {
            self.env().revert(DexError::InsufficientBalance);
        }

        self.balances.set(&caller, balance - amount);
        self.total_supply.set(self.total_supply() - amount);

        self.env().emit_event(Transfer {
            from: caller,
            to: self.env().self_address(),
            value: amount,
        });
        true
    }

    // ============ Internal Functions ============

    /// Internal transfer. The token contract itself is the one address
    /// tokens can never be sent to; anything parked there is gone.
    fn transfer_internal(&mut self, from: Address, to: Address, amount: U256) {
        if to == self.env().self_address() {
            self.env().revert(DexError::InvalidRecipient);
        }

        let from_balance = self.balance_of(from);
        if from_balance < amount {
            self.env().revert(DexError::InsufficientBalance);
        }

        self.balances.set(&from, from_balance - amount);
        let to_balance = self.balance_of(to);
        self.balances.set(&to, to_balance + amount);

        self.env().emit_event(Transfer {
            from,
            to,
            value: amount,
        });
    }

    /// Internal approve
    fn approve_internal(&mut self, owner: Address, spender: Address, amount: U256) {
        self.allowances.set(&(owner, spender), amount);

        self.env().emit_event(Approval {
            owner,
            spender,
            value: amount,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use odra::host::{Deployer, HostEnv};
    use odra::prelude::Addressable;

    fn setup() -> (HostEnv, DexTokenHostRef) {
        let env = odra_test::env();
        let init_args = DexTokenInitArgs {
            name: String::from("Token A"),
            symbol: String::from("TKA"),
            initial_supply: U256::from(100),
        };
        let token = DexToken::deploy(&env, init_args);
        (env, token)
    }

    #[test]
    fn init_credits_the_deployer() {
        let (env, token) = setup();
        let deployer = env.get_account(0);

        assert_eq!(token.name(), "Token A");
        assert_eq!(token.symbol(), "TKA");
        assert_eq!(token.decimals(), 18);
        assert_eq!(token.total_supply(), U256::from(100));
        assert_eq!(token.balance_of(deployer), U256::from(100));
    }

    #[test]
    fn transfer_moves_balance_and_conserves_supply() {
        let (env, mut token) = setup();
        let deployer = env.get_account(0);
        let user = env.get_account(1);

        token.transfer(user, U256::from(40));

        assert_eq!(token.balance_of(deployer), U256::from(60));
        assert_eq!(token.balance_of(user), U256::from(40));
        assert_eq!(token.total_supply(), U256::from(100));
    }

    #[test]
    fn transfer_with_insufficient_balance_fails() {
        let (env, mut token) = setup();
        let user = env.get_account(1);

        assert_eq!(
            token.try_transfer(user, U256::from(200)),
            Err(DexError::InsufficientBalance.into())
        );
        assert_eq!(token.balance_of(user), U256::zero());
    }

    #[test]
    fn transfer_to_the_token_contract_is_rejected() {
        let (_env, mut token) = setup();
        let own_address = token.address();

        assert_eq!(
            token.try_transfer(own_address, U256::from(10)),
            Err(DexError::InvalidRecipient.into())
        );
    }

    #[test]
    fn approve_overwrites_the_previous_allowance() {
        let (env, mut token) = setup();
        let deployer = env.get_account(0);
        let spender = env.get_account(1);

        token.approve(spender, U256::from(50));
        assert_eq!(token.allowance(deployer, spender), U256::from(50));

        token.approve(spender, U256::from(20));
        assert_eq!(token.allowance(deployer, spender), U256::from(20));
    }

    #[test]
    fn approving_the_token_contract_is_rejected() {
        let (_env, mut token) = setup();
        let own_address = token.address();

        assert_eq!(
            token.try_approve(own_address, U256::from(10)),
            Err(DexError::InvalidRecipient.into())
        );
    }

    #[test]
    fn transfer_from_spends_the_allowance() {
        let (env, mut token) = setup();
        let deployer = env.get_account(0);
        let spender = env.get_account(1);
        let recipient = env.get_account(2);

        token.approve(spender, U256::from(50));

        env.set_caller(spender);
        token.transfer_from(deployer, recipient, U256::from(30));

        assert_eq!(token.balance_of(deployer), U256::from(70));
        assert_eq!(token.balance_of(recipient), U256::from(30));
        assert_eq!(token.allowance(deployer, spender), U256::from(20));
    }

    #[test]
    fn transfer_from_without_allowance_fails() {
        let (env, mut token) = setup();
        let deployer = env.get_account(0);
        let spender = env.get_account(1);
        let recipient = env.get_account(2);

        token.approve(spender, U256::from(10));

        env.set_caller(spender);
        assert_eq!(
            token.try_transfer_from(deployer, recipient, U256::from(20)),
            Err(DexError::InsufficientAllowance.into())
        );
        assert_eq!(token.allowance(deployer, spender), U256::from(10));
    }

    #[test]
    fn transfer_from_leaves_the_allowance_untouched_on_balance_failure() {
        let (env, mut token) = setup();
        let deployer = env.get_account(0);
        let spender = env.get_account(1);
        let recipient = env.get_account(2);

        // allowance well above the deployer's whole balance
        token.approve(spender, U256::from(500));

        env.set_caller(spender);
        assert_eq!(
            token.try_transfer_from(deployer, recipient, U256::from(200)),
            Err(DexError::InsufficientBalance.into())
        );

        assert_eq!(token.allowance(deployer, spender), U256::from(500));
        assert_eq!(token.balance_of(deployer), U256::from(100));
    }

    #[test]
    fn burn_shrinks_balance_and_supply() {
        let (env, mut token) = setup();
        let deployer = env.get_account(0);

        token.burn(U256::from(30));

        assert_eq!(token.balance_of(deployer), U256::from(70));
        assert_eq!(token.total_supply(), U256::from(70));
    }

    #[test]
    fn burn_beyond_balance_fails() {
        let (_env, mut token) = setup();

        assert_eq!(
            token.try_burn(U256::from(200)),
            Err(DexError::InsufficientBalance.into())
        );
        assert_eq!(token.total_supply(), U256::from(100));
    }
}
