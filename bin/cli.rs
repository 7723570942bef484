
use simpledex_contracts::dex::pool::{Pool, PoolInitArgs};
use simpledex_contracts::tokens::{TokenA, TokenAInitArgs, TokenB, TokenBInitArgs};
use odra::casper_types::U256;
use odra::prelude::{Address, Addressable};
use odra::host::HostEnv;
use odra::schema::casper_contract_schema::NamedCLType;
use odra_cli::{
    deploy::DeployScript,
    scenario::{Args, Error, Scenario, ScenarioMetadata},
    CommandArg, ContractProvider, DeployedContractsContainer, DeployerExt,
    OdraCli,
};

/// Initial supply minted to the deployer of each token, 1e18-scaled
fn initial_supply() -> U256 {
    U256::from(100u64) * U256::from(10u64).pow(U256::from(18))
}

/// Deploys both tokens and the pool bound to them, matching the order
/// the web front end expects: TokenA, TokenB, then the pool.
pub struct DeployAllScript;

impl DeployScript for DeployAllScript {
    fn deploy(
        &self,
        env: &HostEnv,
        container: &mut DeployedContractsContainer
    ) -> Result<(), odra_cli::deploy::Error> {
        println!("==> Deploying TokenA");
        let token_a = TokenA::load_or_deploy(
            &env,
            TokenAInitArgs {
                initial_supply: initial_supply(),
            },
            container,
            600_000_000_000
        )?;
        println!("TokenA deployed at: {:?}", token_a.address());

        println!("==> Deploying TokenB");
        let token_b = TokenB::load_or_deploy(
            &env,
            TokenBInitArgs {
                initial_supply: initial_supply(),
            },
            container,
            600_000_000_000
        )?;
        println!("TokenB deployed at: {:?}", token_b.address());

        println!("==> Deploying Pool");
        let pool = Pool::load_or_deploy(
            &env,
            PoolInitArgs {
                token_a: token_a.address(),
                token_b: token_b.address(),
            },
            container,
            600_000_000_000
        )?;
        println!("Pool deployed at: {:?}", pool.address());

        Ok(())
    }
}

/// Scenario to approve the pool on both tokens and deposit liquidity.
pub struct AddLiquidityScenario;

impl Scenario for AddLiquidityScenario {
    fn args(&self) -> Vec<CommandArg> {
        vec![
            CommandArg::new(
                "amount_a",
                "Amount of TokenA to deposit",
                NamedCLType::U256,
            ),
            CommandArg::new(
                "amount_b",
                "Amount of TokenB to deposit",
                NamedCLType::U256,
            ),
        ]
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        args: Args
    ) -> Result<(), Error> {
        let mut token_a = container.contract_ref::<TokenA>(env)?;
        let mut token_b = container.contract_ref::<TokenB>(env)?;
        let mut pool = container.contract_ref::<Pool>(env)?;
        let amount_a = args.get_single::<U256>("amount_a")?;
        let amount_b = args.get_single::<U256>("amount_b")?;

        env.set_gas(300_000_000_000);
        token_a.try_approve(pool.address(), amount_a)?;
        env.set_gas(300_000_000_000);
        token_b.try_approve(pool.address(), amount_b)?;
        env.set_gas(600_000_000_000);
        pool.try_add_liquidity(amount_a, amount_b)?;

        println!("Liquidity added: {} TokenA / {} TokenB", amount_a, amount_b);
        println!("Reserves now: {} / {}", pool.reserve_a(), pool.reserve_b());
        Ok(())
    }
}

impl ScenarioMetadata for AddLiquidityScenario {
    const NAME: &'static str = "add-liquidity";
    const DESCRIPTION: &'static str = "Approves the pool on both tokens and deposits liquidity";
}

/// Scenario to swap TokenA for TokenB.
pub struct SwapAForBScenario;

impl Scenario for SwapAForBScenario {
    fn args(&self) -> Vec<CommandArg> {
        vec![
            CommandArg::new(
                "amount_a_in",
                "Amount of TokenA to sell",
                NamedCLType::U256,
            ),
        ]
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        args: Args
    ) -> Result<(), Error> {
        let mut token_a = container.contract_ref::<TokenA>(env)?;
        let mut pool = container.contract_ref::<Pool>(env)?;
        let amount_a_in = args.get_single::<U256>("amount_a_in")?;

        env.set_gas(300_000_000_000);
        token_a.try_approve(pool.address(), amount_a_in)?;
        env.set_gas(600_000_000_000);
        let amount_b_out = pool.try_swap_a_for_b(amount_a_in)?;

        println!("Swapped {} TokenA for {} TokenB", amount_a_in, amount_b_out);
        Ok(())
    }
}

impl ScenarioMetadata for SwapAForBScenario {
    const NAME: &'static str = "swap-a-for-b";
    const DESCRIPTION: &'static str = "Sells TokenA into the pool for TokenB";
}

/// Scenario to swap TokenB for TokenA.
pub struct SwapBForAScenario;

impl Scenario for SwapBForAScenario {
    fn args(&self) -> Vec<CommandArg> {
        vec![
            CommandArg::new(
                "amount_b_in",
                "Amount of TokenB to sell",
                NamedCLType::U256,
            ),
        ]
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        args: Args
    ) -> Result<(), Error> {
        let mut token_b = container.contract_ref::<TokenB>(env)?;
        let mut pool = container.contract_ref::<Pool>(env)?;
        let amount_b_in = args.get_single::<U256>("amount_b_in")?;

        env.set_gas(300_000_000_000);
        token_b.try_approve(pool.address(), amount_b_in)?;
        env.set_gas(600_000_000_000);
        let amount_a_out = pool.try_swap_b_for_a(amount_b_in)?;

        println!("Swapped {} TokenB for {} TokenA", amount_b_in, amount_a_out);
        Ok(())
    }
}

impl ScenarioMetadata for SwapBForAScenario {
    const NAME: &'static str = "swap-b-for-a";
    const DESCRIPTION: &'static str = "Sells TokenB into the pool for TokenA";
}

/// Scenario to read the spot price of either pool token.
pub struct PriceScenario;

impl Scenario for PriceScenario {
    fn args(&self) -> Vec<CommandArg> {
        vec![
            CommandArg::new(
                "token",
                "Address of the token to price (TokenA or TokenB)",
                NamedCLType::Key,
            ),
        ]
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        args: Args
    ) -> Result<(), Error> {
        let pool = container.contract_ref::<Pool>(env)?;
        let token = args.get_single::<Address>("token")?;

        let price = pool.try_get_price(token)?;
        println!("Price (1e18 scale): {}", price);
        Ok(())
    }
}

impl ScenarioMetadata for PriceScenario {
    const NAME: &'static str = "price";
    const DESCRIPTION: &'static str = "Reads the spot price of a pool token";
}

pub fn main() {
    OdraCli::new()
        .about("CLI tool for the SimpleDEX smart contracts")
        // Deploy scripts
        .deploy(DeployAllScript)
        // Contract references
        .contract::<TokenA>()
        .contract::<TokenB>()
        .contract::<Pool>()
        // Scenarios
        .scenario(AddLiquidityScenario)
        .scenario(SwapAForBScenario)
        .scenario(SwapBForAScenario)
        .scenario(PriceScenario)
        .build()
        .run();
}
