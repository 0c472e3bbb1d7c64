//! CLI tool for deploying and driving the Badger yield source.

use badger_yield_source::sett::Sett;
use badger_yield_source::token::Erc20Mock;
use badger_yield_source::yield_source::BadgerYieldSource;
use odra::casper_types::U256;
use odra::host::HostEnv;
use odra::prelude::{Address, Addressable};
use odra::schema::casper_contract_schema::NamedCLType;
use odra_cli::{
    deploy::DeployScript,
    scenario::{Args, Error, Scenario, ScenarioMetadata},
    CommandArg, ContractProvider, DeployedContractsContainer, DeployerExt,
    OdraCli,
};

const TOKEN_DEPLOY_GAS: u64 = 300_000_000_000;
const SETT_DEPLOY_GAS: u64 = 400_000_000_000;
const YIELD_SOURCE_DEPLOY_GAS: u64 = 300_000_000_000;
const CALL_GAS: u64 = 50_000_000_000;

/// Deploys the mock underlying token ("Badger" / "BADGER").
pub struct TokenDeployScript;

impl DeployScript for TokenDeployScript {
    fn deploy(
        &self,
        env: &HostEnv,
        container: &mut DeployedContractsContainer
    ) -> Result<(), odra_cli::deploy::Error> {
        use badger_yield_source::token::Erc20MockInitArgs;

        let _badger = Erc20Mock::load_or_deploy(
            &env,
            Erc20MockInitArgs {
                name: String::from("Badger"),
                symbol: String::from("BADGER"),
            },
            container,
            TOKEN_DEPLOY_GAS
        )?;

        Ok(())
    }
}

/// Deploys a Sett over the deployed token.
/// The deployer becomes governance and guardian; the Sett starts paused.
pub struct SettDeployScript;

impl DeployScript for SettDeployScript {
    fn deploy(
        &self,
        env: &HostEnv,
        container: &mut DeployedContractsContainer
    ) -> Result<(), odra_cli::deploy::Error> {
        use badger_yield_source::sett::vault::SettInitArgs;

        let badger = container.contract_ref::<Erc20Mock>(env)?;
        let deployer = env.caller();

        let _sett = Sett::load_or_deploy(
            &env,
            SettInitArgs {
                token: badger.address().clone(),
                governance: deployer,
                guardian: deployer,
            },
            container,
            SETT_DEPLOY_GAS
        )?;

        Ok(())
    }
}

/// Deploys the yield source bound to the deployed Sett and token.
pub struct YieldSourceDeployScript;

impl DeployScript for YieldSourceDeployScript {
    fn deploy(
        &self,
        env: &HostEnv,
        container: &mut DeployedContractsContainer
    ) -> Result<(), odra_cli::deploy::Error> {
        use badger_yield_source::yield_source::badger_yield_source::BadgerYieldSourceInitArgs;

        let badger = container.contract_ref::<Erc20Mock>(env)?;
        let sett = container.contract_ref::<Sett>(env)?;

        let _yield_source = BadgerYieldSource::load_or_deploy(
            &env,
            BadgerYieldSourceInitArgs {
                sett: sett.address().clone(),
                token: badger.address().clone(),
            },
            container,
            YIELD_SOURCE_DEPLOY_GAS
        )?;

        Ok(())
    }
}

/// Deploys token, Sett and yield source in order, then unpauses the Sett
/// and grants the yield source contract access.
pub struct LocalStackDeployScript;

impl DeployScript for LocalStackDeployScript {
    fn deploy(
        &self,
        env: &HostEnv,
        container: &mut DeployedContractsContainer
    ) -> Result<(), odra_cli::deploy::Error> {
        TokenDeployScript.deploy(env, container)?;
        SettDeployScript.deploy(env, container)?;
        YieldSourceDeployScript.deploy(env, container)?;

        let mut sett = container.contract_ref::<Sett>(env)?;
        let yield_source = container.contract_ref::<BadgerYieldSource>(env)?;

        if sett.is_paused() {
            env.set_gas(CALL_GAS);
            sett.unpause();
        }
        if !sett.is_approved(yield_source.address().clone()) {
            env.set_gas(CALL_GAS);
            sett.approve_contract_access(yield_source.address().clone());
        }

        Ok(())
    }
}

/// Unpauses the Sett and grants the yield source contract access.
pub struct ActivateSettScenario;

impl Scenario for ActivateSettScenario {
    fn args(&self) -> Vec<CommandArg> {
        vec![]
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        _args: Args
    ) -> Result<(), Error> {
        let mut sett = container.contract_ref::<Sett>(env)?;
        let yield_source = container.contract_ref::<BadgerYieldSource>(env)?;

        env.set_gas(CALL_GAS);
        if sett.is_paused() {
            sett.try_unpause()?;
        }
        env.set_gas(CALL_GAS);
        sett.try_approve_contract_access(yield_source.address().clone())?;

        println!("Sett unpaused, yield source approved");
        Ok(())
    }
}

impl ScenarioMetadata for ActivateSettScenario {
    const NAME: &'static str = "activate-sett";
    const DESCRIPTION: &'static str = "Unpauses the Sett and approves the yield source";
}

/// Grants contract access on the Sett to an arbitrary contract.
pub struct ApproveContractAccessScenario;

impl Scenario for ApproveContractAccessScenario {
    fn args(&self) -> Vec<CommandArg> {
        vec![CommandArg::new(
            "account",
            "Contract to approve on the Sett",
            NamedCLType::Key,
        )]
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        args: Args
    ) -> Result<(), Error> {
        let mut sett = container.contract_ref::<Sett>(env)?;
        let account = args.get_single::<Address>("account")?;

        env.set_gas(CALL_GAS);
        sett.try_approve_contract_access(account)?;

        println!("Contract access approved");
        Ok(())
    }
}

impl ScenarioMetadata for ApproveContractAccessScenario {
    const NAME: &'static str = "approve-contract-access";
    const DESCRIPTION: &'static str = "Approves a contract to deposit into the Sett";
}

/// Mints test tokens to the caller.
pub struct MintScenario;

impl Scenario for MintScenario {
    fn args(&self) -> Vec<CommandArg> {
        vec![CommandArg::new(
            "amount",
            "Amount of underlying to mint to the caller",
            NamedCLType::U256,
        )]
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        args: Args
    ) -> Result<(), Error> {
        let mut badger = container.contract_ref::<Erc20Mock>(env)?;
        let amount = args.get_single::<U256>("amount")?;

        env.set_gas(CALL_GAS);
        badger.try_mint(env.caller(), amount)?;

        println!("Minted {} BADGER", amount);
        Ok(())
    }
}

impl ScenarioMetadata for MintScenario {
    const NAME: &'static str = "mint";
    const DESCRIPTION: &'static str = "Mints mock underlying tokens to the caller";
}

/// Approves and supplies underlying to the yield source.
pub struct SupplyScenario;

impl Scenario for SupplyScenario {
    fn args(&self) -> Vec<CommandArg> {
        vec![CommandArg::new(
            "amount",
            "Amount of underlying to supply",
            NamedCLType::U256,
        )]
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        args: Args
    ) -> Result<(), Error> {
        let mut badger = container.contract_ref::<Erc20Mock>(env)?;
        let mut yield_source = container.contract_ref::<BadgerYieldSource>(env)?;
        let amount = args.get_single::<U256>("amount")?;
        let caller = env.caller();

        env.set_gas(CALL_GAS);
        badger.try_approve(yield_source.address().clone(), amount)?;
        env.set_gas(CALL_GAS);
        yield_source.try_supply_token_to(amount, caller)?;

        println!("Supplied {} BADGER", amount);
        Ok(())
    }
}

impl ScenarioMetadata for SupplyScenario {
    const NAME: &'static str = "supply";
    const DESCRIPTION: &'static str = "Supplies underlying to the yield source";
}

/// Redeems underlying from the yield source.
pub struct RedeemScenario;

impl Scenario for RedeemScenario {
    fn args(&self) -> Vec<CommandArg> {
        vec![CommandArg::new(
            "amount",
            "Amount of underlying to redeem",
            NamedCLType::U256,
        )]
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        args: Args
    ) -> Result<(), Error> {
        let mut yield_source = container.contract_ref::<BadgerYieldSource>(env)?;
        let amount = args.get_single::<U256>("amount")?;

        env.set_gas(CALL_GAS);
        let redeemed = yield_source.try_redeem_token(amount)?;

        println!("Redeemed {} BADGER", redeemed);
        Ok(())
    }
}

impl ScenarioMetadata for RedeemScenario {
    const NAME: &'static str = "redeem";
    const DESCRIPTION: &'static str = "Redeems underlying from the yield source";
}

/// Prints the yield source position.
pub struct BalancesScenario;

impl Scenario for BalancesScenario {
    fn args(&self) -> Vec<CommandArg> {
        vec![]
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        _args: Args
    ) -> Result<(), Error> {
        let yield_source = container.contract_ref::<BadgerYieldSource>(env)?;
        let sett = container.contract_ref::<Sett>(env)?;
        let caller = env.caller();

        println!("yield source: {:?}", yield_source.address());
        println!("sett shares:  {}", yield_source.balance_of(caller));
        println!("token value:  {}", yield_source.balance_of_token(caller));
        println!("share price:  {}", sett.get_price_per_full_share());
        Ok(())
    }
}

impl ScenarioMetadata for BalancesScenario {
    const NAME: &'static str = "balances";
    const DESCRIPTION: &'static str = "Prints the yield source's Sett position";
}

/// Main function to run the CLI tool.
pub fn main() {
    OdraCli::new()
        .about("CLI tool for the Badger yield source")
        // Deploy scripts
        .deploy(TokenDeployScript)
        .deploy(SettDeployScript)
        .deploy(YieldSourceDeployScript)
        .deploy(LocalStackDeployScript)
        // Contract references
        .contract::<Erc20Mock>()
        .contract::<Sett>()
        .contract::<BadgerYieldSource>()
        // Scenarios
        .scenario(ActivateSettScenario)
        .scenario(ApproveContractAccessScenario)
        .scenario(MintScenario)
        .scenario(SupplyScenario)
        .scenario(RedeemScenario)
        .scenario(BalancesScenario)
        .build()
        .run();
}
