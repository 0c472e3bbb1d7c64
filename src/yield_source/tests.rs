//! Scenario tests for the Badger yield source against a live Sett

#[cfg(test)]
mod tests {
    use odra::host::{Deployer, HostEnv};
    use odra::casper_types::U256;
    use odra::prelude::*;
    use crate::errors::{SettError, TokenError, YieldSourceError};
    use crate::sett::vault::{Sett, SettHostRef, SettInitArgs};
    use crate::token::{Erc20Mock, Erc20MockHostRef, Erc20MockInitArgs};
    use crate::yield_source::badger_yield_source::{
        BadgerYieldSource, BadgerYieldSourceHostRef, BadgerYieldSourceInitArgs,
    };

    const AMOUNT: u64 = 100;

    struct Fixture {
        env: HostEnv,
        badger: Erc20MockHostRef,
        sett: SettHostRef,
        yield_source: BadgerYieldSourceHostRef,
        wallet: Address,
        other: Address,
        governance: Address,
    }

    /// Deploys token, Sett and adapter without activating the Sett
    fn deploy() -> Fixture {
        let env = odra_test::env();
        let wallet = env.get_account(0);
        let other = env.get_account(1);
        let governance = env.get_account(4);
        let guardian = env.get_account(5);

        let badger = Erc20Mock::deploy(
            &env,
            Erc20MockInitArgs {
                name: String::from("Badger"),
                symbol: String::from("BADGER"),
            },
        );
        let sett = Sett::deploy(
            &env,
            SettInitArgs {
                token: badger.address(),
                governance,
                guardian,
            },
        );
        let yield_source = BadgerYieldSource::deploy(
            &env,
            BadgerYieldSourceInitArgs {
                sett: sett.address(),
                token: badger.address(),
            },
        );

        Fixture {
            env,
            badger,
            sett,
            yield_source,
            wallet,
            other,
            governance,
        }
    }

    /// Deploys everything, unpauses the Sett, approves the adapter and funds two wallets
    fn setup() -> Fixture {
        let mut f = deploy();

        f.env.set_caller(f.governance);
        f.sett.unpause();
        f.sett.approve_contract_access(f.yield_source.address());

        f.env.set_caller(f.wallet);
        f.badger.mint(f.wallet, U256::from(AMOUNT));
        f.badger.mint(f.other, U256::from(AMOUNT));
        f
    }

    fn supply(f: &mut Fixture, from: Address, amount: U256) {
        f.env.set_caller(from);
        f.badger.approve(f.yield_source.address(), amount);
        f.yield_source.supply_token_to(amount, from);
    }

    #[test]
    fn test_deposit_token_is_constructor_argument() {
        let mut f = setup();
        assert_eq!(f.yield_source.deposit_token(), f.badger.address());
        assert_eq!(f.yield_source.sett(), f.sett.address());

        let wallet = f.wallet;
        supply(&mut f, wallet, U256::from(AMOUNT));
        f.yield_source.redeem_token(U256::from(AMOUNT));
        assert_eq!(f.yield_source.deposit_token(), f.badger.address());
    }

    #[test]
    fn test_supply_credits_sett_shares() {
        let mut f = setup();
        assert_eq!(f.badger.balance_of(f.sett.address()), U256::zero());
        assert_eq!(f.badger.balance_of(f.wallet), U256::from(AMOUNT));

        let wallet = f.wallet;
        supply(&mut f, wallet, U256::from(AMOUNT));

        let shares = f.yield_source.balance_of(wallet);
        assert!(shares > U256::zero());
        assert_eq!(f.sett.balance_of(f.yield_source.address()), shares);
        assert_eq!(shares, U256::from(AMOUNT));
        assert_eq!(f.badger.balance_of(f.sett.address()), U256::from(AMOUNT));
        assert_eq!(f.badger.balance_of(wallet), U256::zero());
        assert_eq!(f.yield_source.balance_of_token(wallet), U256::from(AMOUNT));
    }

    #[test]
    fn test_supply_increases_shares_every_time() {
        let mut f = setup();
        let wallet = f.wallet;
        let mut previous = f.yield_source.balance_of(wallet);

        for part in [10u64, 20, 30, 40] {
            let before = f.badger.balance_of(wallet);
            supply(&mut f, wallet, U256::from(part));
            let shares = f.yield_source.balance_of(wallet);
            assert!(shares > previous);
            assert_eq!(f.badger.balance_of(wallet), before - U256::from(part));
            previous = shares;
        }
    }

    #[test]
    fn test_redeem_round_trip() {
        let mut f = setup();
        let wallet = f.wallet;
        supply(&mut f, wallet, U256::from(AMOUNT));
        assert_eq!(f.badger.balance_of(wallet), U256::zero());

        let redeemed = f.yield_source.redeem_token(U256::from(AMOUNT));

        assert_eq!(redeemed, U256::from(AMOUNT));
        assert_eq!(f.badger.balance_of(wallet), U256::from(AMOUNT));
        assert_eq!(f.yield_source.balance_of(wallet), U256::zero());
        assert_eq!(f.sett.total_supply(), U256::zero());
    }

    #[test]
    fn test_partial_redeem_burns_proportional_shares() {
        let mut f = setup();
        let wallet = f.wallet;
        supply(&mut f, wallet, U256::from(AMOUNT));

        f.yield_source.redeem_token(U256::from(40));

        assert_eq!(f.yield_source.balance_of(wallet), U256::from(60));
        assert_eq!(f.yield_source.balance_of_token(wallet), U256::from(60));
        assert_eq!(f.badger.balance_of(wallet), U256::from(40));
    }

    #[test]
    fn test_supply_without_allowance_fails() {
        let mut f = setup();
        f.env.set_caller(f.wallet);
        f.badger.approve(f.yield_source.address(), U256::from(AMOUNT - 1));

        assert_eq!(
            f.yield_source.try_supply_token_to(U256::from(AMOUNT), f.wallet),
            Err(YieldSourceError::InsufficientAllowance.into())
        );
        assert_eq!(f.badger.balance_of(f.wallet), U256::from(AMOUNT));
    }

    #[test]
    fn test_supply_zero_fails() {
        let mut f = setup();
        assert_eq!(
            f.yield_source.try_supply_token_to(U256::zero(), f.wallet),
            Err(YieldSourceError::InvalidAmount.into())
        );
        assert_eq!(
            f.yield_source.try_redeem_token(U256::zero()),
            Err(YieldSourceError::InvalidAmount.into())
        );
    }

    #[test]
    fn test_supply_with_failing_transfer_fails() {
        let mut f = setup();
        f.env.set_caller(f.wallet);
        f.badger.approve(f.yield_source.address(), U256::from(AMOUNT));
        f.badger.set_failing_transfers(true);

        assert_eq!(
            f.yield_source.try_supply_token_to(U256::from(AMOUNT), f.wallet),
            Err(YieldSourceError::TransferFailed.into())
        );
        assert_eq!(f.yield_source.balance_of(f.wallet), U256::zero());
    }

    #[test]
    fn test_supply_more_than_balance_reverts_in_token() {
        let mut f = setup();
        let amount = U256::from(AMOUNT * 2);
        f.env.set_caller(f.wallet);
        f.badger.approve(f.yield_source.address(), amount);

        assert_eq!(
            f.yield_source.try_supply_token_to(amount, f.wallet),
            Err(TokenError::InsufficientBalance.into())
        );
    }

    #[test]
    fn test_redeem_more_than_held_fails() {
        let mut f = setup();
        let wallet = f.wallet;
        supply(&mut f, wallet, U256::from(AMOUNT));

        assert_eq!(
            f.yield_source.try_redeem_token(U256::from(AMOUNT + 1)),
            Err(SettError::InsufficientShares.into())
        );
        assert_eq!(f.yield_source.balance_of(wallet), U256::from(AMOUNT));
        assert_eq!(f.badger.balance_of(wallet), U256::zero());
    }

    #[test]
    fn test_supply_too_small_for_a_share_reverts() {
        let mut f = setup();
        let wallet = f.wallet;
        supply(&mut f, wallet, U256::from(AMOUNT));

        // 100 shares backed by 1000 underlying: 2 tokens buy 0.2 shares
        f.badger.mint(f.sett.address(), U256::from(900));
        f.badger.mint(wallet, U256::from(2));
        f.badger.approve(f.yield_source.address(), U256::from(2));

        assert_eq!(
            f.yield_source.try_supply_token_to(U256::from(2), wallet),
            Err(YieldSourceError::ZeroShares.into())
        );
        assert_eq!(f.badger.balance_of(wallet), U256::from(2));
        assert_eq!(f.yield_source.balance_of(wallet), U256::from(AMOUNT));
        assert_eq!(f.badger.balance_of(f.sett.address()), U256::from(1000));
    }

    #[test]
    fn test_redeem_from_empty_sett_fails() {
        let mut f = setup();
        assert_eq!(
            f.yield_source.try_redeem_token(U256::from(AMOUNT)),
            Err(YieldSourceError::InsufficientShares.into())
        );
    }

    #[test]
    fn test_redeem_with_failing_transfer_reverts_whole_call() {
        let mut f = setup();
        let wallet = f.wallet;
        supply(&mut f, wallet, U256::from(AMOUNT));
        f.badger.set_failing_transfers(true);

        assert!(f.yield_source.try_redeem_token(U256::from(AMOUNT)).is_err());

        // The Sett withdrawal was rolled back with the failed call
        assert_eq!(f.yield_source.balance_of(wallet), U256::from(AMOUNT));
        assert_eq!(f.badger.balance_of(f.sett.address()), U256::from(AMOUNT));
    }

    #[test]
    fn test_unapproved_adapter_cannot_supply() {
        let mut f = deploy();
        f.env.set_caller(f.governance);
        f.sett.unpause();

        f.env.set_caller(f.wallet);
        f.badger.mint(f.wallet, U256::from(AMOUNT));
        f.badger.approve(f.yield_source.address(), U256::from(AMOUNT));

        assert_eq!(
            f.yield_source.try_supply_token_to(U256::from(AMOUNT), f.wallet),
            Err(SettError::VaultAccessDenied.into())
        );
        // Nothing left the wallet
        assert_eq!(f.badger.balance_of(f.wallet), U256::from(AMOUNT));
    }

    #[test]
    fn test_unapproved_adapter_cannot_redeem() {
        let mut f = deploy();
        f.env.set_caller(f.governance);
        f.sett.unpause();

        // Only an account holds a position in the Sett
        f.env.set_caller(f.other);
        f.badger.mint(f.other, U256::from(AMOUNT));
        f.badger.approve(f.sett.address(), U256::from(AMOUNT));
        f.sett.deposit(U256::from(AMOUNT));

        f.env.set_caller(f.wallet);
        assert_eq!(
            f.yield_source.try_redeem_token(U256::from(AMOUNT)),
            Err(SettError::VaultAccessDenied.into())
        );
        assert_eq!(f.sett.balance_of(f.other), U256::from(AMOUNT));
    }

    #[test]
    fn test_revoked_adapter_cannot_redeem() {
        let mut f = setup();
        let wallet = f.wallet;
        supply(&mut f, wallet, U256::from(AMOUNT));

        f.env.set_caller(f.governance);
        f.sett.revoke_contract_access(f.yield_source.address());

        f.env.set_caller(wallet);
        assert_eq!(
            f.yield_source.try_redeem_token(U256::from(AMOUNT)),
            Err(SettError::VaultAccessDenied.into())
        );
    }

    #[test]
    fn test_paused_sett_blocks_adapter() {
        let mut f = setup();
        let wallet = f.wallet;
        supply(&mut f, wallet, U256::from(AMOUNT / 2));

        f.env.set_caller(f.governance);
        f.sett.pause();

        f.env.set_caller(wallet);
        f.badger.approve(f.yield_source.address(), U256::from(AMOUNT / 2));
        assert_eq!(
            f.yield_source.try_supply_token_to(U256::from(AMOUNT / 2), wallet),
            Err(SettError::VaultPaused.into())
        );
        assert_eq!(
            f.yield_source.try_redeem_token(U256::from(AMOUNT / 2)),
            Err(SettError::VaultPaused.into())
        );
    }

    #[test]
    fn test_yield_accrues_to_balance_of_token() {
        let mut f = setup();
        let wallet = f.wallet;
        supply(&mut f, wallet, U256::from(AMOUNT));

        // Strategy profit: the Sett now holds 150 underlying for 100 shares
        f.badger.mint(f.sett.address(), U256::from(AMOUNT / 2));

        assert_eq!(f.yield_source.balance_of(wallet), U256::from(AMOUNT));
        assert_eq!(f.yield_source.balance_of_token(wallet), U256::from(150));

        let redeemed = f.yield_source.redeem_token(U256::from(150));
        assert_eq!(redeemed, U256::from(150));
        assert_eq!(f.badger.balance_of(wallet), U256::from(150));
        assert_eq!(f.yield_source.balance_of(wallet), U256::zero());
    }

    #[test]
    fn test_redeem_rounds_down_in_favour_of_sett() {
        let mut f = setup();
        let wallet = f.wallet;
        supply(&mut f, wallet, U256::from(AMOUNT));
        // 100 shares backed by 300 underlying
        f.badger.mint(f.sett.address(), U256::from(AMOUNT * 2));

        // 10 * 100 / 300 = 3 shares, worth 9 underlying
        let redeemed = f.yield_source.redeem_token(U256::from(10));
        assert_eq!(redeemed, U256::from(9));
        assert_eq!(f.yield_source.balance_of(wallet), U256::from(97));
    }

    #[test]
    fn test_balances_are_aggregate() {
        let mut f = setup();
        let (wallet, other) = (f.wallet, f.other);
        supply(&mut f, wallet, U256::from(AMOUNT));
        supply(&mut f, other, U256::from(AMOUNT));

        let stranger = f.env.get_account(7);
        assert_eq!(f.yield_source.balance_of(wallet), U256::from(AMOUNT * 2));
        assert_eq!(f.yield_source.balance_of(stranger), U256::from(AMOUNT * 2));
        assert_eq!(f.yield_source.balance_of_token(other), U256::from(AMOUNT * 2));
    }

    #[test]
    fn test_accidental_transfer_is_not_counted() {
        let mut f = setup();
        f.env.set_caller(f.wallet);
        f.badger.transfer(f.yield_source.address(), U256::from(AMOUNT));

        assert_eq!(f.yield_source.balance_of_token(f.wallet), U256::zero());
        assert_eq!(f.yield_source.balance_of(f.wallet), U256::zero());
    }

    #[test]
    fn test_direct_sett_depositors_share_the_rate() {
        let mut f = setup();
        let (wallet, other) = (f.wallet, f.other);

        // An account deposits into the Sett directly
        f.env.set_caller(other);
        f.badger.approve(f.sett.address(), U256::from(AMOUNT));
        f.sett.deposit(U256::from(AMOUNT));

        supply(&mut f, wallet, U256::from(AMOUNT));
        assert_eq!(f.sett.total_supply(), U256::from(AMOUNT * 2));
        assert_eq!(f.yield_source.balance_of_token(wallet), U256::from(AMOUNT));

        // The adapter cannot redeem the other depositor's position
        assert_eq!(
            f.yield_source.try_redeem_token(U256::from(AMOUNT * 2)),
            Err(SettError::InsufficientShares.into())
        );
    }
}
