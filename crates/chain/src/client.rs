use alloy::{
    network::ReceiptResponse,
    primitives::{Address, TxHash, U256},
    providers::{DynProvider, Provider, ProviderBuilder},
};
use sccs_config::{ContractsConfig, NetworkConfig, SwapConfig};
use sccs_core::{
    amount::{self, parse_units, TOKEN_DECIMALS},
    order::SwapOrder,
    RateObservation, RateSource, Result, SccsError, Token,
};
use tracing::{debug, info, warn};

use crate::bindings::{IRateOracle, IStableFX, IERC20};

/// Parameters sent with every `swapExactIn`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapParams {
    /// Minimum acceptable output, raw 6-decimal units.
    pub min_out: U256,
    /// Oldest oracle reading the FX contract may price against, in seconds.
    pub max_age: U256,
}

impl SwapParams {
    pub fn from_config(cfg: &SwapConfig) -> Result<Self> {
        Ok(Self {
            min_out: parse_units(&cfg.min_out, TOKEN_DECIMALS)
                .map_err(|e| SccsError::Config(format!("swap.min_out: {e}")))?,
            max_age: U256::from(cfg.max_age_secs),
        })
    }
}

/// JSON-RPC client for the demo contracts.
///
/// Transactions are sent with `eth_sendTransaction` from an account the node
/// manages (e.g. a funded Anvil account); the dashboard never holds keys.
#[derive(Clone)]
pub struct ChainClient {
    provider:  DynProvider,
    contracts: ContractsConfig,
    chain_id:  u64,
}

impl std::fmt::Debug for ChainClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainClient")
            .field("contracts", &self.contracts)
            .field("chain_id", &self.chain_id)
            .finish_non_exhaustive()
    }
}

impl ChainClient {
    /// Build a client for `network`.  No request is made until first use.
    pub fn new(network: &NetworkConfig, contracts: &ContractsConfig) -> Result<Self> {
        let missing: Vec<&str> = [
            ("hkdc", contracts.hkdc),
            ("sgdc", contracts.sgdc),
            ("oracle", contracts.oracle),
            ("fx", contracts.fx),
        ]
        .into_iter()
        .filter(|(_, addr)| addr.is_zero())
        .map(|(name, _)| name)
        .collect();

        if !missing.is_empty() {
            return Err(SccsError::Config(format!(
                "contract addresses not configured: {}",
                missing.join(", ")
            )));
        }

        let url = network
            .rpc_url
            .parse()
            .map_err(|e| SccsError::Config(format!("invalid rpc_url '{}': {e}", network.rpc_url)))?;

        let provider = ProviderBuilder::new().connect_http(url).erased();

        Ok(Self::with_provider(provider, contracts.clone(), network.chain_id))
    }

    /// Wrap an existing provider, e.g. one over a non-HTTP transport.
    pub fn with_provider(provider: DynProvider, contracts: ContractsConfig, chain_id: u64) -> Self {
        Self { provider, contracts, chain_id }
    }

    /// Check the node is on the expected chain and pick the sending account.
    ///
    /// `preferred` is used if the node manages it; otherwise the node's first
    /// account is returned.
    pub async fn connect(&self, preferred: Option<Address>) -> Result<Address> {
        let chain_id = self.provider.get_chain_id().await.map_err(rpc_err("eth_chainId"))?;
        if chain_id != self.chain_id {
            return Err(SccsError::Chain(format!(
                "node is on chain {chain_id}, expected {}",
                self.chain_id
            )));
        }

        let accounts = self.provider.get_accounts().await.map_err(rpc_err("eth_accounts"))?;
        let first = accounts
            .first()
            .copied()
            .ok_or_else(|| SccsError::Chain("node exposes no accounts".into()))?;

        let account = match preferred {
            Some(want) if accounts.contains(&want) => want,
            Some(want) => {
                warn!(%want, fallback = %first, "preferred account is not managed by the node");
                first
            }
            None => first,
        };

        info!(%account, chain_id, "connected");
        Ok(account)
    }

    pub fn token_address(&self, token: Token) -> Address {
        match token {
            Token::Hkdc => self.contracts.hkdc,
            Token::Sgdc => self.contracts.sgdc,
        }
    }

    /// Address of the FX swap contract (the spender swaps approve).
    pub fn fx_address(&self) -> Address {
        self.contracts.fx
    }

    // ── ERC-20 ────────────────────────────────────────────────────────────────

    pub async fn balance_of(&self, token: Token, owner: Address) -> Result<U256> {
        IERC20::new(self.token_address(token), self.provider.clone())
            .balanceOf(owner)
            .call()
            .await
            .map_err(rpc_err("balanceOf"))
    }

    pub async fn allowance(&self, token: Token, owner: Address, spender: Address) -> Result<U256> {
        IERC20::new(self.token_address(token), self.provider.clone())
            .allowance(owner, spender)
            .call()
            .await
            .map_err(rpc_err("allowance"))
    }

    pub async fn approve(
        &self,
        token: Token,
        from: Address,
        spender: Address,
        amount: U256,
    ) -> Result<TxHash> {
        let pending = IERC20::new(self.token_address(token), self.provider.clone())
            .approve(spender, amount)
            .from(from)
            .send()
            .await
            .map_err(rpc_err("approve"))?;
        confirm("approve", pending).await
    }

    pub async fn transfer(&self, token: Token, from: Address, to: Address, amount: U256) -> Result<TxHash> {
        let pending = IERC20::new(self.token_address(token), self.provider.clone())
            .transfer(to, amount)
            .from(from)
            .send()
            .await
            .map_err(rpc_err("transfer"))?;
        confirm("transfer", pending).await
    }

    // ── FX ────────────────────────────────────────────────────────────────────

    /// Simulate a swap; returns `(amount_out, fee)` without sending anything.
    pub async fn quote_swap(
        &self,
        from: Address,
        order: SwapOrder,
        params: SwapParams,
    ) -> Result<(U256, U256)> {
        let quote = self
            .fx()
            .swapExactIn(
                self.token_address(order.side.token_in()),
                self.token_address(order.side.token_out()),
                order.amount_in,
                params.min_out,
                params.max_age,
            )
            .from(from)
            .call()
            .await
            .map_err(rpc_err("swapExactIn (simulate)"))?;
        Ok((quote.amountOut, quote.fee))
    }

    pub async fn swap_exact_in(
        &self,
        from: Address,
        order: SwapOrder,
        params: SwapParams,
    ) -> Result<TxHash> {
        let pending = self
            .fx()
            .swapExactIn(
                self.token_address(order.side.token_in()),
                self.token_address(order.side.token_out()),
                order.amount_in,
                params.min_out,
                params.max_age,
            )
            .from(from)
            .send()
            .await
            .map_err(rpc_err("swapExactIn"))?;
        confirm("swapExactIn", pending).await
    }

    fn fx(&self) -> IStableFX::IStableFXInstance<DynProvider> {
        IStableFX::new(self.contracts.fx, self.provider.clone())
    }

    // ── Oracle ────────────────────────────────────────────────────────────────

    pub async fn get_rate(&self) -> Result<RateObservation> {
        let reply = IRateOracle::new(self.contracts.oracle, self.provider.clone())
            .getRate()
            .call()
            .await
            .map_err(|e| SccsError::Rate(format!("getRate: {e}")))?;

        observation(reply.rateSgdPerHkd, reply.updatedAt)
    }
}

impl RateSource for ChainClient {
    async fn get_rate(&self) -> Result<RateObservation> {
        ChainClient::get_rate(self).await
    }
}

/// Validate a raw oracle reply.
fn observation(rate: U256, updated_at: U256) -> Result<RateObservation> {
    if rate.is_zero() {
        return Err(SccsError::Rate("oracle returned a zero rate".into()));
    }
    let updated_at = amount::to_u64(updated_at)
        .ok_or_else(|| SccsError::Rate(format!("updatedAt {updated_at} out of range")))?;
    Ok(RateObservation::new(rate, updated_at))
}

/// Wait for `pending` to be mined and fail on a reverted receipt.
async fn confirm<N>(what: &str, pending: alloy::providers::PendingTransactionBuilder<N>) -> Result<TxHash>
where
    N: alloy::network::Network,
{
    let receipt = pending
        .get_receipt()
        .await
        .map_err(|e| SccsError::Chain(format!("{what}: {e}")))?;

    let hash = ReceiptResponse::transaction_hash(&receipt);
    if !ReceiptResponse::status(&receipt) {
        return Err(SccsError::Chain(format!("{what} reverted (tx {hash})")));
    }

    debug!(%hash, "{what} mined");
    Ok(hash)
}

fn rpc_err<E: std::fmt::Display>(what: &'static str) -> impl Fn(E) -> SccsError {
    move |e| SccsError::Chain(format!("{what}: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::{primitives::address, transports::mock::Asserter};

    fn contracts() -> ContractsConfig {
        ContractsConfig {
            hkdc:   address!("5FbDB2315678afecb367f032d93F642f64180aa3"),
            sgdc:   address!("e7f1725E7734CE288F8367e1Bb143E90bb3F0512"),
            oracle: address!("9fE46736679d2D9a65F0992F2272dE9f3c7fa6e0"),
            fx:     address!("Cf7Ed3AccA5a467e9e704C703E8D87F634fB0Fc9"),
        }
    }

    const DEV_ACCOUNT: Address = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
    const SECOND_ACCOUNT: Address = address!("70997970C51812dc3A010C7d01b50e0d17dc79C8");
    const UNMANAGED: Address = address!("3C44CdDdB6a900fa2b585dd299e03d12FA4293BC");

    /// Client whose JSON-RPC replies come from `asserter`, in request order.
    fn mocked(asserter: &Asserter) -> ChainClient {
        let provider = ProviderBuilder::new()
            .connect_mocked_client(asserter.clone())
            .erased();
        ChainClient::with_provider(provider, contracts(), 31337)
    }

    /// Replies for `eth_chainId` then `eth_accounts`.
    fn node(chain_id: &str, accounts: &[Address]) -> Asserter {
        let asserter = Asserter::new();
        asserter.push_success(&chain_id);
        asserter.push_success(&accounts.to_vec());
        asserter
    }

    #[tokio::test]
    async fn connect_uses_managed_preferred_account() {
        let asserter = node("0x7a69", &[DEV_ACCOUNT, SECOND_ACCOUNT]);
        let account = mocked(&asserter).connect(Some(SECOND_ACCOUNT)).await.unwrap();
        assert_eq!(account, SECOND_ACCOUNT);
    }

    #[tokio::test]
    async fn connect_falls_back_to_first_account() {
        let asserter = node("0x7a69", &[DEV_ACCOUNT]);
        let account = mocked(&asserter).connect(Some(UNMANAGED)).await.unwrap();
        assert_eq!(account, DEV_ACCOUNT);
    }

    #[tokio::test]
    async fn connect_without_preference_takes_first_account() {
        let asserter = node("0x7a69", &[DEV_ACCOUNT, SECOND_ACCOUNT]);
        assert_eq!(mocked(&asserter).connect(None).await.unwrap(), DEV_ACCOUNT);
    }

    #[tokio::test]
    async fn connect_rejects_wrong_chain() {
        let asserter = node("0x1", &[DEV_ACCOUNT]);
        let err = mocked(&asserter).connect(None).await.unwrap_err();
        assert_eq!(err.to_string(), "chain error: node is on chain 1, expected 31337");
    }

    #[tokio::test]
    async fn connect_needs_a_node_account() {
        let asserter = node("0x7a69", &[]);
        let err = mocked(&asserter).connect(Some(DEV_ACCOUNT)).await.unwrap_err();
        assert!(matches!(err, SccsError::Chain(_)));
    }

    #[test]
    fn unconfigured_contracts_are_rejected() {
        let cfg = ContractsConfig { oracle: Address::ZERO, fx: Address::ZERO, ..contracts() };
        let err = ChainClient::new(&NetworkConfig::default(), &cfg).unwrap_err();
        assert_eq!(
            err.to_string(),
            "config error: contract addresses not configured: oracle, fx"
        );
    }

    #[test]
    fn bad_rpc_url_is_a_config_error() {
        let net = NetworkConfig { rpc_url: "not a url".into(), ..NetworkConfig::default() };
        assert!(matches!(ChainClient::new(&net, &contracts()), Err(SccsError::Config(_))));
    }

    #[test]
    fn tokens_map_to_configured_addresses() {
        let client = ChainClient::new(&NetworkConfig::default(), &contracts()).unwrap();
        assert_eq!(client.token_address(Token::Hkdc), contracts().hkdc);
        assert_eq!(client.token_address(Token::Sgdc), contracts().sgdc);
        assert_eq!(client.fx_address(), contracts().fx);
    }

    #[test]
    fn swap_params_parse_min_out() {
        let cfg = SwapConfig { max_age_secs: 600, min_out: "0.5".into() };
        let params = SwapParams::from_config(&cfg).unwrap();
        assert_eq!(params.min_out, U256::from(500_000u64));
        assert_eq!(params.max_age, U256::from(600u64));

        let bad = SwapConfig { min_out: "-1".into(), ..cfg };
        assert!(matches!(SwapParams::from_config(&bad), Err(SccsError::Config(_))));
    }

    #[test]
    fn zero_rate_is_malformed() {
        assert!(matches!(observation(U256::ZERO, U256::from(1u8)), Err(SccsError::Rate(_))));
        assert!(matches!(observation(U256::from(1u8), U256::MAX), Err(SccsError::Rate(_))));

        let obs = observation(U256::from(7u8), U256::from(1_700_000_000u64)).unwrap();
        assert_eq!(obs.updated_at, 1_700_000_000);
    }
}
