//! Well-known mainnet tokens, Uniswap v3 pairs and the swap router.

use alloy_primitives::{address, Address, U256};

/// An ERC-20 token and its decimals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    pub symbol: &'static str,
    pub address: Address,
    pub decimals: u8,
}

impl Token {
    /// `whole` tokens expressed in the smallest unit (`whole * 10^decimals`).
    pub fn units(&self, whole: u64) -> U256 {
        U256::from(whole) * U256::from(10u64).pow(U256::from(self.decimals))
    }
}

/// A single-hop swap route through a Uniswap v3 pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwapPair {
    pub token_in: Token,
    pub token_out: Token,
    pub pool: Address,
    pub fee: u32,
}

impl SwapPair {
    pub fn name(&self) -> String {
        format!("{}/{}", self.token_in.symbol, self.token_out.symbol)
    }
}

pub const USDC: Token = Token {
    symbol: "USDC",
    address: address!("a0b86991c6218b36c1d19d4a2e9eb0ce3606eb48"),
    decimals: 6,
};
pub const WETH: Token = Token {
    symbol: "WETH",
    address: address!("c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2"),
    decimals: 18,
};
pub const DAI: Token = Token {
    symbol: "DAI",
    address: address!("6b175474e89094c44da98b954eedeac495271d0f"),
    decimals: 18,
};
pub const USDT: Token = Token {
    symbol: "USDT",
    address: address!("dac17f958d2ee523a2206206994597c13d831ec7"),
    decimals: 6,
};
pub const WBTC: Token = Token {
    symbol: "WBTC",
    address: address!("2260fac5e5542a773aa44fbcfedf7c193bc2c599"),
    decimals: 8,
};

/// Uniswap `SwapRouter02`.
pub const SWAP_ROUTER_02: Address = address!("68b3465833fb72a70ecdf485e0e4c7bd8665fc45");

/// 0.3% fee tier.
pub const FEE_TIER_030: u32 = 3000;

pub static TOKENS: [Token; 5] = [USDC, WETH, DAI, USDT, WBTC];

pub static PAIRS: [SwapPair; 4] = [
    SwapPair {
        token_in: USDC,
        token_out: WETH,
        pool: address!("8ad599c3a0ff1de082011efddc58f1908eb6e6d8"),
        fee: FEE_TIER_030,
    },
    SwapPair {
        token_in: DAI,
        token_out: WETH,
        pool: address!("c2e9f25be6257c210d7adf0d4cd6e3e881ba25f8"),
        fee: FEE_TIER_030,
    },
    SwapPair {
        token_in: WBTC,
        token_out: WETH,
        pool: address!("cbcdf9626bc03e24f779434178a73a0b4bad62ed"),
        fee: FEE_TIER_030,
    },
    SwapPair {
        token_in: USDT,
        token_out: WETH,
        pool: address!("4e68ccd3e89f51c3074ca5072bbac773960dfa36"),
        fee: FEE_TIER_030,
    },
];

pub fn token_by_symbol(symbol: &str) -> Option<&'static Token> {
    TOKENS.iter().find(|t| t.symbol.eq_ignore_ascii_case(symbol))
}

pub fn token_by_address(address: Address) -> Option<&'static Token> {
    TOKENS.iter().find(|t| t.address == address)
}

/// Look up a pair by name, e.g. `"USDC/WETH"` (case-insensitive).
pub fn pair(name: &str) -> Option<&'static SwapPair> {
    let (token_in, token_out) = name.split_once('/')?;
    PAIRS.iter().find(|p| {
        p.token_in.symbol.eq_ignore_ascii_case(token_in.trim())
            && p.token_out.symbol.eq_ignore_ascii_case(token_out.trim())
    })
}
