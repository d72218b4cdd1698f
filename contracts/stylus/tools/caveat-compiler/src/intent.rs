//! Swap intents and their compilation into a least-privilege [`Delegation`].

use alloy_primitives::{Address, U256};
use caveat_types::{
    selector,
    selectors::{APPROVE_SIGNATURE, EXACT_INPUT_SINGLE_SIGNATURE},
    Caveat, Delegation, SwapShape,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    errors::InvalidIntent,
    registry::{self, SwapPair, FEE_TIER_030, SWAP_ROUTER_02},
};

/// Largest value a Solidity `uint24` holds.
pub const MAX_FEE_TIER: u32 = 0x00ff_ffff;

/// "Let `delegatee` swap up to `amount_cap` of `token_in` into `token_out`
/// through `router`, paying out to `recipient`."
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SwapIntent {
    pub delegator: Address,
    pub delegatee: Address,
    pub token_in: Address,
    pub token_out: Address,
    pub router: Address,
    /// In `token_in`'s smallest unit.
    pub amount_cap: U256,
    pub fee_tier: u32,
    pub recipient: Address,
    pub scope_label: Option<String>,
}

impl SwapIntent {
    /// An intent for a registry pair through `SwapRouter02` at the pair's fee tier.
    pub fn for_pair(
        pair: &SwapPair,
        delegator: Address,
        delegatee: Address,
        amount_cap: U256,
        recipient: Address,
    ) -> Self {
        Self {
            delegator,
            delegatee,
            token_in: pair.token_in.address,
            token_out: pair.token_out.address,
            router: SWAP_ROUTER_02,
            amount_cap,
            fee_tier: pair.fee,
            recipient,
            scope_label: None,
        }
    }

    pub fn with_scope_label(mut self, label: impl Into<String>) -> Self {
        self.scope_label = Some(label.into());
        self
    }
}

/// JSON form of a [`SwapIntent`]: addresses as hex strings, `amountCap` as a
/// decimal string. Tokens come either from `pair` (e.g. `"USDC/WETH"`) or from
/// `tokenIn`/`tokenOut`; explicit tokens win.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapIntentSpec {
    pub delegator: String,
    pub delegatee: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pair: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_in: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_out: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub router: Option<String>,
    pub amount_cap: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee_tier: Option<u32>,
    pub recipient: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope_label: Option<String>,
}

impl TryFrom<SwapIntentSpec> for SwapIntent {
    type Error = InvalidIntent;

    fn try_from(spec: SwapIntentSpec) -> Result<Self, Self::Error> {
        let pair = match &spec.pair {
            Some(name) => {
                Some(registry::pair(name).ok_or_else(|| InvalidIntent::UnknownPair(name.clone()))?)
            }
            None => None,
        };

        let token_in = match (&spec.token_in, pair) {
            (Some(s), _) => parse_address("tokenIn", s)?,
            (None, Some(p)) => p.token_in.address,
            (None, None) => return Err(InvalidIntent::MissingTokens),
        };
        let token_out = match (&spec.token_out, pair) {
            (Some(s), _) => parse_address("tokenOut", s)?,
            (None, Some(p)) => p.token_out.address,
            (None, None) => return Err(InvalidIntent::MissingTokens),
        };
        let router = match &spec.router {
            Some(s) => parse_address("router", s)?,
            None => SWAP_ROUTER_02,
        };
        let fee_tier = spec
            .fee_tier
            .or(pair.map(|p| p.fee))
            .unwrap_or(FEE_TIER_030);

        Ok(SwapIntent {
            delegator: parse_address("delegator", &spec.delegator)?,
            delegatee: parse_address("delegatee", &spec.delegatee)?,
            token_in,
            token_out,
            router,
            amount_cap: parse_amount(&spec.amount_cap)?,
            fee_tier,
            recipient: parse_address("recipient", &spec.recipient)?,
            scope_label: spec.scope_label,
        })
    }
}

/// Parse a 20-byte hex address, with or without `0x`.
pub fn parse_address(field: &'static str, value: &str) -> Result<Address, InvalidIntent> {
    value
        .trim()
        .parse::<Address>()
        .map_err(|_| InvalidIntent::MalformedAddress {
            field,
            value: value.to_string(),
        })
}

fn parse_amount(value: &str) -> Result<U256, InvalidIntent> {
    let trimmed = value.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InvalidIntent::MalformedAmount(value.to_string()));
    }
    U256::from_str_radix(trimmed, 10).map_err(|_| InvalidIntent::MalformedAmount(value.to_string()))
}

/// Compile a swap intent into exactly four caveats, in evaluation order:
/// `AllowedTargets { token_in, router }`, `AllowedMethods { approve,
/// exactInputSingle }`, `ValueLimit { amount_cap }` and `SwapShape`.
pub fn compile(intent: &SwapIntent) -> Result<Delegation, InvalidIntent> {
    for (field, address) in [
        ("delegator", intent.delegator),
        ("delegatee", intent.delegatee),
        ("tokenIn", intent.token_in),
        ("tokenOut", intent.token_out),
        ("router", intent.router),
        ("recipient", intent.recipient),
    ] {
        if address == Address::ZERO {
            return Err(InvalidIntent::ZeroAddress { field });
        }
    }
    if intent.amount_cap.is_zero() {
        return Err(InvalidIntent::ZeroAmountCap);
    }
    if intent.token_in == intent.token_out {
        return Err(InvalidIntent::IdenticalTokens(intent.token_in));
    }
    if intent.router == intent.token_in || intent.router == intent.token_out {
        return Err(InvalidIntent::RouterIsToken(intent.router));
    }
    if intent.fee_tier > MAX_FEE_TIER {
        return Err(InvalidIntent::FeeTierOutOfRange(intent.fee_tier));
    }

    let caveats = vec![
        Caveat::allowed_targets([intent.token_in, intent.router])?,
        Caveat::allowed_methods([
            selector(APPROVE_SIGNATURE),
            selector(EXACT_INPUT_SINGLE_SIGNATURE),
        ])?,
        Caveat::value_limit(intent.amount_cap),
        Caveat::SwapShape(SwapShape {
            token_in: intent.token_in,
            token_out: intent.token_out,
            fee_tier: intent.fee_tier,
            recipient: intent.recipient,
        }),
    ];

    let label = intent
        .scope_label
        .clone()
        .unwrap_or_else(|| default_scope_label(intent.token_in, intent.token_out));

    info!(
        scope = %label,
        delegator = %intent.delegator,
        delegatee = %intent.delegatee,
        cap = %intent.amount_cap,
        "compiled swap delegation"
    );
    Ok(Delegation::new(intent.delegator, intent.delegatee, caveats, label))
}

/// `swap:<in>-><out>`, using registry symbols where known.
pub fn default_scope_label(token_in: Address, token_out: Address) -> String {
    format!("swap:{}->{}", token_name(token_in), token_name(token_out))
}

fn token_name(address: Address) -> String {
    match registry::token_by_address(address) {
        Some(token) => token.symbol.to_string(),
        None => address.to_string(),
    }
}
