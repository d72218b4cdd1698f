//! Call shapes the delegatee may redeem, and raw-calldata decoding into
//! [`ProposedCall`]s.

use alloy_primitives::{
    aliases::{U160, U24},
    Address, U256,
};
use alloy_sol_types::{sol, SolCall};
use caveat_types::{ProposedCall, Selector, SwapShape};

use crate::errors::CalldataError;

sol! {
    interface IERC20 {
        function approve(address spender, uint256 amount) external returns (bool);
    }

    struct ExactInputSingleParams {
        address tokenIn;
        address tokenOut;
        uint24 fee;
        address recipient;
        uint256 amountIn;
        uint256 amountOutMinimum;
        uint160 sqrtPriceLimitX96;
    }

    interface ISwapRouter02 {
        function exactInputSingle(ExactInputSingleParams params) external payable returns (uint256 amountOut);
    }
}

/// Arguments of a `SwapRouter02.exactInputSingle` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwapParams {
    pub token_in: Address,
    pub token_out: Address,
    pub fee: u32,
    pub recipient: Address,
    pub amount_in: U256,
    pub amount_out_minimum: U256,
    pub sqrt_price_limit_x96: U256,
}

impl SwapParams {
    /// A swap matching `shape` with no slippage or price limit.
    pub fn from_shape(shape: &SwapShape, amount_in: U256) -> Self {
        Self {
            token_in: shape.token_in,
            token_out: shape.token_out,
            fee: shape.fee_tier,
            recipient: shape.recipient,
            amount_in,
            amount_out_minimum: U256::ZERO,
            sqrt_price_limit_x96: U256::ZERO,
        }
    }
}

pub fn approve_calldata(spender: Address, amount: U256) -> Vec<u8> {
    IERC20::approveCall { spender, amount }.abi_encode()
}

pub fn exact_input_single_calldata(params: &SwapParams) -> Result<Vec<u8>, CalldataError> {
    let fee = U24::try_from(params.fee).map_err(|_| CalldataError::OutOfRange("fee"))?;
    let sqrt_price_limit =
        U160::checked_from_limbs_slice(params.sqrt_price_limit_x96.as_limbs())
            .ok_or(CalldataError::OutOfRange("sqrtPriceLimitX96"))?;
    let call = ISwapRouter02::exactInputSingleCall {
        params: ExactInputSingleParams {
            tokenIn: params.token_in,
            tokenOut: params.token_out,
            fee,
            recipient: params.recipient,
            amountIn: params.amount_in,
            amountOutMinimum: params.amount_out_minimum,
            sqrtPriceLimitX96: sqrt_price_limit,
        },
    };
    Ok(call.abi_encode())
}

/// Decode calldata sent to `target` into a [`ProposedCall`] with named arguments.
///
/// Argument names follow the Solidity parameter names. Only `approve` and
/// `exactInputSingle` are understood.
pub fn decode_call(target: Address, calldata: &[u8]) -> Result<ProposedCall, CalldataError> {
    if calldata.len() < 4 {
        return Err(CalldataError::TooShort(calldata.len()));
    }
    let selector = Selector::from_slice(&calldata[..4]);

    if selector.0 == IERC20::approveCall::SELECTOR {
        let call = IERC20::approveCall::abi_decode(calldata, true)
            .map_err(|e| CalldataError::Abi(e.to_string()))?;
        return Ok(ProposedCall::new(target, selector)
            .with_arg("spender", call.spender)
            .with_arg("amount", call.amount));
    }

    if selector.0 == ISwapRouter02::exactInputSingleCall::SELECTOR {
        let p = ISwapRouter02::exactInputSingleCall::abi_decode(calldata, true)
            .map_err(|e| CalldataError::Abi(e.to_string()))?
            .params;
        return Ok(ProposedCall::new(target, selector)
            .with_arg("tokenIn", p.tokenIn)
            .with_arg("tokenOut", p.tokenOut)
            .with_arg("fee", U256::from(p.fee))
            .with_arg("recipient", p.recipient)
            .with_arg("amountIn", p.amountIn)
            .with_arg("amountOutMinimum", p.amountOutMinimum)
            .with_arg("sqrtPriceLimitX96", U256::from(p.sqrtPriceLimitX96)));
    }

    Err(CalldataError::UnknownSelector(selector))
}
