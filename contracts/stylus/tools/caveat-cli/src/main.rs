use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::{anyhow, Context, Result};
use caveat_compiler::{
    authorize, compile, decode_call, encode_delegation, evaluate, facts::StaticChain,
    intent::parse_address, verify_selector, SwapIntent, SwapIntentSpec, Verdict, VerifyError,
};
use caveat_types::{selectors::SWAP_METHODS, Delegation, ProposedCall, Selector};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

/// Compile swap intents into caveated delegations and check redemptions against them.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Log filter used when `RUST_LOG` is unset (eg, info, debug, caveat_compiler=debug).
    #[arg(long, env = "CAVEAT_LOG", default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compile a JSON swap intent into a delegation and its canonical encoding.
    Compile {
        /// Intent JSON (addresses as hex, `amountCap` as a decimal string, optional `pair`).
        #[arg(long, env = "CAVEAT_INTENT")]
        intent: PathBuf,

        /// Where to write `{ delegation, encoded }`. Printed to stdout when omitted.
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Evaluate a batch of calls against a compiled delegation.
    ///
    /// Exits non-zero when the redemption is rejected.
    Evaluate {
        /// Output of `compile`, or a bare delegation object.
        #[arg(long, env = "CAVEAT_DELEGATION")]
        delegation: PathBuf,

        /// JSON array of `{ target, calldata, innerCalls? }`.
        #[arg(long, env = "CAVEAT_CALLS")]
        calls: PathBuf,

        /// Redeeming account; must be the delegatee when given.
        #[arg(long)]
        caller: Option<String>,
    },

    /// Print each authorised signature and its selector.
    Selectors,

    /// Check that deployed bytecode dispatches the selector of a signature.
    Verify {
        #[arg(long)]
        contract: String,

        /// File holding the runtime bytecode as hex.
        #[arg(long)]
        code: PathBuf,

        #[arg(long)]
        signature: String,
    },
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct CallSpec {
    target: String,
    calldata: String,
    #[serde(default)]
    inner_calls: Vec<InnerCallSpec>,
}

#[derive(Deserialize, Debug)]
struct InnerCallSpec {
    target: String,
    selector: String,
}

fn main() -> Result<ExitCode> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Compile { intent, out } => run_compile(&intent, out.as_deref()),
        Command::Evaluate { delegation, calls, caller } => {
            run_evaluate(&delegation, &calls, caller.as_deref())
        }
        Command::Selectors => {
            for (signature, selector) in SWAP_METHODS {
                println!("{selector}  {signature}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Verify { contract, code, signature } => run_verify(&contract, &code, &signature),
    }
}

fn run_compile(intent_path: &Path, out: Option<&Path>) -> Result<ExitCode> {
    let spec: SwapIntentSpec = read_json(intent_path)?;
    let intent = SwapIntent::try_from(spec).context("invalid intent")?;
    let delegation = compile(&intent).context("invalid intent")?;
    let encoded = encode_delegation(&delegation).context("failed encoding delegation")?;

    eprint!("{delegation}");
    let artefact = json!({
        "delegation": delegation,
        "encoded": format!("0x{}", hex::encode(encoded)),
    });

    match out {
        Some(path) => {
            write_json_atomic(path, &artefact)?;
            info!(path = %path.display(), "delegation written");
        }
        None => println!(
            "{}",
            serde_json::to_string_pretty(&artefact).context("failed serialising delegation")?
        ),
    }
    Ok(ExitCode::SUCCESS)
}

fn run_evaluate(delegation_path: &Path, calls_path: &Path, caller: Option<&str>) -> Result<ExitCode> {
    let root: Value = read_json(delegation_path)?;
    let delegation_value = match root {
        Value::Object(mut map) if map.contains_key("delegation") => {
            map.remove("delegation").unwrap_or(Value::Null)
        }
        other => other,
    };
    let delegation: Delegation = serde_json::from_value(delegation_value)
        .with_context(|| format!("failed parsing delegation in {}", delegation_path.display()))?;

    let specs: Vec<CallSpec> = read_json(calls_path)?;
    let calls = specs
        .iter()
        .enumerate()
        .map(|(i, spec)| to_proposed_call(spec).with_context(|| format!("call #{i}")))
        .collect::<Result<Vec<_>>>()?;

    let verdict = match caller {
        Some(caller) => {
            let caller = parse_address("caller", caller)?;
            authorize(&delegation, caller, &calls)?
        }
        None => evaluate(&delegation, &calls),
    };

    println!("{verdict}");
    Ok(match verdict {
        Verdict::Admit => ExitCode::SUCCESS,
        Verdict::Reject(_) => ExitCode::FAILURE,
    })
}

fn run_verify(contract: &str, code_path: &Path, signature: &str) -> Result<ExitCode> {
    let contract = parse_address("contract", contract)?;
    let code = decode_hex(
        &fs::read_to_string(code_path)
            .with_context(|| format!("failed reading {}", code_path.display()))?,
    )
    .with_context(|| format!("{} is not hex bytecode", code_path.display()))?;

    let chain = StaticChain::new().with_code(contract, code);
    match verify_selector(&chain, contract, signature) {
        Ok(selector) => {
            println!("{contract} dispatches {selector} ({signature})");
            Ok(ExitCode::SUCCESS)
        }
        Err(err @ VerifyError::SelectorMismatch { .. }) => {
            println!("{err}");
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err.into()),
    }
}

fn to_proposed_call(spec: &CallSpec) -> Result<ProposedCall> {
    let target = parse_address("target", &spec.target)?;
    let calldata = decode_hex(&spec.calldata).context("calldata is not hex")?;
    let mut call = decode_call(target, &calldata)?;
    for inner in &spec.inner_calls {
        let target = parse_address("innerCalls.target", &inner.target)?;
        let selector = decode_hex(&inner.selector).context("inner selector is not hex")?;
        if selector.len() != 4 {
            return Err(anyhow!("inner selector must be 4 bytes, got {}", selector.len()));
        }
        call = call.with_inner_call(target, Selector::from_slice(&selector));
    }
    Ok(call)
}

fn decode_hex(s: &str) -> Result<Vec<u8>> {
    let s = s.trim();
    let s = s.strip_prefix("0x").unwrap_or(s);
    Ok(hex::decode(s)?)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path).with_context(|| format!("failed reading {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed parsing JSON in {}", path.display()))
}

fn write_json_atomic(path: &Path, value: &Value) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if !parent.exists() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed creating directory {}", parent.display()))?;
    }

    let serialised = serde_json::to_string_pretty(value).context("failed serialising JSON")?;
    let tmp_path = tmp_path_for(path);
    fs::write(&tmp_path, serialised.as_bytes())
        .with_context(|| format!("failed writing temp file {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("failed replacing {}", path.display()))?;
    Ok(())
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_os_string();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}
