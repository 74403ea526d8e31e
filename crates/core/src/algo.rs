//! Algorand-side values and configuration.
//!
//! Nothing here talks to the network; the web crate owns the algod client and
//! the wallet bridge. This module is the testable part: unit conversions,
//! display helpers, the transaction specs handed to the wallet bridge, demo
//! tx ids, and the compile-time node configuration (the Rust analogue of the
//! original build-time env).

use serde::Serialize;

pub const MICRO_ALGOS_PER_ALGO: f64 = 1_000_000.0;

/// TestNet wallet-connect chain id; MainNet is 416001.
pub const CHAIN_ID_TESTNET: u32 = 416_002;
pub const CHAIN_ID_MAINNET: u32 = 416_001;

pub fn algos_to_micro(algos: f64) -> u64 {
    (algos * MICRO_ALGOS_PER_ALGO).floor() as u64
}

pub fn micro_to_algos(micro: u64) -> f64 {
    micro as f64 / MICRO_ALGOS_PER_ALGO
}

/// `ABCDEF…WXYZ` display truncation for 58-char addresses; short strings are
/// returned as-is. Counts chars, not bytes: the creator field is free-form
/// text from shared storage, not guaranteed ASCII.
pub fn format_address(address: &str) -> String {
    let count = address.chars().count();
    if count <= 10 {
        return address.to_string();
    }
    let head: String = address.chars().take(6).collect();
    let tail: String = address.chars().skip(count - 4).collect();
    format!("{head}...{tail}")
}

/// Node endpoint and application id, resolved at compile time.
#[derive(Debug, Clone, Copy)]
pub struct AlgodConfig {
    pub token: &'static str,
    pub server: &'static str,
    pub port: u16,
    /// 0 means no contract is deployed: demo mode.
    pub app_id: u64,
    pub network: &'static str,
}

impl AlgodConfig {
    pub fn from_build_env() -> Self {
        Self {
            token: option_env!("CATALYST_ALGOD_TOKEN").unwrap_or(""),
            server: option_env!("CATALYST_ALGOD_SERVER")
                .unwrap_or("https://testnet-api.algonode.cloud"),
            port: parse_or(option_env!("CATALYST_ALGOD_PORT"), 443),
            app_id: parse_or(option_env!("CATALYST_APP_ID"), 0),
            network: option_env!("CATALYST_ALGOD_NETWORK").unwrap_or("testnet"),
        }
    }

    pub fn is_demo(&self) -> bool {
        self.app_id == 0
    }

    pub fn chain_id(&self) -> u32 {
        if self.network == "mainnet" {
            CHAIN_ID_MAINNET
        } else {
            CHAIN_ID_TESTNET
        }
    }

    pub fn base_url(&self) -> String {
        if self.port == 443 {
            self.server.to_string()
        } else {
            format!("{}:{}", self.server, self.port)
        }
    }

    pub fn explorer_tx_url(&self, tx_id: &str) -> String {
        format!("https://{}.algoexplorer.io/tx/{}", self.network, tx_id)
    }

    pub fn explorer_app_url(&self) -> String {
        format!(
            "https://{}.algoexplorer.io/application/{}",
            self.network, self.app_id
        )
    }
}

fn parse_or<T: std::str::FromStr>(v: Option<&str>, default: T) -> T {
    v.and_then(|s| s.parse().ok()).unwrap_or(default)
}

/// What the wallet bridge is asked to sign. `params` carries the suggested
/// transaction params exactly as algod returned them.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignRequest {
    pub txn: TxnSpec,
    pub params: serde_json::Value,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum TxnSpec {
    /// Plain payment. With no contract deployed, create/contribute send a
    /// self-payment to prove signing works.
    #[serde(rename = "pay")]
    Payment {
        sender: String,
        receiver: String,
        amount_micro: u64,
        note: String,
    },
    /// Application call (withdraw path).
    #[serde(rename = "appl")]
    AppCall {
        sender: String,
        app_id: u64,
        args: Vec<String>,
    },
}

/// String-tagged fake tx id for demo mode: `DEMO_<ms>_<9 base36 chars>`.
pub fn demo_tx_id(now_ms: u64) -> String {
    const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut seed = now_ms ^ 0x5DEE_CE66_D1CE_CAFE;
    let mut suffix = String::with_capacity(9);
    for _ in 0..9 {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
        suffix.push(ALPHABET[(seed >> 40) as usize % 36] as char);
    }
    format!("DEMO_{now_ms}_{suffix}")
}

/// Rephrases raw wallet/chain errors for users, by substring. Anything
/// unrecognized passes through with a generic prefix.
pub fn friendly_chain_error(raw: &str) -> String {
    let lower = raw.to_ascii_lowercase();
    if lower.contains("rejected") {
        "Transaction rejected by user".to_string()
    } else if lower.contains("overspend") {
        "Insufficient balance. You need more ALGO for this transaction.".to_string()
    } else if lower.contains("insufficient") {
        "Insufficient ALGO balance for transaction".to_string()
    } else if lower.contains("application does not exist") {
        "Smart contract not found. Using test transaction instead.".to_string()
    } else {
        format!("Transaction failed: {raw}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn micro_conversions_floor_like_the_wire() {
        assert_eq!(algos_to_micro(0.001), 1000);
        assert_eq!(algos_to_micro(1.5), 1_500_000);
        assert_eq!(algos_to_micro(0.0000009), 0);
        assert_eq!(micro_to_algos(1_500_000), 1.5);
    }

    #[test]
    fn address_truncation() {
        assert_eq!(format_address(""), "");
        assert_eq!(format_address("SHORT"), "SHORT");
        let addr = "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567ABCDEFGHIJKLMNOPQRSTUVWXYZ"
            .to_string();
        assert_eq!(format_address(&addr), "ABCDEF...WXYZ");
    }

    #[test]
    fn address_truncation_handles_multibyte() {
        // Stored creator strings are unnormalized; truncation must not land
        // inside a multi-byte char.
        assert_eq!(format_address("aaaaa€aaaaaaa"), "aaaaa€...aaaa");
        assert_eq!(format_address("€€€€€€€€€€€"), "€€€€€€...€€€€");
        // Ten chars (thirty bytes) is still "short".
        assert_eq!(format_address("€€€€€€€€€€"), "€€€€€€€€€€");
    }

    #[test]
    fn default_config_is_demo_testnet() {
        let cfg = AlgodConfig::from_build_env();
        assert!(cfg.is_demo());
        assert_eq!(cfg.chain_id(), CHAIN_ID_TESTNET);
        assert_eq!(cfg.base_url(), "https://testnet-api.algonode.cloud");
        assert_eq!(
            cfg.explorer_tx_url("TX1"),
            "https://testnet.algoexplorer.io/tx/TX1"
        );
        assert!(cfg.explorer_app_url().ends_with("/application/0"));
    }

    #[test]
    fn demo_tx_id_shape() {
        let id = demo_tx_id(1_748_736_000_000);
        assert!(id.starts_with("DEMO_1748736000000_"));
        let suffix = id.rsplit('_').next().unwrap();
        assert_eq!(suffix.len(), 9);
        assert!(suffix.chars().all(|c| c.is_ascii_alphanumeric()));
        // Different instants give different ids.
        assert_ne!(id, demo_tx_id(1_748_736_000_001));
    }

    #[test]
    fn chain_errors_are_rephrased_by_substring() {
        assert_eq!(
            friendly_chain_error("Request Rejected by the user"),
            "Transaction rejected by user"
        );
        assert_eq!(
            friendly_chain_error("TransactionPool.Remember: overspend"),
            "Insufficient balance. You need more ALGO for this transaction."
        );
        assert_eq!(
            friendly_chain_error("insufficient funds"),
            "Insufficient ALGO balance for transaction"
        );
        assert_eq!(
            friendly_chain_error("logic eval error: application does not exist"),
            "Smart contract not found. Using test transaction instead."
        );
        assert!(friendly_chain_error("weird").starts_with("Transaction failed: weird"));
    }

    #[test]
    fn sign_request_wire_form() {
        let req = SignRequest {
            txn: TxnSpec::Payment {
                sender: "A".into(),
                receiver: "A".into(),
                amount_micro: 1000,
                note: "Campaign: Solar".into(),
            },
            params: serde_json::json!({ "fee": 1000, "last-round": 7 }),
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"type\":\"pay\""));
        assert!(json.contains("\"amountMicro\":1000"));
        assert!(json.contains("\"last-round\":7"));

        let appl = serde_json::to_string(&TxnSpec::AppCall {
            sender: "A".into(),
            app_id: 99,
            args: vec!["withdraw_funds".into(), "7".into()],
        })
        .unwrap();
        assert!(appl.contains("\"type\":\"appl\""));
        assert!(appl.contains("\"appId\":99"));
    }
}
