//! Chain flows for create/contribute/withdraw.
//!
//! These never gate the local store: callers write locally first and run the
//! chain call in a detached task, surfacing the outcome via toasts. With no
//! contract deployed (demo mode) the flows return a string-tagged fake tx id;
//! with an app id but no contract logic, create/contribute send a self-payment
//! to prove the signing path works end to end.

use catalyst::algo::{self, AlgodConfig, SignRequest, TxnSpec};
use catalyst::date::now_ms;
use web_sys::console;

use super::algod::AlgodClient;

pub(super) struct ChainOutcome {
    pub(super) tx_id: String,
    pub(super) confirmed_round: Option<u64>,
    pub(super) demo: bool,
}

impl ChainOutcome {
    /// One-line toast text, with an explorer link for real transactions.
    pub(super) fn summary(&self, cfg: &AlgodConfig) -> String {
        if self.demo {
            format!(
                "Demo mode: no contract deployed, simulated transaction {}",
                self.tx_id
            )
        } else {
            let round = self
                .confirmed_round
                .map(|r| format!(" (round {r})"))
                .unwrap_or_default();
            format!(
                "Transaction confirmed{round}: {}",
                cfg.explorer_tx_url(&self.tx_id)
            )
        }
    }
}

fn demo_outcome(action: &str) -> ChainOutcome {
    console::warn_1(
        &format!("DEMO MODE: simulating {action}; set CATALYST_APP_ID for real transactions")
            .into(),
    );
    ChainOutcome {
        tx_id: algo::demo_tx_id(now_ms()),
        confirmed_round: None,
        demo: true,
    }
}

async fn sign_submit_confirm(cfg: AlgodConfig, txn: TxnSpec) -> Result<ChainOutcome, String> {
    let client = AlgodClient::new(cfg);
    let params = client.suggested_params().await?;
    console::log_1(&"requesting signature from wallet...".into());
    let signed = super::wallet::sign(&SignRequest { txn, params }).await?;
    let tx_id = client.submit_raw(&signed).await?;
    console::log_1(&format!("transaction sent: {tx_id}").into());
    let round = client.wait_for_confirmation(&tx_id, 4).await?;
    console::log_1(&format!("transaction confirmed in round {round}").into());
    Ok(ChainOutcome {
        tx_id,
        confirmed_round: Some(round),
        demo: false,
    })
}

pub(super) async fn create_campaign(
    cfg: AlgodConfig,
    sender: String,
    title: String,
) -> Result<ChainOutcome, String> {
    if cfg.is_demo() {
        return Ok(demo_outcome("campaign creation"));
    }
    let receiver = sender.clone();
    sign_submit_confirm(
        cfg,
        TxnSpec::Payment {
            sender,
            receiver,
            amount_micro: 1_000, // 0.001 ALGO self-payment
            note: format!("Campaign: {title}"),
        },
    )
    .await
}

pub(super) async fn contribute(
    cfg: AlgodConfig,
    sender: String,
    amount_algos: f64,
) -> Result<ChainOutcome, String> {
    if cfg.is_demo() {
        return Ok(demo_outcome("contribution"));
    }
    let receiver = sender.clone();
    sign_submit_confirm(
        cfg,
        TxnSpec::Payment {
            sender,
            receiver,
            amount_micro: algo::algos_to_micro(amount_algos),
            note: format!("Contribution test: {amount_algos} ALGO"),
        },
    )
    .await
}

pub(super) async fn withdraw(
    cfg: AlgodConfig,
    sender: String,
    campaign_id: u64,
) -> Result<ChainOutcome, String> {
    if cfg.is_demo() {
        return Err(
            "Smart contract not deployed. Set CATALYST_APP_ID to enable withdrawals.".to_string(),
        );
    }
    sign_submit_confirm(
        cfg,
        TxnSpec::AppCall {
            sender,
            app_id: cfg.app_id,
            args: vec!["withdraw_funds".to_string(), campaign_id.to_string()],
        },
    )
    .await
}
