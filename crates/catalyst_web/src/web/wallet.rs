//! Pera wallet bridge.
//!
//! The wallet-connect SDK is a JS library; we bind the small page-level glue
//! around it (`catalystWallet*`, see `assets/wallet-bridge.js`) instead of
//! reimplementing the WalletConnect protocol. Signing happens entirely on the
//! JS side; the bridge resolves the signed transaction as base64.

use catalyst::algo::{AlgodConfig, SignRequest};
use catalyst::auth::User;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::console;

use super::algod::AlgodClient;
use super::{session, Toasts, WalletState};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = catalystWalletConnect)]
    fn catalyst_wallet_connect(chain_id: u32) -> js_sys::Promise;

    #[wasm_bindgen(js_name = catalystWalletReconnect)]
    fn catalyst_wallet_reconnect() -> js_sys::Promise;

    #[wasm_bindgen(js_name = catalystWalletDisconnect)]
    fn catalyst_wallet_disconnect() -> js_sys::Promise;

    #[wasm_bindgen(js_name = catalystWalletSign)]
    fn catalyst_wallet_sign(request_json: String) -> js_sys::Promise;
}

pub(super) fn js_error_message(v: &JsValue) -> String {
    if let Some(s) = v.as_string() {
        return s;
    }
    js_sys::Reflect::get(v, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{v:?}"))
}

async fn account_list(promise: js_sys::Promise, what: &str) -> Result<Vec<String>, String> {
    let v = JsFuture::from(promise)
        .await
        .map_err(|e| format!("wallet: {what} failed: {}", js_error_message(&e)))?;
    let arr: js_sys::Array = v
        .dyn_into()
        .map_err(|_| format!("wallet: {what} returned no account list"))?;
    Ok(arr.iter().filter_map(|a| a.as_string()).collect())
}

pub(super) async fn connect(chain_id: u32) -> Result<Vec<String>, String> {
    account_list(catalyst_wallet_connect(chain_id), "connect").await
}

pub(super) async fn reconnect() -> Result<Vec<String>, String> {
    account_list(catalyst_wallet_reconnect(), "reconnect").await
}

pub(super) async fn disconnect() {
    let _ = JsFuture::from(catalyst_wallet_disconnect()).await;
}

/// Asks the bridge to sign `request`; returns the signed transaction bytes.
/// The raw rejection message is kept for substring rephrasing upstream.
pub(super) async fn sign(request: &SignRequest) -> Result<Vec<u8>, String> {
    let json = serde_json::to_string(request)
        .map_err(|e| format!("wallet: encode sign request: {e}"))?;
    let v = JsFuture::from(catalyst_wallet_sign(json))
        .await
        .map_err(|e| js_error_message(&e))?;
    let b64 = v
        .as_string()
        .ok_or_else(|| "wallet: sign returned no data".to_string())?;
    decode_base64(&b64)
}

fn decode_base64(b64: &str) -> Result<Vec<u8>, String> {
    let w = web_sys::window().ok_or_else(|| "wallet: no window".to_string())?;
    let bin = w.atob(b64).map_err(|_| "wallet: atob() threw".to_string())?;
    Ok(bin.chars().map(|c| c as u8).collect())
}

/// Startup wiring: resume a previous wallet session, check whether the
/// configured contract exists, and keep the balance in step with the address.
pub(super) fn init(wallet: WalletState, cfg: AlgodConfig) {
    spawn_local(async move {
        match reconnect().await {
            Ok(accounts) => {
                if let Some(first) = accounts.into_iter().next() {
                    wallet.address.set(Some(first));
                }
            }
            Err(e) => console::warn_1(&e.into()),
        }
        let client = AlgodClient::new(cfg);
        wallet.app_deployed.set(client.app_deployed().await.unwrap_or(false));
    });

    Effect::new(move |_| {
        let Some(address) = wallet.address.get() else {
            wallet.balance.set(0.0);
            return;
        };
        spawn_local(async move {
            match AlgodClient::new(cfg).account_balance_algos(&address).await {
                Ok(balance) => wallet.balance.set(balance),
                Err(e) => console::warn_1(&format!("balance: {e}").into()),
            }
        });
    });
}

pub(super) fn connect_flow(
    wallet: WalletState,
    cfg: AlgodConfig,
    toasts: Toasts,
    user: RwSignal<Option<User>>,
) {
    if wallet.busy.get_untracked() {
        return;
    }
    wallet.busy.set(true);
    spawn_local(async move {
        match connect(cfg.chain_id()).await {
            Ok(accounts) => match accounts.into_iter().next() {
                Some(address) => {
                    wallet.address.set(Some(address.clone()));
                    // Remember the address on the signed-in user record.
                    user.update(|u| {
                        if let Some(u) = u {
                            if let Err(e) = session::record_wallet_address(u, &address) {
                                console::warn_1(&e.into());
                            }
                        }
                    });
                    toasts.success("Wallet connected");
                }
                None => toasts.error("No accounts found in wallet"),
            },
            Err(e) => toasts.error(e),
        }
        wallet.busy.set(false);
    });
}

pub(super) fn disconnect_flow(wallet: WalletState) {
    spawn_local(async move {
        disconnect().await;
        wallet.address.set(None);
        wallet.balance.set(0.0);
    });
}
