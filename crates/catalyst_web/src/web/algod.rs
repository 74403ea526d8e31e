//! Thin algod REST client over `fetch`.
//!
//! Sequential call-through glue: no retry, no backoff. Errors keep the node's
//! message text so the chain layer can rephrase by substring.

use catalyst::algo::{micro_to_algos, AlgodConfig};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

pub(super) struct AlgodClient {
    cfg: AlgodConfig,
}

impl AlgodClient {
    pub(super) fn new(cfg: AlgodConfig) -> Self {
        Self { cfg }
    }

    pub(super) async fn suggested_params(&self) -> Result<serde_json::Value, String> {
        self.request("GET", "/v2/transactions/params", None).await
    }

    pub(super) async fn account_balance_algos(&self, address: &str) -> Result<f64, String> {
        let info = self
            .request("GET", &format!("/v2/accounts/{address}"), None)
            .await?;
        let micro = info.get("amount").and_then(|v| v.as_u64()).unwrap_or(0);
        Ok(micro_to_algos(micro))
    }

    /// Whether the configured application exists on the node. Lookup failures
    /// (404 included) read as "not deployed".
    pub(super) async fn app_deployed(&self) -> Result<bool, String> {
        if self.cfg.is_demo() {
            return Ok(false);
        }
        let path = format!("/v2/applications/{}", self.cfg.app_id);
        Ok(self.request("GET", &path, None).await.is_ok())
    }

    pub(super) async fn submit_raw(&self, signed: &[u8]) -> Result<String, String> {
        let resp = self
            .request("POST", "/v2/transactions", Some(signed))
            .await?;
        resp.get("txId")
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .ok_or_else(|| "algod: submit response missing txId".to_string())
    }

    /// Polls the pending-transaction endpoint until the transaction confirms,
    /// the pool rejects it, or `max_polls` passes elapse.
    pub(super) async fn wait_for_confirmation(
        &self,
        tx_id: &str,
        max_polls: u32,
    ) -> Result<u64, String> {
        for _ in 0..max_polls {
            let info = self
                .request("GET", &format!("/v2/transactions/pending/{tx_id}"), None)
                .await?;
            if let Some(err) = info.get("pool-error").and_then(|v| v.as_str()) {
                if !err.is_empty() {
                    return Err(format!("algod: transaction pool error: {err}"));
                }
            }
            if let Some(round) = info.get("confirmed-round").and_then(|v| v.as_u64()) {
                if round > 0 {
                    return Ok(round);
                }
            }
            super::sleep_ms(1_500).await;
        }
        Err(format!("algod: transaction {tx_id} not confirmed in time"))
    }

    async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<&[u8]>,
    ) -> Result<serde_json::Value, String> {
        let init = web_sys::RequestInit::new();
        init.set_method(method);

        let headers =
            web_sys::Headers::new().map_err(|_| "fetch: Headers::new failed".to_string())?;
        if !self.cfg.token.is_empty() {
            headers
                .set("X-Algo-API-Token", self.cfg.token)
                .map_err(|_| "fetch: header set failed".to_string())?;
        }
        if let Some(body) = body {
            headers
                .set("Content-Type", "application/x-binary")
                .map_err(|_| "fetch: header set failed".to_string())?;
            init.set_body(&js_sys::Uint8Array::from(body).into());
        }
        init.set_headers(&headers.into());

        let url = format!("{}{}", self.cfg.base_url(), path);
        let request = web_sys::Request::new_with_str_and_init(&url, &init)
            .map_err(|_| "fetch: bad request".to_string())?;

        let w = web_sys::window().ok_or_else(|| "fetch: no window".to_string())?;
        let resp = JsFuture::from(w.fetch_with_request(&request))
            .await
            .map_err(|e| format!("fetch: network error: {}", super::wallet::js_error_message(&e)))?;
        let resp: web_sys::Response = resp
            .dyn_into()
            .map_err(|_| "fetch: not a Response".to_string())?;

        let text_promise = resp.text().map_err(|_| "fetch: text() threw".to_string())?;
        let text = JsFuture::from(text_promise)
            .await
            .map_err(|_| "fetch: body read failed".to_string())?
            .as_string()
            .unwrap_or_default();

        if !resp.ok() {
            // Keep the body: it carries the node's message for rephrasing.
            return Err(format!("algod: HTTP {}: {}", resp.status(), text));
        }
        serde_json::from_str(&text).map_err(|e| format!("algod: bad JSON: {e}"))
    }
}
