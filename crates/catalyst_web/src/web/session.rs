//! Mock auth glue: fabricate a user after a simulated delay and persist it.

use catalyst::auth::{Session, User};
use catalyst::error::StoreError;
use web_sys::console;

use super::storage::BrowserStore;

/// Simulated backend latency for login/signup/verify.
const MOCK_API_DELAY_MS: i32 = 1_000;

pub(super) fn current_user() -> Result<Option<User>, StoreError> {
    Session::new(BrowserStore).current()
}

pub(super) fn save(user: &User) -> Result<(), String> {
    Session::new(BrowserStore)
        .save(user)
        .map_err(|e| format!("session: {e}"))
}

pub(super) fn logout() {
    let _ = Session::new(BrowserStore).clear();
}

/// The password is accepted and ignored; there is no backend to check it.
pub(super) async fn login(email: String, _password: String) -> Result<User, String> {
    super::sleep_ms(MOCK_API_DELAY_MS).await;
    let user = User::for_login(&email, random_id(), now_iso());
    save(&user)?;
    Ok(user)
}

pub(super) async fn signup(name: String, email: String, _password: String) -> Result<User, String> {
    super::sleep_ms(MOCK_API_DELAY_MS).await;
    let user = User::for_signup(&name, &email, random_id(), now_iso());
    save(&user)?;
    console::log_1(&format!("verification email sent to {email}").into());
    Ok(user)
}

pub(super) async fn verify_email(mut user: User) -> Result<User, String> {
    super::sleep_ms(MOCK_API_DELAY_MS).await;
    user.email_verified = true;
    save(&user)?;
    Ok(user)
}

pub(super) fn record_wallet_address(user: &mut User, address: &str) -> Result<(), String> {
    user.wallet_address = Some(address.to_string());
    save(user)
}

/// Nine base36 chars from `Math.random`, like the mock backend it replaces.
fn random_id() -> String {
    const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    (0..9)
        .map(|_| ALPHABET[(js_sys::Math::random() * 36.0) as usize % 36] as char)
        .collect()
}

fn now_iso() -> String {
    String::from(js_sys::Date::new_0().to_iso_string())
}
