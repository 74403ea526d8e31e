//! The CampusCatalyst single-page app: shell, routing, and shared state.
//!
//! All persistence is the browser's local storage; the wallet/chain calls are
//! a side channel that never gates the local state transitions.

use catalyst::algo::AlgodConfig;
use catalyst::auth::User;
use catalyst::campaign::{Campaign, CampaignFilter};
use catalyst::date::CivilDate;
use catalyst::store::CampaignStore;
use leptos::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::console;

use crate::ui_model::Page;

mod algod;
mod chain;
mod create;
mod dashboard;
mod detail;
mod login;
mod my_campaigns;
mod session;
mod shell;
mod storage;
mod wallet;

use create::CreatePage;
use dashboard::DashboardPage;
use detail::DetailPage;
use login::{LoginPage, SignupPage, VerifyBanner};
use my_campaigns::MyCampaignsPage;
use shell::{Navbar, ToastStack};

/// No-payload DOM event asking same-document listeners to re-read the
/// campaign list. Other tabs are reached by the native `storage` event.
const CAMPAIGNS_EVENT: &str = "campaignCreated";

pub fn start() {
    mount_to_body(|| view! { <App /> });
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Toast {
    pub(crate) id: u64,
    pub(crate) level: ToastLevel,
    pub(crate) message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ToastLevel {
    Info,
    Success,
    Error,
}

/// The app-wide notification channel; chain results land here because the UI
/// never awaits them.
#[derive(Clone, Copy)]
pub(crate) struct Toasts {
    items: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Toasts {
    fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub(crate) fn items(&self) -> RwSignal<Vec<Toast>> {
        self.items
    }

    pub(crate) fn push(&self, level: ToastLevel, message: impl Into<String>) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        let toast = Toast {
            id,
            level,
            message: message.into(),
        };
        self.items.update(|items| items.push(toast));
    }

    pub(crate) fn info(&self, message: impl Into<String>) {
        self.push(ToastLevel::Info, message);
    }

    pub(crate) fn success(&self, message: impl Into<String>) {
        self.push(ToastLevel::Success, message);
    }

    pub(crate) fn error(&self, message: impl Into<String>) {
        self.push(ToastLevel::Error, message);
    }
}

/// Wallet-side signals. `address` drives everything else: the balance refresh
/// effect and the "connected" checks in the pages.
#[derive(Clone, Copy)]
pub(crate) struct WalletState {
    pub(crate) address: RwSignal<Option<String>>,
    pub(crate) balance: RwSignal<f64>,
    pub(crate) app_deployed: RwSignal<bool>,
    pub(crate) busy: RwSignal<bool>,
}

impl WalletState {
    fn new() -> Self {
        Self {
            address: RwSignal::new(None),
            balance: RwSignal::new(0.0),
            app_deployed: RwSignal::new(false),
            busy: RwSignal::new(false),
        }
    }
}

/// Resolves after `ms` via a window timeout. Used for the simulated auth
/// latency and the confirmation poll.
pub(crate) async fn sleep_ms(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(w) = web_sys::window() {
            let _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
        }
    });
    let _ = JsFuture::from(promise).await;
}

#[component]
fn App() -> impl IntoView {
    let cfg = AlgodConfig::from_build_env();

    let page = RwSignal::new(Page::Login);
    let user = RwSignal::new(None::<User>);
    let campaigns = RwSignal::new(Vec::<Campaign>::new());
    let filter = RwSignal::new(CampaignFilter::All);
    let selected = RwSignal::new(None::<u64>);
    let toasts = Toasts::new();
    let wallet = WalletState::new();

    // Restore the stored session. A corrupt user record is cleared and sends
    // the visitor back to login.
    match session::current_user() {
        Ok(Some(stored)) => {
            user.set(Some(stored));
            page.set(Page::Dashboard);
        }
        Ok(None) => page.set(Page::Login),
        Err(e) => {
            console::warn_1(&format!("session: {e}").into());
            session::logout();
            toasts.error("Your session could not be read and was reset.");
            page.set(Page::Login);
        }
    }

    let reload = Callback::new(move |_: ()| {
        let store = CampaignStore::new(storage::BrowserStore);
        match store.load(CivilDate::today()) {
            Ok(list) => {
                console::log_1(&format!("loaded {} campaigns", list.len()).into());
                campaigns.set(list);
            }
            Err(e) => toasts.error(format!("Failed to load campaigns: {e}")),
        }
    });
    reload.run(());
    storage::on_campaigns_changed(reload);

    wallet::init(wallet, cfg);

    let on_connect = Callback::new(move |_: ()| {
        wallet::connect_flow(wallet, cfg, toasts, user);
    });
    let on_disconnect = Callback::new(move |_: ()| {
        wallet::disconnect_flow(wallet);
    });
    let on_logout = Callback::new(move |_: ()| {
        session::logout();
        user.set(None);
        page.set(Page::Login);
    });

    // Auth gate: anything past the auth screens needs a signed-in user.
    Effect::new(move |_| {
        if page.get().requires_auth() && user.with(Option::is_none) {
            page.set(Page::Login);
        }
    });

    view! {
        <div class="app">
            <Show when=move || user.with(Option::is_some)>
                <Navbar page user wallet on_connect on_disconnect on_logout />
                <VerifyBanner user toasts />
            </Show>

            {move || match page.get() {
                Page::Login => view! { <LoginPage page user toasts /> }.into_any(),
                Page::Signup => view! { <SignupPage page user toasts /> }.into_any(),
                Page::Dashboard => {
                    view! { <DashboardPage campaigns filter page selected /> }.into_any()
                }
                Page::CreateCampaign => {
                    view! { <CreatePage cfg page toasts wallet /> }.into_any()
                }
                Page::CampaignDetail => {
                    view! { <DetailPage cfg campaigns selected page toasts wallet /> }.into_any()
                }
                Page::MyCampaigns => {
                    view! { <MyCampaignsPage cfg campaigns page selected toasts wallet /> }
                        .into_any()
                }
            }}

            <ToastStack toasts />
        </div>
    }
}
