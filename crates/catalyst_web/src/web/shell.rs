//! Shared chrome: navbar, toast stack, progress bar.

use catalyst::algo::format_address;
use catalyst::auth::User;
use leptos::prelude::*;

use crate::ui_model::Page;

use super::{Toasts, ToastLevel, WalletState};

#[component]
pub(super) fn Navbar(
    page: RwSignal<Page>,
    user: RwSignal<Option<User>>,
    wallet: WalletState,
    on_connect: Callback<()>,
    on_disconnect: Callback<()>,
    on_logout: Callback<()>,
) -> impl IntoView {
    view! {
        <header class="navbar">
            <div class="navbar-left">
                <button class="brand" on:click=move |_| page.set(Page::Dashboard)>
                    "Campus" <span class="brand-accent">"Catalyst"</span>
                </button>
                <nav class="nav-links">
                    {Page::nav()
                        .iter()
                        .map(|&target| {
                            view! {
                                <button
                                    class=move || {
                                        if page.get() == target {
                                            "nav-link active"
                                        } else {
                                            "nav-link"
                                        }
                                    }
                                    on:click=move |_| page.set(target)
                                >
                                    {target.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
            </div>
            <div class="navbar-right">
                <Show
                    when=move || wallet.address.with(Option::is_some)
                    fallback=move || {
                        view! {
                            <button
                                class="btn btn-primary"
                                disabled=move || wallet.busy.get()
                                on:click=move |_| on_connect.run(())
                            >
                                {move || {
                                    if wallet.busy.get() { "Connecting..." } else { "Connect Wallet" }
                                }}
                            </button>
                        }
                    }
                >
                    <span class="wallet-balance">
                        {move || format!("{:.3} ALGO", wallet.balance.get())}
                    </span>
                    <button
                        class="btn btn-ghost wallet-address"
                        title="Disconnect wallet"
                        on:click=move |_| on_disconnect.run(())
                    >
                        {move || {
                            wallet
                                .address
                                .get()
                                .map(|a| format_address(&a))
                                .unwrap_or_default()
                        }}
                    </button>
                </Show>
                <span class="user-name">
                    {move || user.get().map(|u| u.name).unwrap_or_default()}
                </span>
                <button class="btn btn-ghost" on:click=move |_| on_logout.run(())>
                    "Logout"
                </button>
            </div>
        </header>
    }
}

#[component]
pub(super) fn ToastStack(toasts: Toasts) -> impl IntoView {
    let items = toasts.items();
    view! {
        <div class="toast-stack" aria-live="polite" aria-relevant="additions removals">
            <For
                each=move || items.get()
                key=|t| t.id
                children=move |t| {
                    let id = t.id;
                    let class = match t.level {
                        ToastLevel::Info => "toast info",
                        ToastLevel::Success => "toast success",
                        ToastLevel::Error => "toast error",
                    };
                    view! {
                        <div class=class>
                            <div style="flex: 1; white-space: pre-wrap;">{t.message}</div>
                            <button
                                class="toast-close"
                                title="Dismiss"
                                on:click=move |_| items.update(|ts| ts.retain(|x| x.id != id))
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[component]
pub(super) fn ProgressBar(percent: Signal<f64>) -> impl IntoView {
    view! {
        <div class="progress-track">
            <div
                class="progress-fill"
                style=move || format!("width: {:.0}%;", percent.get())
            ></div>
        </div>
    }
}
