//! Campaign detail and contribution.
//!
//! Contributions update the local list immediately (the documented
//! last-write-wins read-modify-write); the chain transfer runs detached.

use catalyst::algo::{format_address, AlgodConfig};
use catalyst::campaign::Campaign;
use catalyst::date::CivilDate;
use catalyst::store::CampaignStore;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::ui_model::Page;

use super::shell::ProgressBar;
use super::{chain, storage, Toasts, WalletState};

#[component]
pub(super) fn DetailPage(
    cfg: AlgodConfig,
    campaigns: RwSignal<Vec<Campaign>>,
    selected: RwSignal<Option<u64>>,
    page: RwSignal<Page>,
    toasts: Toasts,
    wallet: WalletState,
) -> impl IntoView {
    let campaign = Memo::new(move |_| {
        let id = selected.get()?;
        campaigns.get().into_iter().find(|c| c.id == id)
    });
    let amount = RwSignal::new(String::new());

    let contribute = move || {
        let Some(c) = campaign.get_untracked() else {
            return;
        };
        let parsed: f64 = amount.get_untracked().trim().parse().unwrap_or(0.0);
        if !(parsed > 0.0) {
            toasts.error("Please enter a valid contribution amount");
            return;
        }
        if !c.is_active {
            toasts.error("This campaign is no longer active");
            return;
        }
        let Some(sender) = wallet.address.get_untracked() else {
            toasts.error("Please connect your wallet first");
            return;
        };

        let store = CampaignStore::new(storage::BrowserStore);
        match store.update_raised(c.id, parsed) {
            Ok(Some(updated)) => {
                storage::notify_campaigns_changed();
                toasts.success(format!(
                    "Contributed {parsed} ALGO ({:.1} of {:.1} raised)",
                    updated.raised_amount, updated.goal_amount
                ));
                amount.set(String::new());

                spawn_local(async move {
                    match chain::contribute(cfg, sender, parsed).await {
                        Ok(outcome) => toasts.info(outcome.summary(&cfg)),
                        Err(e) => toasts.error(catalyst::algo::friendly_chain_error(&e)),
                    }
                });
            }
            Ok(None) => toasts.error("Campaign not found"),
            Err(e) => toasts.error(format!("Failed to record contribution: {e}")),
        }
    };

    view! {
        <main class="detail-page">
            <button class="btn btn-ghost" on:click=move |_| page.set(Page::Dashboard)>
                "← Back"
            </button>

            {move || match campaign.get() {
                None => view! {
                    <div class="empty-state">
                        <h3>"Campaign not found"</h3>
                    </div>
                }
                .into_any(),
                Some(c) => {
                    let percent = c.progress_percent();
                    let days_left = c.days_left(CivilDate::today());
                    let is_active = c.is_active;
                    view! {
                        <article class="detail-card">
                            <img class="detail-image" src=c.image_url.clone() alt="" />
                            <div class="detail-body">
                                <span class="card-category">{c.category.clone()}</span>
                                <h1>{c.title.clone()}</h1>
                                <p class="detail-creator">
                                    "by " {format_address(&c.creator)}
                                </p>
                                <p class="detail-description">{c.description.clone()}</p>

                                <ProgressBar percent=Signal::derive(move || percent) />
                                <div class="detail-stats">
                                    <div>
                                        <h3>{format!("{:.1} ALGO", c.raised_amount)}</h3>
                                        <p>{format!("raised of {:.1}", c.goal_amount)}</p>
                                    </div>
                                    <div>
                                        <h3>{format!("{percent:.0}%")}</h3>
                                        <p>"funded"</p>
                                    </div>
                                    <div>
                                        <h3>
                                            {if is_active {
                                                days_left.to_string()
                                            } else {
                                                "0".to_string()
                                            }}
                                        </h3>
                                        <p>{if is_active { "days left" } else { "completed" }}</p>
                                    </div>
                                </div>

                                <Show
                                    when=move || is_active
                                    fallback=|| {
                                        view! {
                                            <p class="completed-note">
                                                "This campaign has ended."
                                            </p>
                                        }
                                    }
                                >
                                    <div class="contribute-row">
                                        <input
                                            type="number"
                                            min="0.1"
                                            step="0.1"
                                            placeholder="Amount (ALGO)"
                                            prop:value=move || amount.get()
                                            on:input=move |ev| amount.set(event_target_value(&ev))
                                        />
                                        <button
                                            class="btn btn-primary"
                                            on:click=move |_| contribute()
                                        >
                                            "Contribute"
                                        </button>
                                    </div>
                                </Show>
                            </div>
                        </article>
                    }
                    .into_any()
                }
            }}
        </main>
    }
}
