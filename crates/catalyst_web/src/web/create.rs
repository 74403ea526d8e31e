//! Campaign creation form.
//!
//! The local write resolves the user action; the chain call runs detached and
//! reports through the toast stack whenever it settles.

use catalyst::algo::AlgodConfig;
use catalyst::campaign::{Campaign, CampaignDraft};
use catalyst::date::{now_ms, CivilDate};
use catalyst::store::CampaignStore;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::ui_model::{Page, CATEGORIES, DURATIONS_DAYS};

use super::{chain, storage, Toasts, WalletState};

#[component]
pub(super) fn CreatePage(
    cfg: AlgodConfig,
    page: RwSignal<Page>,
    toasts: Toasts,
    wallet: WalletState,
) -> impl IntoView {
    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let goal = RwSignal::new(String::new());
    let duration = RwSignal::new(30u32);
    let category = RwSignal::new("Technology".to_string());
    let image_url = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let submit = move || {
        let draft = CampaignDraft {
            title: title.get_untracked(),
            description: description.get_untracked(),
            goal_amount: goal.get_untracked().trim().parse().unwrap_or(0.0),
            duration_days: duration.get_untracked(),
            category: category.get_untracked(),
            image_url: image_url.get_untracked(),
        };
        if let Err(e) = draft.validate() {
            toasts.error(e.to_string());
            return;
        }
        let Some(creator) = wallet.address.get_untracked() else {
            toasts.error("Please connect your wallet first");
            return;
        };

        submitting.set(true);
        let campaign = Campaign::new(now_ms(), draft, &creator, CivilDate::today());
        let campaign_title = campaign.title.clone();
        let goal_amount = campaign.goal_amount;

        let store = CampaignStore::new(storage::BrowserStore);
        match store.append(campaign) {
            Ok(()) => {
                storage::notify_campaigns_changed();
                toasts.success(format!(
                    "Campaign \"{campaign_title}\" is live! Goal: {goal_amount} ALGO"
                ));
                page.set(Page::Dashboard);

                // Chain call is fire-and-forget; the outcome lands as a toast.
                spawn_local(async move {
                    match chain::create_campaign(cfg, creator, campaign_title).await {
                        Ok(outcome) => toasts.info(outcome.summary(&cfg)),
                        Err(e) => toasts.error(catalyst::algo::friendly_chain_error(&e)),
                    }
                });
            }
            Err(e) => toasts.error(format!("Failed to save campaign: {e}")),
        }
        submitting.set(false);
    };

    view! {
        <main class="create-page">
            <h1>"Create Campaign"</h1>

            <div class="form-card">
                <label class="field">
                    <span>"Title"</span>
                    <input
                        type="text"
                        placeholder="What are you raising funds for?"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>

                <label class="field">
                    <span>"Description"</span>
                    <textarea
                        rows="5"
                        placeholder="Tell your story"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>

                <div class="field-row">
                    <label class="field">
                        <span>"Goal (ALGO)"</span>
                        <input
                            type="number"
                            min="1"
                            step="0.1"
                            prop:value=move || goal.get()
                            on:input=move |ev| goal.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="field">
                        <span>"Duration"</span>
                        <select
                            prop:value=move || duration.get().to_string()
                            on:change=move |ev| {
                                if let Ok(days) = event_target_value(&ev).parse::<u32>() {
                                    duration.set(days);
                                }
                            }
                        >
                            {DURATIONS_DAYS
                                .iter()
                                .map(|&d| {
                                    view! {
                                        <option value=d.to_string()>{format!("{d} days")}</option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </label>

                    <label class="field">
                        <span>"Category"</span>
                        <select
                            prop:value=move || category.get()
                            on:change=move |ev| category.set(event_target_value(&ev))
                        >
                            {CATEGORIES
                                .iter()
                                .map(|&c| view! { <option value=c>{c}</option> })
                                .collect_view()}
                        </select>
                    </label>
                </div>

                <label class="field">
                    <span>"Image URL (optional)"</span>
                    <input
                        type="url"
                        placeholder="https://..."
                        prop:value=move || image_url.get()
                        on:input=move |ev| image_url.set(event_target_value(&ev))
                    />
                </label>

                <Show when=move || !image_url.get().trim().is_empty()>
                    <img class="image-preview" src=move || image_url.get() alt="Preview" />
                </Show>

                <div class="form-actions">
                    <button class="btn btn-ghost" on:click=move |_| page.set(Page::Dashboard)>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn-primary"
                        disabled=move || submitting.get()
                        on:click=move |_| submit()
                    >
                        {move || if submitting.get() { "Launching..." } else { "Launch Campaign" }}
                    </button>
                </div>
            </div>
        </main>
    }
}
