//! Creator view: the signed-in wallet's own campaigns, with delete and
//! withdraw actions. Ownership is a verbatim address comparison.

use catalyst::algo::AlgodConfig;
use catalyst::campaign::Campaign;
use catalyst::date::CivilDate;
use catalyst::store::CampaignStore;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::ui_model::Page;

use super::{chain, storage, Toasts, WalletState};

#[component]
pub(super) fn MyCampaignsPage(
    cfg: AlgodConfig,
    campaigns: RwSignal<Vec<Campaign>>,
    page: RwSignal<Page>,
    selected: RwSignal<Option<u64>>,
    toasts: Toasts,
    wallet: WalletState,
) -> impl IntoView {
    let mine = move || {
        let Some(addr) = wallet.address.get() else {
            return Vec::new();
        };
        // Re-run whenever the shared list reloads; the store stays the source
        // of truth for the ownership filter.
        campaigns.track();
        CampaignStore::new(storage::BrowserStore)
            .by_creator(CivilDate::today(), &addr)
            .unwrap_or_default()
    };

    view! {
        <main class="my-campaigns">
            <h1>"My Campaigns"</h1>

            <Show
                when=move || wallet.address.with(Option::is_some)
                fallback=|| {
                    view! {
                        <div class="empty-state">
                            <h3>"Connect your wallet"</h3>
                            <p>"Campaigns are tied to the wallet address that created them."</p>
                        </div>
                    }
                }
            >
                <Show
                    when=move || !mine().is_empty()
                    fallback=move || {
                        view! {
                            <div class="empty-state">
                                <h3>"No campaigns yet"</h3>
                                <button
                                    class="btn btn-primary"
                                    on:click=move |_| page.set(Page::CreateCampaign)
                                >
                                    "Create a campaign"
                                </button>
                            </div>
                        }
                    }
                >
                    <table class="campaigns-table">
                        <thead>
                            <tr>
                                <th>"Title"</th>
                                <th>"Goal"</th>
                                <th>"Raised"</th>
                                <th>"Progress"</th>
                                <th>"Status"</th>
                                <th>"Deadline"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=mine
                                key=|c| c.id
                                children=move |c| {
                                    view! {
                                        <CampaignRow
                                            campaign=c
                                            cfg
                                            campaigns
                                            page
                                            selected
                                            toasts
                                            wallet
                                        />
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </Show>
            </Show>
        </main>
    }
}

#[component]
fn CampaignRow(
    campaign: Campaign,
    cfg: AlgodConfig,
    campaigns: RwSignal<Vec<Campaign>>,
    page: RwSignal<Page>,
    selected: RwSignal<Option<u64>>,
    toasts: Toasts,
    wallet: WalletState,
) -> impl IntoView {
    let id = campaign.id;
    let title = campaign.title.clone();
    let can_withdraw = campaign.goal_reached();
    let withdrawing = RwSignal::new(false);

    let view_campaign = move |_| {
        selected.set(Some(id));
        page.set(Page::CampaignDetail);
    };

    let delete = {
        let title = title.clone();
        move |_| {
            let store = CampaignStore::new(storage::BrowserStore);
            match store.remove(id) {
                Ok(()) => {
                    storage::notify_campaigns_changed();
                    campaigns.update(|cs| cs.retain(|c| c.id != id));
                    toasts.success(format!("Campaign \"{title}\" deleted"));
                }
                Err(e) => toasts.error(format!("Failed to delete campaign: {e}")),
            }
        }
    };

    let withdraw = move |_| {
        let Some(sender) = wallet.address.get_untracked() else {
            toasts.error("Please connect your wallet first");
            return;
        };
        withdrawing.set(true);
        spawn_local(async move {
            match chain::withdraw(cfg, sender, id).await {
                Ok(outcome) => toasts.success(format!(
                    "Withdrawal submitted. {}",
                    outcome.summary(&cfg)
                )),
                Err(e) => toasts.error(catalyst::algo::friendly_chain_error(&e)),
            }
            withdrawing.set(false);
        });
    };

    view! {
        <tr>
            <td class="cell-title">{campaign.title.clone()}</td>
            <td>{format!("{:.1}", campaign.goal_amount)}</td>
            <td>{format!("{:.1}", campaign.raised_amount)}</td>
            <td>{format!("{:.0}%", campaign.progress_percent())}</td>
            <td>
                <span class=if campaign.is_active { "badge active" } else { "badge ended" }>
                    {if campaign.is_active { "Active" } else { "Ended" }}
                </span>
            </td>
            <td>{campaign.deadline.clone()}</td>
            <td class="cell-actions">
                <button class="btn btn-sm" on:click=view_campaign>
                    "View"
                </button>
                <Show when=move || can_withdraw>
                    <button
                        class="btn btn-sm btn-primary"
                        disabled=move || withdrawing.get()
                        on:click=withdraw
                    >
                        {move || if withdrawing.get() { "Withdrawing..." } else { "Withdraw" }}
                    </button>
                </Show>
                <button class="btn btn-sm btn-danger" on:click=delete>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
