//! Dashboard: hero stats, filter buttons, campaign grid.

use catalyst::algo::format_address;
use catalyst::campaign::{Campaign, CampaignFilter};
use catalyst::date::CivilDate;
use leptos::prelude::*;

use crate::ui_model::{filter_label, DashboardStats, Page};

use super::shell::ProgressBar;

#[component]
pub(super) fn DashboardPage(
    campaigns: RwSignal<Vec<Campaign>>,
    filter: RwSignal<CampaignFilter>,
    page: RwSignal<Page>,
    selected: RwSignal<Option<u64>>,
) -> impl IntoView {
    let stats = move || DashboardStats::from_campaigns(&campaigns.get());
    let filtered = move || {
        let f = filter.get();
        campaigns
            .get()
            .into_iter()
            .filter(|c| f.matches(c))
            .collect::<Vec<_>>()
    };

    view! {
        <main class="dashboard">
            <section class="hero">
                <h1>"Fund Your " <span class="text-gradient">"Campus Dreams"</span></h1>
                <p class="hero-subtitle">"Transparent crowdfunding powered by Algorand"</p>
                <button class="btn btn-primary btn-lg" on:click=move |_| page.set(Page::CreateCampaign)>
                    "+ Create Campaign"
                </button>
            </section>

            <section class="stats-grid">
                <Stat label="Total Campaigns" value=Signal::derive(move || stats().total_campaigns.to_string()) />
                <Stat label="Active Campaigns" value=Signal::derive(move || stats().active_campaigns.to_string()) />
                <Stat label="Total Raised" value=Signal::derive(move || format!("{:.1} ALGO", stats().total_raised)) />
                <Stat label="Total Backers" value=Signal::derive(move || stats().total_backers.to_string()) />
            </section>

            <section class="campaigns-section">
                <div class="section-header">
                    <h2>"Explore Campaigns"</h2>
                    <div class="filter-buttons">
                        {CampaignFilter::all()
                            .iter()
                            .map(|&f| {
                                view! {
                                    <button
                                        class=move || {
                                            if filter.get() == f {
                                                "filter-btn active"
                                            } else {
                                                "filter-btn"
                                            }
                                        }
                                        on:click=move |_| filter.set(f)
                                    >
                                        {filter_label(f)}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <Show
                    when=move || !filtered().is_empty()
                    fallback=move || {
                        view! {
                            <div class="empty-state">
                                <h3>"No Campaigns Yet"</h3>
                                <p>"Be the first to create a campaign and start raising funds!"</p>
                                <button
                                    class="btn btn-primary"
                                    on:click=move |_| page.set(Page::CreateCampaign)
                                >
                                    "Create Your First Campaign"
                                </button>
                            </div>
                        }
                    }
                >
                    <div class="campaigns-grid">
                        <For
                            each=filtered
                            key=|c| c.id
                            children=move |c| {
                                view! { <CampaignCard campaign=c page selected /> }
                            }
                        />
                    </div>
                </Show>
            </section>
        </main>
    }
}

#[component]
fn Stat(label: &'static str, value: Signal<String>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <h3 class="stat-value">{move || value.get()}</h3>
            <p class="stat-label">{label}</p>
        </div>
    }
}

#[component]
pub(super) fn CampaignCard(
    campaign: Campaign,
    page: RwSignal<Page>,
    selected: RwSignal<Option<u64>>,
) -> impl IntoView {
    let id = campaign.id;
    let percent = campaign.progress_percent();
    let days_left = campaign.days_left(CivilDate::today());
    let open = move |_| {
        selected.set(Some(id));
        page.set(Page::CampaignDetail);
    };

    view! {
        <div class="campaign-card" role="button" tabindex="0" on:click=open>
            <img class="card-image" src=campaign.image_url.clone() alt="" />
            <div class="card-body">
                <span class="card-category">{campaign.category.clone()}</span>
                <h3 class="card-title">{campaign.title.clone()}</h3>
                <ProgressBar percent=Signal::derive(move || percent) />
                <div class="card-meta">
                    <span>{format!("{:.1} / {:.1} ALGO", campaign.raised_amount, campaign.goal_amount)}</span>
                    <span>
                        {if campaign.is_active {
                            format!("{days_left} days left")
                        } else {
                            "Completed".to_string()
                        }}
                    </span>
                </div>
                <span class="card-creator">{format_address(&campaign.creator)}</span>
            </div>
        </div>
    }
}
