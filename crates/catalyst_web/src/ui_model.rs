//! UI models and metadata that should be available on both wasm and native.
//!
//! Keeping these out of the wasm-only `web` module allows us to unit-test the
//! page inventory and the dashboard math on the host.

use catalyst::campaign::{Campaign, CampaignFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Login,
    Signup,
    Dashboard,
    CreateCampaign,
    CampaignDetail,
    MyCampaigns,
}

impl Page {
    pub fn label(self) -> &'static str {
        match self {
            Page::Login => "Login",
            Page::Signup => "Sign Up",
            Page::Dashboard => "Dashboard",
            Page::CreateCampaign => "Create Campaign",
            Page::CampaignDetail => "Campaign",
            Page::MyCampaigns => "My Campaigns",
        }
    }

    /// Everything past the auth screens needs a signed-in user.
    pub fn requires_auth(self) -> bool {
        !matches!(self, Page::Login | Page::Signup)
    }

    /// Pages reachable from the navbar.
    pub fn nav() -> &'static [Page] {
        &[Page::Dashboard, Page::CreateCampaign, Page::MyCampaigns]
    }

    pub fn all() -> &'static [Page] {
        &[
            Page::Login,
            Page::Signup,
            Page::Dashboard,
            Page::CreateCampaign,
            Page::CampaignDetail,
            Page::MyCampaigns,
        ]
    }
}

pub fn filter_label(filter: CampaignFilter) -> &'static str {
    match filter {
        CampaignFilter::All => "All",
        CampaignFilter::Active => "Active",
        CampaignFilter::Completed => "Completed",
    }
}

/// The dashboard hero numbers. The backer count is synthetic (there is no
/// contribution ledger): ⌊raised × 2⌋ per campaign, as the product defined it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DashboardStats {
    pub total_campaigns: usize,
    pub active_campaigns: usize,
    pub total_raised: f64,
    pub total_backers: u64,
}

impl DashboardStats {
    pub fn from_campaigns(campaigns: &[Campaign]) -> Self {
        Self {
            total_campaigns: campaigns.len(),
            active_campaigns: campaigns.iter().filter(|c| c.is_active).count(),
            total_raised: campaigns.iter().map(|c| c.raised_amount).sum(),
            total_backers: campaigns
                .iter()
                .map(|c| (c.raised_amount * 2.0).floor().max(0.0) as u64)
                .sum(),
        }
    }
}

/// The campaign categories offered on the create form.
pub const CATEGORIES: &[&str] = &[
    "Technology",
    "Education",
    "Arts",
    "Sports",
    "Community",
    "Research",
];

/// Duration choices (days) offered on the create form.
pub const DURATIONS_DAYS: &[u32] = &[7, 14, 30, 60, 90];

#[cfg(test)]
mod tests {
    use super::*;
    use catalyst::campaign::CampaignDraft;
    use catalyst::date::CivilDate;

    fn campaign(id: u64, goal: f64, raised: f64, active: bool) -> Campaign {
        let mut c = Campaign::new(
            id,
            CampaignDraft {
                title: format!("c{id}"),
                description: "d".to_string(),
                goal_amount: goal,
                duration_days: 30,
                category: "Community".to_string(),
                image_url: String::new(),
            },
            "ADDR",
            CivilDate::new(2025, 6, 1),
        );
        c.raised_amount = raised;
        c.is_active = active;
        c
    }

    #[test]
    fn page_inventory_is_stable() {
        let all = Page::all();
        assert_eq!(all.len(), 6);

        let mut labels: Vec<&'static str> = all.iter().copied().map(Page::label).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), 6);

        for p in all {
            assert!(!p.label().trim().is_empty());
        }
        assert!(!Page::Login.requires_auth());
        assert!(!Page::Signup.requires_auth());
        assert!(Page::Dashboard.requires_auth());
        assert!(Page::MyCampaigns.requires_auth());
    }

    #[test]
    fn nav_pages_all_require_auth() {
        for p in Page::nav() {
            assert!(p.requires_auth());
            assert!(Page::all().contains(p));
        }
    }

    #[test]
    fn filter_labels_cover_the_inventory() {
        let mut labels: Vec<&'static str> = CampaignFilter::all()
            .iter()
            .copied()
            .map(filter_label)
            .collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), CampaignFilter::all().len());
    }

    #[test]
    fn dashboard_stats_math() {
        let list = vec![
            campaign(1, 50.0, 10.0, true),
            campaign(2, 20.0, 20.0, false),
            campaign(3, 80.0, 2.5, true),
        ];
        let stats = DashboardStats::from_campaigns(&list);
        assert_eq!(stats.total_campaigns, 3);
        assert_eq!(stats.active_campaigns, 2);
        assert_eq!(stats.total_raised, 32.5);
        // 20 + 40 + 5
        assert_eq!(stats.total_backers, 65);
    }

    #[test]
    fn dashboard_stats_on_empty_list() {
        assert_eq!(DashboardStats::from_campaigns(&[]), DashboardStats::default());
    }

    #[test]
    fn form_inventories_are_nonempty() {
        assert!(CATEGORIES.contains(&"Technology"));
        assert!(DURATIONS_DAYS.contains(&30));
    }
}
