//! The campaign record and its status rules.
//!
//! Campaigns live as one JSON array in local storage, so the serde form keeps
//! the camelCase field names of the stored blob.

use serde::{Deserialize, Serialize};

use crate::date::CivilDate;

/// Fallback artwork when a campaign is created without an image.
pub const DEFAULT_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1523050854058-8df90110c9f1";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    /// Creation time in ms; two creations within the same millisecond collide
    /// (known limitation, not handled).
    pub id: u64,
    pub title: String,
    pub description: String,
    pub goal_amount: f64,
    pub raised_amount: f64,
    /// `YYYY-MM-DD`.
    pub deadline: String,
    pub image_url: String,
    /// Wallet address of the creator; compared verbatim, no normalization.
    pub creator: String,
    pub is_active: bool,
    pub category: String,
}

impl Campaign {
    pub fn new(id: u64, draft: CampaignDraft, creator: &str, today: CivilDate) -> Self {
        let image_url = if draft.image_url.trim().is_empty() {
            DEFAULT_IMAGE_URL.to_string()
        } else {
            draft.image_url
        };
        Self {
            id,
            title: draft.title,
            description: draft.description,
            goal_amount: draft.goal_amount,
            raised_amount: 0.0,
            deadline: today.add_days(i64::from(draft.duration_days)).to_string(),
            image_url,
            creator: creator.to_string(),
            is_active: true,
            category: draft.category,
        }
    }

    pub fn goal_reached(&self) -> bool {
        self.raised_amount >= self.goal_amount
    }

    pub fn deadline_passed(&self, today: CivilDate) -> bool {
        match CivilDate::parse(&self.deadline) {
            Some(deadline) => deadline < today,
            None => false,
        }
    }

    /// Recomputes `is_active` for `today`. Only ever deactivates; a completed
    /// campaign never comes back. Returns whether the record changed.
    pub fn refresh_status(&mut self, today: CivilDate) -> bool {
        let should_complete = self.goal_reached() || self.deadline_passed(today);
        if should_complete && self.is_active {
            self.is_active = false;
            return true;
        }
        false
    }

    /// Funding progress clamped to `[0, 100]`.
    pub fn progress_percent(&self) -> f64 {
        if self.goal_amount <= 0.0 {
            return 0.0;
        }
        (self.raised_amount / self.goal_amount * 100.0).clamp(0.0, 100.0)
    }

    /// Whole days until the deadline; zero once it has passed.
    pub fn days_left(&self, today: CivilDate) -> i64 {
        match CivilDate::parse(&self.deadline) {
            Some(deadline) if deadline > today => {
                let mut days = 0;
                let mut d = today;
                // Deadlines are at most a few years out; walking is fine.
                while d < deadline && days < 10_000 {
                    d = d.add_days(1);
                    days += 1;
                }
                days
            }
            _ => 0,
        }
    }
}

/// Form input for campaign creation, validated before anything is written.
#[derive(Debug, Clone, Default)]
pub struct CampaignDraft {
    pub title: String,
    pub description: String,
    pub goal_amount: f64,
    pub duration_days: u32,
    pub category: String,
    pub image_url: String,
}

impl CampaignDraft {
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.title.trim().is_empty() {
            return Err(DraftError::EmptyTitle);
        }
        if self.description.trim().is_empty() {
            return Err(DraftError::EmptyDescription);
        }
        if !(self.goal_amount > 0.0) {
            return Err(DraftError::InvalidGoal);
        }
        if self.duration_days == 0 {
            return Err(DraftError::InvalidDuration);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftError {
    EmptyTitle,
    EmptyDescription,
    InvalidGoal,
    InvalidDuration,
}

impl std::fmt::Display for DraftError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            DraftError::EmptyTitle => "Please enter a campaign title",
            DraftError::EmptyDescription => "Please enter a campaign description",
            DraftError::InvalidGoal => "Please enter a valid goal amount",
            DraftError::InvalidDuration => "Please choose a campaign duration",
        };
        f.write_str(msg)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CampaignFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl CampaignFilter {
    pub fn matches(self, campaign: &Campaign) -> bool {
        match self {
            CampaignFilter::All => true,
            CampaignFilter::Active => campaign.is_active,
            CampaignFilter::Completed => !campaign.is_active,
        }
    }

    pub fn all() -> &'static [CampaignFilter] {
        &[
            CampaignFilter::All,
            CampaignFilter::Active,
            CampaignFilter::Completed,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(goal: f64, days: u32) -> CampaignDraft {
        CampaignDraft {
            title: "Solar chargers for the library".to_string(),
            description: "Outdoor charging benches.".to_string(),
            goal_amount: goal,
            duration_days: days,
            category: "Technology".to_string(),
            image_url: String::new(),
        }
    }

    #[test]
    fn new_campaign_starts_active_with_zero_raised() {
        let today = CivilDate::new(2025, 6, 1);
        let c = Campaign::new(1_748_736_000_000, draft(50.0, 30), "ADDR1", today);
        assert_eq!(c.raised_amount, 0.0);
        assert!(c.is_active);
        assert_eq!(c.deadline, "2025-07-01");
        assert_eq!(c.image_url, DEFAULT_IMAGE_URL);
    }

    #[test]
    fn wire_form_uses_camel_case() {
        let today = CivilDate::new(2025, 6, 1);
        let c = Campaign::new(7, draft(50.0, 30), "ADDR1", today);
        let json = serde_json::to_string(&c).unwrap();
        assert!(json.contains("\"goalAmount\""));
        assert!(json.contains("\"raisedAmount\""));
        assert!(json.contains("\"imageUrl\""));
        assert!(json.contains("\"isActive\""));
        let back: Campaign = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn refresh_deactivates_on_goal_reached() {
        let today = CivilDate::new(2025, 6, 1);
        let mut c = Campaign::new(7, draft(50.0, 30), "ADDR1", today);
        c.raised_amount = 50.0;
        assert!(c.refresh_status(today));
        assert!(!c.is_active);
        // Idempotent: already completed, nothing changes.
        assert!(!c.refresh_status(today));
    }

    #[test]
    fn refresh_deactivates_on_past_deadline() {
        let today = CivilDate::new(2025, 6, 1);
        let mut c = Campaign::new(7, draft(50.0, 10), "ADDR1", today);
        assert!(!c.refresh_status(CivilDate::new(2025, 6, 11)));
        assert!(c.refresh_status(CivilDate::new(2025, 6, 12)));
        assert!(!c.is_active);
    }

    #[test]
    fn unparseable_deadline_never_passes() {
        let today = CivilDate::new(2025, 6, 1);
        let mut c = Campaign::new(7, draft(50.0, 10), "ADDR1", today);
        c.deadline = "whenever".to_string();
        assert!(!c.deadline_passed(today));
        assert!(!c.refresh_status(today));
    }

    #[test]
    fn progress_is_clamped() {
        let today = CivilDate::new(2025, 6, 1);
        let mut c = Campaign::new(7, draft(50.0, 30), "ADDR1", today);
        c.raised_amount = 25.0;
        assert_eq!(c.progress_percent(), 50.0);
        c.raised_amount = 125.0;
        assert_eq!(c.progress_percent(), 100.0);
        c.goal_amount = 0.0;
        assert_eq!(c.progress_percent(), 0.0);
    }

    #[test]
    fn filters_partition_with_no_overlap_or_omission() {
        let today = CivilDate::new(2025, 6, 1);
        let mut list = vec![
            Campaign::new(1, draft(50.0, 30), "A", today),
            Campaign::new(2, draft(10.0, 30), "B", today),
            Campaign::new(3, draft(20.0, 30), "C", today),
        ];
        list[1].is_active = false;

        for c in &list {
            let active = CampaignFilter::Active.matches(c);
            let completed = CampaignFilter::Completed.matches(c);
            assert!(CampaignFilter::All.matches(c));
            assert!(active != completed);
        }
        let active_count = list.iter().filter(|c| CampaignFilter::Active.matches(c)).count();
        let completed_count = list
            .iter()
            .filter(|c| CampaignFilter::Completed.matches(c))
            .count();
        assert_eq!(active_count + completed_count, list.len());
    }

    #[test]
    fn draft_validation_catches_bad_fields() {
        assert!(draft(50.0, 30).validate().is_ok());
        let mut d = draft(50.0, 30);
        d.title = "   ".to_string();
        assert_eq!(d.validate(), Err(DraftError::EmptyTitle));
        let mut d = draft(50.0, 30);
        d.description.clear();
        assert_eq!(d.validate(), Err(DraftError::EmptyDescription));
        assert_eq!(draft(0.0, 30).validate(), Err(DraftError::InvalidGoal));
        assert_eq!(draft(f64::NAN, 30).validate(), Err(DraftError::InvalidGoal));
        assert_eq!(draft(50.0, 0).validate(), Err(DraftError::InvalidDuration));
    }

    #[test]
    fn days_left_counts_down_to_zero() {
        let today = CivilDate::new(2025, 6, 1);
        let c = Campaign::new(7, draft(50.0, 30), "ADDR1", today);
        assert_eq!(c.days_left(today), 30);
        assert_eq!(c.days_left(CivilDate::new(2025, 6, 30)), 1);
        assert_eq!(c.days_left(CivilDate::new(2025, 7, 1)), 0);
        assert_eq!(c.days_left(CivilDate::new(2025, 8, 1)), 0);
    }
}
