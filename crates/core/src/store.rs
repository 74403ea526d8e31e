//! The campaign list as one JSON blob behind a key/value seam.
//!
//! Every mutation is a read-modify-write of the whole list. There is no
//! version token and no merge: when two tabs write concurrently the last
//! write wins, and a concurrent `update_raised` can be lost. That is the
//! stated contract, not an accident.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::campaign::Campaign;
use crate::date::CivilDate;
use crate::error::StoreError;

/// Local-storage key holding the serialized campaign list.
pub const CAMPAIGNS_KEY: &str = "campaigns";

/// Minimal string key/value seam. The browser backend wraps localStorage;
/// tests use [`MemoryStore`].
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

pub struct CampaignStore<S> {
    backend: S,
}

impl<S: KeyValueStore> CampaignStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Reads the full list. Absence and corrupt JSON both yield the empty
    /// list. Side effect: recomputes `is_active` for every entry against
    /// `today` and re-persists the whole list iff anything changed.
    pub fn load(&self, today: CivilDate) -> Result<Vec<Campaign>, StoreError> {
        let mut list = self.read_raw()?;
        let mut changed = false;
        for campaign in &mut list {
            changed |= campaign.refresh_status(today);
        }
        if changed {
            self.persist(&list)?;
        }
        Ok(list)
    }

    /// Appends one campaign. No id uniqueness check beyond creation-time ms.
    pub fn append(&self, campaign: Campaign) -> Result<(), StoreError> {
        let mut list = self.read_raw()?;
        list.push(campaign);
        self.persist(&list)
    }

    /// Adds `delta` to the matching campaign's raised amount and returns the
    /// updated record, or `None` when the id is unknown. Plain
    /// read-modify-write; no compare-and-swap.
    pub fn update_raised(&self, id: u64, delta: f64) -> Result<Option<Campaign>, StoreError> {
        let mut list = self.read_raw()?;
        let mut updated = None;
        for campaign in &mut list {
            if campaign.id == id {
                campaign.raised_amount += delta;
                updated = Some(campaign.clone());
                break;
            }
        }
        if updated.is_some() {
            self.persist(&list)?;
        }
        Ok(updated)
    }

    /// Removes exactly the campaign with `id`; all other entries are
    /// persisted unchanged.
    pub fn remove(&self, id: u64) -> Result<(), StoreError> {
        let mut list = self.read_raw()?;
        list.retain(|campaign| campaign.id != id);
        self.persist(&list)
    }

    /// Campaigns whose creator equals `creator` verbatim (no address
    /// normalization), with statuses refreshed as in [`Self::load`].
    pub fn by_creator(&self, today: CivilDate, creator: &str) -> Result<Vec<Campaign>, StoreError> {
        let mut list = self.load(today)?;
        list.retain(|campaign| campaign.creator == creator);
        Ok(list)
    }

    fn read_raw(&self) -> Result<Vec<Campaign>, StoreError> {
        let Some(raw) = self.backend.get(CAMPAIGNS_KEY)? else {
            return Ok(Vec::new());
        };
        Ok(serde_json::from_str(&raw).unwrap_or_default())
    }

    fn persist(&self, list: &[Campaign]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(list)
            .map_err(|e| StoreError::Backend(format!("serialize campaigns: {e}")))?;
        self.backend.set(CAMPAIGNS_KEY, &raw)
    }
}

/// In-memory backend for host tests.
#[derive(Default)]
pub struct MemoryStore {
    cells: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(key: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .cells
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.cells.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.cells
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.cells.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::campaign::CampaignDraft;

    fn today() -> CivilDate {
        CivilDate::new(2025, 6, 1)
    }

    fn campaign(id: u64, goal: f64, days: u32) -> Campaign {
        Campaign::new(
            id,
            CampaignDraft {
                title: format!("Campaign {id}"),
                description: "desc".to_string(),
                goal_amount: goal,
                duration_days: days,
                category: "Community".to_string(),
                image_url: String::new(),
            },
            "CREATOR",
            today(),
        )
    }

    #[test]
    fn load_yields_empty_on_absence_and_corrupt_json() {
        let store = CampaignStore::new(MemoryStore::new());
        assert!(store.load(today()).unwrap().is_empty());

        let store = CampaignStore::new(MemoryStore::seed(CAMPAIGNS_KEY, "{not json"));
        assert!(store.load(today()).unwrap().is_empty());
    }

    #[test]
    fn append_then_load_round_trips() {
        let store = CampaignStore::new(MemoryStore::new());
        store.append(campaign(1, 50.0, 30)).unwrap();
        store.append(campaign(2, 80.0, 10)).unwrap();

        let list = store.load(today()).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].id, 1);
        assert_eq!(list[1].id, 2);
        assert_eq!(list[0].raised_amount, 0.0);
        assert!(list[0].is_active);
        assert_eq!(list[0].deadline, "2025-07-01");
    }

    #[test]
    fn load_refreshes_statuses_and_re_persists_only_on_change() {
        let store = CampaignStore::new(MemoryStore::new());
        let mut funded = campaign(1, 50.0, 30);
        funded.raised_amount = 60.0;
        store.append(funded).unwrap();
        store.append(campaign(2, 80.0, 10)).unwrap();

        let list = store.load(today()).unwrap();
        assert!(!list[0].is_active, "goal reached must complete");
        assert!(list[1].is_active);

        // The deactivation was written back.
        let raw = store.backend().get(CAMPAIGNS_KEY).unwrap().unwrap();
        let reread: Vec<Campaign> = serde_json::from_str(&raw).unwrap();
        assert!(!reread[0].is_active);

        // A second load changes nothing.
        let before = store.backend().get(CAMPAIGNS_KEY).unwrap();
        let _ = store.load(today()).unwrap();
        assert_eq!(store.backend().get(CAMPAIGNS_KEY).unwrap(), before);
    }

    #[test]
    fn load_completes_past_deadline_campaigns() {
        let store = CampaignStore::new(MemoryStore::new());
        store.append(campaign(1, 50.0, 10)).unwrap();
        let list = store.load(CivilDate::new(2025, 7, 1)).unwrap();
        assert!(!list[0].is_active);
        for c in &list {
            assert!(!(c.deadline_passed(CivilDate::new(2025, 7, 1)) && c.is_active));
        }
    }

    #[test]
    fn sequential_contributions_accumulate() {
        let store = CampaignStore::new(MemoryStore::new());
        store.append(campaign(1, 50.0, 30)).unwrap();

        let after_five = store.update_raised(1, 5.0).unwrap().unwrap();
        assert_eq!(after_five.raised_amount, 5.0);
        let after_ten = store.update_raised(1, 10.0).unwrap().unwrap();
        assert_eq!(after_ten.raised_amount, 15.0);
    }

    #[test]
    fn update_raised_unknown_id_is_a_no_op() {
        let store = CampaignStore::new(MemoryStore::new());
        store.append(campaign(1, 50.0, 30)).unwrap();
        let before = store.backend().get(CAMPAIGNS_KEY).unwrap();
        assert!(store.update_raised(99, 5.0).unwrap().is_none());
        assert_eq!(store.backend().get(CAMPAIGNS_KEY).unwrap(), before);
    }

    #[test]
    fn remove_deletes_exactly_one_and_leaves_others_byte_identical() {
        let store = CampaignStore::new(MemoryStore::new());
        store.append(campaign(1, 50.0, 30)).unwrap();
        store.append(campaign(2, 80.0, 30)).unwrap();
        store.append(campaign(3, 20.0, 30)).unwrap();

        let before = store.load(today()).unwrap();
        let kept_before: Vec<String> = before
            .iter()
            .filter(|c| c.id != 2)
            .map(|c| serde_json::to_string(c).unwrap())
            .collect();

        store.remove(2).unwrap();

        let after = store.load(today()).unwrap();
        assert_eq!(after.len(), 2);
        assert!(after.iter().all(|c| c.id != 2));
        let kept_after: Vec<String> = after
            .iter()
            .map(|c| serde_json::to_string(c).unwrap())
            .collect();
        assert_eq!(kept_after, kept_before);
    }

    #[test]
    fn by_creator_compares_addresses_verbatim() {
        let store = CampaignStore::new(MemoryStore::new());
        let mut other = campaign(2, 80.0, 30);
        other.creator = "creator".to_string(); // differs only by case
        store.append(campaign(1, 50.0, 30)).unwrap();
        store.append(other).unwrap();

        let mine = store.by_creator(today(), "CREATOR").unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].id, 1);
    }
}
