//! Per-date meal assignments: date-keyed upsert, range queries, and week
//! generation.

use chrono::{Datelike, Days, NaiveDate, Utc};
use uuid::Uuid;

use crate::error::StorageError;
use crate::seed;
use crate::storage::{self, EntityKind, Storage};
use crate::types::{MealPlan, MealSlot, Meals, MealsPatch};

/// Owns the meal plan collection, loaded once from storage.
///
/// The calendar date is the natural key: there is at most one plan per date,
/// and [`save_for_date`](Self::save_for_date) upserts by date rather than by
/// surrogate id.
pub struct MealPlanStore<S: Storage> {
    storage: S,
    plans: Vec<MealPlan>,
}

impl<S: Storage> MealPlanStore<S> {
    /// Load the meal plans, seeding sample data on first use.
    pub fn open(storage: S) -> Result<Self, StorageError> {
        let plans = storage::load_or_seed(&storage, EntityKind::MealPlans, seed::meal_plans)?;
        tracing::debug!(count = plans.len(), "loaded meal plans");
        Ok(Self { storage, plans })
    }

    fn persist(&self) -> Result<(), StorageError> {
        storage::persist(&self.storage, EntityKind::MealPlans, &self.plans)
    }

    /// All plans in insertion order.
    pub fn all(&self) -> &[MealPlan] {
        &self.plans
    }

    pub fn get_for_date(&self, date: NaiveDate) -> Option<&MealPlan> {
        self.plans.iter().find(|p| p.date == date)
    }

    /// Upsert the plan for `date`, merging the patch slot by slot.
    ///
    /// An existing plan keeps its id and any slots the patch leaves
    /// untouched; otherwise a new plan is created with a fresh id. Returns
    /// the resulting plan.
    pub fn save_for_date(
        &mut self,
        date: NaiveDate,
        patch: MealsPatch,
    ) -> Result<MealPlan, StorageError> {
        let plan = match self.plans.iter_mut().find(|p| p.date == date) {
            Some(existing) => {
                patch.apply(&mut existing.meals);
                existing.clone()
            }
            None => {
                let mut meals = Meals::default();
                patch.apply(&mut meals);
                let plan = MealPlan {
                    id: Uuid::new_v4(),
                    date,
                    meals,
                };
                self.plans.push(plan.clone());
                plan
            }
        };

        self.persist()?;
        Ok(plan)
    }

    /// Empty one slot of the plan for `date`. Dates without a plan are
    /// ignored.
    pub fn clear_meal(&mut self, date: NaiveDate, slot: MealSlot) -> Result<(), StorageError> {
        if self.get_for_date(date).is_none() {
            tracing::debug!(%date, slot = slot.as_str(), "clear_meal without a plan, ignoring");
            return Ok(());
        }

        self.save_for_date(date, MealsPatch::clearing(slot))?;
        Ok(())
    }

    /// Plans whose date falls in `[start, end]`, inclusive on both ends.
    pub fn for_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<&MealPlan> {
        self.plans
            .iter()
            .filter(|p| p.date >= start && p.date <= end)
            .collect()
    }
}

/// The seven dates of the Monday-starting week containing `anchor`
/// (default: today), Monday through Sunday.
pub fn week_dates(anchor: Option<NaiveDate>) -> [NaiveDate; 7] {
    let anchor = anchor.unwrap_or_else(|| Utc::now().date_naive());
    let monday = anchor - Days::new(u64::from(anchor.weekday().num_days_from_monday()));
    std::array::from_fn(|i| monday + Days::new(i as u64))
}
