use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::coerce::{safe_ratio, Total};
use crate::ledger::{frequency::months_between, FinancialGoal};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    pub goal_id: Uuid,
    pub name: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub progress_percent: f64,
    pub remaining: f64,
    /// Whole months until the target date; `None` without a future target date.
    pub months_remaining: Option<i32>,
    pub monthly_contribution_needed: f64,
    pub complete: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GoalSummary {
    pub total_target: f64,
    pub total_saved: f64,
    pub overall_progress_percent: f64,
    pub completed_goals: usize,
    pub goals: Vec<GoalProgress>,
}

pub struct GoalService;

impl GoalService {
    pub fn summarize(goals: &[FinancialGoal], today: NaiveDate) -> GoalSummary {
        let progress: Vec<GoalProgress> =
            goals.iter().map(|goal| Self::progress(goal, today)).collect();
        let total_target: f64 = goals.iter().map(|goal| goal.target_amount).total();
        let total_saved: f64 = goals.iter().map(|goal| goal.current_amount).total();
        GoalSummary {
            total_target,
            total_saved,
            overall_progress_percent: safe_ratio(total_saved, total_target) * 100.0,
            completed_goals: progress.iter().filter(|goal| goal.complete).count(),
            goals: progress,
        }
    }

    pub fn progress(goal: &FinancialGoal, today: NaiveDate) -> GoalProgress {
        let remaining = goal.remaining();
        let months_remaining = goal
            .target_date
            .filter(|target| *target > today)
            .map(|target| months_between(today, target).max(0));
        let monthly_contribution_needed = match months_remaining {
            Some(months) if remaining > 0.0 => remaining / f64::from(months.max(1)),
            _ => 0.0,
        };
        GoalProgress {
            goal_id: goal.id,
            name: goal.name.clone(),
            target_amount: goal.target_amount,
            current_amount: goal.current_amount,
            progress_percent: goal.progress_percent(),
            remaining,
            months_remaining,
            monthly_contribution_needed,
            complete: goal.is_complete(),
        }
    }
}
