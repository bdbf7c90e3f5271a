// Path: crates/tracker/src/tracker.rs

use crate::fsum::fsum;
use eicoop_client::WireClient;
use eicoop_types::schema::{Contract, ContractCoopStatusResponse, Goal};
use eicoop_types::{TrackerError, VariantSelector, WireError};
use serde::Serialize;

/// One coop instance: a contract, a coop code and the goal variant it plays.
///
/// The goal list of the selected variant is resolved once, at construction;
/// every metric below is a pure function of that list and a snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct CoopTracker {
    contract: Contract,
    coop_code: String,
    selector: VariantSelector,
    goals: Vec<Goal>,
    highest: Goal,
}

/// Every derived metric for one snapshot, for reporting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoopProjection {
    pub contract_id: String,
    pub coop_code: String,
    pub selector: String,
    pub contributors: usize,
    pub max_coop_size: u32,
    pub total_amount: f64,
    pub seconds_remaining: f64,
    pub highest_goal: f64,
    pub effective_shipping_rate: f64,
    pub projected_final_amount: f64,
    /// `null` in JSON when the coop will never finish at the current rate.
    pub seconds_until_finished: f64,
    pub is_finished: bool,
    pub will_finish: bool,
    pub is_full: bool,
    pub has_time_run_out: bool,
}

/// The goal with the maximum `target_amount`, scanning left to right and
/// replacing only on a strictly larger target.
fn leftmost_max(goals: &[Goal]) -> Option<&Goal> {
    let mut best: Option<&Goal> = None;
    for goal in goals {
        match best {
            Some(current) if goal.target_amount <= current.target_amount => {}
            _ => best = Some(goal),
        }
    }
    best
}

impl CoopTracker {
    /// Resolves the goal variant of `selector` in `contract`.
    ///
    /// Fails when the contract has no such variant, or when the variant lists
    /// no goals.
    pub fn new(
        contract: Contract,
        coop_code: impl Into<String>,
        selector: VariantSelector,
    ) -> Result<Self, TrackerError> {
        let goals = contract
            .goal_variant(&selector)
            .ok_or_else(|| TrackerError::VariantNotFound {
                contract: contract.identifier.clone(),
                selector,
            })?
            .to_vec();
        let highest = leftmost_max(&goals)
            .cloned()
            .ok_or_else(|| TrackerError::EmptyGoals {
                contract: contract.identifier.clone(),
                selector,
            })?;

        let coop_code = coop_code.into();
        tracing::debug!(
            target: "tracker",
            contract = %contract.identifier,
            coop = %coop_code,
            %selector,
            goals = goals.len(),
            "coop tracker ready"
        );
        Ok(Self {
            contract,
            coop_code,
            selector,
            goals,
            highest,
        })
    }

    pub fn contract(&self) -> &Contract {
        &self.contract
    }

    pub fn coop_code(&self) -> &str {
        &self.coop_code
    }

    pub fn selector(&self) -> VariantSelector {
        self.selector
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// Fetches the current snapshot of this coop.
    pub async fn get_status(&self, client: &WireClient) -> Result<ContractCoopStatusResponse, WireError> {
        client
            .fetch_coop_status(&self.contract.identifier, &self.coop_code)
            .await
    }

    /// Sum over contributors of the reported rate capped by their shipping capacity.
    pub fn effective_shipping_rate(&self, snapshot: &ContractCoopStatusResponse) -> f64 {
        fsum(
            snapshot
                .contributors
                .iter()
                .map(|c| c.contribution_rate.min(c.shipping_rate_cap())),
        )
    }

    /// Amount at the deadline if the current aggregate rate holds.
    pub fn projected_final_amount(&self, snapshot: &ContractCoopStatusResponse) -> f64 {
        self.effective_shipping_rate(snapshot) * snapshot.seconds_remaining + snapshot.total_amount
    }

    /// Seconds until the highest goal is reached; `+inf` when the rate is zero.
    pub fn seconds_until_finished(&self, snapshot: &ContractCoopStatusResponse) -> f64 {
        let rate = self.effective_shipping_rate(snapshot);
        if rate == 0.0 {
            return f64::INFINITY;
        }
        (self.highest_goal().target_amount - snapshot.total_amount) / rate
    }

    /// The goal with the largest target; the first one on ties.
    pub fn highest_goal(&self) -> &Goal {
        &self.highest
    }

    pub fn is_finished(&self, snapshot: &ContractCoopStatusResponse) -> bool {
        snapshot.total_amount >= self.highest_goal().target_amount
    }

    /// True only when the roster size equals the contract's cap exactly.
    pub fn is_full(&self, snapshot: &ContractCoopStatusResponse) -> bool {
        usize::try_from(self.contract.max_coop_size)
            .map(|max| snapshot.contributors.len() == max)
            .unwrap_or(false)
    }

    pub fn has_time_run_out(&self, snapshot: &ContractCoopStatusResponse) -> bool {
        snapshot.seconds_remaining < 0.0
    }

    /// Computes every metric for `snapshot`.
    pub fn project(&self, snapshot: &ContractCoopStatusResponse) -> CoopProjection {
        let highest_goal = self.highest_goal().target_amount;
        let projected_final_amount = self.projected_final_amount(snapshot);
        CoopProjection {
            contract_id: self.contract.identifier.clone(),
            coop_code: self.coop_code.clone(),
            selector: self.selector.to_string(),
            contributors: snapshot.contributors.len(),
            max_coop_size: self.contract.max_coop_size,
            total_amount: snapshot.total_amount,
            seconds_remaining: snapshot.seconds_remaining,
            highest_goal,
            effective_shipping_rate: self.effective_shipping_rate(snapshot),
            projected_final_amount,
            seconds_until_finished: self.seconds_until_finished(snapshot),
            is_finished: self.is_finished(snapshot),
            will_finish: projected_final_amount >= highest_goal,
            is_full: self.is_full(snapshot),
            has_time_run_out: self.has_time_run_out(snapshot),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eicoop_client::MockTransport;
    use eicoop_types::schema::{ContributionInfo, FarmProductionParams, GoalSet, GradeSpec, PlayerGrade};
    use eicoop_types::{ClientConfig, ResponseFraming};
    use proptest::prelude::*;
    use std::sync::Arc;

    fn goal(target: f64) -> Goal {
        Goal {
            target_amount: target,
            reward_amount: 0.0,
        }
    }

    fn contributor(rate: f64, sr: f64) -> ContributionInfo {
        ContributionInfo {
            contribution_rate: rate,
            production_params: Some(FarmProductionParams {
                sr,
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    fn contract_with_goals(goals: Vec<Goal>) -> Contract {
        Contract {
            identifier: "spring-cleaning".into(),
            max_coop_size: 2,
            grade_specs: vec![GradeSpec {
                grade: PlayerGrade::GradeAaa as i32,
                goals,
            }],
            ..Default::default()
        }
    }

    fn tracker() -> CoopTracker {
        CoopTracker::new(
            contract_with_goals(vec![goal(1000.0), goal(5000.0)]),
            "my-coop",
            VariantSelector::ByGrade(PlayerGrade::GradeAaa),
        )
        .unwrap()
    }

    fn snapshot(contributors: Vec<ContributionInfo>, total: f64, remaining: f64) -> ContractCoopStatusResponse {
        ContractCoopStatusResponse {
            total_amount: total,
            seconds_remaining: remaining,
            contributors,
            ..Default::default()
        }
    }

    #[test]
    fn test_scenario_projection() {
        let t = tracker();
        let s = snapshot(vec![contributor(10.0, 8.0), contributor(3.0, 10.0)], 100.0, 200.0);

        assert_eq!(t.effective_shipping_rate(&s), 11.0);
        assert_eq!(t.projected_final_amount(&s), 2300.0);
        assert!((t.seconds_until_finished(&s) - 4900.0 / 11.0).abs() < 1e-9);
        assert!((t.seconds_until_finished(&s) - 445.45).abs() < 0.01);
        assert!(!t.is_finished(&s));
        assert!(t.is_full(&s));
        assert!(!t.has_time_run_out(&s));
    }

    #[test]
    fn test_scenario_finished_regardless_of_rate() {
        let t = tracker();
        let s = snapshot(vec![contributor(0.0, 0.0)], 5000.0, 10.0);
        assert!(t.is_finished(&s));
    }

    #[test]
    fn test_scenario_empty_roster() {
        let t = tracker();
        let s = snapshot(vec![], 321.0, 900.0);
        assert_eq!(t.effective_shipping_rate(&s), 0.0);
        assert_eq!(t.seconds_until_finished(&s), f64::INFINITY);
        assert_eq!(t.projected_final_amount(&s), 321.0);
        assert!(!t.is_full(&s));
    }

    #[test]
    fn test_unknown_variant_is_configuration_error() {
        let err = CoopTracker::new(
            contract_with_goals(vec![goal(1.0)]),
            "coop",
            VariantSelector::ByGrade(PlayerGrade::GradeC),
        )
        .unwrap_err();
        assert!(matches!(err, TrackerError::VariantNotFound { .. }));

        let err = CoopTracker::new(
            contract_with_goals(vec![goal(1.0)]),
            "coop",
            VariantSelector::ByLeague(0),
        )
        .unwrap_err();
        assert!(matches!(err, TrackerError::VariantNotFound { .. }));
    }

    #[test]
    fn test_empty_variant_is_configuration_error() {
        let err = CoopTracker::new(
            contract_with_goals(vec![]),
            "coop",
            VariantSelector::ByGrade(PlayerGrade::GradeAaa),
        )
        .unwrap_err();
        assert!(matches!(err, TrackerError::EmptyGoals { .. }));
    }

    #[test]
    fn test_league_variant() {
        let contract = Contract {
            identifier: "legacy".into(),
            goal_sets: vec![
                GoalSet {
                    goals: vec![goal(10.0), goal(90.0)],
                },
                GoalSet {
                    goals: vec![goal(5.0), goal(45.0)],
                },
            ],
            ..Default::default()
        };
        let t = CoopTracker::new(contract, "coop", VariantSelector::league(false)).unwrap();
        assert_eq!(t.highest_goal().target_amount, 45.0);
    }

    #[test]
    fn test_highest_goal_prefers_first_on_ties() {
        let tied = vec![
            goal(10.0),
            Goal {
                target_amount: 50.0,
                reward_amount: 1.0,
            },
            Goal {
                target_amount: 50.0,
                reward_amount: 2.0,
            },
            goal(20.0),
        ];
        let t = CoopTracker::new(
            contract_with_goals(tied),
            "coop",
            VariantSelector::ByGrade(PlayerGrade::GradeAaa),
        )
        .unwrap();
        assert_eq!(t.highest_goal().reward_amount, 1.0);
    }

    #[test]
    fn test_is_full_only_on_exact_count() {
        let t = tracker();
        let mk = |n: usize| snapshot(vec![contributor(1.0, 1.0); n], 0.0, 1.0);
        assert!(!t.is_full(&mk(1)));
        assert!(t.is_full(&mk(2)));
        assert!(!t.is_full(&mk(3)));
    }

    #[test]
    fn test_time_run_out_boundary() {
        let t = tracker();
        assert!(!t.has_time_run_out(&snapshot(vec![], 0.0, 0.0)));
        assert!(t.has_time_run_out(&snapshot(vec![], 0.0, -0.5)));
    }

    #[test]
    fn test_projection_json_never_finishes_is_null() {
        let t = tracker();
        let projection = t.project(&snapshot(vec![], 100.0, 60.0));
        assert!(!projection.will_finish);
        let json = serde_json::to_value(&projection).unwrap();
        assert!(json["seconds_until_finished"].is_null());
        assert_eq!(json["selector"], "grade AAA");
    }

    #[test]
    fn test_projection_will_finish() {
        let t = tracker();
        let projection = t.project(&snapshot(
            vec![contributor(10.0, 8.0), contributor(3.0, 10.0)],
            100.0,
            1000.0,
        ));
        assert_eq!(projection.projected_final_amount, 11_100.0);
        assert!(projection.will_finish);
        assert!(!projection.is_finished);
    }

    #[tokio::test]
    async fn test_get_status_passes_through() {
        let transport = Arc::new(MockTransport::new());
        let expected = snapshot(vec![contributor(4.0, 2.0)], 42.0, 7.0);
        transport.push_record(&expected, ResponseFraming::AUTHENTICATED);
        let client = WireClient::new(transport.clone(), ClientConfig::new("http://b/{}", "EI1", 47));

        let t = tracker();
        let got = t.get_status(&client).await.unwrap();
        assert_eq!(got, expected);

        let sent: eicoop_types::schema::ContractCoopStatusRequest =
            transport.calls()[0].decode().unwrap();
        assert_eq!(sent.contract_identifier, "spring-cleaning");
        assert_eq!(sent.coop_identifier, "my-coop");
    }

    fn rates() -> impl Strategy<Value = Vec<(f64, f64)>> {
        prop::collection::vec((0.0f64..1e9, 0.0f64..1e9), 0..64)
    }

    proptest! {
        #[test]
        fn prop_rate_is_order_independent(
            (original, shuffled) in rates().prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
        ) {
            let t = tracker();
            let a = snapshot(original.iter().map(|&(r, sr)| contributor(r, sr)).collect(), 0.0, 1.0);
            let b = snapshot(shuffled.iter().map(|&(r, sr)| contributor(r, sr)).collect(), 0.0, 1.0);
            prop_assert_eq!(t.effective_shipping_rate(&a), t.effective_shipping_rate(&b));
        }

        #[test]
        fn prop_rate_is_sum_of_capped_rates(pairs in rates()) {
            let t = tracker();
            let s = snapshot(pairs.iter().map(|&(r, sr)| contributor(r, sr)).collect(), 0.0, 1.0);
            let expected = fsum(pairs.iter().map(|&(r, sr)| r.min(sr)));
            prop_assert_eq!(t.effective_shipping_rate(&s), expected);
        }

        #[test]
        fn prop_infinite_iff_rate_zero(pairs in rates(), total in 0.0f64..1e6) {
            let t = tracker();
            let s = snapshot(pairs.iter().map(|&(r, sr)| contributor(r, sr)).collect(), total, 1.0);
            let rate = t.effective_shipping_rate(&s);
            prop_assert_eq!(t.seconds_until_finished(&s).is_infinite(), rate == 0.0);
        }

        #[test]
        fn prop_time_run_out_iff_negative(remaining in -1e6f64..1e6) {
            let t = tracker();
            prop_assert_eq!(t.has_time_run_out(&snapshot(vec![], 0.0, remaining)), remaining < 0.0);
        }

        #[test]
        fn prop_highest_goal_is_leftmost_max(targets in prop::collection::vec(0u8..5, 1..16)) {
            let goals: Vec<Goal> = targets
                .iter()
                .enumerate()
                .map(|(i, &target)| Goal { target_amount: f64::from(target), reward_amount: i as f64 })
                .collect();
            let t = CoopTracker::new(
                contract_with_goals(goals),
                "coop",
                VariantSelector::ByGrade(PlayerGrade::GradeAaa),
            ).unwrap();
            let max = targets.iter().copied().max().unwrap();
            let first = targets.iter().position(|&target| target == max).unwrap();
            prop_assert_eq!(t.highest_goal().target_amount, f64::from(max));
            prop_assert_eq!(t.highest_goal().reward_amount, first as f64);
        }
    }
}
