// Path: crates/types/src/schema.rs

//! Binary wire records exchanged with the game backend.
//!
//! These are hand-maintained `prost` messages mirroring the subset of the
//! backend's protobuf schema this client reads or writes. Field tags follow the
//! backend's numbering so the records decode live traffic; fields the client
//! never touches are simply skipped by the decoder.

use crate::selector::VariantSelector;

/// Identifier of the tutorial contract every new player receives.
pub const TUTORIAL_CONTRACT_ID: &str = "first-contract";

/// Performance grade a player (and therefore a coop) is placed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum PlayerGrade {
    /// No grade assigned (legacy accounts, or a league-based request).
    GradeUnset = 0,
    /// Grade C.
    GradeC = 1,
    /// Grade B.
    GradeB = 2,
    /// Grade A.
    GradeA = 3,
    /// Grade AA.
    GradeAa = 4,
    /// Grade AAA.
    GradeAaa = 5,
}

impl PlayerGrade {
    /// Short display label (`AAA`, `AA`, ...).
    pub fn label(&self) -> &'static str {
        match self {
            Self::GradeUnset => "UNSET",
            Self::GradeC => "C",
            Self::GradeB => "B",
            Self::GradeA => "A",
            Self::GradeAa => "AA",
            Self::GradeAaa => "AAA",
        }
    }

    /// Converts a raw wire value, mapping unknown values to `None`.
    pub fn from_wire(value: i32) -> Option<Self> {
        Self::try_from(value).ok()
    }
}

/// Request metadata the first protocol generation attaches to most calls.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BasicRequestInfo {
    /// Player identifier the request is made on behalf of.
    #[prost(string, tag = "1")]
    pub ei_user_id: String,
    /// Client protocol version.
    #[prost(uint32, tag = "2")]
    pub client_version: u32,
}

/// Outer wrapper of an authenticated response; `message` holds the real record.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AuthenticatedMessage {
    /// Binary encoding of the wrapped record.
    #[prost(bytes = "vec", tag = "1")]
    pub message: Vec<u8>,
    /// Server authentication code for `message`.
    #[prost(string, tag = "2")]
    pub code: String,
    /// Envelope version.
    #[prost(uint32, tag = "3")]
    pub version: u32,
    /// Player the message was produced for.
    #[prost(string, tag = "6")]
    pub user_id: String,
}

/// Request for the periodicals bundle (current contracts, events, sales).
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetPeriodicalsRequest {
    /// Player identifier.
    #[prost(string, tag = "1")]
    pub user_id: String,
    /// Client protocol version.
    #[prost(uint32, tag = "10")]
    pub current_client_version: u32,
    /// Optional request metadata.
    #[prost(message, optional, tag = "14")]
    pub rinfo: Option<BasicRequestInfo>,
}

/// Periodicals bundle. Only the contracts section is modelled.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PeriodicalsResponse {
    /// Currently offered contracts.
    #[prost(message, optional, tag = "3")]
    pub contracts: Option<ContractsResponse>,
}

/// The list of currently offered contracts.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ContractsResponse {
    /// Contract definitions.
    #[prost(message, repeated, tag = "1")]
    pub contracts: Vec<Contract>,
    /// Server clock at the time of the response.
    #[prost(double, tag = "2")]
    pub server_time: f64,
    /// Non-fatal notice from the server; empty when there is nothing to report.
    #[prost(string, tag = "4")]
    pub warning_message: String,
}

/// A single goal threshold of a contract.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Goal {
    /// Amount that must be delivered to reach this goal.
    #[prost(double, tag = "2")]
    pub target_amount: f64,
    /// Size of the reward granted for reaching the goal.
    #[prost(double, tag = "5")]
    pub reward_amount: f64,
}

/// League-indexed goal list (`Contract::goal_sets[league]`).
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GoalSet {
    /// Goals of this league, in display order.
    #[prost(message, repeated, tag = "1")]
    pub goals: Vec<Goal>,
}

/// Grade-keyed goal list.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GradeSpec {
    /// Grade this spec applies to.
    #[prost(enumeration = "PlayerGrade", tag = "1")]
    pub grade: i32,
    /// Goals of this grade, in display order.
    #[prost(message, repeated, tag = "2")]
    pub goals: Vec<Goal>,
}

/// Static definition of a contract.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Contract {
    /// Stable identifier, used in every coop request.
    #[prost(string, tag = "1")]
    pub identifier: String,
    /// Legacy single goal list.
    #[prost(message, repeated, tag = "3")]
    pub goals: Vec<Goal>,
    /// Whether the contract can be played cooperatively.
    #[prost(bool, tag = "4")]
    pub coop_allowed: bool,
    /// Maximum number of players in one coop.
    #[prost(uint32, tag = "5")]
    pub max_coop_size: u32,
    /// Server time after which the contract is no longer offered.
    #[prost(double, tag = "6")]
    pub expiration_time: f64,
    /// Duration of a coop once started.
    #[prost(double, tag = "7")]
    pub length_seconds: f64,
    /// Display name.
    #[prost(string, tag = "9")]
    pub name: String,
    /// Display description.
    #[prost(string, tag = "10")]
    pub description: String,
    /// League-indexed goal lists (second protocol generation).
    #[prost(message, repeated, tag = "16")]
    pub goal_sets: Vec<GoalSet>,
    /// Grade-keyed goal lists (first protocol generation).
    #[prost(message, repeated, tag = "20")]
    pub grade_specs: Vec<GradeSpec>,
}

impl Contract {
    /// Resolves the goal list of the variant named by `selector`.
    ///
    /// Grades resolve to the first matching `grade_specs` entry, leagues index
    /// into `goal_sets`. Returns `None` when the contract has no such variant.
    pub fn goal_variant(&self, selector: &VariantSelector) -> Option<&[Goal]> {
        match selector {
            VariantSelector::ByGrade(grade) => self
                .grade_specs
                .iter()
                .find(|spec| spec.grade == *grade as i32)
                .map(|spec| spec.goals.as_slice()),
            VariantSelector::ByLeague(league) => usize::try_from(*league)
                .ok()
                .and_then(|idx| self.goal_sets.get(idx))
                .map(|set| set.goals.as_slice()),
        }
    }

    /// False for the tutorial contract and for contracts without a coop roster.
    pub fn is_coop_contract(&self) -> bool {
        self.identifier != TUTORIAL_CONTRACT_ID && self.max_coop_size != 0
    }
}

/// Request for the live status of one coop.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ContractCoopStatusRequest {
    /// Contract the coop belongs to.
    #[prost(string, tag = "1")]
    pub contract_identifier: String,
    /// Coop code.
    #[prost(string, tag = "2")]
    pub coop_identifier: String,
    /// Player making the request.
    #[prost(string, tag = "3")]
    pub user_id: String,
    /// Client protocol version.
    #[prost(uint32, tag = "4")]
    pub client_version: u32,
    /// Request metadata (first protocol generation only).
    #[prost(message, optional, tag = "5")]
    pub rinfo: Option<BasicRequestInfo>,
}

/// Production capacity reported by a contributor's farm.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FarmProductionParams {
    /// Current population.
    #[prost(double, tag = "1")]
    pub farm_population: f64,
    /// Population cap.
    #[prost(double, tag = "2")]
    pub farm_capacity: f64,
    /// Effective laying rate.
    #[prost(double, tag = "3")]
    pub elr: f64,
    /// Internal hatchery rate.
    #[prost(double, tag = "4")]
    pub ihr: f64,
    /// Shipping rate cap.
    #[prost(double, tag = "5")]
    pub sr: f64,
    /// Amount delivered so far.
    #[prost(double, tag = "6")]
    pub delivered: f64,
}

/// One participant's reported state within a coop snapshot.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ContributionInfo {
    /// Player identifier.
    #[prost(string, tag = "1")]
    pub user_id: String,
    /// Display name.
    #[prost(string, tag = "2")]
    pub user_name: String,
    /// Amount contributed so far.
    #[prost(double, tag = "3")]
    pub contribution_amount: f64,
    /// Whether the player has reported recently.
    #[prost(bool, tag = "4")]
    pub active: bool,
    /// Instantaneous reported contribution rate.
    #[prost(double, tag = "6")]
    pub contribution_rate: f64,
    /// Farm capacity backing the reported rate.
    #[prost(message, optional, tag = "15")]
    pub production_params: Option<FarmProductionParams>,
}

impl ContributionInfo {
    /// Shipping rate cap, `0.0` when the contributor reported no production params.
    pub fn shipping_rate_cap(&self) -> f64 {
        self.production_params.as_ref().map_or(0.0, |p| p.sr)
    }
}

/// Point-in-time snapshot of a coop.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ContractCoopStatusResponse {
    /// Contract the coop belongs to.
    #[prost(string, tag = "1")]
    pub contract_identifier: String,
    /// Amount accumulated by the whole coop.
    #[prost(double, tag = "2")]
    pub total_amount: f64,
    /// Coop code.
    #[prost(string, tag = "3")]
    pub coop_identifier: String,
    /// Contributors in roster order.
    #[prost(message, repeated, tag = "4")]
    pub contributors: Vec<ContributionInfo>,
    /// Seconds until the deadline; negative after expiry.
    #[prost(double, tag = "5")]
    pub seconds_remaining: f64,
    /// Player who created the coop.
    #[prost(string, tag = "9")]
    pub creator_id: String,
    /// Whether the coop is listed publicly.
    #[prost(bool, tag = "10")]
    pub public: bool,
}

/// Request asking whether a coop exists and can be joined.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryCoopRequest {
    /// Contract the coop belongs to.
    #[prost(string, tag = "1")]
    pub contract_identifier: String,
    /// Coop code.
    #[prost(string, tag = "2")]
    pub coop_identifier: String,
    /// Client protocol version.
    #[prost(uint32, tag = "3")]
    pub client_version: u32,
    /// League of the asking player; `0` is the elite league.
    #[prost(uint32, tag = "4")]
    pub league: u32,
    /// Request metadata (first protocol generation only).
    #[prost(message, optional, tag = "5")]
    pub rinfo: Option<BasicRequestInfo>,
    /// Grade of the asking player.
    #[prost(enumeration = "PlayerGrade", tag = "6")]
    pub grade: i32,
}

/// Joinability of a coop.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryCoopResponse {
    /// The coop exists.
    #[prost(bool, tag = "1")]
    pub exists: bool,
    /// The roster is full.
    #[prost(bool, tag = "2")]
    pub full: bool,
    /// The asking player is banned from the coop.
    #[prost(bool, tag = "3")]
    pub banned: bool,
    /// The coop plays in a different league than the asking player.
    #[prost(bool, tag = "4")]
    pub different_league: bool,
    /// The coop has expired.
    #[prost(bool, tag = "5")]
    pub expired: bool,
    /// The coop plays in a different grade than the asking player.
    #[prost(bool, tag = "6")]
    pub different_grade: bool,
}

/// Request for a player's account backup.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EggIncFirstContactRequest {
    /// Legacy player identifier.
    #[prost(string, tag = "1")]
    pub user_id: String,
    /// Client protocol version.
    #[prost(uint32, tag = "2")]
    pub client_version: u32,
    /// Player whose backup is requested.
    #[prost(string, tag = "4")]
    pub ei_user_id: String,
    /// Request metadata (first protocol generation only).
    #[prost(message, optional, tag = "8")]
    pub rinfo: Option<BasicRequestInfo>,
}

/// A player's account backup plus error reporting.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EggIncFirstContactResponse {
    /// The backup, absent when the player does not exist.
    #[prost(message, optional, tag = "1")]
    pub backup: Option<Backup>,
    /// Player identifier echoed back.
    #[prost(string, tag = "2")]
    pub ei_user_id: String,
    /// Non-zero when the server rejected the request.
    #[prost(uint32, tag = "3")]
    pub error_code: u32,
    /// Human readable rejection reason.
    #[prost(string, tag = "4")]
    pub error_message: String,
}

/// Account backup. Only the contract state is modelled.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Backup {
    /// Legacy player identifier.
    #[prost(string, tag = "1")]
    pub user_id: String,
    /// Display name.
    #[prost(string, tag = "2")]
    pub user_name: String,
    /// Contract progress of the player.
    #[prost(message, optional, tag = "13")]
    pub contracts: Option<MyContracts>,
    /// Player identifier.
    #[prost(string, tag = "18")]
    pub ei_user_id: String,
}

/// A player's active and archived contracts.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MyContracts {
    /// Identifiers of every contract the player has seen.
    #[prost(string, repeated, tag = "1")]
    pub contract_ids_seen: Vec<String>,
    /// Active contracts.
    #[prost(message, repeated, tag = "2")]
    pub contracts: Vec<LocalContract>,
    /// Finished contracts.
    #[prost(message, repeated, tag = "4")]
    pub archive: Vec<LocalContract>,
}

/// A contract as tracked on a player's account.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LocalContract {
    /// Definition of the contract.
    #[prost(message, optional, tag = "1")]
    pub contract: Option<Contract>,
    /// Coop the player joined, empty for solo play.
    #[prost(string, tag = "2")]
    pub coop_identifier: String,
    /// Whether the player accepted the contract.
    #[prost(bool, tag = "7")]
    pub accepted: bool,
    /// League the player was placed in.
    #[prost(uint32, tag = "15")]
    pub league: u32,
    /// Grade the player was placed in.
    #[prost(enumeration = "PlayerGrade", tag = "20")]
    pub grade: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal(target: f64) -> Goal {
        Goal {
            target_amount: target,
            reward_amount: 0.0,
        }
    }

    fn graded_contract() -> Contract {
        Contract {
            identifier: "spring-cleaning".into(),
            max_coop_size: 4,
            grade_specs: vec![
                GradeSpec {
                    grade: PlayerGrade::GradeA as i32,
                    goals: vec![goal(1_000.0), goal(5_000.0)],
                },
                GradeSpec {
                    grade: PlayerGrade::GradeAaa as i32,
                    goals: vec![goal(9_000.0)],
                },
            ],
            goal_sets: vec![
                GoalSet {
                    goals: vec![goal(50.0)],
                },
                GoalSet {
                    goals: vec![goal(20.0)],
                },
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_goal_variant_by_grade() {
        let contract = graded_contract();
        let goals = contract
            .goal_variant(&VariantSelector::ByGrade(PlayerGrade::GradeAaa))
            .unwrap();
        assert_eq!(goals, &[goal(9_000.0)]);
        assert!(contract
            .goal_variant(&VariantSelector::ByGrade(PlayerGrade::GradeC))
            .is_none());
    }

    #[test]
    fn test_goal_variant_by_league() {
        let contract = graded_contract();
        let standard = contract
            .goal_variant(&VariantSelector::ByLeague(1))
            .unwrap();
        assert_eq!(standard, &[goal(20.0)]);
        assert!(contract
            .goal_variant(&VariantSelector::ByLeague(2))
            .is_none());
    }

    #[test]
    fn test_coop_contract_filter() {
        let mut contract = graded_contract();
        assert!(contract.is_coop_contract());

        contract.max_coop_size = 0;
        assert!(!contract.is_coop_contract());

        contract.max_coop_size = 2;
        contract.identifier = TUTORIAL_CONTRACT_ID.into();
        assert!(!contract.is_coop_contract());
    }

    #[test]
    fn test_unknown_grade_value_is_rejected() {
        assert_eq!(PlayerGrade::from_wire(3), Some(PlayerGrade::GradeA));
        assert_eq!(PlayerGrade::from_wire(42), None);
    }

    #[test]
    fn test_missing_production_params_caps_at_zero() {
        let contributor = ContributionInfo {
            contribution_rate: 12.0,
            ..Default::default()
        };
        assert_eq!(contributor.shipping_rate_cap(), 0.0);
    }
}
