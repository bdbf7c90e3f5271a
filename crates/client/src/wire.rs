// Path: crates/client/src/wire.rs

use crate::codec;
use crate::transport::Transport;
use eicoop_types::schema::{
    BasicRequestInfo, Contract, ContractCoopStatusRequest, ContractCoopStatusResponse,
    EggIncFirstContactRequest, EggIncFirstContactResponse, GetPeriodicalsRequest, PeriodicalsResponse,
    PlayerGrade, QueryCoopRequest, QueryCoopResponse,
};
use eicoop_types::{ClientConfig, Endpoint, ProtocolGeneration, VariantSelector, WireError};
use prost::Message;
use std::sync::Arc;
use std::time::Instant;

/// Form field carrying the encoded request record.
pub const DATA_FIELD: &str = "data";

/// Typed client for the backend's binary-over-HTTP endpoints.
///
/// Holds only its immutable configuration and a shared transport; every call
/// is independent and nothing is cached between calls.
#[derive(Clone)]
pub struct WireClient {
    transport: Arc<dyn Transport>,
    config: ClientConfig,
}

impl std::fmt::Debug for WireClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WireClient")
            .field("base_url", &self.config.base_url)
            .field("client_version", &self.config.client_version)
            .field("protocol", &self.config.protocol)
            .finish_non_exhaustive()
    }
}

impl WireClient {
    pub fn new(transport: Arc<dyn Transport>, config: ClientConfig) -> Self {
        Self { transport, config }
    }

    pub fn user_id(&self) -> &str {
        &self.config.user_id
    }

    pub fn client_version(&self) -> u32 {
        self.config.client_version
    }

    pub fn protocol(&self) -> ProtocolGeneration {
        self.config.protocol
    }

    /// Resolves the URL of `endpoint`: `{}` in the base URL is replaced by the
    /// endpoint name, otherwise the name is appended as a path segment.
    pub fn endpoint_url(&self, endpoint: Endpoint) -> String {
        let base = &self.config.base_url;
        if base.contains("{}") {
            base.replacen("{}", endpoint.path(), 1)
        } else {
            format!("{}/{}", base.trim_end_matches('/'), endpoint.path())
        }
    }

    /// Serializes `request`, posts it as the `data` form field and returns the
    /// raw response body.
    pub async fn send<M: Message>(&self, endpoint: Endpoint, request: &M) -> Result<Vec<u8>, WireError> {
        let url = self.endpoint_url(endpoint);
        let data = codec::encode_record(request);
        let started = Instant::now();
        let body = self.transport.post_form(&url, DATA_FIELD, &data).await?;
        tracing::debug!(
            target: "wire",
            endpoint = endpoint.path(),
            request_len = data.len(),
            response_len = body.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "backend call complete"
        );
        Ok(body)
    }

    /// `send` followed by the endpoint's response framing.
    async fn call<Req, Resp>(&self, endpoint: Endpoint, request: &Req) -> Result<Resp, WireError>
    where
        Req: Message,
        Resp: Message + Default,
    {
        let body = self.send(endpoint, request).await?;
        codec::unframe(&body, self.config.protocol.framing(endpoint))
    }

    fn request_info(&self, ei_user_id: &str) -> Option<BasicRequestInfo> {
        self.config
            .protocol
            .attaches_request_info()
            .then(|| BasicRequestInfo {
                ei_user_id: ei_user_id.to_string(),
                ..Default::default()
            })
    }

    /// Fetches the periodicals bundle. A non-empty contracts warning is logged
    /// and does not fail the call.
    pub async fn fetch_periodicals(&self) -> Result<PeriodicalsResponse, WireError> {
        let request = GetPeriodicalsRequest {
            user_id: self.config.user_id.clone(),
            current_client_version: self.config.client_version,
            rinfo: None,
        };
        let periodicals: PeriodicalsResponse = self.call(Endpoint::Periodicals, &request).await?;

        if let Some(contracts) = &periodicals.contracts {
            if !contracts.warning_message.is_empty() {
                tracing::warn!(
                    target: "wire",
                    warning = %contracts.warning_message,
                    "Contracts contained a warning message"
                );
            }
        }
        Ok(periodicals)
    }

    /// The contracts currently offered by the backend.
    pub async fn list_current_contracts(&self) -> Result<Vec<Contract>, WireError> {
        let periodicals = self.fetch_periodicals().await?;
        Ok(periodicals.contracts.map(|c| c.contracts).unwrap_or_default())
    }

    /// Fetches a point-in-time snapshot of one coop.
    pub async fn fetch_coop_status(
        &self,
        contract_id: &str,
        coop_code: &str,
    ) -> Result<ContractCoopStatusResponse, WireError> {
        let request = ContractCoopStatusRequest {
            rinfo: self.request_info(&self.config.user_id),
            contract_identifier: contract_id.to_string(),
            coop_identifier: coop_code.to_string(),
            user_id: self.config.user_id.clone(),
            ..Default::default()
        };
        self.call(Endpoint::CoopStatus, &request).await
    }

    /// Asks whether a coop exists and whether a player of `selector` may join it.
    pub async fn query_coop(
        &self,
        contract_id: &str,
        coop_code: &str,
        selector: VariantSelector,
    ) -> Result<QueryCoopResponse, WireError> {
        let (league, grade) = selector.query_fields();
        let request = QueryCoopRequest {
            rinfo: self.request_info(&self.config.user_id),
            contract_identifier: contract_id.to_string(),
            coop_identifier: coop_code.to_string(),
            league,
            grade: grade as i32,
            client_version: self.config.client_version,
        };
        self.call(Endpoint::QueryCoop, &request).await
    }

    /// Fetches the account backup of `user_id`, or of the client's own player.
    pub async fn fetch_first_contact(
        &self,
        user_id: Option<&str>,
    ) -> Result<EggIncFirstContactResponse, WireError> {
        let user_id = user_id.unwrap_or(&self.config.user_id);
        let request = EggIncFirstContactRequest {
            rinfo: self.request_info(user_id),
            ei_user_id: user_id.to_string(),
            ..Default::default()
        };
        let response: EggIncFirstContactResponse =
            self.call(Endpoint::FirstContact, &request).await?;

        if response.error_code != 0 {
            tracing::warn!(
                target: "wire",
                error_code = response.error_code,
                error_message = %response.error_message,
                "first contact for {} reported an error",
                user_id
            );
        }
        Ok(response)
    }

    /// Grade of a coop, inferred from its creator's own first active contract.
    ///
    /// This is a proxy: the creator and the coop are assumed to share a grade,
    /// which the backend does not guarantee.
    pub async fn coop_grade(&self, contract_id: &str, coop_code: &str) -> Result<PlayerGrade, WireError> {
        let status = self.fetch_coop_status(contract_id, coop_code).await?;
        if status.creator_id.is_empty() {
            return Err(WireError::Parse(format!(
                "coop status for {}/{} carries no creator_id",
                contract_id, coop_code
            )));
        }

        let creator = self.fetch_first_contact(Some(&status.creator_id)).await?;
        let local = creator
            .backup
            .as_ref()
            .and_then(|backup| backup.contracts.as_ref())
            .and_then(|contracts| contracts.contracts.first())
            .ok_or_else(|| {
                WireError::Parse("first contact is missing backup.contracts.contracts".to_string())
            })?;

        PlayerGrade::from_wire(local.grade)
            .ok_or_else(|| WireError::Parse(format!("unknown player grade {}", local.grade)))
    }
}
