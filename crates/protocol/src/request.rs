//! Requests sent from the wallet to the notification service.

use crate::error::{ProtocolError, Result};
use serde::{Deserialize, Serialize};

/// Tag identifying a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Subscribe,
}

/// Who a subscription is for.
///
/// A wallet either names its account, or identifies itself with an opaque
/// session id the service handed out earlier. Never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subscriber {
    /// An account address.
    Account(String),
    /// An anonymous session id.
    Session(String),
}

/// Subscribe to updates for one account. Sent first on every (re)connect when
/// a wallet exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "WireSubscribeRequest", try_from = "WireSubscribeRequest")]
pub struct SubscribeRequest {
    subscriber: Subscriber,
    currency: String,
    fcm_token: Option<String>,
}

impl SubscribeRequest {
    pub fn new(
        subscriber: Subscriber,
        currency: impl Into<String>,
        fcm_token: Option<String>,
    ) -> Self {
        Self {
            subscriber,
            currency: currency.into(),
            fcm_token,
        }
    }

    /// Subscribe by account address.
    pub fn for_account(account: impl Into<String>, currency: impl Into<String>) -> Self {
        Self::new(Subscriber::Account(account.into()), currency, None)
    }

    /// Subscribe by session id.
    pub fn for_session(uuid: impl Into<String>, currency: impl Into<String>) -> Self {
        Self::new(Subscriber::Session(uuid.into()), currency, None)
    }

    /// Build from optional parts. A uuid, when present, wins and the account
    /// is dropped; with neither there is nothing to subscribe to.
    pub fn from_parts(
        account: Option<String>,
        currency: impl Into<String>,
        uuid: Option<String>,
        fcm_token: Option<String>,
    ) -> Result<Self> {
        let subscriber = match (uuid, account) {
            (Some(uuid), _) => Subscriber::Session(uuid),
            (None, Some(account)) => Subscriber::Account(account),
            (None, None) => return Err(ProtocolError::MissingSubscriber),
        };
        Ok(Self::new(subscriber, currency, fcm_token))
    }

    pub fn with_fcm_token(mut self, token: impl Into<String>) -> Self {
        self.fcm_token = Some(token.into());
        self
    }

    pub fn action(&self) -> Action {
        Action::Subscribe
    }

    pub fn subscriber(&self) -> &Subscriber {
        &self.subscriber
    }

    pub fn account(&self) -> Option<&str> {
        match &self.subscriber {
            Subscriber::Account(account) => Some(account),
            Subscriber::Session(_) => None,
        }
    }

    pub fn uuid(&self) -> Option<&str> {
        match &self.subscriber {
            Subscriber::Session(uuid) => Some(uuid),
            Subscriber::Account(_) => None,
        }
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn fcm_token(&self) -> Option<&str> {
        self.fcm_token.as_deref()
    }

    /// Switch to subscribing by account; any session id is cleared.
    pub fn set_account(&mut self, account: impl Into<String>) {
        self.subscriber = Subscriber::Account(account.into());
    }

    /// Switch to subscribing by session id; any account is cleared.
    pub fn set_uuid(&mut self, uuid: impl Into<String>) {
        self.subscriber = Subscriber::Session(uuid.into());
    }

    pub fn set_currency(&mut self, currency: impl Into<String>) {
        self.currency = currency.into();
    }

    pub fn set_fcm_token(&mut self, token: Option<String>) {
        self.fcm_token = token;
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// The request as it appears on the wire. Absent fields are omitted.
#[derive(Serialize, Deserialize)]
struct WireSubscribeRequest {
    action: Action,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    account: Option<String>,
    currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fcm_token: Option<String>,
}

impl From<SubscribeRequest> for WireSubscribeRequest {
    fn from(request: SubscribeRequest) -> Self {
        let (account, uuid) = match request.subscriber {
            Subscriber::Account(account) => (Some(account), None),
            Subscriber::Session(uuid) => (None, Some(uuid)),
        };
        Self {
            action: Action::Subscribe,
            account,
            currency: request.currency,
            uuid,
            fcm_token: request.fcm_token,
        }
    }
}

impl TryFrom<WireSubscribeRequest> for SubscribeRequest {
    type Error = ProtocolError;

    fn try_from(wire: WireSubscribeRequest) -> Result<Self> {
        if wire.account.is_some() && wire.uuid.is_some() {
            return Err(ProtocolError::AmbiguousSubscriber);
        }
        Self::from_parts(wire.account, wire.currency, wire.uuid, wire.fcm_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lattice_core::{AccountType, Seed};
    use serde_json::{json, Value};

    const ADDRESS: &str = "ban_3i1aq1cchnmbn9x5rsbap8b15akfh7wj7pwskuzi7ahz8oq6cobd99d4r3b7";
    const UUID: &str = "6f1d8a52-8f0e-4d2b-9a39-5d7f1b2c3e4a";

    fn wire(request: &SubscribeRequest) -> Value {
        serde_json::from_str(&request.to_json().unwrap()).unwrap()
    }

    #[test]
    fn test_account_request_wire_format() {
        let request = SubscribeRequest::for_account(ADDRESS, "USD").with_fcm_token("tok");
        assert_eq!(
            wire(&request),
            json!({
                "action": "subscribe",
                "account": ADDRESS,
                "currency": "USD",
                "fcm_token": "tok",
            })
        );
    }

    #[test]
    fn test_session_request_wire_format() {
        let request = SubscribeRequest::for_session(UUID, "EUR");
        assert_eq!(
            wire(&request),
            json!({
                "action": "subscribe",
                "currency": "EUR",
                "uuid": UUID,
            })
        );
    }

    #[test]
    fn test_uuid_clears_account() {
        let request = SubscribeRequest::from_parts(
            Some(ADDRESS.into()),
            "USD",
            Some(UUID.into()),
            None,
        )
        .unwrap();
        assert_eq!(request.uuid(), Some(UUID));
        assert_eq!(request.account(), None);
    }

    #[test]
    fn test_account_without_uuid() {
        let request =
            SubscribeRequest::from_parts(Some(ADDRESS.into()), "USD", None, None).unwrap();
        assert_eq!(request.account(), Some(ADDRESS));
        assert_eq!(request.uuid(), None);
    }

    #[test]
    fn test_missing_subscriber() {
        let err = SubscribeRequest::from_parts(None, "USD", None, None).unwrap_err();
        assert!(matches!(err, ProtocolError::MissingSubscriber));
    }

    #[test]
    fn test_setters_keep_exactly_one() {
        let mut request = SubscribeRequest::for_account(ADDRESS, "USD");
        request.set_uuid(UUID);
        assert_eq!(request.account(), None);
        assert_eq!(request.uuid(), Some(UUID));

        request.set_account(ADDRESS);
        assert_eq!(request.account(), Some(ADDRESS));
        assert_eq!(request.uuid(), None);
    }

    #[test]
    fn test_decode() {
        let request = SubscribeRequest::from_json(
            r#"{"action":"subscribe","account":null,"currency":"USD","uuid":"abc","fcm_token":null}"#,
        )
        .unwrap();
        assert_eq!(request.uuid(), Some("abc"));
        assert_eq!(request.fcm_token(), None);
        assert_eq!(request.action(), Action::Subscribe);
    }

    #[test]
    fn test_decode_rejects_both() {
        let err = SubscribeRequest::from_json(&format!(
            r#"{{"action":"subscribe","account":"{ADDRESS}","currency":"USD","uuid":"{UUID}"}}"#
        ))
        .unwrap_err();
        assert!(err.to_string().contains("both an account and a uuid"));
    }

    #[test]
    fn test_decode_rejects_unknown_action() {
        assert!(SubscribeRequest::from_json(
            r#"{"action":"unsubscribe","account":"x","currency":"USD"}"#
        )
        .is_err());
    }

    #[test]
    fn test_json_roundtrip() {
        let request = SubscribeRequest::for_session(UUID, "BRL").with_fcm_token("t");
        let decoded = SubscribeRequest::from_json(&request.to_json().unwrap()).unwrap();
        assert_eq!(decoded, request);
    }

    #[test]
    fn test_with_derived_address() {
        let seed = Seed::from_hex(&"0".repeat(64)).unwrap();
        let address = seed.keypair(0).address(AccountType::Banano);
        let request = SubscribeRequest::for_account(address, "USD");
        assert_eq!(request.account(), Some(ADDRESS));
    }
}
