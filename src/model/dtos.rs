use crate::presenter::encode_uri_component;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The two membership changes the backend accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mutation {
    Signup,
    Unregister,
}

impl Mutation {
    /// Trailing path segment of the endpoint.
    pub fn endpoint(self) -> &'static str {
        match self {
            Mutation::Signup => "signup",
            Mutation::Unregister => "unregister",
        }
    }

    /// Notice shown when the request never produced a usable reply.
    pub fn transport_failure_text(self) -> &'static str {
        match self {
            Mutation::Signup => "Failed to sign up. Please try again.",
            Mutation::Unregister => "Failed to remove participant. Please try again.",
        }
    }
}

/// Common parameters for signup and unregister requests
#[derive(Debug, Clone)]
pub struct MembershipParams<'a> {
    pub activity: &'a str,
    pub email: &'a str,
}

impl MembershipParams<'_> {
    /// `/activities/{activity}/{endpoint}?email={email}`, both values percent-encoded.
    pub fn path(&self, mutation: Mutation) -> String {
        format!(
            "/activities/{}/{}?email={}",
            encode_uri_component(self.activity),
            mutation.endpoint(),
            encode_uri_component(self.email)
        )
    }
}

/// Body of a signup/unregister reply. Success carries `message`, failure `detail`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct MutationReply {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

impl MutationReply {
    /// Lenient extraction: non-string or missing fields read as absent.
    pub fn from_value(body: &Value) -> Self {
        Self {
            message: body["message"].as_str().map(str::to_string),
            detail: body["detail"].as_str().map(str::to_string),
        }
    }
}

/// A reply whose body parsed as JSON, with the HTTP outcome attached.
#[derive(Debug, Clone, PartialEq)]
pub struct MutationOutcome {
    pub success: bool,
    pub reply: MutationReply,
}
