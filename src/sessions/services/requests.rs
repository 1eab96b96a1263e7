use crate::scoring::ScoringPolicyKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionRequestBody {
    /// Falls back to the server-wide policy when missing.
    #[serde(default)]
    pub scoring: Option<ScoringPolicyKind>,
}
