use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Doctor on the clinic roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Dr. Smith")]
    pub name: String,
    #[schema(example = "General Practice")]
    pub specialization: String,
}
