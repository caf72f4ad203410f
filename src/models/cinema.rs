use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cinema {
    pub id: i64,
    pub name: String,
    pub area: String,
    pub address: String,
}
