use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SubscribeUpdatesRequest {
    pub email: String,
    pub name: String,
}
