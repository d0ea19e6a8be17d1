use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct StabilityBalanceResponse {
    pub credits: f64,
}
