use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct StabilityGenerateImagesResponse {
    #[serde(default)]
    pub artifacts: Vec<StabilityArtifact>,
}

#[derive(Debug, Deserialize)]
pub struct StabilityArtifact {
    pub base64: Option<String>,
    pub seed: Option<u64>,
    #[serde(rename(deserialize = "finishReason"))]
    pub finish_reason: Option<String>,
}

impl StabilityGenerateImagesResponse {
    /// Base64 payload of the first artifact, if it carries one.
    pub fn first_image(&self) -> Option<&str> {
        self.artifacts
            .first()
            .and_then(|artifact| artifact.base64.as_deref())
            .filter(|base64| !base64.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_image_takes_first_artifact() {
        let response: StabilityGenerateImagesResponse = serde_json::from_str(
            r#"{"artifacts":[{"base64":"AAA=","seed":1,"finishReason":"SUCCESS"},{"base64":"BBB="}]}"#,
        )
        .unwrap();

        assert_eq!(response.first_image(), Some("AAA="));
        assert_eq!(response.artifacts[0].finish_reason.as_deref(), Some("SUCCESS"));
    }

    #[test]
    fn test_first_image_missing() {
        let empty: StabilityGenerateImagesResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.first_image(), None);

        let blank: StabilityGenerateImagesResponse =
            serde_json::from_str(r#"{"artifacts":[{"base64":""}]}"#).unwrap();
        assert_eq!(blank.first_image(), None);
    }
}
