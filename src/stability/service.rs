use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::app::{envy::Envy, util};

use super::{
    config::{text_to_image_path, BALANCE_PATH},
    errors::StabilityError,
    models::input_spec::InputSpec,
    structs::{
        stability_balance_response::StabilityBalanceResponse,
        stability_error_response::StabilityErrorResponse,
        stability_generate_images_response::StabilityGenerateImagesResponse,
    },
};

/// Client for the Stability AI REST API. Holds the API key; nothing else in
/// the process needs to see it.
pub struct StabilityClient {
    client: Client,
    api_key: String,
    api_url: String,
    engine: String,
}

impl StabilityClient {
    pub fn from_envy(envy: &Envy) -> Result<Self, StabilityError> {
        let client = util::reqwest::build_client(envy.request_timeout())
            .map_err(StabilityError::Client)?;

        Ok(Self {
            client,
            api_key: envy.stability_api_key.to_string(),
            api_url: envy.stability_api_url().to_string(),
            engine: envy.stability_engine().to_string(),
        })
    }

    pub fn engine(&self) -> &str {
        &self.engine
    }

    pub async fn text_to_image(
        &self,
        input_spec: &InputSpec,
    ) -> Result<StabilityGenerateImagesResponse, StabilityError> {
        let url = format!("{}{}", self.api_url, text_to_image_path(&self.engine));

        let res = self
            .client
            .post(url)
            .bearer_auth(&self.api_key)
            .json(input_spec)
            .send()
            .await?;

        parse_response(res).await
    }

    pub async fn get_balance(&self) -> Result<StabilityBalanceResponse, StabilityError> {
        let url = format!("{}{}", self.api_url, BALANCE_PATH);

        let res = self
            .client
            .get(url)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        parse_response(res).await
    }
}

async fn parse_response<T: DeserializeOwned>(res: Response) -> Result<T, StabilityError> {
    let status = res.status();
    let text = res.text().await?;

    if !status.is_success() {
        let message = match serde_json::from_str::<StabilityErrorResponse>(&text) {
            Ok(error_response) => error_response.into_message(),
            Err(_) => None,
        };

        return Err(StabilityError::Status { status, message });
    }

    match serde_json::from_str(&text) {
        Ok(value) => Ok(value),
        Err(e) => Err(StabilityError::Malformed(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stability::models::input_spec::TextPrompt;
    use crate::test_support::test_envy;
    use reqwest::StatusCode;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const GENERATE_PATH: &str = "/v1/generation/stable-diffusion-v1-5/text-to-image";

    fn make_client(server: &MockServer) -> StabilityClient {
        StabilityClient::from_envy(&test_envy(&server.uri())).unwrap()
    }

    fn input_spec(prompt: &str) -> InputSpec {
        InputSpec {
            text_prompts: vec![TextPrompt {
                text: prompt.to_string(),
                weight: Some(1.0),
            }],
            cfg_scale: 7.0,
            height: 512,
            width: 512,
            steps: 30,
            samples: 1,
        }
    }

    #[tokio::test]
    async fn test_text_to_image_sends_request_and_parses_artifacts() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .and(header("Authorization", "Bearer sk-test"))
            .and(header("Accept", "application/json"))
            .and(body_json(json!({
                "text_prompts": [{ "text": "a lighthouse at dusk", "weight": 1.0 }],
                "cfg_scale": 7.0,
                "height": 512,
                "width": 512,
                "steps": 30,
                "samples": 1
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "artifacts": [{ "base64": "AAA=", "seed": 42, "finishReason": "SUCCESS" }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = make_client(&server);
        let response = client
            .text_to_image(&input_spec("a lighthouse at dusk"))
            .await
            .unwrap();

        assert_eq!(response.first_image(), Some("AAA="));
        assert_eq!(response.artifacts[0].seed, Some(42));
    }

    #[tokio::test]
    async fn test_text_to_image_error_status_carries_message() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "id": "abc",
                "name": "unauthorized",
                "message": "Incorrect API key provided"
            })))
            .mount(&server)
            .await;

        let err = make_client(&server)
            .text_to_image(&input_spec("x"))
            .await
            .unwrap_err();

        match err {
            StabilityError::Status { status, message } => {
                assert_eq!(status, StatusCode::UNAUTHORIZED);
                assert_eq!(message.as_deref(), Some("Incorrect API key provided"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_text_to_image_error_status_without_json() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
            .mount(&server)
            .await;

        let err = make_client(&server)
            .text_to_image(&input_spec("x"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            StabilityError::Status { status, message: None } if status == StatusCode::SERVICE_UNAVAILABLE
        ));
    }

    #[tokio::test]
    async fn test_text_to_image_malformed_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&server)
            .await;

        let err = make_client(&server)
            .text_to_image(&input_spec("x"))
            .await
            .unwrap_err();

        assert!(matches!(err, StabilityError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_get_balance() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/user/balance"))
            .and(header("Authorization", "Bearer sk-test"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "credits": 12.5 })))
            .mount(&server)
            .await;

        let balance = make_client(&server).get_balance().await.unwrap();
        assert_eq!(balance.credits, 12.5);
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        let err = StabilityClient::from_envy(&test_envy("http://127.0.0.1:1"))
            .unwrap()
            .get_balance()
            .await
            .unwrap_err();

        assert!(matches!(err, StabilityError::Transport(_)));
    }
}
