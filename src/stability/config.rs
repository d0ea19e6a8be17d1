pub static BALANCE_PATH: &str = "/v1/user/balance";

pub const DEFAULT_CFG_SCALE: f64 = 7.0;
pub const DEFAULT_WIDTH: u32 = 512;
pub const DEFAULT_HEIGHT: u32 = 512;
pub const DEFAULT_STEPS: u32 = 30;
pub const DEFAULT_SAMPLES: u32 = 1;
pub const DEFAULT_PROMPT_WEIGHT: f64 = 1.0;

pub fn text_to_image_path(engine: &str) -> String {
    format!("/v1/generation/{}/text-to-image", engine)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_to_image_path() {
        assert_eq!(
            text_to_image_path("stable-diffusion-v1-5"),
            "/v1/generation/stable-diffusion-v1-5/text-to-image"
        );
    }
}
