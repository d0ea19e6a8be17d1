#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiStatus {
    #[default]
    Unknown,
    Connected,
    Error,
}

impl ApiStatus {
    pub fn value(&self) -> &'static str {
        match *self {
            Self::Unknown => "unknown",
            Self::Connected => "connected",
            Self::Error => "error",
        }
    }
}
