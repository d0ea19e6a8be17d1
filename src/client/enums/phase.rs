/// Where a session is in the submission cycle. Exactly one holds at a time;
/// `Success` and `Failed` are resting states that accept the next submit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Success {
        image_url: String,
    },
    Failed {
        error: String,
    },
}
