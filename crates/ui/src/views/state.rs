#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    NoSelection,
    Rejected,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::NoSelection => "Pick an answer first.",
            ViewError::Rejected => "That action is not available right now.",
        }
    }
}
