#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlideUpMenuError {
    /// A required content reference was absent or could not be inflated.
    MissingContent { attribute: &'static str },
    InvalidDimension { attribute: &'static str, value: String },
    InvalidColor { attribute: &'static str, value: String },
}

impl std::fmt::Display for SlideUpMenuError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SlideUpMenuError::MissingContent { attribute } => write!(
                f,
                "missing '{attribute}': both 'headerView' and 'bodyView' must reference a layout"
            ),
            SlideUpMenuError::InvalidDimension { attribute, value } => {
                write!(f, "attribute '{attribute}' is not a dimension: {value:?}")
            }
            SlideUpMenuError::InvalidColor { attribute, value } => {
                write!(f, "attribute '{attribute}' is not a color: {value:?}")
            }
        }
    }
}

impl std::error::Error for SlideUpMenuError {}
