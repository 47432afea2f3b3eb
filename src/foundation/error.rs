/// Convenience result type used across paretoviz.
pub type VizResult<T> = Result<T, VizError>;

/// Top-level error taxonomy used by the loading, rendering and animation APIs.
#[derive(thiserror::Error, Debug)]
pub enum VizError {
    /// Neither an inline dataset nor an input file was supplied.
    #[error("missing data: provide a dataset or an input file")]
    MissingData,

    /// The requested chart kind is not one of the recognized names.
    #[error("unsupported chart type: {0}")]
    UnsupportedChartType(String),

    /// Malformed or unusable input data.
    #[error("data error: {0}")]
    Data(String),

    /// Invalid user-provided configuration for the requested chart.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while building or rasterizing a chart scene.
    #[error("render error: {0}")]
    Render(String),

    /// Errors while assembling an animation from rendered frames.
    #[error("animation error: {0}")]
    Animation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VizError {
    /// Build a [`VizError::UnsupportedChartType`] value.
    pub fn unsupported_chart(name: impl Into<String>) -> Self {
        Self::UnsupportedChartType(name.into())
    }

    /// Build a [`VizError::Data`] value.
    pub fn data(msg: impl Into<String>) -> Self {
        Self::Data(msg.into())
    }

    /// Build a [`VizError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`VizError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`VizError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
