use std::borrow::Cow;

use thiserror::Error;

/// A type alias for handling errors related to navigation and layouts.
pub type NavResult<T> = std::result::Result<T, NavError>;

/// An error that can occur while building a layout or navigating it.
#[derive(Debug, Error)]
pub enum NavError {
    /// An argument was outside of what an operation accepts, such as an unknown
    /// direction or a node that does not exist in the tree.
    #[error("Invalid argument: {0}")]
    InvalidArgument(Cow<'static, str>),
    /// The layout could not be built from its description.
    #[error("Layout error: {0}")]
    Layout(Cow<'static, str>),
}

impl NavError {
    /// Create a new [`NavError::InvalidArgument`].
    pub fn invalid_argument<R: Into<Cow<'static, str>>>(reason: R) -> Self {
        Self::InvalidArgument(reason.into())
    }

    /// Create a new [`NavError::Layout`].
    pub fn layout<R: Into<Cow<'static, str>>>(reason: R) -> Self {
        Self::Layout(reason.into())
    }

    /// Returns whether this is an [`NavError::InvalidArgument`].
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, NavError::InvalidArgument(_))
    }
}
