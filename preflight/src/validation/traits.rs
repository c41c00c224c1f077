//! Core validation traits and interfaces

/// Core validation trait that all validators implement
///
/// A validator either hands back a usable value derived from the target or
/// fails with a single error.
pub trait Validator<Target: ?Sized> {
    type Output;
    type Error;

    fn validate(&self, target: &Target) -> Result<Self::Output, Self::Error>;
}
