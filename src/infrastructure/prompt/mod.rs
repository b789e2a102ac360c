//! Confirmer Implementations

mod dialoguer;

pub use self::dialoguer::DialoguerConfirmer;
