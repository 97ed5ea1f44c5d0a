//! [`Query`] definition.

pub mod financing_preview;
pub mod insurance_cost;

/// [`Query`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Query;

pub use self::{
    financing_preview::FinancingPreview, insurance_cost::InsuranceCost,
};
