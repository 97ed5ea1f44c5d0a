//! Calculators previewing figures of forms before they're submitted.

pub mod financing;
pub mod insurance;

pub use self::{financing::Financing, insurance::Premium};
