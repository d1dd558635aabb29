// ============================================================================
// Engine Module
// Stateful collaborators around the pure amount core
// ============================================================================

pub mod amount_field;
pub mod factory;
pub mod swap_form;

pub use amount_field::{AmountField, EditOutcome};
pub use factory::{create_swap_form, SwapFormBuilder};
pub use swap_form::SwapForm;
