pub mod closed_form_strategy;
pub mod refinement_strategy;
pub mod traits;
