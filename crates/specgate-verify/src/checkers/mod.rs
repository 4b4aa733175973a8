pub mod action_boundary;
pub mod completeness;
pub mod forbidden_data;
pub mod scope_boundedness;

pub use action_boundary::ActionBoundaryChecker;
pub use completeness::CompletenessChecker;
pub use forbidden_data::ForbiddenDataChecker;
pub use scope_boundedness::ScopeBoundednessChecker;

use crate::check::Checker;

/// The standard battery in canonical audit order.
pub fn default_checkers() -> Vec<Box<dyn Checker>> {
    vec![
        Box::new(CompletenessChecker),
        Box::new(ForbiddenDataChecker),
        Box::new(ActionBoundaryChecker),
        Box::new(ScopeBoundednessChecker),
    ]
}
