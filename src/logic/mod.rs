pub mod assemble;
pub mod normalize;
pub mod rules;

pub use rules::AssessmentEngine;
