pub mod comparators;
pub mod evaluator;
pub mod grading_service;
pub mod review_service;
pub mod scoring;
