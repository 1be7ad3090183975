pub mod balance_scorer;
pub mod balance_service;
pub mod planner_service;
pub mod prompt_templates;
pub mod suggestion_service;
