pub mod balance;
pub mod planner;
pub mod suggestion;
