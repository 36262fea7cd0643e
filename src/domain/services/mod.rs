pub mod catalog;
pub mod ledger;
pub mod seed;
pub mod validation;
