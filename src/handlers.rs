pub mod health;
pub mod site;
