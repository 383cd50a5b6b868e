pub mod cards;
pub mod forms;
