pub mod controls;
pub mod selection;
