pub mod assemble;
pub mod group;
pub mod model;
