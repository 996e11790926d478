pub mod apply;
pub mod kinds;
