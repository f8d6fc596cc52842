pub mod date_range;
pub mod outside_click;
