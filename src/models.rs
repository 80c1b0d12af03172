pub mod internal;
pub mod scale_table;
