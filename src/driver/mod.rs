pub mod matrix_parse;
pub mod solver;
