pub mod dimacs;

pub use dimacs::{read_gr, read_gr_file};
