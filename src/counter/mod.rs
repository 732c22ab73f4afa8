mod sloc;

pub use sloc::{LineStats, count_lines};
