/// Pure helper modules (no I/O)
pub mod dates;
pub mod formatter;
