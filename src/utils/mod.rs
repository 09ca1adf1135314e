pub(crate) mod io;

pub(crate) use io::{read_text, write_text};
