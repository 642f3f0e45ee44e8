mod blocking;
pub mod drive;
#[cfg(test)]
mod fake;
pub mod utils;

pub use blocking::download_file_blocking;
