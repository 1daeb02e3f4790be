// Free-form conversion queries: "2 inch to cm", "#efadbd to hsl".

pub mod executor;
pub mod formatter;
pub mod parser;

#[cfg(test)]
mod tests;

pub use executor::*;
pub use formatter::*;
pub use parser::*;
