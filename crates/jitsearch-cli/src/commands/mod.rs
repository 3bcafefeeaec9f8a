pub mod dump;
pub mod exec;
pub mod input;

#[cfg(test)]
mod dump_tests;
#[cfg(test)]
mod input_tests;
