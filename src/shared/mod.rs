pub mod geo;
pub mod types;

#[cfg(test)]
pub mod test_helpers;
