#[cfg(test)]
mod common;
#[cfg(test)]
mod review_dsl;
