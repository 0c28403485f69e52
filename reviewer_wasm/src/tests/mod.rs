#[cfg(test)]
mod test_converter;
