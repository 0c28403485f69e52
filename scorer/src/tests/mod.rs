#[cfg(test)]
mod common;
#[cfg(test)]
mod test_config;
#[cfg(test)]
mod test_distance;
