#[cfg(test)]
mod common;

#[cfg(test)]
mod profile_client_tests;

#[cfg(test)]
mod profile_error_tests;
