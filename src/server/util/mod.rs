pub mod shutdown;
pub mod sigv4;
