pub mod alumni;
pub mod company;
