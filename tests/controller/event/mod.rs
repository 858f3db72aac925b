pub mod decide;
pub mod submit;
