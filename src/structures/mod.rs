pub mod poly;
pub mod roots;
