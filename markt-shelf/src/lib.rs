pub mod product;
pub mod shelf;

pub use product::{Marketability, Product, ProductStatus};
pub use shelf::Shelf;
