mod product;
pub use self::product::{Product, ProductID, ProductList, ProductMeta};

mod category;
pub use self::category::Category;

mod testimonial;
pub use self::testimonial::Testimonial;
