pub mod category_management;
pub mod product_form;
pub mod product_management;

pub use category_management::CategoryManagement;
pub use product_form::ProductForm;
pub use product_management::ProductManagement;
