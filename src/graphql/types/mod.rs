mod category;
mod package;
mod service;
mod user;

pub use category::Category;
pub use package::SellerPackageTier;
pub use service::Service;
pub use user::User;
