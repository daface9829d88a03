pub mod booking_transaction;
pub mod category;
pub mod home_service;
pub mod service_benefit;
pub mod service_testimonial;
pub mod transaction_detail;

pub use booking_transaction::Entity as BookingTransaction;
pub use category::Entity as Category;
pub use home_service::Entity as HomeService;
pub use service_benefit::Entity as ServiceBenefit;
pub use service_testimonial::Entity as ServiceTestimonial;
pub use transaction_detail::Entity as TransactionDetail;
