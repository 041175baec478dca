pub use super::booking::Entity as Booking;
pub use super::bus_agency::Entity as BusAgency;
pub use super::bus_route::Entity as BusRoute;
pub use super::bus_seat::Entity as BusSeat;
pub use super::bus_seat_booking::Entity as BusSeatBooking;
pub use super::carsharing_booking::Entity as CarsharingBooking;
pub use super::detailing_booking::Entity as DetailingBooking;
pub use super::detailing_service::Entity as DetailingService;
pub use super::notification::Entity as Notification;
pub use super::payment::Entity as Payment;
pub use super::review::Entity as Review;
pub use super::user::Entity as User;
pub use super::vehicle::Entity as Vehicle;
