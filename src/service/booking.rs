use chrono::Duration;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    config::BookingPolicy,
    data::{
        booking::BookingRepository, bus::BusRepository,
        detailing_service::DetailingServiceRepository, user::UserRepository,
        vehicle::VehicleRepository,
    },
    error::AppError,
    model::{
        booking::{
            Booking, BookingDetails, BookingKind, BookingStatus, BusSeatDetails,
            CarsharingDetails, CreateBusSeatBooking, CreateCarsharingBooking,
            CreateDetailingBooking, DetailingDetails, NewBooking,
        },
        interval::BookingInterval,
        notification::NotificationKind,
    },
    pricing,
    service::{locks::ResourceLocks, notification::NotificationService},
};

/// Booking lifecycle: creation, confirmation, cancellation, completion.
///
/// Every creation path re-checks availability inside a transaction while
/// holding the per-resource lock, so the check and the insert are atomic
/// with respect to the resource. A commit-time conflict surfaces as
/// `ResourceUnavailable` and leaves no partial state - the booking row
/// and any resource flag flip land together or not at all.
///
/// Bookings are never deleted. Status transitions are the only mutation
/// after creation, which keeps the full audit trail intact.
pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
    locks: &'a ResourceLocks,
    policy: BookingPolicy,
    notifier: NotificationService,
}

impl<'a> BookingService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        locks: &'a ResourceLocks,
        policy: BookingPolicy,
        notifier: NotificationService,
    ) -> Self {
        Self {
            db,
            locks,
            policy,
            notifier,
        }
    }

    /// Books a vehicle.
    ///
    /// The vehicle must exist, be approved, still be flagged available,
    /// and have no overlapping pending/confirmed booking at commit time.
    /// On success the vehicle's availability flag flips off in the same
    /// transaction: carsharing vehicles are single-occupancy regardless
    /// of interval placement.
    ///
    /// An open-ended request (no end time) books the policy default
    /// duration.
    ///
    /// # Returns
    /// - `Ok(Booking)`: The created booking, status `pending`
    /// - `Err(AppError::NotFound)`: Unknown vehicle
    /// - `Err(AppError::ResourceUnavailable)`: Vehicle held or conflicted
    /// - `Err(AppError::Validation)`: Malformed interval or rate schedule
    pub async fn create_carsharing(
        &self,
        params: CreateCarsharingBooking,
    ) -> Result<Booking, AppError> {
        let interval = BookingInterval::from_open_ended(
            params.start_time,
            params.end_time,
            self.policy.default_duration_hours,
        )?;

        let _guard = self
            .locks
            .acquire(BookingKind::Carsharing, params.vehicle_id)
            .await;
        let txn = self.db.begin().await?;

        let vehicle = VehicleRepository::new(&txn)
            .get_by_id(params.vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Vehicle {} not found", params.vehicle_id)))?;

        if !vehicle.is_approved || !vehicle.is_available {
            return Err(AppError::ResourceUnavailable(format!(
                "Vehicle {} is not available",
                vehicle.id
            )));
        }

        let conflicts = BookingRepository::new(&txn)
            .find_conflicting(
                BookingKind::Carsharing,
                vehicle.id,
                &BookingStatus::CARSHARING_ACTIVE,
                &interval,
            )
            .await?;
        if !conflicts.is_empty() {
            return Err(AppError::ResourceUnavailable(format!(
                "Vehicle {} already has a booking overlapping the requested interval",
                vehicle.id
            )));
        }

        let total_price =
            pricing::carsharing_price(vehicle.hourly_rate, vehicle.daily_rate, &interval)?;

        let details = BookingDetails::Carsharing(CarsharingDetails {
            vehicle_id: vehicle.id,
            driver_id: vehicle.owner_id,
            pickup: params.pickup,
            dropoff: params.dropoff,
        });

        let header = BookingRepository::new(&txn)
            .create(
                &NewBooking {
                    user_id: params.user_id,
                    kind: details.kind(),
                    resource_id: details.resource_id(),
                    status: BookingStatus::Pending,
                    start_time: interval.start(),
                    end_time: Some(interval.end()),
                    total_price,
                },
                &details,
            )
            .await?;

        VehicleRepository::new(&txn)
            .set_available(vehicle.id, false)
            .await?;

        txn.commit().await?;

        self.notify_quietly(
            vehicle.owner_id,
            "New booking request",
            &format!("Your vehicle has a new booking request #{}", header.id),
            header.id,
        )
        .await;

        Booking::from_parts(header, details)
    }

    /// Books a detailing job.
    ///
    /// The service must exist and be active; the provider must exist,
    /// offer detailing, and be free of confirmed/in-progress bookings
    /// overlapping the job window (start plus the service's duration).
    /// Detailing bookings enter the lifecycle at `confirmed` - there is
    /// no payment-gating step before provider commitment.
    pub async fn create_detailing(
        &self,
        params: CreateDetailingBooking,
    ) -> Result<Booking, AppError> {
        let _guard = self
            .locks
            .acquire(BookingKind::Detailing, params.provider_id)
            .await;
        let txn = self.db.begin().await?;

        let service = DetailingServiceRepository::new(&txn)
            .get_by_id(params.service_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Service {} not found", params.service_id)))?;
        if !service.is_active {
            return Err(AppError::ResourceUnavailable(format!(
                "Service {} is not active",
                service.id
            )));
        }

        let provider = UserRepository::new(&txn)
            .get_by_id(params.provider_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Provider {} not found", params.provider_id))
            })?;
        if !provider.is_detailing_provider {
            return Err(AppError::Validation(format!(
                "User {} is not a detailing provider",
                provider.id
            )));
        }

        let interval = BookingInterval::new(
            params.start_time,
            params.start_time + Duration::minutes(i64::from(service.duration_minutes)),
        )?;

        let conflicts = BookingRepository::new(&txn)
            .find_conflicting(
                BookingKind::Detailing,
                provider.id,
                &BookingStatus::DETAILING_ACTIVE,
                &interval,
            )
            .await?;
        if !conflicts.is_empty() {
            return Err(AppError::ResourceUnavailable(format!(
                "Provider {} already has a job overlapping the requested interval",
                provider.id
            )));
        }

        let details = BookingDetails::Detailing(DetailingDetails {
            service_id: service.id,
            provider_id: provider.id,
            vehicle_id: params.vehicle_id,
            location: params.location,
            notes: params.notes,
        });

        let header = BookingRepository::new(&txn)
            .create(
                &NewBooking {
                    user_id: params.user_id,
                    kind: details.kind(),
                    resource_id: details.resource_id(),
                    status: BookingStatus::Confirmed,
                    start_time: interval.start(),
                    end_time: Some(interval.end()),
                    total_price: service.base_price,
                },
                &details,
            )
            .await?;

        txn.commit().await?;

        self.notify_quietly(
            provider.id,
            "New detailing job",
            &format!("You have a new confirmed detailing job #{}", header.id),
            header.id,
        )
        .await;

        Booking::from_parts(header, details)
    }

    /// Books a bus seat.
    ///
    /// The seat flag flip and the booking insert commit in one
    /// transaction: there is never a booked seat without a booking row or
    /// the reverse. The booking's start time is the route departure; it
    /// has no end time and never participates in overlap checks - the
    /// seat flag is the whole reservation.
    pub async fn create_bus_seat(
        &self,
        params: CreateBusSeatBooking,
    ) -> Result<Booking, AppError> {
        let _guard = self
            .locks
            .acquire(BookingKind::BusSeat, params.seat_id)
            .await;
        let txn = self.db.begin().await?;

        let bus = BusRepository::new(&txn);
        let seat = bus
            .get_seat(params.seat_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Seat {} not found", params.seat_id)))?;
        if seat.is_booked {
            return Err(AppError::ResourceUnavailable(format!(
                "Seat {} is already booked",
                seat.id
            )));
        }

        let route = bus
            .get_route(seat.route_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Route {} not found", seat.route_id)))?;

        bus.mark_seat_booked(seat.id, params.user_id).await?;

        let details = BookingDetails::BusSeat(BusSeatDetails {
            route_id: route.id,
            seat_id: seat.id,
            agency_id: route.agency_id,
            notes: params.notes,
        });

        let header = BookingRepository::new(&txn)
            .create(
                &NewBooking {
                    user_id: params.user_id,
                    kind: details.kind(),
                    resource_id: details.resource_id(),
                    status: BookingStatus::Pending,
                    start_time: route.departure_time,
                    end_time: None,
                    total_price: route.price,
                },
                &details,
            )
            .await?;

        txn.commit().await?;

        Booking::from_parts(header, details)
    }

    /// Confirms a pending booking. Payment completion drives this.
    pub async fn confirm(&self, booking_id: i32) -> Result<Booking, AppError> {
        self.transition(booking_id, BookingStatus::Confirmed).await
    }

    /// Moves a confirmed booking into progress (a detailing provider
    /// starting the job).
    pub async fn start(&self, booking_id: i32) -> Result<Booking, AppError> {
        self.transition(booking_id, BookingStatus::InProgress).await
    }

    /// Completes a booking, which authorizes review submission.
    pub async fn complete(&self, booking_id: i32) -> Result<Booking, AppError> {
        let booking = self.transition(booking_id, BookingStatus::Completed).await?;

        self.notify_quietly(
            booking.user_id,
            "Booking completed",
            &format!("Booking #{} is complete. You can now leave a review.", booking.id),
            booking.id,
        )
        .await;

        Ok(booking)
    }

    /// Cancels a booking.
    ///
    /// Only the original requester may cancel, and only from a
    /// non-terminal status. Whether cancellation releases the held
    /// vehicle/seat is a policy switch; by default it does not, and the
    /// resource stays held until an operator intervenes.
    ///
    /// # Returns
    /// - `Ok(Booking)`: The canceled booking
    /// - `Err(AppError::NotFound)`: Unknown booking id
    /// - `Err(AppError::Forbidden)`: Caller is not the requester
    /// - `Err(AppError::InvalidTransition)`: Booking already terminal
    pub async fn cancel(&self, booking_id: i32, requester_id: i32) -> Result<Booking, AppError> {
        let header = BookingRepository::new(self.db)
            .get_by_id(booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", booking_id)))?;

        if header.user_id != requester_id {
            return Err(AppError::Forbidden(
                "Only the requester may cancel a booking".to_string(),
            ));
        }

        let status = BookingStatus::parse(&header.status)?;
        let kind = BookingKind::parse(&header.kind)?;
        if !status.can_transition_to(BookingStatus::Canceled) {
            return Err(AppError::InvalidTransition {
                from: status,
                to: BookingStatus::Canceled,
            });
        }

        let _guard = self.locks.acquire(kind, header.resource_id).await;
        let txn = self.db.begin().await?;

        let updated = BookingRepository::new(&txn)
            .update_status(booking_id, BookingStatus::Canceled)
            .await?;

        if self.policy.release_resources_on_cancel {
            match kind {
                BookingKind::Carsharing => {
                    VehicleRepository::new(&txn)
                        .set_available(header.resource_id, true)
                        .await?;
                }
                BookingKind::BusSeat => {
                    BusRepository::new(&txn)
                        .release_seat(header.resource_id)
                        .await?;
                }
                // Provider availability is derived from bookings alone;
                // the canceled row already stopped counting.
                BookingKind::Detailing => {}
            }
        }

        txn.commit().await?;

        let booking = self.assemble(updated).await?;
        if let Some(counterparty) = counterparty_of(&booking.details) {
            self.notify_quietly(
                counterparty,
                "Booking canceled",
                &format!("Booking #{} was canceled by the customer.", booking.id),
                booking.id,
            )
            .await;
        }

        Ok(booking)
    }

    /// Gets one booking with its payload.
    pub async fn get(&self, booking_id: i32) -> Result<Booking, AppError> {
        let header = BookingRepository::new(self.db)
            .get_by_id(booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", booking_id)))?;

        self.assemble(header).await
    }

    /// Gets a user's active bookings, soonest first.
    pub async fn upcoming_for_user(&self, user_id: i32) -> Result<Vec<Booking>, AppError> {
        let headers = BookingRepository::new(self.db)
            .upcoming_for_user(user_id)
            .await?;

        let mut bookings = Vec::with_capacity(headers.len());
        for header in headers {
            bookings.push(self.assemble(header).await?);
        }
        Ok(bookings)
    }

    /// Gets a user's finished bookings, newest first, capped at 20.
    pub async fn history_for_user(&self, user_id: i32) -> Result<Vec<Booking>, AppError> {
        let headers = BookingRepository::new(self.db)
            .history_for_user(user_id, 20)
            .await?;

        let mut bookings = Vec::with_capacity(headers.len());
        for header in headers {
            bookings.push(self.assemble(header).await?);
        }
        Ok(bookings)
    }

    /// Applies a lifecycle transition, enforcing the state machine.
    async fn transition(&self, booking_id: i32, to: BookingStatus) -> Result<Booking, AppError> {
        let header = BookingRepository::new(self.db)
            .get_by_id(booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", booking_id)))?;

        let from = BookingStatus::parse(&header.status)?;
        if !from.can_transition_to(to) {
            return Err(AppError::InvalidTransition { from, to });
        }

        let updated = BookingRepository::new(self.db)
            .update_status(booking_id, to)
            .await?;

        self.assemble(updated).await
    }

    /// Joins a header row with its payload into the domain view.
    async fn assemble(&self, header: entity::booking::Model) -> Result<Booking, AppError> {
        let kind = BookingKind::parse(&header.kind)?;
        let details = BookingRepository::new(self.db)
            .get_details(kind, header.id)
            .await?
            .ok_or_else(|| {
                AppError::Internal(format!("Booking {} has no {} payload", header.id, kind))
            })?;

        Booking::from_parts(header, details)
    }

    /// Best-effort notification; a failure is logged and swallowed so it
    /// never disturbs a booking outcome that already committed.
    async fn notify_quietly(&self, user_id: i32, title: &str, message: &str, booking_id: i32) {
        if let Err(err) = self
            .notifier
            .send(user_id, title, message, NotificationKind::Booking, Some(booking_id))
            .await
        {
            tracing::warn!("notification for booking {booking_id} failed: {err}");
        }
    }
}

/// The other party to notify about lifecycle changes: the driver for
/// carsharing, the provider for detailing. Bus agencies are not users.
fn counterparty_of(details: &BookingDetails) -> Option<i32> {
    match details {
        BookingDetails::Carsharing(d) => Some(d.driver_id),
        BookingDetails::Detailing(d) => Some(d.provider_id),
        BookingDetails::BusSeat(_) => None,
    }
}
