use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, DbErr};
use test_utils::{builder::TestBuilder, factory};

use crate::{
    data::{
        booking::BookingRepository,
        payment::PaymentRepository,
    },
    error::AppError,
    model::{
        booking::{BookingDetails, BookingKind, BookingStatus, CarsharingDetails, NewBooking},
        location::Location,
        payment::ChargeOutcome,
    },
    service::payment::{PaymentGateway, PaymentService},
};


/// Gateway double with a scripted response.
struct ScriptedGateway {
    response: Result<ChargeOutcome, String>,
}

impl ScriptedGateway {
    fn approving() -> Arc<Self> {
        Arc::new(Self {
            response: Ok(ChargeOutcome {
                approved: true,
                reference: Some("ch_test_1".to_string()),
            }),
        })
    }

    fn declining() -> Arc<Self> {
        Arc::new(Self {
            response: Ok(ChargeOutcome {
                approved: false,
                reference: None,
            }),
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            response: Err("connection reset".to_string()),
        })
    }
}

#[async_trait]
impl PaymentGateway for ScriptedGateway {
    async fn charge(
        &self,
        _booking_id: i32,
        _amount: Decimal,
        _method: &str,
    ) -> Result<ChargeOutcome, AppError> {
        self.response
            .clone()
            .map_err(AppError::Upstream)
    }
}

fn hours_from_now(hours: i64) -> DateTime<Utc> {
    Utc::now() + Duration::hours(hours)
}

/// Creates a pending carsharing booking priced 20.00 for the customer.
async fn pending_booking(
    db: &DatabaseConnection,
    customer_id: i32,
) -> Result<entity::booking::Model, DbErr> {
    let owner = factory::user::create_driver(db).await?;
    let vehicle = factory::vehicle::VehicleFactory::new(db, owner.id).build().await?;

    BookingRepository::new(db)
        .create(
            &NewBooking {
                user_id: customer_id,
                kind: BookingKind::Carsharing,
                resource_id: vehicle.id,
                status: BookingStatus::Pending,
                start_time: hours_from_now(1),
                end_time: Some(hours_from_now(3)),
                total_price: Decimal::new(2000, 2),
            },
            &BookingDetails::Carsharing(CarsharingDetails {
                vehicle_id: vehicle.id,
                driver_id: owner.id,
                pickup: Location::new("1 Vitosha Blvd", 42.6977, 23.3219),
                dropoff: None,
            }),
        )
        .await
}
