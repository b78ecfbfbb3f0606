//! Entry/exit workflow over the allocator, the store, and the clock.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::allocator::SpotAllocator;
use crate::clock::Clock;
use crate::error::CoreError;
use crate::fare;
use crate::store::TicketStore;
use crate::ticket::Ticket;
use crate::types::DbId;
use crate::vehicle::VehicleType;

/// Orchestrates vehicle entry and exit.
///
/// The spot table sits behind an async mutex and is claimed through
/// [`SpotAllocator::allocate`], so two concurrent entries can never be
/// handed the same spot.
pub struct ParkingService {
    allocator: Mutex<SpotAllocator>,
    store: Arc<dyn TicketStore>,
    clock: Arc<dyn Clock>,
}

impl ParkingService {
    pub fn new(
        allocator: SpotAllocator,
        store: Arc<dyn TicketStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            allocator: Mutex::new(allocator),
            store,
            clock,
        }
    }

    /// Handle a vehicle entering the facility.
    ///
    /// Rejects duplicate registrations before touching the spot table,
    /// resolves the recurring-customer flag, claims a spot, and persists
    /// the occupancy flag plus the new ticket. If persistence fails the
    /// claim is rolled back so an unavailable spot always corresponds to
    /// a saved open ticket.
    pub async fn park_vehicle(
        &self,
        vehicle_type: VehicleType,
        vehicle_reg_number: &str,
    ) -> Result<Ticket, CoreError> {
        if self.store.is_already_parked(vehicle_reg_number).await? {
            tracing::warn!(reg = %vehicle_reg_number, "Entry rejected: vehicle already parked");
            return Err(CoreError::AlreadyParked(vehicle_reg_number.to_string()));
        }

        let regular_customer = self.store.is_regular_customer(vehicle_reg_number).await?;

        let spot_id = self
            .allocator
            .lock()
            .await
            .allocate(vehicle_type)
            .ok_or(CoreError::SpotUnavailable(vehicle_type))?;

        let ticket = Ticket::open(
            vehicle_reg_number,
            spot_id,
            vehicle_type,
            regular_customer,
            self.clock.now(),
        );

        if let Err(err) = self.store.mark_spot(spot_id, false).await {
            self.rollback_claim(spot_id).await;
            return Err(err);
        }

        match self.store.save_ticket(ticket).await {
            Ok(saved) => {
                tracing::info!(
                    reg = %saved.vehicle_reg_number,
                    spot = spot_id,
                    vehicle = %vehicle_type,
                    regular = regular_customer,
                    "Vehicle parked"
                );
                Ok(saved)
            }
            Err(err) => {
                self.rollback_claim(spot_id).await;
                if let Err(undo) = self.store.mark_spot(spot_id, true).await {
                    tracing::error!(
                        spot = spot_id,
                        error = %undo,
                        "Failed to free spot after ticket save failure"
                    );
                }
                Err(err)
            }
        }
    }

    /// Handle a vehicle leaving the facility.
    ///
    /// Prices the stay, persists the closed ticket, and only then frees
    /// the spot. If the ticket update fails the spot stays occupied, so
    /// it cannot be handed out while the record still shows an open stay.
    pub async fn exit_vehicle(&self, vehicle_reg_number: &str) -> Result<Ticket, CoreError> {
        let mut ticket = self
            .store
            .get_open_ticket(vehicle_reg_number)
            .await?
            .ok_or_else(|| CoreError::TicketNotFound(vehicle_reg_number.to_string()))?;

        let out_time = self.clock.now();
        let price = fare::price_stay(
            ticket.vehicle_type,
            ticket.in_time,
            out_time,
            ticket.regular_customer,
        )?;
        ticket.close(out_time, price);

        self.store.update_ticket(&ticket).await?;

        self.allocator.lock().await.release(ticket.spot_id)?;
        self.store.mark_spot(ticket.spot_id, true).await?;

        tracing::info!(
            reg = %ticket.vehicle_reg_number,
            spot = ticket.spot_id,
            price,
            "Vehicle exited"
        );
        Ok(ticket)
    }

    /// Free and total spot counts for one vehicle type.
    pub async fn availability(&self, vehicle_type: VehicleType) -> (usize, usize) {
        self.allocator.lock().await.availability(vehicle_type)
    }

    // Undo an in-memory claim after a persistence failure. The spot was
    // claimed a moment ago, so release can only fail if the table itself
    // is gone.
    async fn rollback_claim(&self, spot_id: DbId) {
        if let Err(err) = self.allocator.lock().await.release(spot_id) {
            tracing::error!(spot = spot_id, error = %err, "Failed to roll back spot claim");
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
