//! E-commerce Order Returns
//!
//! This example walks orders through a process-wide transition table.
//!
//! Key concepts:
//! - One `static` table declared at startup, shared by every attempt
//! - A fresh machine per operation, derived at the stored order state
//! - Typed rejections for wrong-state and unknown events
//! - Mermaid export of the table
//!
//! Run with: RUST_LOG=debug cargo run --example order_processing

use fsm_table::{
    label_enum, DispatchError, MemoryStateSource, SourceError, StateSource, Stateful,
    TransitionTable,
};
use std::sync::LazyLock;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

label_enum! {
    enum OrderEvent {
        Placed => "Order.Placed",
        Shipped => "Order.Shipped",
        Cancelled => "Order.Cancelled",
        Delivered => "Order.Delivered",
        ReturnRequested => "Order.ReturnRequested",
        Refunded => "Order.Refunded",
    }
}

label_enum! {
    enum OrderState {
        AwaitingPayment,
        Confirmed,
        Shipped,
        Delivered,
        Cancelled,
        ReturnInProgress,
        Refunded,
    }
}

static ORDER_FSM: LazyLock<TransitionTable<OrderEvent, OrderState>> = LazyLock::new(|| {
    TransitionTable::new(OrderState::AwaitingPayment)
        .declare(OrderEvent::Placed, OrderState::AwaitingPayment, OrderState::Confirmed)
        .declare(OrderEvent::Shipped, OrderState::Confirmed, OrderState::Shipped)
        .declare(OrderEvent::Delivered, OrderState::Shipped, OrderState::Delivered)
        .declare(OrderEvent::Cancelled, OrderState::Confirmed, OrderState::Cancelled)
        .declare(OrderEvent::ReturnRequested, OrderState::Shipped, OrderState::ReturnInProgress)
        .declare(OrderEvent::ReturnRequested, OrderState::Delivered, OrderState::ReturnInProgress)
        .declare(OrderEvent::Refunded, OrderState::ReturnInProgress, OrderState::Refunded)
});

#[derive(Clone, Debug)]
struct Order {
    id: u64,
    state: OrderState,
}

impl Stateful<OrderState> for Order {
    fn current_state(&self) -> OrderState {
        self.state
    }
}

#[derive(Debug, Error)]
enum OrderError {
    #[error(transparent)]
    Transition(#[from] DispatchError<OrderEvent, OrderState>),
    #[error(transparent)]
    Source(#[from] SourceError),
}

fn request_return(orders: &MemoryStateSource<u64, Order>, id: u64) -> Result<Order, OrderError> {
    let mut order = orders.fetch(&id)?;
    let mut machine = ORDER_FSM.machine_for(&order);

    machine.act(OrderEvent::ReturnRequested, |next| {
        println!("  order {} -> {:?}", order.id, next);
        order.state = *next;
        Ok::<_, OrderError>(())
    })?;

    Ok(order)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Order Returns Example ===\n");

    let orders = MemoryStateSource::new()
        .with(1, Order { id: 1, state: OrderState::Delivered })
        .with(2, Order { id: 2, state: OrderState::Cancelled })
        .with(3, Order { id: 3, state: OrderState::AwaitingPayment });

    for id in [1, 2, 3, 4] {
        println!("Return request for order {id}:");
        match request_return(&orders, id) {
            Ok(order) => println!("  accepted, now {:?}", order.state),
            Err(err) => println!("  rejected: {err}"),
        }
    }

    println!("\nStates: {:?}", ORDER_FSM.states());
    println!("\nTransition graph:{}", ORDER_FSM.mermaid());

    println!("=== Example Complete ===");
}
