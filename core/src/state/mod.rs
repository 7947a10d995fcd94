// shoplist/src/state/mod.rs
pub mod clock;
pub mod events;
pub mod shared;
pub mod subscribers;

pub use clock::{Clock, FixedClock, SystemClock};
pub use events::ListEvent;
pub use shared::SharedList;
pub use subscribers::{Listener, SubscriptionId, Subscribers};
