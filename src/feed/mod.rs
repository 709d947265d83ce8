//! Feed-Grenze: Schema-Validierung, HTTP-Client, Hintergrund-Task.

pub mod client;
pub mod schema;
pub mod task;

pub use client::FeedClient;
pub use schema::{FeatureGeometry, FeatureProperties, PharmacyCollection, PharmacyFeature};
pub use task::{FeedEvent, FeedTask};
