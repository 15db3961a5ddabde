// Adapters layer: concrete counter stores behind the `CounterStore` port.

#[cfg(feature = "dynamodb")]
pub mod dynamodb;
pub mod memory;
