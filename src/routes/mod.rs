//! Route handlers outside the pricing engine

pub mod health;
