//! # Route Modules
//!
//! | Prefix              | Module        |
//! |---------------------|---------------|
//! | `/api/v1/analysis/*`| [`analysis`]  |
//! | `/health/*`         | [`health`]    |

pub mod analysis;
pub mod health;
