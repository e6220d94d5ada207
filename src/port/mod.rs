//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!        ┌─────────────────────────┐
//!        │   Bootstrap / CLI       │
//!        └────────────┬────────────┘
//!                     │
//!             ┌───────▼────────┐
//!             │ Domain + Port  │
//!             └───────┬────────┘
//!                     │
//!              ┌──────▼──────┐
//!              │   SQLite    │
//!              │   Adapter   │
//!              └─────────────┘
//! ```

pub mod outbound;
