//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates fitting and prediction:
//! - Input validation
//! - Design-matrix assembly and solver dispatch
//! - The fitted-model output type
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Evaluation
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fit and predict orchestration.
pub mod executor;

/// Fitted model state.
pub mod output;

/// Input validation.
pub mod validator;
