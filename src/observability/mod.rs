//! Observability infrastructure: logging setup, run context and crash
//! reports.
//!
//! ```ignore
//! use algolab::observability::{init_tracing, install_panic_hook};
//!
//! fn main() {
//!     install_panic_hook();
//!     init_tracing(0);
//!     // ... run pipelines
//! }
//! ```

pub mod context;
pub mod panic_hook;
pub mod tracing;

pub use context::{
    get_current_context, reset_context, set_program, set_stage, ContextGuard, RunContext, Stage,
};
pub use panic_hook::install_panic_hook;
pub use self::tracing::{init_fixed_tracing, init_tracing, level_for_verbosity};
