//! JSON-RPC 2.0 communication layer for web frontend integration.
//!
//! Implements bidirectional messaging between the Bevy scene and a web UI via
//! iframe postMessage, supporting both request-response and notification patterns.
//!
//! ## Message Flow
//!
//! ```text
//! Frontend (Parent Window)  <──postMessage──>  Bevy (iframe)
//!        │                                        │
//!        ├─ Request (with ID) ──────────────────> │
//!        │                                        ├─ Process request
//!        │ <───────────────── Response (with ID) ─┤
//!        │                                        │
//!        │ <────────── Notification (no ID) ─────┤
//! ```
//!
//! ## Adding New RPC Methods
//!
//! Add a method case in `handle_rpc_request()` and a handler returning
//! `Result<Value, RpcError>`. Handlers read scene state through `RpcContext`;
//! anything that mutates state goes out as an event so keyboard and RPC input
//! share one path.
//!
//! ## Error Handling
//!
//! Standard JSON-RPC 2.0 error codes:
//! - `-32601`: Method not found
//! - `-32602`: Invalid params
//! - `-32603`: Internal error
//!
//! ## Requests
//!
//! - `get_top_deals {limit?}`: ranked leaderboard, defaulting to the configured size
//! - `get_item_details {id}`: details and derived metrics for one cartridge
//! - `get_selection`: details of the selected cartridge, or null
//! - `set_region {region}`: change the region filter (ALL, JP, US, EU)
//! - `get_region`: current region filter
//! - `get_fps`: current frame rate
//!
//! ## Notifications
//!
//! - `scene_ready {item_count, top_deals}`
//! - `selection_changed {selected, previous}`
//! - `hover_changed {id, hovered}`
//! - `region_changed {region}`
//! - `fps_update {fps}`
//!
//! Native builds have no parent window; outgoing messages are drained and dropped.

/// Hover and selection broadcasts.
pub mod notifications;

/// JSON-RPC 2.0 bidirectional communication system for web integration.
///
/// Handles request-response patterns, notifications, and WASM message listeners.
pub mod web_rpc;
