//! Native overlay panels. WASM builds render these in the web frontend instead,
//! fed by RPC notifications.

/// Title, top deals, selected item details, region line, instructions and FPS counter.
pub mod panels;
